// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

/// An opaque reference into the host-owned buffer table.
///
/// A handle says nothing about where or how the bytes are stored; only the
/// [`BufferTable`](super::BufferTable) that minted it can resolve it back to
/// data. Handles are cheap to copy and compare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BufferHandle(u64);

impl BufferHandle {
    /// Wraps a raw table index. Intended for [`BufferTable`](super::BufferTable)
    /// implementations; the staging pipeline never fabricates handles itself.
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw table index backing this handle.
    pub const fn as_raw(self) -> u64 {
        self.0
    }
}
