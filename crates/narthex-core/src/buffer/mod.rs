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

//! Buffer handles and the host buffer-table capability.
//!
//! The host runtime owns a process-wide table of binary buffers. This module
//! defines the opaque [`BufferHandle`] referencing an entry in that table,
//! the [`BufferTable`] trait through which the staging pipeline allocates
//! entries, and the [`StagedBuffer`] object produced once a resource's bytes
//! have been filed under a handle.

mod handle;
mod table;

pub use handle::*;
pub use table::*;

/// A registered buffer, tagged with the resource name it was staged under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedBuffer {
    /// The manifest name this buffer resolves.
    pub name: String,
    /// The handle into the host buffer table holding the bytes.
    pub handle: BufferHandle,
}
