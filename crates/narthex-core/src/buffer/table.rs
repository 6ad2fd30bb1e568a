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

use super::BufferHandle;
use std::sync::RwLock;

/// The host capability for allocating entries in its buffer table.
///
/// The staging pipeline depends on this interface rather than on any
/// particular table; the host injects its own implementation at
/// construction time. Allocation is infallible: the table owns the bytes
/// and answers with the handle under which it filed them.
pub trait BufferTable: Send + Sync {
    /// Copies `bytes` into the table and returns the handle for the new entry.
    fn create_from_bytes(&self, bytes: &[u8]) -> BufferHandle;
}

/// A buffer table backed by process memory.
///
/// Hands out sequential handles and supports reading entries back, which
/// makes it the default collaborator for tests and demos. Hosts with a real
/// buffer table provide their own [`BufferTable`] implementation instead.
#[derive(Debug, Default)]
pub struct InMemoryBufferTable {
    slots: RwLock<Vec<Vec<u8>>>,
}

impl InMemoryBufferTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self {
            slots: RwLock::new(Vec::new()),
        }
    }

    /// Returns a copy of the bytes filed under `handle`, or `None` if the
    /// handle was not minted by this table.
    pub fn bytes(&self, handle: BufferHandle) -> Option<Vec<u8>> {
        let slots = self.slots.read().unwrap();
        slots.get(handle.as_raw() as usize).cloned()
    }

    /// Returns the number of entries in the table.
    pub fn len(&self) -> usize {
        self.slots.read().unwrap().len()
    }

    /// Returns `true` if the table holds no entries.
    pub fn is_empty(&self) -> bool {
        self.slots.read().unwrap().is_empty()
    }
}

impl BufferTable for InMemoryBufferTable {
    fn create_from_bytes(&self, bytes: &[u8]) -> BufferHandle {
        let mut slots = self.slots.write().unwrap();
        let handle = BufferHandle::from_raw(slots.len() as u64);
        slots.push(bytes.to_vec());
        handle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_returns_sequential_handles() {
        let table = InMemoryBufferTable::new();
        let first = table.create_from_bytes(&[1]);
        let second = table.create_from_bytes(&[2]);

        assert_ne!(first, second);
        assert_eq!(first.as_raw(), 0);
        assert_eq!(second.as_raw(), 1);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_bytes_reads_back_entry() {
        let table = InMemoryBufferTable::new();
        let handle = table.create_from_bytes(&[1, 2, 3]);

        assert_eq!(table.bytes(handle), Some(vec![1, 2, 3]));
    }

    #[test]
    fn test_bytes_unknown_handle_returns_none() {
        let table = InMemoryBufferTable::new();
        assert!(table.bytes(BufferHandle::from_raw(7)).is_none());
        assert!(table.is_empty());
    }
}
