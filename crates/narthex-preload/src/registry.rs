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

//! The name-keyed registry of staged buffers.

use narthex_core::buffer::{BufferHandle, BufferTable, StagedBuffer};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Maps resource names to the buffers staged for them.
///
/// The registry is append-only during the staging phase and safe to share
/// across concurrent completions. Allocation goes through the injected
/// [`BufferTable`]; the registry never owns bytes itself.
pub struct BufferRegistry {
    table: Arc<dyn BufferTable>,
    staged: RwLock<HashMap<String, StagedBuffer>>,
}

impl BufferRegistry {
    /// Creates an empty registry allocating from `table`.
    pub fn new(table: Arc<dyn BufferTable>) -> Self {
        Self {
            table,
            staged: RwLock::new(HashMap::new()),
        }
    }

    /// Requests a handle for `bytes` from the host buffer table, tags it
    /// with `name`, and inserts it.
    ///
    /// A name collision is resolved last-write-wins: under concurrent
    /// completion the winner is whichever task registers last, and no
    /// warning is emitted.
    pub fn register(&self, name: &str, bytes: &[u8]) -> BufferHandle {
        let handle = self.table.create_from_bytes(bytes);
        let staged = StagedBuffer {
            name: name.to_string(),
            handle,
        };
        self.staged.write().unwrap().insert(name.to_string(), staged);
        log::debug!("registered buffer '{name}' as {handle:?} ({} bytes)", bytes.len());
        handle
    }

    /// Returns the staged buffer registered under `name`.
    pub fn get(&self, name: &str) -> Option<StagedBuffer> {
        self.staged.read().unwrap().get(name).cloned()
    }

    /// Returns `true` if a buffer is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.staged.read().unwrap().contains_key(name)
    }

    /// Returns the number of registered buffers.
    pub fn len(&self) -> usize {
        self.staged.read().unwrap().len()
    }

    /// Returns `true` if nothing has been registered.
    pub fn is_empty(&self) -> bool {
        self.staged.read().unwrap().is_empty()
    }

    /// Returns the registered names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.staged.read().unwrap().keys().cloned().collect();
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use narthex_core::buffer::InMemoryBufferTable;

    fn registry_with_table() -> (Arc<InMemoryBufferTable>, BufferRegistry) {
        let table = Arc::new(InMemoryBufferTable::new());
        let registry = BufferRegistry::new(table.clone());
        (table, registry)
    }

    #[test]
    fn test_register_tags_buffer_with_name() {
        let (table, registry) = registry_with_table();
        let handle = registry.register("a", &[1, 2, 3]);

        let staged = registry.get("a").unwrap();
        assert_eq!(staged.name, "a");
        assert_eq!(staged.handle, handle);
        assert_eq!(table.bytes(handle), Some(vec![1, 2, 3]));
    }

    #[test]
    fn test_missing_name_is_absent() {
        let (_table, registry) = registry_with_table();
        assert!(registry.get("ghost").is_none());
        assert!(!registry.contains("ghost"));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_collision_keeps_the_later_registration() {
        let (table, registry) = registry_with_table();
        registry.register("a", &[1]);
        let second = registry.register("a", &[2]);

        assert_eq!(registry.len(), 1);
        let staged = registry.get("a").unwrap();
        assert_eq!(staged.handle, second);
        assert_eq!(table.bytes(staged.handle), Some(vec![2]));
    }

    #[test]
    fn test_names_are_sorted() {
        let (_table, registry) = registry_with_table();
        registry.register("b", &[2]);
        registry.register("a", &[1]);
        assert_eq!(registry.names(), vec!["a", "b"]);
    }
}
