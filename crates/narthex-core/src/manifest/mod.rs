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

//! The declarative set of named resources staged before startup.
//!
//! A [`ResourceManifest`] pairs each resource name with the
//! [`ResourceSource`] it resolves from. The pipeline enumerates it exactly
//! once, at pre-run time, in declaration order; completion order for
//! asynchronous sources is unordered and irrelevant to correctness.

mod source;
mod spec;

pub use source::*;
pub use spec::*;

/// A single declared resource: a name and the source it resolves from.
#[derive(Debug)]
pub struct ManifestEntry {
    /// The key the resolved buffer is registered under.
    pub name: String,
    /// Where the bytes come from.
    pub source: ResourceSource,
}

/// The ordered list of resources to stage before the runtime starts.
///
/// Names are expected to be unique; a duplicate is not rejected here, the
/// later completion simply wins in the registry.
#[derive(Debug, Default)]
pub struct ResourceManifest {
    entries: Vec<ManifestEntry>,
}

impl ResourceManifest {
    /// Creates an empty manifest.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Declares a resource. Declaration order is preserved.
    pub fn insert(&mut self, name: impl Into<String>, source: ResourceSource) {
        self.entries.push(ManifestEntry {
            name: name.into(),
            source,
        });
    }

    /// Returns the number of declared resources.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is declared.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Consumes the manifest into its entries, in declaration order.
    pub fn into_entries(self) -> Vec<ManifestEntry> {
        self.entries
    }
}

impl FromIterator<(String, ResourceSource)> for ResourceManifest {
    fn from_iter<I: IntoIterator<Item = (String, ResourceSource)>>(iter: I) -> Self {
        let mut manifest = Self::new();
        manifest.extend(iter);
        manifest
    }
}

impl Extend<(String, ResourceSource)> for ResourceManifest {
    fn extend<I: IntoIterator<Item = (String, ResourceSource)>>(&mut self, iter: I) {
        for (name, source) in iter {
            self.insert(name, source);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_preserves_declaration_order() {
        let mut manifest = ResourceManifest::new();
        manifest.insert("b", ResourceSource::bytes(vec![2]));
        manifest.insert("a", ResourceSource::bytes(vec![1]));
        manifest.insert("c", ResourceSource::remote("http://host/c.bin"));

        let names: Vec<String> = manifest
            .into_entries()
            .into_iter()
            .map(|entry| entry.name)
            .collect();
        assert_eq!(names, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_from_iterator_collects_entries() {
        let manifest: ResourceManifest = vec![
            ("a".to_string(), ResourceSource::bytes(vec![1])),
            ("b".to_string(), ResourceSource::remote("http://host/b.bin")),
        ]
        .into_iter()
        .collect();

        assert_eq!(manifest.len(), 2);
        assert!(!manifest.is_empty());
    }

    #[test]
    fn test_empty_manifest() {
        let manifest = ResourceManifest::new();
        assert!(manifest.is_empty());
        assert!(manifest.into_entries().is_empty());
    }
}
