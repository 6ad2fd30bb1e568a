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

use super::{ResourceManifest, ResourceSource};
use crate::error::ManifestError;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// How a declaratively-configured resource obtains its bytes.
///
/// Futures have no declarative form; they are only constructible through
/// [`ResourceSource::pending`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SourceSpec {
    /// A remote URL, written as a plain string.
    Remote(String),
    /// Bytes inlined into the configuration.
    Inline {
        /// The base64-encoded payload.
        base64: String,
    },
}

/// The declarative name → source table from host configuration.
///
/// Entries are lowered to the runtime manifest in name order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ManifestSpec(BTreeMap<String, SourceSpec>);

impl ManifestSpec {
    /// Parses a spec from its JSON representation.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Declares a resource, replacing any previous declaration of `name`.
    pub fn insert(&mut self, name: impl Into<String>, spec: SourceSpec) {
        self.0.insert(name.into(), spec);
    }

    /// Returns the number of declared resources.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if nothing is declared.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Lowers the spec into a [`ResourceManifest`], decoding inline payloads.
    pub fn into_manifest(self) -> Result<ResourceManifest, ManifestError> {
        let mut manifest = ResourceManifest::new();
        for (name, spec) in self.0 {
            let source = match spec {
                SourceSpec::Remote(url) => ResourceSource::Remote(url),
                SourceSpec::Inline { base64 } => {
                    let bytes = STANDARD.decode(base64.as_bytes()).map_err(|err| {
                        ManifestError::InvalidInlineBytes {
                            name: name.clone(),
                            detail: err.to_string(),
                        }
                    })?;
                    ResourceSource::Bytes(bytes)
                }
            };
            manifest.insert(name, source);
        }
        Ok(manifest)
    }
}
