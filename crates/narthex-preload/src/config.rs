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

//! The host-facing boot configuration surface.

use narthex_core::error::ManifestError;
use narthex_core::manifest::{ManifestSpec, ResourceManifest};
use serde::{Deserialize, Serialize};

/// Arguments substituted when the host declares none.
pub const DEFAULT_ARGUMENTS: &[&str] = &["--no-home"];

/// What the host hands the bootstrap layer before startup.
///
/// `files` declares the resources to stage; `arguments` is the argument
/// vector passed on to the runtime once staging settles. Progress
/// reporting is configured on the pipeline directly, since it is a
/// callback rather than data.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BootConfig {
    /// The declarative resource table staged before startup.
    #[serde(default)]
    pub files: ManifestSpec,

    /// Arguments handed to the runtime; `None` selects [`DEFAULT_ARGUMENTS`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arguments: Option<Vec<String>>,
}

impl BootConfig {
    /// Parses a configuration from its JSON representation.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// The argument vector the runtime starts with.
    pub fn effective_arguments(&self) -> Vec<String> {
        match &self.arguments {
            Some(arguments) => arguments.clone(),
            None => DEFAULT_ARGUMENTS.iter().map(|arg| arg.to_string()).collect(),
        }
    }

    /// Lowers the declarative files table into a runtime manifest.
    pub fn into_manifest(self) -> Result<ResourceManifest, ManifestError> {
        self.files.into_manifest()
    }
}
