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

//! Error types for manifest construction.

use std::fmt;

/// An error produced while lowering a declarative manifest into its
/// runtime form.
#[derive(Debug)]
pub enum ManifestError {
    /// An inline payload could not be decoded from base64.
    InvalidInlineBytes {
        /// The name of the declared resource.
        name: String,
        /// The decoder's description of the failure.
        detail: String,
    },
}

impl fmt::Display for ManifestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ManifestError::InvalidInlineBytes { name, detail } => {
                write!(f, "Invalid inline bytes for resource '{name}': {detail}")
            }
        }
    }
}

impl std::error::Error for ManifestError {}
