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

use futures::future::BoxFuture;
use std::fmt;
use std::future::Future;

/// The future a [`ResourceSource::Pending`] source resolves through:
/// ready bytes on success, or the rejection reason.
pub type PendingBytes = BoxFuture<'static, anyhow::Result<Vec<u8>>>;

/// Where a declared resource obtains its bytes.
///
/// The variant is assigned once, when the manifest is built, and drives a
/// single dispatch per entry; nothing re-inspects the value's shape later.
pub enum ResourceSource {
    /// A remote URL, fetched asynchronously.
    Remote(String),
    /// A future that resolves to ready bytes or rejects with a reason.
    Pending(PendingBytes),
    /// Ready bytes, staged synchronously with no gate interaction.
    Bytes(Vec<u8>),
}

impl ResourceSource {
    /// Declares a remote URL source.
    pub fn remote(url: impl Into<String>) -> Self {
        Self::Remote(url.into())
    }

    /// Declares a source backed by a not-yet-resolved future.
    pub fn pending<F>(future: F) -> Self
    where
        F: Future<Output = anyhow::Result<Vec<u8>>> + Send + 'static,
    {
        Self::Pending(Box::pin(future))
    }

    /// Declares ready bytes.
    pub fn bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self::Bytes(bytes.into())
    }

    /// Returns `true` when the source resolves without asynchronous dispatch.
    pub fn is_synchronous(&self) -> bool {
        matches!(self, Self::Bytes(_))
    }
}

impl fmt::Debug for ResourceSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceSource::Remote(url) => f.debug_tuple("Remote").field(url).finish(),
            ResourceSource::Pending(_) => f.write_str("Pending(..)"),
            ResourceSource::Bytes(bytes) => write!(f, "Bytes({} bytes)", bytes.len()),
        }
    }
}

impl From<Vec<u8>> for ResourceSource {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Bytes(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_ready_bytes_are_synchronous() {
        assert!(ResourceSource::bytes(vec![1, 2]).is_synchronous());
        assert!(!ResourceSource::remote("http://host/a.bin").is_synchronous());
        assert!(!ResourceSource::pending(async { Ok(Vec::new()) }).is_synchronous());
    }

    #[test]
    fn test_debug_does_not_expose_payloads() {
        let pending = ResourceSource::pending(async { Ok(vec![1]) });
        assert_eq!(format!("{pending:?}"), "Pending(..)");
        assert_eq!(
            format!("{:?}", ResourceSource::bytes(vec![0; 16])),
            "Bytes(16 bytes)"
        );
    }
}
