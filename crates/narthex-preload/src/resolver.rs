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

//! Normalizes heterogeneous resource sources into ready bytes.

use crate::fetch::RemoteFetchLane;
use narthex_core::manifest::ResourceSource;
use narthex_core::status::StatusSink;
use std::sync::Arc;

/// Resolves a [`ResourceSource`] to its bytes, exactly once per entry.
///
/// The resolver never propagates a failure upward: a rejected fetch or
/// future degrades to `None` ("resource absent") after logging, leaving
/// every other resource unaffected.
pub struct SourceResolver {
    lane: RemoteFetchLane,
    status: Option<Arc<dyn StatusSink>>,
}

impl SourceResolver {
    /// Creates a resolver with a default fetch lane and no status sink.
    pub fn new() -> Self {
        Self {
            lane: RemoteFetchLane::new(),
            status: None,
        }
    }

    /// Attaches a sink for fetch progress reports.
    pub fn with_status(mut self, sink: Arc<dyn StatusSink>) -> Self {
        self.status = Some(sink);
        self
    }

    /// Replaces the remote fetch lane.
    pub fn with_lane(mut self, lane: RemoteFetchLane) -> Self {
        self.lane = lane;
        self
    }

    /// Resolves `source` to ready bytes, or `None` when the resource is
    /// dropped.
    pub async fn resolve(&self, name: &str, source: ResourceSource) -> Option<Vec<u8>> {
        match source {
            ResourceSource::Bytes(bytes) => Some(bytes),
            ResourceSource::Remote(url) => {
                match self.lane.fetch(name, &url, self.status.as_deref()).await {
                    Ok(bytes) => Some(bytes),
                    Err(err) => {
                        log::debug!("dropping remote resource '{name}': {err}");
                        None
                    }
                }
            }
            ResourceSource::Pending(future) => match future.await {
                Ok(bytes) => Some(bytes),
                Err(reason) => {
                    log::warn!("pending resource '{name}' rejected: {reason:#}");
                    None
                }
            },
        }
    }
}

impl Default for SourceResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_ready_bytes_pass_through() {
        let resolver = SourceResolver::new();
        let bytes = resolver
            .resolve("c", ResourceSource::bytes(vec![4, 5, 6]))
            .await;
        assert_eq!(bytes, Some(vec![4, 5, 6]));
    }

    #[tokio::test]
    async fn test_resolved_future_yields_its_bytes() {
        let resolver = SourceResolver::new();
        let bytes = resolver
            .resolve("p", ResourceSource::pending(async { Ok(vec![9]) }))
            .await;
        assert_eq!(bytes, Some(vec![9]));
    }

    #[tokio::test]
    async fn test_rejected_future_is_dropped() {
        let resolver = SourceResolver::new();
        let bytes = resolver
            .resolve(
                "p",
                ResourceSource::pending(async { Err(anyhow::anyhow!("boom")) }),
            )
            .await;
        assert!(bytes.is_none());
    }
}
