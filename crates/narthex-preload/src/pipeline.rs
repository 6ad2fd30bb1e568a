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

//! The pre-run staging orchestrator.

use crate::registry::BufferRegistry;
use crate::resolver::SourceResolver;
use narthex_core::buffer::BufferTable;
use narthex_core::gate::RunDependencyGate;
use narthex_core::manifest::{ManifestEntry, ResourceManifest, ResourceSource};
use narthex_core::status::StatusSink;
use std::sync::Arc;

/// Stages a manifest of resources into the host buffer table before the
/// runtime starts.
///
/// The pipeline owns its own [`RunDependencyGate`] and [`BufferRegistry`],
/// so independent pipelines never share state. Per manifest entry, each
/// resolution reaches exactly one terminal outcome (registered or dropped)
/// and performs exactly one gate decrement if and only if it performed a
/// prior increment.
pub struct PreloadPipeline {
    resolver: Arc<SourceResolver>,
    registry: Arc<BufferRegistry>,
    gate: Arc<RunDependencyGate>,
}

impl PreloadPipeline {
    /// Creates a pipeline allocating buffers from the injected `table`.
    pub fn new(table: Arc<dyn BufferTable>) -> Self {
        Self {
            resolver: Arc::new(SourceResolver::new()),
            registry: Arc::new(BufferRegistry::new(table)),
            gate: Arc::new(RunDependencyGate::new()),
        }
    }

    /// Attaches a sink receiving fetch progress reports.
    pub fn with_status(self, sink: Arc<dyn StatusSink>) -> Self {
        Self {
            resolver: Arc::new(SourceResolver::new().with_status(sink)),
            ..self
        }
    }

    /// Shares the host startup mechanism's gate instead of an internal one.
    ///
    /// Use this when other subsystems also hold dependencies open on the
    /// same gate; `settled` then reflects all of them.
    pub fn with_gate(self, gate: Arc<RunDependencyGate>) -> Self {
        Self { gate, ..self }
    }

    /// The pre-run hook: enumerates `manifest` once, in declaration order.
    ///
    /// Ready-byte entries are registered before this method returns, with
    /// no gate interaction. Every asynchronous entry increments the gate
    /// and spawns a detached resolution task; the task registers the
    /// buffer on success and decrements the gate on its terminal path
    /// unconditionally, so a failed load can never hold startup open.
    ///
    /// Must be called from within the host's tokio runtime. Returns as
    /// soon as all dispatches are issued; it never waits for completions.
    pub fn dispatch(&self, manifest: ResourceManifest) {
        for ManifestEntry { name, source } in manifest.into_entries() {
            match source {
                ResourceSource::Bytes(bytes) => {
                    self.registry.register(&name, &bytes);
                }
                source => {
                    self.gate.add(&name);
                    let resolver = Arc::clone(&self.resolver);
                    let registry = Arc::clone(&self.registry);
                    let gate = Arc::clone(&self.gate);
                    tokio::spawn(async move {
                        if let Some(bytes) = resolver.resolve(&name, source).await {
                            registry.register(&name, &bytes);
                        }
                        gate.remove(&name);
                    });
                }
            }
        }
    }

    /// Stages the whole manifest and waits until every entry has reached
    /// a terminal outcome, the point at which startup may proceed.
    ///
    /// No timeout is applied; a fetch that never completes blocks here
    /// indefinitely.
    pub async fn run(&self, manifest: ResourceManifest) {
        self.dispatch(manifest);
        self.gate.settled().await;
        log::info!("staging settled: {} buffer(s) registered", self.registry.len());
    }

    /// The registry of buffers staged so far.
    pub fn registry(&self) -> &BufferRegistry {
        &self.registry
    }

    /// The gate blocking startup on outstanding loads.
    pub fn gate(&self) -> &RunDependencyGate {
        &self.gate
    }
}
