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

//! A minimal boot sequence: parse a host configuration, stage its
//! resources, and list what ended up in the buffer table.
//!
//! Run with `RUST_LOG=debug cargo run --example boot_demo` to watch the
//! gate and registry at work.

use narthex_core::buffer::InMemoryBufferTable;
use narthex_preload::config::BootConfig;
use narthex_preload::PreloadPipeline;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = BootConfig::from_json(
        r#"{
            "files": {
                "greeting.txt": { "base64": "aGVsbG8=" },
                "motd.txt": { "base64": "d2VsY29tZSBob21l" }
            }
        }"#,
    )?;
    println!("runtime arguments: {:?}", config.effective_arguments());

    let table = Arc::new(InMemoryBufferTable::new());
    let pipeline = PreloadPipeline::new(table.clone())
        .with_status(Arc::new(|status: &str| println!("loading: {status}")));

    pipeline.run(config.into_manifest()?).await;

    for name in pipeline.registry().names() {
        let staged = pipeline.registry().get(&name).unwrap();
        let bytes = table.bytes(staged.handle).unwrap();
        println!("staged '{name}' as {:?} ({} bytes)", staged.handle, bytes.len());
    }
    Ok(())
}
