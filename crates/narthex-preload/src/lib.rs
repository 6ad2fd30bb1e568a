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

//! # Narthex Preload
//!
//! The pre-run staging pipeline of the hosted runtime. Given a manifest of
//! named resources, it fans out one resolution per entry (remote fetch,
//! future await, or direct byte staging), registers each resolved buffer
//! in the host's buffer table, and holds the run-dependency gate open
//! until every entry has reached a terminal outcome.

#![warn(missing_docs)]

pub mod config;
pub mod fetch;
pub mod pipeline;
pub mod registry;
pub mod resolver;

pub use pipeline::PreloadPipeline;
