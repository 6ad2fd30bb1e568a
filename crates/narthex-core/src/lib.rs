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

//! # Narthex Core
//!
//! Foundational crate containing traits, core types, and interface contracts
//! for pre-run resource staging: buffer handles and the host buffer-table
//! capability, the resource manifest and its source variants, the
//! run-dependency gate, and the status-reporting hook.

#![warn(missing_docs)]

pub mod buffer;
pub mod error;
pub mod gate;
pub mod manifest;
pub mod status;

pub use gate::RunDependencyGate;
pub use status::StatusSink;
