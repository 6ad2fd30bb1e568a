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

//! The host's optional progress-reporting hook.

/// Receives human-readable progress strings while remote resources stream in.
///
/// Reporting is a side effect only; it never influences what gets staged or
/// when startup unblocks. Pipelines without a sink simply skip reporting.
pub trait StatusSink: Send + Sync {
    /// Delivers one progress update, e.g. `"model.bin (65536/131072)"`.
    fn report(&self, status: &str);
}

impl<F> StatusSink for F
where
    F: Fn(&str) + Send + Sync,
{
    fn report(&self, status: &str) {
        self(status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_closure_sink_receives_reports() {
        let seen: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
        let sink_seen = seen.clone();
        let sink = move |status: &str| sink_seen.lock().unwrap().push(status.to_string());

        sink.report("a (1/3)");
        sink.report("a (3/3)");

        assert_eq!(*seen.lock().unwrap(), vec!["a (1/3)", "a (3/3)"]);
    }
}
