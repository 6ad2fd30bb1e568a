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

//! The counter gating runtime startup on outstanding resource loads.

use std::sync::Mutex;
use tokio::sync::Notify;

/// Tracks outstanding asynchronous loads and blocks startup until all of
/// them have reached a terminal outcome.
///
/// The gate is an explicit object handed to the pipeline, not ambient
/// state, so independent pipelines (and tests) never observe each other's
/// counts. Every [`add`](Self::add) must be paired with exactly one
/// [`remove`](Self::remove); removing without a matching add is a
/// programming error and panics.
///
/// The gate enforces no timeout: a load that never completes holds the
/// gate open indefinitely. Bounding startup time is the host's concern.
#[derive(Debug, Default)]
pub struct RunDependencyGate {
    outstanding: Mutex<usize>,
    notify: Notify,
}

impl RunDependencyGate {
    /// Creates a gate with no outstanding loads.
    pub fn new() -> Self {
        Self {
            outstanding: Mutex::new(0),
            notify: Notify::new(),
        }
    }

    /// Records that the load named `name` has been dispatched.
    pub fn add(&self, name: &str) {
        let mut outstanding = self.outstanding.lock().unwrap();
        *outstanding += 1;
        log::debug!("run dependency added: '{name}' ({} outstanding)", *outstanding);
    }

    /// Records that the load named `name` has reached a terminal outcome.
    ///
    /// When the last outstanding load is removed, every task waiting in
    /// [`settled`](Self::settled) is released.
    ///
    /// # Panics
    /// Panics if called without a matching prior [`add`](Self::add).
    pub fn remove(&self, name: &str) {
        let cleared = {
            let mut outstanding = self.outstanding.lock().unwrap();
            *outstanding = outstanding
                .checked_sub(1)
                .unwrap_or_else(|| panic!("removed run dependency '{name}' without a matching add"));
            log::debug!("run dependency removed: '{name}' ({} outstanding)", *outstanding);
            *outstanding == 0
        };
        if cleared {
            self.notify.notify_waiters();
        }
    }

    /// Returns the number of loads still in flight.
    pub fn outstanding(&self) -> usize {
        *self.outstanding.lock().unwrap()
    }

    /// Resolves once no loads are outstanding.
    ///
    /// Resolves immediately if nothing was ever added, so an empty manifest
    /// never delays startup.
    pub async fn settled(&self) {
        loop {
            let notified = self.notify.notified();
            tokio::pin!(notified);
            // Register for wakeups before inspecting the count, so a
            // zero-crossing between the check and the await is not missed.
            notified.as_mut().enable();
            if self.outstanding() == 0 {
                return;
            }
            notified.await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_settled_resolves_immediately_when_nothing_added() {
        let gate = RunDependencyGate::new();
        gate.settled().await;
        assert_eq!(gate.outstanding(), 0);
    }

    #[test]
    fn test_add_and_remove_track_outstanding() {
        let gate = RunDependencyGate::new();
        gate.add("a");
        gate.add("b");
        assert_eq!(gate.outstanding(), 2);

        gate.remove("a");
        assert_eq!(gate.outstanding(), 1);
        gate.remove("b");
        assert_eq!(gate.outstanding(), 0);
    }

    #[tokio::test]
    async fn test_settled_waits_for_last_remove() {
        let gate = Arc::new(RunDependencyGate::new());
        gate.add("a");
        gate.add("b");

        let waiter = tokio::spawn({
            let gate = gate.clone();
            async move { gate.settled().await }
        });

        gate.remove("a");
        // One load is still in flight, so the waiter cannot have finished.
        assert!(!waiter.is_finished());

        gate.remove("b");
        waiter.await.unwrap();
        assert_eq!(gate.outstanding(), 0);
    }

    #[tokio::test]
    async fn test_settled_after_count_returned_to_zero() {
        let gate = RunDependencyGate::new();
        gate.add("a");
        gate.remove("a");
        gate.settled().await;
    }

    #[test]
    #[should_panic(expected = "without a matching add")]
    fn test_remove_without_add_panics() {
        RunDependencyGate::new().remove("ghost");
    }
}
