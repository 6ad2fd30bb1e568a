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

use narthex_core::status::StatusSink;
use std::fmt;

/// An error produced by the remote fetch lane.
///
/// Both variants end the same way upstream: the resource is dropped and
/// the gate is released. The taxonomy exists for logging.
#[derive(Debug)]
pub enum FetchError {
    /// The request failed below the HTTP layer (DNS, connect, mid-body).
    Transport {
        /// The URL that was being fetched.
        url: String,
        /// The client's description of the failure.
        detail: String,
    },
    /// The server answered outside the success range.
    RejectedStatus {
        /// The URL that was being fetched.
        url: String,
        /// The HTTP status code received.
        status: u16,
    },
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Transport { url, detail } => {
                write!(f, "Transport failure fetching '{url}': {detail}")
            }
            FetchError::RejectedStatus { url, status } => {
                write!(f, "Fetch of '{url}' rejected with status {status}")
            }
        }
    }
}

impl std::error::Error for FetchError {}

/// A "Lane" responsible for the I/O task of fetching remote resource bytes.
///
/// Issues a binary GET, accepts any status in the 2xx range, and accumulates
/// the body chunk by chunk so an optional [`StatusSink`] can observe
/// progress while the transfer is in flight.
pub struct RemoteFetchLane {
    client: reqwest::Client,
}

impl RemoteFetchLane {
    /// Creates a lane with a default HTTP client.
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Creates a lane with a host-configured HTTP client.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Fetches `url` and returns the body bytes.
    ///
    /// `name` only labels progress reports; it does not affect the request.
    /// When the response carries no content length, progress totals are
    /// reported as `?`.
    pub async fn fetch(
        &self,
        name: &str,
        url: &str,
        status: Option<&dyn StatusSink>,
    ) -> Result<Vec<u8>, FetchError> {
        let mut response =
            self.client
                .get(url)
                .send()
                .await
                .map_err(|err| FetchError::Transport {
                    url: url.to_string(),
                    detail: err.to_string(),
                })?;

        if !response.status().is_success() {
            return Err(FetchError::RejectedStatus {
                url: url.to_string(),
                status: response.status().as_u16(),
            });
        }

        let total = response.content_length();
        let mut body = Vec::with_capacity(total.unwrap_or(0) as usize);
        while let Some(chunk) = response.chunk().await.map_err(|err| FetchError::Transport {
            url: url.to_string(),
            detail: err.to_string(),
        })? {
            body.extend_from_slice(&chunk);
            if let Some(sink) = status {
                match total {
                    Some(total) => sink.report(&format!("{name} ({}/{total})", body.len())),
                    None => sink.report(&format!("{name} ({}/?)", body.len())),
                }
            }
        }

        Ok(body)
    }
}

impl Default for RemoteFetchLane {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_names_the_url() {
        let transport = FetchError::Transport {
            url: "http://host/a.bin".to_string(),
            detail: "connection refused".to_string(),
        };
        assert_eq!(
            transport.to_string(),
            "Transport failure fetching 'http://host/a.bin': connection refused"
        );

        let rejected = FetchError::RejectedStatus {
            url: "http://host/a.bin".to_string(),
            status: 404,
        };
        assert_eq!(
            rejected.to_string(),
            "Fetch of 'http://host/a.bin' rejected with status 404"
        );
    }
}
