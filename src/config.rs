//! Configuration of the gateway and of the tracker. Both are built once at
//! startup and handed to the components that need them.
use crate::constants::*;
use std::{net::SocketAddr, path::PathBuf, time::Duration};
use tonic::transport::Endpoint;

/// Configuration of the [`QueryGateway`](crate::gateway::QueryGateway) and of
/// its connection to the upstream node.
#[derive(Clone, Debug)]
pub struct GatewayConfig {
    upstream_grpc:   Endpoint,
    upstream_rpc:    reqwest::Url,
    request_timeout: Duration,
    connect_timeout: Duration,
    listen_address:  SocketAddr,
}

impl GatewayConfig {
    /// A configuration for the given upstream gRPC endpoint and JSON-RPC base
    /// URL. Timeouts and the listen address take their default values.
    pub fn new(upstream_grpc: Endpoint, upstream_rpc: reqwest::Url) -> Self {
        Self {
            upstream_grpc,
            upstream_rpc: with_trailing_slash(upstream_rpc),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            listen_address: DEFAULT_LISTEN_ADDRESS,
        }
    }

    /// Set the upper bound on a single upstream call. This bounds both the
    /// gRPC queries and the JSON-RPC document fetches.
    ///
    /// The default value is 10 seconds.
    pub fn set_request_timeout(self, request_timeout: Duration) -> Self {
        Self {
            request_timeout,
            ..self
        }
    }

    /// Set the upper bound on establishing the upstream connection.
    ///
    /// The default value is 5 seconds.
    pub fn set_connect_timeout(self, connect_timeout: Duration) -> Self {
        Self {
            connect_timeout,
            ..self
        }
    }

    /// Set the address the gateway service listens on.
    pub fn set_listen_address(self, listen_address: SocketAddr) -> Self {
        Self {
            listen_address,
            ..self
        }
    }

    /// The upstream gRPC endpoint with the configured timeouts applied.
    pub fn upstream_grpc(&self) -> Endpoint {
        self.upstream_grpc
            .clone()
            .timeout(self.request_timeout)
            .connect_timeout(self.connect_timeout)
    }

    pub fn upstream_rpc(&self) -> &reqwest::Url { &self.upstream_rpc }

    /// URL of an endpoint of the upstream JSON-RPC interface.
    pub fn upstream_rpc_endpoint(&self, path: &str) -> Result<reqwest::Url, url::ParseError> {
        self.upstream_rpc.join(path)
    }

    pub fn request_timeout(&self) -> Duration { self.request_timeout }

    pub fn connect_timeout(&self) -> Duration { self.connect_timeout }

    pub fn listen_address(&self) -> SocketAddr { self.listen_address }
}

/// `Url::join` replaces the last path segment unless the base ends with a
/// slash, so `https://host/rpc` would otherwise lose `rpc`.
fn with_trailing_slash(mut url: reqwest::Url) -> reqwest::Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}

/// Configuration of a [`ChainStateTracker`](crate::tracker::ChainStateTracker)
/// run.
#[derive(Clone, Debug)]
pub struct TrackerConfig {
    wait_interval: Duration,
    iterations:    u32,
    output:        PathBuf,
}

impl Default for TrackerConfig {
    fn default() -> Self { Self::new(DEFAULT_TRACKER_OUTPUT) }
}

impl TrackerConfig {
    /// A configuration that writes its record to `output`, waiting 30 seconds
    /// after the first observation and then querying 5 consecutive blocks.
    pub fn new(output: impl Into<PathBuf>) -> Self {
        Self {
            wait_interval: DEFAULT_TRACKER_WAIT,
            iterations:    DEFAULT_TRACKER_ITERATIONS,
            output:        output.into(),
        }
    }

    /// Set how long to let the chain advance after observing the latest block
    /// and before querying the following ones.
    pub fn set_wait_interval(self, wait_interval: Duration) -> Self {
        Self {
            wait_interval,
            ..self
        }
    }

    /// Set the number of consecutive blocks queried after the latest one. A
    /// completed run records `iterations + 1` blocks.
    pub fn set_iterations(self, iterations: u32) -> Self { Self { iterations, ..self } }

    pub fn set_output(self, output: impl Into<PathBuf>) -> Self {
        Self {
            output: output.into(),
            ..self
        }
    }

    pub fn wait_interval(&self) -> Duration { self.wait_interval }

    pub fn iterations(&self) -> u32 { self.iterations }

    pub fn output(&self) -> &std::path::Path { &self.output }
}
