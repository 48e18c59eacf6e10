use std::{
    net::{Ipv4Addr, SocketAddr, SocketAddrV4},
    time::Duration,
};

/// gRPC query endpoint of the upstream node used when none is configured.
pub const DEFAULT_UPSTREAM_GRPC: &str = "http://localhost:9090";

/// Base URL of the upstream node's JSON-RPC interface used when none is
/// configured.
pub const DEFAULT_UPSTREAM_RPC: &str = "https://rpc.osmosis.zone";

/// Address the gateway listens on by default. This is not the node's own
/// 9090 so that both can run on the same host.
pub const DEFAULT_LISTEN_ADDRESS: SocketAddr =
    SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::LOCALHOST, 9091));

/// Address of the gateway used by the tracker when none is configured.
pub const DEFAULT_GATEWAY_ENDPOINT: &str = "http://127.0.0.1:9091";

/// Upper bound on the duration of a single upstream call.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Upper bound on establishing the upstream connection.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// How long the tracker lets the chain advance after the first observation.
pub const DEFAULT_TRACKER_WAIT: Duration = Duration::from_secs(30);

/// Number of blocks the tracker queries after the first observation.
pub const DEFAULT_TRACKER_ITERATIONS: u32 = 5;

/// Where the tracker writes its record by default.
pub const DEFAULT_TRACKER_OUTPUT: &str = "info.json";

/// Path of the ABCI information endpoint, relative to the JSON-RPC base URL.
pub const ABCI_INFO_PATH: &str = "abci_info";

/// Path of the node status endpoint, relative to the JSON-RPC base URL.
pub const STATUS_PATH: &str = "status";
