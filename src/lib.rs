//! A gateway in front of the query API of a Cosmos/Tendermint node, and a
//! tracker that records the progression of the chain through it. The library
//! is structured around multiple modules.
//!
//! - [`gateway`] contains the [`QueryGateway`](gateway::QueryGateway) service,
//!   the functions to [serve](gateway::serve) it, and a
//!   [`Client`](gateway::Client) for talking to a running gateway.
//! - [`upstream`] maintains the connection to the node, over gRPC for the
//!   `cosmos.base.tendermint.v1beta1` queries and over HTTP for the node's
//!   JSON-RPC `abci_info` and `status` endpoints.
//! - [`tracker`] contains the [`ChainStateTracker`](tracker::ChainStateTracker)
//!   which observes consecutive blocks and persists their heights and hashes.
//! - [`config`] and [`constants`] define how the above are configured.
//! - [`endpoints`] contains the error types shared by all of the above.

/// Various constants and default values.
pub mod constants;
/// Errors of the upstream calls and of the gateway operations.
pub mod endpoints;

pub mod config;

/// Code generated from the protobuf definitions of the upstream query service
/// and of the gateway service.
#[allow(clippy::all)]
pub mod generated;

pub mod upstream;

pub mod gateway;

pub mod tracker;

/// Re-export of the `async_trait` macro used by [`Upstream`](upstream::Upstream)
/// and [`BlockSource`](tracker::BlockSource), for implementing them outside of
/// this crate.
pub use tonic::async_trait;
