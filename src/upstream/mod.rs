//! Connection to the upstream Cosmos/Tendermint node.
//!
//! The [`Upstream`] trait lists the calls the gateway needs. The production
//! implementation is [`UpstreamClient`], which holds one gRPC channel to the
//! node's `cosmos.base.tendermint.v1beta1.Service` and one HTTP client for the
//! node's JSON-RPC interface. Values are only decoded here; any reshaping
//! happens in the [`gateway`](crate::gateway).
use crate::{
    config::GatewayConfig,
    constants::{ABCI_INFO_PATH, STATUS_PATH},
    endpoints::{status_from_http, UpstreamError, UpstreamResult},
    generated::cosmos::base::{
        query::v1beta1::{PageRequest, PageResponse},
        tendermint::v1beta1 as tm,
    },
};
use tendermint_proto::{
    p2p::DefaultNodeInfo,
    types::{Block, BlockId},
};
use tonic::{async_trait, transport::Channel};

/// Node identity as reported by the upstream node.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NodeInfo {
    pub default_node_info:   Option<DefaultNodeInfo>,
    pub application_version: tm::VersionInfo,
}

/// A block together with its identifier. The identifier is guaranteed to have
/// a non-empty hash.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BlockResponse {
    pub block_id: BlockId,
    pub block:    Block,
}

/// One page of a validator set.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ValidatorSet {
    pub block_height: i64,
    pub validators:   Vec<tm::Validator>,
    pub pagination:   Option<PageResponse>,
}

#[async_trait]
/// The queries the gateway issues against the upstream node. Every call either
/// returns the decoded value or fails with an [`UpstreamError`].
///
/// Implementations must be usable concurrently from many gateway calls.
pub trait Upstream: Send + Sync + 'static {
    async fn fetch_node_info(&self) -> UpstreamResult<NodeInfo>;

    async fn fetch_syncing(&self) -> UpstreamResult<bool>;

    async fn fetch_latest_block(&self) -> UpstreamResult<BlockResponse>;

    async fn fetch_block_at(&self, height: i64) -> UpstreamResult<BlockResponse>;

    async fn fetch_latest_validators(
        &self,
        pagination: Option<PageRequest>,
    ) -> UpstreamResult<ValidatorSet>;

    async fn fetch_validators_at(
        &self,
        height: i64,
        pagination: Option<PageRequest>,
    ) -> UpstreamResult<ValidatorSet>;

    /// The whole document returned by the node's `abci_info` endpoint.
    async fn fetch_abci_info_document(&self) -> UpstreamResult<serde_json::Value>;

    /// The whole document returned by the node's `status` endpoint.
    async fn fetch_status_document(&self) -> UpstreamResult<serde_json::Value>;
}

#[derive(Clone, Debug)]
/// Client for the upstream node.
///
/// The gRPC channel is established once, when the client is constructed, and
/// shared by all clones. Every call works on its own clone of the generated
/// client, which is cheap and reuses the underlying connection, so the client
/// can serve concurrent requests without locking. The channel is closed when
/// the last clone is dropped.
pub struct UpstreamClient {
    client:        tm::service_client::ServiceClient<Channel>,
    http:          reqwest::Client,
    abci_info_url: reqwest::Url,
    status_url:    reqwest::Url,
}

impl UpstreamClient {
    /// Connect to the upstream node described by the configuration. Fails if
    /// the gRPC channel cannot be established within the connect timeout.
    pub async fn connect(config: &GatewayConfig) -> UpstreamResult<Self> {
        let channel = config.upstream_grpc().connect().await?;
        Self::with_channel(config, channel)
    }

    /// Construct the client without waiting for the gRPC channel. The
    /// connection is established on first use, and re-established by the
    /// channel if it is lost.
    pub fn connect_lazy(config: &GatewayConfig) -> UpstreamResult<Self> {
        let channel = config.upstream_grpc().connect_lazy();
        Self::with_channel(config, channel)
    }

    fn with_channel(config: &GatewayConfig, channel: Channel) -> UpstreamResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .connect_timeout(config.connect_timeout())
            .build()?;
        let rpc_url = |path| {
            config.upstream_rpc_endpoint(path).map_err(|e| {
                UpstreamError::Connection(format!(
                    "Invalid JSON-RPC URL {}: {e}",
                    config.upstream_rpc()
                ))
            })
        };
        Ok(Self {
            client: tm::service_client::ServiceClient::new(channel),
            http,
            abci_info_url: rpc_url(ABCI_INFO_PATH)?,
            status_url: rpc_url(STATUS_PATH)?,
        })
    }

    async fn fetch_document(&self, url: &reqwest::Url) -> UpstreamResult<serde_json::Value> {
        tracing::debug!(target: "query_gateway", "Fetching {url}.");
        let response = self.http.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(UpstreamError::Rpc(status_from_http(
                status,
                format!("GET {url} returned {status}: {body}"),
            )));
        }
        let document: serde_json::Value = response.json().await?;
        check_json_rpc_error(&document)?;
        Ok(document)
    }
}

/// The node reports failures of its JSON-RPC methods in an `error` member,
/// typically with HTTP status 200.
fn check_json_rpc_error(document: &serde_json::Value) -> UpstreamResult<()> {
    let Some(error) = document.get("error") else {
        return Ok(());
    };
    let code = match error.get("code").and_then(serde_json::Value::as_i64) {
        Some(-32600) | Some(-32602) => tonic::Code::InvalidArgument,
        Some(-32601) => tonic::Code::Unimplemented,
        _ => tonic::Code::Internal,
    };
    Err(UpstreamError::Rpc(tonic::Status::new(
        code,
        format!("JSON-RPC error: {error}"),
    )))
}

#[async_trait]
impl Upstream for UpstreamClient {
    async fn fetch_node_info(&self) -> UpstreamResult<NodeInfo> {
        let response = self
            .client
            .clone()
            .get_node_info(tm::GetNodeInfoRequest::default())
            .await?;
        NodeInfo::try_from(response.into_inner())
    }

    async fn fetch_syncing(&self) -> UpstreamResult<bool> {
        let response = self
            .client
            .clone()
            .get_syncing(tm::GetSyncingRequest::default())
            .await?;
        Ok(response.into_inner().syncing)
    }

    async fn fetch_latest_block(&self) -> UpstreamResult<BlockResponse> {
        let response = self
            .client
            .clone()
            .get_latest_block(tm::GetLatestBlockRequest::default())
            .await?;
        let response = response.into_inner();
        BlockResponse::new(response.block_id, response.block)
    }

    async fn fetch_block_at(&self, height: i64) -> UpstreamResult<BlockResponse> {
        let response = self
            .client
            .clone()
            .get_block_by_height(tm::GetBlockByHeightRequest { height })
            .await?;
        let response = response.into_inner();
        BlockResponse::new(response.block_id, response.block)
    }

    async fn fetch_latest_validators(
        &self,
        pagination: Option<PageRequest>,
    ) -> UpstreamResult<ValidatorSet> {
        let response = self
            .client
            .clone()
            .get_latest_validator_set(tm::GetLatestValidatorSetRequest { pagination })
            .await?;
        Ok(response.into_inner().into())
    }

    async fn fetch_validators_at(
        &self,
        height: i64,
        pagination: Option<PageRequest>,
    ) -> UpstreamResult<ValidatorSet> {
        let response = self
            .client
            .clone()
            .get_validator_set_by_height(tm::GetValidatorSetByHeightRequest { height, pagination })
            .await?;
        Ok(response.into_inner().into())
    }

    async fn fetch_abci_info_document(&self) -> UpstreamResult<serde_json::Value> {
        self.fetch_document(&self.abci_info_url).await
    }

    async fn fetch_status_document(&self) -> UpstreamResult<serde_json::Value> {
        self.fetch_document(&self.status_url).await
    }
}

impl TryFrom<tm::GetNodeInfoResponse> for NodeInfo {
    type Error = UpstreamError;

    fn try_from(value: tm::GetNodeInfoResponse) -> Result<Self, Self::Error> {
        Ok(Self {
            default_node_info:   value.default_node_info,
            application_version: value.application_version.require("application_version")?,
        })
    }
}

impl BlockResponse {
    fn new(block_id: Option<BlockId>, block: Option<Block>) -> UpstreamResult<Self> {
        let block_id = block_id.require("block_id")?;
        if block_id.hash.is_empty() {
            return Err(UpstreamError::Decode("block_id.hash is empty".into()));
        }
        Ok(Self {
            block_id,
            block: block.require("block")?,
        })
    }
}

impl From<tm::GetLatestValidatorSetResponse> for ValidatorSet {
    fn from(value: tm::GetLatestValidatorSetResponse) -> Self {
        Self {
            block_height: value.block_height,
            validators:   value.validators,
            pagination:   value.pagination,
        }
    }
}

impl From<tm::GetValidatorSetByHeightResponse> for ValidatorSet {
    fn from(value: tm::GetValidatorSetByHeightResponse) -> Self {
        Self {
            block_height: value.block_height,
            validators:   value.validators,
            pagination:   value.pagination,
        }
    }
}

/// A helper trait to make it simpler to require specific fields when decoding
/// a protobuf message. In proto3 all message fields are optional, so it is up
/// to us to reject responses that lack the ones we need.
trait Require {
    type A;
    fn require(self, field: &str) -> UpstreamResult<Self::A>;
}

impl<A> Require for Option<A> {
    type A = A;

    fn require(self, field: &str) -> UpstreamResult<Self::A> {
        match self {
            Some(v) => Ok(v),
            None => Err(UpstreamError::Decode(format!(
                "missing field `{field}` in response"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_UPSTREAM_GRPC;
    use httpmock::prelude::*;
    use serde_json::json;
    use tonic::transport::Endpoint;

    fn client_for(server: &MockServer) -> UpstreamClient {
        let config = GatewayConfig::new(
            Endpoint::from_static(DEFAULT_UPSTREAM_GRPC),
            server.base_url().parse().expect("mock server url"),
        );
        UpstreamClient::connect_lazy(&config).expect("client")
    }

    #[test]
    fn test_block_response_requires_hash() {
        let err = BlockResponse::new(Some(BlockId::default()), Some(Block::default()))
            .expect_err("empty hash must be rejected");
        assert!(matches!(err, UpstreamError::Decode(_)));

        let err = BlockResponse::new(None, Some(Block::default())).expect_err("missing id");
        assert!(matches!(err, UpstreamError::Decode(msg) if msg.contains("block_id")));

        let block_id = BlockId {
            hash: vec![0xab; 32],
            ..Default::default()
        };
        let ok = BlockResponse::new(Some(block_id.clone()), Some(Block::default()))
            .expect("valid block");
        assert_eq!(ok.block_id, block_id);
    }

    #[test]
    fn test_node_info_requires_application_version() {
        let err = NodeInfo::try_from(tm::GetNodeInfoResponse::default())
            .expect_err("application version is required");
        assert!(matches!(err, UpstreamError::Decode(_)));
    }

    #[tokio::test]
    async fn test_fetch_abci_info_document() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/abci_info");
                then.status(200).json_body(json!({
                    "jsonrpc": "2.0",
                    "id": -1,
                    "result": {"response": {"data": "OsmosisApp", "version": "15.0.0", "app_version": "1"}}
                }));
            })
            .await;
        let client = client_for(&server);
        let document = client
            .fetch_abci_info_document()
            .await
            .expect("document is fetched");
        mock.assert_async().await;
        assert_eq!(document["result"]["response"]["data"], "OsmosisApp");
    }

    #[tokio::test]
    async fn test_fetch_status_http_not_found() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/status");
                then.status(404).body("no such route");
            })
            .await;
        let client = client_for(&server);
        match client.fetch_status_document().await {
            Err(UpstreamError::Rpc(status)) => assert_eq!(status.code(), tonic::Code::NotFound),
            other => panic!("Expected an RPC error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_fetch_document_not_json() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/status");
                then.status(200).body("<html>maintenance</html>");
            })
            .await;
        let client = client_for(&server);
        let err = client
            .fetch_status_document()
            .await
            .expect_err("body is not JSON");
        assert!(matches!(err, UpstreamError::Decode(_)), "{err:?}");
    }

    #[tokio::test]
    async fn test_fetch_document_json_rpc_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/abci_info");
                then.status(200).json_body(json!({
                    "jsonrpc": "2.0",
                    "id": -1,
                    "error": {"code": -32603, "message": "Internal error", "data": "app is closing"}
                }));
            })
            .await;
        let client = client_for(&server);
        match client.fetch_abci_info_document().await {
            Err(UpstreamError::Rpc(status)) => {
                assert_eq!(status.code(), tonic::Code::Internal);
                assert!(status.message().contains("app is closing"));
            }
            other => panic!("Expected an RPC error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_unreachable_node_is_connection_error() {
        // Nothing listens on port 1.
        let config = GatewayConfig::new(
            Endpoint::from_static("http://127.0.0.1:1"),
            "http://127.0.0.1:1".parse().expect("valid url"),
        );
        let err = UpstreamClient::connect(&config)
            .await
            .expect_err("connection must fail");
        assert!(matches!(err, UpstreamError::Connection(_)));

        let client = UpstreamClient::connect_lazy(&config).expect("lazy client");
        let err = client.fetch_syncing().await.expect_err("call must fail");
        assert!(matches!(err, UpstreamError::Connection(_)), "{err:?}");
        let err = client
            .fetch_status_document()
            .await
            .expect_err("call must fail");
        assert!(matches!(err, UpstreamError::Connection(_)), "{err:?}");
    }
}
