//! The query gateway: a gRPC service re-exposing the query API of an upstream
//! Cosmos/Tendermint node with a stable schema.
//!
//! Every operation validates its input, issues at most one upstream call, and
//! reshapes the answer into the `gateway.v1` messages. Failures are reported to
//! the caller of the failing operation only; the gateway never retries.
use crate::{
    config::GatewayConfig,
    endpoints::{GatewayError, GatewayResult, UpstreamError},
    generated::{
        cosmos::base::{query::v1beta1::PageRequest, tendermint::v1beta1 as tm},
        gateway::v1::{self, grpc_query_service_server},
    },
    upstream::{BlockResponse, Upstream, UpstreamClient, ValidatorSet},
};
use document::FieldPath;
use std::{future::Future, time::Duration};
use thiserror::Error;
use tokio_stream::wrappers::TcpListenerStream;
use tonic::async_trait;

pub mod client;
mod document;

pub use client::Client;

const ABCI_JSONRPC: FieldPath = FieldPath(&["jsonrpc"]);
const ABCI_ID: FieldPath = FieldPath(&["id"]);
const ABCI_DATA: FieldPath = FieldPath(&["result", "response", "data"]);
const ABCI_VERSION: FieldPath = FieldPath(&["result", "response", "version"]);
const ABCI_APP_VERSION: FieldPath = FieldPath(&["result", "response", "app_version"]);
const STATUS_RESULT: FieldPath = FieldPath(&["result"]);

/// The gateway service. It is generic over the upstream so that it can be
/// exercised without a node; in production `U` is [`UpstreamClient`].
#[derive(Clone, Debug)]
pub struct QueryGateway<U = UpstreamClient> {
    upstream: U,
}

impl<U: Upstream> QueryGateway<U> {
    pub fn new(upstream: U) -> Self { Self { upstream } }

    /// Information about the upstream node and the application it runs.
    pub async fn get_node_info(&self) -> GatewayResult<v1::GetNodeInfoResponse> {
        logged("GetNodeInfo", async {
            let info = self.upstream.fetch_node_info().await?;
            Ok(v1::GetNodeInfoResponse {
                default_node_info:   info.default_node_info,
                application_version: Some(version_info(info.application_version)),
            })
        })
        .await
    }

    /// Whether the upstream node is catching up with the chain.
    pub async fn get_syncing(&self) -> GatewayResult<v1::GetSyncingResponse> {
        logged("GetSyncing", async {
            let syncing = self.upstream.fetch_syncing().await?;
            Ok(v1::GetSyncingResponse { syncing })
        })
        .await
    }

    pub async fn get_latest_block(&self) -> GatewayResult<v1::GetLatestBlockResponse> {
        logged("GetLatestBlock", async {
            let BlockResponse { block_id, block } = self.upstream.fetch_latest_block().await?;
            Ok(v1::GetLatestBlockResponse {
                block_id: Some(block_id),
                block:    Some(block),
            })
        })
        .await
    }

    /// The block at the given height. The height must be at least 1.
    pub async fn get_block_by_height(
        &self,
        height: i64,
    ) -> GatewayResult<v1::GetBlockByHeightResponse> {
        logged("GetBlockByHeight", async {
            check_height(height)?;
            let BlockResponse { block_id, block } = self.upstream.fetch_block_at(height).await?;
            Ok(v1::GetBlockByHeightResponse {
                block_id: Some(block_id),
                block:    Some(block),
            })
        })
        .await
    }

    pub async fn get_latest_validator_set(
        &self,
        pagination: Option<PageRequest>,
    ) -> GatewayResult<v1::GetLatestValidatorSetResponse> {
        logged("GetLatestValidatorSet", async {
            let set = self.upstream.fetch_latest_validators(pagination).await?;
            Ok(v1::GetLatestValidatorSetResponse {
                block_height: set.block_height,
                validators:   validators(set.validators),
                pagination:   set.pagination,
            })
        })
        .await
    }

    /// The validator set at the given height. The height must be at least 1.
    pub async fn get_validator_set_by_height(
        &self,
        height: i64,
        pagination: Option<PageRequest>,
    ) -> GatewayResult<v1::GetValidatorSetByHeightResponse> {
        logged("GetValidatorSetByHeight", async {
            check_height(height)?;
            let ValidatorSet {
                block_height,
                validators: vs,
                pagination,
            } = self.upstream.fetch_validators_at(height, pagination).await?;
            Ok(v1::GetValidatorSetByHeightResponse {
                block_height,
                validators: validators(vs),
                pagination,
            })
        })
        .await
    }

    /// The ABCI information reported by the node's JSON-RPC `abci_info`
    /// endpoint. `version` and `app_version` must be present; the remaining
    /// fields default to empty values.
    pub async fn get_abci_info(&self) -> GatewayResult<v1::GetAbciInfoResponse> {
        logged("GetABCIInfo", async {
            let doc = self.upstream.fetch_abci_info_document().await?;
            let response = v1::AbciResponse {
                data:        document::optional_string(&doc, ABCI_DATA)?.unwrap_or_default(),
                version:     document::required_string(&doc, ABCI_VERSION)?,
                app_version: document::required_string(&doc, ABCI_APP_VERSION)?,
            };
            Ok(v1::GetAbciInfoResponse {
                jsonrpc:  document::optional_string(&doc, ABCI_JSONRPC)?.unwrap_or_default(),
                id:       document::optional_i32(&doc, ABCI_ID)?.unwrap_or_default(),
                response: Some(response),
            })
        })
        .await
    }

    /// The `result` of the node's JSON-RPC `status` endpoint as compact JSON.
    pub async fn get_status_info(&self) -> GatewayResult<v1::GetStatusInfoResponse> {
        logged("GetStatusInfo", async {
            let doc = self.upstream.fetch_status_document().await?;
            let result = document::required(&doc, STATUS_RESULT)?;
            let response_string = serde_json::to_string(result)
                .map_err(|e| GatewayError::SchemaMismatch(e.to_string()))?;
            Ok(v1::GetStatusInfoResponse { response_string })
        })
        .await
    }
}

/// Run a single gateway operation, logging entry and failure.
async fn logged<A>(
    operation: &'static str,
    call: impl Future<Output = GatewayResult<A>>,
) -> GatewayResult<A> {
    tracing::debug!(target: "query_gateway", "Handling {operation}.");
    let result = call.await;
    if let Err(e) = &result {
        tracing::warn!(
            target: "query_gateway",
            kind = %e.kind(),
            "{operation} failed: {e}"
        );
    }
    result
}

fn check_height(height: i64) -> GatewayResult<()> {
    if height < 1 {
        return Err(GatewayError::Validation(format!(
            "height must be at least 1, got {height}"
        )));
    }
    Ok(())
}

fn version_info(version: tm::VersionInfo) -> v1::VersionInfo {
    v1::VersionInfo {
        name:               version.name,
        app_name:           version.app_name,
        version:            version.version,
        git_commit:         version.git_commit,
        build_tags:         version.build_tags,
        go_version:         version.go_version,
        build_deps:         version
            .build_deps
            .into_iter()
            .map(|m| v1::Module {
                path:    m.path,
                version: m.version,
                sum:     m.sum,
            })
            .collect(),
        cosmos_sdk_version: version.cosmos_sdk_version,
    }
}

fn validators(validators: Vec<tm::Validator>) -> Vec<v1::Validator> {
    validators
        .into_iter()
        .map(|v| v1::Validator {
            address:           v.address,
            pub_key:           v.pub_key,
            voting_power:      v.voting_power,
            proposer_priority: v.proposer_priority,
        })
        .collect()
}

#[async_trait]
impl<U: Upstream> grpc_query_service_server::GrpcQueryService for QueryGateway<U> {
    async fn get_node_info(
        &self,
        _request: tonic::Request<v1::GetNodeInfoRequest>,
    ) -> Result<tonic::Response<v1::GetNodeInfoResponse>, tonic::Status> {
        Ok(tonic::Response::new(Self::get_node_info(self).await?))
    }

    async fn get_syncing(
        &self,
        _request: tonic::Request<v1::GetSyncingRequest>,
    ) -> Result<tonic::Response<v1::GetSyncingResponse>, tonic::Status> {
        Ok(tonic::Response::new(Self::get_syncing(self).await?))
    }

    async fn get_latest_block(
        &self,
        _request: tonic::Request<v1::GetLatestBlockRequest>,
    ) -> Result<tonic::Response<v1::GetLatestBlockResponse>, tonic::Status> {
        Ok(tonic::Response::new(Self::get_latest_block(self).await?))
    }

    async fn get_block_by_height(
        &self,
        request: tonic::Request<v1::GetBlockByHeightRequest>,
    ) -> Result<tonic::Response<v1::GetBlockByHeightResponse>, tonic::Status> {
        let height = request.into_inner().height;
        Ok(tonic::Response::new(
            Self::get_block_by_height(self, height).await?,
        ))
    }

    async fn get_latest_validator_set(
        &self,
        request: tonic::Request<v1::GetLatestValidatorSetRequest>,
    ) -> Result<tonic::Response<v1::GetLatestValidatorSetResponse>, tonic::Status> {
        let pagination = request.into_inner().pagination;
        Ok(tonic::Response::new(
            Self::get_latest_validator_set(self, pagination).await?,
        ))
    }

    async fn get_validator_set_by_height(
        &self,
        request: tonic::Request<v1::GetValidatorSetByHeightRequest>,
    ) -> Result<tonic::Response<v1::GetValidatorSetByHeightResponse>, tonic::Status> {
        let v1::GetValidatorSetByHeightRequest { height, pagination } = request.into_inner();
        Ok(tonic::Response::new(
            Self::get_validator_set_by_height(self, height, pagination).await?,
        ))
    }

    async fn get_abci_info(
        &self,
        _request: tonic::Request<v1::GetAbciInfoRequest>,
    ) -> Result<tonic::Response<v1::GetAbciInfoResponse>, tonic::Status> {
        Ok(tonic::Response::new(Self::get_abci_info(self).await?))
    }

    async fn get_status_info(
        &self,
        _request: tonic::Request<v1::GetStatusInfoRequest>,
    ) -> Result<tonic::Response<v1::GetStatusInfoResponse>, tonic::Status> {
        Ok(tonic::Response::new(Self::get_status_info(self).await?))
    }
}

#[derive(Error, Debug)]
/// Failures that prevent the gateway from serving at all.
pub enum ServeError {
    #[error("Cannot bind the listen address: {0}")]
    Bind(#[from] std::io::Error),
    #[error("Invalid upstream configuration: {0}")]
    Upstream(#[from] UpstreamError),
    #[error("Server error: {0}")]
    Transport(#[from] tonic::transport::Error),
    #[error("Cannot build the reflection service: {0}")]
    Reflection(#[from] tonic_reflection::server::Error),
}

/// Encoded `FileDescriptorSet` of `gateway.v1` and every file it depends on.
/// It is served over gRPC reflection so that generic clients can discover the
/// service.
pub const FILE_DESCRIPTOR_SET: &[u8] = include_bytes!("../generated/file_descriptor_set.bin");

fn reflection_builder() -> tonic_reflection::server::Builder<'static> {
    tonic_reflection::server::Builder::configure()
        .register_encoded_file_descriptor_set(FILE_DESCRIPTOR_SET)
}

/// Serve the gateway on the configured listen address until `shutdown`
/// resolves.
///
/// The upstream channel is established on first use, so an unavailable node
/// results in failed calls rather than in a failure to start. After `shutdown`
/// resolves no new connections are accepted; in-flight calls finish or hit
/// the request timeout, after which the upstream connection is closed.
pub async fn serve(
    config: &GatewayConfig,
    shutdown: impl Future<Output = ()> + Send,
) -> Result<(), ServeError> {
    let upstream = UpstreamClient::connect_lazy(config)?;
    let listener = tokio::net::TcpListener::bind(config.listen_address()).await?;
    serve_with_listener(
        QueryGateway::new(upstream),
        listener,
        config.request_timeout(),
        shutdown,
    )
    .await
}

/// Like [`serve`], but on an already bound listener and with an arbitrary
/// upstream.
pub async fn serve_with_listener<U: Upstream>(
    gateway: QueryGateway<U>,
    listener: tokio::net::TcpListener,
    request_timeout: Duration,
    shutdown: impl Future<Output = ()> + Send,
) -> Result<(), ServeError> {
    tracing::info!(
        target: "query_gateway",
        "Gateway listening on {}.",
        listener.local_addr()?
    );
    // Both reflection versions, older clients only speak v1alpha.
    let reflection = reflection_builder().build_v1()?;
    let reflection_v1alpha = reflection_builder().build_v1alpha()?;
    tonic::transport::Server::builder()
        .timeout(request_timeout)
        .add_service(grpc_query_service_server::GrpcQueryServiceServer::new(
            gateway,
        ))
        .add_service(reflection)
        .add_service(reflection_v1alpha)
        .serve_with_incoming_shutdown(TcpListenerStream::new(listener), shutdown)
        .await?;
    tracing::info!(target: "query_gateway", "Gateway stopped.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{endpoints::UpstreamResult, upstream::NodeInfo};
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tendermint_proto::types::{Block, BlockId};

    /// An upstream that answers from fixed values and counts the calls it
    /// receives.
    #[derive(Default)]
    struct MockUpstream {
        calls:              AtomicUsize,
        fail_with:          Option<tonic::Code>,
        node_info:          NodeInfo,
        syncing:            bool,
        block:              BlockResponse,
        validators:         ValidatorSet,
        abci:               serde_json::Value,
        status:             serde_json::Value,
        /// Height (if any) and pagination of every validator set request.
        validator_requests: std::sync::Mutex<Vec<(Option<i64>, Option<PageRequest>)>>,
    }

    impl MockUpstream {
        fn call(&self) -> UpstreamResult<()> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match self.fail_with {
                Some(code) => Err(tonic::Status::new(code, "mock failure").into()),
                None => Ok(()),
            }
        }

        fn calls(&self) -> usize { self.calls.load(Ordering::SeqCst) }

        fn record_validator_request(&self, height: Option<i64>, pagination: Option<PageRequest>) {
            if let Ok(mut requests) = self.validator_requests.lock() {
                requests.push((height, pagination));
            }
        }
    }

    #[async_trait]
    impl Upstream for MockUpstream {
        async fn fetch_node_info(&self) -> UpstreamResult<NodeInfo> {
            self.call()?;
            Ok(self.node_info.clone())
        }

        async fn fetch_syncing(&self) -> UpstreamResult<bool> {
            self.call()?;
            Ok(self.syncing)
        }

        async fn fetch_latest_block(&self) -> UpstreamResult<BlockResponse> {
            self.call()?;
            Ok(self.block.clone())
        }

        async fn fetch_block_at(&self, _height: i64) -> UpstreamResult<BlockResponse> {
            self.call()?;
            Ok(self.block.clone())
        }

        async fn fetch_latest_validators(
            &self,
            pagination: Option<PageRequest>,
        ) -> UpstreamResult<ValidatorSet> {
            self.call()?;
            self.record_validator_request(None, pagination);
            Ok(self.validators.clone())
        }

        async fn fetch_validators_at(
            &self,
            height: i64,
            pagination: Option<PageRequest>,
        ) -> UpstreamResult<ValidatorSet> {
            self.call()?;
            self.record_validator_request(Some(height), pagination);
            Ok(self.validators.clone())
        }

        async fn fetch_abci_info_document(&self) -> UpstreamResult<serde_json::Value> {
            self.call()?;
            Ok(self.abci.clone())
        }

        async fn fetch_status_document(&self) -> UpstreamResult<serde_json::Value> {
            self.call()?;
            Ok(self.status.clone())
        }
    }

    fn module(path: &str) -> tm::Module {
        tm::Module {
            path:    path.into(),
            version: "v1.0.0".into(),
            sum:     format!("h1:{path}="),
        }
    }

    #[tokio::test]
    async fn test_node_info_is_idempotent_and_keeps_module_order() {
        let upstream = MockUpstream {
            node_info: NodeInfo {
                default_node_info:   None,
                application_version: tm::VersionInfo {
                    name: "osmosis".into(),
                    app_name: "osmosisd".into(),
                    version: "15.0.0".into(),
                    build_deps: vec![module("github.com/b"), module("github.com/a")],
                    cosmos_sdk_version: "v0.45.0".into(),
                    ..Default::default()
                },
            },
            ..Default::default()
        };
        let gateway = QueryGateway::new(upstream);
        let first = gateway.get_node_info().await.expect("node info");
        let second = gateway.get_node_info().await.expect("node info");
        assert_eq!(first, second);
        assert_eq!(gateway.upstream.calls(), 2);

        let version = first.application_version.expect("version is always set");
        assert_eq!(version.app_name, "osmosisd");
        let paths: Vec<_> = version.build_deps.iter().map(|m| m.path.as_str()).collect();
        assert_eq!(paths, ["github.com/b", "github.com/a"]);
    }

    #[tokio::test]
    async fn test_node_info_without_build_deps() {
        let gateway = QueryGateway::new(MockUpstream::default());
        let info = gateway.get_node_info().await.expect("node info");
        assert!(info
            .application_version
            .expect("version is always set")
            .build_deps
            .is_empty());
    }

    #[tokio::test]
    async fn test_syncing_passthrough() {
        for syncing in [true, false] {
            let gateway = QueryGateway::new(MockUpstream {
                syncing,
                ..Default::default()
            });
            let response = gateway.get_syncing().await.expect("syncing");
            assert_eq!(response.syncing, syncing);
        }
    }

    #[tokio::test]
    async fn test_block_passthrough() {
        let block_id = BlockId {
            hash: (0u8..32).collect(),
            ..Default::default()
        };
        let gateway = QueryGateway::new(MockUpstream {
            block: BlockResponse {
                block_id: block_id.clone(),
                block:    Block::default(),
            },
            ..Default::default()
        });
        let response = gateway.get_block_by_height(42).await.expect("block");
        assert_eq!(response.block_id, Some(block_id));
        assert_eq!(response.block, Some(Block::default()));
    }

    #[tokio::test]
    async fn test_invalid_height_is_rejected_before_upstream() {
        let gateway = QueryGateway::new(MockUpstream::default());
        for height in [0, -1, i64::MIN] {
            let err = gateway
                .get_block_by_height(height)
                .await
                .expect_err("height is invalid");
            assert!(matches!(err, GatewayError::Validation(_)), "{err}");
            let err = gateway
                .get_validator_set_by_height(height, None)
                .await
                .expect_err("height is invalid");
            assert!(matches!(err, GatewayError::Validation(_)), "{err}");
        }
        assert_eq!(gateway.upstream.calls(), 0);
        gateway.get_block_by_height(1).await.expect("height 1 is valid");
        assert_eq!(gateway.upstream.calls(), 1);
    }

    #[tokio::test]
    async fn test_validator_keys_are_byte_exact() {
        let key = prost_types::Any {
            type_url: "/cosmos.crypto.ed25519.PubKey".into(),
            value:    vec![0x0a, 0x20, 0x00, 0xff, 0x80, 0x7f],
        };
        let pagination = crate::generated::cosmos::base::query::v1beta1::PageResponse {
            next_key: vec![1, 2, 3],
            total:    150,
        };
        let gateway = QueryGateway::new(MockUpstream {
            validators: ValidatorSet {
                block_height: 1000,
                validators:   vec![tm::Validator {
                    address:           "osmovalcons1abc".into(),
                    pub_key:           Some(key.clone()),
                    voting_power:      12,
                    proposer_priority: -3,
                }],
                pagination:   Some(pagination.clone()),
            },
            ..Default::default()
        });
        let response = gateway
            .get_latest_validator_set(None)
            .await
            .expect("validators");
        assert_eq!(response.block_height, 1000);
        assert_eq!(response.pagination, Some(pagination.clone()));
        assert_eq!(response.validators.len(), 1);
        let v = &response.validators[0];
        assert_eq!(v.pub_key.as_ref(), Some(&key));
        assert_eq!(v.voting_power, 12);
        assert_eq!(v.proposer_priority, -3);

        let page = PageRequest {
            key:         vec![0x00, 0xfe],
            offset:      0,
            limit:       50,
            count_total: true,
            reverse:     false,
        };
        let response = gateway
            .get_validator_set_by_height(5, Some(page.clone()))
            .await
            .expect("validators at height");
        assert_eq!(response.pagination, Some(pagination));
        assert_eq!(response.validators.len(), 1);
        assert_eq!(response.validators[0].pub_key.as_ref(), Some(&key));
        assert_eq!(response.validators[0].address, "osmovalcons1abc");

        let requests = gateway
            .upstream
            .validator_requests
            .lock()
            .expect("not poisoned")
            .clone();
        assert_eq!(requests, [(None, None), (Some(5), Some(page))]);
    }

    #[tokio::test]
    async fn test_abci_info_extraction() {
        let gateway = QueryGateway::new(MockUpstream {
            abci: json!({
                "jsonrpc": "2.0",
                "id": -1,
                "result": {"response": {
                    "data": "OsmosisApp",
                    "version": "0.34.24",
                    "app_version": "1",
                    "last_block_height": "1000"
                }}
            }),
            ..Default::default()
        });
        let response = gateway.get_abci_info().await.expect("abci info");
        assert_eq!(response.jsonrpc, "2.0");
        assert_eq!(response.id, -1);
        assert_eq!(
            response.response,
            Some(v1::AbciResponse {
                data:        "OsmosisApp".into(),
                version:     "0.34.24".into(),
                app_version: "1".into(),
            })
        );
    }

    #[tokio::test]
    async fn test_abci_info_optional_fields_default() {
        let gateway = QueryGateway::new(MockUpstream {
            abci: json!({"result": {"response": {"version": "0.37.0", "app_version": "2"}}}),
            ..Default::default()
        });
        let response = gateway.get_abci_info().await.expect("abci info");
        assert_eq!(response.jsonrpc, "");
        assert_eq!(response.id, 0);
        assert_eq!(response.response.expect("response is set").data, "");
    }

    #[tokio::test]
    async fn test_abci_info_schema_mismatch() {
        for abci in [
            json!({"result": {"response": {"app_version": "1"}}}),
            json!({"result": {"response": {"version": ["0.34"], "app_version": "1"}}}),
            json!({"result": null}),
        ] {
            let gateway = QueryGateway::new(MockUpstream {
                abci,
                ..Default::default()
            });
            let err = gateway.get_abci_info().await.expect_err("schema mismatch");
            assert!(matches!(err, GatewayError::SchemaMismatch(_)), "{err}");
        }
    }

    #[tokio::test]
    async fn test_status_result_reserialized() {
        let gateway = QueryGateway::new(MockUpstream {
            status: json!({
                "jsonrpc": "2.0",
                "id": -1,
                "result": {"sync_info": {"latest_block_height": "1000", "catching_up": false}, "node_info": {"network": "osmosis-1"}}
            }),
            ..Default::default()
        });
        let response = gateway.get_status_info().await.expect("status");
        assert_eq!(
            response.response_string,
            r#"{"sync_info":{"latest_block_height":"1000","catching_up":false},"node_info":{"network":"osmosis-1"}}"#
        );

        let gateway = QueryGateway::new(MockUpstream {
            status: json!({"jsonrpc": "2.0", "id": -1}),
            ..Default::default()
        });
        let err = gateway.get_status_info().await.expect_err("no result");
        assert!(matches!(err, GatewayError::SchemaMismatch(_)), "{err}");
    }

    #[tokio::test]
    async fn test_upstream_failures_are_classified() {
        let gateway = QueryGateway::new(MockUpstream {
            fail_with: Some(tonic::Code::NotFound),
            ..Default::default()
        });
        let err = gateway
            .get_block_by_height(100)
            .await
            .expect_err("upstream fails");
        assert!(err.is_not_found());

        let gateway = QueryGateway::new(MockUpstream {
            fail_with: Some(tonic::Code::Unavailable),
            ..Default::default()
        });
        let err = gateway.get_syncing().await.expect_err("upstream fails");
        assert!(matches!(err, GatewayError::Connection(_)), "{err}");
    }

    #[tokio::test]
    async fn test_service_maps_errors_to_status() {
        use grpc_query_service_server::GrpcQueryService;
        let gateway = QueryGateway::new(MockUpstream::default());
        let status = GrpcQueryService::get_block_by_height(
            &gateway,
            tonic::Request::new(v1::GetBlockByHeightRequest { height: 0 }),
        )
        .await
        .expect_err("height is invalid");
        assert_eq!(status.code(), tonic::Code::InvalidArgument);
        assert_eq!(
            GatewayError::from_status(status).kind(),
            crate::endpoints::ErrorKind::Validation
        );
    }

    #[test]
    fn test_descriptor_set_describes_service() {
        use prost::Message;
        let set = prost_types::FileDescriptorSet::decode(FILE_DESCRIPTOR_SET)
            .expect("valid descriptor set");
        let file = set
            .file
            .iter()
            .find(|f| f.package() == "gateway.v1")
            .expect("gateway file");
        let service = &file.service[0];
        assert_eq!(service.name(), "GrpcQueryService");
        assert_eq!(
            format!("{}.{}", file.package(), service.name()),
            grpc_query_service_server::SERVICE_NAME
        );
        let methods: Vec<_> = service.method.iter().map(|m| m.name()).collect();
        assert_eq!(methods, [
            "GetNodeInfo",
            "GetSyncing",
            "GetLatestBlock",
            "GetBlockByHeight",
            "GetLatestValidatorSet",
            "GetValidatorSetByHeight",
            "GetABCIInfo",
            "GetStatusInfo",
        ]);

        // Every import and every referenced type is part of the set.
        let names: Vec<_> = set.file.iter().map(|f| f.name()).collect();
        let mut types = Vec::new();
        for f in &set.file {
            for m in &f.message_type {
                types.push(format!(".{}.{}", f.package(), m.name()));
            }
            for e in &f.enum_type {
                types.push(format!(".{}.{}", f.package(), e.name()));
            }
        }
        for f in &set.file {
            for dep in &f.dependency {
                assert!(names.contains(&dep.as_str()), "{} imports {dep}", f.name());
            }
            for field in f.message_type.iter().flat_map(|m| &m.field) {
                if let Some(type_name) = &field.type_name {
                    assert!(types.contains(type_name), "unknown type {type_name}");
                }
            }
        }
    }
}
