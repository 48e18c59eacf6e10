//! A client for a running [`QueryGateway`](super::QueryGateway).
use crate::{
    endpoints::{GatewayError, GatewayResult},
    generated::{
        cosmos::base::query::v1beta1::PageRequest,
        gateway::v1::{self, grpc_query_service_client::GrpcQueryServiceClient},
    },
};
use tonic::transport::Channel;

#[derive(Clone, Debug)]
/// Client that connects to the gateway service over gRPC.
///
/// The client is cheap to clone; clones share the underlying connection.
/// Failed calls are reported as [`GatewayError`] with the same kind the
/// gateway produced.
pub struct Client {
    client: GrpcQueryServiceClient<Channel>,
}

impl Client {
    /// Construct a new client connection to the gateway at the given
    /// endpoint.
    ///
    /// ```no_run
    /// # tokio_test::block_on(async {
    /// use cosmos_query_gateway::{constants::DEFAULT_GATEWAY_ENDPOINT, gateway::Client};
    /// let mut client = Client::new(DEFAULT_GATEWAY_ENDPOINT).await?;
    /// let block = client.get_latest_block().await?;
    /// # Ok::<(), anyhow::Error>(())
    /// # });
    /// ```
    pub async fn new<E>(endpoint: E) -> Result<Self, tonic::transport::Error>
    where
        E: TryInto<tonic::transport::Endpoint>,
        E::Error: Into<Box<dyn std::error::Error + Send + Sync + 'static>>, {
        let client = GrpcQueryServiceClient::connect(endpoint).await?;
        Ok(Self { client })
    }

    /// Construct a client from an existing channel.
    pub fn from_channel(channel: Channel) -> Self {
        Self {
            client: GrpcQueryServiceClient::new(channel),
        }
    }

    pub async fn get_node_info(&mut self) -> GatewayResult<v1::GetNodeInfoResponse> {
        let response = self
            .client
            .get_node_info(v1::GetNodeInfoRequest::default())
            .await
            .map_err(GatewayError::from_status)?;
        Ok(response.into_inner())
    }

    pub async fn get_syncing(&mut self) -> GatewayResult<bool> {
        let response = self
            .client
            .get_syncing(v1::GetSyncingRequest::default())
            .await
            .map_err(GatewayError::from_status)?;
        Ok(response.into_inner().syncing)
    }

    pub async fn get_latest_block(&mut self) -> GatewayResult<v1::GetLatestBlockResponse> {
        let response = self
            .client
            .get_latest_block(v1::GetLatestBlockRequest::default())
            .await
            .map_err(GatewayError::from_status)?;
        Ok(response.into_inner())
    }

    pub async fn get_block_by_height(
        &mut self,
        height: i64,
    ) -> GatewayResult<v1::GetBlockByHeightResponse> {
        let response = self
            .client
            .get_block_by_height(v1::GetBlockByHeightRequest { height })
            .await
            .map_err(GatewayError::from_status)?;
        Ok(response.into_inner())
    }

    pub async fn get_latest_validator_set(
        &mut self,
        pagination: Option<PageRequest>,
    ) -> GatewayResult<v1::GetLatestValidatorSetResponse> {
        let response = self
            .client
            .get_latest_validator_set(v1::GetLatestValidatorSetRequest { pagination })
            .await
            .map_err(GatewayError::from_status)?;
        Ok(response.into_inner())
    }

    pub async fn get_validator_set_by_height(
        &mut self,
        height: i64,
        pagination: Option<PageRequest>,
    ) -> GatewayResult<v1::GetValidatorSetByHeightResponse> {
        let response = self
            .client
            .get_validator_set_by_height(v1::GetValidatorSetByHeightRequest { height, pagination })
            .await
            .map_err(GatewayError::from_status)?;
        Ok(response.into_inner())
    }

    pub async fn get_abci_info(&mut self) -> GatewayResult<v1::GetAbciInfoResponse> {
        let response = self
            .client
            .get_abci_info(v1::GetAbciInfoRequest::default())
            .await
            .map_err(GatewayError::from_status)?;
        Ok(response.into_inner())
    }

    /// The `status` document of the upstream node, parsed back into JSON.
    pub async fn get_status_info(&mut self) -> GatewayResult<serde_json::Value> {
        let response = self
            .client
            .get_status_info(v1::GetStatusInfoRequest::default())
            .await
            .map_err(GatewayError::from_status)?;
        serde_json::from_str(&response.into_inner().response_string)
            .map_err(|e| GatewayError::SchemaMismatch(format!("Invalid status document: {e}")))
    }
}
