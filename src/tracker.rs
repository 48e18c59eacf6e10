//! Records the progression of the chain as seen through the gateway.
//!
//! A [`ChainStateTracker`] observes the latest block, lets the chain advance
//! for a while, and then queries the following blocks one by one. The result
//! is an ordered, contiguous list of heights and block hashes which is written
//! to a file as
//!
//! ```json
//! {"test_result":[{"height":100,"hash":"ab12..."},{"height":101,"hash":"..."}]}
//! ```
//!
//! A run either produces the complete record or nothing at all.
use crate::{
    config::TrackerConfig,
    endpoints::{GatewayError, GatewayResult},
    gateway::{Client, QueryGateway},
    upstream::Upstream,
};
use serde::{Deserialize, Serialize};
use std::{future::Future, io::Write, path::Path};
use tendermint_proto::types::{Block, BlockId};
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tonic::async_trait;

/// Height and hash of a block as returned by a [`BlockSource`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlockObservation {
    pub height: i64,
    pub hash:   Vec<u8>,
}

#[async_trait]
/// Where the tracker gets its blocks from. Implemented by the gateway
/// [`Client`], and by [`QueryGateway`] for use within the same process.
pub trait BlockSource: Send {
    async fn latest_block(&mut self) -> GatewayResult<BlockObservation>;

    async fn block_at(&mut self, height: i64) -> GatewayResult<BlockObservation>;
}

fn observation(block_id: Option<BlockId>, block: Option<Block>) -> GatewayResult<BlockObservation> {
    let header = block
        .and_then(|b| b.header)
        .ok_or_else(|| GatewayError::SchemaMismatch("block has no header".into()))?;
    let block_id =
        block_id.ok_or_else(|| GatewayError::SchemaMismatch("missing block_id".into()))?;
    if block_id.hash.is_empty() {
        return Err(GatewayError::SchemaMismatch(format!(
            "block at height {} has an empty hash",
            header.height
        )));
    }
    Ok(BlockObservation {
        height: header.height,
        hash:   block_id.hash,
    })
}

#[async_trait]
impl BlockSource for Client {
    async fn latest_block(&mut self) -> GatewayResult<BlockObservation> {
        let response = self.get_latest_block().await?;
        observation(response.block_id, response.block)
    }

    async fn block_at(&mut self, height: i64) -> GatewayResult<BlockObservation> {
        let response = self.get_block_by_height(height).await?;
        observation(response.block_id, response.block)
    }
}

#[async_trait]
impl<U: Upstream> BlockSource for QueryGateway<U> {
    async fn latest_block(&mut self) -> GatewayResult<BlockObservation> {
        let response = self.get_latest_block().await?;
        observation(response.block_id, response.block)
    }

    async fn block_at(&mut self, height: i64) -> GatewayResult<BlockObservation> {
        let response = self.get_block_by_height(height).await?;
        observation(response.block_id, response.block)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackedBlock {
    pub height: i64,
    /// Lowercase hex encoding of the block hash.
    pub hash:   String,
}

impl From<BlockObservation> for TrackedBlock {
    fn from(o: BlockObservation) -> Self {
        Self {
            height: o.height,
            hash:   hex::encode(o.hash),
        }
    }
}

/// The outcome of a tracker run, ordered by height.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackerRecord {
    pub test_result: Vec<TrackedBlock>,
}

impl TrackerRecord {
    pub fn len(&self) -> usize { self.test_result.len() }

    pub fn is_empty(&self) -> bool { self.test_result.is_empty() }
}

#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("Tracker run aborted after {} blocks: {source}", .completed.len())]
    /// A query failed. `completed` holds what was observed before the
    /// failure; it is not persisted.
    Aborted {
        completed: TrackerRecord,
        source:    GatewayError,
    },
    #[error("Asked for the block at height {expected} but got height {actual}.")]
    HeightMismatch { expected: i64, actual: i64 },
    #[error("Cannot query {iterations} blocks after height {latest} without overflowing the height.")]
    HeightOverflow { latest: i64, iterations: u32 },
    #[error("Tracker run was cancelled.")]
    Cancelled,
    #[error("Could not write the record: {0}")]
    Persist(#[from] std::io::Error),
    #[error("Could not serialize the record: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type TrackerResult<A> = Result<A, TrackerError>;

/// Tracks the chain through a [`BlockSource`]. See the module documentation
/// for the algorithm.
pub struct ChainStateTracker<S> {
    source: S,
    config: TrackerConfig,
}

impl<S: BlockSource> ChainStateTracker<S> {
    pub fn new(source: S, config: TrackerConfig) -> Self { Self { source, config } }

    pub fn config(&self) -> &TrackerConfig { &self.config }

    /// Observe the chain and return the record without persisting it. The
    /// steps are strictly sequential. Cancelling `cancel` stops the run at the
    /// next wait or query.
    pub async fn observe(&mut self, cancel: &CancellationToken) -> TrackerResult<TrackerRecord> {
        let mut record = TrackerRecord::default();
        let latest = step(cancel, &record, self.source.latest_block()).await?;
        tracing::info!(
            target: "chain_state_tracker",
            "Latest block is at height {}. Waiting {}s.",
            latest.height,
            self.config.wait_interval().as_secs()
        );
        let iterations = self.config.iterations();
        let last = latest
            .height
            .checked_add(i64::from(iterations))
            .ok_or(TrackerError::HeightOverflow {
                latest: latest.height,
                iterations,
            })?;
        let first = latest.height;
        record.test_result.push(latest.into());

        tokio::select! {
            _ = cancel.cancelled() => return Err(TrackerError::Cancelled),
            _ = tokio::time::sleep(self.config.wait_interval()) => {}
        }

        for next in (first..=last).skip(1) {
            let block = step(cancel, &record, self.source.block_at(next)).await?;
            if block.height != next {
                return Err(TrackerError::HeightMismatch {
                    expected: next,
                    actual:   block.height,
                });
            }
            tracing::debug!(
                target: "chain_state_tracker",
                "Block {next} has hash {}.",
                hex::encode(&block.hash)
            );
            record.test_result.push(block.into());
        }
        Ok(record)
    }

    /// Observe the chain and persist the record to the configured output
    /// file. On any failure, including cancellation, the output file is left
    /// as it was.
    pub async fn run(&mut self, cancel: &CancellationToken) -> TrackerResult<TrackerRecord> {
        let record = match self.observe(cancel).await {
            Ok(record) => record,
            Err(e) => {
                tracing::warn!(target: "chain_state_tracker", "{e}");
                return Err(e);
            }
        };
        let json = {
            let record = record.clone();
            let output = self.config.output().to_path_buf();
            tokio::task::spawn_blocking(move || persist(&record, &output))
                .await
                .map_err(|e| TrackerError::Persist(std::io::Error::other(e)))??
        };
        tracing::info!(target: "chain_state_tracker", "{json}");
        Ok(record)
    }
}

/// Run a single query of the tracker, stopping early if `cancel` fires.
async fn step<A>(
    cancel: &CancellationToken,
    record: &TrackerRecord,
    query: impl Future<Output = GatewayResult<A>>,
) -> TrackerResult<A> {
    tokio::select! {
        _ = cancel.cancelled() => Err(TrackerError::Cancelled),
        result = query => result.map_err(|source| TrackerError::Aborted {
            completed: record.clone(),
            source,
        }),
    }
}

/// Write the record to `path` atomically: the JSON is written to a temporary
/// file in the same directory which is then renamed over `path`. Returns the
/// JSON that was written.
pub fn persist(record: &TrackerRecord, path: &Path) -> TrackerResult<String> {
    let json = serde_json::to_string(record)?;
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    let mut file = tempfile::NamedTempFile::new_in(dir)?;
    writeln!(file, "{json}")?;
    file.as_file().sync_all()?;
    file.persist(path).map_err(|e| e.error)?;
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{collections::VecDeque, time::Duration};

    /// A chain whose block at height `h` has hash `[h as u8; 32]`.
    struct FakeChain {
        latest:       i64,
        /// Heights at which `block_at` fails with "not found".
        missing:      Vec<i64>,
        /// If set, `block_at` answers with this height instead.
        wrong_height: Option<i64>,
        requested:    VecDeque<i64>,
    }

    impl FakeChain {
        fn new(latest: i64) -> Self {
            Self {
                latest,
                missing: Vec::new(),
                wrong_height: None,
                requested: VecDeque::new(),
            }
        }

        fn block(height: i64) -> BlockObservation {
            BlockObservation {
                height,
                hash: vec![height as u8; 32],
            }
        }
    }

    #[async_trait]
    impl BlockSource for FakeChain {
        async fn latest_block(&mut self) -> GatewayResult<BlockObservation> {
            Ok(Self::block(self.latest))
        }

        async fn block_at(&mut self, height: i64) -> GatewayResult<BlockObservation> {
            self.requested.push_back(height);
            if self.missing.contains(&height) {
                return Err(GatewayError::UpstreamRpc(tonic::Status::not_found(
                    "height is not available",
                )));
            }
            Ok(Self::block(self.wrong_height.unwrap_or(height)))
        }
    }

    fn config(output: &Path) -> TrackerConfig {
        TrackerConfig::new(output).set_wait_interval(Duration::ZERO)
    }

    #[tokio::test]
    async fn test_contiguous_record_is_persisted() {
        let dir = tempfile::tempdir().expect("temp dir");
        let output = dir.path().join("info.json");
        let mut tracker = ChainStateTracker::new(FakeChain::new(100), config(&output));
        let record = tracker
            .run(&CancellationToken::new())
            .await
            .expect("run succeeds");

        let heights: Vec<_> = record.test_result.iter().map(|b| b.height).collect();
        assert_eq!(heights, [100, 101, 102, 103, 104, 105]);
        assert_eq!(record.test_result[1].hash, "65".repeat(32));
        assert_eq!(tracker.source.requested, [101, 102, 103, 104, 105]);

        let written = std::fs::read_to_string(&output).expect("file is written");
        let parsed: TrackerRecord = serde_json::from_str(&written).expect("valid JSON");
        assert_eq!(parsed, record);
        assert!(written.starts_with(r#"{"test_result":[{"height":100,"hash":"6464"#));
    }

    #[tokio::test]
    async fn test_failed_run_writes_nothing() {
        let dir = tempfile::tempdir().expect("temp dir");
        let output = dir.path().join("info.json");
        let mut chain = FakeChain::new(100);
        chain.missing.push(103);
        let mut tracker = ChainStateTracker::new(chain, config(&output));
        match tracker.run(&CancellationToken::new()).await {
            Err(TrackerError::Aborted { completed, source }) => {
                assert_eq!(completed.len(), 3);
                assert!(source.is_not_found());
            }
            other => panic!("Expected an aborted run, got {other:?}"),
        }
        assert!(!output.exists());
        // No temporary files are left behind either.
        assert_eq!(std::fs::read_dir(dir.path()).expect("readable").count(), 0);
    }

    #[tokio::test]
    async fn test_failed_run_keeps_previous_record() {
        let dir = tempfile::tempdir().expect("temp dir");
        let output = dir.path().join("info.json");
        std::fs::write(&output, "previous").expect("write");
        let mut chain = FakeChain::new(7);
        chain.wrong_height = Some(9);
        let mut tracker = ChainStateTracker::new(chain, config(&output));
        let err = tracker
            .run(&CancellationToken::new())
            .await
            .expect_err("heights do not match");
        assert!(matches!(err, TrackerError::HeightMismatch {
            expected: 8,
            actual:   9,
        }));
        assert_eq!(std::fs::read_to_string(&output).expect("read"), "previous");
    }

    #[tokio::test]
    async fn test_cancelled_during_wait() {
        let dir = tempfile::tempdir().expect("temp dir");
        let output = dir.path().join("info.json");
        let config = TrackerConfig::new(&output).set_wait_interval(Duration::from_secs(3600));
        let mut tracker = ChainStateTracker::new(FakeChain::new(1), config);
        let cancel = CancellationToken::new();
        let trigger = cancel.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(50)).await;
            trigger.cancel();
        });
        let err = tracker.run(&cancel).await.expect_err("cancelled");
        assert!(matches!(err, TrackerError::Cancelled));
        assert!(tracker.source.requested.is_empty());
        assert!(!output.exists());
    }

    #[tokio::test]
    async fn test_zero_iterations_records_latest_only() {
        let dir = tempfile::tempdir().expect("temp dir");
        let output = dir.path().join("info.json");
        let mut tracker =
            ChainStateTracker::new(FakeChain::new(5), config(&output).set_iterations(0));
        let record = tracker
            .run(&CancellationToken::new())
            .await
            .expect("run succeeds");
        assert_eq!(record.len(), 1);
        assert_eq!(record.test_result[0].height, 5);
    }

    #[tokio::test]
    async fn test_height_overflow_is_an_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let output = dir.path().join("info.json");
        let mut tracker = ChainStateTracker::new(FakeChain::new(i64::MAX - 2), config(&output));
        let err = tracker
            .run(&CancellationToken::new())
            .await
            .expect_err("heights past i64::MAX");
        assert!(matches!(err, TrackerError::HeightOverflow {
            latest:     _,
            iterations: 5,
        }));
        assert!(tracker.source.requested.is_empty());
        assert!(!output.exists());
    }

    #[tokio::test]
    async fn test_last_representable_height() {
        let dir = tempfile::tempdir().expect("temp dir");
        let output = dir.path().join("info.json");
        let mut tracker = ChainStateTracker::new(
            FakeChain::new(i64::MAX - 2),
            config(&output).set_iterations(2),
        );
        let record = tracker
            .run(&CancellationToken::new())
            .await
            .expect("run succeeds");
        assert_eq!(record.test_result.last().map(|b| b.height), Some(i64::MAX));
        assert_eq!(tracker.source.requested, [i64::MAX - 1, i64::MAX]);

        let mut tracker = ChainStateTracker::new(
            FakeChain::new(i64::MAX),
            config(&output).set_iterations(0),
        );
        let record = tracker
            .run(&CancellationToken::new())
            .await
            .expect("nothing to query");
        assert_eq!(record.len(), 1);
    }

    #[test]
    fn test_observation_requires_header() {
        let err = observation(Some(BlockId::default()), Some(Block::default()))
            .expect_err("no header");
        assert!(matches!(err, GatewayError::SchemaMismatch(_)));
    }

    #[test]
    fn test_observation_requires_hash() {
        let block = Block {
            header: Some(tendermint_proto::types::Header {
                height: 12,
                ..Default::default()
            }),
            ..Default::default()
        };
        let err = observation(Some(BlockId::default()), Some(block.clone()))
            .expect_err("empty hash");
        assert!(matches!(err, GatewayError::SchemaMismatch(_)), "{err}");

        let block_id = BlockId {
            hash: vec![0xab; 32],
            ..Default::default()
        };
        let o = observation(Some(block_id), Some(block)).expect("complete block");
        assert_eq!(o.height, 12);
        assert_eq!(o.hash, [0xab; 32]);
    }

    #[tokio::test]
    async fn test_empty_hash_aborts_run() {
        struct HashlessChain;

        #[async_trait]
        impl BlockSource for HashlessChain {
            async fn latest_block(&mut self) -> GatewayResult<BlockObservation> {
                Ok(FakeChain::block(3))
            }

            async fn block_at(&mut self, height: i64) -> GatewayResult<BlockObservation> {
                let block = Block {
                    header: Some(tendermint_proto::types::Header {
                        height,
                        ..Default::default()
                    }),
                    ..Default::default()
                };
                observation(Some(BlockId::default()), Some(block))
            }
        }

        let dir = tempfile::tempdir().expect("temp dir");
        let output = dir.path().join("info.json");
        let mut tracker = ChainStateTracker::new(HashlessChain, config(&output));
        match tracker.run(&CancellationToken::new()).await {
            Err(TrackerError::Aborted { completed, source }) => {
                assert_eq!(completed.len(), 1);
                assert!(matches!(source, GatewayError::SchemaMismatch(_)));
            }
            other => panic!("Expected an aborted run, got {other:?}"),
        }
        assert!(!output.exists());
    }
}
