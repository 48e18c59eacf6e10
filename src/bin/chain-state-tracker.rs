//! Record consecutive block heights and hashes of the chain and write them to
//! a JSON file.
//!
//! By default blocks are queried through a running query gateway. With
//! `--upstream-grpc` the node is queried directly instead.
use anyhow::Context;
use clap::AppSettings;
use cosmos_query_gateway::{
    config::{GatewayConfig, TrackerConfig},
    gateway::{Client, QueryGateway},
    tracker::{BlockSource, ChainStateTracker, TrackerRecord},
    upstream::UpstreamClient,
};
use std::{path::PathBuf, time::Duration};
use structopt::StructOpt;
use tokio_util::sync::CancellationToken;
use tracing::Level;

#[derive(StructOpt)]
struct App {
    #[structopt(
        long = "gateway",
        help = "gRPC endpoint of the query gateway.",
        default_value = "http://127.0.0.1:9091"
    )]
    gateway:       tonic::transport::Endpoint,
    #[structopt(
        long = "upstream-grpc",
        help = "Query this node directly instead of going through a gateway."
    )]
    upstream_grpc: Option<tonic::transport::Endpoint>,
    #[structopt(
        long = "upstream-rpc",
        help = "Base URL of the JSON-RPC interface of the node, used with `--upstream-grpc`.",
        default_value = "https://rpc.osmosis.zone"
    )]
    upstream_rpc:  reqwest::Url,
    #[structopt(
        long = "wait",
        help = "Seconds to wait after observing the latest block.",
        default_value = "30"
    )]
    wait:          u64,
    #[structopt(
        long = "iterations",
        help = "Number of blocks to query after the latest one.",
        default_value = "5"
    )]
    iterations:    u32,
    #[structopt(
        long = "output",
        help = "File to write the record to.",
        default_value = "info.json"
    )]
    output:        PathBuf,
    #[structopt(
        long = "log-level",
        help = "Maximum log level.",
        default_value = "info"
    )]
    log_level:     Level,
}

async fn track<S: BlockSource>(
    source: S,
    config: TrackerConfig,
    cancel: &CancellationToken,
) -> anyhow::Result<TrackerRecord> {
    let mut tracker = ChainStateTracker::new(source, config);
    let record = tracker.run(cancel).await?;
    Ok(record)
}

#[tokio::main(flavor = "multi_thread")]
async fn main() -> anyhow::Result<()> {
    let app = {
        let app = App::clap().global_setting(AppSettings::ColoredHelp);
        let matches = app.get_matches();
        App::from_clap(&matches)
    };

    {
        use tracing_subscriber::prelude::*;
        let log_filter = tracing_subscriber::filter::Targets::new()
            .with_target(module_path!(), app.log_level)
            .with_target("chain_state_tracker", app.log_level)
            .with_target("query_gateway", app.log_level);
        tracing_subscriber::registry()
            .with(tracing_subscriber::fmt::layer())
            .with(log_filter)
            .init();
    }

    let config = TrackerConfig::new(app.output)
        .set_wait_interval(Duration::from_secs(app.wait))
        .set_iterations(app.iterations);

    let cancel = CancellationToken::new();
    {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                tracing::info!("Received interrupt, stopping.");
                cancel.cancel();
            }
        });
    }

    let record = match app.upstream_grpc {
        Some(upstream_grpc) => {
            let gateway_config = GatewayConfig::new(upstream_grpc, app.upstream_rpc);
            let upstream = UpstreamClient::connect(&gateway_config)
                .await
                .context("Cannot connect to the upstream node")?;
            track(QueryGateway::new(upstream), config.clone(), &cancel).await?
        }
        None => {
            let client = Client::new(app.gateway.clone())
                .await
                .with_context(|| format!("Cannot connect to the gateway at {}", app.gateway.uri()))?;
            track(client, config.clone(), &cancel).await?
        }
    };
    tracing::info!(
        "Recorded {} blocks to {}.",
        record.len(),
        config.output().display()
    );
    Ok(())
}
