//! Serve the query gateway in front of a Cosmos/Tendermint node until
//! interrupted.
use anyhow::Context;
use clap::AppSettings;
use cosmos_query_gateway::{config::GatewayConfig, gateway};
use std::{net::SocketAddr, time::Duration};
use structopt::StructOpt;
use tokio_util::sync::CancellationToken;
use tracing::Level;

#[derive(StructOpt)]
struct App {
    #[structopt(
        long = "upstream-grpc",
        help = "gRPC query endpoint of the upstream node.",
        default_value = "http://localhost:9090"
    )]
    upstream_grpc:   tonic::transport::Endpoint,
    #[structopt(
        long = "upstream-rpc",
        help = "Base URL of the JSON-RPC interface of the upstream node.",
        default_value = "https://rpc.osmosis.zone"
    )]
    upstream_rpc:    reqwest::Url,
    #[structopt(
        long = "listen",
        help = "Address to serve the gateway on.",
        default_value = "127.0.0.1:9091"
    )]
    listen:          SocketAddr,
    #[structopt(
        long = "request-timeout",
        help = "Upper bound on a single call in seconds.",
        default_value = "10"
    )]
    request_timeout: u64,
    #[structopt(
        long = "connect-timeout",
        help = "Upper bound on connecting to the upstream node in seconds.",
        default_value = "5"
    )]
    connect_timeout: u64,
    #[structopt(
        long = "log-level",
        help = "Maximum log level.",
        default_value = "info"
    )]
    log_level:       Level,
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
            .with_target("query_gateway", app.log_level);
        tracing_subscriber::registry()
            .with(tracing_subscriber::fmt::layer())
            .with(log_filter)
            .init();
    }

    let config = GatewayConfig::new(app.upstream_grpc, app.upstream_rpc)
        .set_request_timeout(Duration::from_secs(app.request_timeout))
        .set_connect_timeout(Duration::from_secs(app.connect_timeout))
        .set_listen_address(app.listen);

    let shutdown = CancellationToken::new();
    {
        let shutdown = shutdown.clone();
        tokio::spawn(async move {
            match tokio::signal::ctrl_c().await {
                Ok(()) => {
                    tracing::info!("Received interrupt, shutting down.");
                    shutdown.cancel();
                }
                Err(e) => tracing::error!("Unable to listen for interrupts: {e}"),
            }
        });
    }

    gateway::serve(&config, shutdown.cancelled_owned())
        .await
        .with_context(|| format!("Gateway on {} failed", config.listen_address()))?;
    Ok(())
}
