use std::net::{IpAddr, Ipv4Addr};

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;
use url::Url;

pub mod graphql;

/// Start the mock storefront graphql server and serve requests until the
/// process is terminated.
pub async fn start_server(host: IpAddr, port: u16) -> anyhow::Result<()> {
    info!("Starting storefront graphql testing server on {host}:{port}");
    info!(
        "Graphql endpoint: http://{host}:{port}{}",
        graphql::GRAPHQL_ROUTE
    );
    info!(
        "Comments containing \"fail\" and the recaptcha token \"invalid\" are rejected, an \
         rmaNumber adds a deprecation error next to the data, product {} is the only product \
         with a gallery",
        graphql::GALLERY_PRODUCT_ID
    );

    let listener = TcpListener::bind((host, port))
        .await
        .with_context(|| format!("Failed to bind to {host}:{port}"))?;
    axum::serve(listener, graphql::router())
        .await
        .context("Failed to start HTTP server")
}

/// Start the mock storefront graphql server on an ephemeral local port in the
/// background and return its graphql endpoint.
pub async fn start_background_server() -> anyhow::Result<Url> {
    let listener = TcpListener::bind((IpAddr::V4(Ipv4Addr::LOCALHOST), 0))
        .await
        .context("Failed to bind to ephemeral port")?;
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        if let Err(err) = axum::serve(listener, graphql::router()).await {
            tracing::error!("storefront graphql testing server failed: {err}");
        }
    });

    format!("http://{addr}{}", graphql::GRAPHQL_ROUTE)
        .parse()
        .context("Failed to build graphql endpoint url")
}
