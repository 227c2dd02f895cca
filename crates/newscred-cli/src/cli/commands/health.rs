//! `newscred health` – probe the analysis API.

use anyhow::{bail, Context, Result};
use newscred_core::config::NewsCredConfig;
use newscred_core::endpoint::Endpoint;
use newscred_core::health::check_health;
use newscred_core::transport::CurlTransport;

pub async fn run_health(cfg: &NewsCredConfig, endpoint: Endpoint) -> Result<()> {
    let transport = CurlTransport::from_config(cfg);
    let status = tokio::task::spawn_blocking({
        let endpoint = endpoint.clone();
        move || check_health(&transport, &endpoint)
    })
    .await
    .context("health task join")?
    .with_context(|| format!("probing {}", endpoint.health_url()))?;

    println!("{}: {}", endpoint.base(), status.status);
    if !status.is_healthy() {
        bail!("analysis API reports status {:?}", status.status);
    }
    Ok(())
}
