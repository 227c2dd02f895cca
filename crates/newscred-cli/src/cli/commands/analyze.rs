//! `newscred analyze <url>` – submit an article for analysis and print the cards.

use anyhow::{bail, Context, Result};
use newscred_core::config::NewsCredConfig;
use newscred_core::controller::AnalysisController;
use newscred_core::endpoint::Endpoint;
use newscred_core::error::AnalysisError;
use newscred_core::model::AnalysisResult;
use newscred_core::render::{render_text, AnalysisReport};
use newscred_core::transport::CurlTransport;
use std::sync::Arc;

type Controller = AnalysisController<CurlTransport>;

pub async fn run_analyze(
    cfg: &NewsCredConfig,
    endpoint: Endpoint,
    url: &str,
    json: bool,
) -> Result<()> {
    let controller = Arc::new(AnalysisController::new(
        endpoint,
        CurlTransport::from_config(cfg),
    ));
    if !controller.can_submit(url) {
        bail!("no article URL given");
    }

    let outcome = submit(&controller, url).await?;
    for notice in controller.drain_notices() {
        eprintln!("{notice}");
    }
    let result = outcome.with_context(|| format!("analyzing {url}"))?;
    print_result(&result, json)
}

/// Runs the blocking submission off the runtime. Ctrl-C tears the controller
/// down, which aborts the transfer and discards any late response.
async fn submit(
    controller: &Arc<Controller>,
    url: &str,
) -> Result<Result<Arc<AnalysisResult>, AnalysisError>> {
    let mut task = tokio::task::spawn_blocking({
        let controller = Arc::clone(controller);
        let url = url.to_string();
        move || controller.submit(&url)
    });

    tokio::select! {
        joined = &mut task => joined.context("analysis task join"),
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("interrupted; cancelling analysis of {}", url);
            controller.teardown();
            task.await.context("analysis task join")
        }
    }
}

fn print_result(result: &AnalysisResult, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(result)?);
    } else {
        print!("{}", render_text(&AnalysisReport::from_result(result)));
    }
    Ok(())
}
