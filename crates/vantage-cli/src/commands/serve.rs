use std::sync::Arc;

use anyhow::Context;
use vantage_config::VantageConfig;
use vantage_enrich::{Enricher, GeminiClient};

use crate::cli::root_commands::ServeArgs;

/// Handle `vantage serve`. Runs until Ctrl-C.
pub async fn handle(args: &ServeArgs, mut config: VantageConfig) -> anyhow::Result<()> {
    if let Some(host) = &args.host {
        config.server.host.clone_from(host);
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }

    config
        .gemini
        .require()
        .context("the enrichment server needs a Gemini API key (set GEMINI_API_KEY)")?;
    let client = GeminiClient::from_config(&config.gemini)?;
    let enricher = Enricher::new(client, config.gemini.model.clone());

    let listener = vantage_server::bind(&config.server).await?;
    vantage_server::serve(listener, vantage_server::router(Arc::new(enricher))).await?;
    Ok(())
}
