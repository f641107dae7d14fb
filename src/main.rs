use clap::{Parser, ValueEnum};
use panoramix::command::parser::parse_params;
use panoramix::engine::store::HttpStore;
use panoramix::engine::viz::{HighchartsSink, VisualizationAdapter};
use panoramix::logging;
use panoramix::shared::config::CONFIG;
use panoramix::shared::response::{JsonRenderer, Renderer, Response, UnixRenderer};
use std::io::Write;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Json,
    Unix,
}

#[derive(Parser)]
#[command(name = "panoramix")]
#[command(about = "Run a visualization query against a broker", long_about = None)]
struct Args {
    /// Data source to query
    datasource: String,

    /// Request parameters as KEY=VALUE (e.g. groupby=country since=7days)
    params: Vec<String>,

    /// Visualization type, overrides any viz_type parameter
    #[arg(long)]
    viz: Option<String>,

    /// Broker base URL, overrides the configured one
    #[arg(long)]
    broker_url: Option<String>,

    /// Store timeout in milliseconds, overrides the configured one
    #[arg(long)]
    timeout_ms: Option<u64>,

    #[arg(long, value_enum, default_value = "json")]
    format: OutputFormat,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init(&CONFIG.logging)?;

    let mut params = parse_params(&args.params)?;
    if let Some(viz) = &args.viz {
        params = std::iter::once(("viz_type", viz.as_str()))
            .chain(params.iter().filter(|(k, _)| *k != "viz_type"))
            .collect();
    }

    let broker_url = args
        .broker_url
        .as_deref()
        .unwrap_or(&CONFIG.store.broker_url);
    let timeout = args
        .timeout_ms
        .map(Duration::from_millis)
        .unwrap_or_else(|| CONFIG.store.timeout());

    info!(target: "panoramix::cli", datasource = %args.datasource, broker_url, "Starting request");

    let store = Arc::new(HttpStore::new(broker_url)?);
    let adapter = VisualizationAdapter::new(
        store,
        Arc::new(HighchartsSink),
        CONFIG.query.clone(),
        timeout,
    );

    let (response, failed) = match adapter.render_request(&args.datasource, &params).await {
        Ok(viz) => (Response::ok(serde_json::to_value(&viz)?), false),
        Err(e) => {
            e.log_error();
            (Response::error(e.status(), &e), true)
        }
    };

    let renderer: Box<dyn Renderer> = match args.format {
        OutputFormat::Json => Box::new(JsonRenderer),
        OutputFormat::Unix => Box::new(UnixRenderer),
    };
    std::io::stdout().write_all(&renderer.render(&response))?;

    if failed {
        anyhow::bail!("request failed with {}", response.status);
    }
    Ok(())
}
