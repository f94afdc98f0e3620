// Allow panic/unwrap/expect in tests (denied globally via Cargo.toml lints)
#![cfg_attr(
    test,
    allow(
        clippy::panic,
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic_in_result_fn,
        clippy::unwrap_in_result,
        clippy::arithmetic_side_effects,
        clippy::indexing_slicing
    )
)]

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use site_counts::logging::{init_logging, parse_level, parse_rotation, LogConfig};
use site_counts::{read_config, InMemorySite, PanelConfig, PanelRenderer, RenderContext};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, Level};

/// Site Counts - render the content summary panel for a site snapshot
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Site snapshot (JSON or YAML) with content types and documents
    #[arg(short, long, env = "SITE_COUNTS_SITE")]
    site: PathBuf,

    /// Panel configuration file (JSON or YAML); defaults apply when absent
    #[arg(short, long, env = "SITE_COUNTS_CONFIG")]
    config: Option<PathBuf>,

    /// Raw `post_id` request parameter
    #[arg(long)]
    post_id: Option<String>,

    /// Id of the document currently being viewed
    #[arg(long, allow_hyphen_values = true)]
    current_id: Option<i64>,

    /// CSS class applied to the panel wrapper
    #[arg(long, default_value = "")]
    class_name: String,

    /// Log level: trace, debug, info, warn, or error (`RUST_LOG` overrides)
    #[arg(long, env = "SITE_COUNTS_LOG_LEVEL", default_value = "info", value_parser = parse_level)]
    log_level: Level,

    /// Enable JSON log format (for log aggregation)
    #[arg(long, env = "SITE_COUNTS_LOG_JSON", default_value = "false")]
    log_json: bool,

    /// Log rotation period: daily, hourly, or never
    #[arg(long, env = "SITE_COUNTS_LOG_ROTATION", default_value = "daily")]
    log_rotation: String,

    /// Custom log directory (default: ~/.site-counts/logs)
    #[arg(long, env = "SITE_COUNTS_LOG_DIR")]
    log_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Install color-eyre error hooks for colored error output
    color_eyre::install()?;

    let args = Args::parse();

    let mut log_config = LogConfig {
        log_level: args.log_level,
        json_format: args.log_json,
        rotation: parse_rotation(&args.log_rotation),
        ..LogConfig::default()
    };
    if let Some(dir) = args.log_dir {
        log_config.log_dir = dir;
    }
    init_logging(&log_config).wrap_err_with(|| {
        format!("Failed to initialize logging (logs: {})", log_config.log_file().display())
    })?;

    let config = match &args.config {
        Some(path) => read_config(path)
            .await
            .wrap_err_with(|| format!("Failed to load panel config {}", path.display()))?
            .unwrap_or_default(),
        None => PanelConfig::default(),
    };

    let site = InMemorySite::load(&args.site)
        .await
        .wrap_err_with(|| format!("Failed to load site snapshot {}", args.site.display()))?;
    let renderer = PanelRenderer::for_site(&Arc::new(site), config)?;

    let ctx = RenderContext {
        current_document_id: args.current_id,
        requested_identifier: args.post_id,
        css_class_name: args.class_name,
    };
    info!(site = %args.site.display(), "Rendering panel");
    let markup = renderer.render(&ctx).await?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(markup.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
