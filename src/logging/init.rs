use color_eyre::eyre::Result;
use tracing_appender::rolling::RollingFileAppender;
use tracing_error::ErrorLayer;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan, MakeWriter},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    Layer, Registry,
};

use super::{LogConfig, LOG_FILENAME};

type OutputLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Install the global subscriber for the preview binary.
///
/// Events go to a rolling file under `log_dir` and to stderr, each filtered by
/// [`LogConfig::env_filter`]. Stdout stays free for the rendered panel.
pub fn init_logging(config: &LogConfig) -> Result<()> {
    std::fs::create_dir_all(&config.log_dir)?;
    let file_appender =
        RollingFileAppender::new(config.rotation.clone(), &config.log_dir, LOG_FILENAME);

    let outputs = vec![
        output_layer(file_appender, config, false),
        output_layer(std::io::stderr, config, true),
    ];
    tracing_subscriber::registry()
        .with(outputs)
        .with(ErrorLayer::default())
        .try_init()?;
    Ok(())
}

/// One filtered fmt layer writing to `writer`, JSON or plain text.
fn output_layer<W>(writer: W, config: &LogConfig, ansi: bool) -> OutputLayer
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    let layer = fmt::layer()
        .with_writer(writer)
        .with_span_events(FmtSpan::CLOSE)
        .with_target(true);
    if config.json_format {
        layer
            .json()
            .with_current_span(true)
            .with_filter(config.env_filter())
            .boxed()
    } else {
        layer
            .with_ansi(ansi)
            .with_filter(config.env_filter())
            .boxed()
    }
}
