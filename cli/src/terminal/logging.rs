use colored::*;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::FormatEvent;
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::registry::LookupSpan;
use vls_common::config::Config;

const CRATE_PREFIX: &str = "vls_";

/// Installs the global subscriber. Logs go to stderr so stdout only carries
/// program output.
///
/// `RUST_LOG` takes priority over the level derived from `cfg`.
pub fn init_logging(cfg: &Config) -> anyhow::Result<()> {
    let filter: EnvFilter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cfg.log_level()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .event_format(VlsFormatter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialize logging: {e}"))
}

/// One line per event: a level symbol, then the fields.
///
/// | symbol | level |
/// |--------|-------|
/// | `[-]`  | error |
/// | `[*]`  | warn  |
/// | `[+]`  | info, e.g. a car changing hands |
/// | `[?]`  | debug, e.g. a car being built |
/// | `[ ]`  | trace, e.g. a car being dropped |
///
/// Debug and trace lines also carry the emitting module, with the `vls_`
/// crate prefix cut off (`common::car`, `core::garage`).
pub struct VlsFormatter;

fn level_symbol(level: &Level) -> (&'static str, fn(ColoredString) -> ColoredString) {
    match *level {
        Level::TRACE => ("[ ]", |s| s.dimmed()),
        Level::DEBUG => ("[?]", |s| s.blue()),
        Level::INFO => ("[+]", |s| s.green().bold()),
        Level::WARN => ("[*]", |s| s.yellow().bold()),
        Level::ERROR => ("[-]", |s| s.red().bold()),
    }
}

fn short_target(target: &str) -> &str {
    target.strip_prefix(CRATE_PREFIX).unwrap_or(target)
}

impl<S, N> FormatEvent<S, N> for VlsFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();
        let (symbol, color_func) = level_symbol(meta.level());

        write!(writer, "{} ", color_func(symbol.into()))?;

        if *meta.level() >= Level::DEBUG {
            write!(writer, "{} ", short_target(meta.target()).dimmed())?;
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}
