use std::fmt;

use colored::*;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::FormatEvent;
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::registry::LookupSpan;

use crate::terminal::colors;

/// Target for terminal decoration. Events on it are written without a level symbol.
pub const PRINT_TARGET: &str = "caravan::print";

pub struct CaravanFormatter;

impl<S, N> FormatEvent<S, N> for CaravanFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let meta = event.metadata();

        if meta.target() == PRINT_TARGET {
            let mut raw = RawMessage::default();
            event.record(&mut raw);
            if let Some(msg) = raw.0 {
                return writeln!(writer, "{msg}");
            }
        }

        write!(writer, "{} ", level_symbol(meta.level()))?;

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}

/// Bracketed marker in front of every diagnostic line.
fn level_symbol(level: &Level) -> ColoredString {
    match *level {
        Level::TRACE => "[ ]".color(colors::SEPARATOR),
        Level::DEBUG => "[?]".color(colors::SECONDARY),
        Level::INFO => "[+]".color(colors::PRIMARY).bold(),
        Level::WARN => "[*]".color(colors::ACCENT).bold(),
        Level::ERROR => "[-]".red().bold(),
    }
}

#[derive(Default)]
struct RawMessage(Option<String>);

impl Visit for RawMessage {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "raw_msg" {
            self.0 = Some(value.to_string());
        }
    }

    fn record_debug(&mut self, _field: &Field, _value: &dyn fmt::Debug) {}
}

fn default_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Installs the global subscriber. Everything goes to stderr; stdout is
/// reserved for prompts and the report.
///
/// `RUST_LOG` replaces the verbosity flag, but decoration stays visible.
pub fn init_logging(verbose: u8) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level(verbose)))
        .add_directive(format!("{PRINT_TARGET}=info").parse()?);

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .event_format(CaravanFormatter)
        .init();

    Ok(())
}
