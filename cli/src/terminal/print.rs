use std::fmt::Display;

use caravan_common::config::Config;
use caravan_core::Outcome;
use colored::*;
use tracing::info;
use unicode_width::UnicodeWidthStr;

use crate::terminal::logging::PRINT_TARGET;
use crate::terminal::{banner, colors};

pub const TOTAL_WIDTH: usize = 64;

pub fn print(msg: &str) {
    info!(target: PRINT_TARGET, raw_msg = msg);
}

/// Applies run-wide terminal settings. Call before printing anything.
pub fn initialize(cfg: &Config) {
    if cfg.no_color {
        colored::control::set_override(false);
    }
}

pub fn banner(cfg: &Config) {
    if !cfg.show_banner() {
        return;
    }

    let text_content: String = format!("⟦ CARAVAN v{} ⟧ ", env!("CARGO_PKG_VERSION"));
    let text_width: usize = UnicodeWidthStr::width(text_content.as_str());
    let text: ColoredString = text_content.bright_green().bold();
    let sep: ColoredString = "═"
        .repeat(TOTAL_WIDTH.saturating_sub(text_width) / 2)
        .bright_black();
    let output: String = format!("{}{}{}", sep, text, sep);

    print(&output);
    banner::print();
}

pub fn header(msg: &str, cfg: &Config) {
    if !cfg.show_headers() {
        return;
    }
    print(&header_line(msg));
}

/// `───⟦ MSG ⟧───` padded to [`TOTAL_WIDTH`] visible columns.
fn header_line(msg: &str) -> String {
    let title: String = format!("⟦ {} ⟧", msg.to_uppercase());
    let dash_count: usize = TOTAL_WIDTH.saturating_sub(title.chars().count());
    let left: usize = dash_count / 2;

    format!(
        "{}{}{}",
        "─".repeat(left).color(colors::SEPARATOR),
        title.color(colors::PRIMARY).bold(),
        "─".repeat(dash_count - left).color(colors::SEPARATOR)
    )
}

pub fn fat_separator() {
    print(&"═".repeat(TOTAL_WIDTH).color(colors::SEPARATOR).to_string());
}

/// `key.....: value`, with dots padding every key to `key_width`.
pub fn aligned_line<V: Display>(key: &str, value: V, key_width: usize) {
    let dots: String = ".".repeat((key_width + 1).saturating_sub(key.len()));
    let colon: String = format!(
        "{}{}",
        dots.color(colors::SEPARATOR),
        ":".color(colors::SEPARATOR)
    );
    let value: ColoredString = value.to_string().color(colors::TEXT_DEFAULT);
    let prefix: ColoredString = ">".color(colors::SEPARATOR);
    print(&format!("{} {}{} {}", prefix, key.color(colors::PRIMARY), colon, value));
}

pub fn centerln(msg: &str) {
    let space = " ".repeat(TOTAL_WIDTH.saturating_sub(console::measure_text_width(msg)) / 2);
    print(&format!("{}{}{}", space, msg, space));
}

/// Decorated recap of a finished session, after the plain report.
pub fn summary(outcome: &Outcome, cfg: &Config) {
    if !cfg.show_headers() {
        return;
    }

    let journey = &outcome.journey;
    header("summary", cfg);

    let rows: [(&str, String); 3] = [
        ("Toll gates", journey.checkpoint_count().to_string()),
        ("Cars", journey.vehicle_count().to_string()),
        ("Total seconds", outcome.total.as_secs().to_string()),
    ];
    let key_width: usize = rows.iter().map(|(key, _)| key.len()).max().unwrap_or(0);
    for (key, value) in rows {
        aligned_line(key, value.color(colors::SECONDARY), key_width);
    }

    let total: ColoredString = outcome.total.to_string().bold().color(colors::ACCENT);
    let output: String = format!("Caravan cleared the final toll in {total}")
        .color(colors::TEXT_DEFAULT)
        .to_string();
    fat_separator();
    centerln(&output);
}

pub fn end_of_program(cfg: &Config) {
    if !cfg.show_headers() {
        return;
    }
    fat_separator();
}
