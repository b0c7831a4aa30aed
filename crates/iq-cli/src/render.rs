//! Plain-text rendering of reports and the mode catalogue

use std::fmt::Write;

use iq_api::schema::Catalogue;
use iq_core::{Report, Severity};

/// Plot rows shown at each end when the sweep is truncated
const EDGE_ROWS: usize = 5;

pub fn render_report(report: &Report, all: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", iq_core::APP_TITLE);
    let _ = writeln!(out, "== {} ==", report.header);

    for readout in &report.readouts {
        let _ = writeln!(out, "{}", readout);
    }

    if let Some(message) = &report.message {
        let tag = match message.severity {
            Severity::Success => "ok",
            Severity::Warning => "warning",
            Severity::Info => "info",
        };
        let _ = writeln!(out, "[{}] {}", tag, message.text);
    }

    if let Some(plot) = &report.plot {
        let _ = writeln!(out, "{} ({} points)", plot.title, plot.points.len());
        let _ = writeln!(out, "{:>22}  {:>22}", plot.x_label, plot.y_label);
        let n = plot.points.len();
        let show_all = all || n <= 4 * EDGE_ROWS;
        for (i, (x, y)) in plot.points.iter().enumerate() {
            if show_all || i < EDGE_ROWS || i >= n - EDGE_ROWS {
                let _ = writeln!(out, "{:>22.6e}  {:>22.6e}", x, y);
            } else if i == EDGE_ROWS {
                let _ = writeln!(out, "  ... ({} more points) ...", n - 2 * EDGE_ROWS);
            }
        }
    }
    out
}

pub fn render_catalogue(catalogue: &Catalogue) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", catalogue.title);
    let _ = writeln!(out, "{}", catalogue.caption);
    for mode in &catalogue.modes {
        let _ = writeln!(out);
        let _ = writeln!(out, "{} ({})", mode.name, mode.slug);
        for slider in &mode.sliders {
            let _ = writeln!(
                out,
                "  {:<14} {:<30} [{}, {}] default {} step {}",
                slider.key, slider.label, slider.min, slider.max, slider.default, slider.step
            );
        }
    }
    out
}
