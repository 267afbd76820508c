//! Plain-text rendering of the core view model.

use shield_core::{AppViewModel, ChartSplit, ColorToken, HistoryRowView, Theme};

const BAR_CELLS: u8 = 20;

pub(crate) fn greeting() {
    println!("Link Shield - scan URLs for phishing, malware, and more.");
    println!("Enter a URL to scan, :theme to toggle display, :history to list recent scans, :quit to exit.");
}

pub(crate) fn render(view: &AppViewModel) {
    println!();
    if view.scanning {
        println!("Scanning {} ...", view.input);
        return;
    }

    if let Some(error) = &view.error {
        println!("[{}] {}", theme_tag(view.theme), error);
    } else if let Some(outcome) = &view.outcome {
        println!("[{}] Scan result", theme_tag(view.theme));
        println!("  Status:     {} ({})", outcome.status, color_label(outcome.risk.color));
        println!("  Message:    {}", outcome.message);
        println!("  Checked by: {}", outcome.checked_by);
        println!("  Checked at: {}", outcome.checked_at);
        println!(
            "  Risk:       {} {}%",
            risk_bar(outcome.chart),
            outcome.risk.risk_percent
        );
    }

    if !view.history.is_empty() {
        render_history(view);
    }
    print!("> ");
    use std::io::Write;
    let _ = std::io::stdout().flush();
}

pub(crate) fn render_history(view: &AppViewModel) {
    if view.history.is_empty() {
        println!("No scans recorded yet.");
        return;
    }
    println!("Recent scans:");
    for row in &view.history {
        println!("  {}", format_history_row(row));
    }
}

fn format_history_row(row: &HistoryRowView) -> String {
    format!("{} - {} ({})", row.url, row.status, row.time)
}

/// Proportional risk bar driven by the chart split.
fn risk_bar(chart: ChartSplit) -> String {
    let filled = (u16::from(chart.risk_share) * u16::from(BAR_CELLS) / 100) as usize;
    let empty = usize::from(BAR_CELLS) - filled;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(empty))
}

fn color_label(token: ColorToken) -> &'static str {
    match token {
        ColorToken::None => "unknown",
        ColorToken::Safe => "safe",
        ColorToken::Warning => "warning",
        ColorToken::Danger => "danger",
    }
}

fn theme_tag(theme: Theme) -> &'static str {
    theme.as_str()
}
