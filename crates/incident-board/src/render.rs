//! Plain-text rendering of lists and summaries

use incident_model::Incident;
use incident_view::DashboardSummary;
use std::fmt::{self, Write as _};

const BAR_WIDTH: usize = 20;

/// Display format for `reported_at`
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// One incident as a two-line card
#[must_use]
pub fn incident_card(incident: &Incident) -> String {
    format!(
        "#{:<4} [{:<6}] {}  {}\n      {}",
        incident.id,
        incident.severity,
        incident.reported_at.format(DATE_FORMAT),
        incident.title,
        incident.description
    )
}

/// Cards separated by blank lines
#[must_use]
pub fn incident_list(incidents: &[Incident]) -> String {
    if incidents.is_empty() {
        return "No incidents match the current filter.".to_string();
    }
    incidents
        .iter()
        .map(incident_card)
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Distribution, daily bars and recent incidents
#[must_use]
pub fn summary(summary: &DashboardSummary) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = write_summary(&mut out, summary);
    out
}

fn write_summary(out: &mut String, summary: &DashboardSummary) -> fmt::Result {
    writeln!(out, "Total incidents: {}", summary.total)?;

    writeln!(out, "\nSeverity distribution")?;
    for share in &summary.distribution {
        writeln!(
            out,
            "  {:<6} {:>4} {:>4}%  {}",
            share.severity,
            share.count,
            share.percentage,
            bar(usize::from(share.percentage), 100)
        )?;
    }

    let peak = summary.daily.iter().map(|d| d.count).max().unwrap_or(0);
    writeln!(out, "\nLast {} days", summary.daily.len())?;
    for day in &summary.daily {
        writeln!(out, "  {} {:>4}  {}", day.label(), day.count, bar(day.count, peak))?;
    }

    writeln!(out, "\nRecent incidents")?;
    if summary.recent.is_empty() {
        writeln!(out, "  none")?;
    }
    for incident in &summary.recent {
        writeln!(
            out,
            "  #{} {} ({}, {})",
            incident.id,
            incident.title,
            incident.severity,
            incident.reported_at.format("%Y-%m-%d")
        )?;
    }
    Ok(())
}

fn bar(value: usize, max: usize) -> String {
    if max == 0 {
        return String::new();
    }
    "#".repeat(value * BAR_WIDTH / max)
}
