use colored::Colorize;

use crate::core::format_iso_date;
use crate::entry::Entry;
use crate::report::ExportSummary;

/// Format logged entries as a compact list
pub fn format_entries_pretty(entries: &[Entry]) -> String {
    if entries.is_empty() {
        return "Entries (0 items)\n  No entries logged".to_string();
    }

    let mut output = format!("Entries ({} items)\n", entries.len());
    output.push_str(&"─".repeat(60));
    output.push('\n');

    for entry in entries {
        let s = entry.symptoms();
        let mut line = format!(
            "{}  {}",
            format_iso_date(entry.date()).bold(),
            format!("day {}", entry.day_of_cycle()).dimmed()
        );
        line.push_str(&format!(
            "  mood {} cramps {} bloating {} headaches {} fatigue {} stress {}",
            s.mood_swings, s.cramps, s.bloating, s.headaches, s.fatigue, s.stress_level
        ));

        if let Some(other) = entry.other_symptoms() {
            line.push_str(&format!("  {}", other.cyan()));
        }
        if let Some(notes) = entry.notes() {
            line.push_str(&format!("  {}", notes.dimmed()));
        }

        output.push_str(&line);
        output.push('\n');
    }

    output
}

/// Format the export summary with the entries it contains
pub fn format_summary_pretty(summary: &ExportSummary, entries: &[Entry]) -> String {
    let mut output = format_entries_pretty(entries);
    if !output.ends_with('\n') {
        output.push('\n');
    }
    output.push('\n');
    output.push_str(&format!(
        "{} {}\n",
        "✓".green(),
        format!("Report saved to {}", summary.path.display()).bold()
    ));
    output.push_str(&format!(
        "  {}: {} ({})\n",
        "Chart".dimmed(),
        summary.values,
        summary.chart_range
    ));
    output
}
