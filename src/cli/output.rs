//! Output formatting helpers for CLI commands

use crate::extract::ExtractionResult;
use crate::machine::Reply;
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, ContentArrangement, Table};

/// Format a reply as pretty JSON
pub fn format_reply_json(reply: &Reply) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(reply)
}

/// Format a reply as a header line plus one table row per candidate route
pub fn format_reply_table(reply: &Reply) -> String {
    let mut out = String::new();

    let code = if reply.is_success() {
        reply.returncode.green().to_string()
    } else {
        reply.returncode.red().to_string()
    };
    out.push_str(&format!("Return code: {}\n", code));

    let Some(routes) = &reply.routes else {
        return out;
    };

    if let (Some(start), Some(end)) = (&reply.start, &reply.end) {
        out.push_str(&format!(
            "{} -> {} ({})\n",
            start,
            end,
            reply.profile.as_deref().unwrap_or("-")
        ));
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "Distance", "Duration", "Summary", "Steps"]);

    for (i, route) in routes.iter().enumerate() {
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(distance_cell(route)),
            Cell::new(duration_cell(route)),
            Cell::new(route.summary().unwrap_or("-")),
            Cell::new(steps_cell(route)),
        ]);
    }
    out.push_str(&table.to_string());

    if reply.raw.is_some() {
        out.push_str("\nRaw service response attached (use --json to print it)");
    }

    out
}

fn distance_cell(route: &ExtractionResult) -> String {
    route
        .distance()
        .map(|d| format!("{} km {} m", d.kilometers, d.meters))
        .unwrap_or_else(|| "-".to_string())
}

fn duration_cell(route: &ExtractionResult) -> String {
    route
        .duration()
        .map(|d| {
            if d.days > 0 {
                format!("{}d {:02}:{:02}:{:02}", d.days, d.hours, d.minutes, d.seconds)
            } else {
                format!("{:02}:{:02}:{:02}", d.hours, d.minutes, d.seconds)
            }
        })
        .unwrap_or_else(|| "-".to_string())
}

/// One line per step: "maneuver [direction] name"
fn steps_cell(route: &ExtractionResult) -> String {
    let Some(directions) = route.directions() else {
        return "-".to_string();
    };

    directions
        .steps
        .iter()
        .map(|step| {
            let mut line = step.maneuver.clone();
            if let Some(direction) = &step.direction {
                line.push(' ');
                line.push_str(direction);
            }
            if !step.name.is_empty() {
                line.push(' ');
                line.push_str(&step.name);
            }
            line
        })
        .collect::<Vec<_>>()
        .join("\n")
}
