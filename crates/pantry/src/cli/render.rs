use super::setup::OutputFormat;
use console::style;
use pantryapp::commands::{AddOutcome, IngestReport, ItemListing};
use pantryapp::model::{Category, Item};
use serde::Serialize;

fn to_json<T: Serialize>(value: &T) -> serde_json::Result<String> {
    let mut out = serde_json::to_string_pretty(value)?;
    out.push('\n');
    Ok(out)
}

fn title_case(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn item_line(item: &Item) -> String {
    format!(
        "  {:>5}  {:<24} {} {}\n",
        item.id, item.name, item.quantity, item.unit
    )
}

pub fn ingest(report: &IngestReport, format: OutputFormat) -> serde_json::Result<String> {
    if format == OutputFormat::Json {
        return to_json(report);
    }

    let mut out = String::new();
    out.push_str(&format!("{}\n", style(&report.message).green()));
    out.push_str(&format!(
        "{:<12} {:>6}\n",
        style("Category").bold(),
        style("Count").bold()
    ));
    for category in Category::ALL {
        out.push_str(&format!(
            "{:<12} {:>6}\n",
            title_case(category.plural()),
            report.count(category)
        ));
    }
    out.push_str(&format!("{:<12} {:>6}\n", "Total", report.total_processed));

    if report.has_duplicates() {
        out.push_str(&format!(
            "\n{}\n",
            style(format!("Skipped {} duplicate(s):", report.duplicates.len())).yellow()
        ));
        for dup in &report.duplicates {
            out.push_str(&format!(
                "  {:>5}  {:<24} {}\n",
                dup.item.id, dup.item.name, dup.reason
            ));
        }
    }
    Ok(out)
}

pub fn listing(listing: &ItemListing, format: OutputFormat) -> serde_json::Result<String> {
    if format == OutputFormat::Json {
        return to_json(listing);
    }

    let mut out = String::new();
    for category in Category::ALL {
        let Some(items) = listing.get(category) else {
            continue;
        };
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(&format!(
            "{} ({})\n",
            style(title_case(category.plural())).bold(),
            items.len()
        ));
        if items.is_empty() {
            out.push_str(&format!("  {}\n", style("(none)").dim()));
        }
        for item in items {
            out.push_str(&item_line(item));
        }
    }
    Ok(out)
}

/// Renders a successful add. Duplicates never reach here.
pub fn added(outcome: &AddOutcome, format: OutputFormat) -> serde_json::Result<String> {
    if format == OutputFormat::Json {
        return to_json(outcome);
    }
    match outcome {
        AddOutcome::Success { item } => Ok(format!(
            "{} {} {} ({}): {} {}\n",
            style("Added").green(),
            item.category,
            item.id,
            item.name,
            item.quantity,
            item.unit
        )),
        AddOutcome::Duplicate { reason } => Ok(format!("{}\n", reason)),
    }
}
