//! One-shot listing of the clubs

use super::OutputFormat;
use crate::board::{club_rows, thai_date, ClubRow};
use crate::config::{BoardConfig, UiLabels};
use crate::status::Tone;
use crate::Result;
use chrono::Local;
use colored::Colorize;
use sheets::{Table, ValuesSource};
use tabled::builder::Builder;
use tracing::{debug, warn};

/// Handle the show command
pub async fn handle_show(
    config: &BoardConfig,
    source: &dyn ValuesSource,
    format: OutputFormat,
) -> Result<()> {
    debug!("Fetching {}", source.describe());

    let table = match source.fetch_table().await {
        Ok(table) => table,
        Err(err) => {
            warn!("Fetch failed: {}", err);
            eprintln!("{}", config.ui.labels.error_message.red().bold());
            eprintln!("  {}", err.to_string().bright_black());
            return Err(err.into());
        }
    };

    let rows = club_rows(&table, &config.columns, &config.classifier());

    match format {
        OutputFormat::Json => println!("{}", render_json(&table)?),
        OutputFormat::Plain => print!("{}", render_plain(&rows)),
        OutputFormat::Table => {
            let labels = &config.ui.labels;
            if rows.is_empty() {
                println!("{}", labels.empty.yellow());
                return Ok(());
            }
            println!("{}", labels.title.bold());
            println!("{}", render_table(&rows, labels, config.ui.colored_output));
            println!(
                "{}: {}",
                labels.last_updated,
                thai_date(&Local::now())
            );
        }
    }

    Ok(())
}

/// Rows as a bordered table with localized headers
pub fn render_table(rows: &[ClubRow], labels: &UiLabels, colored: bool) -> String {
    let mut builder = Builder::default();
    builder.push_record([
        labels.name.as_str(),
        labels.total.as_str(),
        labels.registered.as_str(),
        labels.remaining.as_str(),
        labels.status.as_str(),
    ]);

    for row in rows {
        let status = if colored {
            colorize_status(&row.label, row.tone)
        } else {
            row.label.clone()
        };
        builder.push_record([
            row.name.clone(),
            row.total_text.clone(),
            row.registered_text.clone(),
            row.remaining_text.clone(),
            status,
        ]);
    }

    builder.build().to_string()
}

/// Records as pretty JSON in header order, absent cells as `null`
pub fn render_json(table: &Table) -> Result<String> {
    Ok(serde_json::to_string_pretty(&table.ordered_records())?)
}

/// One tab-separated line per club
pub fn render_plain(rows: &[ClubRow]) -> String {
    rows.iter()
        .map(|row| {
            format!(
                "{}\t{}/{}\t{}\t{}\n",
                row.name, row.registered_text, row.total_text, row.remaining_text, row.label
            )
        })
        .collect()
}

/// Colorize status for display
fn colorize_status(label: &str, tone: Tone) -> String {
    match tone {
        Tone::Red => label.red().bold().to_string(),
        Tone::Amber => label.yellow().to_string(),
        Tone::Green => label.green().to_string(),
    }
}
