use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};
use tankfinder::{
    CatalogStats, ImportSummary, ModelsResponse, ResultRecord, SearchInfo, SearchResponse,
};

/// Output format for CLI results.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table.
    Table,
    /// JSON output.
    Json,
}

/// Print a search response.
pub fn print_search_response(response: &SearchResponse, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(response),
        OutputFormat::Table => {
            println!("{}", describe(&response.search_info));
            if response.results.is_empty() {
                println!("No results found.");
                return Ok(());
            }

            let rows: Vec<ResultRow> = response.results.iter().map(ResultRow::from).collect();
            let table = Table::new(&rows).with(Style::rounded()).to_string();
            println!("{table}");
            Ok(())
        }
    }
}

/// Print autocomplete entries.
pub fn print_models(response: &ModelsResponse, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(response),
        OutputFormat::Table => {
            if response.models.is_empty() {
                println!("No models found.");
                return Ok(());
            }

            let rows: Vec<ModelRow> = response
                .models
                .iter()
                .map(|m| ModelRow {
                    model: m.model.clone(),
                    tank_type: m.tank_type.to_string(),
                    diameter: format!("{} m", m.diameter),
                    capacity_count: m.capacity_count,
                })
                .collect();
            let table = Table::new(&rows).with(Style::rounded()).to_string();
            println!("{table}");
            Ok(())
        }
    }
}

/// Print catalog statistics.
pub fn print_stats(stats: &CatalogStats, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(stats),
        OutputFormat::Table => {
            println!("Tanks: {}", stats.tank_count());
            println!("Capacities: {}", stats.capacity_count());

            if !stats.by_type.is_empty() {
                let rows: Vec<StatsRow> = stats
                    .by_type
                    .iter()
                    .map(|(tank_type, s)| StatsRow {
                        tank_type: format!("{} ({})", tank_type, tank_type.label()),
                        tank_count: s.tank_count,
                        capacity_count: s.capacity_count,
                    })
                    .collect();
                let table = Table::new(&rows).with(Style::rounded()).to_string();
                println!("\nBy type:\n{table}");
            }
            Ok(())
        }
    }
}

/// Print the outcome of a CSV import.
pub fn print_import_summary(summary: &ImportSummary, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(summary),
        OutputFormat::Table => {
            println!(
                "Imported {} rows: {} tanks and {} capacities created.",
                summary.rows, summary.tanks_created, summary.capacities_created
            );
            Ok(())
        }
    }
}

// --- Helper types and functions ---

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// One-line summary of how the request was interpreted.
fn describe(info: &SearchInfo) -> String {
    match info {
        SearchInfo::Model { query } => format!("Model search: '{query}'"),
        SearchInfo::Dimensions {
            calculated_volume,
            diameter,
            height,
        } => format!("Dimension search: {diameter} m x {height} m (~{calculated_volume} m³)"),
        SearchInfo::Capacity {
            capacity_kl,
            lower_bound: Some(lo),
            upper_bound: Some(hi),
        } => format!("Capacity search: {capacity_kl} KL (window {lo} - {hi} KL)"),
        SearchInfo::Capacity { capacity_kl, .. } => {
            format!("Capacity search: {capacity_kl} KL (closest first)")
        }
        SearchInfo::Diameter { diameter } => format!("Diameter search: {diameter} m"),
        SearchInfo::Height { height } => format!("Height search: {height} m"),
    }
}

#[derive(Tabled)]
struct ResultRow {
    #[tabled(rename = "Model")]
    model: String,
    #[tabled(rename = "Diameter")]
    diameter: String,
    #[tabled(rename = "Height")]
    height: String,
    #[tabled(rename = "Capacity")]
    capacity: String,
    #[tabled(rename = "KL")]
    capacity_kl: String,
    #[tabled(rename = "Match")]
    matched: String,
}

impl From<&ResultRecord> for ResultRow {
    fn from(r: &ResultRecord) -> Self {
        let matched = match (r.match_label, r.match_difference, r.diameter_diff, r.height_diff) {
            (Some(label), _, _, _) => label.to_string(),
            (None, Some(diff), _, _) => format!("±{diff} KL"),
            (None, None, Some(dd), Some(hd)) => format!("Δd {dd} m, Δh {hd} m"),
            _ => String::new(),
        };
        Self {
            model: r.model.clone(),
            diameter: format!("{} m", r.diameter),
            height: format!("{} m", r.height),
            capacity: r.capacity_display.clone(),
            capacity_kl: r.capacity_kl_display.clone(),
            matched,
        }
    }
}

#[derive(Tabled)]
struct ModelRow {
    #[tabled(rename = "Model")]
    model: String,
    #[tabled(rename = "Type")]
    tank_type: String,
    #[tabled(rename = "Diameter")]
    diameter: String,
    #[tabled(rename = "Heights")]
    capacity_count: usize,
}

#[derive(Tabled)]
struct StatsRow {
    #[tabled(rename = "Type")]
    tank_type: String,
    #[tabled(rename = "Tanks")]
    tank_count: usize,
    #[tabled(rename = "Capacities")]
    capacity_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_capacity_window() {
        let info = SearchInfo::Capacity {
            capacity_kl: 100.0,
            lower_bound: Some(96.0),
            upper_bound: Some(140.0),
        };
        assert_eq!(describe(&info), "Capacity search: 100 KL (window 96 - 140 KL)");

        let info = SearchInfo::Capacity {
            capacity_kl: 100.0,
            lower_bound: None,
            upper_bound: None,
        };
        assert_eq!(describe(&info), "Capacity search: 100 KL (closest first)");
    }
}
