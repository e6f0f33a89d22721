use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::Value;

use district_data_tools::filter::{composition_note, remove_territories};
use district_data_tools::lean::{load_lean_csv, DEFAULT_PVI_COLUMN};
use district_data_tools::merge::merge_pvi;
use district_data_tools::types::DistrictFile;
use district_data_tools::validate::audit;

#[derive(Parser)]
#[command(name = "district-data-tools")]
#[command(about = "Prepare the congressional district dataset", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Merge Cook PVI values from CSV into the district JSON
    IntegratePvi {
        /// Input Cook PVI CSV file
        #[arg(long, default_value = "data/cook-pvi-2025.csv")]
        csv: PathBuf,

        /// District dataset JSON file, rewritten in place
        #[arg(long, default_value = "data/district-data-no-geo.json")]
        districts: PathBuf,

        /// Header of the CSV column holding the PVI descriptor
        #[arg(long, default_value = DEFAULT_PVI_COLUMN)]
        pvi_column: String,
    },

    /// Remove territory districts, keeping the 50 states + DC
    RemoveTerritories {
        /// District dataset JSON file, rewritten in place
        #[arg(long, default_value = "data/district-data-no-geo.json")]
        districts: PathBuf,
    },

    /// Audit the district dataset without modifying it
    Validate {
        /// District dataset JSON file
        #[arg(long, default_value = "data/district-data-no-geo.json")]
        districts: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::IntegratePvi {
            csv,
            districts,
            pvi_column,
        } => integrate_pvi_command(&csv, &districts, &pvi_column),
        Commands::RemoveTerritories { districts } => remove_territories_command(&districts),
        Commands::Validate { districts } => validate_command(&districts),
    }
}

fn load_districts(path: &Path) -> Result<DistrictFile> {
    DistrictFile::load(path)
        .with_context(|| format!("Failed to read district data: {}", path.display()))
}

fn save_districts(file: &DistrictFile, path: &Path) -> Result<()> {
    file.save(path)
        .with_context(|| format!("Failed to write district data: {}", path.display()))
}

fn integrate_pvi_command(csv: &Path, districts: &Path, pvi_column: &str) -> Result<()> {
    println!("Reading Cook PVI CSV...");
    let lean = load_lean_csv(csv, pvi_column)
        .with_context(|| format!("Failed to read PVI CSV: {}", csv.display()))?;

    println!("Loaded {} PVI values from CSV", lean.by_district.len());
    if lean.skipped > 0 {
        println!("Skipped {} rows that could not be keyed", lean.skipped);
    }

    println!("Reading district data JSON...");
    let mut file = load_districts(districts)?;

    let report = merge_pvi(&mut file, &lean.by_district);

    println!("\nMatched {} districts", report.matched);
    if !report.unmatched.is_empty() {
        let shown: Vec<&str> = report
            .unmatched
            .iter()
            .take(10)
            .map(String::as_str)
            .collect();
        println!(
            "Unmatched districts ({}): {}",
            report.unmatched.len(),
            shown.join(", ")
        );
        if report.unmatched.len() > 10 {
            println!("  ... and {} more", report.unmatched.len() - 10);
        }
    }

    println!("\nWriting updated district data...");
    save_districts(&file, districts)?;

    println!("✅ Successfully integrated Cook PVI data!");
    println!("  Total districts updated: {}", report.matched);

    println!("\nSample PVI values:");
    for district in file.districts.iter().take(5) {
        let id = district.get("id").and_then(Value::as_str).unwrap_or("?");
        let pvi = district.get("pvi").and_then(Value::as_str).unwrap_or("-");
        let numeric = district
            .get("pvi_numeric")
            .map(Value::to_string)
            .unwrap_or_else(|| "null".to_string());
        println!("  {}: {} (numeric: {})", id, pvi, numeric);
    }

    Ok(())
}

fn remove_territories_command(districts: &Path) -> Result<()> {
    println!("Reading district data...");
    let mut file = load_districts(districts)?;

    let (retained, removed) = remove_territories(std::mem::take(&mut file.districts));
    file.districts = retained;
    file.note = Some(composition_note(&file.districts));

    println!("\nRemoved {} territories", removed);
    println!("Districts remaining: {}", file.districts.len());

    println!("\nWriting updated district data...");
    save_districts(&file, districts)?;

    println!("✅ Successfully removed territories!");

    let states: BTreeSet<&str> = file
        .districts
        .iter()
        .filter_map(|d| d.get("state").and_then(Value::as_str))
        .collect();
    println!("\nStates/districts included: {}", states.len());
    if states.contains("District of Columbia") {
        println!("  ✓ DC included");
    }

    Ok(())
}

fn validate_command(districts: &Path) -> Result<()> {
    println!("Validating: {}\n", districts.display());

    let file = load_districts(districts)?;
    let report = audit(&file)?;

    println!("Districts: {}", report.total);
    println!("States/districts: {}", report.states.len());
    println!("With PVI: {}/{}", report.with_pvi, report.total);
    if report.has_dc {
        println!("  ✓ DC included");
    }

    if !report.malformed_ids.is_empty() {
        println!("\n⚠️  Malformed ids ({}):", report.malformed_ids.len());
        for id in &report.malformed_ids {
            println!("  {}", id);
        }
    }
    if !report.duplicate_ids.is_empty() {
        println!("\n⚠️  Duplicate ids ({}):", report.duplicate_ids.len());
        for id in &report.duplicate_ids {
            println!("  {}", id);
        }
    }
    if !report.inconsistent_pvi.is_empty() {
        println!(
            "\n⚠️  pvi_numeric disagrees with pvi ({}):",
            report.inconsistent_pvi.len()
        );
        for id in &report.inconsistent_pvi {
            println!("  {}", id);
        }
    }
    if report.malformed_ids.is_empty()
        && report.duplicate_ids.is_empty()
        && report.inconsistent_pvi.is_empty()
    {
        println!("\n✅ Valid district dataset");
    }

    Ok(())
}
