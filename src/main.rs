mod codegen;
mod data;

use std::path::Path;

use anyhow::Result;

/// Source CSV, relative to the working directory.
const INPUT_CSV: &str = "pharmaceuticals_lca_data.csv";
/// Generated TypeScript module, overwritten on every run.
const OUTPUT_MODULE: &str = "lib/pharmaceuticalData.ts";

fn main() -> Result<()> {
    env_logger::init();

    let dataset = data::loader::load_csv(Path::new(INPUT_CSV))?;
    log::info!("loaded {} rows from {INPUT_CSV}", dataset.len());

    codegen::write_module(Path::new(OUTPUT_MODULE), &dataset)?;

    println!(
        "Created TypeScript data file with {} pharmaceutical products",
        dataset.len()
    );
    Ok(())
}
