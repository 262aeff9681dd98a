//! Emission of the TypeScript data module: interface declaration, array
//! literal, and the two lookup helpers the front-end calls.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::data::model::{PharmaceuticalDataset, PharmaceuticalRecord, TS_FIELDS};

const HELPERS: &str = "\
export function getPharmaceuticalById(id: string): PharmaceuticalData | undefined {
  return pharmaceuticalData.find(item =>
    item.dataSourceTopic.toLowerCase().replace(/\\s+/g, '-') === id
  );
}

export function getAllPharmaceuticals(): PharmaceuticalData[] {
  return pharmaceuticalData;
}
";

/// Render a cell value as a TypeScript string literal. JSON string escaping
/// is a subset of TypeScript's, so decoding the literal reproduces the cell
/// text byte-for-byte, embedded quotes, backslashes and newlines included.
pub fn ts_string_literal(value: &str) -> String {
    serde_json::to_string(value).expect("serializing a string cannot fail")
}

fn render_interface() -> String {
    let mut out = String::from("export interface PharmaceuticalData {\n");
    for name in TS_FIELDS {
        let _ = writeln!(out, "  {name}: string;");
    }
    out.push_str("}\n");
    out
}

fn render_record(record: &PharmaceuticalRecord) -> String {
    let mut out = String::from("  {\n");
    for (name, value) in record.fields() {
        let _ = writeln!(out, "    {name}: {},", ts_string_literal(value));
    }
    out.push_str("  }");
    out
}

/// Render the complete module text: the interface, the array literal in
/// source row order, and the helper functions. An empty dataset renders an
/// empty array.
pub fn render_module(dataset: &PharmaceuticalDataset) -> String {
    let mut out = render_interface();
    let _ = writeln!(
        out,
        "\n// All {} pharmaceutical products from the CSV file",
        dataset.len()
    );
    out.push_str("export const pharmaceuticalData: PharmaceuticalData[] = [\n");

    let rendered: Vec<String> = dataset.get_all().iter().map(render_record).collect();
    out.push_str(&rendered.join(",\n"));
    if !dataset.is_empty() {
        out.push('\n');
    }
    out.push_str("];\n\n");
    out.push_str(HELPERS);
    out
}

/// Render and overwrite the module file in one shot. The module text is
/// built entirely in memory before the file is touched.
pub fn write_module(path: &Path, dataset: &PharmaceuticalDataset) -> Result<()> {
    let module = render_module(dataset);
    fs::write(path, module).with_context(|| format!("writing {}", path.display()))?;
    log::info!("wrote {} ({} records)", path.display(), dataset.len());
    Ok(())
}
