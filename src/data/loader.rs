use std::fs::File;
use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use csv::ReaderBuilder;

use super::model::{PharmaceuticalDataset, PharmaceuticalRecord};

/// Load the dataset from a CSV file on disk.
pub fn load_csv(path: &Path) -> Result<PharmaceuticalDataset> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    read_csv(file).with_context(|| format!("parsing {}", path.display()))
}

/// Parse CSV from any reader. The first line is the header; standard quoting
/// rules apply (embedded commas and newlines inside quoted fields, doubled
/// quotes for a literal quote). Columns the record doesn't recognize are
/// ignored; recognized columns absent from the header default to `""`.
pub fn read_csv<R: io::Read>(reader: R) -> Result<PharmaceuticalDataset> {
    let mut csv_reader = ReaderBuilder::new().flexible(true).from_reader(reader);
    let headers = csv_reader.headers().context("reading CSV header")?.clone();

    let mut records = Vec::new();
    for (row_no, result) in csv_reader.records().enumerate() {
        let mut row = result.with_context(|| format!("CSV row {row_no}"))?;
        // Ragged rows behave like a dict-style CSV reader: a missing
        // trailing cell reads as "", cells past the header are dropped.
        while row.len() < headers.len() {
            row.push_field("");
        }
        if row.len() > headers.len() {
            row.truncate(headers.len());
        }
        let record: PharmaceuticalRecord = row
            .deserialize(Some(&headers))
            .with_context(|| format!("CSV row {row_no}"))?;
        records.push(record);
    }

    log::debug!("parsed {} CSV rows", records.len());
    Ok(PharmaceuticalDataset::from_records(records))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_one_record_per_row() {
        let csv = "Data source topic,Title\n\
                   Drug A Study,Drug A\n\
                   Drug B Study,Drug B\n";
        let dataset = read_csv(csv.as_bytes()).unwrap();
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.records[0].data_source_topic, "Drug A Study");
        assert_eq!(dataset.records[1].title, "Drug B");
    }

    #[test]
    fn header_only_yields_empty_dataset() {
        let csv = "Data source topic,Title\n";
        let dataset = read_csv(csv.as_bytes()).unwrap();
        assert!(dataset.is_empty());
        assert_eq!(dataset.get_all().len(), 0);
    }

    #[test]
    fn missing_columns_default_to_empty() {
        let csv = "Title,Data source topic\n\"Drug A, 5mg\",Drug A Study\n";
        let dataset = read_csv(csv.as_bytes()).unwrap();
        let record = &dataset.records[0];

        assert_eq!(record.title, "Drug A, 5mg");
        assert_eq!(record.data_source_topic, "Drug A Study");
        for (name, value) in record.fields() {
            if name == "title" || name == "dataSourceTopic" {
                continue;
            }
            assert_eq!(value, "", "field {name} should default to empty");
        }
        assert_eq!(dataset.get_by_id("drug-a-study").unwrap(), record);
    }

    #[test]
    fn quoted_fields_preserve_commas_newlines_and_quotes() {
        let csv = "Title,Notes\n\
                   \"Drug A, 5mg\",\"line one\nline two, with a \"\"quote\"\"\"\n";
        let dataset = read_csv(csv.as_bytes()).unwrap();
        let record = &dataset.records[0];
        assert_eq!(record.title, "Drug A, 5mg");
        assert_eq!(record.notes, "line one\nline two, with a \"quote\"");
    }

    #[test]
    fn unknown_columns_are_ignored() {
        let csv = "Title,Some future column\nDrug A,whatever\n";
        let dataset = read_csv(csv.as_bytes()).unwrap();
        assert_eq!(dataset.records[0].title, "Drug A");
    }

    #[test]
    fn short_rows_are_tolerated() {
        let csv = "Data source topic,Title,Notes\n\
                   Drug A Study\n\
                   Drug B Study,Drug B,fine\n";
        let dataset = read_csv(csv.as_bytes()).unwrap();
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.records[0].data_source_topic, "Drug A Study");
        assert_eq!(dataset.records[0].title, "");
        assert_eq!(dataset.records[0].notes, "");
        assert_eq!(dataset.records[1].notes, "fine");
    }

    #[test]
    fn long_rows_drop_cells_past_the_header() {
        let csv = "Data source topic,Title\nDrug A Study,Drug A,spilled over\n";
        let dataset = read_csv(csv.as_bytes()).unwrap();
        assert_eq!(dataset.records[0].data_source_topic, "Drug A Study");
        assert_eq!(dataset.records[0].title, "Drug A");
    }

    #[test]
    fn invalid_utf8_is_an_error() {
        let bytes: &[u8] = b"Title\n\xff\xfe\n";
        assert!(read_csv(bytes).is_err());
    }

    #[test]
    fn load_csv_missing_file_is_an_error() {
        let err = load_csv(Path::new("definitely/not/here.csv")).unwrap_err();
        assert!(err.to_string().contains("definitely/not/here.csv"));
    }
}
