//! Importers, one per [`SourceDataType`](crate::datasets::SourceDataType).
//!
//! Each importer is an `impl AreaStore` block so it can merge straight into
//! the store through [`AreaStore::upsert`](crate::areas::AreaStore::upsert).

mod authority_csv;
mod json_records;
mod year_series;

/// Key of the row array in StatsWales JSON documents.
pub const RECORDS_KEY: &str = "value";

fn csv_reader<R: std::io::Read>(reader: R, flexible: bool) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(flexible)
        .trim(csv::Trim::All)
        .from_reader(reader)
}

fn line_of(record: &csv::StringRecord) -> u64 {
    record.position().map(|p| p.line()).unwrap_or(0)
}
