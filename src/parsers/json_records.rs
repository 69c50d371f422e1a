use super::RECORDS_KEY;
use crate::area::{Area, LANG_ENG};
use crate::areas::{AreaStore, require_columns};
use crate::datasets::{ColumnMapping, SourceColumn, SourceDataType};
use crate::error::{Error, Result};
use crate::filters::{Filters, parse_data_year};
use crate::measure::Measure;
use serde_json::Value;
use std::io::Read;

/// Where each row's measure codename and label come from.
enum MeasureSource<'a> {
    /// Read from these row fields.
    Fields { code: &'a str, label: &'a str },
    /// Every row belongs to this one measure.
    Fixed { code: &'a str, label: &'a str },
}

impl<'a> MeasureSource<'a> {
    fn from_mapping(cols: &'a ColumnMapping) -> Result<Self> {
        if cols.contains(SourceColumn::MeasureCode) {
            Ok(MeasureSource::Fields {
                code: cols.get(SourceColumn::MeasureCode)?,
                label: cols.get(SourceColumn::MeasureName)?,
            })
        } else {
            Ok(MeasureSource::Fixed {
                code: cols.get(SourceColumn::SingleMeasureCode)?,
                label: cols.get(SourceColumn::SingleMeasureName)?,
            })
        }
    }

    fn resolve<'r>(&self, row: &'r Value, index: usize) -> Result<(&'r str, &'r str)>
    where
        'a: 'r,
    {
        match *self {
            MeasureSource::Fields { code, label } => {
                Ok((str_field(row, code, index)?, str_field(row, label, index)?))
            }
            MeasureSource::Fixed { code, label } => Ok((code, label)),
        }
    }
}

fn field<'r>(row: &'r Value, name: &str, index: usize) -> Result<&'r Value> {
    row.get(name)
        .ok_or_else(|| Error::malformed(format!("row {index}: missing field {name:?}")))
}

fn str_field<'r>(row: &'r Value, name: &str, index: usize) -> Result<&'r str> {
    field(row, name, index)?
        .as_str()
        .ok_or_else(|| Error::malformed(format!("row {index}: field {name:?} is not a string")))
}

fn num_field(row: &Value, name: &str, index: usize) -> Result<f64> {
    field(row, name, index)?
        .as_f64()
        .ok_or_else(|| Error::malformed(format!("row {index}: field {name:?} is not a number")))
}

impl AreaStore {
    /// Import a StatsWales JSON export.
    ///
    /// The document is an object whose `"value"` array holds one object per
    /// reading. Rows outside the area or measure filter are skipped. Rows
    /// outside the year filter still create their area and measure, only the
    /// reading itself is dropped. English names are the only names this
    /// source provides.
    pub fn import_json_records<R: Read>(
        &mut self,
        reader: R,
        cols: &ColumnMapping,
        filters: &Filters,
    ) -> Result<()> {
        require_columns(SourceDataType::WelshStatsJson, cols)?;
        let code_col = cols.get(SourceColumn::AuthCode)?;
        let name_col = cols.get(SourceColumn::AuthNameEng)?;
        let year_col = cols.get(SourceColumn::Year)?;
        let value_col = cols.get(SourceColumn::Value)?;
        let measures = MeasureSource::from_mapping(cols)?;

        let doc: Value = serde_json::from_reader(reader)?;
        let rows = doc
            .get(RECORDS_KEY)
            .and_then(Value::as_array)
            .ok_or_else(|| Error::malformed(format!("document has no {RECORDS_KEY:?} array")))?;

        for (i, row) in rows.iter().enumerate() {
            let code = str_field(row, code_col, i)?;
            if !filters.areas.matches(code) {
                continue;
            }
            let (measure_code, measure_label) = measures.resolve(row, i)?;
            if !filters.measures.matches_ignore_case(measure_code) {
                continue;
            }
            let name = str_field(row, name_col, i)?;
            let year = parse_data_year(str_field(row, year_col, i)?)?;
            let reading = num_field(row, value_col, i)?;

            let mut measure = Measure::new(measure_code, measure_label);
            if filters.years.contains(year) {
                measure.set_value(year, reading);
            }
            let mut area = Area::new(code);
            area.set_name(LANG_ENG, name);
            let key = measure.codename().to_string();
            area.set_measure(&key, measure)?;
            self.upsert(code, area);
        }
        Ok(())
    }
}
