use super::{csv_reader, line_of};
use crate::area::Area;
use crate::areas::{AreaStore, require_columns};
use crate::datasets::{ColumnMapping, SourceColumn, SourceDataType};
use crate::error::{Error, Result};
use crate::filters::{Filters, parse_data_year};
use crate::measure::Measure;
use std::io::Read;

impl AreaStore {
    /// Import a single-measure CSV laid out as one row per authority code and
    /// one column per year.
    ///
    /// The measure codename and label come from the mapping's
    /// `SingleMeasureCode` and `SingleMeasureName`. These files carry no area
    /// names; areas not seen before are created without any. Blank cells mean
    /// "no reading". Filters behave as in
    /// [`import_json_records`](AreaStore::import_json_records); a measure
    /// outside the measure filter skips the whole file.
    pub fn import_year_series<R: Read>(
        &mut self,
        reader: R,
        cols: &ColumnMapping,
        filters: &Filters,
    ) -> Result<()> {
        require_columns(SourceDataType::AuthorityByYearCsv, cols)?;
        let code_col = cols.get(SourceColumn::AuthCode)?;
        let measure_code = cols.get(SourceColumn::SingleMeasureCode)?;
        let measure_label = cols.get(SourceColumn::SingleMeasureName)?;

        if !filters.measures.matches_ignore_case(measure_code) {
            return Ok(());
        }

        let mut rdr = csv_reader(reader, false);
        let headers = rdr.headers()?.clone();
        if headers.is_empty() {
            return Err(Error::malformed("year series file is empty"));
        }
        let code_idx = headers
            .iter()
            .position(|h| h == code_col)
            .ok_or_else(|| Error::malformed(format!("no {code_col:?} column in header")))?;
        let year_cols = headers
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != code_idx)
            .map(|(i, h)| parse_data_year(h).map(|y| (i, y)))
            .collect::<Result<Vec<(usize, u32)>>>()?;

        for result in rdr.records() {
            let record = result?;
            let line = line_of(&record);
            let code = record
                .get(code_idx)
                .ok_or_else(|| Error::malformed(format!("line {line}: missing authority code")))?;
            if code.is_empty() {
                return Err(Error::malformed(format!("line {line}: empty authority code")));
            }
            if !filters.areas.matches(code) {
                continue;
            }

            let mut measure = Measure::new(measure_code, measure_label);
            for &(idx, year) in &year_cols {
                let cell = record.get(idx).unwrap_or("");
                if cell.is_empty() {
                    continue;
                }
                let value = cell
                    .parse::<f64>()
                    .ok()
                    .filter(|v| v.is_finite())
                    .ok_or_else(|| {
                        Error::malformed(format!("line {line}: {cell:?} for {year} is not a number"))
                    })?;
                if filters.years.contains(year) {
                    measure.set_value(year, value);
                }
            }

            let mut area = Area::new(code);
            let key = measure.codename().to_string();
            area.set_measure(&key, measure)?;
            self.upsert(code, area);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::areas::AreaStore;
    use crate::datasets::find;
    use crate::error::Error;
    use crate::filters::Filters;

    #[test]
    fn header_years_are_validated() {
        let cols = find("complete-pop").unwrap().cols;
        let mut s = AreaStore::new();
        let err = s
            .import_year_series("AuthorityCode,1991,abcd\nW1,1,2\n".as_bytes(), &cols, &Filters::all())
            .unwrap_err();
        assert!(matches!(err, Error::MalformedInput(_)));
    }

    #[test]
    fn missing_code_column_is_malformed() {
        let cols = find("complete-pop").unwrap().cols;
        let mut s = AreaStore::new();
        let err = s
            .import_year_series("Code,1991\nW1,1\n".as_bytes(), &cols, &Filters::all())
            .unwrap_err();
        assert!(matches!(err, Error::MalformedInput(_)));
    }
}
