use super::{csv_reader, line_of};
use crate::area::{Area, LANG_CYM, LANG_ENG};
use crate::areas::{AreaStore, require_columns};
use crate::datasets::{ColumnMapping, SourceDataType};
use crate::error::{Error, Result};
use crate::filters::StringFilter;
use std::io::Read;

const FIELDS: usize = 3;

impl AreaStore {
    /// Import the authority names file: a header line, then
    /// `code,english name,welsh name` rows.
    ///
    /// Rows whose code is not in `areas` are skipped. A row with any other
    /// number of fields aborts the import; rows already merged stay merged.
    pub fn import_authority_codes<R: Read>(
        &mut self,
        reader: R,
        cols: &ColumnMapping,
        areas: &StringFilter,
    ) -> Result<()> {
        require_columns(SourceDataType::AuthorityCodeCsv, cols)?;

        let mut rdr = csv_reader(reader, true);
        if rdr.headers()?.is_empty() {
            return Err(Error::malformed("authority code file is empty"));
        }

        for result in rdr.records() {
            let record = result?;
            if record.len() != FIELDS {
                return Err(Error::malformed(format!(
                    "line {}: expected {} fields, found {}",
                    line_of(&record),
                    FIELDS,
                    record.len()
                )));
            }
            let code = &record[0];
            if !areas.matches(code) {
                continue;
            }
            let mut area = Area::new(code);
            area.set_name(LANG_ENG, &record[1]);
            area.set_name(LANG_CYM, &record[2]);
            self.upsert(code, area);
        }
        Ok(())
    }
}
