//! The top-level store: every imported [`Area`] keyed by authority code.

use crate::area::Area;
use crate::datasets::{ColumnMapping, SourceDataType};
use crate::error::{Error, Result};
use crate::filters::Filters;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::io::Read;

/// All imported areas, ordered by authority code.
///
/// Populated incrementally through [`AreaStore::populate`] (or the individual
/// importers) and rendered with `Display` or [`AreaStore::to_json_string`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct AreaStore {
    areas: BTreeMap<String, Area>,
}

impl AreaStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `area` under `code`. If the code is already present the
    /// incoming area is merged into the stored one: its names and readings
    /// win, anything it does not mention is kept.
    pub fn upsert(&mut self, code: impl Into<String>, area: Area) {
        let code = code.into();
        match self.areas.get_mut(&code) {
            Some(existing) => existing.merge(area),
            None => {
                self.areas.insert(code, area);
            }
        }
    }

    pub fn get(&self, code: &str) -> Result<&Area> {
        self.areas
            .get(code)
            .ok_or_else(|| Error::not_found("area", code))
    }

    pub fn get_mut(&mut self, code: &str) -> Result<&mut Area> {
        self.areas
            .get_mut(code)
            .ok_or_else(|| Error::not_found("area", code))
    }

    pub fn contains(&self, code: &str) -> bool {
        self.areas.contains_key(code)
    }

    pub fn len(&self) -> usize {
        self.areas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }

    /// Areas in ascending authority-code order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Area)> {
        self.areas.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Read one source into the store, choosing the importer by `source_type`.
    ///
    /// The mapping is checked against the source type's minimum size before
    /// anything is read.
    pub fn populate<R: Read>(
        &mut self,
        reader: R,
        source_type: SourceDataType,
        cols: &ColumnMapping,
        filters: &Filters,
    ) -> Result<()> {
        require_columns(source_type, cols)?;
        match source_type {
            SourceDataType::AuthorityCodeCsv => {
                self.import_authority_codes(reader, cols, &filters.areas)
            }
            SourceDataType::AuthorityByYearCsv => self.import_year_series(reader, cols, filters),
            SourceDataType::WelshStatsJson => self.import_json_records(reader, cols, filters),
        }
    }

    /// [`populate`](Self::populate) without any filter.
    pub fn populate_all<R: Read>(
        &mut self,
        reader: R,
        source_type: SourceDataType,
        cols: &ColumnMapping,
    ) -> Result<()> {
        self.populate(reader, source_type, cols, &Filters::all())
    }

    /// Compact JSON keyed by authority code; `{}` when empty.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

pub(crate) fn require_columns(source_type: SourceDataType, cols: &ColumnMapping) -> Result<()> {
    let required = source_type.required_columns();
    if cols.len() < required {
        return Err(Error::InvalidMapping {
            source_type: source_type.to_string(),
            required,
            actual: cols.len(),
        });
    }
    Ok(())
}

impl fmt::Display for AreaStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, area) in self.areas.values().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", area)?;
        }
        Ok(())
    }
}
