//! Source types, column mappings, and the catalogue of known dataset files.

use crate::error::{Error, Result};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Layout of an input file, selecting the importer used for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceDataType {
    /// `code,english name,welsh name` rows.
    AuthorityCodeCsv,
    /// One measure; one row per authority code, one column per year.
    AuthorityByYearCsv,
    /// StatsWales JSON export: row objects under `"value"`.
    WelshStatsJson,
}

impl SourceDataType {
    /// Smallest column mapping the importer can work with.
    pub fn required_columns(&self) -> usize {
        match self {
            SourceDataType::AuthorityCodeCsv => 3,
            SourceDataType::AuthorityByYearCsv => 3,
            SourceDataType::WelshStatsJson => 6,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            SourceDataType::AuthorityCodeCsv => "authority-code-csv",
            SourceDataType::AuthorityByYearCsv => "authority-by-year-csv",
            SourceDataType::WelshStatsJson => "welsh-stats-json",
        }
    }
}

impl fmt::Display for SourceDataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for SourceDataType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "authority-code-csv" => Ok(SourceDataType::AuthorityCodeCsv),
            "authority-by-year-csv" => Ok(SourceDataType::AuthorityByYearCsv),
            "welsh-stats-json" => Ok(SourceDataType::WelshStatsJson),
            _ => Err(Error::UnsupportedSourceType(s.to_string())),
        }
    }
}

/// Logical role of a column in a source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SourceColumn {
    AuthCode,
    AuthNameEng,
    AuthNameCym,
    MeasureCode,
    MeasureName,
    /// Literal codename for files holding a single measure.
    SingleMeasureCode,
    /// Literal label for files holding a single measure.
    SingleMeasureName,
    Year,
    Value,
}

/// Role → header (or JSON field) name for one source file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnMapping(BTreeMap<SourceColumn, String>);

impl ColumnMapping {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, role: SourceColumn, name: impl Into<String>) -> Self {
        self.0.insert(role, name.into());
        self
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, role: SourceColumn) -> bool {
        self.0.contains_key(&role)
    }

    pub fn get(&self, role: SourceColumn) -> Result<&str> {
        self.0
            .get(&role)
            .map(String::as_str)
            .ok_or(Error::MissingColumn(role))
    }
}

impl<S: Into<String>> FromIterator<(SourceColumn, S)> for ColumnMapping {
    fn from_iter<I: IntoIterator<Item = (SourceColumn, S)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k, v.into())).collect())
    }
}

/// A known dataset file and how to read it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputFileSource {
    pub name: &'static str,
    pub code: &'static str,
    pub file: &'static str,
    pub parser: SourceDataType,
    pub cols: ColumnMapping,
}

/// The authority names file, loaded before any dataset.
pub fn areas_source() -> InputFileSource {
    use SourceColumn::*;
    InputFileSource {
        name: "Areas",
        code: "areas",
        file: "areas.csv",
        parser: SourceDataType::AuthorityCodeCsv,
        cols: [
            (AuthCode, "Local authority code"),
            (AuthNameEng, "Name (eng)"),
            (AuthNameCym, "Name (cym)"),
        ]
        .into_iter()
        .collect(),
    }
}

fn stats_json(
    name: &'static str,
    code: &'static str,
    file: &'static str,
    cols: [(SourceColumn, &str); 6],
) -> InputFileSource {
    InputFileSource {
        name,
        code,
        file,
        parser: SourceDataType::WelshStatsJson,
        cols: cols.into_iter().collect(),
    }
}

fn year_csv(
    name: &'static str,
    code: &'static str,
    file: &'static str,
    measure: (&str, &str),
) -> InputFileSource {
    use SourceColumn::*;
    InputFileSource {
        name,
        code,
        file,
        parser: SourceDataType::AuthorityByYearCsv,
        cols: [
            (AuthCode, "AuthorityCode"),
            (SingleMeasureCode, measure.0),
            (SingleMeasureName, measure.1),
        ]
        .into_iter()
        .collect(),
    }
}

/// Every importable dataset, in the order they are loaded.
pub fn catalogue() -> Vec<InputFileSource> {
    use SourceColumn::*;
    vec![
        stats_json(
            "Population density",
            "popden",
            "popu1009.json",
            [
                (AuthCode, "Localauthority_Code"),
                (AuthNameEng, "Localauthority_ItemName_ENG"),
                (MeasureCode, "Measure_Code"),
                (MeasureName, "Measure_ItemName_ENG"),
                (Year, "Year_Code"),
                (Value, "Data"),
            ],
        ),
        stats_json(
            "Active Businesses",
            "biz",
            "econ0080.json",
            [
                (AuthCode, "Area_Code"),
                (AuthNameEng, "Area_ItemName_ENG"),
                (MeasureCode, "Variable_Code"),
                (MeasureName, "Variable_ItemName_ENG"),
                (Year, "Year_Code"),
                (Value, "Data"),
            ],
        ),
        stats_json(
            "Air Quality Indicators",
            "aqi",
            "envi0201.json",
            [
                (AuthCode, "Area_Code"),
                (AuthNameEng, "Area_ItemName_ENG"),
                (MeasureCode, "Pollutant_ItemName_ENG"),
                (MeasureName, "Pollutant_ItemName_ENG"),
                (Year, "Year_Code"),
                (Value, "Data"),
            ],
        ),
        stats_json(
            "Rail passenger journeys",
            "trains",
            "tran0152.json",
            [
                (AuthCode, "LocalAuthorityCode"),
                (AuthNameEng, "LocalAuthority_ItemName_ENG"),
                (SingleMeasureCode, "rail"),
                (SingleMeasureName, "Rail passenger journeys"),
                (Year, "Year_Code"),
                (Value, "Data"),
            ],
        ),
        year_csv(
            "Population density",
            "complete-popden",
            "complete-popu1009-popden.csv",
            ("dens", "Population density"),
        ),
        year_csv(
            "Population",
            "complete-pop",
            "complete-popu1009-pop.csv",
            ("pop", "Population"),
        ),
        year_csv(
            "Land area",
            "complete-area",
            "complete-popu1009-area.csv",
            ("area", "Land area"),
        ),
    ]
}

/// Look up a catalogue entry by its code.
pub fn find(code: &str) -> Option<InputFileSource> {
    catalogue().into_iter().find(|d| d.code == code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_round_trip_and_unknown_is_rejected() {
        for t in [
            SourceDataType::AuthorityCodeCsv,
            SourceDataType::AuthorityByYearCsv,
            SourceDataType::WelshStatsJson,
        ] {
            assert_eq!(t.tag().parse::<SourceDataType>().unwrap(), t);
        }
        assert!(matches!(
            "xml".parse::<SourceDataType>(),
            Err(Error::UnsupportedSourceType(_))
        ));
    }

    #[test]
    fn catalogue_mappings_meet_their_parser_minimum() {
        assert!(areas_source().cols.len() >= areas_source().parser.required_columns());
        for d in catalogue() {
            assert!(d.cols.len() >= d.parser.required_columns(), "{}", d.code);
        }
        assert_eq!(find("trains").unwrap().file, "tran0152.json");
        assert!(find("nope").is_none());
    }
}
