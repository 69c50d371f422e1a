use crate::error::Result;
use crate::series::ValueSeries;
use serde::{Serialize, Serializer};
use std::fmt;

/// A named statistical indicator tracked over years.
///
/// The codename is lowercased on construction; the label is kept verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct Measure {
    codename: String,
    label: String,
    series: ValueSeries,
}

impl Measure {
    pub fn new(codename: &str, label: impl Into<String>) -> Self {
        Self {
            codename: codename.to_lowercase(),
            label: label.into(),
            series: ValueSeries::new(),
        }
    }

    pub fn codename(&self) -> &str {
        &self.codename
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    pub fn set_value(&mut self, year: u32, value: f64) {
        self.series.set(year, value);
    }

    pub fn value(&self, year: u32) -> Result<f64> {
        self.series.get(year)
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    pub fn series(&self) -> &ValueSeries {
        &self.series
    }

    /// Merge another reading set for the same codename into this one.
    ///
    /// `other` is the incoming side: its years overwrite ours, years only we
    /// hold are kept. The label is left unchanged.
    pub fn merge(&mut self, other: Measure) {
        debug_assert_eq!(self.codename, other.codename);
        self.series.merge(other.series);
    }
}

/// Fixed-point formatting used by every numeric table cell.
fn fixed(v: f64) -> String {
    format!("{:.6}", v)
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} ({})", self.label, self.codename)?;
        if self.series.is_empty() {
            return writeln!(f, "<no data>");
        }

        let mut headers: Vec<String> = self.series.years().map(|y| y.to_string()).collect();
        headers.extend(["Average", "Diff.", "% Diff."].map(String::from));

        let mut values: Vec<String> = self.series.iter().map(|(_, v)| fixed(v)).collect();
        values.push(fixed(self.series.mean()));
        values.push(fixed(self.series.delta()));
        values.push(fixed(self.series.delta_percent()));

        let widths: Vec<usize> = headers
            .iter()
            .zip(&values)
            .map(|(h, v)| h.len().max(v.len()))
            .collect();

        let row = |cells: &[String]| {
            cells
                .iter()
                .zip(&widths)
                .map(|(c, w)| format!("{:>w$}", c, w = *w))
                .collect::<Vec<_>>()
                .join(" ")
        };
        writeln!(f, "{}", row(&headers))?;
        writeln!(f, "{}", row(&values))
    }
}

/// Serialized as its bare year → value object.
impl Serialize for Measure {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.series.serialize(serializer)
    }
}
