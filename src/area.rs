use crate::error::{Error, Result};
use crate::measure::Measure;
use crate::merge::{incoming_wins, merge_maps};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Language code for English display names.
pub const LANG_ENG: &str = "eng";
/// Language code for Welsh display names.
pub const LANG_CYM: &str = "cym";

/// A geographic authority with its display names and measures.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Area {
    #[serde(skip)]
    code: String,
    names: BTreeMap<String, String>,
    measures: BTreeMap<String, Measure>,
}

impl Area {
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            names: BTreeMap::new(),
            measures: BTreeMap::new(),
        }
    }

    /// Authority code, kept exactly as given.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Set the display name for a language code, replacing any previous one.
    pub fn set_name(&mut self, lang: impl Into<String>, name: impl Into<String>) {
        self.names.insert(lang.into(), name.into());
    }

    pub fn name(&self, lang: &str) -> Result<&str> {
        self.names
            .get(lang)
            .map(String::as_str)
            .ok_or_else(|| Error::not_found("name for language", lang))
    }

    pub fn names(&self) -> &BTreeMap<String, String> {
        &self.names
    }

    /// Insert `measure` under `codename`, or merge it into the measure
    /// already stored there (incoming readings win).
    ///
    /// `codename` must match the measure's own codename, ignoring case.
    pub fn set_measure(&mut self, codename: &str, measure: Measure) -> Result<()> {
        let key = codename.to_lowercase();
        if key != measure.codename() {
            return Err(Error::CodenameMismatch {
                key,
                codename: measure.codename().to_string(),
            });
        }
        match self.measures.get_mut(&key) {
            Some(existing) => existing.merge(measure),
            None => {
                self.measures.insert(key, measure);
            }
        }
        Ok(())
    }

    /// Lookup by codename, case-insensitive.
    pub fn measure(&self, codename: &str) -> Result<&Measure> {
        self.measures
            .get(&codename.to_lowercase())
            .ok_or_else(|| Error::not_found("measure", codename))
    }

    pub fn measure_mut(&mut self, codename: &str) -> Result<&mut Measure> {
        self.measures
            .get_mut(&codename.to_lowercase())
            .ok_or_else(|| Error::not_found("measure", codename))
    }

    pub fn measure_count(&self) -> usize {
        self.measures.len()
    }

    /// Measures ordered by codename.
    pub fn measures(&self) -> impl Iterator<Item = &Measure> {
        self.measures.values()
    }

    /// Fold `other` into this area. `other` is the newer data: its names
    /// replace ours per language and its readings replace ours per year.
    pub fn merge(&mut self, other: Area) {
        merge_maps(&mut self.names, other.names, incoming_wins);
        merge_maps(&mut self.measures, other.measures, |existing, incoming| {
            existing.merge(incoming)
        });
    }
}

impl fmt::Display for Area {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let eng = self.names.get(LANG_ENG);
        let cym = self.names.get(LANG_CYM);
        match (eng, cym) {
            (Some(e), Some(c)) => writeln!(f, "{} / {} ({})", e, c, self.code)?,
            (Some(n), None) | (None, Some(n)) => writeln!(f, "{} ({})", n, self.code)?,
            (None, None) => writeln!(f, "({})", self.code)?,
        }
        for measure in self.measures.values() {
            write!(f, "{}", measure)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn measure(code: &str, readings: &[(u32, f64)]) -> Measure {
        let mut m = Measure::new(code, code.to_uppercase());
        for (y, v) in readings {
            m.set_value(*y, *v);
        }
        m
    }

    #[test]
    fn set_measure_merges_existing_codename() {
        let mut a = Area::new("W06000011");
        a.set_measure("pop", measure("pop", &[(1999, 10.0), (1998, 5.0)])).unwrap();
        a.set_measure("POP", measure("pop", &[(1999, 20.0)])).unwrap();
        let m = a.measure("pop").unwrap();
        assert_eq!(m.value(1999).unwrap(), 20.0);
        assert_eq!(m.value(1998).unwrap(), 5.0);
        assert_eq!(a.measure_count(), 1);
    }

    #[test]
    fn set_measure_rejects_foreign_codename() {
        let mut a = Area::new("W06000011");
        let err = a.set_measure("x", measure("y", &[(2000, 1.0)])).unwrap_err();
        assert!(matches!(err, Error::CodenameMismatch { .. }));
        assert_eq!(a.measure_count(), 0);
        a.set_measure("x", measure("x", &[(2000, 2.0)])).unwrap();
        assert_eq!(a.measure("x").unwrap().value(2000).unwrap(), 2.0);
    }

    #[test]
    fn name_line_falls_back_to_single_language() {
        let mut a = Area::new("W06000015");
        a.set_name(LANG_ENG, "Cardiff");
        assert_eq!(a.to_string(), "Cardiff (W06000015)\n");
        a.set_name(LANG_CYM, "Caerdydd");
        assert_eq!(a.to_string(), "Cardiff / Caerdydd (W06000015)\n");

        let mut only_cym = Area::new("W06000001");
        only_cym.set_name(LANG_CYM, "Ynys Môn");
        assert_eq!(only_cym.to_string(), "Ynys Môn (W06000001)\n");
        assert_eq!(Area::new("X").to_string(), "(X)\n");
    }

    #[test]
    fn unknown_language_and_measure_are_not_found() {
        let a = Area::new("W06000015");
        assert!(matches!(a.name("fra"), Err(Error::NotFound { .. })));
        assert!(matches!(a.measure("pop"), Err(Error::NotFound { .. })));
    }

    #[test]
    fn measures_render_in_codename_order() {
        let mut a = Area::new("W06000015");
        a.set_measure("pop", measure("pop", &[])).unwrap();
        a.set_measure("area", measure("area", &[])).unwrap();
        let text = a.to_string();
        let area_at = text.find("(area)").unwrap();
        let pop_at = text.find("(pop)").unwrap();
        assert!(area_at < pop_at);
    }
}
