use crate::error::{Error, Result};
use crate::merge::{incoming_wins, merge_maps};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Year → value readings for one measure, kept in ascending year order.
///
/// Statistics are derived on demand and never stored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValueSeries {
    readings: BTreeMap<u32, f64>,
}

impl ValueSeries {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the value for `year`.
    pub fn set(&mut self, year: u32, value: f64) {
        self.readings.insert(year, value);
    }

    pub fn get(&self, year: u32) -> Result<f64> {
        self.readings
            .get(&year)
            .copied()
            .ok_or_else(|| Error::not_found("value for year", year))
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    /// Readings in ascending year order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, f64)> + '_ {
        self.readings.iter().map(|(y, v)| (*y, *v))
    }

    pub fn years(&self) -> impl Iterator<Item = u32> + '_ {
        self.readings.keys().copied()
    }

    /// Reading at the lowest year.
    pub fn first(&self) -> Option<(u32, f64)> {
        self.readings.first_key_value().map(|(y, v)| (*y, *v))
    }

    /// Reading at the highest year.
    pub fn last(&self) -> Option<(u32, f64)> {
        self.readings.last_key_value().map(|(y, v)| (*y, *v))
    }

    /// Arithmetic mean, 0 for an empty series.
    pub fn mean(&self) -> f64 {
        if self.readings.is_empty() {
            return 0.0;
        }
        self.readings.values().sum::<f64>() / self.readings.len() as f64
    }

    /// Last value minus first value, 0 with fewer than two readings.
    pub fn delta(&self) -> f64 {
        if self.readings.len() < 2 {
            return 0.0;
        }
        match (self.first(), self.last()) {
            (Some((_, first)), Some((_, last))) => last - first,
            _ => 0.0,
        }
    }

    /// `delta()` as a percentage of the first value; 0 when there is no change.
    pub fn delta_percent(&self) -> f64 {
        let delta = self.delta();
        if delta == 0.0 {
            return 0.0;
        }
        match self.first() {
            Some((_, first)) => delta / first * 100.0,
            None => 0.0,
        }
    }

    /// Union with `other`; `other` wins on a shared year.
    pub fn merge(&mut self, other: ValueSeries) {
        merge_maps(&mut self.readings, other.readings, incoming_wins);
    }
}

impl FromIterator<(u32, f64)> for ValueSeries {
    fn from_iter<I: IntoIterator<Item = (u32, f64)>>(iter: I) -> Self {
        Self {
            readings: iter.into_iter().collect(),
        }
    }
}
