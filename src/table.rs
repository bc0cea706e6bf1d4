//! Result rows and their renderings for plotting tools.

use std::collections::BTreeMap;
use std::io::Write;

use serde::Serialize;

use crate::container::Strategy;
use crate::error::Result;

/// Average cost of one lookup for one strategy at one sweep point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Measurement {
    #[serde(rename = "ContainerSize")]
    pub container_size: i64,
    #[serde(rename = "NumLookups")]
    pub num_lookups: i64,
    #[serde(rename = "Strategy")]
    pub strategy: Strategy,
    /// Seconds per lookup.
    #[serde(rename = "Duration")]
    pub duration: f64,
}

/// Measurements in sweep order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ResultTable {
    rows: Vec<Measurement>,
}

pub fn to_table<I>(measurements: I) -> ResultTable
where
    I: IntoIterator<Item = Measurement>,
{
    measurements.into_iter().collect()
}

impl FromIterator<Measurement> for ResultTable {
    fn from_iter<T: IntoIterator<Item = Measurement>>(iter: T) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}

impl Extend<Measurement> for ResultTable {
    fn extend<T: IntoIterator<Item = Measurement>>(&mut self, iter: T) {
        self.rows.extend(iter);
    }
}

impl ResultTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, measurement: Measurement) {
        self.rows.push(measurement);
    }

    pub fn rows(&self) -> &[Measurement] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn filter_strategy(&self, strategy: Strategy) -> impl Iterator<Item = &Measurement> + '_ {
        self.rows.iter().filter(move |m| m.strategy == strategy)
    }

    pub fn mean_duration(&self, strategy: Strategy) -> Option<f64> {
        let (sum, count) = self
            .filter_strategy(strategy)
            .fold((0.0, 0usize), |(sum, count), m| (sum + m.duration, count + 1));
        (count > 0).then(|| sum / count as f64)
    }

    pub fn write_csv<W: Write>(&self, mut out: W) -> Result<()> {
        writeln!(out, "ContainerSize,NumLookups,Strategy,Duration")?;
        for m in &self.rows {
            writeln!(
                out,
                "{},{},{},{:e}",
                m.container_size, m.num_lookups, m.strategy, m.duration
            )?;
        }
        Ok(())
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Per-point comparison in ns/lookup, grouped by lookup batch then size.
    pub fn summary(&self) -> String {
        let mut groups: BTreeMap<(i64, i64), BTreeMap<Strategy, f64>> = BTreeMap::new();
        for m in &self.rows {
            groups
                .entry((m.num_lookups, m.container_size))
                .or_default()
                .insert(m.strategy, m.duration);
        }

        let mut out = String::new();
        let mut current_lookups = None;
        for ((num_lookups, size), by_strategy) in &groups {
            if current_lookups != Some(*num_lookups) {
                out.push_str(&format!("{}\n", "=".repeat(80)));
                out.push_str(&format!("Lookups = {:>6}\n", num_lookups));
                out.push_str(&format!("{}\n", "=".repeat(80)));
                current_lookups = Some(*num_lookups);
            }

            let ns = |s: Strategy| by_strategy.get(&s).map(|d| d * 1e9);
            let cell = |v: Option<f64>| v.map_or("     n/a".to_string(), |v| format!("{:>8.1}", v));
            let list = ns(Strategy::LinearSequence);
            let set = ns(Strategy::HashSet);
            let ratio = match (list, set) {
                (Some(l), Some(s)) if s > 0.0 => format!("{:.1}x", l / s),
                _ => "n/a".to_string(),
            };
            out.push_str(&format!(
                "  N = {:>9}   list {}ns   set {}ns   set+build {}ns   list/set {}\n",
                size,
                cell(list),
                cell(set),
                cell(ns(Strategy::HashSetWithConversion)),
                ratio
            ));
        }
        out
    }
}
