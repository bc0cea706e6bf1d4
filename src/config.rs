//! Sweep configuration.
//!
//! Loaded from YAML or built in code. Defaults reproduce the classic run:
//! lookup batches of 5, 12, 19, 26 and 33 probes against containers of
//! 40 to 99,040 values in steps of 1,000, ten trials each.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{HarnessError, Result};

/// Half-open integer range `[start, stop)` walked in `step` increments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeSpec {
    pub start: i64,
    pub stop: i64,
    pub step: i64,
}

impl RangeSpec {
    pub fn new(start: i64, stop: i64, step: i64) -> Self {
        Self { start, stop, step }
    }

    fn validate(&self, name: &str) -> Result<()> {
        if self.step <= 0 {
            return Err(HarnessError::Config(format!(
                "{}: step must be > 0, got {}",
                name, self.step
            )));
        }
        if self.start < 0 {
            return Err(HarnessError::Config(format!(
                "{}: start must be >= 0, got {}",
                name, self.start
            )));
        }
        if self.start > self.stop {
            return Err(HarnessError::Config(format!(
                "{}: start {} is past stop {}",
                name, self.start, self.stop
            )));
        }
        Ok(())
    }

    /// Values in the range. Assumes a validated, positive step.
    pub fn values(&self) -> Vec<i64> {
        (self.start..self.stop).step_by(self.step as usize).collect()
    }
}

/// One swept parameter: a single value, an explicit list, or a range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParamSpec {
    Fixed(i64),
    Values(Vec<i64>),
    Range(RangeSpec),
}

impl ParamSpec {
    pub fn values(&self) -> Vec<i64> {
        match self {
            ParamSpec::Fixed(v) => vec![*v],
            ParamSpec::Values(vs) => vs.clone(),
            ParamSpec::Range(range) => range.values(),
        }
    }

    fn validate(&self, name: &str) -> Result<()> {
        match self {
            ParamSpec::Range(range) => range.validate(name),
            ParamSpec::Fixed(v) if *v < 0 => Err(HarnessError::Config(format!(
                "{}: value must be >= 0, got {}",
                name, v
            ))),
            ParamSpec::Values(vs) => match vs.iter().find(|v| **v < 0) {
                Some(v) => Err(HarnessError::Config(format!(
                    "{}: value must be >= 0, got {}",
                    name, v
                ))),
                None => Ok(()),
            },
            ParamSpec::Fixed(_) => Ok(()),
        }
    }
}

/// What to do with a combination whose container is smaller than its lookup batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UndersizedPolicy {
    /// Log a warning and record nothing for the combination.
    #[default]
    Skip,
    /// Abort the sweep.
    Fail,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SweepConfig {
    #[serde(with = "serde_yaml::with::singleton_map")]
    pub sizes: ParamSpec,
    #[serde(with = "serde_yaml::with::singleton_map")]
    pub lookups: ParamSpec,
    pub num_trials: u32,
    /// Seed for the workload generator; `None` seeds from the OS.
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub undersized: UndersizedPolicy,
}

const NUM_TRIALS: u32 = 10;

const LOOKUPS_START: i64 = 5;
const LOOKUPS_STEP: i64 = 7;
const LOOKUPS_POINTS: i64 = 5;
const LOOKUPS_MAX: i64 = LOOKUPS_START + LOOKUPS_STEP * LOOKUPS_POINTS;

const SIZE_STEP: i64 = 1000;
const SIZE_POINTS: i64 = 100;

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            sizes: ParamSpec::Range(RangeSpec::new(
                LOOKUPS_MAX,
                LOOKUPS_MAX + SIZE_STEP * SIZE_POINTS,
                SIZE_STEP,
            )),
            lookups: ParamSpec::Range(RangeSpec::new(LOOKUPS_START, LOOKUPS_MAX, LOOKUPS_STEP)),
            num_trials: NUM_TRIALS,
            seed: None,
            undersized: UndersizedPolicy::Skip,
        }
    }
}

impl SweepConfig {
    /// Explicit sizes with a fixed lookup batch.
    pub fn from_sizes(sizes: &[i64], num_lookups: i64, num_trials: u32) -> Self {
        Self {
            sizes: ParamSpec::Values(sizes.to_vec()),
            lookups: ParamSpec::Fixed(num_lookups),
            num_trials,
            ..Default::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_undersized(mut self, policy: UndersizedPolicy) -> Self {
        self.undersized = policy;
        self
    }

    pub fn validate(&self) -> Result<()> {
        self.sizes.validate("sizes")?;
        self.lookups.validate("lookups")?;
        if self.num_trials == 0 {
            return Err(HarnessError::Config("num_trials must be > 0".into()));
        }
        if self.lookups.values().contains(&0) {
            return Err(HarnessError::Config(
                "lookups: a batch of 0 probes cannot be normalized".into(),
            ));
        }
        Ok(())
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        let config: SweepConfig = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Number of (lookups, size) combinations the sweep visits.
    pub fn combinations(&self) -> usize {
        self.sizes.values().len() * self.lookups.values().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_classic_run() {
        let config = SweepConfig::default();
        config.validate().unwrap();

        assert_eq!(config.lookups.values(), vec![5, 12, 19, 26, 33]);
        let sizes = config.sizes.values();
        assert_eq!(sizes.len(), 100);
        assert_eq!(sizes.first(), Some(&40));
        assert_eq!(sizes.last(), Some(&99_040));
        assert_eq!(config.combinations(), 500);
    }

    #[test]
    fn test_parse_yaml() {
        let yaml = r#"
sizes:
  range: { start: 100, stop: 1100, step: 500 }
lookups:
  fixed: 10
num_trials: 3
seed: 42
undersized: fail
"#;
        let config = SweepConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.sizes.values(), vec![100, 600]);
        assert_eq!(config.lookups.values(), vec![10]);
        assert_eq!(config.num_trials, 3);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.undersized, UndersizedPolicy::Fail);
    }

    #[test]
    fn test_parse_yaml_defaults_optional_fields() {
        let yaml = "sizes: { values: [10, 20] }\nlookups: { fixed: 2 }\nnum_trials: 1\n";
        let config = SweepConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.seed, None);
        assert_eq!(config.undersized, UndersizedPolicy::Skip);
    }

    #[test]
    fn test_validation_errors() {
        let mut config = SweepConfig::from_sizes(&[10], 2, 0);
        assert!(matches!(config.validate(), Err(HarnessError::Config(_))));

        config.num_trials = 1;
        config.sizes = ParamSpec::Range(RangeSpec::new(0, 10, 0));
        assert!(matches!(config.validate(), Err(HarnessError::Config(_))));

        config.sizes = ParamSpec::Range(RangeSpec::new(20, 10, 1));
        assert!(matches!(config.validate(), Err(HarnessError::Config(_))));

        config.sizes = ParamSpec::Values(vec![10, -5]);
        assert!(matches!(config.validate(), Err(HarnessError::Config(_))));

        config.sizes = ParamSpec::Fixed(10);
        config.lookups = ParamSpec::Fixed(0);
        assert!(matches!(config.validate(), Err(HarnessError::Config(_))));
    }

    #[test]
    fn test_shipped_configs() {
        let classic = SweepConfig::from_yaml(include_str!("../config/default.yaml")).unwrap();
        assert_eq!(classic, SweepConfig::default());

        let quick = SweepConfig::from_yaml(include_str!("../config/quick.yaml")).unwrap();
        assert_eq!(quick.combinations(), 4);
    }

    #[test]
    fn test_bad_yaml() {
        assert!(matches!(
            SweepConfig::from_yaml("sizes: [1, 2"),
            Err(HarnessError::Yaml(_))
        ));
    }
}
