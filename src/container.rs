//! Container strategies and the lookup executor.

use std::fmt;
use std::hint::black_box;

use hashbrown::HashSet;
use serde::{Deserialize, Serialize};

use crate::error::{HarnessError, Result};
use crate::generator::ValuePool;

/// How lookups are served from a value pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Strategy {
    /// Scan the pool in its generated order.
    #[serde(rename = "List Lookup")]
    LinearSequence,
    /// Pool converted to a hash set before timing starts.
    #[serde(rename = "Set Lookup")]
    HashSet,
    /// Pool converted to a hash set inside every timed trial.
    #[serde(rename = "Set Creation and Lookup")]
    HashSetWithConversion,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [
        Strategy::LinearSequence,
        Strategy::HashSet,
        Strategy::HashSetWithConversion,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Strategy::LinearSequence => "List Lookup",
            Strategy::HashSet => "Set Lookup",
            Strategy::HashSetWithConversion => "Set Creation and Lookup",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Anything that can answer "is this value present?".
pub trait Membership {
    fn has(&self, value: i64) -> bool;
}

impl Membership for [i64] {
    #[inline]
    fn has(&self, value: i64) -> bool {
        self.contains(&value)
    }
}

impl Membership for Vec<i64> {
    #[inline]
    fn has(&self, value: i64) -> bool {
        self.as_slice().has(value)
    }
}

impl Membership for HashSet<i64> {
    #[inline]
    fn has(&self, value: i64) -> bool {
        self.contains(&value)
    }
}

/// Test every probe against `container`, throwing the answers away.
#[inline]
pub fn run_lookups<C: Membership + ?Sized>(probe_values: &[i64], container: &C) {
    for &value in probe_values {
        black_box(container.has(black_box(value)));
    }
}

fn to_set(values: &[i64]) -> HashSet<i64> {
    let mut set = HashSet::with_capacity(values.len());
    set.extend(values.iter().copied());
    set
}

/// A value pool laid out for one strategy.
#[derive(Debug, Clone)]
pub enum Container {
    Linear(Vec<i64>),
    Hashed(HashSet<i64>),
    /// Source sequence only; the set is built per trial.
    Deferred(Vec<i64>),
}

impl Container {
    /// Lay out `pool` for `strategy`. The `HashSet` conversion happens here,
    /// outside any timed region.
    pub fn build(strategy: Strategy, pool: &ValuePool) -> Self {
        match strategy {
            Strategy::LinearSequence => Container::Linear(pool.clone()),
            Strategy::HashSet => Container::Hashed(to_set(pool)),
            Strategy::HashSetWithConversion => Container::Deferred(pool.clone()),
        }
    }

    /// One container per strategy, all from the same pool.
    pub fn build_all(pool: &ValuePool) -> [Container; 3] {
        Strategy::ALL.map(|strategy| Container::build(strategy, pool))
    }

    pub fn strategy(&self) -> Strategy {
        match self {
            Container::Linear(_) => Strategy::LinearSequence,
            Container::Hashed(_) => Strategy::HashSet,
            Container::Deferred(_) => Strategy::HashSetWithConversion,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Container::Linear(values) | Container::Deferred(values) => values.len(),
            Container::Hashed(set) => set.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Membership on a container whose lookup structure already exists.
    pub fn contains(&self, value: i64) -> Result<bool> {
        match self {
            Container::Linear(values) => Ok(values.has(value)),
            Container::Hashed(set) => Ok(set.has(value)),
            Container::Deferred(_) => Err(HarnessError::Unsupported {
                strategy: self.strategy(),
            }),
        }
    }

    /// Sorted values this container answers `true` for (after conversion).
    pub fn members(&self) -> Vec<i64> {
        let mut values: Vec<i64> = match self {
            Container::Linear(values) | Container::Deferred(values) => values.clone(),
            Container::Hashed(set) => set.iter().copied().collect(),
        };
        values.sort_unstable();
        values
    }

    /// One timed trial: deferred containers convert first, then every probe is looked up.
    #[inline]
    pub fn run_trial(&self, probe_values: &[i64]) {
        match self {
            Container::Linear(values) => run_lookups(probe_values, values.as_slice()),
            Container::Hashed(set) => run_lookups(probe_values, set),
            Container::Deferred(values) => {
                let set = to_set(values);
                run_lookups(probe_values, &set);
                black_box(set);
            }
        }
    }
}
