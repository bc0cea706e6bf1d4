//! Randomized workloads for lookup benchmarks.
//!
//! Every generator takes the random source explicitly so a run can be
//! replayed from a seed. Pools are permutations of `[0, size)`; lookup sets
//! are unique draws from the same domain, independent of the pool's order.

use rand::rngs::StdRng;
use rand::seq::index;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::error::{HarnessError, Result};

/// Container contents: a permutation of `[0, size)`.
pub type ValuePool = Vec<i64>;

/// Probe values: `num_lookups` distinct values from `[0, size)`.
pub type LookupSet = Vec<i64>;

/// Build the random source for a run. `None` draws a seed from the OS.
pub fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

fn checked_size(size: i64) -> Result<usize> {
    usize::try_from(size)
        .map_err(|_| HarnessError::InvalidArgument(format!("size must be >= 0, got {}", size)))
}

fn checked_lookups(size: i64, num_lookups: i64) -> Result<(usize, usize)> {
    let size = checked_size(size)?;
    let amount = usize::try_from(num_lookups).map_err(|_| {
        HarnessError::InvalidArgument(format!("num_lookups must be >= 0, got {}", num_lookups))
    })?;
    if amount > size {
        return Err(HarnessError::InvalidArgument(format!(
            "cannot draw {} unique lookups from a domain of {} values",
            amount, size
        )));
    }
    Ok((size, amount))
}

/// Integers `0..size` in random order.
pub fn create_test_values<R: Rng + ?Sized>(rng: &mut R, size: i64) -> Result<ValuePool> {
    let size = checked_size(size)?;
    let mut values: ValuePool = (0..size as i64).collect();
    values.shuffle(rng);
    Ok(values)
}

/// `num_lookups` non-repeating integers from `0..size`, in random order.
pub fn create_lookup_values<R: Rng + ?Sized>(
    rng: &mut R,
    size: i64,
    num_lookups: i64,
) -> Result<LookupSet> {
    let (size, amount) = checked_lookups(size, num_lookups)?;
    Ok(index::sample(rng, size, amount)
        .into_iter()
        .map(|i| i as i64)
        .collect())
}

// ============================================================================
// Workload layout
// ============================================================================

/// One pool slot, flagged when its value is also probed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LayoutPoint {
    #[serde(rename = "Index")]
    pub index: usize,
    #[serde(rename = "Value")]
    pub value: i64,
    #[serde(rename = "Lookup")]
    pub is_lookup: bool,
}

/// Draw a pool and a lookup set and describe where the probes land in the pool.
pub fn value_layout<R: Rng + ?Sized>(
    rng: &mut R,
    size: i64,
    num_lookups: i64,
) -> Result<Vec<LayoutPoint>> {
    checked_lookups(size, num_lookups)?;
    let values = create_test_values(rng, size)?;
    let probes: hashbrown::HashSet<i64> = create_lookup_values(rng, size, num_lookups)?
        .into_iter()
        .collect();

    Ok(values
        .into_iter()
        .enumerate()
        .map(|(index, value)| LayoutPoint {
            index,
            value,
            is_lookup: probes.contains(&value),
        })
        .collect())
}
