//! Timing harness.
//!
//! Single lookups are far below timer resolution, so every measurement times
//! a whole block of trials with one pair of clock reads and divides by the
//! number of lookups performed. The result is a per-lookup cost that can be
//! compared across strategies and container sizes.

use rand::Rng;
use tracing::{debug, info, warn};

use crate::clock::Clock;
use crate::config::{SweepConfig, UndersizedPolicy};
use crate::container::Container;
use crate::error::{HarnessError, Result};
use crate::generator::{create_lookup_values, create_test_values};
use crate::table::{Measurement, ResultTable};

/// Average seconds per lookup over `num_trials` back-to-back trials.
pub fn measure_strategy<C: Clock>(
    clock: &C,
    probe_values: &[i64],
    container: &Container,
    num_trials: u32,
) -> Result<f64> {
    if num_trials == 0 {
        return Err(HarnessError::InvalidArgument(
            "num_trials must be > 0".into(),
        ));
    }
    if probe_values.is_empty() {
        return Err(HarnessError::InvalidArgument(
            "at least one probe value is required".into(),
        ));
    }

    let mark = clock.start();
    for _ in 0..num_trials {
        container.run_trial(probe_values);
    }
    let elapsed = clock.elapsed(&mark);

    let lookups = num_trials as f64 * probe_values.len() as f64;
    Ok(elapsed.as_secs_f64() / lookups)
}

/// Measure every strategy at one (size, num_lookups) point.
///
/// Returns `None` when the point is undersized and the policy skips it.
pub fn measure_point<R, C>(
    rng: &mut R,
    clock: &C,
    size: i64,
    num_lookups: i64,
    num_trials: u32,
    policy: UndersizedPolicy,
) -> Result<Option<Vec<Measurement>>>
where
    R: Rng + ?Sized,
    C: Clock,
{
    if size < num_lookups {
        match policy {
            UndersizedPolicy::Skip => {
                warn!(size, num_lookups, "container smaller than lookup batch, skipping");
                return Ok(None);
            }
            UndersizedPolicy::Fail => {
                return Err(HarnessError::InvalidArgument(format!(
                    "container size {} is smaller than lookup batch {}",
                    size, num_lookups
                )));
            }
        }
    }

    let pool = create_test_values(rng, size)?;
    let probes = create_lookup_values(rng, size, num_lookups)?;
    let containers = Container::build_all(&pool);

    let mut rows = Vec::with_capacity(containers.len());
    for container in &containers {
        let duration = measure_strategy(clock, &probes, container, num_trials)?;
        debug!(
            size,
            num_lookups,
            strategy = %container.strategy(),
            ns_per_lookup = duration * 1e9,
            "measured"
        );
        rows.push(Measurement {
            container_size: size,
            num_lookups,
            strategy: container.strategy(),
            duration,
        });
    }

    Ok(Some(rows))
}

/// Walk every lookup batch (outer) and container size (inner) in `config`.
pub fn sweep<R, C>(rng: &mut R, clock: &C, config: &SweepConfig) -> Result<ResultTable>
where
    R: Rng + ?Sized,
    C: Clock,
{
    config.validate()?;

    let sizes = config.sizes.values();
    let lookups = config.lookups.values();
    info!(
        sizes = sizes.len(),
        lookup_batches = lookups.len(),
        num_trials = config.num_trials,
        "starting sweep"
    );

    let mut table = ResultTable::new();
    let mut skipped = 0usize;
    for &num_lookups in &lookups {
        for &size in &sizes {
            match measure_point(
                rng,
                clock,
                size,
                num_lookups,
                config.num_trials,
                config.undersized,
            )? {
                Some(rows) => table.extend(rows),
                None => skipped += 1,
            }
        }
    }

    info!(rows = table.len(), skipped, "sweep complete");
    Ok(table)
}
