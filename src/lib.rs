//! Measure how membership lookups scale with container size.
//!
//! A sweep draws a random permutation of `[0, size)` for every container
//! size, lays it out as a `Vec`, as a pre-built `hashbrown::HashSet`, and as
//! a `Vec` converted to a set inside every timed trial, then times a batch of
//! unique random probes against each. Results come back as a
//! [`ResultTable`] of seconds-per-lookup rows ready for plotting.
//!
//! ```no_run
//! use lookup_scaling::{seeded_rng, sweep, MonotonicClock, SweepConfig};
//!
//! let config = SweepConfig::from_sizes(&[100, 1_000, 10_000], 10, 5).with_seed(42);
//! let mut rng = seeded_rng(config.seed);
//! let table = sweep(&mut rng, &MonotonicClock, &config)?;
//! print!("{}", table.summary());
//! # Ok::<(), lookup_scaling::HarnessError>(())
//! ```

pub mod clock;
pub mod config;
pub mod container;
pub mod error;
pub mod generator;
pub mod harness;
pub mod logging;
pub mod table;

pub use clock::{Clock, FixedClock, MonotonicClock};
pub use config::{ParamSpec, RangeSpec, SweepConfig, UndersizedPolicy};
pub use container::{run_lookups, Container, Membership, Strategy};
pub use error::{HarnessError, Result};
pub use generator::{
    create_lookup_values, create_test_values, seeded_rng, value_layout, LayoutPoint, LookupSet,
    ValuePool,
};
pub use harness::{measure_point, measure_strategy, sweep};
pub use table::{to_table, Measurement, ResultTable};
