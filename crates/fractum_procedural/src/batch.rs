//! # Batch Generation
//!
//! Generator runs share nothing, so a batch simply gives every job its own
//! scoped thread. Finished outcomes flow back over a channel and are put
//! back into submission order before returning.
//!
//! A failing job does not affect the others: its outcome carries the error.

use std::time::{Duration, Instant};

use crossbeam_channel::unbounded;

use crate::config::{Geometry, NamedJob};
use crate::error::FractalResult;

/// Result of one job in a batch.
#[derive(Debug)]
pub struct BatchOutcome {
    /// Name of the job.
    pub name: String,
    /// The geometry, or why there is none.
    pub result: FractalResult<Geometry>,
    /// Wall-clock time spent generating.
    pub elapsed: Duration,
}

/// Runs every job concurrently and returns outcomes in job order.
#[must_use]
pub fn run_batch(jobs: &[NamedJob]) -> Vec<BatchOutcome> {
    let (sender, receiver) = unbounded();

    std::thread::scope(|scope| {
        for (index, named) in jobs.iter().enumerate() {
            let sender = sender.clone();
            scope.spawn(move || {
                let start = Instant::now();
                let result = named.job.generate();
                let elapsed = start.elapsed();

                match &result {
                    Ok(geometry) => tracing::info!(
                        "job '{}' ({}): {} {} in {:?}",
                        named.name,
                        named.job.kind(),
                        geometry.len(),
                        geometry.kind(),
                        elapsed
                    ),
                    Err(err) => tracing::warn!("job '{}' failed: {}", named.name, err),
                }

                let outcome = BatchOutcome {
                    name: named.name.clone(),
                    result,
                    elapsed,
                };
                if let Err(err) = sender.send((index, outcome)) {
                    tracing::error!("job '{}' outcome lost: {}", named.name, err);
                }
            });
        }
    });
    drop(sender);

    let mut outcomes: Vec<(usize, BatchOutcome)> = receiver.iter().collect();
    outcomes.sort_by_key(|(index, _)| *index);
    outcomes.into_iter().map(|(_, outcome)| outcome).collect()
}
