//! One full run: collect, compute, report.

use std::io::{BufRead, Write};

use caravan_common::models::elapsed::ElapsedTime;
use caravan_common::models::journey::Journey;
use tracing::info;

use crate::collector::Collector;
use crate::delay;
use crate::error::SessionError;
use crate::report;

/// What a finished session measured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub journey: Journey,
    pub total: ElapsedTime,
}

/// Prompts on `output` for a journey read from `input`, then writes the
/// report to the same `output`.
pub fn run_session<R, W>(input: R, mut output: W) -> Result<Outcome, SessionError>
where
    R: BufRead,
    W: Write,
{
    let journey: Journey = Collector::new(input, &mut output).collect_journey()?;

    let total: ElapsedTime = delay::compute_total_delay(&journey)?;
    info!(
        tolls = journey.checkpoint_count(),
        cars = journey.vehicle_count(),
        total_secs = total.as_secs(),
        "caravan delay computed"
    );

    report::write_report(&mut output, &journey, total)?;

    Ok(Outcome { journey, total })
}
