//! Total delay of a caravan through its final toll gate.
//!
//! Every toll behaves like a store-and-forward link: it has to serve the
//! whole caravan (`delay * cars`) before the last car can start driving to
//! the next toll. Driving a segment (`distance / speed`) costs the same no
//! matter how many cars there are, since the caravan moves as one.

use caravan_common::models::elapsed::ElapsedTime;
use caravan_common::models::journey::Journey;
use thiserror::Error;
use tracing::trace;

pub const SECS_IN_HOUR: u64 = 3600;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DelayError {
    #[error("total delay does not fit in 64 bits")]
    Overflow,
}

/// One toll plus the road that leaves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegDelay {
    /// 1-based number of the toll the leg starts at.
    pub toll: usize,
    /// Seconds the toll needs to serve every car.
    pub service_secs: u64,
    /// Seconds one car needs to reach the next toll.
    pub propagation_secs: u64,
}

impl LegDelay {
    pub fn total_secs(&self) -> Result<u64, DelayError> {
        self.service_secs
            .checked_add(self.propagation_secs)
            .ok_or(DelayError::Overflow)
    }
}

/// Seconds to drive `distance_km` at `speed_kph`, truncated toward zero.
///
/// `speed_kph` must be non-zero. The product `distance * 3600` is taken in
/// 128 bits, so only a quotient that does not fit in 64 bits overflows.
pub fn propagation_secs(distance_km: u64, speed_kph: u64) -> Result<u64, DelayError> {
    let secs: u128 =
        u128::from(distance_km) * u128::from(SECS_IN_HOUR) / u128::from(speed_kph);
    u64::try_from(secs).map_err(|_| DelayError::Overflow)
}

/// Seconds a toll with a per-car `delay` holds a caravan of `cars`.
pub fn service_secs(delay: u64, cars: u64) -> Result<u64, DelayError> {
    delay.checked_mul(cars).ok_or(DelayError::Overflow)
}

/// Splits the journey into one leg per segment. The final toll has no leg.
pub fn leg_delays(journey: &Journey) -> Result<Vec<LegDelay>, DelayError> {
    journey
        .service_delays()
        .iter()
        .zip(journey.segment_distances())
        .enumerate()
        .map(|(idx, (&delay, &distance))| -> Result<LegDelay, DelayError> {
            Ok(LegDelay {
                toll: idx + 1,
                service_secs: service_secs(delay, journey.vehicle_count())?,
                propagation_secs: propagation_secs(distance, journey.speed())?,
            })
        })
        .collect()
}

/// Total time for the whole caravan to clear the final toll.
///
/// The propagation term of each leg is truncated before it joins the sum,
/// so fractional seconds never carry over from one segment to the next.
pub fn compute_total_delay(journey: &Journey) -> Result<ElapsedTime, DelayError> {
    let mut total: u64 = 0;

    for leg in leg_delays(journey)? {
        trace!(
            toll = leg.toll,
            service = leg.service_secs,
            propagation = leg.propagation_secs,
            "leg delay"
        );
        total = total
            .checked_add(leg.total_secs()?)
            .ok_or(DelayError::Overflow)?;
    }

    let last = service_secs(journey.final_service_delay(), journey.vehicle_count())?;
    total = total.checked_add(last).ok_or(DelayError::Overflow)?;

    Ok(ElapsedTime::from_secs(total))
}
