//! # Journey Model
//!
//! A caravan of identical cars crossing a linear chain of toll gates.
//!
//! Every toll serves the cars one after the other, so a toll holds the
//! caravan for `delay * cars` seconds. The road between two tolls is a
//! segment crossed at one uniform speed. A journey with `n` tolls always
//! has `n - 1` segments.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JourneyError {
    #[error("a journey needs at least one toll gate")]
    NoTolls,
    #[error("{tolls} toll gates need {expected} distances, got {actual}")]
    SegmentMismatch {
        tolls: usize,
        expected: usize,
        actual: usize,
    },
    #[error("speed must be positive")]
    ZeroSpeed,
    #[error("a caravan needs at least one car")]
    NoCars,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Journey {
    service_delays: Vec<u64>,
    segment_distances: Vec<u64>,
    speed: u64,
    vehicle_count: u64,
}

impl Journey {
    /// Builds a journey, checking that the distances line up with the tolls
    /// and that speed and caravan size are usable.
    ///
    /// * `service_delays` - seconds each toll spends on one car, in route order.
    /// * `segment_distances` - km between consecutive tolls, one fewer than tolls.
    /// * `speed` - km/h, shared by every car on every segment.
    /// * `vehicle_count` - cars in the caravan.
    pub fn new(
        service_delays: Vec<u64>,
        segment_distances: Vec<u64>,
        speed: u64,
        vehicle_count: u64,
    ) -> Result<Self, JourneyError> {
        if service_delays.is_empty() {
            return Err(JourneyError::NoTolls);
        }

        let expected: usize = service_delays.len() - 1;
        if segment_distances.len() != expected {
            return Err(JourneyError::SegmentMismatch {
                tolls: service_delays.len(),
                expected,
                actual: segment_distances.len(),
            });
        }

        if speed == 0 {
            return Err(JourneyError::ZeroSpeed);
        }

        if vehicle_count == 0 {
            return Err(JourneyError::NoCars);
        }

        Ok(Self {
            service_delays,
            segment_distances,
            speed,
            vehicle_count,
        })
    }

    pub fn checkpoint_count(&self) -> usize {
        self.service_delays.len()
    }

    pub fn segment_count(&self) -> usize {
        self.segment_distances.len()
    }

    pub fn service_delays(&self) -> &[u64] {
        &self.service_delays
    }

    pub fn segment_distances(&self) -> &[u64] {
        &self.segment_distances
    }

    pub fn speed(&self) -> u64 {
        self.speed
    }

    pub fn vehicle_count(&self) -> u64 {
        self.vehicle_count
    }

    /// Service delay of the last toll on the route.
    pub fn final_service_delay(&self) -> u64 {
        // Non-empty by construction.
        self.service_delays[self.service_delays.len() - 1]
    }
}
