#![cfg(test)]
use std::io::Cursor;

use caravan_common::models::journey::Journey;
use caravan_core::{Outcome, SessionError, run_session};

/// The operator's answers for `journey`, one per line, in prompt order.
pub fn answers(journey: &Journey) -> Vec<String> {
    let mut lines: Vec<String> = vec![journey.checkpoint_count().to_string()];
    lines.extend(journey.service_delays().iter().map(u64::to_string));
    lines.extend(journey.segment_distances().iter().map(u64::to_string));
    lines.push(journey.speed().to_string());
    lines.push(journey.vehicle_count().to_string());
    lines
}

/// Runs one session and returns its result together with everything written.
pub fn run(input: &str) -> (Result<Outcome, SessionError>, String) {
    let mut out: Vec<u8> = Vec::new();
    let result = run_session(Cursor::new(input.to_string()), &mut out);
    (result, String::from_utf8(out).expect("session wrote invalid UTF-8"))
}

pub fn journey(delays: &[u64], distances: &[u64], speed: u64, cars: u64) -> Journey {
    Journey::new(delays.to_vec(), distances.to_vec(), speed, cars).expect("invalid test journey")
}
