#![cfg(test)]
use caravan_common::models::journey::Journey;
use caravan_core::delay;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::util::{answers, journey, run};

const ROUNDS: usize = 200;

fn random_journey(rng: &mut StdRng) -> Journey {
    let tolls: usize = rng.random_range(1..=8);
    let delays: Vec<u64> = (0..tolls).map(|_| rng.random_range(0..=120)).collect();
    let distances: Vec<u64> = (1..tolls).map(|_| rng.random_range(0..=500)).collect();
    let speed: u64 = rng.random_range(1..=200);
    let cars: u64 = rng.random_range(1..=50);
    journey(&delays, &distances, speed, cars)
}

#[test]
fn total_covers_every_service_delay() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..ROUNDS {
        let j = random_journey(&mut rng);
        let service: u64 = j.service_delays().iter().sum::<u64>() * j.vehicle_count();
        let total = delay::compute_total_delay(&j).unwrap();
        assert!(total.as_secs() >= service, "{j:?} gave {total}");
    }
}

#[test]
fn more_cars_never_shorten_the_trip() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..ROUNDS {
        let j = random_journey(&mut rng);
        let bigger = journey(
            j.service_delays(),
            j.segment_distances(),
            j.speed(),
            j.vehicle_count() + 1,
        );

        let before = delay::compute_total_delay(&j).unwrap();
        let after = delay::compute_total_delay(&bigger).unwrap();
        if j.service_delays().iter().all(|&d| d == 0) {
            assert_eq!(before, after);
        } else {
            assert!(after > before, "{j:?}: {before} -> {after}");
        }
    }
}

#[test]
fn session_matches_direct_computation() {
    let mut rng = StdRng::seed_from_u64(23);
    for _ in 0..ROUNDS {
        let j = random_journey(&mut rng);
        let input = answers(&j).join("\n") + "\n";

        let (result, output) = run(&input);
        let outcome = result.unwrap();
        let expected = delay::compute_total_delay(&j).unwrap();

        assert_eq!(outcome.journey, j);
        assert_eq!(outcome.total, expected);
        assert!(output.ends_with(&format!("TOTAL TIME\n{expected}\n")));
    }
}

#[test]
fn malformed_tokens_do_not_shift_answers() {
    let mut rng = StdRng::seed_from_u64(31);
    for _ in 0..ROUNDS {
        let j = random_journey(&mut rng);
        let mut lines: Vec<String> = Vec::new();
        for answer in answers(&j) {
            if rng.random_bool(0.3) {
                lines.push(format!("oops {answer}"));
            }
            lines.push(answer);
        }
        let input = lines.join("\n") + "\n";

        let (result, _) = run(&input);
        let outcome = result.unwrap();
        assert_eq!(outcome.journey, j);
    }
}
