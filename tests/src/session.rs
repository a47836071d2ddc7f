#![cfg(test)]
use caravan_core::SessionError;

use crate::util::run;

fn total_line(output: &str) -> &str {
    output
        .lines()
        .last()
        .expect("no output")
}

#[test]
fn two_tolls_one_hour_apart() {
    let (result, output) = run("2\n5\n5\n60\n60\n3\n");
    let outcome = result.expect("session failed");

    assert_eq!(outcome.total.as_secs(), 3630);
    assert_eq!(total_line(&output), "60 minutes and 30 seconds");
    assert!(output.contains("Toll 1 to Toll 2 distance:\t60 km\n"));
    assert!(output.contains("Caravan size:\t\t3 cars\n"));
}

#[test]
fn single_toll_ignores_speed() {
    let (result, output) = run("1\n10\n999\n2\n");
    let outcome = result.expect("session failed");

    assert_eq!(outcome.total.as_secs(), 20);
    assert_eq!(outcome.journey.segment_count(), 0);
    assert_eq!(total_line(&output), "20 seconds");
}

#[test]
fn whole_minutes_have_no_seconds_clause() {
    // 30 * 2 + 3600 / 60 + 0 * 2 = 120
    let (result, output) = run("2\n30\n0\n1\n60\n2\n");
    assert_eq!(result.expect("session failed").total.as_secs(), 120);
    assert_eq!(total_line(&output), "2 minutes");
}

#[test]
fn answers_may_share_a_line() {
    let (result, _) = run("2\n5 5\n60 60 3\n");
    assert_eq!(result.expect("session failed").total.as_secs(), 3630);
}

#[test]
fn malformed_answer_is_asked_again() {
    let (result, output) = run("two\n2\n5\nfive 5 5\n5\n60\n60\n3\n");
    assert_eq!(result.expect("session failed").total.as_secs(), 3630);

    let retries = output.matches("Must be an integer, try again\n").count();
    assert_eq!(retries, 2);
    assert!(output.contains("Toll 2: Must be an integer, try again\nToll 2: "));
}

#[test]
fn out_of_range_answers_are_asked_again() {
    let input = "0\n-3\n2\n-1\n5\n5\n-60\n60\n0\n-8\n60\n0\n3\n";
    let (result, output) = run(input);
    assert_eq!(result.expect("session failed").total.as_secs(), 3630);

    assert_eq!(output.matches("Must be at least 1, try again").count(), 3);
    assert_eq!(output.matches("Must not be negative, try again").count(), 2);
    assert_eq!(output.matches("Speed must be positive, try again").count(), 2);
}

#[test]
fn end_of_input_is_fatal() {
    let (result, output) = run("2\n5\n5\n60\n");
    match result {
        Err(SessionError::EndOfInput { field }) => assert_eq!(field, "the speed limit"),
        other => panic!("expected end of input, got {other:?}"),
    }
    assert!(!output.contains("TOTAL TIME"));
}

#[test]
fn empty_input_fails_on_first_prompt() {
    let (result, output) = run("");
    assert!(matches!(result, Err(SessionError::EndOfInput { .. })));
    assert_eq!(
        output,
        "Enter the number of toll gates (include initial and final tolls): "
    );
}

#[test]
fn garbage_until_end_of_input_never_loops_forever() {
    let (result, output) = run("a\nb\nc\n");
    assert!(matches!(result, Err(SessionError::EndOfInput { .. })));
    assert_eq!(output.matches("Must be an integer, try again").count(), 3);
}

#[test]
fn overflowing_journey_is_an_error() {
    let (result, _) = run("1\n9223372036854775807\n1\n3\n");
    assert!(matches!(result, Err(SessionError::Delay(_))));
}

#[test]
fn long_segment_completes_without_overflow() {
    let (result, output) = run("2\n0\n0\n6000000000000000\n3600\n1\n");
    assert_eq!(result.expect("session failed").total.as_secs(), 6_000_000_000_000_000);
    assert!(output.contains("TOTAL TIME\n"));
}
