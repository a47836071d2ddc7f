//! Plain-text report of a finished calculation.
//!
//! Echoes what the operator typed, then the total. Columns are separated
//! with tabs so the values line up on a standard 8-column terminal.

use std::fmt;
use std::io::{self, Write};

use caravan_common::models::elapsed::ElapsedTime;
use caravan_common::models::journey::Journey;

pub struct Report<'a> {
    journey: &'a Journey,
    total: ElapsedTime,
}

impl<'a> Report<'a> {
    pub fn new(journey: &'a Journey, total: ElapsedTime) -> Self {
        Self { journey, total }
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let journey = self.journey;

        writeln!(f)?;
        writeln!(f, "ENTERED DATA")?;
        writeln!(f, "Number of tolls:\t{}", journey.checkpoint_count())?;
        writeln!(f, "Car travel speed:\t{} kph", journey.speed())?;
        writeln!(f, "Caravan size:\t\t{} cars", journey.vehicle_count())?;

        for (idx, delay) in journey.service_delays().iter().enumerate() {
            writeln!(f, "Toll {} delay:\t\t{} seconds", idx + 1, delay)?;
        }
        for (idx, distance) in journey.segment_distances().iter().enumerate() {
            writeln!(f, "Toll {} to Toll {} distance:\t{} km", idx + 1, idx + 2, distance)?;
        }

        writeln!(f)?;
        writeln!(f, "TOTAL TIME")?;
        writeln!(f, "{}", self.total)
    }
}

pub fn format_report(journey: &Journey, total: ElapsedTime) -> String {
    Report::new(journey, total).to_string()
}

pub fn write_report<W: Write>(out: &mut W, journey: &Journey, total: ElapsedTime) -> io::Result<()> {
    write!(out, "{}", Report::new(journey, total))?;
    out.flush()
}
