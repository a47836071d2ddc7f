//! Interactive collection of a [`Journey`].
//!
//! Each value is asked for with its own prompt and read as one
//! whitespace-separated token. A token that is not an integer, or that is
//! out of range for its field, throws away the rest of its line, prints why
//! it was rejected and asks again. There is no retry limit; only the end of
//! the input stream stops the loop.

mod tokens;

use std::fmt;
use std::io::{BufRead, Write};

use caravan_common::models::journey::Journey;
use thiserror::Error;
use tracing::debug;

use crate::error::SessionError;
pub use tokens::TokenReader;

const DELAY_SECTION: &str = "Enter each toll's processing delay in seconds per car";
const DISTANCE_SECTION: &str = "Enter the distance between tolls in km";

/// Why a token was turned down. The message is shown to the operator as is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputRejection {
    #[error("Must be an integer, try again")]
    NotAnInteger,
    #[error("Must not be negative, try again")]
    Negative,
    #[error("Must be at least 1, try again")]
    BelowOne,
    #[error("Speed must be positive, try again")]
    NonPositiveSpeed,
}

/// A value the collector asks for. Toll numbers are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    TollCount,
    ServiceDelay(u64),
    Distance(u64),
    Speed,
    CarCount,
}

impl Field {
    pub fn prompt(&self) -> String {
        match self {
            Field::TollCount => {
                "Enter the number of toll gates (include initial and final tolls): ".to_string()
            }
            Field::ServiceDelay(toll) => format!("Toll {toll}: "),
            Field::Distance(toll) => format!("Toll {} to Toll {}: ", toll, toll + 1),
            Field::Speed => "Enter the speed limit in kph: ".to_string(),
            Field::CarCount => "Enter the number of cars in the caravan: ".to_string(),
        }
    }

    /// Parses and range-checks one token for this field.
    pub fn accept(&self, token: &str) -> Result<u64, InputRejection> {
        let value: i64 = parse_integer(token)?;
        let (minimum, rejection) = match self {
            Field::ServiceDelay(_) | Field::Distance(_) => (0, InputRejection::Negative),
            Field::TollCount | Field::CarCount => (1, InputRejection::BelowOne),
            Field::Speed => (1, InputRejection::NonPositiveSpeed),
        };

        if value < minimum {
            return Err(rejection);
        }
        u64::try_from(value).map_err(|_| rejection)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::TollCount => write!(f, "the number of toll gates"),
            Field::ServiceDelay(toll) => write!(f, "the delay of toll {toll}"),
            Field::Distance(toll) => write!(f, "the distance from toll {} to {}", toll, toll + 1),
            Field::Speed => write!(f, "the speed limit"),
            Field::CarCount => write!(f, "the number of cars"),
        }
    }
}

fn parse_integer(token: &str) -> Result<i64, InputRejection> {
    token.parse::<i64>().map_err(|_| InputRejection::NotAnInteger)
}

/// Asks an operator for journey parameters over any reader/writer pair.
pub struct Collector<R, W> {
    tokens: TokenReader<R>,
    out: W,
}

impl<R: BufRead, W: Write> Collector<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            tokens: TokenReader::new(input),
            out: output,
        }
    }

    /// Asks for any integer until one is typed.
    pub fn prompt_for_integer(&mut self, prompt: &str) -> Result<i64, SessionError> {
        self.prompt_until(prompt, "an integer", parse_integer)
    }

    /// Asks for `field` until an in-range value is typed.
    pub fn prompt_field(&mut self, field: Field) -> Result<u64, SessionError> {
        let value = self.prompt_until(&field.prompt(), field, |token| field.accept(token))?;
        debug!(%field, value, "collected");
        Ok(value)
    }

    /// Runs the fixed prompt sequence and builds the journey from it.
    pub fn collect_journey(&mut self) -> Result<Journey, SessionError> {
        let tolls: u64 = self.prompt_field(Field::TollCount)?;

        writeln!(self.out, "{DELAY_SECTION}")?;
        let mut delays: Vec<u64> = Vec::new();
        for toll in 1..=tolls {
            delays.push(self.prompt_field(Field::ServiceDelay(toll))?);
        }

        let mut distances: Vec<u64> = Vec::new();
        if tolls > 1 {
            writeln!(self.out, "{DISTANCE_SECTION}")?;
            for toll in 1..tolls {
                distances.push(self.prompt_field(Field::Distance(toll))?);
            }
        }

        let speed: u64 = self.prompt_field(Field::Speed)?;
        let cars: u64 = self.prompt_field(Field::CarCount)?;

        Ok(Journey::new(delays, distances, speed, cars)?)
    }

    /// Hands back the output so a caller can keep writing to it.
    pub fn into_output(self) -> W {
        self.out
    }

    fn prompt_until<T, D, F>(&mut self, prompt: &str, what: D, accept: F) -> Result<T, SessionError>
    where
        D: fmt::Display,
        F: Fn(&str) -> Result<T, InputRejection>,
    {
        loop {
            write!(self.out, "{prompt}")?;
            self.out.flush()?;

            let Some(token) = self.tokens.next_token()? else {
                return Err(SessionError::EndOfInput {
                    field: what.to_string(),
                });
            };

            match accept(&token) {
                Ok(value) => return Ok(value),
                Err(rejection) => {
                    debug!(%token, ?rejection, "rejected input");
                    self.tokens.discard_line();
                    writeln!(self.out, "{rejection}")?;
                }
            }
        }
    }
}
