use std::collections::VecDeque;
use std::io::{self, BufRead};

/// Splits an input stream into whitespace-separated tokens, one line at a time.
///
/// Tokens left on a line stay queued for the next read, so an operator can
/// type several answers on one line.
pub struct TokenReader<R> {
    inner: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            pending: VecDeque::new(),
        }
    }

    /// Returns the next token, reading more lines as needed.
    ///
    /// `Ok(None)` means the stream ended before another token showed up.
    pub fn next_token(&mut self) -> io::Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }

            let mut line: Vec<u8> = Vec::new();
            if self.inner.read_until(b'\n', &mut line)? == 0 {
                return Ok(None);
            }

            // Invalid UTF-8 still yields tokens; they just never parse.
            let line = String::from_utf8_lossy(&line);
            self.pending
                .extend(line.split_whitespace().map(str::to_owned));
        }
    }

    /// Drops whatever is left of the line the last token came from.
    pub fn discard_line(&mut self) {
        self.pending.clear();
    }
}
