#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Config {
    /// Suppresses the start-up banner.
    pub no_banner: bool,
    /// Disables ANSI colors on every terminal write.
    pub no_color: bool,
    /// Quiet level. Anything above zero hides the banner and section headers.
    ///
    /// Prompts and the report are never hidden.
    pub quiet: u8,
}

impl Config {
    pub fn show_banner(&self) -> bool {
        !self.no_banner && self.quiet == 0
    }

    pub fn show_headers(&self) -> bool {
        self.quiet == 0
    }
}
