pub const DEFAULT_NAME: &str = "Honda";

#[derive(Debug)]
pub struct Config {
    /// Name given to the car built by the entry point.
    pub name: String,
    /// Drives the car once before its ownership is handed off.
    pub drive: bool,
    /// Number of `-v` flags given on the command line.
    pub verbosity: u8,
    /// Only errors get logged.
    ///
    /// Takes priority over `verbosity`.
    pub quiet: bool,
}

impl Config {
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbosity {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            name: DEFAULT_NAME.to_string(),
            drive: false,
            verbosity: 0,
            quiet: false,
        }
    }
}
