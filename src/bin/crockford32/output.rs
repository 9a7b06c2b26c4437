use std::fmt::Display;

/// User-facing output, gated by `--quiet` / `--verbose`.
pub struct Output {
    /// Suppress informational lines.
    quiet: bool,
    /// Emit `DIAG:` lines on stderr.
    verbose: bool,
}

impl Output {
    /// Builds the output policy from the global flags.
    pub const fn new(quiet: bool, verbose: bool) -> Self {
        Self { quiet, verbose }
    }

    /// Primary result line, always printed.
    pub fn result(&self, msg: impl Display) {
        println!("{msg}");
    }

    /// Informational line on stdout, hidden by `--quiet`.
    pub fn info_user(&self, msg: impl Display) {
        if !self.quiet {
            println!("{msg}");
        }
    }

    /// Failure line on stderr, always printed.
    pub fn error_user(msg: impl Display) {
        eprintln!("ERROR: {msg}");
    }

    /// Diagnostic line on stderr, only with `--verbose`.
    pub fn info_diag(&self, msg: impl Display) {
        if self.verbose && !self.quiet {
            eprintln!("DIAG: {msg}");
        }
    }
}
