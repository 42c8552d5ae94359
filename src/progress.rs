use std::ffi::OsStr;
use std::io::Write;

use crate::error::{ProgressError, Result};

/// ANSI escape selecting a green foreground.
pub const GREEN: &str = "\x1b[32m";

/// ANSI escape resetting all attributes.
pub const RESET: &str = "\x1b[0m";

/// Number of decimal digits in `nsteps`.
///
/// Only positive totals have a width; anything else is `InvalidTotalSteps`.
pub fn digit_width(nsteps: i64) -> Result<usize> {
    if nsteps <= 0 {
        return Err(ProgressError::InvalidTotalSteps(nsteps));
    }
    Ok(nsteps.ilog10() as usize + 1)
}

/// One step of a build, as reported by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    stepno: i64,
    nsteps: i64,
    width: usize,
}

impl Progress {
    /// Validate `nsteps` and fix the label width. `stepno` is taken as-is.
    pub fn new(stepno: i64, nsteps: i64) -> Result<Self> {
        let width = digit_width(nsteps)?;
        Ok(Self {
            stepno,
            nsteps,
            width,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Share of the build completed, in percent. Not part of the printed line.
    pub fn percent(&self) -> f64 {
        100.0 * self.stepno as f64 / self.nsteps as f64
    }

    /// `[<stepno>/<nsteps>]`, both zero-padded to the width of `nsteps`.
    ///
    /// Padding goes after a minus sign and never truncates a wider `stepno`.
    pub fn label(&self) -> String {
        format!(
            "[{:0w$}/{:0w$}]",
            self.stepno,
            self.nsteps,
            w = self.width
        )
    }

    /// The full output line: colored label, each token preceded by a space, newline.
    pub fn render_line<S: AsRef<OsStr>>(&self, tokens: &[S]) -> Vec<u8> {
        let mut line = format!("{GREEN}{}{RESET}", self.label()).into_bytes();
        for token in tokens {
            line.push(b' ');
            line.extend_from_slice(token.as_ref().as_encoded_bytes());
        }
        line.push(b'\n');
        line
    }

    /// Write the rendered line to `out` in a single write, then flush.
    pub fn write_line<W: Write, S: AsRef<OsStr>>(&self, out: &mut W, tokens: &[S]) -> Result<()> {
        out.write_all(&self.render_line(tokens))?;
        out.flush()?;
        Ok(())
    }
}
