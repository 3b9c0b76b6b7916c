use std::{io, ops::Range};

/// Utility enum to package errors that can occur while parsing / evaluating a line.
#[derive(Debug)]
pub enum Error {
    /// An error that occurred while tokenizing or parsing.
    Parse(symcalc_error::Error),

    /// A fault raised while evaluating, differentiating or simplifying.
    Compute(symcalc_compute::Error),
}

/// Returns the span covering the given input, without trailing whitespace.
fn whole_line(input: &str) -> Range<usize> {
    0..input.trim_end().len()
}

impl Error {
    /// Report this error to stderr.
    pub fn report_to_stderr(&self, src_id: &str, input: &str) -> io::Result<()> {
        self.write_report(src_id, input, io::stderr())
    }

    /// Writes the report of this error to the given writer.
    ///
    /// Faults raised by the compute crate have no span of their own, so they point at the whole
    /// input.
    pub fn write_report<W: io::Write>(&self, src_id: &str, input: &str, writer: W) -> io::Result<()> {
        match self {
            Self::Parse(err) => err.write_report(src_id, input, writer),
            Self::Compute(err) => err.clone()
                .into_reported(whole_line(input))
                .write_report(src_id, input, writer),
        }
    }
}

impl From<symcalc_error::Error> for Error {
    fn from(err: symcalc_error::Error) -> Self {
        Self::Parse(err)
    }
}

impl From<symcalc_compute::Error> for Error {
    fn from(err: symcalc_compute::Error) -> Self {
        Self::Compute(err)
    }
}
