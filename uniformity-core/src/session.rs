//! The interactive loop.
//!
//! Each pass walks the same states: collect the four inputs, run the trials,
//! print the report, then ask whether to restart. Only an exact `r` restarts;
//! anything else, including end of input, ends the loop.

use crate::{run_trials, Report, SessionError, SessionParams, TokenReader};
use log::{debug, warn};
use mtrandom::Mt19937;
use std::io::{BufRead, Write};

pub const RESTART_PROMPT: &str = "Type 'r' to restart or anything else to quit. ";

const PROMPTS: [&str; 4] = [
    "Minimum distribution: ",
    "Maximum distribution: ",
    "Tries: ",
    "Seeds per try: ",
];

/// Output options for a session loop
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionOptions {
    /// Also print the untruncated real average
    pub exact: bool,
}

/// What happened over the lifetime of a session loop
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// Sessions started, including one cut short by end of input
    pub sessions: u32,
    /// Sessions that printed a full report
    pub reports: u32,
    /// Sessions whose input was rejected
    pub rejected: u32,
}

/// Outcome of the input collection step
enum Collected {
    Params(SessionParams),
    Rejected(SessionError),
    EndOfInput,
}

/// Owns the generator for the lifetime of the program and drives the loop.
pub struct Session {
    rng: Mt19937,
    options: SessionOptions,
}

impl Session {
    pub fn new(rng: Mt19937, options: SessionOptions) -> Self {
        Session { rng, options }
    }

    /// Run sessions until the user declines to restart or input runs out.
    ///
    /// Invalid input is reported on `output` and skips to the restart prompt.
    /// Only I/O failures are returned as errors.
    pub fn run<R, W>(&mut self, input: R, output: &mut W) -> Result<SessionSummary, SessionError>
    where
        R: BufRead,
        W: Write,
    {
        let mut tokens = TokenReader::new(input);
        let mut summary = SessionSummary::default();

        loop {
            summary.sessions += 1;

            match collect_inputs(&mut tokens, output)? {
                Collected::EndOfInput => {
                    debug!("input ended during session {}", summary.sessions);
                    break;
                }
                Collected::Rejected(err) => {
                    tokens.discard_line();
                    writeln!(output)?;
                    self.reject(output, err, &mut summary)?;
                }
                Collected::Params(params) => {
                    writeln!(output)?;
                    debug!("session {}: {:?}", summary.sessions, params);

                    match self.run_one(&params, output) {
                        Ok(report) => {
                            debug!("session {}: {:?}", summary.sessions, report);
                            summary.reports += 1;
                        }
                        Err(err) => self.reject(output, err, &mut summary)?,
                    }
                }
            }

            write!(output, "{}", RESTART_PROMPT)?;
            output.flush()?;

            match tokens.next_byte()? {
                Some(b'r') => writeln!(output)?,
                _ => break,
            }
        }

        debug!("{:?}", summary);
        Ok(summary)
    }

    /// Validate, run the trials, and print the report for one set of inputs.
    fn run_one<W: Write>(
        &mut self,
        params: &SessionParams,
        output: &mut W,
    ) -> Result<Report, SessionError> {
        params.validate()?;

        let real_sum = run_trials(&mut self.rng, params, |rand_sum| {
            writeln!(output, "{}", rand_sum)
        })?;

        let report = Report::compute(params, real_sum)?;

        writeln!(output)?;
        writeln!(output, "Expected average: {}", report.expected_avg)?;
        writeln!(output, "Real average: {}", report.real_avg)?;
        if self.options.exact {
            writeln!(output, "Exact real average: {:.3}", report.exact_avg)?;
        }
        writeln!(output, "Difference: {}", report.difference)?;
        writeln!(output)?;

        Ok(report)
    }

    /// Print a recoverable error, or hand an I/O error back to the caller.
    fn reject<W: Write>(
        &self,
        output: &mut W,
        err: SessionError,
        summary: &mut SessionSummary,
    ) -> Result<(), SessionError> {
        if !err.is_recoverable() {
            return Err(err);
        }

        warn!("rejected input: {}", err);
        summary.rejected += 1;
        writeln!(output, "Error: {}", err)?;
        writeln!(output)?;
        Ok(())
    }
}

fn collect_inputs<R, W>(
    tokens: &mut TokenReader<R>,
    output: &mut W,
) -> Result<Collected, SessionError>
where
    R: BufRead,
    W: Write,
{
    let mut values = [0i32; 4];

    for (value, prompt) in values.iter_mut().zip(PROMPTS) {
        write!(output, "{}", prompt)?;
        output.flush()?;

        match tokens.next_i32() {
            Ok(Some(v)) => *value = v,
            Ok(None) => return Ok(Collected::EndOfInput),
            Err(err) if err.is_recoverable() => return Ok(Collected::Rejected(err)),
            Err(err) => return Err(err),
        }
    }

    let [min_dist, max_dist, num_tries, seed_num] = values;
    Ok(Collected::Params(SessionParams::new(
        min_dist, max_dist, num_tries, seed_num,
    )))
}
