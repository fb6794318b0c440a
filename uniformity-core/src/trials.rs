use crate::{difference, draw, exact_average, uniform_avg, SessionError, SessionParams};
use mtrandom::Mt19937;
use std::io;

/// Run `num_tries` trials of `seed_num` draws each.
///
/// `on_trial` receives each trial's sum in trial order, as soon as the trial
/// finishes. Returns the total over all trials.
pub fn run_trials<F>(
    rng: &mut Mt19937,
    params: &SessionParams,
    mut on_trial: F,
) -> Result<i64, SessionError>
where
    F: FnMut(i64) -> io::Result<()>,
{
    let mut real_sum: i64 = 0;

    for _trial in 1..=params.num_tries {
        let mut rand_sum: i64 = 0;

        for _seed in 1..=params.seed_num {
            rand_sum += draw(rng, params.min_dist, params.max_dist)? as i64;
        }

        real_sum += rand_sum;
        on_trial(rand_sum)?;
    }

    Ok(real_sum)
}

/// Expected against observed result of one session
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Report {
    /// Per-trial sum a perfectly uniform generator would give
    pub expected_avg: i64,
    /// Observed per-trial sum, truncated toward zero
    pub real_avg: i64,
    /// Positive difference between the two
    pub difference: i64,
    /// Observed per-trial sum without truncation
    pub exact_avg: f64,
}

impl Report {
    /// Build the report from the total of all trial sums.
    pub fn compute(params: &SessionParams, real_sum: i64) -> Result<Report, SessionError> {
        let expected_avg = uniform_avg(params.min_dist, params.max_dist, params.seed_num);
        let real_avg = real_sum
            .checked_div(params.num_tries as i64)
            .ok_or(SessionError::DivisionByZero)?;
        let exact_avg =
            exact_average(real_sum, params.num_tries).ok_or(SessionError::DivisionByZero)?;

        Ok(Report {
            expected_avg,
            real_avg,
            difference: difference(expected_avg, real_avg),
            exact_avg,
        })
    }
}
