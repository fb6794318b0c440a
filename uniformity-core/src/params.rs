use crate::SessionError;

/// The four values a session asks for, in prompt order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionParams {
    /// Lowest value a draw can produce
    pub min_dist: i32,
    /// Highest value a draw can produce
    pub max_dist: i32,
    /// Number of trials to sum and average over
    pub num_tries: i32,
    /// Number of draws summed within a single trial
    pub seed_num: i32,
}

impl SessionParams {
    pub fn new(min_dist: i32, max_dist: i32, num_tries: i32, seed_num: i32) -> Self {
        SessionParams {
            min_dist,
            max_dist,
            num_tries,
            seed_num,
        }
    }

    /// Reject parameters that have no meaningful result.
    ///
    /// An inverted range has nothing to draw from and zero tries would divide
    /// by zero. Negative counts are refused alongside them. Zero seeds per try
    /// is accepted: every trial sums to zero.
    pub fn validate(&self) -> Result<(), SessionError> {
        if self.min_dist > self.max_dist {
            return Err(SessionError::InvertedRange {
                min: self.min_dist,
                max: self.max_dist,
            });
        }
        if self.num_tries <= 0 {
            return Err(SessionError::NonPositiveTries(self.num_tries));
        }
        if self.seed_num < 0 {
            return Err(SessionError::NegativeSeeds(self.seed_num));
        }
        Ok(())
    }
}
