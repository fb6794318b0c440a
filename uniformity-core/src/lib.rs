mod error;
mod input;
mod params;
mod session;
mod stats;
mod trials;

pub use error::SessionError;
pub use input::TokenReader;
pub use params::SessionParams;
pub use session::{Session, SessionOptions, SessionSummary, RESTART_PROMPT};
pub use stats::{difference, draw, exact_average, uniform_avg};
pub use trials::{run_trials, Report};
