use clap::Parser;
use log::info;
use mtrandom::Mt19937;
use std::io;
use std::time::{SystemTime, UNIX_EPOCH};
use uniformity_core::{Session, SessionOptions};

#[derive(Parser)]
#[command(name = "uniformity")]
#[command(
    about = "Compare summed Mersenne Twister draws against a perfectly uniform distribution",
    long_about = None
)]
struct Args {
    /// Random seed for the generator (defaults to current time in seconds)
    #[arg(short = 's', long = "seed")]
    seed: Option<u32>,

    /// Also print the real average without integer truncation
    #[arg(short = 'e', long = "exact")]
    exact: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    // Use provided seed or default to current time (second resolution)
    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs() as u32)
            .unwrap_or(mtrandom::DEFAULT_SEED)
    });
    info!("seeding generator with {}", seed);

    let options = SessionOptions { exact: args.exact };
    let mut session = Session::new(Mt19937::new(seed), options);

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    match session.run(stdin.lock(), &mut stdout) {
        Ok(summary) => info!(
            "{} session(s), {} report(s), {} rejected",
            summary.sessions, summary.reports, summary.rejected
        ),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
