/// End-to-end tests of the interactive loop
///
/// Each test feeds a scripted stdin through `Session::run` and checks the
/// exact transcript written to stdout.
use mtrandom::Mt19937;
use std::io::{self, Cursor, Write};
use uniformity_core::{Session, SessionError, SessionOptions, SessionSummary, RESTART_PROMPT};

const PROMPTS: &str = "Minimum distribution: Maximum distribution: Tries: Seeds per try: ";

/// Run the loop over `input` with a fixed seed and return the transcript
fn run_with(seed: u32, options: SessionOptions, input: &str) -> (String, SessionSummary) {
    let mut session = Session::new(Mt19937::new(seed), options);
    let mut output = Vec::new();

    let summary = session
        .run(Cursor::new(input), &mut output)
        .unwrap_or_else(|e| panic!("Session failed: {}", e));

    (String::from_utf8(output).unwrap(), summary)
}

fn run(input: &str) -> (String, SessionSummary) {
    run_with(1, SessionOptions::default(), input)
}

#[test]
fn test_single_value_range_transcript() {
    let (transcript, summary) = run("1\n1\n3\n5\nq\n");

    let expected = format!(
        "{}\n5\n5\n5\n\nExpected average: 5\nReal average: 5\nDifference: 0\n\n{}",
        PROMPTS, RESTART_PROMPT
    );
    assert_eq!(transcript, expected);
    assert_eq!(
        summary,
        SessionSummary {
            sessions: 1,
            reports: 1,
            rejected: 0
        }
    );
}

#[test]
fn test_inputs_on_one_line() {
    let (one_line, _) = run("1 1 3 5 q");
    let (many_lines, _) = run("1\n1\n3\n5\nq\n");
    assert_eq!(one_line, many_lines);
}

#[test]
fn test_restart_shows_prompts_again() {
    let (transcript, summary) = run("1 1 1 2\nr\n2 2 1 3\nq\n");

    let first = format!(
        "{}\n2\n\nExpected average: 2\nReal average: 2\nDifference: 0\n\n{}",
        PROMPTS, RESTART_PROMPT
    );
    let second = format!(
        "{}\n6\n\nExpected average: 6\nReal average: 6\nDifference: 0\n\n{}",
        PROMPTS, RESTART_PROMPT
    );
    assert_eq!(transcript, format!("{}\n{}", first, second));
    assert_eq!(summary.sessions, 2);
    assert_eq!(summary.reports, 2);
}

#[test]
fn test_quit_prints_nothing_after_prompt() {
    let (transcript, summary) = run("1 6 4 6\nq\n1 6 4 6\n");

    assert!(transcript.ends_with(RESTART_PROMPT));
    assert_eq!(transcript.matches("Minimum distribution: ").count(), 1);
    assert_eq!(summary.sessions, 1);
}

#[test]
fn test_uppercase_r_quits() {
    let (transcript, summary) = run("1 6 4 6\nR\n1 6 4 6\n");

    assert_eq!(transcript.matches("Minimum distribution: ").count(), 1);
    assert_eq!(summary.sessions, 1);
}

#[test]
fn test_end_of_input_at_restart_prompt_quits() {
    let (transcript, summary) = run("1 6 4 6\n");

    assert!(transcript.ends_with(RESTART_PROMPT));
    assert_eq!(summary.sessions, 1);
    assert_eq!(summary.reports, 1);
}

#[test]
fn test_end_of_input_while_collecting() {
    let (transcript, summary) = run("1 6\n");

    assert_eq!(transcript, "Minimum distribution: Maximum distribution: Tries: ");
    assert_eq!(summary.reports, 0);
}

#[test]
fn test_zero_tries_reported_not_crashed() {
    let (transcript, summary) = run("1 6 0 6\nq\n");

    let expected = format!(
        "{}\nError: tries must be positive, got 0\n\n{}",
        PROMPTS, RESTART_PROMPT
    );
    assert_eq!(transcript, expected);
    assert_eq!(summary.rejected, 1);
    assert_eq!(summary.reports, 0);
}

#[test]
fn test_inverted_range_reported() {
    let (transcript, _) = run("6 1 3 3\nq\n");

    assert!(transcript
        .contains("Error: minimum distribution 6 is greater than maximum distribution 1\n"));
    assert!(!transcript.contains("Expected average"));
}

#[test]
fn test_invalid_number_then_restart() {
    let (transcript, summary) = run("1 x 9 9\nr\n1 1 2 2\nq\n");

    let expected = format!(
        "Minimum distribution: Maximum distribution: \nError: 'x' is not a valid integer\n\n{}\n{}\n2\n2\n\nExpected average: 2\nReal average: 2\nDifference: 0\n\n{}",
        RESTART_PROMPT, PROMPTS, RESTART_PROMPT
    );
    assert_eq!(transcript, expected);
    assert_eq!(summary.sessions, 2);
    assert_eq!(summary.rejected, 1);
    assert_eq!(summary.reports, 1);
}

#[test]
fn test_restart_char_leaves_rest_of_token() {
    // "r1" restarts and the 1 becomes the next minimum
    let (transcript, summary) = run("1 1 1 1\nr1 1 1 1\nq\n");

    assert_eq!(summary.sessions, 2);
    assert_eq!(summary.reports, 2);
    assert_eq!(transcript.matches("Expected average: 1\n").count(), 2);
}

#[test]
fn test_trial_sums_in_range() {
    let (transcript, _) = run("1 6 50 10\nq\n");

    let sums: Vec<i64> = transcript
        .split("Seeds per try: \n")
        .nth(1)
        .unwrap()
        .lines()
        .take_while(|l| !l.is_empty())
        .map(|l| l.parse().unwrap())
        .collect();

    assert_eq!(sums.len(), 50);
    assert!(sums.iter().all(|s| (10..=60).contains(s)));

    let real_avg = sums.iter().sum::<i64>() / 50;
    assert!(transcript.contains(&format!("Real average: {}\n", real_avg)));
    // 10 / 6 truncates to 1, so the expected sum is 1+2+...+6
    assert!(transcript.contains("Expected average: 21\n"));
}

#[test]
fn test_same_seed_same_transcript() {
    let input = "-10 10 20 30\nr\n0 3 5 100\nq\n";
    let (first, _) = run_with(42, SessionOptions::default(), input);
    let (second, _) = run_with(42, SessionOptions::default(), input);
    assert_eq!(first, second);
}

#[test]
fn test_exact_average_line() {
    let (transcript, _) = run_with(9, SessionOptions { exact: true }, "2 2 4 3\nq\n");

    let expected = format!(
        "{}\n6\n6\n6\n6\n\nExpected average: 6\nReal average: 6\nExact real average: 6.000\nDifference: 0\n\n{}",
        PROMPTS, RESTART_PROMPT
    );
    assert_eq!(transcript, expected);
}

/// Run the loop over raw bytes that need not be valid UTF-8
fn run_bytes(input: &[u8]) -> (String, SessionSummary) {
    let mut session = Session::new(Mt19937::new(1), SessionOptions::default());
    let mut output = Vec::new();

    let summary = session
        .run(Cursor::new(input), &mut output)
        .unwrap_or_else(|e| panic!("Session failed: {}", e));

    (String::from_utf8(output).unwrap(), summary)
}

#[test]
fn test_non_utf8_at_restart_prompt_quits() {
    let (transcript, summary) = run_bytes(b"1 1 3 5\n\xff\n1 1 3 5\n");

    assert!(transcript.ends_with(RESTART_PROMPT));
    assert_eq!(transcript.matches("Minimum distribution: ").count(), 1);
    assert_eq!(
        summary,
        SessionSummary {
            sessions: 1,
            reports: 1,
            rejected: 0
        }
    );
}

#[test]
fn test_non_utf8_number_rejected() {
    let (transcript, summary) = run_bytes(b"\xff 1 3 5\nq\n");

    let expected = format!(
        "Minimum distribution: \nError: '\u{fffd}' is not a valid integer\n\n{}",
        RESTART_PROMPT
    );
    assert_eq!(transcript, expected);
    assert_eq!(summary.sessions, 1);
    assert_eq!(summary.rejected, 1);
    assert_eq!(summary.reports, 0);
}

/// Writer that fails once more than `limit` bytes have been written
struct FailingWriter {
    written: usize,
    limit: usize,
}

impl Write for FailingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.written + buf.len() > self.limit {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "stdout closed"));
        }
        self.written += buf.len();
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_write_failure_is_returned() {
    let mut session = Session::new(Mt19937::new(1), SessionOptions::default());
    let mut output = FailingWriter {
        written: 0,
        limit: 30,
    };

    let err = session
        .run(Cursor::new("1 6 4 6\nq\n"), &mut output)
        .unwrap_err();
    assert!(matches!(err, SessionError::Io(_)));
}
