use mtrandom::Mt19937;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let seed: u32 = args
        .get(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(mtrandom::DEFAULT_SEED);
    let count: usize = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(20);

    let mut rng = Mt19937::new(seed);

    for _ in 0..count {
        println!("{}", rng.next_u32());
    }
}
