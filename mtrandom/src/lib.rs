// MT19937: the 32-bit Mersenne Twister of Matsumoto & Nishimura (1998).
// Output is bit-exact with the reference implementation (and std::mt19937),
// so a seed reproduces the same draw sequence as any conforming generator.

const N: usize = 624;
const M: usize = 397;
const MATRIX_A: u32 = 0x9908_b0df;
const UPPER_MASK: u32 = 0x8000_0000;
const LOWER_MASK: u32 = 0x7fff_ffff;

/// Seed used by `Default`, same as the reference implementation.
pub const DEFAULT_SEED: u32 = 5489;

/// Mersenne Twister pseudo-random generator.
///
/// One instance is meant to be created at program start and lent to every
/// caller that needs a draw, so that the whole run comes from one seed.
#[derive(Clone, Debug)]
pub struct Mt19937 {
    mt: [u32; N],
    index: usize,
}

impl Mt19937 {
    /// Create a generator from a 32-bit seed.
    pub fn new(seed: u32) -> Self {
        let mut mt = [0u32; N];
        mt[0] = seed;
        for i in 1..N {
            let prev = mt[i - 1];
            mt[i] = 1_812_433_253u32
                .wrapping_mul(prev ^ (prev >> 30))
                .wrapping_add(i as u32);
        }

        // Force a twist on the first call
        Self { mt, index: N }
    }

    fn twist(&mut self) {
        for i in 0..N {
            let y = (self.mt[i] & UPPER_MASK) | (self.mt[(i + 1) % N] & LOWER_MASK);
            let mut next = self.mt[(i + M) % N] ^ (y >> 1);
            if y & 1 != 0 {
                next ^= MATRIX_A;
            }
            self.mt[i] = next;
        }
        self.index = 0;
    }

    /// Generate the next tempered 32-bit output.
    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        if self.index >= N {
            self.twist();
        }

        let mut y = self.mt[self.index];
        self.index += 1;

        y ^= y >> 11;
        y ^= (y << 7) & 0x9d2c_5680;
        y ^= (y << 15) & 0xefc6_0000;
        y ^= y >> 18;
        y
    }

    /// Advance the generator by `count` outputs.
    pub fn discard(&mut self, count: u64) {
        for _ in 0..count {
            self.next_u32();
        }
    }

    /// Generate a random index in range [0, n) using rejection sampling.
    /// This avoids modulo bias. `n` must be non-zero.
    #[inline]
    pub fn next_below(&mut self, n: u32) -> u32 {
        debug_assert!(n > 0, "next_below called with n = 0");

        // Fast path for powers of 2
        if n.is_power_of_two() {
            return self.next_u32() & (n - 1);
        }

        // Lemire's nearly divisionless method
        let mut x = self.next_u32();
        let mut m = (x as u64) * (n as u64);
        let mut l = m as u32;

        if l < n {
            let t = n.wrapping_neg() % n;
            while l < t {
                x = self.next_u32();
                m = (x as u64) * (n as u64);
                l = m as u32;
            }
        }

        (m >> 32) as u32
    }

    /// Draw an integer uniformly from `[min, max]`, both ends inclusive.
    ///
    /// Returns `None` when `min > max`; an inverted range has no values to draw.
    pub fn gen_range_inclusive(&mut self, min: i32, max: i32) -> Option<i32> {
        if min > max {
            return None;
        }

        let span = (max as i64 - min as i64) as u64 + 1;
        let offset = if span > u32::MAX as u64 {
            // Full i32 span: every 32-bit output is a valid offset
            self.next_u32() as i64
        } else {
            self.next_below(span as u32) as i64
        };

        Some((min as i64 + offset) as i32)
    }
}

impl Default for Mt19937 {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}
