use chrono::NaiveDate;

// Numerical Recipes LCG constants. These exact values are an interop
// contract: independent clients reproduce the same daily ordering from the
// same date with no shared state.
const LCG_A: u64 = 1_664_525;
const LCG_C: u64 = 1_013_904_223;
const LCG_M: u64 = 1 << 32;

/// Deterministic PRNG over the recurrence `state = (state * A + C) mod 2^32`.
/// Holds nothing but its state; two generators with the same seed emit
/// identical streams.
#[derive(Debug, Clone)]
pub struct SeededRng {
    state: u64,
}

impl SeededRng {
    pub fn new(seed: u32) -> Self {
        Self {
            state: u64::from(seed),
        }
    }

    /// Next value in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        self.state = (self.state * LCG_A + LCG_C) % LCG_M;
        self.state as f64 / LCG_M as f64
    }
}

/// Seed for the current calendar day. The date is the server clock in UTC;
/// callers capture it once per request (`Utc::now().date_naive()`).
///
/// The hash is the djb2-style rolling hash over the zero-padded `YYYY-MM-DD`
/// string, truncated to 32-bit signed semantics at every step. Same date in,
/// same seed out, on any platform.
pub fn daily_seed(date: NaiveDate) -> u32 {
    let key = date.format("%Y-%m-%d").to_string();
    let mut hash: i32 = 0;
    for ch in key.chars() {
        hash = hash
            .wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(ch as i32);
    }
    hash.unsigned_abs()
}
