//! Seedable random numbers (xorshift32).
//!
//! The engine owns a single `u32` state and threads it `&mut` into whatever
//! needs randomness, so every run is reproducible from the seed.

#[inline]
pub fn xorshift32(state: &mut u32) -> u32 {
    let mut x = *state;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    *state = x;
    x
}

/// Uniform float in `[0, 1)`.
#[inline]
pub fn unit(state: &mut u32) -> f32 {
    // Top 24 bits give a full-precision f32 mantissa.
    (xorshift32(state) >> 8) as f32 / 16_777_216.0
}

/// Uniform float in `[lo, hi)`.
#[inline]
pub fn range(state: &mut u32, lo: f32, hi: f32) -> f32 {
    lo + unit(state) * (hi - lo)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_stays_in_bounds() {
        let mut state = 12345u32;
        for _ in 0..1000 {
            let v = range(&mut state, -5.0, 5.0);
            assert!((-5.0..5.0).contains(&v));
        }
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = 42u32;
        let mut b = 42u32;
        for _ in 0..100 {
            assert_eq!(xorshift32(&mut a), xorshift32(&mut b));
        }
    }
}
