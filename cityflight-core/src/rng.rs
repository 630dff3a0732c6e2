const MULTIPLIER: u32 = 9301;
const INCREMENT: u32 = 49297;
const MODULUS: u32 = 233_280;

/// Linear congruential generator used for scene placement.
///
/// The constants are small enough that `seed * MULTIPLIER + INCREMENT` fits in a `u64`
/// for any seed below the modulus, so the sequence is exact on every target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lcg {
    state: u32,
}

impl Lcg {
    pub fn new(seed: u32) -> Self {
        Self {
            state: seed % MODULUS,
        }
    }

    pub fn state(&self) -> u32 {
        self.state
    }

    /// Advances the sequence and returns a value in `[0, 1)`.
    pub fn next_f32(&mut self) -> f32 {
        let next = (self.state as u64 * MULTIPLIER as u64 + INCREMENT as u64) % MODULUS as u64;
        self.state = next as u32;
        self.state as f32 / MODULUS as f32
    }

    /// Returns `min + r * span` for the next draw `r`.
    pub fn range(&mut self, min: f32, span: f32) -> f32 {
        min + self.next_f32() * span
    }

    /// Returns a value centred on zero: `(r - 0.5) * scale`.
    pub fn centered(&mut self, scale: f32) -> f32 {
        (self.next_f32() - 0.5) * scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_reference_sequence() {
        let mut rng = Lcg::new(12345);
        // (12345 * 9301 + 49297) % 233280 = 96382
        let first = rng.next_f32();
        assert_eq!(rng.state(), 96_382);
        assert!((first - 96_382.0 / 233_280.0).abs() < f32::EPSILON);
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = Lcg::new(54321);
        let mut b = Lcg::new(54321);
        for _ in 0..1000 {
            assert_eq!(a.next_f32().to_bits(), b.next_f32().to_bits());
        }
    }

    #[test]
    fn values_stay_in_unit_interval() {
        let mut rng = Lcg::new(99999);
        for _ in 0..10_000 {
            let value = rng.next_f32();
            assert!((0.0..1.0).contains(&value));
        }
    }

    #[test]
    fn seeds_above_modulus_wrap() {
        let mut wrapped = Lcg::new(MODULUS + 7);
        let mut direct = Lcg::new(7);
        assert_eq!(wrapped.next_f32().to_bits(), direct.next_f32().to_bits());
    }
}
