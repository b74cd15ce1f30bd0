//! Seeded random data for property-style tests.

/// Deterministic generator of test vectors.
pub struct DataGen {
    rng: fastrand::Rng,
}

impl DataGen {
    pub fn with_seed(seed: u64) -> DataGen {
        DataGen {
            rng: fastrand::Rng::with_seed(seed),
        }
    }

    pub fn usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.rng.usize(range)
    }

    /// Vector of length in `0..max_len` with values in `0..max_value`.
    ///
    /// Small value domains make equal prefixes (and therefore the
    /// interesting comparison paths) likely.
    pub fn values(&mut self, max_len: usize, max_value: u32) -> Vec<u32> {
        let len = self.rng.usize(0..max_len);
        (0..len).map(|_| self.rng.u32(0..max_value)).collect()
    }

    /// A pair of vectors where the second is derived from the first by
    /// truncating, extending, or changing one element, or left as a copy.
    pub fn related_pair(&mut self, max_len: usize, max_value: u32) -> (Vec<u32>, Vec<u32>) {
        let a = self.values(max_len, max_value);
        let mut b = a.clone();
        match self.rng.u8(0..4) {
            0 => b.truncate(self.rng.usize(0..=a.len())),
            1 => b.push(self.rng.u32(0..max_value)),
            2 if !b.is_empty() => {
                let i = self.rng.usize(0..b.len());
                b[i] = self.rng.u32(0..max_value);
            }
            _ => {}
        }
        (a, b)
    }
}
