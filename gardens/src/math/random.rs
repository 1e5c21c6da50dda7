use nanorand::{Rng, WyRand};

pub struct Random {
    generator: WyRand,
}

impl Default for Random {
    fn default() -> Self {
        Self::new()
    }
}

impl Random {
    pub fn new() -> Self {
        Self {
            generator: WyRand::new(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            generator: WyRand::new_seed(seed),
        }
    }

    /// Uniform index in `0..len`, none for empty ranges.
    pub fn index(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            None
        } else {
            Some(self.generator.generate_range(0..len))
        }
    }
}
