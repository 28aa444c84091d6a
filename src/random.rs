//! Injected pseudo-random source for piece selection and starting garbage.

/// Anything that can pick a uniform index in `0..bound`.
pub trait Randomizer {
    /// Returns a value in `0..bound`. `bound` is never zero.
    fn index(&mut self, bound: usize) -> usize;
}

impl Randomizer for fastrand::Rng {
    fn index(&mut self, bound: usize) -> usize {
        self.usize(..bound)
    }
}

impl<R: Randomizer + ?Sized> Randomizer for &mut R {
    fn index(&mut self, bound: usize) -> usize {
        (**self).index(bound)
    }
}

/// Replays a fixed list of values, wrapping around when exhausted.
///
/// Each value is reduced modulo the requested bound, so the same script can
/// drive both piece selection (bound 7) and column picks (bound 10).
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    values: Vec<usize>,
    cursor: usize,
}

impl ScriptedRandom {
    #[must_use]
    pub fn new(values: Vec<usize>) -> Self {
        Self { values, cursor: 0 }
    }

    /// How many values have been consumed so far.
    #[must_use]
    pub fn consumed(&self) -> usize {
        self.cursor
    }
}

impl Randomizer for ScriptedRandom {
    fn index(&mut self, bound: usize) -> usize {
        if self.values.is_empty() {
            return 0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value % bound
    }
}
