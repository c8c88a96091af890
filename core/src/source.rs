/// Source of the random choices made while laying out a puzzle.
///
/// Every [`rand::Rng`] is a source, tests can substitute a scripted one to pin down exact
/// placements.
pub trait RandomSource {
    /// Uniformly random index in `0..bound`. `bound` is never zero.
    fn next_index(&mut self, bound: usize) -> usize;

    fn next_bool(&mut self) -> bool;
}

impl<R: rand::Rng> RandomSource for R {
    fn next_index(&mut self, bound: usize) -> usize {
        self.gen_range(0..bound)
    }

    fn next_bool(&mut self) -> bool {
        self.gen_bool(0.5)
    }
}
