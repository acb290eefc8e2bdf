/// Awards points for resolved rounds.
///
/// Scoring rules:
/// - A correct guess adds a fixed number of points
/// - A skipped round or a wrong guess adds nothing
/// - `GameSettings` bounds the best possible total to fit in a `u32`
#[derive(Debug, Clone, Copy)]
pub struct Scorer {
    increase: u32,
}

impl Scorer {
    pub fn new(increase: u32) -> Self {
        Self { increase }
    }

    /// Score after a correct guess
    pub fn award(&self, score: u32) -> u32 {
        score + self.increase
    }
}
