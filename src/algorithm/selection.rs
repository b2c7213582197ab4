use crate::{
    algorithm::candidates::Candidate,
    io::error::{GenerationError, Result},
};
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Seeded weighted picker consuming one random stream in call order
pub struct WeightedSelector<R = StdRng> {
    rng: R,
}

impl WeightedSelector<StdRng> {
    /// Create a deterministic selector
    pub fn from_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> WeightedSelector<R> {
    /// Wrap an existing random source
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Pick one candidate proportionally to its weight
    ///
    /// Draws `r` uniformly from `[0, total)` and walks the candidates in order,
    /// subtracting each weight until the remainder turns negative. One value
    /// is drawn per call.
    ///
    /// # Errors
    ///
    /// Returns `DegenerateWeights` without drawing if the weights do not sum
    /// to a positive finite total, which includes an empty candidate list
    pub fn select(&mut self, candidates: &[Candidate]) -> Result<Candidate> {
        let total: f64 = candidates.iter().map(|c| c.weight).sum();
        if !total.is_finite() || total <= 0.0 {
            return Err(GenerationError::DegenerateWeights {
                cell: None,
                candidates: candidates.len(),
            });
        }

        let draw = self.rng.random::<f64>() * total;
        pick(candidates, draw)
            .or_else(|| last_positive(candidates))
            .ok_or(GenerationError::DegenerateWeights {
                cell: None,
                candidates: candidates.len(),
            })
    }
}

/// Linear scan for the first candidate at which `draw` minus the running
/// weight sum drops below zero
pub fn pick(candidates: &[Candidate], draw: f64) -> Option<Candidate> {
    let mut remainder = draw;
    for candidate in candidates {
        remainder -= candidate.weight;
        if remainder < 0.0 {
            return Some(*candidate);
        }
    }
    None
}

// Rounding can leave a draw just below the total unconsumed
fn last_positive(candidates: &[Candidate]) -> Option<Candidate> {
    candidates.iter().rev().find(|c| c.weight > 0.0).copied()
}
