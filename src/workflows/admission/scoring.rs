use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of simulated assessment scores.
///
/// `draw(scale)` returns a value in `[0, scale)`. Stages never see where the value
/// comes from, so tests can swap the RNG for a scripted sequence.
pub trait ScoreGenerator {
    fn draw(&mut self, scale: f64) -> f64;
}

impl<F> ScoreGenerator for F
where
    F: FnMut(f64) -> f64,
{
    fn draw(&mut self, scale: f64) -> f64 {
        self(scale)
    }
}

/// Uniform draws from an OS-seeded RNG.
#[derive(Debug)]
pub struct UniformScores {
    rng: StdRng,
}

impl UniformScores {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl Default for UniformScores {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoreGenerator for UniformScores {
    fn draw(&mut self, scale: f64) -> f64 {
        if scale <= 0.0 {
            return 0.0;
        }
        self.rng.random_range(0.0..scale)
    }
}

/// Returns the same score for every draw regardless of scale.
#[derive(Debug, Clone, Copy)]
pub struct FixedScore(pub f64);

impl ScoreGenerator for FixedScore {
    fn draw(&mut self, _scale: f64) -> f64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_scores_stay_in_range() {
        let mut scores = UniformScores::new();
        for _ in 0..1_000 {
            let test = scores.draw(100.0);
            assert!((0.0..100.0).contains(&test), "test score {test} out of range");
            let interview = scores.draw(10.0);
            assert!(
                (0.0..10.0).contains(&interview),
                "interview score {interview} out of range"
            );
        }
    }

    #[test]
    fn closures_act_as_generators() {
        let mut calls = 0;
        let mut generator = |scale: f64| {
            calls += 1;
            scale / 2.0
        };
        assert_eq!(generator.draw(10.0), 5.0);
        assert_eq!(generator.draw(100.0), 50.0);
        assert_eq!(calls, 2);
    }
}
