use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;

use crate::decide::play_turn;
use crate::error::{Error, Result};
use crate::strategy::Strategy;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ExceedancePoint {
    pub score: u32,
    /// Fraction of turns that banked at least `score`.
    pub probability: f64,
}

/// Play `turns` independent turns from one seeded stream.
pub fn sample_turns(strategy: &Strategy, turns: usize, seed: u64) -> Result<Vec<u32>> {
    if turns == 0 {
        return Err(Error::NoTurns);
    }
    let mut rng = StdRng::seed_from_u64(seed);
    Ok((0..turns).map(|_| play_turn(strategy, &mut rng)).collect())
}

/// Fraction of `scores` strictly below `score`.
pub fn score_likelihood(scores: &[u32], score: u32) -> f64 {
    if scores.is_empty() {
        return 0.0;
    }
    let below = scores.iter().filter(|&&s| s < score).count();
    below as f64 / scores.len() as f64
}

/// P(turn score >= x), finely stepped at low scores and coarser above:
/// every 50 below 500, every 100 below 1000, then every 250 up to the
/// highest score seen. Empty without scores.
pub fn exceedance_curve(scores: &[u32]) -> Vec<ExceedancePoint> {
    let Some(max) = scores.iter().copied().max() else {
        return Vec::new();
    };
    (0..500)
        .step_by(50)
        .chain((500..1000).step_by(100))
        .chain((1000..max).step_by(250))
        .map(|score| ExceedancePoint {
            score,
            probability: 1.0 - score_likelihood(scores, score),
        })
        .collect()
}

#[cfg(test)]
mod likelihood_tests {
    use super::*;

    #[test]
    fn test_score_likelihood() {
        let scores = [0, 0, 300, 550, 1500];
        assert_eq!(score_likelihood(&scores, 0), 0.0);
        assert_eq!(score_likelihood(&scores, 300), 0.4);
        assert_eq!(score_likelihood(&scores, 301), 0.6);
        assert_eq!(score_likelihood(&scores, 5000), 1.0);
        assert_eq!(score_likelihood(&[], 100), 0.0);
    }

    #[test]
    fn test_exceedance_steps() {
        let curve = exceedance_curve(&[0, 600, 1600]);
        let steps: Vec<u32> = curve.iter().map(|p| p.score).collect();
        assert_eq!(
            steps,
            vec![
                0, 50, 100, 150, 200, 250, 300, 350, 400, 450, 500, 600, 700, 800, 900, 1000,
                1250, 1500
            ]
        );
        assert_eq!(curve[0].probability, 1.0);
        // 600 and 1600 reach 600
        assert!((curve[11].probability - 2.0 / 3.0).abs() < 1e-12);
        assert!((curve[17].probability - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_exceedance_never_increases() {
        let strategy = Strategy::new(500, 2, 3).unwrap();
        let scores = sample_turns(&strategy, 2000, 11).unwrap();
        assert_eq!(scores.len(), 2000);
        let curve = exceedance_curve(&scores);
        for pair in curve.windows(2) {
            assert!(pair[1].probability <= pair[0].probability);
        }
    }

    #[test]
    fn test_sampled_turns_are_reproducible() {
        let strategy = Strategy::new(700, 2, 3).unwrap();
        assert_eq!(sample_turns(&strategy, 100, 3), sample_turns(&strategy, 100, 3));
    }

    #[test]
    fn test_zero_turns_rejected() {
        let strategy = Strategy::new(500, 2, 3).unwrap();
        assert_eq!(sample_turns(&strategy, 0, 0), Err(Error::NoTurns));
    }

    #[test]
    fn test_exceedance_without_scores_is_empty() {
        assert!(exceedance_curve(&[]).is_empty());
    }
}
