use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use tracing::{debug, warn};

use crate::decide::play_turn;
use crate::dice::DieRoller;
use crate::error::{Error, Result};
use crate::stats::{StrategyResult, summarize};
use crate::strategy::Strategy;

pub const DEFAULT_GAMES: usize = 10_000;
pub const DEFAULT_WIN_THRESHOLD: u32 = 4800;

/// Parameters shared by every strategy in a sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationConfig {
    games: usize,
    win_threshold: u32,
    max_rounds: Option<u32>,
    seed: u64,
}

impl SimulationConfig {
    pub fn new(
        games: usize,
        win_threshold: u32,
        max_rounds: Option<u32>,
        seed: u64,
    ) -> Result<Self> {
        if games == 0 {
            return Err(Error::NoGames);
        }
        if win_threshold == 0 {
            return Err(Error::InvalidWinThreshold);
        }
        if max_rounds == Some(0) {
            return Err(Error::InvalidRoundLimit);
        }
        Ok(SimulationConfig {
            games,
            win_threshold,
            max_rounds,
            seed,
        })
    }

    pub fn games(&self) -> usize {
        self.games
    }

    pub fn win_threshold(&self) -> u32 {
        self.win_threshold
    }

    pub fn max_rounds(&self) -> Option<u32> {
        self.max_rounds
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    // Each game gets its own stream; strategies share the per-game seeds
    fn game_rng(&self, game: usize) -> StdRng {
        StdRng::seed_from_u64(self.seed.wrapping_add(game as u64))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Won { rounds: u32 },
    /// The round limit was hit with `score` still below the threshold.
    DidNotConverge { rounds: u32, score: u32 },
}

/// Play turns until the running total reaches `win_threshold`.
///
/// Without a round limit this only returns if the strategy eventually
/// scores; a strategy that always busts loops forever.
pub fn play_game<R: DieRoller + ?Sized>(
    strategy: &Strategy,
    win_threshold: u32,
    max_rounds: Option<u32>,
    roller: &mut R,
) -> GameOutcome {
    let mut rounds = 0;
    let mut score = 0u32;
    while score < win_threshold {
        if max_rounds.is_some_and(|limit| rounds >= limit) {
            return GameOutcome::DidNotConverge { rounds, score };
        }
        rounds += 1;
        score = score.saturating_add(play_turn(strategy, roller));
    }
    GameOutcome::Won { rounds }
}

/// Play `config.games()` independent games in parallel, in game order.
pub fn play_games(strategy: &Strategy, config: &SimulationConfig) -> Vec<GameOutcome> {
    (0..config.games)
        .into_par_iter()
        .map(|game| {
            let mut rng = config.game_rng(game);
            play_game(strategy, config.win_threshold, config.max_rounds, &mut rng)
        })
        .collect()
}

/// Summarize one strategy. Games stopped at the round limit are left out of
/// the samples and counted in `unconverged`; if none converged the result
/// carries no average or median.
pub fn evaluate(strategy: Strategy, config: &SimulationConfig) -> StrategyResult {
    let outcomes = play_games(&strategy, config);

    let mut samples = Vec::with_capacity(outcomes.len());
    let mut unconverged = 0;
    for outcome in outcomes {
        match outcome {
            GameOutcome::Won { rounds } => samples.push(rounds),
            GameOutcome::DidNotConverge { .. } => unconverged += 1,
        }
    }
    if unconverged > 0 {
        warn!(
            %strategy,
            unconverged,
            max_rounds = ?config.max_rounds,
            "games stopped at the round limit"
        );
    }

    let mut result = summarize(strategy, samples);
    result.unconverged = unconverged;
    debug!(
        %strategy,
        average = ?result.average,
        median = ?result.median,
        "simulated strategy"
    );
    result
}

/// Evaluate every strategy with the same configuration.
pub fn sweep(
    strategies: &[Strategy],
    config: &SimulationConfig,
) -> Result<Vec<StrategyResult>> {
    if strategies.is_empty() {
        return Err(Error::NoStrategies);
    }
    Ok(strategies
        .iter()
        .map(|&strategy| evaluate(strategy, config))
        .collect())
}

#[cfg(test)]
mod simulate_tests {
    use super::*;
    use crate::dice::ScriptedRolls;

    fn strategy(target_score: u32, min_dice: u8, des_dice: u8) -> Strategy {
        Strategy::new(target_score, min_dice, des_dice).unwrap()
    }

    #[test]
    fn test_config_validation() {
        assert_eq!(SimulationConfig::new(0, 4800, None, 0), Err(Error::NoGames));
        assert_eq!(
            SimulationConfig::new(10, 0, None, 0),
            Err(Error::InvalidWinThreshold)
        );
        assert_eq!(
            SimulationConfig::new(10, 4800, Some(0), 0),
            Err(Error::InvalidRoundLimit)
        );
        let config = SimulationConfig::new(10, 4800, Some(50), 3).unwrap();
        assert_eq!(config.games(), 10);
        assert_eq!(config.max_rounds(), Some(50));
    }

    #[test]
    fn test_scripted_game_rounds_to_win() {
        let rolls: &[u8] = &[
            // Straight, then a bust on the refilled set: 0
            1, 2, 3, 4, 5, 2, 3, 4, 6, 2,
            // Triple ones, banked with two dice left: 1000
            1, 1, 1, 2, 3,
            // Straight, a one, then triple fives: 2100
            5, 2, 3, 4, 6, 1, 2, 3, 4, 6, 5, 5, 5, 2,
        ];
        let mut rolls = ScriptedRolls::new(rolls);
        let outcome = play_game(&strategy(500, 2, 3), 3000, None, &mut rolls);
        assert_eq!(outcome, GameOutcome::Won { rounds: 3 });
    }

    #[test]
    fn test_round_limit_stops_hopeless_game() {
        // Ten turns, each a bust on the first roll
        let mut rolls = ScriptedRolls::new(&[2u8, 2, 3, 4, 6].repeat(10));
        let outcome = play_game(&strategy(500, 0, 3), 4800, Some(10), &mut rolls);
        assert_eq!(outcome, GameOutcome::DidNotConverge { rounds: 10, score: 0 });
    }

    #[test]
    fn test_play_games_is_reproducible() {
        let config = SimulationConfig::new(50, 2000, None, 42).unwrap();
        let strategy = strategy(500, 2, 3);
        assert_eq!(play_games(&strategy, &config), play_games(&strategy, &config));
    }

    #[test]
    fn test_evaluate_with_real_rolls() {
        let config = SimulationConfig::new(500, DEFAULT_WIN_THRESHOLD, None, 1).unwrap();
        let result = evaluate(strategy(500, 2, 3), &config);
        assert_eq!(result.samples.len(), 500);
        assert!(result.average.unwrap() >= 1.0);
        assert!(result.median.unwrap() >= 1);
        assert_eq!(result.distribution.values().sum::<usize>(), 500);
    }

    #[test]
    fn test_full_size_run_reports_positive_rounds() {
        let config = SimulationConfig::new(DEFAULT_GAMES, DEFAULT_WIN_THRESHOLD, None, 0).unwrap();
        let result = evaluate(strategy(500, 2, 3), &config);
        assert_eq!(result.samples.len(), DEFAULT_GAMES);
        assert_eq!(result.unconverged, 0);
        assert!(result.average.unwrap() >= 1.0);
        assert!(result.median.unwrap() >= 1);
    }

    #[test]
    fn test_evaluate_keeps_strategy_when_no_game_converges() {
        let config = SimulationConfig::new(100, 1_000_000, Some(5), 9).unwrap();
        let result = evaluate(strategy(500, 2, 3), &config);
        assert!(!result.converged());
        assert_eq!(result.unconverged, 100);
        assert_eq!(result.average, None);
        assert_eq!(result.median, None);
    }

    #[test]
    fn test_sweep() {
        let config =
            SimulationConfig::new(200, DEFAULT_WIN_THRESHOLD, Some(1000), 5).unwrap();
        let results = sweep(&Strategy::defaults(), &config).unwrap();
        assert_eq!(results.len(), 5);
        for result in &results {
            assert!(result.average.unwrap() >= 1.0);
            assert_eq!(result.unconverged, 0);
        }
        assert_eq!(sweep(&[], &config), Err(Error::NoStrategies));
    }

    #[test]
    fn test_sweep_survives_strategy_that_never_banks() {
        // 300:0:0 keeps rolling until every turn busts
        let config =
            SimulationConfig::new(100, DEFAULT_WIN_THRESHOLD, Some(200), 0).unwrap();
        let results = sweep(&[strategy(500, 2, 3), strategy(300, 0, 0)], &config).unwrap();
        assert_eq!(results.len(), 2);

        assert!(results[0].converged());
        assert!(results[0].average.unwrap() >= 1.0);

        assert!(!results[1].converged());
        assert_eq!(results[1].unconverged, 100);
        assert_eq!(results[1].label, "TS:300,DD:0,MD:0");
    }
}
