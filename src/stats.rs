use std::collections::BTreeMap;

use serde::Serialize;

use crate::strategy::Strategy;

/// Aggregated rounds-to-win for one strategy.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StrategyResult {
    pub strategy: Strategy,
    pub label: String,
    #[serde(skip)]
    pub samples: Vec<u32>,
    /// Games won at each round count.
    pub distribution: BTreeMap<u32, usize>,
    /// `None` when no game reached the win threshold.
    pub average: Option<f64>,
    pub median: Option<u32>,
    /// Games stopped at the round limit before reaching the threshold.
    pub unconverged: usize,
}

impl StrategyResult {
    pub fn converged(&self) -> bool {
        !self.samples.is_empty()
    }
}

pub fn mean(samples: &[u32]) -> Option<f64> {
    if samples.is_empty() {
        return None;
    }
    let total: u64 = samples.iter().map(|&s| s as u64).sum();
    Some(total as f64 / samples.len() as f64)
}

/// Element at index `n / 2` of the sorted samples. For an even count this is
/// the upper of the two middle values, not their mean.
pub fn median(samples: &[u32]) -> Option<u32> {
    let mut sorted = samples.to_vec();
    sorted.sort_unstable();
    sorted.get(sorted.len() / 2).copied()
}

pub fn distribution(samples: &[u32]) -> BTreeMap<u32, usize> {
    let mut dist = BTreeMap::new();
    for &rounds in samples {
        *dist.entry(rounds).or_insert(0) += 1;
    }
    dist
}

pub fn summarize(strategy: Strategy, samples: Vec<u32>) -> StrategyResult {
    StrategyResult {
        label: strategy.to_string(),
        distribution: distribution(&samples),
        average: mean(&samples),
        median: median(&samples),
        strategy,
        samples,
        unconverged: 0,
    }
}
