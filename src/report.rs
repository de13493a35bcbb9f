use std::cmp::Ordering;
use std::io::{self, Write};

use serde::Serialize;

use crate::likelihood::ExceedancePoint;
use crate::stats::StrategyResult;

const BAR_WIDTH: usize = 50;
const NOT_CONVERGED: &str = "did not converge";

/// Renders a comparison of strategy results.
pub trait Report {
    fn render(&self, out: &mut dyn Write, results: &[StrategyResult]) -> io::Result<()>;
}

/// Average and median rounds-to-win per strategy, best average first and
/// strategies that never converged last.
pub struct TableReport;

impl Report for TableReport {
    fn render(&self, out: &mut dyn Write, results: &[StrategyResult]) -> io::Result<()> {
        writeln!(
            out,
            "{:<24} {:>10} {:>8} {:>8} {:>12}",
            "Strategy", "Average", "Median", "Games", "Unconverged"
        )?;
        writeln!(out, "{:-<66}", "")?;

        let mut sorted: Vec<&StrategyResult> = results.iter().collect();
        sorted.sort_by(|a, b| by_average(a.average, b.average));

        for result in &sorted {
            match (result.average, result.median) {
                (Some(average), Some(median)) => writeln!(
                    out,
                    "{:<24} {:>10.3} {:>8} {:>8} {:>12}",
                    result.label,
                    average,
                    median,
                    result.samples.len(),
                    result.unconverged
                )?,
                _ => writeln!(
                    out,
                    "{:<24} {:>19} {:>8} {:>12}",
                    result.label,
                    NOT_CONVERGED,
                    result.samples.len(),
                    result.unconverged
                )?,
            }
        }

        let best = sorted
            .iter()
            .find_map(|r| r.average.map(|average| (average, &r.label)));
        if let Some((average, label)) = best {
            writeln!(out)?;
            writeln!(out, "min average: {average:.3} ({label})")?;
        }
        Ok(())
    }
}

/// Number of games won at each round count, one histogram per strategy.
pub struct DistributionReport;

impl Report for DistributionReport {
    fn render(&self, out: &mut dyn Write, results: &[StrategyResult]) -> io::Result<()> {
        for result in results {
            writeln!(
                out,
                "{} ({} games won at X rounds)",
                result.label,
                result.samples.len()
            )?;
            if !result.converged() {
                writeln!(out, "  {NOT_CONVERGED} ({} games)", result.unconverged)?;
                writeln!(out)?;
                continue;
            }
            let peak = result.distribution.values().copied().max().unwrap_or(0);
            for (rounds, &count) in &result.distribution {
                writeln!(out, "{:>5} {:>7} {}", rounds, count, bar(count, peak))?;
            }
            writeln!(out)?;
        }
        Ok(())
    }
}

/// Results as a JSON array, without the raw samples. Strategies that never
/// converged have a null average and median and `converged: false`.
pub struct JsonReport;

#[derive(Serialize)]
struct JsonRecord<'a> {
    #[serde(flatten)]
    result: &'a StrategyResult,
    converged: bool,
}

impl Report for JsonReport {
    fn render(&self, out: &mut dyn Write, results: &[StrategyResult]) -> io::Result<()> {
        let records: Vec<JsonRecord> = results
            .iter()
            .map(|result| JsonRecord {
                result,
                converged: result.converged(),
            })
            .collect();
        serde_json::to_writer_pretty(&mut *out, &records)?;
        writeln!(out)
    }
}

/// P(turn score >= X) table for one strategy.
pub fn render_exceedance(
    out: &mut dyn Write,
    label: &str,
    turns: usize,
    curve: &[ExceedancePoint],
) -> io::Result<()> {
    writeln!(out, "Probability of turn score >= X ({label}, {turns} turns)")?;
    writeln!(out, "{:>6} {:>8}", "X", "P")?;
    for point in curve {
        let scaled = (point.probability * BAR_WIDTH as f64).round() as usize;
        writeln!(
            out,
            "{:>6} {:>8.4} {}",
            point.score,
            point.probability,
            "#".repeat(scaled)
        )?;
    }
    Ok(())
}

// Missing averages sort after every real one
fn by_average(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.total_cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn bar(count: usize, peak: usize) -> String {
    if peak == 0 {
        return String::new();
    }
    "#".repeat((count * BAR_WIDTH).div_ceil(peak))
}
