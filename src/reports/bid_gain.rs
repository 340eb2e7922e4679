//! Gain report for tournaments between two agents.
//!
//! Reads the bid and cost histories every agent dumps at the end of a
//! tournament, replays each tournament round by round and charts the
//! per-task margins together with each agent's cumulative gain.

use std::error::Error;
use crate::charts::{render_tournament, tournament_chart_path};
use crate::errors::ExtractError;
use crate::format::LogFormat;
use crate::gain::{compute_gains, Bidder, GainSeries, TieBreak};
use crate::logger::{Logger, LogEvent};
use crate::records::ExperimentPair;
use crate::reports::{prepare_charts_dir, read_log, ReportContext};
use crate::scanner::LogScanner;
use crate::series::pair_records;
use crate::logln;

// Register this report in the catalog
inventory::submit!(crate::reports::ReportEntry {
    short_name: "bid_gain",
    description: "Per-task margin and cumulative gain of each tournament",
    run,
});

/// One tournament and its replayed gains
pub struct Experiment {
    pub pair: ExperimentPair,
    pub gains: GainSeries,
}

/// Scan, pair and replay every tournament in the log
/// Fails on the first bad record, so callers never see a partial set
pub fn extract_experiments(content: &str, format: &LogFormat, tie_break: TieBreak, logger: &mut Logger) -> Result<Vec<Experiment>, ExtractError> {
    let records = LogScanner::new(format).scan_records(content, logger)?;
    let pairs = pair_records(records)?;

    Ok(pairs.into_iter()
        .map(|pair| {
            let gains = compute_gains(&pair, tie_break, logger);
            Experiment { pair, gains }
        })
        .collect())
}

fn summarize(index: usize, experiment: &Experiment, logger: &mut Logger) {
    let (pair, gains) = (&experiment.pair, &experiment.gains);
    let (total_1, total_2) = gains.final_gains();

    logln!(logger, LogEvent::Experiment, "Tournament {}: {} vs {} over {} tasks", index, pair.first.name, pair.second.name, pair.rounds());
    logln!(logger, LogEvent::Experiment, "  {:<20} won {:>4} tasks, total gain {:.2}", pair.first.name, gains.rounds_won(Bidder::First), total_1);
    logln!(logger, LogEvent::Experiment, "  {:<20} won {:>4} tasks, total gain {:.2}", pair.second.name, gains.rounds_won(Bidder::Second), total_2);
}

pub fn run(context: &ReportContext, logger: &mut Logger) -> Result<(), Box<dyn Error>> {
    let content = read_log(&context.log_path)?;
    let experiments = extract_experiments(&content, &context.format, context.tie_break, logger)?;

    let rounds = experiments.first().map_or(0, |e| e.pair.rounds());
    logln!(logger, LogEvent::Report, "Found {} tournaments of {} tasks in {}", experiments.len(), rounds, context.log_path.display());

    let charts_dir = prepare_charts_dir(context)?;
    for (index, experiment) in experiments.iter().enumerate() {
        summarize(index, experiment, logger);

        if let Some(dir) = charts_dir {
            let path = tournament_chart_path(dir, index, &experiment.pair);
            render_tournament(&path, &experiment.pair, &experiment.gains)?;
            logln!(logger, LogEvent::Report, "Chart saved to {}", path.display());
        }
    }

    Ok(())
}
