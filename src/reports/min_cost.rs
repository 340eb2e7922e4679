//! Minimum cost report: the tracked agent's per-task minimum cost next to
//! its estimate of the opponent's.

use std::error::Error;
use crate::charts::render_min_costs;
use crate::logger::{Logger, LogEvent};
use crate::min_cost::scan_min_costs;
use crate::reports::{prepare_charts_dir, read_log, ReportContext};
use crate::logln;
use crate::warnln;

// Register this report in the catalog
inventory::submit!(crate::reports::ReportEntry {
    short_name: "min_cost",
    description: "Own and opponent minimum cost per task",
    run,
});

pub fn run(context: &ReportContext, logger: &mut Logger) -> Result<(), Box<dyn Error>> {
    let content = read_log(&context.log_path)?;
    let series = scan_min_costs(&content, &context.format, logger)?;

    logln!(logger, LogEvent::Report, "Collected {} own and {} opponent minimum costs from {}",
        series.self_cost.len(), series.opponent_cost.len(), context.log_path.display());
    // Left as is: the log does not say which values belong together
    if series.is_unaligned() {
        warnln!(logger, LogEvent::Report, "Own and opponent minimum cost series differ in length ({} vs {})",
            series.self_cost.len(), series.opponent_cost.len());
    }

    if let Some(dir) = prepare_charts_dir(context)? {
        let path = dir.join("min_cost.png");
        render_min_costs(&path, &series)?;
        logln!(logger, LogEvent::Report, "Chart saved to {}", path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::LogFormat;
    use crate::gain::TieBreak;
    use crate::logger::tests::CaptureReceiver;
    use std::io::Write;

    fn context_for(content: &str, file: &mut tempfile::NamedTempFile, agent: &str) -> ReportContext {
        file.write_all(content.as_bytes()).unwrap();
        ReportContext {
            log_path: file.path().to_path_buf(),
            format: LogFormat::for_agent(agent),
            tie_break: TieBreak::default(),
            charts_dir: None,
        }
    }

    #[test]
    fn test_warns_on_unaligned_series() {
        let log = "\
Minimum cost is CONFIG | Ozuna : x:7
Min cost opponent CONFIG | Ozuna : x:9 margin 2
Minimum cost is CONFIG | Ozuna : x:7
";
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let context = context_for(log, &mut file, "Ozuna");
        let mut logger = Logger::new();
        let (receiver, lines) = CaptureReceiver::new(vec![LogEvent::Report]);
        logger.add_receiver(receiver);

        run(&context, &mut logger).unwrap();

        let lines = lines.borrow();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Collected 2 own and 1 opponent minimum costs"));
        assert_eq!(lines[1], "WARNING Own and opponent minimum cost series differ in length (2 vs 1)\n");
    }

    #[test]
    fn test_other_agent_label() {
        let log = "Minimum cost is CONFIG | Bravo : x:3\nMin cost opponent CONFIG | Bravo : x:4 margin\n";
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let context = context_for(log, &mut file, "Bravo");
        let mut logger = Logger::new();
        let (receiver, lines) = CaptureReceiver::new(vec![LogEvent::Report]);
        logger.add_receiver(receiver);

        run(&context, &mut logger).unwrap();

        assert_eq!(lines.borrow().len(), 1);
        assert!(lines.borrow()[0].starts_with("Collected 1 own and 1 opponent"));
    }

    #[test]
    fn test_bad_value_fails_report() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let context = context_for("Minimum cost is CONFIG | Ozuna : x:lots\n", &mut file, "Ozuna");
        let mut logger = Logger::new();
        assert!(run(&context, &mut logger).is_err());
    }
}
