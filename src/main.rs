mod errors;
mod literal;
mod format;
mod records;
mod scanner;
mod series;
mod gain;
mod min_cost;
mod reports;
mod logger;
mod charts;

use clap::Parser;
use std::path::PathBuf;

use format::{LogFormat, DEFAULT_AGENT_LABEL};
use gain::TieBreak;
use logger::{Logger, LogEvent, ConsoleReceiver, FileReceiver};
use reports::{find_report, get_report_catalog, ReportContext};

/// Extract bid, cost and gain series from auction tournament logs and chart them
#[derive(Parser, Debug)]
#[command(name = "bidlog", version, about)]
struct Cli {
    /// Simulation log to read
    #[arg(value_name = "LOG", required_unless_present = "list_reports")]
    log: Option<PathBuf>,

    /// Report to run
    #[arg(short, long, default_value = "bid_gain")]
    report: String,

    /// Print the available reports and exit
    #[arg(long)]
    list_reports: bool,

    /// Agent credited with a round when both bids are equal
    #[arg(long, value_enum, default_value_t = TieBreak::Second)]
    tie_break: TieBreak,

    /// Agent label in the minimum cost lines
    #[arg(long, default_value = DEFAULT_AGENT_LABEL)]
    agent: String,

    /// Directory for rendered charts
    #[arg(long, default_value = "charts")]
    charts_dir: PathBuf,

    /// Skip chart rendering
    #[arg(long)]
    no_charts: bool,

    /// Also print every scanned record and every auction round
    #[arg(short, long)]
    verbose: bool,

    /// Write all log events to this file as well
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    if cli.list_reports {
        for entry in get_report_catalog() {
            println!("  - {:<12} {}", entry.short_name, entry.description);
        }
        return;
    }

    let mut console_events = vec![LogEvent::Experiment, LogEvent::Report, LogEvent::Validation];
    if cli.verbose {
        console_events.extend([LogEvent::Scan, LogEvent::Round]);
    }
    let mut logger = Logger::new();
    logger.add_receiver(ConsoleReceiver::new(console_events));

    if let Some(path) = &cli.log_file {
        let all_events = vec![
            LogEvent::Scan,
            LogEvent::Round,
            LogEvent::Experiment,
            LogEvent::Report,
            LogEvent::Validation,
        ];
        match FileReceiver::new(path, all_events) {
            Ok(receiver) => logger.add_receiver(receiver),
            Err(e) => {
                eprintln!("Error opening log file {}: {}", path.display(), e);
                std::process::exit(1);
            }
        }
    }

    let entry = match find_report(&cli.report) {
        Some(entry) => entry,
        None => {
            errln!(logger, LogEvent::Validation, "Unknown report '{}'", cli.report);
            eprintln!("Available reports:");
            for entry in get_report_catalog() {
                eprintln!("  - {}", entry.short_name);
            }
            std::process::exit(1);
        }
    };

    // clap guarantees a path unless --list-reports was given
    let Some(log_path) = cli.log else {
        std::process::exit(2);
    };

    let context = ReportContext {
        log_path,
        format: LogFormat::for_agent(&cli.agent),
        tie_break: cli.tie_break,
        charts_dir: if cli.no_charts { None } else { Some(cli.charts_dir) },
    };

    let result = (entry.run)(&context, &mut logger);
    let _ = logger.flush();

    if let Err(e) = result {
        errln!(logger, LogEvent::Validation, "Report '{}' failed: {}", entry.short_name, e);
        std::process::exit(1);
    }
}
