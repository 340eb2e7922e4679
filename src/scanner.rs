//! Scanner for the paired bid/cost history records of a tournament log.
//!
//! At the end of a tournament each agent writes two consecutive lines:
//!
//! ```text
//! ... CONFIG | <name> BID HISTORIC: [b0, b1, ...] ;
//! ... COST HISTORIC: [c0, c1, ...] ;
//! ```
//!
//! The scan is a single pass over the lines driven by a two-state machine:
//! waiting for a bid marker, or holding a bid history and waiting for the cost
//! line that must come right after it.

use crate::errors::ExtractError;
use crate::format::LogFormat;
use crate::literal::parse_number_list;
use crate::logger::{Logger, LogEvent};
use crate::records::AgentRecord;
use crate::logln;

enum ScanState {
    AwaitingMarker,
    AwaitingCost {
        name: String,
        bids: Vec<f64>,
        line: usize,
    },
}

pub struct LogScanner<'a> {
    format: &'a LogFormat,
}

impl<'a> LogScanner<'a> {
    pub fn new(format: &'a LogFormat) -> Self {
        Self { format }
    }

    /// Scan the whole log and return agent records in file order
    pub fn scan_records(&self, content: &str, logger: &mut Logger) -> Result<Vec<AgentRecord>, ExtractError> {
        let mut records = Vec::new();
        let mut state = ScanState::AwaitingMarker;

        for (index, line) in content.lines().enumerate() {
            let line_no = index + 1;
            state = match state {
                ScanState::AwaitingMarker if !line.contains(self.format.bid_marker.as_str()) => {
                    ScanState::AwaitingMarker
                }
                ScanState::AwaitingMarker => {
                    let (name, bids) = self.parse_bid_line(line, line_no)?;
                    ScanState::AwaitingCost { name, bids, line: line_no }
                }
                ScanState::AwaitingCost { name, bids, line: bid_line } => {
                    // The continuation line is consumed even if it also carries a bid marker
                    let costs = self.parse_cost_line(line, line_no, bid_line)?;
                    let record = AgentRecord::new(name, bids, costs, bid_line)?;
                    logln!(logger, LogEvent::Scan, "Line {}: agent '{}' with {} rounds", bid_line, record.name, record.rounds());
                    records.push(record);
                    ScanState::AwaitingMarker
                }
            };
        }

        match state {
            ScanState::AwaitingMarker => Ok(records),
            ScanState::AwaitingCost { line, .. } => Err(ExtractError::TruncatedRecord { line }),
        }
    }

    fn parse_bid_line(&self, line: &str, line_no: usize) -> Result<(String, Vec<f64>), ExtractError> {
        let name = self.format.agent_name(line)
            .ok_or_else(|| missing(line_no, line, &self.format.name_prefix))?;
        let literal = self.format.bid_literal(line)
            .ok_or_else(|| missing(line_no, line, &self.format.bid_delimiter))?;
        let bids = parse_list(literal, line_no)?;
        Ok((name.to_string(), bids))
    }

    fn parse_cost_line(&self, line: &str, line_no: usize, bid_line: usize) -> Result<Vec<f64>, ExtractError> {
        // A bid history without its cost history is a cut-off record, not a bad literal
        let literal = self.format.cost_literal(line)
            .ok_or(ExtractError::TruncatedRecord { line: bid_line })?;
        parse_list(literal, line_no)
    }
}

fn parse_list(literal: &str, line_no: usize) -> Result<Vec<f64>, ExtractError> {
    parse_number_list(literal).map_err(|e| ExtractError::MalformedLiteral {
        line: line_no,
        text: literal.to_string(),
        reason: e.reason,
    })
}

fn missing(line_no: usize, line: &str, token: &str) -> ExtractError {
    ExtractError::MalformedLiteral {
        line: line_no,
        text: line.to_string(),
        reason: format!("missing '{}'", token),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(content: &str) -> Result<Vec<AgentRecord>, ExtractError> {
        let format = LogFormat::default();
        let mut logger = Logger::new();
        LogScanner::new(&format).scan_records(content, &mut logger)
    }

    #[test]
    fn test_single_record_verbatim() {
        let log = "\
INFO starting tournament
12:00:01 CONFIG | Alpha BID HISTORIC: [10, 5.5, 3] ;
12:00:01 CONFIG | Alpha COST HISTORIC: [4, 4, 2.25] ;
INFO done
";
        let records = scan(log).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Alpha");
        assert_eq!(records[0].bids, vec![10.0, 5.5, 3.0]);
        assert_eq!(records[0].costs, vec![4.0, 4.0, 2.25]);
        assert_eq!(records[0].line, 2);
    }

    #[test]
    fn test_records_in_file_order() {
        let log = "\
CONFIG | A BID HISTORIC: [1] ;
CONFIG | A COST HISTORIC: [0] ;
noise
CONFIG | B BID HISTORIC: [2] ;
CONFIG | B COST HISTORIC: [1] ;
";
        let names: Vec<String> = scan(log).unwrap().into_iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["A", "B"]);
    }

    #[test]
    fn test_no_markers_yields_nothing() {
        assert!(scan("a\nb\nc\n").unwrap().is_empty());
        assert!(scan("").unwrap().is_empty());
    }

    #[test]
    fn test_bid_line_at_end_is_truncated() {
        let log = "noise\nCONFIG | A BID HISTORIC: [1, 2] ;";
        match scan(log) {
            Err(ExtractError::TruncatedRecord { line }) => assert_eq!(line, 2),
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn test_bid_line_without_cost_line_is_truncated() {
        let log = "CONFIG | A BID HISTORIC: [1, 2] ;\nsomething else\n";
        assert!(matches!(scan(log), Err(ExtractError::TruncatedRecord { line: 1 })));
    }

    #[test]
    fn test_malformed_bid_list() {
        let log = "CONFIG | A BID HISTORIC: [1, two, 3] ;\nCONFIG | A COST HISTORIC: [1, 1, 1] ;\n";
        match scan(log) {
            Err(ExtractError::MalformedLiteral { line, text, .. }) => {
                assert_eq!(line, 1);
                assert_eq!(text, "[1, two, 3]");
            }
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn test_malformed_cost_list() {
        let log = "CONFIG | A BID HISTORIC: [1] ;\nCONFIG | A COST HISTORIC: [x] ;\n";
        assert!(matches!(scan(log), Err(ExtractError::MalformedLiteral { line: 2, .. })));
    }

    #[test]
    fn test_missing_name_prefix() {
        let log = "A BID HISTORIC: [1] ;\nCOST HISTORIC: [1] ;\n";
        assert!(matches!(scan(log), Err(ExtractError::MalformedLiteral { line: 1, .. })));
    }

    #[test]
    fn test_length_mismatch() {
        let log = "CONFIG | A BID HISTORIC: [1, 2] ;\nCONFIG | A COST HISTORIC: [1] ;\n";
        assert!(matches!(
            scan(log),
            Err(ExtractError::RecordLengthMismatch { bids: 2, costs: 1, .. })
        ));
    }

    #[test]
    fn test_scan_logs_each_record() {
        use crate::logger::tests::CaptureReceiver;

        let format = LogFormat::default();
        let mut logger = Logger::new();
        let (receiver, lines) = CaptureReceiver::new(vec![LogEvent::Scan]);
        logger.add_receiver(receiver);

        let log = "CONFIG | A BID HISTORIC: [1, 2] ;\nCONFIG | A COST HISTORIC: [0, 0] ;\n";
        LogScanner::new(&format).scan_records(log, &mut logger).unwrap();

        assert_eq!(*lines.borrow(), vec!["Line 1: agent 'A' with 2 rounds\n".to_string()]);
    }
}
