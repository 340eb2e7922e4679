//! Scanner for the per-round minimum cost lines.
//!
//! The tracked agent logs its own minimum cost and its estimate of the
//! opponent's as separate lines. Both are collected independently in file
//! order; nothing ties the n-th self value to the n-th opponent value.

use crate::errors::ExtractError;
use crate::format::LogFormat;
use crate::literal::parse_integer;
use crate::logger::{Logger, LogEvent};
use crate::logln;

/// Minimum cost series of the tracked agent and its opponent
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AggregateScalarSeries {
    pub self_cost: Vec<i64>,
    pub opponent_cost: Vec<i64>,
}

impl AggregateScalarSeries {
    /// True when the two series did not come out one-to-one
    pub fn is_unaligned(&self) -> bool {
        self.self_cost.len() != self.opponent_cost.len()
    }
}

pub fn scan_min_costs(content: &str, format: &LogFormat, logger: &mut Logger) -> Result<AggregateScalarSeries, ExtractError> {
    let mut series = AggregateScalarSeries::default();

    for (index, line) in content.lines().enumerate() {
        let line_no = index + 1;
        // Self marker wins if a line carries both
        if line.contains(format.self_cost_marker.as_str()) {
            let value = parse_field(format.self_cost_literal(line), line, line_no)?;
            logln!(logger, LogEvent::Scan, "Line {}: self min cost {}", line_no, value);
            series.self_cost.push(value);
        } else if line.contains(format.opponent_cost_marker.as_str()) {
            let value = parse_field(format.opponent_cost_literal(line), line, line_no)?;
            logln!(logger, LogEvent::Scan, "Line {}: opponent min cost {}", line_no, value);
            series.opponent_cost.push(value);
        }
    }

    Ok(series)
}

fn parse_field(field: Option<&str>, line: &str, line_no: usize) -> Result<i64, ExtractError> {
    let text = field.ok_or_else(|| ExtractError::MalformedLiteral {
        line: line_no,
        text: line.to_string(),
        reason: "no value after agent prefix".to_string(),
    })?;
    parse_integer(text).map_err(|e| ExtractError::MalformedLiteral {
        line: line_no,
        text: text.to_string(),
        reason: e.reason,
    })
}
