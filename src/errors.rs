use thiserror::Error;

/// Failures while turning a simulation log into series.
///
/// None of these are recoverable for the run that hits them: the log is
/// rejected as a whole and no partial series reach the charts.
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("line {line}: bid history has no cost history on the following line")]
    TruncatedRecord { line: usize },

    #[error("line {line}: malformed literal {text:?} ({reason})")]
    MalformedLiteral {
        line: usize,
        text: String,
        reason: String,
    },

    #[error("line {line}: agent '{name}' has {bids} bids but {costs} costs")]
    RecordLengthMismatch {
        line: usize,
        name: String,
        bids: usize,
        costs: usize,
    },

    #[error("found {count} agent records, they must come in pairs")]
    UnpairedRecord { count: usize },

    #[error("line {line}: agent '{name}' has {found} rounds, expected {expected}")]
    InconsistentSeriesLength {
        line: usize,
        name: String,
        expected: usize,
        found: usize,
    },

    #[error("no agent bid histories found in log")]
    NoRecords,

    #[error("could not read log: {0}")]
    Io(#[from] std::io::Error),
}
