use crate::errors::ExtractError;
use crate::records::{AgentRecord, ExperimentPair};

/// Group scanned records into tournaments: records `2k` and `2k + 1` form pair `k`
///
/// The first record fixes the number of rounds for the whole log; every other
/// record must match it.
pub fn pair_records(records: Vec<AgentRecord>) -> Result<Vec<ExperimentPair>, ExtractError> {
    let rounds = match records.first() {
        Some(record) => record.rounds(),
        None => return Err(ExtractError::NoRecords),
    };

    if records.len() % 2 != 0 {
        return Err(ExtractError::UnpairedRecord { count: records.len() });
    }

    if let Some(record) = records.iter().find(|r| r.rounds() != rounds) {
        return Err(ExtractError::InconsistentSeriesLength {
            line: record.line,
            name: record.name.clone(),
            expected: rounds,
            found: record.rounds(),
        });
    }

    let mut pairs = Vec::with_capacity(records.len() / 2);
    let mut iter = records.into_iter();
    while let (Some(first), Some(second)) = (iter.next(), iter.next()) {
        pairs.push(ExperimentPair { first, second });
    }
    Ok(pairs)
}
