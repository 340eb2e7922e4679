use crate::errors::ExtractError;

/// One agent's bid and cost history for a tournament, as logged at its end
#[derive(Debug, Clone, PartialEq)]
pub struct AgentRecord {
    pub name: String,
    pub bids: Vec<f64>,
    pub costs: Vec<f64>,
    /// 1-based line of the bid history in the log
    pub line: usize,
}

impl AgentRecord {
    /// Build a record, rejecting bid and cost histories of different length
    pub fn new(name: String, bids: Vec<f64>, costs: Vec<f64>, line: usize) -> Result<Self, ExtractError> {
        if bids.len() != costs.len() {
            return Err(ExtractError::RecordLengthMismatch {
                line,
                name,
                bids: bids.len(),
                costs: costs.len(),
            });
        }
        Ok(Self { name, bids, costs, line })
    }

    /// Number of auction rounds in this record
    pub fn rounds(&self) -> usize {
        self.bids.len()
    }

    /// Per-round margin `bid - cost`, whether or not the round was won
    pub fn raw_gains(&self) -> Vec<f64> {
        self.bids.iter()
            .zip(self.costs.iter())
            .map(|(bid, cost)| bid - cost)
            .collect()
    }
}

/// Two consecutive records of the log: one tournament between two agents
#[derive(Debug, Clone, PartialEq)]
pub struct ExperimentPair {
    pub first: AgentRecord,
    pub second: AgentRecord,
}

impl ExperimentPair {
    pub fn rounds(&self) -> usize {
        self.first.rounds()
    }
}
