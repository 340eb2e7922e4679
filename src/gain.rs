//! Round-by-round replay of a sealed-bid tournament between two agents.
//!
//! Every round is a reverse auction over one task: the lower bid wins and the
//! winner earns its margin `bid - cost`. The loser earns nothing that round.

use crate::logger::{Logger, LogEvent};
use crate::records::ExperimentPair;
use crate::logln;

/// Which agent of a pair won a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bidder {
    First,
    Second,
}

/// How a round with equal bids is awarded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum TieBreak {
    /// Ties go to the second agent of the pair
    #[default]
    Second,
    /// Ties go to the first agent of the pair
    First,
}

impl TieBreak {
    /// Winner of a round, lowest bid wins
    pub fn winner(self, bid_1: f64, bid_2: f64) -> Bidder {
        match self {
            TieBreak::Second => if bid_1 < bid_2 { Bidder::First } else { Bidder::Second },
            TieBreak::First => if bid_2 < bid_1 { Bidder::Second } else { Bidder::First },
        }
    }
}

/// Gains of both agents over one tournament, indexed by round
#[derive(Debug, Clone, PartialEq)]
pub struct GainSeries {
    /// `bid - cost` per round, won or not
    pub raw_gain_1: Vec<f64>,
    pub raw_gain_2: Vec<f64>,
    pub cumulative_gain_1: Vec<f64>,
    pub cumulative_gain_2: Vec<f64>,
    pub winners: Vec<Bidder>,
}

impl GainSeries {
    pub fn rounds_won(&self, bidder: Bidder) -> usize {
        self.winners.iter().filter(|w| **w == bidder).count()
    }

    /// Total gain at the end of the tournament
    pub fn final_gains(&self) -> (f64, f64) {
        (
            self.cumulative_gain_1.last().copied().unwrap_or(0.0),
            self.cumulative_gain_2.last().copied().unwrap_or(0.0),
        )
    }
}

/// Replay the tournament and accumulate each agent's gain
pub fn compute_gains(pair: &ExperimentPair, tie_break: TieBreak, logger: &mut Logger) -> GainSeries {
    let n = pair.rounds();
    let (first, second) = (&pair.first, &pair.second);

    let mut cumulative_gain_1 = Vec::with_capacity(n);
    let mut cumulative_gain_2 = Vec::with_capacity(n);
    let mut winners = Vec::with_capacity(n);
    let (mut total_1, mut total_2) = (0.0, 0.0);

    for i in 0..n {
        let winner = tie_break.winner(first.bids[i], second.bids[i]);
        let (gain_1, gain_2) = match winner {
            Bidder::First => (first.bids[i] - first.costs[i], 0.0),
            Bidder::Second => (0.0, second.bids[i] - second.costs[i]),
        };
        total_1 += gain_1;
        total_2 += gain_2;

        logln!(logger, LogEvent::Round, "Round {}: bids {:.2} vs {:.2}, winner {:?}, gains {:.2} / {:.2}",
            i, first.bids[i], second.bids[i], winner, gain_1, gain_2);

        cumulative_gain_1.push(total_1);
        cumulative_gain_2.push(total_2);
        winners.push(winner);
    }

    GainSeries {
        raw_gain_1: first.raw_gains(),
        raw_gain_2: second.raw_gains(),
        cumulative_gain_1,
        cumulative_gain_2,
        winners,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::AgentRecord;
    use approx::assert_relative_eq;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    fn pair(bids_1: Vec<f64>, costs_1: Vec<f64>, bids_2: Vec<f64>, costs_2: Vec<f64>) -> ExperimentPair {
        ExperimentPair {
            first: AgentRecord::new("A".to_string(), bids_1, costs_1, 1).unwrap(),
            second: AgentRecord::new("B".to_string(), bids_2, costs_2, 3).unwrap(),
        }
    }

    #[test]
    fn test_two_round_tournament() {
        let pair = pair(vec![10.0, 5.0], vec![4.0, 4.0], vec![12.0, 5.0], vec![6.0, 2.0]);
        let mut logger = Logger::new();
        let gains = compute_gains(&pair, TieBreak::default(), &mut logger);

        assert_eq!(gains.cumulative_gain_1, vec![6.0, 6.0]);
        assert_eq!(gains.cumulative_gain_2, vec![0.0, 3.0]);
        assert_eq!(gains.winners, vec![Bidder::First, Bidder::Second]);
        assert_eq!(gains.raw_gain_1, vec![6.0, 1.0]);
        assert_eq!(gains.raw_gain_2, vec![6.0, 3.0]);
        assert_eq!(gains.final_gains(), (6.0, 3.0));
        assert_eq!(gains.rounds_won(Bidder::First), 1);
    }

    #[test]
    fn test_tie_goes_to_second_agent() {
        let pair = pair(vec![5.0], vec![1.0], vec![5.0], vec![2.0]);
        let mut logger = Logger::new();
        let gains = compute_gains(&pair, TieBreak::Second, &mut logger);

        assert_eq!(gains.cumulative_gain_1, vec![0.0]);
        assert_eq!(gains.cumulative_gain_2, vec![3.0]);
    }

    #[test]
    fn test_first_agent_tie_break() {
        let pair = pair(vec![5.0, 3.0], vec![1.0, 1.0], vec![5.0, 2.0], vec![2.0, 1.0]);
        let mut logger = Logger::new();
        let gains = compute_gains(&pair, TieBreak::First, &mut logger);

        assert_eq!(gains.winners, vec![Bidder::First, Bidder::Second]);
        assert_eq!(gains.cumulative_gain_1, vec![4.0, 4.0]);
        assert_eq!(gains.cumulative_gain_2, vec![0.0, 1.0]);
    }

    #[test]
    fn test_winning_below_cost_loses_money() {
        let pair = pair(vec![2.0, 2.0], vec![5.0, 5.0], vec![9.0, 9.0], vec![1.0, 1.0]);
        let mut logger = Logger::new();
        let gains = compute_gains(&pair, TieBreak::default(), &mut logger);

        assert_eq!(gains.cumulative_gain_1, vec![-3.0, -6.0]);
        assert_eq!(gains.cumulative_gain_2, vec![0.0, 0.0]);
    }

    #[test]
    fn test_empty_tournament() {
        let pair = pair(Vec::new(), Vec::new(), Vec::new(), Vec::new());
        let mut logger = Logger::new();
        let gains = compute_gains(&pair, TieBreak::default(), &mut logger);

        assert!(gains.cumulative_gain_1.is_empty());
        assert!(gains.cumulative_gain_2.is_empty());
        assert_eq!(gains.final_gains(), (0.0, 0.0));
    }

    #[test]
    fn test_only_round_winner_contributes() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut logger = Logger::new();

        for _ in 0..50 {
            let n = rng.gen_range(1..40);
            // Small integer bids so ties show up regularly
            let mut series = || (0..n).map(|_| rng.gen_range(0..8) as f64 + 0.25).collect::<Vec<f64>>();
            let (b1, c1, b2, c2) = (series(), series(), series(), series());
            let pair = pair(b1.clone(), c1.clone(), b2.clone(), c2.clone());
            let gains = compute_gains(&pair, TieBreak::Second, &mut logger);

            assert_eq!(gains.cumulative_gain_1.len(), n);
            assert_eq!(gains.cumulative_gain_2.len(), n);

            let mut previous = 0.0;
            for i in 0..n {
                let expected = if b1[i] < b2[i] { b1[i] - c1[i] } else { b2[i] - c2[i] };
                let total = gains.cumulative_gain_1[i] + gains.cumulative_gain_2[i];
                assert_relative_eq!(total, previous + expected, epsilon = 1e-9);
                previous = total;
            }
        }
    }
}
