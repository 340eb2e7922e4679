//! Markers and delimiters of the simulation log.
//!
//! The logs are free text written by the agents during a tournament. Records
//! are recognised only by fixed substrings, all of which live here so a log
//! from a differently configured agent can be read by changing one struct.

/// Default name of the agent whose minimum-cost lines are tracked
pub const DEFAULT_AGENT_LABEL: &str = "Ozuna";

#[derive(Debug, Clone, PartialEq)]
pub struct LogFormat {
    /// Marks a line carrying an agent's bid history
    pub bid_marker: String,
    /// Precedes the agent name on a bid history line
    pub name_prefix: String,
    /// Ends the agent name on a bid history line
    pub name_terminator: String,
    pub bid_delimiter: String,
    pub cost_delimiter: String,
    pub list_terminator: String,
    pub self_cost_marker: String,
    pub opponent_cost_marker: String,
    /// Precedes the minimum cost values, e.g. `CONFIG | Ozuna :`
    pub agent_prefix: String,
    pub margin_token: String,
}

impl LogFormat {
    /// Format for logs written by an agent with the given label
    pub fn for_agent(agent_label: &str) -> Self {
        Self {
            bid_marker: "BID HISTORIC".to_string(),
            name_prefix: "CONFIG | ".to_string(),
            name_terminator: " BID HISTORIC".to_string(),
            bid_delimiter: " BID HISTORIC: ".to_string(),
            cost_delimiter: " COST HISTORIC: ".to_string(),
            list_terminator: " ;".to_string(),
            self_cost_marker: "Minimum cost is".to_string(),
            opponent_cost_marker: "Min cost opponent".to_string(),
            agent_prefix: format!("CONFIG | {} :", agent_label),
            margin_token: "margin".to_string(),
        }
    }

    /// Agent name between the name prefix and the bid marker
    pub fn agent_name<'a>(&self, line: &'a str) -> Option<&'a str> {
        let after_prefix = after(line, &self.name_prefix)?;
        Some(before(after_prefix, &self.name_terminator))
    }

    /// List literal following the bid delimiter
    pub fn bid_literal<'a>(&self, line: &'a str) -> Option<&'a str> {
        after(line, &self.bid_delimiter).map(|rest| before(rest, &self.list_terminator))
    }

    /// List literal following the cost delimiter
    pub fn cost_literal<'a>(&self, line: &'a str) -> Option<&'a str> {
        after(line, &self.cost_delimiter).map(|rest| before(rest, &self.list_terminator))
    }

    /// Integer text of a `Minimum cost is` line: between the first and second
    /// colon after the agent prefix
    pub fn self_cost_literal<'a>(&self, line: &'a str) -> Option<&'a str> {
        let rest = after(line, &self.agent_prefix)?;
        rest.split(':').nth(1)
    }

    /// Integer text of a `Min cost opponent` line, cut at the margin token
    pub fn opponent_cost_literal<'a>(&self, line: &'a str) -> Option<&'a str> {
        self.self_cost_literal(line)
            .map(|field| before(field, &self.margin_token))
    }
}

impl Default for LogFormat {
    fn default() -> Self {
        Self::for_agent(DEFAULT_AGENT_LABEL)
    }
}

/// Text after the first occurrence of `pattern`
fn after<'a>(line: &'a str, pattern: &str) -> Option<&'a str> {
    line.find(pattern).map(|idx| &line[idx + pattern.len()..])
}

/// Text before the first occurrence of `pattern`, or all of it
fn before<'a>(line: &'a str, pattern: &str) -> &'a str {
    match line.find(pattern) {
        Some(idx) => &line[..idx],
        None => line,
    }
}
