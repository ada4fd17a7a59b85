//! Portfolio statistics for the `summary` command

use crate::types::{AgentIdea, Complexity, Impact, Portfolio, Status};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub label: String,
    pub agents: usize,
    pub quick_wins: usize,
}

/// Counts over the whole portfolio. Enum tallies list every variant, zeros
/// included, in dropdown order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PortfolioSummary {
    pub title: String,
    pub total: usize,
    pub quick_wins: usize,
    pub by_category: Vec<CategoryCount>,
    pub by_impact: Vec<(String, usize)>,
    pub by_complexity: Vec<(String, usize)>,
    pub by_status: Vec<(String, usize)>,
    pub quick_win_hours: String,
    pub total_hours: String,
}

impl PortfolioSummary {
    pub fn from_portfolio(portfolio: &Portfolio) -> Self {
        let by_category = portfolio
            .categories
            .iter()
            .map(|c| CategoryCount {
                label: c.label.clone(),
                agents: c.agents.len(),
                quick_wins: c.agents.iter().filter(|a| a.quick_win).count(),
            })
            .collect();

        let tally = |matches: &dyn Fn(&AgentIdea) -> bool| {
            portfolio.agents().filter(|(_, a)| matches(*a)).count()
        };

        let by_impact = Impact::ALL
            .iter()
            .map(|&i| (i.to_string(), tally(&|a| a.impact == i)))
            .collect();
        let by_complexity = Complexity::ALL
            .iter()
            .map(|&c| (c.to_string(), tally(&|a| a.complexity == c)))
            .collect();
        let by_status = Status::ALL
            .iter()
            .map(|&s| (s.to_string(), tally(&|a| a.status == s)))
            .collect();

        Self {
            title: portfolio.title.clone(),
            total: portfolio.agent_count(),
            quick_wins: portfolio.quick_wins().count(),
            by_category,
            by_impact,
            by_complexity,
            by_status,
            quick_win_hours: portfolio.dashboard.quick_win_hours.clone(),
            total_hours: portfolio.dashboard.total_hours.clone(),
        }
    }
}
