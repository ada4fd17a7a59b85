//! Built-in agent portfolio dataset
//!
//! The shipped data lives in `data/portfolio.yaml` and is compiled into the
//! binary, so `portfolio build` works with no input file.

use crate::error::PortfolioResult;
use crate::parser::parse_portfolio_str;
use crate::types::Portfolio;

/// Raw YAML of the built-in dataset
pub const BUILTIN_YAML: &str = include_str!("../data/portfolio.yaml");

/// The built-in portfolio: 9 categories, 39 agents
pub fn builtin() -> PortfolioResult<Portfolio> {
    parse_portfolio_str(BUILTIN_YAML)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Complexity, Impact, PaletteColor};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_builtin_shape() {
        let portfolio = builtin().unwrap();
        let sizes: Vec<usize> = portfolio.categories.iter().map(|c| c.agents.len()).collect();
        assert_eq!(sizes, vec![4, 4, 5, 4, 5, 6, 4, 3, 4]);
        assert_eq!(portfolio.agent_count(), 39);
        assert_eq!(portfolio.quick_wins().count(), 19);
        assert_eq!(portfolio.phases.len(), 3);
    }

    #[test]
    fn test_builtin_first_and_last_agent() {
        let portfolio = builtin().unwrap();
        let agents: Vec<_> = portfolio.agents().map(|(_, a)| a).collect();
        assert_eq!(agents[0].name, "Competitive Intelligence Agent");
        assert_eq!(agents[0].impact, Impact::High);
        assert_eq!(agents[0].complexity, Complexity::Medium);
        assert_eq!(agents[38].name, "Travel Coordinator");
        assert!(!agents[38].quick_win);
    }

    #[test]
    fn test_financial_header_uses_black_text() {
        let portfolio = builtin().unwrap();
        let financial = portfolio
            .categories
            .iter()
            .find(|c| c.label.contains("FINANCIAL"))
            .unwrap();
        assert_eq!(financial.color, PaletteColor::Yellow);
        assert_eq!(financial.font_color, PaletteColor::Black);
        let others = portfolio
            .categories
            .iter()
            .filter(|c| c.font_color == PaletteColor::White)
            .count();
        assert_eq!(others, 8);
    }

    #[test]
    fn test_builtin_banner_text() {
        let portfolio = builtin().unwrap();
        assert!(portfolio.title.starts_with("🤖 MADHAVAN'S AI AGENT FORCE\n"));
        assert_eq!(portfolio.dashboard.total_hours, "67 hrs/week");
        assert_eq!(portfolio.dashboard.quick_win_hours, "25 hrs/week");
    }
}
