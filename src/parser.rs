use crate::catalog;
use crate::error::{PortfolioError, PortfolioResult};
use crate::types::Portfolio;
use std::path::Path;
use tracing::debug;

/// Parse a portfolio YAML document from disk.
///
/// # Example
/// ```no_run
/// use agent_portfolio::parser::parse_portfolio;
/// use std::path::Path;
///
/// let portfolio = parse_portfolio(Path::new("portfolio.yaml"))?;
/// println!("Agents: {}", portfolio.agent_count());
/// # Ok::<(), agent_portfolio::error::PortfolioError>(())
/// ```
pub fn parse_portfolio(path: &Path) -> PortfolioResult<Portfolio> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        PortfolioError::Parse(format!("Failed to read '{}': {}", path.display(), e))
    })?;
    let portfolio = parse_portfolio_str(&content)?;
    debug!(
        path = %path.display(),
        categories = portfolio.categories.len(),
        agents = portfolio.agent_count(),
        "parsed portfolio"
    );
    Ok(portfolio)
}

/// Parse a portfolio YAML document held in memory
pub fn parse_portfolio_str(content: &str) -> PortfolioResult<Portfolio> {
    serde_yaml::from_str(content).map_err(PortfolioError::Yaml)
}

/// Load `path` when given, otherwise the built-in dataset
pub fn load_portfolio(path: Option<&Path>) -> PortfolioResult<Portfolio> {
    match path {
        Some(path) => parse_portfolio(path),
        None => catalog::builtin(),
    }
}
