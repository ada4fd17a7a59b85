use crate::error::PortfolioResult;
use crate::types::Portfolio;
use std::fs;
use std::path::Path;

/// Serialize a portfolio to a YAML file, creating parent directories
pub fn write_portfolio(path: &Path, portfolio: &Portfolio) -> PortfolioResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let content = serde_yaml::to_string(portfolio)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use crate::parser::parse_portfolio;
    use tempfile::TempDir;

    #[test]
    fn test_written_portfolio_parses_back() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested/portfolio.yaml");
        let portfolio = catalog::builtin().unwrap();

        write_portfolio(&path, &portfolio).unwrap();

        let reloaded = parse_portfolio(&path).unwrap();
        assert_eq!(reloaded, portfolio);
    }

    #[test]
    fn test_written_yaml_omits_empty_fields() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("portfolio.yaml");
        write_portfolio(&path, &catalog::builtin().unwrap()).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(!content.contains("notes:"));
        assert!(!content.contains("priority:"));
        assert!(content.contains("font_color: black"));
    }
}
