//! Agent Portfolio - AI agent idea tracker as a spreadsheet
//!
//! This library turns a portfolio of candidate AI agents into a three-sheet
//! workbook: the full portfolio with a dashboard, a Quick Wins view and a
//! Build Roadmap.
//!
//! # Features
//!
//! - Built-in portfolio of 39 agents in 9 categories, editable as YAML
//! - One backend-neutral layout rendered two ways
//! - Excel `.xlsx` export with dropdowns, highlights and live formulas
//! - Google Apps Script export that rebuilds the sheets inside Google Sheets
//! - Read-back inspection of generated workbooks
//!
//! # Example
//!
//! ```no_run
//! use agent_portfolio::catalog;
//! use agent_portfolio::excel::ExcelExporter;
//! use agent_portfolio::layout::{build_workbook, LayoutOptions};
//! use std::path::Path;
//!
//! let portfolio = catalog::builtin()?;
//! println!("Agents: {}", portfolio.agent_count());
//!
//! let plan = build_workbook(&portfolio, &LayoutOptions::default())?;
//! ExcelExporter::new(plan).export(Path::new("sheets/Agent_Portfolio.xlsx"))?;
//! # Ok::<(), agent_portfolio::error::PortfolioError>(())
//! ```

pub mod catalog;
pub mod cli;
pub mod error;
pub mod excel;
pub mod layout;
pub mod parser;
pub mod script;
pub mod summary;
pub mod types;
pub mod writer;

// Re-export commonly used types
pub use error::{PortfolioError, PortfolioResult};
pub use types::{AgentIdea, Category, Portfolio};
