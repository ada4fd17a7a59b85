//! Workbook layout: Portfolio → WorkbookPlan
//!
//! Layout decides every cell, merge, width and rule once. The xlsx exporter
//! and the Apps Script writer only translate the resulting plan, so both
//! outputs stay identical.

mod plan;
mod portfolio_sheet;
mod quick_wins;
mod roadmap;
mod rules;

pub use plan::{
    CellRange, CellRef, CellValue, CellWrite, Condition, ConditionalRule, HAlign, Merge,
    RangeFormat, SheetPlan, Style, VAlign, Validation, ValidationRule, WorkbookPlan, FONT_FAMILY,
};
pub use portfolio_sheet::MainSheetLayout;

use crate::error::{PortfolioError, PortfolioResult};
use crate::types::Portfolio;
use tracing::debug;

pub const SHEET_MAIN: &str = "Agent Portfolio";
pub const SHEET_QUICK: &str = "Quick Wins";
pub const SHEET_ROADMAP: &str = "Build Roadmap";

/// Column headers shared by the portfolio and quick-wins tables
pub const HEADERS: [&str; 10] = [
    "Priority",
    "Area",
    "Agent Name",
    "What It Does",
    "Time Saved/Week",
    "Business Impact",
    "Build Complexity",
    "Status",
    "Your Notes",
    "Quick Win?",
];

/// Table column widths in pixels
pub const COLUMN_WIDTHS: [u16; 10] = [80, 150, 200, 350, 120, 120, 120, 100, 250, 80];

/// Table column indices
pub mod col {
    pub const PRIORITY: u16 = 0;
    pub const AREA: u16 = 1;
    pub const NAME: u16 = 2;
    pub const DESCRIPTION: u16 = 3;
    pub const TIME_SAVED: u16 = 4;
    pub const IMPACT: u16 = 5;
    pub const COMPLEXITY: u16 = 6;
    pub const STATUS: u16 = 7;
    pub const NOTES: u16 = 8;
    pub const QUICK_WIN: u16 = 9;
    pub const LAST: u16 = QUICK_WIN;
}

/// How the Quick Wins sheet gets its rows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum QuickWinsMode {
    /// Write the quick-win rows as values
    #[default]
    Static,
    /// A FILTER formula over the portfolio sheet that tracks edits
    Live,
}

/// Spreadsheet host the formulas are written for. Only matters where the
/// two hosts disagree on a function's signature.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormulaDialect {
    /// Excel and other xlsx readers
    #[default]
    Excel,
    /// Google Sheets
    Sheets,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LayoutOptions {
    pub quick_wins: QuickWinsMode,
    pub dialect: FormulaDialect,
}

/// Lay out all three sheets.
///
/// Fails when the portfolio has no agents, since every range and formula is
/// anchored on the agent rows.
pub fn build_workbook(
    portfolio: &Portfolio,
    options: &LayoutOptions,
) -> PortfolioResult<WorkbookPlan> {
    if portfolio.agent_count() == 0 {
        return Err(PortfolioError::Layout(
            "portfolio has no agents to lay out".to_string(),
        ));
    }

    let (main, main_layout) = portfolio_sheet::build(portfolio);
    let quick = quick_wins::build(portfolio, &main_layout, options.quick_wins);
    let roadmap = roadmap::build(portfolio, &main_layout, options.dialect);

    debug!(
        first_data_row = main_layout.first_data_row + 1,
        last_data_row = main_layout.last_data_row + 1,
        quick_wins = ?options.quick_wins,
        "workbook laid out"
    );

    Ok(WorkbookPlan {
        sheets: vec![main, quick, roadmap],
    })
}
