//! Read a generated workbook back with calamine

use crate::error::{PortfolioError, PortfolioResult};
use crate::layout::{col, HEADERS, SHEET_MAIN};
use calamine::{open_workbook, Data, Range, Reader, Xlsx};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SheetReport {
    pub name: String,
    pub rows: usize,
    pub cols: usize,
    pub formulas: usize,
}

/// What a workbook on disk contains
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkbookReport {
    pub sheets: Vec<SheetReport>,
    pub agents: usize,
    pub quick_wins: usize,
}

impl WorkbookReport {
    pub fn sheet_names(&self) -> Vec<&str> {
        self.sheets.iter().map(|s| s.name.as_str()).collect()
    }
}

pub struct WorkbookInspector {
    path: PathBuf,
}

impl WorkbookInspector {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn inspect(&self) -> PortfolioResult<WorkbookReport> {
        let mut workbook: Xlsx<_> = open_workbook(&self.path).map_err(|e| {
            PortfolioError::Import(format!(
                "Failed to open Excel file '{}': {}",
                self.path.display(),
                e
            ))
        })?;

        let mut sheets = Vec::new();
        let mut counts = None;

        for name in workbook.sheet_names() {
            let range = workbook.worksheet_range(&name).map_err(|e| {
                PortfolioError::Import(format!("Failed to read sheet '{}': {}", name, e))
            })?;
            let formulas = workbook
                .worksheet_formula(&name)
                .map_err(|e| {
                    PortfolioError::Import(format!(
                        "Failed to read formulas in '{}': {}",
                        name, e
                    ))
                })?
                .used_cells()
                .filter(|(_, _, formula)| !formula.is_empty())
                .count();

            if name == SHEET_MAIN {
                counts = Some(Self::count_agents(&range));
            }

            let (rows, cols) = range.get_size();
            debug!(sheet = %name, rows, cols, formulas, "sheet inspected");
            sheets.push(SheetReport {
                name,
                rows,
                cols,
                formulas,
            });
        }

        let (agents, quick_wins) = counts.ok_or_else(|| {
            PortfolioError::Import(format!("Workbook has no '{}' sheet", SHEET_MAIN))
        })?;

        Ok(WorkbookReport {
            sheets,
            agents,
            quick_wins,
        })
    }

    /// Count agent rows below the table header: a named row with a boolean
    /// quick-win flag. Category bands and blank rows have neither.
    fn count_agents(range: &Range<Data>) -> (usize, usize) {
        let name_header = HEADERS[col::NAME as usize];
        let flag_header = HEADERS[col::QUICK_WIN as usize];

        let mut rows = range.rows();
        let header = rows.by_ref().find(|row| {
            row.iter()
                .any(|cell| matches!(cell, Data::String(s) if s == name_header))
        });
        let Some(header) = header else {
            return (0, 0);
        };

        let position = |title: &str| {
            header
                .iter()
                .position(|cell| matches!(cell, Data::String(s) if s == title))
        };
        let (Some(name_col), Some(flag_col)) = (position(name_header), position(flag_header)) else {
            return (0, 0);
        };

        let mut agents = 0;
        let mut quick_wins = 0;
        for row in rows {
            let named = matches!(row.get(name_col), Some(Data::String(s)) if !s.is_empty());
            if let (true, Some(Data::Bool(flag))) = (named, row.get(flag_col)) {
                agents += 1;
                if *flag {
                    quick_wins += 1;
                }
            }
        }
        (agents, quick_wins)
    }
}
