//! Backend-neutral description of a workbook
//!
//! Rows and columns are 0-based, matching `rust_xlsxwriter`. Renderers turn
//! them into A1 notation where needed.

use crate::excel::FormulaTranslator;
use crate::types::PaletteColor;
use std::fmt;

/// Font family applied to every styled cell
pub const FONT_FAMILY: &str = "Arial";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellRef {
    pub row: u32,
    pub col: u16,
}

impl CellRef {
    pub const fn new(row: u32, col: u16) -> Self {
        Self { row, col }
    }

    /// A1 notation, e.g. (6, 2) → `C7`
    pub fn a1(&self) -> String {
        FormulaTranslator::cell_to_a1(self.row, self.col)
    }
}

impl fmt::Display for CellRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.a1())
    }
}

/// Inclusive rectangular range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellRange {
    pub first: CellRef,
    pub last: CellRef,
}

impl CellRange {
    pub const fn new(first_row: u32, first_col: u16, last_row: u32, last_col: u16) -> Self {
        Self {
            first: CellRef::new(first_row, first_col),
            last: CellRef::new(last_row, last_col),
        }
    }

    /// Single column spanning `first_row..=last_row`
    pub const fn column(col: u16, first_row: u32, last_row: u32) -> Self {
        Self::new(first_row, col, last_row, col)
    }

    /// Single row spanning `first_col..=last_col`
    pub const fn row(row: u32, first_col: u16, last_col: u16) -> Self {
        Self::new(row, first_col, row, last_col)
    }

    pub fn a1(&self) -> String {
        format!("{}:{}", self.first.a1(), self.last.a1())
    }

    pub fn contains(&self, cell: CellRef) -> bool {
        (self.first.row..=self.last.row).contains(&cell.row)
            && (self.first.col..=self.last.col).contains(&cell.col)
    }
}

impl fmt::Display for CellRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.a1())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HAlign {
    Left,
    Center,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VAlign {
    Top,
    Middle,
}

/// Cell formatting. Unset fields keep the host's defaults.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Style {
    pub font_size: Option<u8>,
    pub bold: bool,
    pub italic: bool,
    pub wrap: bool,
    pub font_color: Option<PaletteColor>,
    pub background: Option<PaletteColor>,
    pub align: Option<HAlign>,
    pub valign: Option<VAlign>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(mut self, size: u8) -> Self {
        self.font_size = Some(size);
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    pub fn wrap(mut self) -> Self {
        self.wrap = true;
        self
    }

    pub fn color(mut self, color: PaletteColor) -> Self {
        self.font_color = Some(color);
        self
    }

    pub fn fill(mut self, color: PaletteColor) -> Self {
        self.background = Some(color);
        self
    }

    pub fn align(mut self, align: HAlign) -> Self {
        self.align = Some(align);
        self
    }

    pub fn valign(mut self, valign: VAlign) -> Self {
        self.valign = Some(valign);
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Blank,
    Text(String),
    Bool(bool),
    /// Formula in plain spreadsheet syntax, leading `=` included
    Formula(String),
    /// Dynamic-array formula whose result spills into neighbouring cells
    SpillFormula(String),
}

impl CellValue {
    pub fn text(value: impl Into<String>) -> Self {
        CellValue::Text(value.into())
    }

    pub fn formula(value: impl Into<String>) -> Self {
        CellValue::Formula(value.into())
    }

    pub fn as_formula(&self) -> Option<&str> {
        match self {
            CellValue::Formula(f) | CellValue::SpillFormula(f) => Some(f),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CellWrite {
    pub cell: CellRef,
    pub value: CellValue,
    pub style: Style,
}

/// Merged block holding a single text value
#[derive(Debug, Clone, PartialEq)]
pub struct Merge {
    pub range: CellRange,
    pub text: String,
    pub style: Style,
}

/// Style applied to a block before any value is written into it
#[derive(Debug, Clone, PartialEq)]
pub struct RangeFormat {
    pub range: CellRange,
    pub style: Style,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ValidationRule {
    List(Vec<String>),
    Checkbox,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Validation {
    pub range: CellRange,
    pub rule: ValidationRule,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    TextContains(String),
    TextEquals(String),
}

/// Highlight applied when a cell's text matches
#[derive(Debug, Clone, PartialEq)]
pub struct ConditionalRule {
    pub range: CellRange,
    pub condition: Condition,
    pub background: PaletteColor,
    pub font_color: PaletteColor,
    pub bold: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SheetPlan {
    pub name: String,
    pub range_formats: Vec<RangeFormat>,
    pub merges: Vec<Merge>,
    pub cells: Vec<CellWrite>,
    /// (column, width in pixels)
    pub column_widths: Vec<(u16, u16)>,
    /// (row, height in pixels)
    pub row_heights: Vec<(u32, u16)>,
    pub frozen_rows: u32,
    pub validations: Vec<Validation>,
    pub conditional_rules: Vec<ConditionalRule>,
}

impl SheetPlan {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn format_range(&mut self, range: CellRange, style: Style) {
        self.range_formats.push(RangeFormat { range, style });
    }

    pub fn merge(&mut self, range: CellRange, text: impl Into<String>, style: Style) {
        self.merges.push(Merge {
            range,
            text: text.into(),
            style,
        });
    }

    pub fn write(&mut self, row: u32, col: u16, value: CellValue, style: Style) {
        self.cells.push(CellWrite {
            cell: CellRef::new(row, col),
            value,
            style,
        });
    }

    /// Set widths for consecutive columns starting at `first_col`
    pub fn set_column_widths(&mut self, first_col: u16, widths: &[u16]) {
        self.column_widths.extend(
            widths
                .iter()
                .enumerate()
                .map(|(i, &w)| (first_col + i as u16, w)),
        );
    }

    pub fn set_row_height(&mut self, row: u32, height: u16) {
        self.row_heights.push((row, height));
    }

    pub fn validate(&mut self, range: CellRange, rule: ValidationRule) {
        self.validations.push(Validation { range, rule });
    }

    /// Value written to `cell`; the last write wins
    pub fn value_at(&self, cell: CellRef) -> Option<&CellValue> {
        self.cells
            .iter()
            .rev()
            .find(|w| w.cell == cell)
            .map(|w| &w.value)
    }

    /// Merge whose range covers `cell`
    pub fn merge_at(&self, cell: CellRef) -> Option<&Merge> {
        self.merges.iter().find(|m| m.range.contains(cell))
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkbookPlan {
    pub sheets: Vec<SheetPlan>,
}

impl WorkbookPlan {
    pub fn sheet_names(&self) -> Vec<&str> {
        self.sheets.iter().map(|s| s.name.as_str()).collect()
    }
}
