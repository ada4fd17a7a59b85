//! "Build Roadmap" sheet: phase bands with the top-rated agents pre-filled

use super::plan::{CellRange, CellValue, HAlign, SheetPlan, Style, VAlign};
use super::portfolio_sheet::MainSheetLayout;
use super::{col, FormulaDialect, SHEET_MAIN, SHEET_ROADMAP};
use crate::excel::FormulaTranslator;
use crate::types::{PaletteColor, Portfolio};

const HEADERS: [&str; 9] = [
    "Phase",
    "Agent Name",
    "Priority Score",
    "Time Saved",
    "Build Time",
    "Dependencies",
    "Start Date",
    "Launch Date",
    "Owner",
];
const WIDTHS: [u16; 9] = [120, 300, 140, 120, 120, 220, 120, 120, 160];
const LAST_COL: u16 = 8;

const HEADER_ROW: u32 = 2;
/// Last row of the Arial 10 body area (row 30)
const BODY_LAST_ROW: u32 = 29;
const FIRST_PHASE_ROW: u32 = 3;
/// Rows reserved under each phase band
const SLOTS_PER_PHASE: u32 = 5;
const AGENT_NAME_COL: u16 = 1;

pub(super) fn build(
    portfolio: &Portfolio,
    main: &MainSheetLayout,
    dialect: FormulaDialect,
) -> SheetPlan {
    let mut sheet = SheetPlan::new(SHEET_ROADMAP);

    sheet.merge(
        CellRange::row(0, 0, LAST_COL),
        "🚀 AGENT BUILD ROADMAP",
        Style::new()
            .size(24)
            .bold()
            .color(PaletteColor::White)
            .fill(PaletteColor::PurpleGrad)
            .align(HAlign::Center)
            .valign(VAlign::Middle),
    );

    let header = Style::new()
        .size(10)
        .bold()
        .color(PaletteColor::White)
        .fill(PaletteColor::DarkGray)
        .align(HAlign::Center);
    for (c, text) in HEADERS.iter().enumerate() {
        sheet.write(HEADER_ROW, c as u16, CellValue::text(*text), header.clone());
    }
    sheet.frozen_rows = HEADER_ROW + 1;
    sheet.set_column_widths(0, &WIDTHS);
    sheet.format_range(
        CellRange::new(HEADER_ROW, 0, BODY_LAST_ROW, LAST_COL),
        Style::new().size(10),
    );

    for (i, phase) in portfolio.phases.iter().enumerate() {
        let row = phase_row(i);
        sheet.merge(
            CellRange::row(row, 0, LAST_COL),
            format!("{}\n{}", phase.title, phase.subtitle),
            Style::new()
                .size(10)
                .bold()
                .wrap()
                .color(PaletteColor::White)
                .fill(phase.color),
        );
    }

    // The first phase starts with the owner's five highest-rated agents
    for k in 1..=SLOTS_PER_PHASE {
        sheet.write(
            FIRST_PHASE_ROW + k,
            AGENT_NAME_COL,
            CellValue::formula(top_rated_formula(main, k, dialect)),
            Style::new().size(10),
        );
    }

    sheet
}

/// Row of the band for phase `index`
pub(super) fn phase_row(index: usize) -> u32 {
    FIRST_PHASE_ROW + index as u32 * (SLOTS_PER_PHASE + 1)
}

/// Name of the k-th highest rated agent, blank when fewer are rated.
///
/// Sheets' SORT accepts a sort-key range; Excel needs SORTBY for that.
fn top_rated_formula(main: &MainSheetLayout, k: u32, dialect: FormulaDialect) -> String {
    let names = FormulaTranslator::sheet_range(SHEET_MAIN, &main.data_column(col::NAME).a1());
    let ratings = FormulaTranslator::sheet_range(SHEET_MAIN, &main.data_column(col::PRIORITY).a1());
    let rated_names = format!("FILTER({names}, {ratings}<>\"\")");
    let rated_keys = format!("FILTER({ratings}, {ratings}<>\"\")");
    let sorted = match dialect {
        FormulaDialect::Excel => format!("SORTBY({rated_names}, {rated_keys}, -1)"),
        FormulaDialect::Sheets => format!("SORT({rated_names}, {rated_keys}, FALSE)"),
    };
    format!("=IFERROR(INDEX({sorted}, {k}), \"\")")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use crate::layout::plan::CellRef;
    use pretty_assertions::assert_eq;

    const MAIN: MainSheetLayout = MainSheetLayout {
        first_data_row: 6,
        last_data_row: 61,
    };

    fn built() -> SheetPlan {
        build(&catalog::builtin().unwrap(), &MAIN, FormulaDialect::Sheets)
    }

    #[test]
    fn test_phase_rows() {
        assert_eq!(phase_row(0) + 1, 4);
        assert_eq!(phase_row(1) + 1, 10);
        assert_eq!(phase_row(2) + 1, 16);
    }

    #[test]
    fn test_phase_bands() {
        let sheet = built();
        let second = sheet.merge_at(CellRef::new(9, 3)).unwrap();
        assert_eq!(second.range.a1(), "A10:I10");
        assert_eq!(
            second.text,
            "PHASE 2: INTELLIGENCE (Weeks 5-12)\nStrategic and analytical agents"
        );
        assert_eq!(second.style.background, Some(PaletteColor::Cyan));
        let third = sheet.merge_at(CellRef::new(15, 0)).unwrap();
        assert_eq!(third.style.background, Some(PaletteColor::Green));
    }

    #[test]
    fn test_top_rated_slots() {
        let sheet = built();
        let first = sheet.value_at(CellRef::new(4, 1)).and_then(|v| v.as_formula()).unwrap();
        assert_eq!(
            first,
            "=IFERROR(INDEX(SORT(FILTER('Agent Portfolio'!C7:C62, 'Agent Portfolio'!A7:A62<>\"\"), FILTER('Agent Portfolio'!A7:A62, 'Agent Portfolio'!A7:A62<>\"\"), FALSE), 1), \"\")"
        );
        let fifth = sheet.value_at(CellRef::new(8, 1)).and_then(|v| v.as_formula()).unwrap();
        assert!(fifth.ends_with("FALSE), 5), \"\")"));
        assert!(sheet.value_at(CellRef::new(9, 1)).is_none());
    }

    #[test]
    fn test_excel_dialect_uses_sortby() {
        let sheet = build(&catalog::builtin().unwrap(), &MAIN, FormulaDialect::Excel);
        let third = sheet.value_at(CellRef::new(6, 1)).and_then(|v| v.as_formula()).unwrap();
        assert_eq!(
            third,
            "=IFERROR(INDEX(SORTBY(FILTER('Agent Portfolio'!C7:C62, 'Agent Portfolio'!A7:A62<>\"\"), FILTER('Agent Portfolio'!A7:A62, 'Agent Portfolio'!A7:A62<>\"\"), -1), 3), \"\")"
        );
    }

    #[test]
    fn test_headers_and_freeze() {
        let sheet = built();
        assert_eq!(sheet.frozen_rows, 3);
        assert_eq!(
            sheet.value_at(CellRef::new(2, 8)),
            Some(&CellValue::text("Owner"))
        );
        assert_eq!(sheet.column_widths.len(), 9);
        assert_eq!(sheet.range_formats[0].range.a1(), "A3:I30");
    }
}
