//! "Quick Wins" sheet: the quick-win agents on their own

use super::plan::{CellRange, CellValue, HAlign, SheetPlan, Style, VAlign};
use super::portfolio_sheet::MainSheetLayout;
use super::rules;
use super::{col, QuickWinsMode, COLUMN_WIDTHS, SHEET_MAIN, SHEET_QUICK};
use crate::excel::FormulaTranslator;
use crate::types::{PaletteColor, Portfolio};

const HEADER_ROW: u32 = 2;
const FIRST_ROW: u32 = 3;
/// Last row of the body area: Arial 10 throughout, and highlighted when
/// rows come from a live formula
const BODY_LAST_ROW: u32 = 999;

pub(super) fn build(
    portfolio: &Portfolio,
    main: &MainSheetLayout,
    mode: QuickWinsMode,
) -> SheetPlan {
    let mut sheet = SheetPlan::new(SHEET_QUICK);

    sheet.merge(
        CellRange::row(0, 0, col::LAST),
        "⚡ QUICK WIN AGENTS\nHigh Impact + Fast to Build",
        Style::new()
            .size(24)
            .bold()
            .wrap()
            .color(PaletteColor::White)
            .fill(PaletteColor::Amber)
            .align(HAlign::Center)
            .valign(VAlign::Middle),
    );
    sheet.set_row_height(0, 72);

    rules::write_header_row(&mut sheet, HEADER_ROW);
    sheet.frozen_rows = HEADER_ROW + 1;
    sheet.set_column_widths(0, &COLUMN_WIDTHS);
    sheet.format_range(
        CellRange::new(FIRST_ROW, 0, BODY_LAST_ROW, col::LAST),
        Style::new().size(10),
    );

    let last_row = match mode {
        QuickWinsMode::Static => {
            let mut row = FIRST_ROW;
            for agent in portfolio.quick_wins() {
                rules::write_agent_row(&mut sheet, row, agent);
                row += 1;
            }
            // Keep a one-row range when nothing qualifies
            row.saturating_sub(1).max(FIRST_ROW)
        }
        QuickWinsMode::Live => {
            sheet.write(
                FIRST_ROW,
                0,
                CellValue::SpillFormula(filter_formula(main)),
                Style::new().size(10),
            );
            BODY_LAST_ROW
        }
    };

    let rules = [
        rules::priority_rules(CellRange::column(col::PRIORITY, FIRST_ROW, last_row)),
        rules::status_rules(CellRange::column(col::STATUS, FIRST_ROW, last_row)),
    ];
    sheet.conditional_rules.extend(rules.into_iter().flatten());

    sheet
}

/// `=FILTER('Agent Portfolio'!A7:J62, 'Agent Portfolio'!J7:J62=TRUE)`
fn filter_formula(main: &MainSheetLayout) -> String {
    let table = CellRange::new(main.first_data_row, 0, main.last_data_row, col::LAST);
    let flags = main.data_column(col::QUICK_WIN);
    format!(
        "=FILTER({}, {}=TRUE)",
        FormulaTranslator::sheet_range(SHEET_MAIN, &table.a1()),
        FormulaTranslator::sheet_range(SHEET_MAIN, &flags.a1()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use crate::layout::plan::CellRef;
    use pretty_assertions::assert_eq;

    fn main_layout() -> MainSheetLayout {
        MainSheetLayout {
            first_data_row: 6,
            last_data_row: 61,
        }
    }

    #[test]
    fn test_static_rows_follow_dataset_order() {
        let portfolio = catalog::builtin().unwrap();
        let sheet = build(&portfolio, &main_layout(), QuickWinsMode::Static);

        assert_eq!(
            sheet.value_at(CellRef::new(3, col::NAME)),
            Some(&CellValue::text("Competitive Intelligence Agent"))
        );
        // 19 quick wins on rows 4..=22
        assert_eq!(
            sheet.value_at(CellRef::new(21, col::NAME)),
            Some(&CellValue::text("Calendar Optimizer"))
        );
        assert_eq!(sheet.value_at(CellRef::new(22, col::NAME)), None);
        assert!(sheet
            .conditional_rules
            .iter()
            .all(|r| r.range.first.row == 3 && r.range.last.row == 21));
    }

    #[test]
    fn test_live_mode_writes_filter() {
        let portfolio = catalog::builtin().unwrap();
        let sheet = build(&portfolio, &main_layout(), QuickWinsMode::Live);

        assert_eq!(
            sheet.value_at(CellRef::new(3, 0)),
            Some(&CellValue::SpillFormula(
                "=FILTER('Agent Portfolio'!A7:J62, 'Agent Portfolio'!J7:J62=TRUE)".to_string()
            ))
        );
        assert_eq!(sheet.conditional_rules[0].range.a1(), "A4:A1000");
        assert_eq!(sheet.conditional_rules[5].range.a1(), "H4:H1000");
        // Spilled rows inherit the pre-formatted body
        assert_eq!(sheet.range_formats.len(), 1);
        assert_eq!(sheet.range_formats[0].range.a1(), "A4:J1000");
        assert_eq!(sheet.range_formats[0].style.font_size, Some(10));
    }

    #[test]
    fn test_banner_and_headers() {
        let portfolio = catalog::builtin().unwrap();
        let sheet = build(&portfolio, &main_layout(), QuickWinsMode::Static);
        let banner = sheet.merge_at(CellRef::new(0, 0)).unwrap();
        assert_eq!(banner.style.background, Some(PaletteColor::Amber));
        assert_eq!(sheet.frozen_rows, 3);
        assert_eq!(
            sheet.column_widths,
            vec![(0, 80), (1, 150), (2, 200), (3, 350), (4, 120), (5, 120), (6, 120), (7, 100), (8, 250), (9, 80)]
        );
        assert_eq!(
            sheet.value_at(CellRef::new(2, col::QUICK_WIN)),
            Some(&CellValue::text("Quick Win?"))
        );
    }
}
