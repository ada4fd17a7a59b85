//! "Agent Portfolio" sheet: banner, agent table and summary dashboard

use super::plan::{CellRange, CellValue, HAlign, SheetPlan, Style, VAlign, ValidationRule};
use super::rules;
use super::{col, COLUMN_WIDTHS, SHEET_MAIN};
use crate::types::{PaletteColor, Portfolio};

const TITLE_ROW: u32 = 0;
const SUMMARY_ROW: u32 = 1;
const INSTRUCTIONS_ROW: u32 = 3;
const HEADER_ROW: u32 = 5;
const FIRST_DATA_ROW: u32 = 6;

/// Dashboard columns L:N
const DASH_LABEL: u16 = 11;
const DASH_VALUE: u16 = 12;
const DASH_LAST: u16 = 13;
const DASH_WIDTHS: [u16; 3] = [140, 200, 120];

/// Where the agent table landed. Other sheets reference it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MainSheetLayout {
    pub first_data_row: u32,
    /// Row of the last agent
    pub last_data_row: u32,
}

impl MainSheetLayout {
    /// One table column over the data rows, e.g. `C7:C62`
    pub fn data_column(&self, column: u16) -> CellRange {
        CellRange::column(column, self.first_data_row, self.last_data_row)
    }
}

pub(super) fn build(portfolio: &Portfolio) -> (SheetPlan, MainSheetLayout) {
    let mut sheet = SheetPlan::new(SHEET_MAIN);

    write_banner(&mut sheet, portfolio);

    rules::write_header_row(&mut sheet, HEADER_ROW);
    sheet.frozen_rows = HEADER_ROW + 1;
    sheet.set_column_widths(0, &COLUMN_WIDTHS);

    let last_data_row = write_categories(&mut sheet, portfolio);
    let layout = MainSheetLayout {
        first_data_row: FIRST_DATA_ROW,
        last_data_row,
    };

    add_validations(&mut sheet, &layout);
    add_highlights(&mut sheet, &layout);
    write_dashboard(&mut sheet, portfolio, &layout);

    (sheet, layout)
}

fn write_banner(sheet: &mut SheetPlan, portfolio: &Portfolio) {
    let banner = |row| CellRange::row(row, 0, col::LAST);
    let centered = Style::new().align(HAlign::Center).valign(VAlign::Middle).wrap();

    sheet.merge(
        banner(TITLE_ROW),
        &portfolio.title,
        centered
            .clone()
            .size(24)
            .bold()
            .color(PaletteColor::White)
            .fill(PaletteColor::PurpleGrad),
    );
    sheet.set_row_height(TITLE_ROW, 72);

    sheet.merge(
        banner(SUMMARY_ROW),
        &portfolio.summary,
        centered.clone().size(14).fill(PaletteColor::LightPurple),
    );
    sheet.set_row_height(SUMMARY_ROW, 60);

    sheet.merge(
        banner(INSTRUCTIONS_ROW),
        &portfolio.instructions,
        centered.size(12).italic().fill(PaletteColor::LightBlue),
    );
}

/// Category bands and agent rows, one blank row between categories.
/// Returns the row of the last agent.
fn write_categories(sheet: &mut SheetPlan, portfolio: &Portfolio) -> u32 {
    let mut row = FIRST_DATA_ROW;
    let mut last_agent_row = FIRST_DATA_ROW;

    for (i, category) in portfolio.categories.iter().enumerate() {
        if i > 0 {
            row += 1;
        }

        sheet.merge(
            CellRange::row(row, 0, col::LAST),
            &category.label,
            Style::new()
                .size(12)
                .bold()
                .color(category.font_color)
                .fill(category.color)
                .align(HAlign::Left)
                .valign(VAlign::Middle),
        );
        row += 1;

        for agent in &category.agents {
            rules::write_agent_row(sheet, row, agent);
            last_agent_row = row;
            row += 1;
        }
    }

    last_agent_row
}

fn add_validations(sheet: &mut SheetPlan, layout: &MainSheetLayout) {
    sheet.validate(layout.data_column(col::PRIORITY), rules::priority_list());
    sheet.validate(layout.data_column(col::IMPACT), rules::impact_list());
    sheet.validate(layout.data_column(col::COMPLEXITY), rules::complexity_list());
    sheet.validate(layout.data_column(col::STATUS), rules::status_list());
    sheet.validate(layout.data_column(col::QUICK_WIN), ValidationRule::Checkbox);
}

fn add_highlights(sheet: &mut SheetPlan, layout: &MainSheetLayout) {
    let rules = [
        rules::priority_rules(layout.data_column(col::PRIORITY)),
        rules::impact_rules(layout.data_column(col::IMPACT)),
        rules::complexity_rules(layout.data_column(col::COMPLEXITY)),
        rules::status_rules(layout.data_column(col::STATUS)),
    ];
    sheet.conditional_rules.extend(rules.into_iter().flatten());
}

fn write_dashboard(sheet: &mut SheetPlan, portfolio: &Portfolio, layout: &MainSheetLayout) {
    sheet.merge(
        CellRange::row(0, DASH_LABEL, DASH_LAST),
        "📊 SUMMARY DASHBOARD",
        Style::new()
            .size(14)
            .bold()
            .color(PaletteColor::White)
            .fill(PaletteColor::DarkGray)
            .align(HAlign::Center)
            .valign(VAlign::Middle),
    );
    sheet.set_column_widths(DASH_LABEL, &DASH_WIDTHS);

    let names = layout.data_column(col::NAME).a1();
    let priority = layout.data_column(col::PRIORITY).a1();
    let complexity = layout.data_column(col::COMPLEXITY).a1();

    let label = Style::new();
    let section = Style::new().bold();

    let mut entry = |row: u32, text: &str, style: &Style, value: Option<CellValue>| {
        sheet.write(row, DASH_LABEL, CellValue::text(text), style.clone());
        if let Some(value) = value {
            sheet.write(row, DASH_VALUE, value, Style::new());
        }
    };

    entry(2, "Total Agents:", &label, Some(CellValue::formula(format!("=COUNTA({names})"))));
    entry(4, "Rated by You:", &label, Some(CellValue::formula(format!("=COUNTA({priority})"))));
    entry(
        5,
        "Avg Priority:",
        &label,
        Some(CellValue::formula(format!("=IFERROR(AVERAGE({priority}),\"\")"))),
    );

    entry(7, "TIME SAVINGS:", &section, None);
    entry(8, "Quick Wins:", &label, Some(CellValue::text(&portfolio.dashboard.quick_win_hours)));
    entry(9, "Total Possible:", &label, Some(CellValue::text(&portfolio.dashboard.total_hours)));

    entry(11, "COMPLEXITY:", &section, None);
    for (i, level) in ["Low", "Medium", "High"].into_iter().enumerate() {
        entry(
            12 + i as u32,
            &format!("{level}:"),
            &label,
            Some(CellValue::formula(format!("=COUNTIF({complexity},\"{level}\")"))),
        );
    }

    entry(16, "TOP 5 PRIORITIES:", &section, None);
    for k in 1..=5u32 {
        let nth = if k == 1 {
            format!("MAX({priority})")
        } else {
            format!("LARGE({priority},{k})")
        };
        entry(
            16 + k,
            &format!("{k}."),
            &label,
            Some(CellValue::formula(format!(
                "=IFERROR(INDEX({names}, MATCH({nth}, {priority}, 0)), \"\")"
            ))),
        );
    }
}
