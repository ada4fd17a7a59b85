//! Row writers, highlight tables and dropdown lists shared by the sheets

use super::plan::{
    CellRange, CellValue, Condition, ConditionalRule, HAlign, SheetPlan, Style, VAlign,
    ValidationRule,
};
use super::{col, HEADERS};
use crate::types::PaletteColor::{
    Amber, Black, Blue500, Gray700, Green500, LightGray, Red, Red600, White,
};
use crate::types::{AgentIdea, Complexity, Impact, PaletteColor, Priority, Status};

pub(super) fn header_style() -> Style {
    Style::new()
        .size(11)
        .bold()
        .color(White)
        .fill(PaletteColor::DarkGray)
        .align(HAlign::Center)
        .valign(VAlign::Middle)
}

pub(super) fn write_header_row(sheet: &mut SheetPlan, row: u32) {
    for (c, header) in HEADERS.iter().enumerate() {
        sheet.write(row, c as u16, CellValue::text(*header), header_style());
    }
}

fn agent_cell_style(column: u16) -> Style {
    let base = Style::new().size(10);
    match column {
        col::DESCRIPTION | col::NOTES => base.wrap().align(HAlign::Left).valign(VAlign::Top),
        col::PRIORITY
        | col::TIME_SAVED
        | col::IMPACT
        | col::COMPLEXITY
        | col::STATUS
        | col::QUICK_WIN => base.align(HAlign::Center).valign(VAlign::Middle),
        _ => base.align(HAlign::Left),
    }
}

/// Write one agent as ten cells in header order
pub(super) fn write_agent_row(sheet: &mut SheetPlan, row: u32, agent: &AgentIdea) {
    let priority = match agent.priority {
        Some(p) => CellValue::text(p.as_str()),
        None => CellValue::Blank,
    };
    let notes = if agent.notes.is_empty() {
        CellValue::Blank
    } else {
        CellValue::text(&agent.notes)
    };

    let values = [
        priority,
        CellValue::text(&agent.area),
        CellValue::text(&agent.name),
        CellValue::text(&agent.description),
        CellValue::text(&agent.time_saved),
        CellValue::text(agent.impact.as_str()),
        CellValue::text(agent.complexity.as_str()),
        CellValue::text(agent.status.as_str()),
        notes,
        CellValue::Bool(agent.quick_win),
    ];

    for (c, value) in values.into_iter().enumerate() {
        let c = c as u16;
        sheet.write(row, c, value, agent_cell_style(c));
    }
}

fn rule(
    range: CellRange,
    condition: Condition,
    background: PaletteColor,
    font_color: PaletteColor,
    bold: bool,
) -> ConditionalRule {
    ConditionalRule {
        range,
        condition,
        background,
        font_color,
        bold,
    }
}

/// Priority highlight keyed off the rating's leading digit
pub(super) fn priority_rules(range: CellRange) -> Vec<ConditionalRule> {
    [
        ("5", Red600, true),
        ("4", Amber, true),
        ("3", Blue500, false),
        ("2", Green500, false),
        ("1", Gray700, false),
    ]
    .into_iter()
    .map(|(digit, bg, bold)| {
        rule(range, Condition::TextContains(digit.to_string()), bg, White, bold)
    })
    .collect()
}

pub(super) fn impact_rules(range: CellRange) -> Vec<ConditionalRule> {
    Impact::ALL
        .into_iter()
        .map(|impact| {
            let (bg, fg, bold) = match impact {
                Impact::High => (Green500, White, true),
                Impact::Medium => (Amber, Black, false),
                Impact::Low => (Gray700, White, false),
            };
            rule(range, Condition::TextEquals(impact.as_str().to_string()), bg, fg, bold)
        })
        .collect()
}

pub(super) fn complexity_rules(range: CellRange) -> Vec<ConditionalRule> {
    Complexity::ALL
        .into_iter()
        .map(|complexity| {
            let (bg, fg) = match complexity {
                Complexity::Low => (Green500, White),
                Complexity::Medium => (Amber, Black),
                Complexity::High => (Red, White),
            };
            rule(range, Condition::TextEquals(complexity.as_str().to_string()), bg, fg, false)
        })
        .collect()
}

pub(super) fn status_rules(range: CellRange) -> Vec<ConditionalRule> {
    [
        Status::Complete,
        Status::InProgress,
        Status::Planning,
        Status::NotStarted,
    ]
    .into_iter()
    .map(|status| {
        let (bg, fg, bold) = match status {
            Status::Complete => (Green500, White, true),
            Status::InProgress => (Blue500, White, true),
            Status::Planning => (Amber, Black, false),
            Status::NotStarted => (LightGray, Black, false),
        };
        rule(range, Condition::TextEquals(status.as_str().to_string()), bg, fg, bold)
    })
    .collect()
}

pub(super) fn priority_list() -> ValidationRule {
    ValidationRule::List(Priority::ALL.iter().map(|p| p.as_str().to_string()).collect())
}

pub(super) fn impact_list() -> ValidationRule {
    ValidationRule::List(Impact::ALL.iter().map(|i| i.as_str().to_string()).collect())
}

pub(super) fn complexity_list() -> ValidationRule {
    ValidationRule::List(Complexity::ALL.iter().map(|c| c.as_str().to_string()).collect())
}

pub(super) fn status_list() -> ValidationRule {
    ValidationRule::List(Status::ALL.iter().map(|s| s.as_str().to_string()).collect())
}
