//! Apps Script export tests against the built-in portfolio

use agent_portfolio::catalog;
use agent_portfolio::layout::{build_workbook, FormulaDialect, LayoutOptions, QuickWinsMode};
use agent_portfolio::script::AppsScriptWriter;

fn render(quick_wins: QuickWinsMode) -> String {
    let portfolio = catalog::builtin().unwrap();
    let options = LayoutOptions {
        quick_wins,
        dialect: FormulaDialect::Sheets,
    };
    let plan = build_workbook(&portfolio, &options).unwrap();
    AppsScriptWriter::new(plan).render().unwrap()
}

// ═══════════════════════════════════════════════════════════════════════════
// SHEET SETUP
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_recreates_all_three_sheets() {
    let source = render(QuickWinsMode::Live);
    assert!(source.contains(
        "[\"Agent Portfolio\", \"Quick Wins\", \"Build Roadmap\"].forEach(name => {"
    ));
    assert!(source.contains("const sheet0 = ss.insertSheet(\"Agent Portfolio\");"));
    assert!(source.contains("const sheet1 = ss.insertSheet(\"Quick Wins\");"));
    assert!(source.contains("const sheet2 = ss.insertSheet(\"Build Roadmap\");"));
    assert!(source.contains("ss.setActiveSheet(sheet0);"));
}

#[test]
fn test_frozen_rows_and_widths() {
    let source = render(QuickWinsMode::Live);
    assert!(source.contains("sheet0.setFrozenRows(6);"));
    assert!(source.contains("sheet1.setFrozenRows(3);"));
    assert!(source.contains("sheet2.setFrozenRows(3);"));
    assert!(source.contains("sheet0.setColumnWidth(4, 350);"));
    assert!(source.contains("sheet0.setRowHeight(1, 72);"));
}

// ═══════════════════════════════════════════════════════════════════════════
// CONTENT
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_every_agent_written() {
    let source = render(QuickWinsMode::Live);
    let portfolio = catalog::builtin().unwrap();
    for (_, agent) in portfolio.agents() {
        let literal = serde_json::to_string(&agent.name).unwrap();
        assert!(
            source.contains(&format!(".setValue({})", literal)),
            "missing {}",
            agent.name
        );
    }
}

#[test]
fn test_validations_and_rules() {
    let source = render(QuickWinsMode::Live);
    assert!(source.contains(
        "sheet0.getRange('A7:A62').setDataValidation(SpreadsheetApp.newDataValidation().requireValueInList([\"5 - Critical\", \"4 - High\", \"3 - Medium\", \"2 - Low\", \"1 - Not Now\"], true).build());"
    ));
    assert!(source.contains(
        "sheet0.getRange('J7:J62').setDataValidation(SpreadsheetApp.newDataValidation().requireCheckbox().build());"
    ));
    assert!(source.contains("sheet0.setConditionalFormatRules(["));
    assert!(source.contains(".whenTextEqualTo(\"HIGH\")"));
}

#[test]
fn test_live_and_static_quick_wins() {
    let live = render(QuickWinsMode::Live);
    assert!(live.contains(
        "sheet1.getRange('A4').setFormula(\"=FILTER('Agent Portfolio'!A7:J62, 'Agent Portfolio'!J7:J62=TRUE)\")"
    ));

    let fixed = render(QuickWinsMode::Static);
    assert!(!fixed.contains("=FILTER('Agent Portfolio'!A7:J62"));
    assert!(fixed.contains("sheet1.getRange('J4').setValue(true)"));
}

#[test]
fn test_roadmap_uses_sheets_sort() {
    let source = render(QuickWinsMode::Live);
    assert!(source.contains("sheet2.getRange('B5').setFormula(\"=IFERROR(INDEX(SORT(FILTER("));
    assert!(!source.contains("SORTBY"));
}
