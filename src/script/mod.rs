//! Google Apps Script writer - WorkbookPlan → `.gs` source
//!
//! The emitted `buildAgentForce()` recreates the plan's sheets inside the
//! active spreadsheet. Formulas are written as-is and evaluated by Sheets.

use crate::error::PortfolioResult;
use crate::layout::{
    CellValue, Condition, ConditionalRule, HAlign, SheetPlan, Style, VAlign, ValidationRule,
    WorkbookPlan, FONT_FAMILY,
};
use std::fs;
use std::path::Path;
use tracing::info;

/// Entry point name of the generated script
pub const FUNCTION_NAME: &str = "buildAgentForce";

/// JavaScript string literal. JSON string syntax is valid JS.
fn js_string(text: &str) -> PortfolioResult<String> {
    Ok(serde_json::to_string(text)?)
}

/// Chained setter calls for a style, e.g. `.setFontSize(10).setWrap(true)`
fn style_calls(style: &Style) -> String {
    let mut calls = format!(".setFontFamily('{}')", FONT_FAMILY);
    if let Some(size) = style.font_size {
        calls.push_str(&format!(".setFontSize({})", size));
    }
    if style.bold {
        calls.push_str(".setFontWeight('bold')");
    }
    if style.italic {
        calls.push_str(".setFontStyle('italic')");
    }
    if style.wrap {
        calls.push_str(".setWrap(true)");
    }
    if let Some(color) = style.font_color {
        calls.push_str(&format!(".setFontColor('{}')", color.hex()));
    }
    if let Some(color) = style.background {
        calls.push_str(&format!(".setBackground('{}')", color.hex()));
    }
    match style.align {
        Some(HAlign::Left) => calls.push_str(".setHorizontalAlignment('left')"),
        Some(HAlign::Center) => calls.push_str(".setHorizontalAlignment('center')"),
        None => {}
    }
    match style.valign {
        Some(VAlign::Top) => calls.push_str(".setVerticalAlignment('top')"),
        Some(VAlign::Middle) => calls.push_str(".setVerticalAlignment('middle')"),
        None => {}
    }
    calls
}

fn rule_expr(sheet_var: &str, rule: &ConditionalRule) -> PortfolioResult<String> {
    let when = match &rule.condition {
        Condition::TextContains(text) => format!(".whenTextContains({})", js_string(text)?),
        Condition::TextEquals(text) => format!(".whenTextEqualTo({})", js_string(text)?),
    };
    let bold = if rule.bold { ".setBold(true)" } else { "" };
    Ok(format!(
        "SpreadsheetApp.newConditionalFormatRule(){}.setBackground('{}').setFontColor('{}'){}.setRanges([{}.getRange('{}')]).build()",
        when,
        rule.background.hex(),
        rule.font_color.hex(),
        bold,
        sheet_var,
        rule.range.a1()
    ))
}

/// Renders a workbook plan as an Apps Script function
pub struct AppsScriptWriter {
    plan: WorkbookPlan,
}

impl AppsScriptWriter {
    pub fn new(plan: WorkbookPlan) -> Self {
        Self { plan }
    }

    /// Script source text
    pub fn render(&self) -> PortfolioResult<String> {
        let mut lines = vec![
            format!("function {}() {{", FUNCTION_NAME),
            "  const ss = SpreadsheetApp.getActiveSpreadsheet();".to_string(),
            String::new(),
            "  // Recreate sheets cleanly".to_string(),
        ];

        let names = self
            .plan
            .sheets
            .iter()
            .map(|s| js_string(&s.name))
            .collect::<PortfolioResult<Vec<_>>>()?;
        lines.push(format!("  [{}].forEach(name => {{", names.join(", ")));
        lines.push("    const existing = ss.getSheetByName(name);".to_string());
        lines.push("    if (existing) ss.deleteSheet(existing);".to_string());
        lines.push("  });".to_string());

        for (i, sheet) in self.plan.sheets.iter().enumerate() {
            lines.push(String::new());
            self.render_sheet(&mut lines, &format!("sheet{}", i), sheet)?;
        }

        if !self.plan.sheets.is_empty() {
            lines.push(String::new());
            lines.push("  ss.setActiveSheet(sheet0);".to_string());
        }
        lines.push("}".to_string());

        let mut source = lines.join("\n");
        source.push('\n');
        Ok(source)
    }

    fn render_sheet(
        &self,
        lines: &mut Vec<String>,
        var: &str,
        sheet: &SheetPlan,
    ) -> PortfolioResult<()> {
        lines.push(format!("  // === {} ===", sheet.name.to_uppercase()));
        lines.push(format!(
            "  const {} = ss.insertSheet({});",
            var,
            js_string(&sheet.name)?
        ));

        for range_format in &sheet.range_formats {
            lines.push(format!(
                "  {}.getRange('{}'){};",
                var,
                range_format.range.a1(),
                style_calls(&range_format.style)
            ));
        }

        for merge in &sheet.merges {
            lines.push(format!(
                "  {}.getRange('{}').merge().setValue({}){};",
                var,
                merge.range.a1(),
                js_string(&merge.text)?,
                style_calls(&merge.style)
            ));
        }

        for cell in &sheet.cells {
            let value = match &cell.value {
                CellValue::Blank => String::new(),
                // Plain text format keeps "5 - Critical" or "=x" from being parsed
                CellValue::Text(text) => {
                    format!(".setNumberFormat('@').setValue({})", js_string(text)?)
                }
                CellValue::Bool(flag) => format!(".setValue({})", flag),
                CellValue::Formula(formula) | CellValue::SpillFormula(formula) => {
                    format!(".setFormula({})", js_string(formula)?)
                }
            };
            lines.push(format!(
                "  {}.getRange('{}'){}{};",
                var,
                cell.cell.a1(),
                value,
                style_calls(&cell.style)
            ));
        }

        for &(col, width) in &sheet.column_widths {
            lines.push(format!("  {}.setColumnWidth({}, {});", var, col + 1, width));
        }
        for &(row, height) in &sheet.row_heights {
            lines.push(format!("  {}.setRowHeight({}, {});", var, row + 1, height));
        }
        if sheet.frozen_rows > 0 {
            lines.push(format!("  {}.setFrozenRows({});", var, sheet.frozen_rows));
        }

        for validation in &sheet.validations {
            let requirement = match &validation.rule {
                ValidationRule::List(items) => {
                    let items = items
                        .iter()
                        .map(|item| js_string(item))
                        .collect::<PortfolioResult<Vec<_>>>()?;
                    format!(".requireValueInList([{}], true)", items.join(", "))
                }
                ValidationRule::Checkbox => ".requireCheckbox()".to_string(),
            };
            lines.push(format!(
                "  {}.getRange('{}').setDataValidation(SpreadsheetApp.newDataValidation(){}.build());",
                var,
                validation.range.a1(),
                requirement
            ));
        }

        if !sheet.conditional_rules.is_empty() {
            lines.push(format!("  {}.setConditionalFormatRules([", var));
            for rule in &sheet.conditional_rules {
                lines.push(format!("    {},", rule_expr(var, rule)?));
            }
            lines.push("  ]);".to_string());
        }

        Ok(())
    }

    /// Write the script to `path`, creating parent directories
    pub fn write(&self, path: &Path) -> PortfolioResult<()> {
        let source = self.render()?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, source)?;
        info!(path = %path.display(), "apps script written");
        Ok(())
    }
}
