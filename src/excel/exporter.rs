//! Excel exporter implementation - WorkbookPlan → .xlsx

use crate::error::{PortfolioError, PortfolioResult};
use crate::layout::{
    CellValue, CellWrite, Condition, ConditionalRule, HAlign, Merge, RangeFormat, SheetPlan, Style,
    VAlign, Validation, ValidationRule, WorkbookPlan, FONT_FAMILY,
};
use rust_xlsxwriter::{
    Color, ConditionalFormatFormula, DataValidation, Format, FormatAlign, Formula, Workbook,
    Worksheet, XlsxError,
};
use std::path::Path;
use tracing::{debug, info};

/// Map an `XlsxError` to an export error with context
fn export_err(context: &'static str) -> impl Fn(XlsxError) -> PortfolioError {
    move |e| PortfolioError::Export(format!("{}: {}", context, e))
}

/// Writes a laid-out workbook to an .xlsx file
pub struct ExcelExporter {
    plan: WorkbookPlan,
}

impl ExcelExporter {
    /// Create a new Excel exporter
    pub fn new(plan: WorkbookPlan) -> Self {
        Self { plan }
    }

    /// Export the plan to an Excel .xlsx file, creating parent directories
    pub fn export(&self, output_path: &Path) -> PortfolioResult<()> {
        let mut workbook = self.render()?;

        if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        workbook
            .save(output_path)
            .map_err(export_err("Failed to save Excel file"))?;

        info!(path = %output_path.display(), sheets = self.plan.sheets.len(), "workbook saved");
        Ok(())
    }

    /// Render the plan into an in-memory xlsx file
    pub fn to_buffer(&self) -> PortfolioResult<Vec<u8>> {
        let mut workbook = self.render()?;
        workbook
            .save_to_buffer()
            .map_err(export_err("Failed to serialize workbook"))
    }

    fn render(&self) -> PortfolioResult<Workbook> {
        let mut workbook = Workbook::new();
        for sheet in &self.plan.sheets {
            let worksheet = workbook.add_worksheet();
            Self::export_sheet(worksheet, sheet)?;
        }
        Ok(workbook)
    }

    /// Export a single sheet plan to a worksheet
    fn export_sheet(worksheet: &mut Worksheet, sheet: &SheetPlan) -> PortfolioResult<()> {
        worksheet
            .set_name(&sheet.name)
            .map_err(export_err("Failed to set worksheet name"))?;

        for &(col, width) in &sheet.column_widths {
            worksheet
                .set_column_width_pixels(col, width)
                .map_err(export_err("Failed to set column width"))?;
        }
        for &(row, height) in &sheet.row_heights {
            worksheet
                .set_row_height_pixels(row, height)
                .map_err(export_err("Failed to set row height"))?;
        }
        if sheet.frozen_rows > 0 {
            worksheet
                .set_freeze_panes(sheet.frozen_rows, 0)
                .map_err(export_err("Failed to freeze header rows"))?;
        }

        for range_format in &sheet.range_formats {
            Self::format_range(worksheet, range_format)?;
        }
        for merge in &sheet.merges {
            Self::write_merge(worksheet, merge)?;
        }
        for cell in &sheet.cells {
            Self::write_cell(worksheet, cell)?;
        }
        for validation in &sheet.validations {
            Self::add_validation(worksheet, validation)?;
        }
        for rule in &sheet.conditional_rules {
            Self::add_conditional_rule(worksheet, rule)?;
        }

        debug!(
            sheet = %sheet.name,
            cells = sheet.cells.len(),
            merges = sheet.merges.len(),
            rules = sheet.conditional_rules.len(),
            "sheet exported"
        );
        Ok(())
    }

    /// Pre-format empty cells so values arriving later, such as spilled
    /// formula results, pick up the style
    fn format_range(worksheet: &mut Worksheet, range_format: &RangeFormat) -> PortfolioResult<()> {
        let format = Self::to_format(&range_format.style);
        let range = &range_format.range;
        for row in range.first.row..=range.last.row {
            for col in range.first.col..=range.last.col {
                worksheet
                    .write_blank(row, col, &format)
                    .map_err(export_err("Failed to format range"))?;
            }
        }
        Ok(())
    }

    fn write_merge(worksheet: &mut Worksheet, merge: &Merge) -> PortfolioResult<()> {
        let range = &merge.range;
        worksheet
            .merge_range(
                range.first.row,
                range.first.col,
                range.last.row,
                range.last.col,
                &merge.text,
                &Self::to_format(&merge.style),
            )
            .map_err(export_err("Failed to merge range"))?;
        Ok(())
    }

    /// Write a single cell value with its format
    fn write_cell(worksheet: &mut Worksheet, cell: &CellWrite) -> PortfolioResult<()> {
        let (row, col) = (cell.cell.row, cell.cell.col);
        let format = Self::to_format(&cell.style);

        match &cell.value {
            CellValue::Blank => {
                worksheet
                    .write_blank(row, col, &format)
                    .map_err(export_err("Failed to write blank"))?;
            }
            CellValue::Text(text) => {
                worksheet
                    .write_string_with_format(row, col, text, &format)
                    .map_err(export_err("Failed to write text"))?;
            }
            CellValue::Bool(value) => {
                worksheet
                    .write_boolean_with_format(row, col, *value, &format)
                    .map_err(export_err("Failed to write boolean"))?;
            }
            CellValue::Formula(formula) => {
                worksheet
                    .write_formula_with_format(row, col, Formula::new(formula), &format)
                    .map_err(export_err("Failed to write formula"))?;
            }
            CellValue::SpillFormula(formula) => {
                worksheet
                    .write_dynamic_formula_with_format(row, col, Formula::new(formula), &format)
                    .map_err(export_err("Failed to write dynamic formula"))?;
            }
        }
        Ok(())
    }

    fn add_validation(worksheet: &mut Worksheet, validation: &Validation) -> PortfolioResult<()> {
        let items: Vec<&str> = match &validation.rule {
            ValidationRule::List(items) => items.iter().map(String::as_str).collect(),
            // xlsx has no checkbox control; a TRUE/FALSE dropdown is the closest
            ValidationRule::Checkbox => vec!["TRUE", "FALSE"],
        };
        let data_validation = DataValidation::new()
            .allow_list_strings(items.as_slice())
            .map_err(export_err("Invalid dropdown list"))?;

        let range = &validation.range;
        worksheet
            .add_data_validation(
                range.first.row,
                range.first.col,
                range.last.row,
                range.last.col,
                &data_validation,
            )
            .map_err(export_err("Failed to add data validation"))?;
        Ok(())
    }

    fn add_conditional_rule(
        worksheet: &mut Worksheet,
        rule: &ConditionalRule,
    ) -> PortfolioResult<()> {
        let mut format = Format::new()
            .set_background_color(Color::RGB(rule.background.rgb()))
            .set_font_color(Color::RGB(rule.font_color.rgb()));
        if rule.bold {
            format = format.set_bold();
        }

        let conditional = ConditionalFormatFormula::new()
            .set_rule(Self::condition_formula(rule).as_str())
            .set_format(&format);

        let range = &rule.range;
        worksheet
            .add_conditional_format(
                range.first.row,
                range.first.col,
                range.last.row,
                range.last.col,
                &conditional,
            )
            .map_err(export_err("Failed to add conditional format"))?;
        Ok(())
    }

    /// Formula rule relative to the range's top-left cell
    fn condition_formula(rule: &ConditionalRule) -> String {
        let anchor = rule.range.first.a1();
        match &rule.condition {
            Condition::TextContains(text) => {
                format!("=ISNUMBER(SEARCH(\"{}\",{}))", Self::escape(text), anchor)
            }
            Condition::TextEquals(text) => format!("={}=\"{}\"", anchor, Self::escape(text)),
        }
    }

    fn escape(text: &str) -> String {
        text.replace('"', "\"\"")
    }

    fn to_format(style: &Style) -> Format {
        let mut format = Format::new().set_font_name(FONT_FAMILY);

        if let Some(size) = style.font_size {
            format = format.set_font_size(size);
        }
        if style.bold {
            format = format.set_bold();
        }
        if style.italic {
            format = format.set_italic();
        }
        if style.wrap {
            format = format.set_text_wrap();
        }
        if let Some(color) = style.font_color {
            format = format.set_font_color(Color::RGB(color.rgb()));
        }
        if let Some(color) = style.background {
            format = format.set_background_color(Color::RGB(color.rgb()));
        }
        match style.align {
            Some(HAlign::Left) => format = format.set_align(FormatAlign::Left),
            Some(HAlign::Center) => format = format.set_align(FormatAlign::Center),
            None => {}
        }
        match style.valign {
            Some(VAlign::Top) => format = format.set_align(FormatAlign::Top),
            Some(VAlign::Middle) => format = format.set_align(FormatAlign::VerticalCenter),
            None => {}
        }

        format
    }
}
