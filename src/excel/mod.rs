//! Excel module
//!
//! - Export: WorkbookPlan → Excel (.xlsx) with formats, dropdowns and highlights
//! - Inspect: Excel (.xlsx) → sheet and agent counts

mod exporter;
mod formula_translator;
mod inspector;

pub use exporter::ExcelExporter;
pub use formula_translator::FormulaTranslator;
pub use inspector::{SheetReport, WorkbookInspector, WorkbookReport};
