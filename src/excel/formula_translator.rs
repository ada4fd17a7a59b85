//! Cell coordinates and sheet-qualified ranges in A1 notation

/// Translates 0-based cell coordinates into A1 references
pub struct FormulaTranslator;

impl FormulaTranslator {
    /// Convert a column index to an Excel column letter
    ///
    /// Examples:
    /// - 0 → A
    /// - 1 → B
    /// - 25 → Z
    /// - 26 → AA
    pub fn column_index_to_letter(index: usize) -> String {
        let mut result = String::new();
        let mut idx = index;

        loop {
            let remainder = idx % 26;
            result.insert(0, (b'A' + remainder as u8) as char);
            if idx < 26 {
                break;
            }
            idx = idx / 26 - 1;
        }

        result
    }

    /// 0-based (row, col) to A1 notation
    pub fn cell_to_a1(row: u32, col: u16) -> String {
        format!("{}{}", Self::column_index_to_letter(col as usize), row + 1)
    }

    /// Qualify a range with a sheet name, quoting it when needed.
    ///
    /// `Agent Portfolio`, `C7:C62` → `'Agent Portfolio'!C7:C62`
    pub fn sheet_range(sheet: &str, range: &str) -> String {
        let needs_quotes = !sheet.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
        if needs_quotes {
            format!("'{}'!{}", sheet.replace('\'', "''"), range)
        } else {
            format!("{}!{}", sheet, range)
        }
    }
}
