/// Title, subtitle and column header rows at the top of every sheet.
pub const HEADER_ROWS: usize = 3;
/// Totals row closing every sheet.
pub const SUMMARY_ROWS: usize = 1;

/// Rows holding one employee each.
pub fn data_rows<T>(rows: &[T]) -> &[T] {
    if rows.len() <= HEADER_ROWS + SUMMARY_ROWS {
        return &rows[..0];
    }
    &rows[HEADER_ROWS..rows.len() - SUMMARY_ROWS]
}
