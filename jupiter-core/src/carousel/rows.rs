use jupiter_model::Row;

/// Keep the rows that qualify for rendering, in their original order.
pub fn filter_rows(rows: impl IntoIterator<Item = Row>) -> Vec<Row> {
    rows.into_iter().filter(Row::is_displayable).collect()
}
