use super::model::{Preview, RawTable};

/// Rows shown in the dashboard preview table.
pub const PREVIEW_ROWS: usize = 5;

/// (row count, column count) of the raw table.
pub fn shape(table: &RawTable) -> (usize, usize) {
    (table.rows.len(), table.columns.len())
}

/// First [`PREVIEW_ROWS`] rows of the raw table. The first data column is
/// dropped as well: in the source export it just duplicates the row index.
/// A short table simply yields fewer rows.
pub fn preview(table: &RawTable) -> Preview {
    let columns: Vec<String> = table.columns.iter().skip(1).cloned().collect();
    let rows = table
        .rows
        .iter()
        .take(PREVIEW_ROWS)
        .map(|row| row.iter().skip(1).cloned().collect())
        .collect();
    Preview { columns, rows }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn table(n_rows: usize) -> RawTable {
        RawTable {
            path: PathBuf::from("test.csv"),
            columns: vec!["Unnamed: 0".into(), "Organisation".into(), "Date".into()],
            rows: (0..n_rows)
                .map(|i| vec![i.to_string(), format!("Org{i}"), "2020-01-01".into()])
                .collect(),
        }
    }

    #[test]
    fn shape_reports_raw_dimensions() {
        assert_eq!(shape(&table(7)), (7, 3));
        assert_eq!(shape(&table(0)), (0, 3));
    }

    #[test]
    fn preview_caps_at_five_rows_and_drops_first_column() {
        let p = preview(&table(8));
        assert_eq!(p.columns, ["Organisation", "Date"]);
        assert_eq!(p.rows.len(), PREVIEW_ROWS);
        assert_eq!(p.rows[0], vec!["Org0".to_string(), "2020-01-01".to_string()]);
    }

    #[test]
    fn short_table_previews_without_error() {
        let p = preview(&table(2));
        assert_eq!(p.rows.len(), 2);

        let empty = preview(&table(0));
        assert!(empty.rows.is_empty());
    }
}
