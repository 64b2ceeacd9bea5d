use std::fs::File;
use std::path::Path;

use super::model::{IngestError, RawTable};

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row with column names, first column a positional row
/// index written by the exporting tool. The index column is dropped here;
/// everything else is kept as raw text, cleaning happens later.
///
/// Fails hard on a missing/unreadable file or a row whose field count does
/// not match the header (`csv` flags that as `UnequalLengths`). Row contents
/// are never inspected, so a file of garbage strings still loads.
pub fn load_table(path: &Path) -> Result<RawTable, IngestError> {
    let file = File::open(path).map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = csv::Reader::from_reader(file);

    let headers = reader.headers().map_err(|source| IngestError::Csv {
        path: path.to_path_buf(),
        source,
    })?;
    // Skip the positional index column.
    let columns: Vec<String> = headers.iter().skip(1).map(|h| h.to_string()).collect();

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|source| IngestError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        rows.push(record.iter().skip(1).map(|c| c.to_string()).collect());
    }

    log::debug!(
        "loaded {} rows x {} columns from {}",
        rows.len(),
        columns.len(),
        path.display()
    );

    Ok(RawTable {
        path: path.to_path_buf(),
        columns,
        rows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_rows_and_strips_index_column() {
        let file = write_csv(
            "idx,Organisation,Date,Price,Mission_Status,Rocket_Status\n\
             0,SpaceX,\"Fri Aug 07, 2020 05:12 UTC\",\"1,160\",Success,StatusActive\n\
             1,CASC,\"Thu Aug 06, 2020 04:01 UTC\",\"29.75\",Success,StatusActive\n",
        );

        let table = load_table(file.path()).unwrap();
        assert_eq!(
            table.columns,
            ["Organisation", "Date", "Price", "Mission_Status", "Rocket_Status"]
        );
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows[0][0], "SpaceX");
        assert_eq!(table.rows[1][2], "29.75");
    }

    #[test]
    fn keeps_unknown_columns_untouched() {
        let file = write_csv(
            "idx,Organisation,Date,Price,Mission_Status,Rocket_Status,Location\n\
             0,ISRO,\"Wed Mar 24, 1976\",,Success,StatusRetired,Sriharikota\n",
        );

        let table = load_table(file.path()).unwrap();
        assert_eq!(table.column_index("Location"), Some(5));
        assert_eq!(table.rows[0][5], "Sriharikota");
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_table(Path::new("/no/such/launches.csv")).unwrap_err();
        assert!(matches!(err, IngestError::Io { .. }));
    }

    #[test]
    fn ragged_row_is_fatal() {
        let file = write_csv(
            "idx,Organisation,Date,Price,Mission_Status,Rocket_Status\n\
             0,SpaceX,\"Fri Aug 07, 2020 05:12 UTC\",50\n",
        );

        let err = load_table(file.path()).unwrap_err();
        assert!(matches!(err, IngestError::Csv { .. }));
    }

    #[test]
    fn header_only_file_loads_empty() {
        let file = write_csv("idx,Organisation,Date,Price,Mission_Status,Rocket_Status\n");

        let table = load_table(file.path()).unwrap();
        assert!(table.is_empty());
        assert_eq!(table.columns.len(), 5);
    }
}
