//! Data layer: loading, cleaning, and aggregating the launch table.
//!
//! Architecture:
//! ```text
//!  mission_launches.csv
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  loader   │  parse file → RawTable (raw strings, index stripped)
//!   └──────────┘
//!        │────────────────────────────┐
//!        ▼                            ▼
//!   ┌──────────┐                ┌──────────┐
//!   │  clean    │  dates/prices │ summary   │  shape + preview
//!   └──────────┘                └──────────┘
//!        │
//!        ▼
//!   ┌─────────────┐
//!   │  aggregate   │  six (key, value) series for the charts
//!   └─────────────┘
//! ```
//!
//! Everything is call-scoped: one [`build_dashboard`] run reads the file,
//! computes the bundle, and holds nothing afterwards.

pub mod aggregate;
pub mod clean;
pub mod loader;
pub mod model;
pub mod summary;

use std::path::Path;

pub use model::{DashboardData, IngestError};

/// Window for the trailing spend average shown on the yearly spend chart.
pub const SPEND_ROLLING_WINDOW: usize = 5;

/// Run the whole pipeline: load the CSV, clean it, and compute every series
/// the dashboard renders. The six aggregations are independent reads of the
/// same cleaned table; their order here is arbitrary.
pub fn build_dashboard(path: &Path) -> Result<DashboardData, IngestError> {
    let raw = loader::load_table(path)?;
    let clean = clean::clean_table(&raw)?;

    let spend_per_year = aggregate::spend_per_year(&clean);
    let spend_values: Vec<f64> = spend_per_year.iter().map(|&(_, v)| v).collect();
    let spend_rolling_avg = spend_per_year
        .iter()
        .map(|&(year, _)| year)
        .zip(aggregate::rolling_mean(&spend_values, SPEND_ROLLING_WINDOW))
        .collect();

    Ok(DashboardData {
        shape: summary::shape(&raw),
        preview: summary::preview(&raw),
        missions_per_year: aggregate::missions_per_year(&clean),
        missions_per_org: aggregate::missions_per_org(&clean),
        status_distribution: aggregate::status_distribution(&clean),
        spend_per_year,
        spend_rolling_avg,
        spend_per_org: aggregate::spend_per_org(&clean),
        rocket_status_distribution: aggregate::rocket_status_distribution(&clean),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn builds_full_bundle_from_csv() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            "idx,Organisation,Date,Price,Mission_Status,Rocket_Status\n\
             0,SpaceX,\"Fri Aug 07, 2020 05:12 UTC\",\"1,160\",Success,StatusActive\n\
             1,SpaceX,\"Thu Aug 06, 2020 04:01 UTC\",50,Failure,StatusActive\n\
             2,ISRO,\"Wed Mar 24, 1976\",N/A,Success,StatusRetired\n\
             3,ISRO,unknown,,Success,StatusRetired\n"
        )
        .unwrap();

        let data = build_dashboard(file.path()).unwrap();

        assert_eq!(data.shape, (4, 5));
        assert_eq!(data.preview.rows.len(), 4);
        // Preview also drops the first data column (Organisation here).
        assert_eq!(data.preview.columns[0], "Date");

        assert_eq!(data.missions_per_year, vec![(1976, 1), (2020, 2)]);
        assert_eq!(
            data.missions_per_org,
            vec![("SpaceX".to_string(), 2), ("ISRO".to_string(), 2)]
        );
        assert_eq!(data.status_distribution[0], ("Success".to_string(), 3));
        assert_eq!(data.spend_per_year, vec![(2020, 1210.0)]);
        assert_eq!(data.spend_rolling_avg, vec![(2020, None)]);
        assert_eq!(data.spend_per_org, vec![("SpaceX".to_string(), 1210.0)]);
    }

    #[test]
    fn empty_table_degrades_to_empty_series() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            "idx,Organisation,Date,Price,Mission_Status,Rocket_Status\n"
        )
        .unwrap();

        let data = build_dashboard(file.path()).unwrap();
        assert_eq!(data.shape, (0, 5));
        assert!(data.preview.rows.is_empty());
        assert!(data.missions_per_year.is_empty());
        assert_eq!(data.status_distribution.len(), 4);
    }

    #[test]
    fn missing_file_surfaces_ingest_error() {
        let err = build_dashboard(Path::new("/no/such/launches.csv")).unwrap_err();
        assert!(matches!(err, IngestError::Io { .. }));
    }

    #[test]
    fn bundle_serializes_for_the_renderer() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            "idx,Organisation,Date,Price,Mission_Status,Rocket_Status\n\
             0,SpaceX,\"Fri Aug 07, 2020 05:12 UTC\",50,Success,StatusActive\n"
        )
        .unwrap();

        let data = build_dashboard(file.path()).unwrap();
        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(json["shape"][0], 1);
        assert_eq!(json["missions_per_year"][0][0], 2020);
    }
}
