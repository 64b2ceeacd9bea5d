use std::path::PathBuf;

use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

// ---------------------------------------------------------------------------
// IngestError – fatal failures while reading the source table
// ---------------------------------------------------------------------------

/// Errors that abort a pipeline run. Row-level problems (bad dates, bad
/// prices) are *not* errors; they are handled field-by-field during cleaning.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("opening {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Unreadable or structurally inconsistent CSV (e.g. a row with the
    /// wrong number of fields).
    #[error("malformed CSV in {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("{} is missing required column '{column}'", path.display())]
    MissingColumn { path: PathBuf, column: &'static str },
}

// ---------------------------------------------------------------------------
// RawTable – the source table exactly as loaded
// ---------------------------------------------------------------------------

/// Column names the cleaning step relies on. Any further columns in the
/// source file are carried through untouched.
pub const COL_ORGANISATION: &str = "Organisation";
pub const COL_DATE: &str = "Date";
pub const COL_PRICE: &str = "Price";
pub const COL_MISSION_STATUS: &str = "Mission_Status";
pub const COL_ROCKET_STATUS: &str = "Rocket_Status";

/// The launch table as read from disk: every cell kept as its raw string,
/// the leading positional-index column already stripped. Loaded once per
/// pipeline run and never mutated; cleaning produces an independent view.
#[derive(Debug, Clone)]
pub struct RawTable {
    /// Where the table came from (kept for error reporting).
    pub path: PathBuf,
    /// Ordered data column names.
    pub columns: Vec<String>,
    /// One entry per launch record, cells aligned with `columns`.
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    /// Number of records.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no records.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of a named column, if present.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }
}

// ---------------------------------------------------------------------------
// CleanRecord / CleanTable – per-row cleaned view of the raw table
// ---------------------------------------------------------------------------

/// One launch record after field cleaning. Row order matches the raw table;
/// unparsable fields become `None` rather than dropping the record.
#[derive(Debug, Clone)]
pub struct CleanRecord {
    pub organisation: String,
    /// Launch date, `None` when the raw string could not be parsed.
    pub date: Option<NaiveDate>,
    /// Calendar year derived from `date`.
    pub year: Option<i32>,
    /// Mission cost in million USD, `None` when absent or unparsable.
    pub price: Option<f64>,
    pub mission_status: String,
    pub rocket_status: String,
}

/// The cleaned table shared by all aggregations.
#[derive(Debug, Clone, Default)]
pub struct CleanTable {
    pub records: Vec<CleanRecord>,
}

impl CleanTable {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

// ---------------------------------------------------------------------------
// DashboardData – the bundle handed to the rendering layer
// ---------------------------------------------------------------------------

/// First rows of the raw table for the dashboard's preview widget.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Preview {
    /// Ordered column names shown in the preview.
    pub columns: Vec<String>,
    /// Up to five rows, cells aligned with `columns`.
    pub rows: Vec<Vec<String>>,
}

/// Everything the dashboard needs, as plain (key, value) series. Key order
/// is significant: the renderer draws series in the order given here.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardData {
    /// (row count, column count) of the raw table.
    pub shape: (usize, usize),
    pub preview: Preview,
    /// Launch counts by calendar year, ascending.
    pub missions_per_year: Vec<(i32, u64)>,
    /// Launch counts by organisation, most active first.
    pub missions_per_org: Vec<(String, u64)>,
    /// Mission outcome counts in a fixed four-slot order.
    pub status_distribution: Vec<(String, u64)>,
    /// Total spend by calendar year, ascending.
    pub spend_per_year: Vec<(i32, f64)>,
    /// Trailing five-year mean of `spend_per_year`; `None` until the
    /// window is fully populated.
    pub spend_rolling_avg: Vec<(i32, Option<f64>)>,
    /// Total spend by organisation, biggest spender first.
    pub spend_per_org: Vec<(String, f64)>,
    /// Rocket status counts, descending.
    pub rocket_status_distribution: Vec<(String, u64)>,
}
