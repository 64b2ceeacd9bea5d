use chrono::{Datelike, NaiveDate, NaiveDateTime};

use super::model::{
    CleanRecord, CleanTable, IngestError, RawTable, COL_DATE, COL_MISSION_STATUS,
    COL_ORGANISATION, COL_PRICE, COL_ROCKET_STATUS,
};

// ---------------------------------------------------------------------------
// Field cleaning
// ---------------------------------------------------------------------------

/// Timestamp layouts seen in the launch data, tried in order.
const DATETIME_FORMATS: &[&str] = &["%a %b %d, %Y %H:%M UTC", "%a %b %d, %Y %H:%M %Z"];

/// Date-only layouts (older records carry no launch time).
const DATE_FORMATS: &[&str] = &["%a %b %d, %Y", "%Y-%m-%d"];

/// Best-effort parse of a launch date string. Returns `None` on anything
/// unrecognised instead of failing, so a handful of malformed rows cannot
/// poison the whole table.
pub fn parse_launch_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(dt.date());
        }
    }
    for fmt in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(raw, fmt) {
            return Some(d);
        }
    }
    None
}

/// Parse a price cell into million USD. Thousands separators are stripped
/// first ("1,160" → 1160.0); empty or non-numeric cells become `None`.
/// Idempotent: an already-clean "1234.5" parses to the same value.
pub fn parse_price(raw: &str) -> Option<f64> {
    let cleaned: String = raw.trim().chars().filter(|c| *c != ',').collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok()
}

// ---------------------------------------------------------------------------
// Table cleaning
// ---------------------------------------------------------------------------

/// Build the cleaned view of the raw table. The raw table is left untouched
/// (Summary keeps reading it), row order is preserved exactly, and no row is
/// ever dropped here — aggregations decide per field whether a `None` means
/// exclusion.
pub fn clean_table(raw: &RawTable) -> Result<CleanTable, IngestError> {
    let col = |name: &'static str| {
        raw.column_index(name).ok_or(IngestError::MissingColumn {
            path: raw.path.clone(),
            column: name,
        })
    };
    let org_idx = col(COL_ORGANISATION)?;
    let date_idx = col(COL_DATE)?;
    let price_idx = col(COL_PRICE)?;
    let mission_idx = col(COL_MISSION_STATUS)?;
    let rocket_idx = col(COL_ROCKET_STATUS)?;

    let mut records = Vec::with_capacity(raw.len());
    let mut bad_dates = 0usize;
    let mut bad_prices = 0usize;

    for row in &raw.rows {
        let cell = |idx: usize| row.get(idx).map(String::as_str).unwrap_or("");

        let date = parse_launch_date(cell(date_idx));
        if date.is_none() {
            bad_dates += 1;
        }
        let price = parse_price(cell(price_idx));
        if price.is_none() {
            bad_prices += 1;
        }

        records.push(CleanRecord {
            organisation: cell(org_idx).trim().to_string(),
            date,
            year: date.map(|d| d.year()),
            price,
            mission_status: cell(mission_idx).trim().to_string(),
            rocket_status: cell(rocket_idx).trim().to_string(),
        });
    }

    log::debug!(
        "cleaned {} rows ({bad_dates} without date, {bad_prices} without price)",
        records.len()
    );

    Ok(CleanTable { records })
}
