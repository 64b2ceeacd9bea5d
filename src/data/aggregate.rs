use std::collections::{BTreeMap, HashMap};

use super::model::CleanTable;

/// Fixed slice order for the mission-status pie chart. Absent categories are
/// zero-filled so a missing slice never shifts the others; categories outside
/// this list do not appear in the chart at all.
pub const MISSION_STATUS_ORDER: [&str; 4] =
    ["Success", "Failure", "Partial Failure", "Prelaunch Failure"];

// ---------------------------------------------------------------------------
// Grouping helpers
// ---------------------------------------------------------------------------

/// Group string keys in first-encounter order, folding values with `f`.
/// Keeping encounter order (rather than a sorted map) makes the later
/// stable sort break count ties the way the source file orders them.
fn group_by_key<V: Copy>(
    items: impl Iterator<Item = (String, V)>,
    zero: V,
    fold: impl Fn(V, V) -> V,
) -> Vec<(String, V)> {
    let mut slot: HashMap<String, usize> = HashMap::new();
    let mut out: Vec<(String, V)> = Vec::new();
    for (key, value) in items {
        match slot.get(&key) {
            Some(&i) => out[i].1 = fold(out[i].1, value),
            None => {
                slot.insert(key.clone(), out.len());
                out.push((key, fold(zero, value)));
            }
        }
    }
    out
}

// ---------------------------------------------------------------------------
// The six derivations – each a pure function of the cleaned table
// ---------------------------------------------------------------------------

/// Launch counts per calendar year, ascending. Rows without a parsable
/// date have no year and are left out.
pub fn missions_per_year(table: &CleanTable) -> Vec<(i32, u64)> {
    let mut counts: BTreeMap<i32, u64> = BTreeMap::new();
    for record in &table.records {
        if let Some(year) = record.year {
            *counts.entry(year).or_insert(0) += 1;
        }
    }
    counts.into_iter().collect()
}

/// Launch counts per organisation, descending; ties stay in the order the
/// organisations first appear in the data.
pub fn missions_per_org(table: &CleanTable) -> Vec<(String, u64)> {
    let mut counts = group_by_key(
        table
            .records
            .iter()
            .map(|r| (r.organisation.clone(), 1u64)),
        0,
        |a, b| a + b,
    );
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

/// Mission outcome counts reindexed onto [`MISSION_STATUS_ORDER`]: always
/// exactly four entries, zero for categories the data never mentions.
pub fn status_distribution(table: &CleanTable) -> Vec<(String, u64)> {
    let mut counts: HashMap<&str, u64> = HashMap::new();
    for record in &table.records {
        *counts.entry(record.mission_status.as_str()).or_insert(0) += 1;
    }
    MISSION_STATUS_ORDER
        .iter()
        .map(|&status| (status.to_string(), counts.get(status).copied().unwrap_or(0)))
        .collect()
}

/// Total spend per calendar year, ascending. Rows with no parsable price or
/// date are dropped before grouping so they cannot dilute the totals.
pub fn spend_per_year(table: &CleanTable) -> Vec<(i32, f64)> {
    let mut totals: BTreeMap<i32, f64> = BTreeMap::new();
    for record in &table.records {
        if let (Some(year), Some(price)) = (record.year, record.price) {
            *totals.entry(year).or_insert(0.0) += price;
        }
    }
    totals.into_iter().collect()
}

/// Total spend per organisation, descending by total. Priceless rows are
/// dropped, not counted as zero.
pub fn spend_per_org(table: &CleanTable) -> Vec<(String, f64)> {
    let mut totals = group_by_key(
        table
            .records
            .iter()
            .filter_map(|r| r.price.map(|p| (r.organisation.clone(), p))),
        0.0,
        |a, b| a + b,
    );
    totals.sort_by(|a, b| b.1.total_cmp(&a.1));
    totals
}

/// Rocket status counts, descending. No fixed category set here: whatever
/// appears in the data is charted.
pub fn rocket_status_distribution(table: &CleanTable) -> Vec<(String, u64)> {
    let mut counts = group_by_key(
        table
            .records
            .iter()
            .map(|r| (r.rocket_status.clone(), 1u64)),
        0,
        |a, b| a + b,
    );
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

// ---------------------------------------------------------------------------
// Rolling mean
// ---------------------------------------------------------------------------

/// Trailing simple moving average. Positions with fewer than `window` points
/// behind them (inclusive) yield `None`, never a partial mean.
pub fn rolling_mean(values: &[f64], window: usize) -> Vec<Option<f64>> {
    if window == 0 {
        return vec![None; values.len()];
    }
    values
        .iter()
        .enumerate()
        .map(|(i, _)| {
            if i + 1 < window {
                None
            } else {
                let sum: f64 = values[i + 1 - window..=i].iter().sum();
                Some(sum / window as f64)
            }
        })
        .collect()
}
