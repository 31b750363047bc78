use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use super::model::{CellValue, NormalizedRow};

// ---------------------------------------------------------------------------
// Output types
// ---------------------------------------------------------------------------

/// How the stations in a [`YamazumiSummary`] were ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StationOrder {
    /// Ascending by the integer in the last word of each station id.
    NumericSuffix,
    /// Grouping order (ascending station value), used when any id has no
    /// integer suffix.
    Grouping,
}

/// One bar of the board: seconds per category plus the stacked total.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationSummary {
    pub station: CellValue,
    /// Every category of the dataset, zero when the station has none of it.
    pub by_category: BTreeMap<String, f64>,
    pub total_seconds: f64,
}

/// Everything the chart and summary table need.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YamazumiSummary {
    /// All categories, ascending.
    pub categories: Vec<String>,
    /// Stations in display order.
    pub stations: Vec<StationSummary>,
    pub order: StationOrder,
    pub totals: BTreeMap<CellValue, f64>,
    pub bottleneck: Option<CellValue>,
    /// `total - takt` per station; `None` unless takt is positive.
    pub deltas: Option<BTreeMap<CellValue, f64>>,
    pub takt_seconds: f64,
}

impl YamazumiSummary {
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Position of the bottleneck in display order.
    pub fn bottleneck_index(&self) -> Option<usize> {
        let bottleneck = self.bottleneck.as_ref()?;
        self.stations.iter().position(|s| &s.station == bottleneck)
    }

    /// Station ids in display order.
    pub fn station_order(&self) -> Vec<CellValue> {
        self.stations.iter().map(|s| s.station.clone()).collect()
    }

    /// Delta against takt for one station, when takt is enabled.
    pub fn delta_for(&self, station: &CellValue) -> Option<f64> {
        self.deltas.as_ref()?.get(station).copied()
    }
}

// ---------------------------------------------------------------------------
// Aggregation
// ---------------------------------------------------------------------------

/// Build the board from normalized rows.
///
/// Rows without a station id do not form a group. An empty input yields an
/// empty summary with no bottleneck.
pub fn aggregate(rows: &[NormalizedRow], takt_seconds: f64) -> YamazumiSummary {
    let mut grouped: BTreeMap<CellValue, BTreeMap<String, f64>> = BTreeMap::new();
    let mut categories: BTreeSet<String> = BTreeSet::new();

    for row in rows {
        if row.station.is_null() {
            log::debug!("Skipping row without station ({})", row.category);
            continue;
        }
        *grouped
            .entry(row.station.clone())
            .or_default()
            .entry(row.category.clone())
            .or_insert(0.0) += row.duration_seconds;
        categories.insert(row.category.clone());
    }

    // Dense fill: every station reports every category.
    let mut stations: Vec<StationSummary> = grouped
        .into_iter()
        .map(|(station, mut by_category)| {
            for cat in &categories {
                by_category.entry(cat.clone()).or_insert(0.0);
            }
            let total_seconds = by_category.values().sum();
            StationSummary {
                station,
                by_category,
                total_seconds,
            }
        })
        .collect();

    let order = order_stations(&mut stations);
    let bottleneck = find_bottleneck(&stations);

    let totals: BTreeMap<CellValue, f64> = stations
        .iter()
        .map(|s| (s.station.clone(), s.total_seconds))
        .collect();

    let deltas: Option<BTreeMap<CellValue, f64>> = (takt_seconds > 0.0).then(|| {
        totals
            .iter()
            .map(|(station, total)| (station.clone(), total - takt_seconds))
            .collect()
    });

    YamazumiSummary {
        categories: categories.into_iter().collect(),
        stations,
        order,
        totals,
        bottleneck,
        deltas,
        takt_seconds,
    }
}

/// Integer in the last whitespace-separated word of the station label,
/// e.g. `"Station 12"` → 12.
pub fn numeric_suffix(station: &CellValue) -> Option<i64> {
    station
        .to_string()
        .split_whitespace()
        .last()?
        .parse::<i64>()
        .ok()
}

/// Sort by numeric suffix if every station has one; otherwise leave the
/// grouping order untouched.
fn order_stations(stations: &mut Vec<StationSummary>) -> StationOrder {
    let keys: Option<Vec<i64>> = stations.iter().map(|s| numeric_suffix(&s.station)).collect();
    let Some(keys) = keys else {
        log::debug!("Station ids lack a numeric suffix, keeping grouping order");
        return StationOrder::Grouping;
    };

    let mut keyed: Vec<(i64, StationSummary)> = keys.into_iter().zip(stations.drain(..)).collect();
    keyed.sort_by_key(|(k, _)| *k);
    stations.extend(keyed.into_iter().map(|(_, s)| s));
    StationOrder::NumericSuffix
}

/// First station holding the maximum total. NaN totals never qualify.
fn find_bottleneck(stations: &[StationSummary]) -> Option<CellValue> {
    let mut best: Option<&StationSummary> = None;
    for s in stations.iter().filter(|s| !s.total_seconds.is_nan()) {
        match best {
            Some(b) if s.total_seconds <= b.total_seconds => {}
            _ => best = Some(s),
        }
    }
    best.map(|s| s.station.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(station: impl Into<CellValue>, category: &str, secs: f64) -> NormalizedRow {
        NormalizedRow {
            station: station.into(),
            duration_seconds: secs,
            category: category.to_string(),
        }
    }

    #[test]
    fn numeric_suffix_reads_last_word() {
        assert_eq!(numeric_suffix(&"Station 12".into()), Some(12));
        assert_eq!(numeric_suffix(&CellValue::Integer(4)), Some(4));
        assert_eq!(numeric_suffix(&"Line A".into()), None);
        assert_eq!(numeric_suffix(&"".into()), None);
        assert_eq!(numeric_suffix(&CellValue::Float(2.0)), None);
    }

    #[test]
    fn stations_sort_numerically_not_lexically() {
        let rows = vec![
            row("Station 10", "A", 1.0),
            row("Station 2", "A", 1.0),
            row("Station 1", "A", 1.0),
        ];
        let summary = aggregate(&rows, 0.0);
        assert_eq!(summary.order, StationOrder::NumericSuffix);
        assert_eq!(
            summary.station_order(),
            vec![
                CellValue::from("Station 1"),
                CellValue::from("Station 2"),
                CellValue::from("Station 10"),
            ]
        );
    }

    #[test]
    fn one_unparseable_station_keeps_grouping_order() {
        let rows = vec![
            row("Station 2", "A", 1.0),
            row("Station 10", "A", 1.0),
            row("Rework", "A", 1.0),
        ];
        let summary = aggregate(&rows, 0.0);
        assert_eq!(summary.order, StationOrder::Grouping);
        assert_eq!(
            summary.station_order(),
            vec![
                CellValue::from("Rework"),
                CellValue::from("Station 10"),
                CellValue::from("Station 2"),
            ]
        );
    }

    #[test]
    fn missing_categories_are_zero_filled() {
        let rows = vec![row("S 1", "WELD", 3.0), row("S 2", "PAINT", 4.0)];
        let summary = aggregate(&rows, 0.0);
        assert_eq!(summary.categories, vec!["PAINT", "WELD"]);
        assert_eq!(summary.stations[0].by_category["PAINT"], 0.0);
        assert_eq!(summary.stations[1].by_category["WELD"], 0.0);
    }

    #[test]
    fn ties_go_to_first_station_in_display_order() {
        let rows = vec![
            row("S 3", "A", 5.0),
            row("S 1", "A", 5.0),
            row("S 2", "A", 1.0),
        ];
        let summary = aggregate(&rows, 0.0);
        assert_eq!(summary.bottleneck, Some(CellValue::from("S 1")));
        assert_eq!(summary.bottleneck_index(), Some(0));
    }

    #[test]
    fn nan_total_is_never_the_bottleneck() {
        let rows = vec![
            row("S 1", "a", 50.0),
            row("S 2", "a", f64::INFINITY),
            row("S 2", "b", f64::NEG_INFINITY),
        ];
        let summary = aggregate(&rows, 0.0);
        assert!(summary.totals[&CellValue::from("S 2")].is_nan());
        assert_eq!(summary.bottleneck, Some(CellValue::from("S 1")));
    }

    #[test]
    fn all_nan_totals_leave_no_bottleneck() {
        let rows = vec![row("S 1", "a", f64::INFINITY), row("S 1", "b", f64::NEG_INFINITY)];
        assert_eq!(aggregate(&rows, 0.0).bottleneck, None);
    }

    #[test]
    fn no_deltas_without_positive_takt() {
        let rows = vec![row("S 1", "A", 5.0)];
        assert!(aggregate(&rows, 0.0).deltas.is_none());
        assert!(aggregate(&rows, -3.0).deltas.is_none());
        assert_eq!(aggregate(&rows, 2.0).delta_for(&"S 1".into()), Some(3.0));
    }

    #[test]
    fn null_stations_do_not_form_a_group() {
        let rows = vec![row(CellValue::Null, "A", 9.0), row("S 1", "B", 1.0)];
        let summary = aggregate(&rows, 0.0);
        assert_eq!(summary.stations.len(), 1);
        assert_eq!(summary.categories, vec!["B"]);
    }
}
