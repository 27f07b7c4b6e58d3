//! Zone map markers and per-focus zone tables.

use super::profiles::{CityProfile, RangeProfile};
use crate::domain::FocusArea;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ZoneColor {
    Red,
    Blue,
    Orange,
    Green,
}

/// A decorative circle on the zone map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZoneMarker {
    pub name: &'static str,
    pub latitude: f64,
    pub longitude: f64,
    pub radius_m: f64,
    pub color: ZoneColor,
}

pub fn zone_markers(city: &CityProfile) -> [ZoneMarker; 4] {
    let (lat, lng) = (city.latitude, city.longitude);
    [
        ZoneMarker {
            name: "Central Business District",
            latitude: lat,
            longitude: lng,
            radius_m: 2000.0,
            color: ZoneColor::Red,
        },
        ZoneMarker {
            name: "Residential Zones",
            latitude: lat + 0.05,
            longitude: lng + 0.05,
            radius_m: 2500.0,
            color: ZoneColor::Blue,
        },
        ZoneMarker {
            name: "Industrial Areas",
            latitude: lat - 0.05,
            longitude: lng - 0.05,
            radius_m: 1800.0,
            color: ZoneColor::Orange,
        },
        ZoneMarker {
            name: "Green Spaces",
            latitude: lat + 0.03,
            longitude: lng - 0.03,
            radius_m: 1500.0,
            color: ZoneColor::Green,
        },
    ]
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ZoneValue {
    Number(f64),
    Text(&'static str),
}

impl ZoneValue {
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            Self::Text(_) => None,
        }
    }

    pub fn display(&self) -> String {
        match self {
            Self::Number(value) if value.fract().abs() < f64::EPSILON => format!("{value:.0}"),
            Self::Number(value) => format!("{value:.2}"),
            Self::Text(text) => (*text).to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZoneRow {
    pub zone: &'static str,
    pub values: Vec<ZoneValue>,
    pub priority: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZoneTable {
    /// Value column names, excluding the zone name and priority.
    pub columns: Vec<&'static str>,
    pub rows: Vec<ZoneRow>,
}

impl ZoneTable {
    /// Column charted as the zone score: "Development Index" when present,
    /// otherwise the first numeric column.
    pub fn score_column(&self) -> Option<usize> {
        if let Some(index) = self
            .columns
            .iter()
            .position(|column| *column == "Development Index")
        {
            return Some(index);
        }

        (0..self.columns.len()).find(|&index| {
            self.rows
                .iter()
                .all(|row| row.values.get(index).and_then(ZoneValue::as_number).is_some())
        })
    }

    pub fn column_values(&self, index: usize) -> Vec<(&'static str, f64)> {
        self.rows
            .iter()
            .filter_map(|row| {
                row.values
                    .get(index)
                    .and_then(ZoneValue::as_number)
                    .map(|value| (row.zone, value))
            })
            .collect()
    }

    /// Counts per priority label, most frequent first; ties keep the order
    /// in which the label first appears.
    pub fn priority_distribution(&self) -> Vec<(&'static str, usize)> {
        let mut counts: Vec<(&'static str, usize)> = Vec::new();
        for row in &self.rows {
            match counts.iter_mut().find(|(label, _)| *label == row.priority) {
                Some((_, count)) => *count += 1,
                None => counts.push((row.priority, 1)),
            }
        }
        counts.sort_by(|a, b| b.1.cmp(&a.1));
        counts
    }
}

fn row(zone: &'static str, values: Vec<ZoneValue>, priority: &'static str) -> ZoneRow {
    ZoneRow {
        zone,
        values,
        priority,
    }
}

pub fn zone_table(focus: FocusArea, range: &RangeProfile) -> ZoneTable {
    use ZoneValue::{Number as N, Text as T};

    match focus {
        FocusArea::HousingUrbanGrowth => {
            let g = range.zone_growth_factor;
            ZoneTable {
                columns: vec!["Housing Density", "Growth Rate", "Infrastructure Score"],
                rows: vec![
                    row("CBD", vec![T("Very High"), N(8.2 * g), N(72.0)], "Immediate"),
                    row("Residential North", vec![T("High"), N(6.5 * g), N(65.0)], "High"),
                    row("Residential South", vec![T("Medium"), N(4.8 * g), N(58.0)], "Medium"),
                    row("Industrial East", vec![T("Low"), N(2.1 * g), N(45.0)], "Low"),
                    row("Suburban West", vec![T("Medium"), N(5.3 * g), N(62.0)], "Medium"),
                ],
            }
        }
        FocusArea::WaterResources => ZoneTable {
            columns: vec!["Water Stress", "Groundwater Level", "Consumption Rate"],
            rows: vec![
                row("Central Zone", vec![N(85.0), N(35.0), N(88.0)], "Critical"),
                row("Northern Suburbs", vec![N(72.0), N(42.0), N(75.0)], "High"),
                row("Southern Hills", vec![N(45.0), N(78.0), N(52.0)], "Low"),
                row("Eastern Plains", vec![N(68.0), N(38.0), N(72.0)], "Medium"),
                row("Western Coast", vec![N(55.0), N(65.0), N(58.0)], "Medium"),
            ],
        },
        FocusArea::PublicHealthHeat => {
            let h = range.zone_heat_factor;
            ZoneTable {
                columns: vec!["Heat Index", "Air Quality", "Healthcare Access"],
                rows: vec![
                    row("Urban Core", vec![N(4.2 * h), N(165.0), N(65.0)], "High"),
                    row("Dense Residential", vec![N(3.8 * h), N(142.0), N(58.0)], "Medium"),
                    row("Industrial Belt", vec![N(4.5 * h), N(235.0), N(45.0)], "Critical"),
                    row("Green Zones", vec![N(2.1 * h), N(85.0), N(82.0)], "Low"),
                    row("Mixed Use", vec![N(3.2 * h), N(128.0), N(72.0)], "Medium"),
                ],
            }
        }
        FocusArea::Transportation | FocusArea::GreenSpaces => ZoneTable {
            columns: vec!["Development Index", "Infrastructure Score", "Growth Pressure"],
            rows: vec![
                row("Zone A", vec![N(78.0), N(72.0), T("High")], "High"),
                row("Zone B", vec![N(65.0), N(65.0), T("Medium")], "Medium"),
                row("Zone C", vec![N(72.0), N(58.0), T("Very High")], "Immediate"),
                row("Zone D", vec![N(58.0), N(45.0), T("Low")], "Low"),
                row("Zone E", vec![N(68.0), N(62.0), T("Medium")], "Medium"),
            ],
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{City, TimeRange};

    #[test]
    fn markers_are_offset_from_city_centre() {
        let city = CityProfile::of(City::Delhi);
        let markers = zone_markers(city);
        assert!((markers[0].latitude - 28.7041).abs() < 1e-12);
        assert!((markers[1].longitude - (77.1025 + 0.05)).abs() < 1e-12);
        assert!((markers[2].latitude - (28.7041 - 0.05)).abs() < 1e-12);
        assert!((markers[3].longitude - (77.1025 - 0.03)).abs() < 1e-12);
        assert_eq!(markers[3].color, ZoneColor::Green);
    }

    #[test]
    fn housing_growth_scales_with_range() {
        let table = zone_table(
            FocusArea::HousingUrbanGrowth,
            RangeProfile::of(TimeRange::RecentYears),
        );
        let growth = table.column_values(1);
        assert_eq!(growth[0].0, "CBD");
        assert!((growth[0].1 - 8.2 * 1.5).abs() < 1e-12);

        let long = zone_table(FocusArea::HousingUrbanGrowth, RangeProfile::of(TimeRange::LongTerm));
        assert!((long.column_values(1)[3].1 - 2.1 * 0.8).abs() < 1e-12);
    }

    #[test]
    fn heat_index_only_scales_for_recent_years() {
        let decade = zone_table(FocusArea::PublicHealthHeat, RangeProfile::of(TimeRange::RecentDecade));
        let long = zone_table(FocusArea::PublicHealthHeat, RangeProfile::of(TimeRange::LongTerm));
        let recent = zone_table(FocusArea::PublicHealthHeat, RangeProfile::of(TimeRange::RecentYears));
        assert_eq!(decade, long);
        assert!((recent.column_values(0)[2].1 - 4.5 * 1.3).abs() < 1e-12);
    }

    #[test]
    fn score_column_prefers_development_index() {
        let range = RangeProfile::of(TimeRange::RecentDecade);
        assert_eq!(zone_table(FocusArea::GreenSpaces, range).score_column(), Some(0));
        // housing's first column is text, so the growth rate is charted
        assert_eq!(zone_table(FocusArea::HousingUrbanGrowth, range).score_column(), Some(1));
        assert_eq!(zone_table(FocusArea::WaterResources, range).score_column(), Some(0));
    }

    #[test]
    fn priority_distribution_sorts_by_count() {
        let table = zone_table(FocusArea::WaterResources, RangeProfile::of(TimeRange::RecentDecade));
        assert_eq!(
            table.priority_distribution(),
            vec![("Medium", 2), ("Critical", 1), ("High", 1), ("Low", 1)]
        );
    }

    #[test]
    fn zone_values_display_compactly() {
        assert_eq!(ZoneValue::Number(72.0).display(), "72");
        assert_eq!(ZoneValue::Number(8.2 * 1.5).display(), "12.30");
        assert_eq!(ZoneValue::Text("High").display(), "High");
    }
}
