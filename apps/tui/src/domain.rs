use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum City {
    #[default]
    Bangalore,
    Mumbai,
    Delhi,
    Chennai,
    Hyderabad,
}

impl City {
    pub const ALL: [Self; 5] = [
        Self::Bangalore,
        Self::Mumbai,
        Self::Delhi,
        Self::Chennai,
        Self::Hyderabad,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bangalore => "bangalore",
            Self::Mumbai => "mumbai",
            Self::Delhi => "delhi",
            Self::Chennai => "chennai",
            Self::Hyderabad => "hyderabad",
        }
    }

    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Bangalore),
            1 => Some(Self::Mumbai),
            2 => Some(Self::Delhi),
            3 => Some(Self::Chennai),
            4 => Some(Self::Hyderabad),
            _ => None,
        }
    }

    pub const fn index(self) -> usize {
        self as usize
    }

    /// Exact display label only, as the analytics lookups key on it.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|city| city.label() == label)
    }

    /// Accepts either the display label ("Delhi, India") or the slug ("delhi").
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL.into_iter().find(|city| {
            value.eq_ignore_ascii_case(city.label()) || value.eq_ignore_ascii_case(city.as_str())
        })
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Bangalore => "Bangalore, India",
            Self::Mumbai => "Mumbai, India",
            Self::Delhi => "Delhi, India",
            Self::Chennai => "Chennai, India",
            Self::Hyderabad => "Hyderabad, India",
        }
    }

    /// City name without the country suffix, used on chart axes.
    pub const fn short_label(self) -> &'static str {
        match self {
            Self::Bangalore => "Bangalore",
            Self::Mumbai => "Mumbai",
            Self::Delhi => "Delhi",
            Self::Chennai => "Chennai",
            Self::Hyderabad => "Hyderabad",
        }
    }

    pub fn labels() -> Vec<&'static str> {
        Self::ALL.iter().map(|city| city.label()).collect()
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FocusArea {
    #[default]
    HousingUrbanGrowth,
    PublicHealthHeat,
    WaterResources,
    Transportation,
    GreenSpaces,
}

impl FocusArea {
    pub const ALL: [Self; 5] = [
        Self::HousingUrbanGrowth,
        Self::PublicHealthHeat,
        Self::WaterResources,
        Self::Transportation,
        Self::GreenSpaces,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::HousingUrbanGrowth => "housing",
            Self::PublicHealthHeat => "heat",
            Self::WaterResources => "water",
            Self::Transportation => "transportation",
            Self::GreenSpaces => "green",
        }
    }

    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::HousingUrbanGrowth),
            1 => Some(Self::PublicHealthHeat),
            2 => Some(Self::WaterResources),
            3 => Some(Self::Transportation),
            4 => Some(Self::GreenSpaces),
            _ => None,
        }
    }

    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|focus| focus.label() == label)
    }

    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL.into_iter().find(|focus| {
            value.eq_ignore_ascii_case(focus.label()) || value.eq_ignore_ascii_case(focus.as_str())
        })
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::HousingUrbanGrowth => "Housing & Urban Growth",
            Self::PublicHealthHeat => "Public Health & Heat",
            Self::WaterResources => "Water & Resources",
            Self::Transportation => "Transportation",
            Self::GreenSpaces => "Green Spaces",
        }
    }

    /// Heading used on the primary metric card: the label up to " & ".
    pub fn short_label(self) -> &'static str {
        let label = self.label();
        label.split(" & ").next().unwrap_or(label)
    }

    pub fn labels() -> Vec<&'static str> {
        Self::ALL.iter().map(|focus| focus.label()).collect()
    }
}

impl fmt::Display for FocusArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeRange {
    #[default]
    RecentDecade,
    LongTerm,
    RecentYears,
}

impl TimeRange {
    pub const ALL: [Self; 3] = [Self::RecentDecade, Self::LongTerm, Self::RecentYears];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::RecentDecade => "decade",
            Self::LongTerm => "long-term",
            Self::RecentYears => "recent",
        }
    }

    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::RecentDecade),
            1 => Some(Self::LongTerm),
            2 => Some(Self::RecentYears),
            _ => None,
        }
    }

    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|range| range.label() == label)
    }

    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL.into_iter().find(|range| {
            value.eq_ignore_ascii_case(range.label()) || value.eq_ignore_ascii_case(range.as_str())
        })
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::RecentDecade => "2014-2024 (Recent Decade)",
            Self::LongTerm => "2000-2024 (Long-term)",
            Self::RecentYears => "2019-2024 (Recent Years)",
        }
    }

    pub fn labels() -> Vec<&'static str> {
        Self::ALL.iter().map(|range| range.label()).collect()
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Satellite data layers. Selecting them only changes the badges on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataLayer {
    LandsatUrbanExpansion,
    ModisTemperature,
    ViirsNighttimeLights,
    GraceWater,
    SedacPopulation,
    ModisAirQuality,
}

impl DataLayer {
    pub const ALL: [Self; 6] = [
        Self::LandsatUrbanExpansion,
        Self::ModisTemperature,
        Self::ViirsNighttimeLights,
        Self::GraceWater,
        Self::SedacPopulation,
        Self::ModisAirQuality,
    ];

    pub const DEFAULT_SELECTION: [Self; 2] =
        [Self::LandsatUrbanExpansion, Self::ModisTemperature];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::LandsatUrbanExpansion),
            1 => Some(Self::ModisTemperature),
            2 => Some(Self::ViirsNighttimeLights),
            3 => Some(Self::GraceWater),
            4 => Some(Self::SedacPopulation),
            5 => Some(Self::ModisAirQuality),
            _ => None,
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL
            .into_iter()
            .find(|layer| value.eq_ignore_ascii_case(layer.label()))
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::LandsatUrbanExpansion => "Landsat - Urban Expansion",
            Self::ModisTemperature => "MODIS - Temperature & Heat Islands",
            Self::ViirsNighttimeLights => "VIIRS - Nighttime Lights & Activity",
            Self::GraceWater => "GRACE - Water Resources",
            Self::SedacPopulation => "SEDAC - Population & Infrastructure",
            Self::ModisAirQuality => "MODIS - Air Quality & Aerosols",
        }
    }

    /// Badge text: the sensor name before " - ".
    pub fn badge(self) -> &'static str {
        let label = self.label();
        label.split(" - ").next().unwrap_or(label)
    }

    pub fn labels() -> Vec<&'static str> {
        Self::ALL.iter().map(|layer| layer.label()).collect()
    }
}

impl fmt::Display for DataLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Current selector values. Labels stay strings so unmatched input reaches
/// the analytics untouched and takes their silent defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub city: String,
    pub focus: String,
    pub period: String,
    pub layers: Vec<DataLayer>,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            city: City::default().label().to_string(),
            focus: FocusArea::default().label().to_string(),
            period: TimeRange::default().label().to_string(),
            layers: DataLayer::DEFAULT_SELECTION.to_vec(),
        }
    }
}

impl Selection {
    pub fn city(&self) -> Option<City> {
        City::parse(&self.city)
    }

    pub fn focus(&self) -> Option<FocusArea> {
        FocusArea::parse(&self.focus)
    }

    pub fn period(&self) -> Option<TimeRange> {
        TimeRange::parse(&self.period)
    }

    pub fn has_layer(&self, layer: DataLayer) -> bool {
        self.layers.contains(&layer)
    }

    /// Adds or removes a layer, keeping the canonical layer order.
    pub fn toggle_layer(&mut self, layer: DataLayer) {
        if self.has_layer(layer) {
            self.layers.retain(|selected| *selected != layer);
        } else {
            self.layers.push(layer);
            self.layers.sort_by_key(|selected| selected.index());
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    pub const fn badge(self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_labels_and_slugs() {
        assert_eq!(City::parse("Delhi, India"), Some(City::Delhi));
        assert_eq!(City::parse("  delhi "), Some(City::Delhi));
        assert_eq!(City::parse("Atlantis"), None);
        assert_eq!(
            FocusArea::parse("Water & Resources"),
            Some(FocusArea::WaterResources)
        );
        assert_eq!(
            TimeRange::parse("2000-2024 (Long-term)"),
            Some(TimeRange::LongTerm)
        );
        assert_eq!(
            DataLayer::parse("grace - water resources"),
            Some(DataLayer::GraceWater)
        );
    }

    #[test]
    fn index_round_trips_through_from_index() {
        for city in City::ALL {
            assert_eq!(City::from_index(city.index()), Some(city));
        }
        for focus in FocusArea::ALL {
            assert_eq!(FocusArea::from_index(focus.index()), Some(focus));
        }
        for range in TimeRange::ALL {
            assert_eq!(TimeRange::from_index(range.index()), Some(range));
        }
        assert_eq!(City::from_index(5), None);
    }

    #[test]
    fn short_labels_cut_at_separator() {
        assert_eq!(FocusArea::HousingUrbanGrowth.short_label(), "Housing");
        assert_eq!(FocusArea::Transportation.short_label(), "Transportation");
        assert_eq!(DataLayer::ModisTemperature.badge(), "MODIS");
    }

    #[test]
    fn selection_toggles_layers_in_canonical_order() {
        let mut selection = Selection::default();
        selection.toggle_layer(DataLayer::ModisAirQuality);
        selection.toggle_layer(DataLayer::ViirsNighttimeLights);
        selection.toggle_layer(DataLayer::LandsatUrbanExpansion);
        assert_eq!(
            selection.layers,
            vec![
                DataLayer::ModisTemperature,
                DataLayer::ViirsNighttimeLights,
                DataLayer::ModisAirQuality
            ]
        );
        assert_eq!(selection.city(), Some(City::Bangalore));
    }
}
