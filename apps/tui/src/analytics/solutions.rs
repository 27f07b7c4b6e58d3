//! Climate-resilience solution catalog and the impact calculator.

use serde::Serialize;
use std::num::ParseFloatError;
use thiserror::Error;

/// Impact points credited per selected solution.
const IMPACT_PER_SOLUTION: u32 = 25;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CostParseError {
    #[error("cost `{0}` does not start with `$`")]
    MissingCurrency(String),
    #[error("cost `{0}` does not end with `M`")]
    MissingUnit(String),
    #[error("cost `{input}` has an invalid amount")]
    InvalidAmount {
        input: String,
        #[source]
        source: ParseFloatError,
    },
}

/// Parses a cost of the exact shape `$<number>M` into millions.
pub fn parse_cost_millions(cost: &str) -> Result<f64, CostParseError> {
    let amount = cost
        .strip_prefix('$')
        .ok_or_else(|| CostParseError::MissingCurrency(cost.to_string()))?
        .strip_suffix('M')
        .ok_or_else(|| CostParseError::MissingUnit(cost.to_string()))?;

    amount
        .parse::<f64>()
        .map_err(|source| CostParseError::InvalidAmount {
            input: cost.to_string(),
            source,
        })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Solution {
    pub name: &'static str,
    pub cost: &'static str,
    pub impact: &'static str,
    pub timeline: &'static str,
    pub data_source: &'static str,
    pub description: &'static str,
}

pub const SOLUTIONS: [Solution; 4] = [
    Solution {
        name: "Green Roof Initiative",
        cost: "$2.5M",
        impact: "Reduce heat by 2-3°C",
        timeline: "3 years",
        data_source: "MODIS Thermal Analysis",
        description: "Install green roofs on public buildings to combat urban heat island effect",
    },
    Solution {
        name: "Smart Water Management",
        cost: "$8M",
        impact: "Reduce water stress 25%",
        timeline: "5 years",
        data_source: "GRACE Groundwater",
        description: "AI-powered water distribution system with real-time monitoring",
    },
    Solution {
        name: "Urban Forest Expansion",
        cost: "$4.2M",
        impact: "Improve air quality 30%",
        timeline: "4 years",
        data_source: "Landsat Vegetation",
        description: "Plant 100,000 native trees in urban corridors",
    },
    Solution {
        name: "Coastal Protection Infrastructure",
        cost: "$12M",
        impact: "Protect 85% of coastline",
        timeline: "6 years",
        data_source: "ICESat-2 Elevation",
        description: "Build sea walls and mangrove restoration for flood protection",
    },
];

/// Implementation readiness in percent for the solution at `index`.
pub fn readiness(index: usize) -> u16 {
    let step = u16::try_from(index).unwrap_or(u16::MAX / 10).saturating_mul(10);
    65_u16.saturating_add(step).min(100)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImpactSummary {
    pub selected: Vec<&'static str>,
    /// Millions USD.
    pub total_cost: f64,
    /// Percent improvement.
    pub combined_impact: u32,
}

/// Tracks which catalog entries are selected for the impact calculator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImpactCalculator {
    selected: [bool; SOLUTIONS.len()],
}

impl Default for ImpactCalculator {
    fn default() -> Self {
        Self {
            selected: [true, true, false, false],
        }
    }
}

impl ImpactCalculator {
    pub const fn is_selected(&self, index: usize) -> bool {
        index < self.selected.len() && self.selected[index]
    }

    pub fn toggle(&mut self, index: usize) {
        if let Some(flag) = self.selected.get_mut(index) {
            *flag = !*flag;
        }
    }

    pub fn selected_count(&self) -> usize {
        self.selected.iter().filter(|flag| **flag).count()
    }

    /// `None` when nothing is selected.
    pub fn summary(&self) -> Result<Option<ImpactSummary>, CostParseError> {
        self.summarize(&SOLUTIONS)
    }

    fn summarize(&self, catalog: &[Solution]) -> Result<Option<ImpactSummary>, CostParseError> {
        let chosen: Vec<&Solution> = catalog
            .iter()
            .zip(self.selected)
            .filter_map(|(solution, selected)| selected.then_some(solution))
            .collect();

        if chosen.is_empty() {
            return Ok(None);
        }

        let mut total_cost = 0.0;
        for solution in &chosen {
            total_cost += parse_cost_millions(solution.cost)?;
        }

        let count = u32::try_from(chosen.len()).unwrap_or(u32::MAX);
        Ok(Some(ImpactSummary {
            selected: chosen.iter().map(|solution| solution.name).collect(),
            total_cost,
            combined_impact: count.saturating_mul(IMPACT_PER_SOLUTION),
        }))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Projection {
    pub title: &'static str,
    pub metric: &'static str,
    pub value: &'static str,
    pub delta: &'static str,
    /// Gauge fill in percent.
    pub severity: u16,
}

pub const CLIMATE_PROJECTIONS: [Projection; 2] = [
    Projection {
        title: "Sea Level Rise Projection",
        metric: "Projected Rise",
        value: "0.5m",
        delta: "0.3m since 2000",
        severity: 70,
    },
    Projection {
        title: "Extreme Heat Days",
        metric: "Additional Days >35°C",
        value: "+45 days/year",
        delta: "+150%",
        severity: 80,
    },
];

pub const VULNERABLE_POPULATIONS: [(&str, &str); 4] = [
    ("Population at Risk", "2.5M people"),
    ("Economic Impact", "$15B annually"),
    ("Infrastructure at Risk", "45% of city area"),
    ("Timeframe", "By 2050"),
];

pub const NEXT_STEPS: [&str; 4] = [
    "Download the detailed implementation plan",
    "Contact urban planning department",
    "Apply for climate resilience grants",
    "Schedule NASA data consultation",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_catalog_costs() {
        let costs: Result<Vec<f64>, _> = SOLUTIONS
            .iter()
            .map(|solution| parse_cost_millions(solution.cost))
            .collect();
        assert_eq!(costs, Ok(vec![2.5, 8.0, 4.2, 12.0]));
    }

    #[test]
    fn rejects_malformed_costs() {
        assert_eq!(
            parse_cost_millions("2.5M"),
            Err(CostParseError::MissingCurrency("2.5M".to_string()))
        );
        assert_eq!(
            parse_cost_millions("$2.5B"),
            Err(CostParseError::MissingUnit("$2.5B".to_string()))
        );
        assert!(matches!(
            parse_cost_millions("$abcM"),
            Err(CostParseError::InvalidAmount { .. })
        ));
        assert!(matches!(
            parse_cost_millions("$M"),
            Err(CostParseError::InvalidAmount { .. })
        ));
    }

    #[test]
    fn default_selection_is_first_two() {
        let calculator = ImpactCalculator::default();
        let summary = calculator.summary();
        let summary = summary.ok().flatten();
        let summary = summary.as_ref();
        assert_eq!(
            summary.map(|s| s.selected.clone()),
            Some(vec!["Green Roof Initiative", "Smart Water Management"])
        );
        assert_eq!(summary.map(|s| s.combined_impact), Some(50));
        assert!(summary.is_some_and(|s| (s.total_cost - 10.5).abs() < 1e-9));
    }

    #[test]
    fn empty_selection_has_no_summary() {
        let mut calculator = ImpactCalculator::default();
        calculator.toggle(0);
        calculator.toggle(1);
        assert_eq!(calculator.selected_count(), 0);
        assert_eq!(calculator.summary(), Ok(None));
    }

    #[test]
    fn malformed_catalog_cost_surfaces_as_error() {
        let mut catalog = SOLUTIONS;
        catalog[1].cost = "8 million";
        let result = ImpactCalculator::default().summarize(&catalog);
        assert_eq!(
            result,
            Err(CostParseError::MissingCurrency("8 million".to_string()))
        );
    }

    #[test]
    fn toggling_out_of_range_is_ignored() {
        let mut calculator = ImpactCalculator::default();
        calculator.toggle(9);
        assert_eq!(calculator, ImpactCalculator::default());
        assert!(!calculator.is_selected(9));
    }

    #[test]
    fn readiness_steps_by_ten() {
        assert_eq!(readiness(0), 65);
        assert_eq!(readiness(3), 95);
        assert_eq!(readiness(10), 100);
    }
}
