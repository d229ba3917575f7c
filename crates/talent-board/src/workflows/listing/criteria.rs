use std::collections::BTreeSet;

use serde::Serialize;

use super::domain::JobPosting;
use super::salary::parse_leading_salary;
use crate::config::BoardConfig;

/// Inclusive salary window selected on the range slider.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SalaryBounds {
    min: f64,
    max: f64,
}

impl SalaryBounds {
    /// Builds the window, swapping the ends if they arrive reversed.
    pub fn new(min: f64, max: f64) -> Self {
        if min <= max {
            Self { min, max }
        } else {
            Self { min: max, max: min }
        }
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

impl From<&BoardConfig> for SalaryBounds {
    fn from(config: &BoardConfig) -> Self {
        Self::new(config.salary_floor, config.salary_ceiling)
    }
}

impl Default for SalaryBounds {
    fn default() -> Self {
        Self::from(&BoardConfig::default())
    }
}

/// User-chosen constraints over the listing. Empty sets do not restrict.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct FilterCriteria {
    pub search_text: String,
    pub selected_locations: BTreeSet<String>,
    pub selected_types: BTreeSet<String>,
    pub salary_bounds: SalaryBounds,
}

impl FilterCriteria {
    pub fn with_bounds(salary_bounds: SalaryBounds) -> Self {
        Self {
            salary_bounds,
            ..Self::default()
        }
    }

    pub fn matches(&self, posting: &JobPosting) -> bool {
        self.matches_search(posting)
            && self.matches_location(posting)
            && self.matches_type(posting)
            && self.matches_salary(posting)
    }

    fn matches_search(&self, posting: &JobPosting) -> bool {
        // Whitespace-only input is blank; anything else is matched as typed.
        if self.search_text.trim().is_empty() {
            return true;
        }

        let needle = self.search_text.to_lowercase();
        posting.title.to_lowercase().contains(&needle)
            || posting.company.to_lowercase().contains(&needle)
    }

    fn matches_location(&self, posting: &JobPosting) -> bool {
        self.selected_locations.is_empty() || self.selected_locations.contains(&posting.location)
    }

    fn matches_type(&self, posting: &JobPosting) -> bool {
        self.selected_types.is_empty() || self.selected_types.contains(&posting.job_type)
    }

    fn matches_salary(&self, posting: &JobPosting) -> bool {
        match parse_leading_salary(&posting.salary_range) {
            Some(value) => self.salary_bounds.contains(value),
            None => true,
        }
    }
}
