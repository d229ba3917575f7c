use serde::Serialize;
use tracing::debug;

use super::criteria::{FilterCriteria, SalaryBounds};
use super::domain::{seed_postings, JobPosting};
use crate::config::BoardConfig;

/// The two listing tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BoardTab {
    Available,
    Applied,
}

impl BoardTab {
    pub const fn ordered() -> [Self; 2] {
        [Self::Available, Self::Applied]
    }

    pub const fn title(self) -> &'static str {
        match self {
            Self::Available => "Todas",
            Self::Applied => "Candidaturas",
        }
    }
}

/// Filtered postings split by whether the user has applied.
#[derive(Debug, Clone)]
pub struct BoardView<'a> {
    pub available: Vec<&'a JobPosting>,
    pub applied: Vec<&'a JobPosting>,
}

impl<'a> BoardView<'a> {
    pub fn tab(&self, tab: BoardTab) -> &[&'a JobPosting] {
        match tab {
            BoardTab::Available => &self.available,
            BoardTab::Applied => &self.applied,
        }
    }

    pub fn count(&self, tab: BoardTab) -> usize {
        self.tab(tab).len()
    }

    /// Tab caption with its live count, e.g. `Todas (7)`.
    pub fn tab_label(&self, tab: BoardTab) -> String {
        format!("{} ({})", tab.title(), self.count(tab))
    }

    pub fn tab_labels(&self) -> [String; 2] {
        BoardTab::ordered().map(|tab| self.tab_label(tab))
    }

    pub fn len(&self) -> usize {
        self.available.len() + self.applied.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Posting collection plus the current criteria. Every mutation recomputes the
/// visible set before returning.
#[derive(Debug, Clone)]
pub struct JobBoard {
    postings: Vec<JobPosting>,
    criteria: FilterCriteria,
    default_bounds: SalaryBounds,
    visible: Vec<usize>,
}

impl JobBoard {
    pub fn new(postings: Vec<JobPosting>, config: &BoardConfig) -> Self {
        let default_bounds = SalaryBounds::from(config);
        let mut board = Self {
            postings,
            criteria: FilterCriteria::with_bounds(default_bounds),
            default_bounds,
            visible: Vec::new(),
        };
        board.refresh();
        board
    }

    pub fn seeded(config: &BoardConfig) -> Self {
        Self::new(seed_postings(), config)
    }

    pub fn postings(&self) -> &[JobPosting] {
        &self.postings
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn default_bounds(&self) -> SalaryBounds {
        self.default_bounds
    }

    /// Postings passing the current criteria, in listing order.
    pub fn visible(&self) -> impl Iterator<Item = &JobPosting> + '_ {
        self.visible.iter().map(|&index| &self.postings[index])
    }

    pub fn view(&self) -> BoardView<'_> {
        let (applied, available): (Vec<_>, Vec<_>) =
            self.visible().partition(|posting| posting.applied);
        BoardView { available, applied }
    }

    /// Distinct locations across all postings, in first-seen order.
    pub fn locations(&self) -> Vec<&str> {
        distinct(self.postings.iter().map(|posting| posting.location.as_str()))
    }

    /// Distinct job types across all postings, in first-seen order.
    pub fn job_types(&self) -> Vec<&str> {
        distinct(self.postings.iter().map(|posting| posting.job_type.as_str()))
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.criteria.search_text = text.into();
        self.refresh();
    }

    /// Flips a location chip. Returns whether the location is now selected.
    pub fn toggle_location(&mut self, location: &str) -> bool {
        let selected = toggle(&mut self.criteria.selected_locations, location);
        self.refresh();
        selected
    }

    /// Flips a job-type chip. Returns whether the type is now selected.
    pub fn toggle_job_type(&mut self, job_type: &str) -> bool {
        let selected = toggle(&mut self.criteria.selected_types, job_type);
        self.refresh();
        selected
    }

    pub fn set_salary_bounds(&mut self, bounds: SalaryBounds) {
        self.criteria.salary_bounds = bounds;
        self.refresh();
    }

    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
        self.refresh();
    }

    pub fn clear_filters(&mut self) {
        self.criteria = FilterCriteria::with_bounds(self.default_bounds);
        self.refresh();
    }

    /// Marks every posting titled `title` as applied.
    ///
    /// Postings are identified by title, so duplicates are marked together.
    /// Already-applied postings are left untouched. Returns how many postings
    /// changed.
    pub fn mark_applied(&mut self, title: &str) -> usize {
        let mut changed = 0;
        for posting in self.postings.iter_mut().filter(|p| p.title == title) {
            if posting.can_apply() {
                posting.applied = true;
                changed += 1;
            }
        }

        if changed > 0 {
            debug!(title, changed, "marked posting as applied");
            self.refresh();
        }
        changed
    }

    fn refresh(&mut self) {
        let criteria = &self.criteria;
        self.visible = self
            .postings
            .iter()
            .enumerate()
            .filter(|(_, posting)| criteria.matches(posting))
            .map(|(index, _)| index)
            .collect();
    }
}

fn toggle(selection: &mut std::collections::BTreeSet<String>, value: &str) -> bool {
    if selection.remove(value) {
        false
    } else {
        selection.insert(value.to_string());
        true
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = Vec::new();
    for value in values {
        if !seen.contains(&value) {
            seen.push(value);
        }
    }
    seen
}
