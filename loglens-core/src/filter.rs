use crate::model::StatusProfile;
use chrono::NaiveDate;
use std::collections::BTreeSet;

/// Composable row filter: date range, method set, category set, all ANDed.
///
/// `None` for a set means unconstrained ("all observed values"); an explicit
/// empty set matches nothing. That asymmetry is the natural semantics of set
/// membership and is relied on by callers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowFilter {
    /// Inclusive lower bound.
    pub start_date: Option<NaiveDate>,

    /// Inclusive upper bound.
    pub end_date: Option<NaiveDate>,

    pub methods: Option<BTreeSet<String>>,

    pub categories: Option<BTreeSet<String>>,
}

impl RowFilter {
    pub fn matches(&self, profile: &StatusProfile) -> bool {
        if let Some(start) = self.start_date
            && profile.date < start
        {
            return false;
        }

        if let Some(end) = self.end_date
            && profile.date > end
        {
            return false;
        }

        if let Some(methods) = &self.methods
            && !methods.contains(&profile.method)
        {
            return false;
        }

        if let Some(categories) = &self.categories {
            // A profile without a category can never satisfy an explicit
            // category selection.
            match &profile.category {
                Some(category) if categories.contains(category) => {}
                _ => return false,
            }
        }

        true
    }

    /// Returns the matching subset as a new collection; the input is never
    /// mutated.
    pub fn apply(&self, profiles: &[StatusProfile]) -> Vec<StatusProfile> {
        profiles
            .iter()
            .filter(|p| self.matches(p))
            .cloned()
            .collect()
    }
}
