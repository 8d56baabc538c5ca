use crate::entity;
use crate::error::{SchemaError, SummaryError};
use crate::filter::RowFilter;
use crate::metrics::derive_metrics;
use crate::model::{DailyPoint, StatusProfile, SummaryTotals};
use crate::normalize::normalize_rows;
use crate::pivot::build_pivot;
use crate::series::daily_series;
use crate::source::RawRow;
use crate::summary::summarize;
use crate::taxonomy::StatusTaxonomy;
use chrono::NaiveDate;
use std::collections::BTreeSet;
use tracing::debug;

/// One log source's transformation pipeline, parameterized by that source's
/// status-code taxonomy. Both sources run the exact same code; only the
/// taxonomy differs.
#[derive(Debug, Clone)]
pub struct Pipeline {
    taxonomy: StatusTaxonomy,
}

impl Pipeline {
    pub fn new(taxonomy: StatusTaxonomy) -> Self {
        Self { taxonomy }
    }

    /// Run the batch through normalize -> pivot -> derive -> decompose.
    ///
    /// Pure with respect to its input: the same batch always builds the same
    /// profile set. Structural defects abort with `SchemaError` and no
    /// partial output.
    pub fn build(&self, raw: &[RawRow]) -> Result<ProfileSet, SchemaError> {
        let rows = normalize_rows(raw)?;
        let pivot = build_pivot(&rows);

        let profiles = pivot
            .into_iter()
            .map(|row| {
                let derived = derive_metrics(&row.counts, &self.taxonomy);
                let key = entity::decompose(&row.entity_id);

                // The entity id is fully consumed by the decomposition;
                // nothing downstream reads it.
                StatusProfile {
                    date: row.date,
                    method: row.method,
                    category: key.category,
                    name_extract: key.name_extract,
                    counts: row.counts,
                    success: derived.success,
                    failures: derived.failures,
                    total: derived.total,
                    fail_pct: derived.fail_pct,
                }
            })
            .collect::<Vec<_>>();

        debug!(profiles = profiles.len(), "built profile set");

        Ok(ProfileSet { profiles })
    }
}

/// The full (unfiltered) profile collection for one source's batch, plus the
/// observed filter domains a selection UI needs to populate its widgets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileSet {
    profiles: Vec<StatusProfile>,
}

impl ProfileSet {
    pub fn profiles(&self) -> &[StatusProfile] {
        &self.profiles
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Distinct methods observed in the batch, sorted.
    pub fn observed_methods(&self) -> BTreeSet<String> {
        self.profiles.iter().map(|p| p.method.clone()).collect()
    }

    /// Distinct categories observed in the batch, sorted. Profiles whose
    /// entity id was too short to carry a category contribute nothing.
    pub fn observed_categories(&self) -> BTreeSet<String> {
        self.profiles
            .iter()
            .filter_map(|p| p.category.clone())
            .collect()
    }

    /// Min and max observed date, the default bounds for the date filter.
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        let min = self.profiles.iter().map(|p| p.date).min()?;
        let max = self.profiles.iter().map(|p| p.date).max()?;
        Some((min, max))
    }

    /// Apply a filter, producing the output triple's subset. Never mutates
    /// the unfiltered collection.
    pub fn select(&self, filter: &RowFilter) -> Selection {
        Selection {
            profiles: filter.apply(&self.profiles),
        }
    }
}

/// A filtered view of a profile set: the triple handed to the rendering
/// side is this table, its daily series, and its summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    profiles: Vec<StatusProfile>,
}

impl Selection {
    pub fn profiles(&self) -> &[StatusProfile] {
        &self.profiles
    }

    pub fn daily_series(&self) -> Vec<DailyPoint> {
        daily_series(&self.profiles)
    }

    pub fn summary(&self) -> Result<SummaryTotals, SummaryError> {
        summarize(&self.profiles)
    }
}
