use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Which status codes count as success, failure, and volume for one log
/// source. Every source carries its own taxonomy; the pipeline never
/// hard-codes status codes.
///
/// `total_codes` is the denominator set. It is normally a superset of
/// `success_codes ∪ failure_codes`, but that is not enforced: codes outside
/// `total_codes` simply never contribute to derived metrics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusTaxonomy {
    pub success_codes: BTreeSet<u16>,
    pub failure_codes: BTreeSet<u16>,
    pub total_codes: BTreeSet<u16>,
}
