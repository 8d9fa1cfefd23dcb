use crate::record::OwnerSummary;

/// Sort summaries by `total_commission`, highest first.
///
/// The sort is stable: owners with equal totals keep their input order, which
/// the engine supplies as first-seen order. Audit lists are not touched.
pub fn rank_by_total(mut summaries: Vec<OwnerSummary>) -> Vec<OwnerSummary> {
    summaries.sort_by(|a, b| b.total_commission().cmp(&a.total_commission()));
    summaries
}
