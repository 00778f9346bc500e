//! In-memory selection pipeline: partition candidates by category, spread
//! the output budget across categories proportionally to interest, then
//! merge the per-category picks into one bounded, ranked list.

use super::ResourceCandidate;
use std::collections::{BTreeMap, HashMap};

/// Groups a flat candidate list by owning category, preserving the fetcher's
/// order inside each group. Nothing is dropped here; categories the user
/// never declared an interest in simply end up with weight zero later.
pub(crate) fn partition_by_category(
    candidates: Vec<ResourceCandidate>,
) -> BTreeMap<i64, Vec<ResourceCandidate>> {
    let mut groups: BTreeMap<i64, Vec<ResourceCandidate>> = BTreeMap::new();
    for candidate in candidates {
        groups.entry(candidate.category_id).or_default().push(candidate);
    }
    groups
}

/// Computes how many result slots each category may fill.
///
/// Every declared interest in scope contributes its level to the total
/// weight, including categories that produced no candidates; a category
/// starved of candidates therefore shrinks the realized result instead of
/// inflating its neighbours. Each category gets
/// `floor(weight / total * budget)` slots, capped at what it actually has.
/// Budget left unused by the cap is not redistributed.
pub(crate) fn allocate_slots(
    groups: &BTreeMap<i64, Vec<ResourceCandidate>>,
    weights: &HashMap<i64, i32>,
    budget: usize,
) -> BTreeMap<i64, usize> {
    let total_weight: i64 = weights.values().map(|w| i64::from((*w).max(0))).sum();

    let mut slots = BTreeMap::new();
    for (category_id, group) in groups {
        let share = if total_weight > 0 {
            let weight = i64::from(weights.get(category_id).copied().unwrap_or(0).max(0));
            ((weight * budget as i64) / total_weight) as usize
        } else {
            0
        };
        slots.insert(*category_id, share.min(group.len()));
    }
    slots
}

/// Draws each category's allotted prefix, concatenates the draws in
/// ascending category-id order and ranks the merged list by interest level
/// descending. The sort is stable, so ties keep their concatenation order.
/// Truncation is a defensive backstop; the allocation never over-fills.
pub(crate) fn select_and_merge(
    groups: BTreeMap<i64, Vec<ResourceCandidate>>,
    slots: &BTreeMap<i64, usize>,
    budget: usize,
) -> Vec<ResourceCandidate> {
    let mut merged = Vec::new();
    for (category_id, group) in groups {
        let take = slots.get(&category_id).copied().unwrap_or(0);
        merged.extend(group.into_iter().take(take));
    }

    merged.sort_by(|a, b| b.interest_level.cmp(&a.interest_level));
    merged.truncate(budget);
    merged
}
