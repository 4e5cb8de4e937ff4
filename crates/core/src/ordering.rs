//! Dense position bookkeeping for manually ordered lists.
//!
//! Ordered tables (karaoke signups, slider images) store an integer position
//! per row. After every mutation the active rows are renumbered `1..=n` in
//! their new order, so positions never have gaps or duplicates.

use std::collections::HashSet;

use crate::error::CoreError;
use crate::types::DbId;

/// Assign positions `1..=n` to `ids` in order.
pub fn sequence(ids: &[DbId]) -> Vec<(DbId, i64)> {
    ids.iter()
        .enumerate()
        .map(|(index, id)| (*id, index as i64 + 1))
        .collect()
}

/// Move `id` to the 1-based `target` position, clamped into `1..=len`.
///
/// Returns `None` if `id` is not in `order`.
pub fn move_to_position(order: &[DbId], id: DbId, target: i64) -> Option<Vec<DbId>> {
    let current = order.iter().position(|x| *x == id)?;
    let mut reordered = order.to_vec();
    let item = reordered.remove(current);

    let max = order.len() as i64;
    let index = (target.clamp(1, max) - 1) as usize;
    reordered.insert(index, item);
    Some(reordered)
}

/// Swap `id` with its predecessor (`up`) or successor (`!up`).
///
/// Moving the first item up or the last item down leaves the order unchanged.
/// Returns `None` if `id` is not in `order`.
pub fn swap_adjacent(order: &[DbId], id: DbId, up: bool) -> Option<Vec<DbId>> {
    let current = order.iter().position(|x| *x == id)?;
    let mut reordered = order.to_vec();
    if up && current > 0 {
        reordered.swap(current, current - 1);
    } else if !up && current + 1 < reordered.len() {
        reordered.swap(current, current + 1);
    }
    Some(reordered)
}

/// Check that `requested` is a permutation of `current`.
///
/// Used by explicit reorder requests, which must mention every row exactly
/// once.
pub fn validate_permutation(current: &[DbId], requested: &[DbId]) -> Result<(), CoreError> {
    let mut seen = HashSet::with_capacity(requested.len());
    for id in requested {
        if !seen.insert(*id) {
            return Err(CoreError::Validation(format!(
                "Duplicate id {id} in requested order"
            )));
        }
    }

    let known: HashSet<DbId> = current.iter().copied().collect();
    if let Some(unknown) = requested.iter().find(|id| !known.contains(id)) {
        return Err(CoreError::Validation(format!(
            "Unknown id {unknown} in requested order"
        )));
    }

    if requested.len() != current.len() {
        return Err(CoreError::Validation(format!(
            "Requested order has {} ids but the list has {}",
            requested.len(),
            current.len()
        )));
    }

    Ok(())
}
