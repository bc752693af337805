//! Optimistic Updates
//!
//! Apply a speculative mutation, hold its pre-image, then commit or revert
//! once the confirming request settles.

use std::future::Future;

use super::StateCell;

/// Runs `apply` on the state, awaits `confirm`, and calls `revert` with the
/// pre-image if confirmation fails.
///
/// Returns `None` without calling `confirm` when `apply` declines (yields
/// no pre-image), e.g. because the target no longer exists.
pub async fn optimistic<T, S, P, R, E, Fut>(
    cell: &S,
    apply: impl FnOnce(&mut T) -> Option<P>,
    revert: impl FnOnce(&mut T, P),
    confirm: impl FnOnce() -> Fut,
) -> Option<Result<R, E>>
where
    S: StateCell<T>,
    Fut: Future<Output = Result<R, E>>,
{
    let pre_image = cell.update(apply).flatten()?;

    let outcome = confirm().await;
    if outcome.is_err() {
        cell.update(|state| revert(state, pre_image));
    }
    Some(outcome)
}
