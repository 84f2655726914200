//! Reordering: move one game to a new position, then reschedule.

use crate::logic::schedule::apply_schedule;
use crate::models::{GamePlan, Phase, Tournament};

/// Move the game at `old_index` to `new_index` (games in between shift by
/// one position) and recompute field and time assignment over the new
/// order. Indices beyond the end are clamped to the last game.
///
/// No validation of pairing or anti-repetition invariants happens here;
/// whether a move is sensible is the caller's policy. Scheduling uses the
/// league phase's times for every format, like the combined creator.
pub fn sort_game_plan(
    plan: &GamePlan,
    tournament: &Tournament,
    old_index: usize,
    new_index: usize,
) -> GamePlan {
    let mut sorted = plan.clone();
    if !sorted.games.is_empty() {
        let last = sorted.games.len() - 1;
        let game = sorted.games.remove(old_index.min(last));
        sorted.games.insert(new_index.min(last), game);
        apply_schedule(
            &mut sorted.games,
            tournament,
            tournament.phase_config(Phase::League),
        );
    }
    sorted.touch();
    sorted
}
