//! Field and time assignment shared by every creator.
//!
//! Fields rotate round-robin over the final game order. Times go in
//! "cycles": one wave of simultaneous games, one per field, all sharing a
//! kickoff; the next cycle starts after match duration plus break.

use crate::models::{Field, Game, GamePlan, PhaseConfig, TimeBlock, Tournament};
use chrono::{DateTime, Duration, Utc};

/// `games[i]` plays on `fields[i % fields.len()]`.
pub(crate) fn assign_fields(games: &mut [Game], fields: &[Field]) {
    if fields.is_empty() {
        return;
    }
    for (i, game) in games.iter_mut().enumerate() {
        game.field = Some(fields[i % fields.len()].clone());
    }
}

/// Assign cycle kickoffs starting at `start`. Cycle `i / field_count`
/// begins at `start + cycle * (duration + break)`.
pub(crate) fn assign_times(
    games: &mut [Game],
    start: DateTime<Utc>,
    field_count: usize,
    cfg: &PhaseConfig,
) {
    if field_count == 0 {
        return;
    }
    let duration = Duration::minutes(cfg.match_duration);
    let pause = Duration::minutes(cfg.match_break);
    for (i, game) in games.iter_mut().enumerate() {
        let cycle = (i / field_count) as i32;
        let kickoff = start + (duration + pause) * cycle;
        game.time = Some(TimeBlock {
            start: kickoff,
            end: kickoff + duration,
            duration_minutes: cfg.match_duration,
        });
    }
}

/// Run both assignment passes over an ordered game sequence.
pub(crate) fn apply_schedule(games: &mut [Game], tournament: &Tournament, cfg: &PhaseConfig) {
    assign_fields(games, &tournament.fields);
    assign_times(games, tournament.start_date, tournament.fields.len(), cfg);
}

/// Recompute fields and times over a plan's existing order. Game identities
/// and positions are untouched; only field/time blocks change.
pub(crate) fn reschedule(plan: &GamePlan, tournament: &Tournament, cfg: &PhaseConfig) -> GamePlan {
    let mut updated = plan.clone();
    apply_schedule(&mut updated.games, tournament, cfg);
    updated.touch();
    updated
}

/// Append `legs - 1` verbatim copies of the ordered block, under fresh ids.
/// Extra legs are not re-ordered.
pub(crate) fn repeat_legs(games: Vec<Game>, legs: u32) -> Vec<Game> {
    if legs <= 1 || games.is_empty() {
        return games;
    }
    let extra: Vec<Game> = (1..legs)
        .flat_map(|_| games.iter().map(Game::clone_with_new_id))
        .collect();
    let mut all = games;
    all.extend(extra);
    all
}
