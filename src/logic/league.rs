//! League plans: one full round-robin over the participant list.

use crate::logic::schedule::{apply_schedule, repeat_legs, reschedule};
use crate::models::{Game, GamePlan, Participant, Phase, Tournament};
use log::debug;

/// Build the complete league plan: round-robin pairing, anti-repetition
/// ordering, round-robin fields, cycle times. Degenerate input (fewer than
/// two participants, or no fields) yields an empty plan.
pub fn create_league_plan(tournament: &Tournament) -> GamePlan {
    let cfg = tournament.phase_config(Phase::League);
    if tournament.participants.len() < 2 || tournament.fields.is_empty() {
        return GamePlan::new(tournament.id, Vec::new());
    }
    let games = league_games(&tournament.participants);
    let mut games = repeat_legs(games, cfg.matches_per_pair);
    apply_schedule(&mut games, tournament, cfg);
    debug!(
        "league plan for {}: {} games on {} fields",
        tournament.id,
        games.len(),
        tournament.fields.len()
    );
    GamePlan::new(tournament.id, games)
}

/// Recompute field and time assignment over the plan's existing order,
/// for non-structural setting changes (start date, duration, break, fields).
pub fn update_league_fields_and_dates(plan: &GamePlan, tournament: &Tournament) -> GamePlan {
    reschedule(plan, tournament, tournament.phase_config(Phase::League))
}

/// One ordered round-robin leg. `first` is always the participant with the
/// earlier input index.
pub(crate) fn league_games(participants: &[Participant]) -> Vec<Game> {
    round_robin_pairs(participants.len())
        .into_iter()
        .map(|(i, j)| Game::new(participants[i].clone(), participants[j].clone()))
        .collect()
}

/// Deterministic circle-method ordering of all unordered pairs of `0..n`.
///
/// Slot 0 is pinned (it holds the bye when `n` is odd) and the remaining
/// slots rotate one step per round. Each round pairs opposite slots and is
/// emitted outside-in, skipping the bye pair. This keeps consecutive games
/// participant-disjoint for n >= 6; for n of 4 or 5 a participant can play
/// two games back to back but never three.
fn round_robin_pairs(n: usize) -> Vec<(usize, usize)> {
    if n < 2 {
        return Vec::new();
    }
    let slots = if n % 2 == 0 { n } else { n + 1 };
    let bye = slots; // sentinel, only present in the ring for odd n
    let mut ring: Vec<usize> = if n % 2 == 0 {
        (0..slots).collect()
    } else {
        std::iter::once(bye).chain(0..n).collect()
    };

    let mut pairs = Vec::with_capacity(n * (n - 1) / 2);
    for _ in 0..slots - 1 {
        for i in 0..slots / 2 {
            let (a, b) = (ring[i], ring[slots - 1 - i]);
            if a == bye || b == bye {
                continue;
            }
            pairs.push((a.min(b), a.max(b)));
        }
        // rotate everything except the pinned slot 0
        if let Some(last) = ring.pop() {
            ring.insert(1, last);
        }
    }
    pairs
}
