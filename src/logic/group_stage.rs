//! Group-stage plans: per-group round-robin, interleaved across groups.

use crate::logic::schedule::{apply_schedule, repeat_legs, reschedule};
use crate::logic::GroupSource;
use crate::models::{Game, GamePlan, Group, ParticipantId, Phase, PlanError, Tournament};
use log::debug;

/// Build the group-stage plan from externally stored groups. Degenerate
/// input (no fields, no groups) yields an empty plan; a failed group
/// lookup aborts with no partial plan.
pub async fn create_group_stage_plan(
    tournament: &Tournament,
    source: &impl GroupSource,
) -> Result<GamePlan, PlanError> {
    let cfg = tournament.phase_config(Phase::GroupStage);
    if tournament.fields.is_empty() {
        return Ok(GamePlan::new(tournament.id, Vec::new()));
    }
    let groups = source.groups(tournament.id).await?;
    let games = group_stage_games(&groups)?;
    let mut games = repeat_legs(games, cfg.matches_per_pair);
    apply_schedule(&mut games, tournament, cfg);
    debug!(
        "group stage plan for {}: {} games across {} groups",
        tournament.id,
        games.len(),
        groups.len()
    );
    Ok(GamePlan::new(tournament.id, games))
}

/// Recompute field and time assignment over the plan's existing order.
pub fn update_group_stage_fields_and_dates(plan: &GamePlan, tournament: &Tournament) -> GamePlan {
    reschedule(plan, tournament, tournament.phase_config(Phase::GroupStage))
}

/// Pair every group internally, then interleave the groups' games.
///
/// Scheduling runs in passes: each pass appends at most one pending game
/// per group, preferring one that repeats no participant from that group's
/// previously scheduled game, else the group's next pending game. A pass
/// that places nothing means the candidate set is inconsistent and is
/// surfaced as a fatal error rather than dropping games.
pub fn group_stage_games(groups: &[Group]) -> Result<Vec<Game>, PlanError> {
    let mut pending: Vec<Vec<Game>> = groups.iter().map(group_games).collect();
    let mut last_pair: Vec<Option<(ParticipantId, ParticipantId)>> = vec![None; groups.len()];
    let total = pending.iter().map(Vec::len).sum();

    let mut ordered: Vec<Game> = Vec::with_capacity(total);
    while ordered.len() < total {
        let placed_before = ordered.len();
        for (gi, queue) in pending.iter_mut().enumerate() {
            if queue.is_empty() {
                continue;
            }
            let pick = last_pair[gi]
                .and_then(|(a, b)| queue.iter().position(|g| !g.involves(a) && !g.involves(b)))
                .unwrap_or(0);
            let game = queue.remove(pick);
            last_pair[gi] = game.fixed_pair();
            ordered.push(game);
        }
        if ordered.len() == placed_before {
            return Err(PlanError::InterleavingStalled);
        }
    }
    Ok(ordered)
}

/// Every unordered pair of one group, in participant order, tagged with
/// the group id.
fn group_games(group: &Group) -> Vec<Game> {
    let ps = &group.participants;
    let mut games = Vec::new();
    for i in 0..ps.len() {
        for j in i + 1..ps.len() {
            games.push(Game::group(group.id, ps[i].clone(), ps[j].clone()));
        }
    }
    games
}
