//! Combined plans: group stage first, bracket after, scheduled in one pass.

use crate::logic::group_stage::group_stage_games;
use crate::logic::knockout::knockout_games;
use crate::logic::schedule::{apply_schedule, repeat_legs, reschedule};
use crate::logic::GroupSource;
use crate::models::{GamePlan, Phase, PlanError, Tournament};
use log::debug;

/// Build group-stage and bracket games, concatenate them (group games
/// first), and run a single field and time assignment pass over the whole
/// sequence.
///
/// The combined pass schedules with the league phase's duration and break,
/// not the group/knockout settings. Legacy behavior; keep until product
/// signs off on per-phase times.
pub async fn create_group_knockout_plan(
    tournament: &Tournament,
    source: &impl GroupSource,
) -> Result<GamePlan, PlanError> {
    if tournament.fields.is_empty() {
        return Ok(GamePlan::new(tournament.id, Vec::new()));
    }
    let groups = source.groups(tournament.id).await?;
    let group_cfg = tournament.phase_config(Phase::GroupStage);
    let mut games = repeat_legs(group_stage_games(&groups)?, group_cfg.matches_per_pair);
    games.extend(knockout_games(tournament, &groups)?);
    apply_schedule(&mut games, tournament, tournament.phase_config(Phase::League));
    debug!(
        "group+knockout plan for {}: {} games across {} groups",
        tournament.id,
        games.len(),
        groups.len()
    );
    Ok(GamePlan::new(tournament.id, games))
}

/// Recompute field and time assignment over the existing combined order.
pub fn update_group_knockout_fields_and_dates(
    plan: &GamePlan,
    tournament: &Tournament,
) -> GamePlan {
    reschedule(plan, tournament, tournament.phase_config(Phase::League))
}
