//! Plan generation logic: one creator per format, reordering, group setup.

mod group_init;
mod group_knockout;
mod group_stage;
mod knockout;
mod league;
mod manager;
mod schedule;
mod sort;

use crate::models::{Group, PlanError, TournamentId};
use std::future::Future;

/// Injected capability to fetch a tournament's groups from storage; the
/// engine's only asynchronous boundary. A failure aborts plan generation
/// with nothing partially applied.
pub trait GroupSource {
    fn groups(
        &self,
        tournament_id: TournamentId,
    ) -> impl Future<Output = Result<Vec<Group>, PlanError>>;
}

pub use group_init::{add_participant_to_group, init_groups, remove_participant_from_group};
pub use group_knockout::{create_group_knockout_plan, update_group_knockout_fields_and_dates};
pub use group_stage::{
    create_group_stage_plan, group_stage_games, update_group_stage_fields_and_dates,
};
pub use knockout::{create_knockout_plan, knockout_games};
pub use league::{create_league_plan, update_league_fields_and_dates};
pub use manager::GamePlanManager;
pub use sort::sort_game_plan;
