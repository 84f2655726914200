//! Facade dispatching plan operations to the format-appropriate creator.

use crate::logic::group_knockout::{
    create_group_knockout_plan, update_group_knockout_fields_and_dates,
};
use crate::logic::knockout::create_knockout_plan;
use crate::logic::league::{create_league_plan, update_league_fields_and_dates};
use crate::logic::sort::sort_game_plan;
use crate::logic::GroupSource;
use crate::models::{GamePlan, PlanError, Tournament, TournamentFormat};

/// Entry point for the surrounding application: picks the right creator
/// for a tournament's format. Holds the injected group lookup and nothing
/// else; no state survives between calls.
pub struct GamePlanManager<S> {
    source: S,
}

impl<S: GroupSource> GamePlanManager<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Generate a fresh plan for the tournament.
    pub async fn create_game_plan(&self, tournament: &Tournament) -> Result<GamePlan, PlanError> {
        match tournament.format {
            TournamentFormat::League => Ok(create_league_plan(tournament)),
            TournamentFormat::Knockout => Ok(create_knockout_plan(tournament)),
            TournamentFormat::GroupKnockout => {
                create_group_knockout_plan(tournament, &self.source).await
            }
        }
    }

    /// Recompute fields and times over the plan's existing order, for
    /// non-structural setting changes.
    pub fn update_fields_and_dates(&self, plan: &GamePlan, tournament: &Tournament) -> GamePlan {
        match tournament.format {
            TournamentFormat::League => update_league_fields_and_dates(plan, tournament),
            TournamentFormat::Knockout | TournamentFormat::GroupKnockout => {
                update_group_knockout_fields_and_dates(plan, tournament)
            }
        }
    }

    /// Move one game to a new position (drag and drop). Every format
    /// currently reuses the league sorter.
    pub fn reorder_games(
        &self,
        plan: &GamePlan,
        tournament: &Tournament,
        old_index: usize,
        new_index: usize,
    ) -> GamePlan {
        sort_game_plan(plan, tournament, old_index, new_index)
    }
}
