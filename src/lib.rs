//! Tournament game-plan engine: round-robin, group-stage, and knockout
//! scheduling with field and time assignment, plus plan reordering.
//!
//! Pure in-memory computation: the engine consumes tournament and group
//! data, returns a [`GamePlan`], and persists nothing. The one async
//! boundary is the injected [`GroupSource`] group lookup.

pub mod logic;
pub mod models;

pub use logic::{
    add_participant_to_group, create_group_knockout_plan, create_group_stage_plan,
    create_knockout_plan, create_league_plan, group_stage_games, init_groups, knockout_games,
    remove_participant_from_group, sort_game_plan, update_group_knockout_fields_and_dates,
    update_group_stage_fields_and_dates, update_league_fields_and_dates, GamePlanManager,
    GroupSource,
};
pub use models::{
    Field, FieldId, Game, GameId, GamePlan, GamePlanId, GameSlot, GameStatus, Group, GroupId,
    KnockoutRound, Participant, ParticipantId, ParticipantRule, Phase, PhaseConfig, PlanError,
    Score, Tiebreaker, TimeBlock, Tournament, TournamentFormat, TournamentId,
};
