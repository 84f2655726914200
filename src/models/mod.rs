//! Data structures for planning: participants, groups, games, plans, tournaments.

mod game;
mod group;
mod participant;
mod plan;
mod tournament;

pub use game::{
    Field, FieldId, Game, GameId, GameSlot, GameStatus, KnockoutRound, ParticipantRule, Score,
    TimeBlock,
};
pub use group::{Group, GroupId};
pub use participant::{Participant, ParticipantId};
pub use plan::{GamePlan, GamePlanId, PlanError};
pub use tournament::{
    Phase, PhaseConfig, Tiebreaker, Tournament, TournamentFormat, TournamentId,
};
