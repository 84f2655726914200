//! Tournament configuration as consumed by the planning engine.
//!
//! The engine does not own tournaments; it reads format, dates, fields,
//! participants, and the per-phase numbers, and hands back a game plan.

use crate::models::game::Field;
use crate::models::participant::Participant;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a tournament.
pub type TournamentId = Uuid;

/// Competition format of a tournament.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TournamentFormat {
    /// One round-robin table over all participants.
    League,
    /// Single-elimination bracket only.
    Knockout,
    /// Group stage feeding a knockout bracket.
    GroupKnockout,
}

/// Phase of a tournament, keying per-phase configuration.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Phase {
    League,
    GroupStage,
    Knockout,
}

/// Criteria for ranking participants with equal points, in priority order.
/// Carried as configuration; standings resolution happens elsewhere.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Tiebreaker {
    Points,
    GoalDifference,
    GoalsScored,
    DirectComparison,
}

/// Numeric settings of one phase.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct PhaseConfig {
    /// How often each participant meets each other participant.
    pub matches_per_pair: u32,
    /// Match duration in minutes.
    pub match_duration: i64,
    /// Break after each match in minutes.
    pub match_break: i64,
    pub points_for_win: u32,
    pub points_for_draw: u32,
    pub tiebreakers: Vec<Tiebreaker>,
}

impl Default for PhaseConfig {
    fn default() -> Self {
        Self {
            matches_per_pair: 1,
            match_duration: 15,
            match_break: 5,
            points_for_win: 3,
            points_for_draw: 1,
            tiebreakers: vec![
                Tiebreaker::Points,
                Tiebreaker::GoalDifference,
                Tiebreaker::GoalsScored,
                Tiebreaker::DirectComparison,
            ],
        }
    }
}

/// Tournament configuration record.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Tournament {
    pub id: TournamentId,
    pub name: String,
    pub format: TournamentFormat,
    /// Phases active for this format, in play order.
    pub phases: Vec<Phase>,
    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    /// Order matters: it determines round-robin field assignment.
    pub fields: Vec<Field>,
    pub participants: Vec<Participant>,
    pub league: PhaseConfig,
    pub group_stage: PhaseConfig,
    pub knockout: PhaseConfig,
    /// Number of groups in the group stage.
    pub number_of_groups: u32,
    /// Total participants advancing to the knockout stage, across all groups.
    pub qualified_participants: u32,
    /// Whether the bracket gets a third-place match.
    pub third_place_match: bool,
}

impl Tournament {
    /// Create a tournament with default phase settings and no participants.
    pub fn new(
        name: impl Into<String>,
        format: TournamentFormat,
        start_date: DateTime<Utc>,
    ) -> Self {
        let phases = match format {
            TournamentFormat::League => vec![Phase::League],
            TournamentFormat::Knockout => vec![Phase::Knockout],
            TournamentFormat::GroupKnockout => vec![Phase::GroupStage, Phase::Knockout],
        };
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            format,
            phases,
            start_date,
            end_date: None,
            fields: Vec::new(),
            participants: Vec::new(),
            league: PhaseConfig::default(),
            group_stage: PhaseConfig::default(),
            knockout: PhaseConfig::default(),
            number_of_groups: 2,
            qualified_participants: 4,
            third_place_match: false,
        }
    }

    /// Settings of the given phase.
    pub fn phase_config(&self, phase: Phase) -> &PhaseConfig {
        match phase {
            Phase::League => &self.league,
            Phase::GroupStage => &self.group_stage,
            Phase::Knockout => &self.knockout,
        }
    }
}
