//! Game plans and the errors plan generation can raise.

use crate::models::game::Game;
use crate::models::tournament::TournamentId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Errors that can occur while generating or updating a game plan.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PlanError {
    /// An interleaving pass over the group games placed zero games.
    /// Indicates a bug in pairing generation, not a runtime condition.
    InterleavingStalled,
    /// Groups cannot be paired two-at-a-time with an equal number of
    /// qualified participants each.
    UnevenBracket { groups: usize, qualified: u32 },
    /// The injected group lookup failed.
    GroupLookup(String),
}

impl std::fmt::Display for PlanError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlanError::InterleavingStalled => {
                write!(f, "group interleaving pass scheduled no games")
            }
            PlanError::UnevenBracket { groups, qualified } => write!(
                f,
                "{qualified} qualified participants cannot be split evenly over {groups} groups"
            ),
            PlanError::GroupLookup(reason) => write!(f, "group lookup failed: {reason}"),
        }
    }
}

impl std::error::Error for PlanError {}

/// Unique identifier for a game plan.
pub type GamePlanId = Uuid;

/// The ordered, time- and field-assigned set of games for a tournament.
///
/// The game order is the play order and is meaningful in itself; reordering
/// is a first-class operation. Outside of reorder and field/date updates the
/// set of game identities never changes.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GamePlan {
    pub id: GamePlanId,
    pub tournament_id: TournamentId,
    pub games: Vec<Game>,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
    pub version: u32,
}

impl GamePlan {
    /// Wrap a generated game sequence into a fresh plan.
    pub fn new(tournament_id: TournamentId, games: Vec<Game>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            tournament_id,
            games,
            created_at: now,
            modified_at: now,
            version: 1,
        }
    }

    /// Record an in-place update (reorder or field/date recompute).
    pub fn touch(&mut self) {
        self.modified_at = Utc::now();
        self.version += 1;
    }
}
