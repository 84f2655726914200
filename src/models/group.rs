//! Groups for the group stage: named buckets of participant snapshots.

use crate::models::participant::Participant;
use crate::models::tournament::TournamentId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a group.
pub type GroupId = Uuid;

/// A group of participants within one tournament.
///
/// Participant entries are snapshots (copies of id/name/logo) in the order
/// they were assigned; that order is what group-stage pairing walks.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub id: GroupId,
    pub tournament_id: TournamentId,
    pub name: String,
    pub participants: Vec<Participant>,
}

impl Group {
    /// Create an empty group for a tournament.
    pub fn new(tournament_id: TournamentId, name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            tournament_id,
            name: name.into(),
            participants: Vec::new(),
        }
    }
}
