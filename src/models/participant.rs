//! Participants and their snapshots carried by groups and games.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a participant.
pub type ParticipantId = Uuid;

/// A tournament participant (team or player).
///
/// The same type doubles as the snapshot stored inside groups and games:
/// snapshots are clones taken at generation time, never live references,
/// so later edits to a participant's name or logo do not rewrite history.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    pub id: ParticipantId,
    pub name: String,
    /// Reference to an uploaded logo (key or URL), if any.
    pub logo: Option<String>,
}

impl Participant {
    /// Create a new participant with the given name and no logo.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            logo: None,
        }
    }
}
