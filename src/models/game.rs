//! Games, fields, time blocks, and the knockout participant rules.

use crate::models::group::GroupId;
use crate::models::participant::{Participant, ParticipantId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a game.
pub type GameId = Uuid;

/// Unique identifier for a field.
pub type FieldId = Uuid;

/// A playing field. The tournament's field order drives round-robin
/// field assignment, so it matters.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub id: FieldId,
    pub name: String,
}

impl Field {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
        }
    }
}

/// Current score of a game. New games start at 0:0.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Score {
    pub first: u32,
    pub second: u32,
}

/// Scheduled slot of a game: kickoff, end, and the configured duration.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TimeBlock {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    /// Match duration in minutes (excludes the break that follows).
    pub duration_minutes: i64,
}

/// Lifecycle status of a game.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameStatus {
    #[default]
    Pending,
    Planned,
    Playing,
    Finished,
}

/// Rule for a not-yet-known knockout participant. Resolving a rule into a
/// concrete participant happens after results exist and is not done here.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ParticipantRule {
    /// The team finishing `place` (1-based) in group `group_id`.
    PlacementInGroup { group_id: GroupId, place: u32 },
    /// The winner of an earlier bracket game.
    WinnerOfGame { game_id: GameId },
    /// The loser of an earlier bracket game (third-place match only).
    LoserOfGame { game_id: GameId },
}

/// One participant slot of a game: concrete for league/group games,
/// a rule for bracket games.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GameSlot {
    Fixed(Participant),
    Rule(ParticipantRule),
}

impl GameSlot {
    /// Concrete participant in this slot, if already known.
    pub fn participant(&self) -> Option<&Participant> {
        match self {
            GameSlot::Fixed(p) => Some(p),
            GameSlot::Rule(_) => None,
        }
    }

    /// Rule in this slot, if the participant is still to be decided.
    pub fn rule(&self) -> Option<&ParticipantRule> {
        match self {
            GameSlot::Fixed(_) => None,
            GameSlot::Rule(r) => Some(r),
        }
    }
}

/// Bracket round a knockout game belongs to.
///
/// Labels follow the fixed bracket-size table (see `logic::knockout`);
/// `Other(n)` is the placeholder for bracket sizes outside the table.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum KnockoutRound {
    #[serde(rename = "LAST_64")]
    Last64,
    #[serde(rename = "LAST_32")]
    Last32,
    #[serde(rename = "LAST_16")]
    Last16,
    QuarterFinals,
    SemiFinals,
    Final,
    ThirdPlace,
    Other(u32),
}

/// A single game of the plan.
///
/// One struct covers all three shapes the plan can hold: plain league games,
/// group-stage games (`group_id` set), and bracket games (`round` set, slots
/// carry rules). That way a game plan is one ordered sequence regardless of
/// format, and field/time assignment can walk it uniformly.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Game {
    pub id: GameId,
    pub first: GameSlot,
    pub second: GameSlot,
    pub score: Score,
    /// None until time assignment has run.
    pub time: Option<TimeBlock>,
    /// None until field assignment has run.
    pub field: Option<Field>,
    pub status: GameStatus,
    /// Owning group, for group-stage games.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<GroupId>,
    /// Bracket round, for knockout games.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub round: Option<KnockoutRound>,
}

impl Game {
    /// A league game between two concrete participants.
    pub fn new(first: Participant, second: Participant) -> Self {
        Self {
            id: Uuid::new_v4(),
            first: GameSlot::Fixed(first),
            second: GameSlot::Fixed(second),
            score: Score::default(),
            time: None,
            field: None,
            status: GameStatus::default(),
            group_id: None,
            round: None,
        }
    }

    /// A group-stage game, tagged with its owning group.
    pub fn group(group_id: GroupId, first: Participant, second: Participant) -> Self {
        Self {
            group_id: Some(group_id),
            ..Self::new(first, second)
        }
    }

    /// A bracket game whose participants are still rules.
    pub fn knockout(first: ParticipantRule, second: ParticipantRule, round: KnockoutRound) -> Self {
        Self {
            id: Uuid::new_v4(),
            first: GameSlot::Rule(first),
            second: GameSlot::Rule(second),
            score: Score::default(),
            time: None,
            field: None,
            status: GameStatus::default(),
            group_id: None,
            round: Some(round),
        }
    }

    /// Copy of this game under a fresh id (for extra round-robin legs).
    pub fn clone_with_new_id(&self) -> Self {
        Self {
            id: Uuid::new_v4(),
            ..self.clone()
        }
    }

    /// Whether a concrete participant plays in this game.
    /// Rule slots never match: the participant is not decided yet.
    pub fn involves(&self, id: ParticipantId) -> bool {
        [&self.first, &self.second]
            .iter()
            .any(|slot| slot.participant().is_some_and(|p| p.id == id))
    }

    /// Both concrete participant ids, for games with no rule slots.
    pub fn fixed_pair(&self) -> Option<(ParticipantId, ParticipantId)> {
        match (self.first.participant(), self.second.participant()) {
            (Some(a), Some(b)) => Some((a.id, b.id)),
            _ => None,
        }
    }
}
