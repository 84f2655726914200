//! Knockout brackets: placement rules in the first round, winner rules
//! after, and an optional third-place match fed by the semifinal losers.

use crate::models::{
    Game, GameId, GamePlan, Group, KnockoutRound, ParticipantRule, PlanError, Tournament,
};
use log::warn;

/// Standalone KNOCKOUT without a prior group stage is not implemented:
/// there are no group placements to seed the first round from. Returns an
/// empty plan; seeding a bracket straight from the participant list is a
/// known gap.
pub fn create_knockout_plan(tournament: &Tournament) -> GamePlan {
    warn!(
        "knockout without a group stage is not implemented, returning empty plan for {}",
        tournament.id
    );
    GamePlan::new(tournament.id, Vec::new())
}

/// Bracket-size table: number of games in a round to its label.
fn label_for(games_in_round: usize) -> Option<KnockoutRound> {
    match games_in_round {
        32 => Some(KnockoutRound::Last64),
        16 => Some(KnockoutRound::Last32),
        8 => Some(KnockoutRound::Last16),
        4 => Some(KnockoutRound::QuarterFinals),
        2 => Some(KnockoutRound::SemiFinals),
        1 => Some(KnockoutRound::Final),
        _ => None,
    }
}

/// Build the bracket on top of the given groups.
///
/// First round: groups are paired sequentially (0 with 1, 2 with 3, ...)
/// and cross-seeded, place `p` of the first group against place
/// `qualified_per_group - p + 1` of the second. Every later round pairs
/// consecutive games of the previous round under winner rules until one
/// game remains. When two games remain and the tournament wants a
/// third-place match, it is emitted right before the final, fed by the
/// losers of those two games.
///
/// Round labels: a round is labeled with the table entry for HALF its own
/// game count (an 8-game opening round is QUARTER_FINALS, never LAST_16 --
/// longstanding contract, do not "fix"). Sizes outside the table fall back
/// to the previous round's label, or a numeric placeholder for the first.
pub fn knockout_games(tournament: &Tournament, groups: &[Group]) -> Result<Vec<Game>, PlanError> {
    if groups.is_empty() || tournament.qualified_participants == 0 {
        return Ok(Vec::new());
    }
    let group_count = groups.len();
    let qualified = tournament.qualified_participants;
    if group_count % 2 != 0 || qualified as usize % group_count != 0 {
        return Err(PlanError::UnevenBracket {
            groups: group_count,
            qualified,
        });
    }
    let per_group = qualified as usize / group_count;

    let first_count = group_count / 2 * per_group;
    let first_label =
        label_for(first_count / 2).unwrap_or(KnockoutRound::Other(first_count as u32));
    let mut games: Vec<Game> = Vec::with_capacity(2 * first_count);
    for pair in groups.chunks_exact(2) {
        for place in 1..=per_group {
            games.push(Game::knockout(
                ParticipantRule::PlacementInGroup {
                    group_id: pair[0].id,
                    place: place as u32,
                },
                ParticipantRule::PlacementInGroup {
                    group_id: pair[1].id,
                    place: (per_group - place + 1) as u32,
                },
                first_label,
            ));
        }
    }

    let mut round_start = 0;
    let mut label = first_label;
    loop {
        let current: Vec<GameId> = games[round_start..].iter().map(|g| g.id).collect();
        if current.len() <= 1 {
            break;
        }
        if current.len() == 2 && tournament.third_place_match {
            games.push(Game::knockout(
                ParticipantRule::LoserOfGame {
                    game_id: current[0],
                },
                ParticipantRule::LoserOfGame {
                    game_id: current[1],
                },
                KnockoutRound::ThirdPlace,
            ));
        }
        label = label_for(current.len() / 2).unwrap_or(label);
        round_start = games.len();
        for feeders in current.chunks_exact(2) {
            games.push(Game::knockout(
                ParticipantRule::WinnerOfGame {
                    game_id: feeders[0],
                },
                ParticipantRule::WinnerOfGame {
                    game_id: feeders[1],
                },
                label,
            ));
        }
    }
    Ok(games)
}
