//! Integration tests for league plans: pairing, ordering, fields, times.

use chrono::{DateTime, Duration, TimeZone, Utc};
use gameplan::{
    create_league_plan, update_league_fields_and_dates, Field, Game, Participant, ParticipantId,
    Tournament, TournamentFormat,
};

fn start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 6, 1, 9, 0, 0).unwrap()
}

fn league(participants: usize, fields: usize) -> Tournament {
    let mut t = Tournament::new("Summer Cup", TournamentFormat::League, start());
    t.participants = (0..participants)
        .map(|i| Participant::new(format!("Team {i}")))
        .collect();
    t.fields = (0..fields).map(|i| Field::new(format!("Field {i}"))).collect();
    t
}

fn pair_of(game: &Game) -> (ParticipantId, ParticipantId) {
    game.fixed_pair().expect("league games have concrete participants")
}

#[test]
fn seven_participants_yield_twenty_one_games() {
    let plan = create_league_plan(&league(7, 2));
    assert_eq!(plan.games.len(), 21);
}

#[test]
fn every_pair_meets_exactly_matches_per_pair_times() {
    for legs in [1u32, 2, 3] {
        let mut t = league(6, 2);
        t.league.matches_per_pair = legs;
        let plan = create_league_plan(&t);
        assert_eq!(plan.games.len(), 15 * legs as usize);

        for a in &t.participants {
            for b in &t.participants {
                if a.id >= b.id {
                    continue;
                }
                let meetings = plan
                    .games
                    .iter()
                    .filter(|g| g.involves(a.id) && g.involves(b.id))
                    .count();
                assert_eq!(meetings, legs as usize, "{} vs {}", a.name, b.name);
            }
        }
    }
}

#[test]
fn first_slot_holds_the_earlier_input_participant() {
    let t = league(8, 2);
    let index_of = |id: ParticipantId| t.participants.iter().position(|p| p.id == id).unwrap();
    let plan = create_league_plan(&t);
    for game in &plan.games {
        let (first, second) = pair_of(game);
        assert!(index_of(first) < index_of(second));
    }
}

#[test]
fn no_participant_plays_consecutive_games_from_six_up() {
    for n in [6usize, 7, 8, 9, 10] {
        let plan = create_league_plan(&league(n, 2));
        for w in plan.games.windows(2) {
            let (a1, a2) = pair_of(&w[0]);
            let (b1, b2) = pair_of(&w[1]);
            assert!(
                a1 != b1 && a1 != b2 && a2 != b1 && a2 != b2,
                "{n} participants: consecutive games share a participant"
            );
        }
    }
}

#[test]
fn no_participant_plays_three_in_a_row_for_four_or_five() {
    for n in [4usize, 5] {
        let t = league(n, 2);
        let plan = create_league_plan(&t);
        for w in plan.games.windows(3) {
            for p in &t.participants {
                let run = w.iter().filter(|g| g.involves(p.id)).count();
                assert!(run < 3, "{n} participants: {} plays three in a row", p.name);
            }
        }
    }
}

#[test]
fn extra_legs_repeat_the_first_block_verbatim_with_fresh_ids() {
    let mut t = league(5, 2);
    t.league.matches_per_pair = 2;
    let plan = create_league_plan(&t);
    assert_eq!(plan.games.len(), 20);

    let (first_leg, second_leg) = plan.games.split_at(10);
    for (a, b) in first_leg.iter().zip(second_leg) {
        assert_eq!(pair_of(a), pair_of(b), "legs must keep the same order");
        assert_ne!(a.id, b.id, "cloned legs need fresh game ids");
    }
}

#[test]
fn fields_rotate_round_robin_over_the_order() {
    let t = league(7, 3);
    let plan = create_league_plan(&t);
    for (i, game) in plan.games.iter().enumerate() {
        let field = game.field.as_ref().expect("field assigned");
        assert_eq!(field.name, t.fields[i % 3].name);
    }
}

#[test]
fn games_of_a_cycle_share_kickoff_and_cycles_are_spaced_by_duration_plus_break() {
    let mut t = league(7, 2);
    t.league.match_duration = 12;
    t.league.match_break = 3;
    let plan = create_league_plan(&t);

    for (i, game) in plan.games.iter().enumerate() {
        let time = game.time.expect("time assigned");
        let cycle = (i / 2) as i32;
        assert_eq!(time.start, start() + Duration::minutes(15) * cycle);
        assert_eq!(time.end, time.start + Duration::minutes(12));
        assert_eq!(time.duration_minutes, 12);
    }
}

#[test]
fn degenerate_input_yields_an_empty_plan() {
    assert!(create_league_plan(&league(0, 2)).games.is_empty());
    assert!(create_league_plan(&league(1, 2)).games.is_empty());
    assert!(create_league_plan(&league(7, 0)).games.is_empty());
}

#[test]
fn deterministic_for_identical_input() {
    let t = league(8, 2);
    let a = create_league_plan(&t);
    let b = create_league_plan(&t);
    let a_pairs: Vec<_> = a.games.iter().map(pair_of).collect();
    let b_pairs: Vec<_> = b.games.iter().map(pair_of).collect();
    assert_eq!(a_pairs, b_pairs);
}

#[test]
fn adding_a_field_redistributes_and_shortens_the_schedule() {
    let mut t = league(7, 1);
    let original = create_league_plan(&t);
    assert_eq!(original.games.len(), 21);

    t.fields.push(Field::new("Field 1"));
    let updated = update_league_fields_and_dates(&original, &t);

    assert_eq!(updated.games.len(), 21);
    for (old, new) in original.games.iter().zip(&updated.games) {
        assert_eq!(old.id, new.id, "update must not touch order or identity");
    }
    for (i, game) in updated.games.iter().enumerate() {
        assert_eq!(game.field.as_ref().unwrap().name, t.fields[i % 2].name);
    }
    let last_start = |p: &gameplan::GamePlan| p.games.last().unwrap().time.unwrap().start;
    assert!(last_start(&updated) < last_start(&original));
    assert_eq!(updated.version, original.version + 1);
}
