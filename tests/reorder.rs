//! Integration tests for reordering: the single-game move and rescheduling.

use chrono::{DateTime, Duration, TimeZone, Utc};
use gameplan::{
    create_league_plan, sort_game_plan, Field, GameId, GamePlan, Participant, Tournament,
    TournamentFormat,
};
use std::collections::HashSet;

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

fn ids(plan: &GamePlan) -> Vec<GameId> {
    plan.games.iter().map(|g| g.id).collect()
}

#[test]
fn moving_the_first_game_to_the_end_shifts_everything_by_one() {
    let t = league(7, 1);
    let plan = create_league_plan(&t);
    assert_eq!(plan.games.len(), 21);
    let before = ids(&plan);

    let sorted = sort_game_plan(&plan, &t, 0, 20);

    assert_eq!(sorted.games.len(), 21);
    assert_eq!(sorted.games[20].id, before[0]);
    assert_eq!(sorted.games[0].id, before[1]);
    for i in 0..20 {
        assert_eq!(sorted.games[i].id, before[i + 1]);
    }
    let before_set: HashSet<GameId> = before.into_iter().collect();
    let after_set: HashSet<GameId> = ids(&sorted).into_iter().collect();
    assert_eq!(before_set, after_set);
}

#[test]
fn a_middle_move_shifts_only_the_affected_range() {
    let t = league(6, 2);
    let plan = create_league_plan(&t);
    let before = ids(&plan);

    let sorted = sort_game_plan(&plan, &t, 5, 2);
    let after = ids(&sorted);

    assert_eq!(after[2], before[5]);
    for i in 3..=5 {
        assert_eq!(after[i], before[i - 1]);
    }
    assert_eq!(after[..2], before[..2]);
    assert_eq!(after[6..], before[6..]);
}

#[test]
fn reorder_recomputes_fields_and_times_for_the_new_order() {
    let t = league(7, 2);
    let plan = create_league_plan(&t);
    let sorted = sort_game_plan(&plan, &t, 0, 10);

    for (i, game) in sorted.games.iter().enumerate() {
        assert_eq!(game.field.as_ref().unwrap().name, t.fields[i % 2].name);
        let time = game.time.unwrap();
        let cycle = (i / 2) as i32;
        assert_eq!(
            time.start,
            start() + Duration::minutes(t.league.match_duration + t.league.match_break) * cycle
        );
    }
    assert_eq!(sorted.version, plan.version + 1);
}

#[test]
fn out_of_range_indices_are_clamped() {
    let t = league(4, 1);
    let plan = create_league_plan(&t); // 6 games
    let before = ids(&plan);

    let sorted = sort_game_plan(&plan, &t, 0, 99);
    assert_eq!(sorted.games.last().unwrap().id, before[0]);

    let empty = GamePlan::new(t.id, Vec::new());
    let sorted_empty = sort_game_plan(&empty, &t, 3, 1);
    assert!(sorted_empty.games.is_empty());
}
