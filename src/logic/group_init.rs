//! Group setup: initial distribution and rebalancing on roster changes.

use crate::models::{Group, Participant, TournamentId};

/// Distribute participants over `number_of_groups` groups round-robin:
/// participant `i` goes to group `i % number_of_groups`, so input order is
/// preserved within each group. Returns no groups when there are no
/// participants or `number_of_groups` is zero; trailing groups stay empty
/// when there are fewer participants than groups.
pub fn init_groups(
    tournament_id: TournamentId,
    participants: &[Participant],
    number_of_groups: u32,
) -> Vec<Group> {
    if participants.is_empty() || number_of_groups < 1 {
        return Vec::new();
    }
    let mut groups: Vec<Group> = (0..number_of_groups)
        .map(|i| Group::new(tournament_id, format!("Group {}", i + 1)))
        .collect();
    for (i, participant) in participants.iter().enumerate() {
        groups[i % number_of_groups as usize]
            .participants
            .push(participant.clone());
    }
    groups
}

/// Add a participant snapshot to whichever group currently has the fewest
/// participants; ties go to the earlier group in list order.
pub fn add_participant_to_group(participant: &Participant, groups: &mut [Group]) {
    let smallest = (0..groups.len()).min_by_key(|&i| groups[i].participants.len());
    if let Some(i) = smallest {
        groups[i].participants.push(participant.clone());
    }
}

/// Remove the participant's snapshot from the (at most one) group holding
/// it. No-op when no group contains the id.
pub fn remove_participant_from_group(participant: &Participant, groups: &mut [Group]) {
    let holder = groups
        .iter_mut()
        .find(|g| g.participants.iter().any(|p| p.id == participant.id));
    if let Some(group) = holder {
        group.participants.retain(|p| p.id != participant.id);
    }
}
