use super::{GameSnapshot, LocomotiveId, PlayerId, WagonId};
use std::collections::HashMap;

/// Reverse lookup from token to owning player
///
/// Built once per snapshot. When the data lists a token under more than one
/// player, the first player in snapshot order keeps it.
#[derive(Debug, Clone, Default)]
pub struct OwnershipIndex {
    locomotives: HashMap<LocomotiveId, PlayerId>,
    wagons: HashMap<WagonId, PlayerId>,
}

impl OwnershipIndex {
    #[must_use]
    pub fn build(snapshot: &GameSnapshot) -> Self {
        let mut index = Self::default();

        for player in snapshot.players() {
            for &locomotive in &player.locomotives {
                index.locomotives.entry(locomotive).or_insert(player.id);
            }
            for &wagon in &player.wagons {
                index.wagons.entry(wagon).or_insert(player.id);
            }
        }

        index
    }

    #[must_use]
    pub fn locomotive_owner(&self, id: LocomotiveId) -> Option<PlayerId> {
        self.locomotives.get(&id).copied()
    }

    #[must_use]
    pub fn wagon_owner(&self, id: WagonId) -> Option<PlayerId> {
        self.wagons.get(&id).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{OccupancyTable, Player, PlayerKind};

    fn player(id: u32, kind: PlayerKind, locomotives: &[u32], wagons: &[u32]) -> Player {
        Player {
            id: PlayerId(id),
            name: format!("P{id}"),
            kind,
            locomotives: locomotives.iter().copied().map(LocomotiveId).collect(),
            wagons: wagons.iter().copied().map(WagonId).collect(),
        }
    }

    #[test]
    fn test_lookup_owners() {
        let snapshot = GameSnapshot::new(
            vec![
                player(1, PlayerKind::Locomotive, &[1, 2], &[]),
                player(3, PlayerKind::Wagon, &[], &[1, 2, 3]),
            ],
            Vec::new(),
            OccupancyTable::new(),
        );
        let index = OwnershipIndex::build(&snapshot);

        assert_eq!(index.locomotive_owner(LocomotiveId(2)), Some(PlayerId(1)));
        assert_eq!(index.wagon_owner(WagonId(2)), Some(PlayerId(3)));
        assert_eq!(index.locomotive_owner(LocomotiveId(3)), None);
        assert_eq!(index.wagon_owner(WagonId(20)), None);
    }

    #[test]
    fn test_first_owner_wins() {
        let snapshot = GameSnapshot::new(
            vec![
                player(3, PlayerKind::Wagon, &[], &[7]),
                player(4, PlayerKind::Wagon, &[], &[7]),
            ],
            Vec::new(),
            OccupancyTable::new(),
        );
        let index = OwnershipIndex::build(&snapshot);

        assert_eq!(index.wagon_owner(WagonId(7)), Some(PlayerId(3)));
    }
}
