// Travel-time model between rooms
// Vertical travel costs 2 minutes per floor, horizontal travel 1 minute per room.

use crate::topology::Room;

pub const MINUTES_PER_FLOOR: u32 = 2;
pub const MINUTES_PER_ROOM: u32 = 1;

pub fn pair_cost(a: &Room, b: &Room) -> u32 {
    let vertical = a.floor.abs_diff(b.floor) * MINUTES_PER_FLOOR;
    let horizontal = a.position.abs_diff(b.position) * MINUTES_PER_ROOM;

    vertical + horizontal
}

// Sums the cost of walking the rooms in the given order.
// The slice is not sorted here; callers pass it in canonical order.
pub fn sequence_cost(rooms: &[Room]) -> u32 {
    rooms.windows(2).map(|w| pair_cost(&w[0], &w[1])).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::{generate, Room};

    #[test]
    fn test_pair_cost_is_symmetric_and_zero_on_self() {
        let rooms = generate();
        for a in &rooms {
            assert_eq!(pair_cost(a, a), 0);
            for b in &rooms {
                assert_eq!(pair_cost(a, b), pair_cost(b, a));
            }
        }
    }

    #[test]
    fn test_pair_cost_weights() {
        let a = Room::new(1, 1);
        assert_eq!(pair_cost(&a, &Room::new(1, 4)), 3);
        assert_eq!(pair_cost(&a, &Room::new(2, 1)), 2);
        assert_eq!(pair_cost(&a, &Room::new(10, 7)), 18 + 6);
    }

    #[test]
    fn test_sequence_cost_sums_consecutive_pairs_only() {
        assert_eq!(sequence_cost(&[]), 0);
        assert_eq!(sequence_cost(&[Room::new(5, 5)]), 0);

        let rooms = [Room::new(1, 1), Room::new(1, 2), Room::new(1, 3)];
        // all-pairs would be 4
        assert_eq!(sequence_cost(&rooms), 2);

        // order matters: 1 -> 3 -> 2 walks 2 + 1
        let shuffled = [Room::new(1, 1), Room::new(1, 3), Room::new(1, 2)];
        assert_eq!(sequence_cost(&shuffled), 3);
    }

    #[test]
    fn test_sequence_cost_across_floors() {
        let rooms = [Room::new(2, 10), Room::new(3, 5)];
        assert_eq!(sequence_cost(&rooms), 2 + 5);
    }
}
