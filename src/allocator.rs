// Room allocation engine
// Picks the set of rooms for an N-room request that minimizes travel time between them.
//
// Search order:
//   1. Single floor: for every floor with enough free rooms, cost each contiguous window
//      of its position-sorted rooms. Lowest floor, then earliest window, wins a tie.
//   2. Cross floor: only if no floor fits. Brute force over every N-subset of the
//      available rooms in lexicographic order; the first minimum wins a tie.
//
// The cross-floor search is O(C(available, N)) on purpose. It is only acceptable because
// callers cap N (5 by default) and the hotel never has more than 97 rooms.

use std::collections::BTreeMap;

use thiserror::Error;
use tracing::debug;

use crate::{
    combinations::{binomial, Combinations},
    topology::Room,
    travel::sequence_cost,
};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AllocationError {
    #[error("Only {available} rooms available")]
    InsufficientAvailability { requested: usize, available: usize },

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Allocator returned an invalid selection: {0}")]
    InvalidSelection(String),
}

// Where the winning selection was found
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    SingleFloor { floor: u32 },
    CrossFloor,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Allocation {
    // canonical order: floor, then position
    pub rooms: Vec<Room>,
    pub travel_time: u32,
    pub placement: Placement,
}

// Allocation strategy used by the occupancy store
pub trait RoomAllocator: Send + Sync + 'static {
    // Select `num_rooms` rooms out of `available`. Must not return a partial selection.
    fn allocate(&self, available: &[Room], num_rooms: usize) -> Result<Allocation, AllocationError>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct TravelTimeAllocator;

impl RoomAllocator for TravelTimeAllocator {
    fn allocate(&self, available: &[Room], num_rooms: usize) -> Result<Allocation, AllocationError> {
        allocate(available, num_rooms)
    }
}

pub fn allocate(available: &[Room], num_rooms: usize) -> Result<Allocation, AllocationError> {
    if num_rooms == 0 {
        return Err(AllocationError::InvalidRequest(
            "number of rooms must be at least 1".to_string(),
        ));
    }

    let insufficient = AllocationError::InsufficientAvailability {
        requested: num_rooms,
        available: available.len(),
    };

    if available.len() < num_rooms {
        return Err(insufficient);
    }

    if let Some(allocation) = best_single_floor(available, num_rooms) {
        debug!(
            num_rooms,
            placement = ?allocation.placement,
            travel_time = allocation.travel_time,
            "single-floor allocation found"
        );
        return Ok(allocation);
    }

    best_cross_floor(available, num_rooms).ok_or(insufficient)
}

fn best_single_floor(available: &[Room], num_rooms: usize) -> Option<Allocation> {
    let mut by_floor: BTreeMap<u32, Vec<Room>> = BTreeMap::new();
    for room in available {
        by_floor.entry(room.floor).or_default().push(*room);
    }

    let mut best: Option<Allocation> = None;

    for (floor, rooms) in by_floor.iter_mut() {
        if rooms.len() < num_rooms {
            continue;
        }

        rooms.sort_by_key(|r| r.position);

        for window in rooms.windows(num_rooms) {
            let cost = sequence_cost(window);
            if best.as_ref().map_or(true, |b| cost < b.travel_time) {
                best = Some(Allocation {
                    rooms: window.to_vec(),
                    travel_time: cost,
                    placement: Placement::SingleFloor { floor: *floor },
                });
            }
        }
    }

    best
}

fn best_cross_floor(available: &[Room], num_rooms: usize) -> Option<Allocation> {
    // A snapshot already in canonical order keeps every subset in canonical order too,
    // so the per-candidate sort can be skipped without changing the result.
    let presorted = available
        .windows(2)
        .all(|w| w[0].canonical_key() <= w[1].canonical_key());

    debug!(
        num_rooms,
        available = available.len(),
        candidates = %binomial(available.len(), num_rooms),
        presorted,
        "no floor fits the request, searching cross-floor combinations"
    );

    let mut combos = Combinations::new(available.len(), num_rooms);
    let mut candidate: Vec<Room> = Vec::with_capacity(num_rooms);
    let mut best: Option<(u32, Vec<Room>)> = None;

    while let Some(indices) = combos.advance() {
        candidate.clear();
        candidate.extend(indices.iter().map(|&i| available[i]));
        if !presorted {
            candidate.sort_by_key(Room::canonical_key);
        }

        let cost = sequence_cost(&candidate);
        if best.as_ref().map_or(true, |(min, _)| cost < *min) {
            best = Some((cost, candidate.clone()));
        }
    }

    best.map(|(travel_time, rooms)| Allocation {
        rooms,
        travel_time,
        placement: Placement::CrossFloor,
    })
}
