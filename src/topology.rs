// Hotel layout: floors 1-9 hold 10 rooms each, floor 10 holds 7.
// Rooms are generated once per store and only their booking state changes afterwards.

use serde::{Deserialize, Serialize};

pub const STANDARD_FLOORS: u32 = 9;
pub const ROOMS_PER_STANDARD_FLOOR: u32 = 10;
pub const TOP_FLOOR: u32 = 10;
pub const ROOMS_ON_TOP_FLOOR: u32 = 7;

pub const TOTAL_ROOMS: usize =
    (STANDARD_FLOORS * ROOMS_PER_STANDARD_FLOOR + ROOMS_ON_TOP_FLOOR) as usize;

pub type RoomNumber = u32;
pub type BookingId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub number: RoomNumber,
    pub floor: u32,
    pub position: u32,
    pub available: bool,
    pub booking_id: Option<BookingId>,
}

impl Room {
    // Creates an available room, deriving its number from floor and position
    pub fn new(floor: u32, position: u32) -> Self {
        Self {
            number: room_number(floor, position),
            floor,
            position,
            available: true,
            booking_id: None,
        }
    }

    pub fn book(&mut self, booking_id: BookingId) {
        self.available = false;
        self.booking_id = Some(booking_id);
    }

    pub fn release(&mut self) {
        self.available = true;
        self.booking_id = None;
    }

    // Key used for canonical ordering: floor first, then position
    pub fn canonical_key(&self) -> (u32, u32) {
        (self.floor, self.position)
    }
}

pub fn room_number(floor: u32, position: u32) -> RoomNumber {
    if floor == TOP_FLOOR {
        1000 + position
    } else {
        floor * 100 + position
    }
}

pub fn rooms_on_floor(floor: u32) -> u32 {
    match floor {
        TOP_FLOOR => ROOMS_ON_TOP_FLOOR,
        1..=STANDARD_FLOORS => ROOMS_PER_STANDARD_FLOOR,
        _ => 0,
    }
}

// Builds the full catalog in ascending floor order, ascending position within a floor
pub fn generate() -> Vec<Room> {
    let mut rooms = Vec::with_capacity(TOTAL_ROOMS);

    for floor in 1..=TOP_FLOOR {
        for position in 1..=rooms_on_floor(floor) {
            rooms.push(Room::new(floor, position));
        }
    }

    rooms
}
