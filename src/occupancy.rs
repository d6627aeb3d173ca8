// Occupancy store: the single owner of room and booking state
// Reads availability, asks the allocator for a selection and commits it under a new booking id.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use rand::{seq::SliceRandom, Rng};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{
    allocator::{AllocationError, RoomAllocator, TravelTimeAllocator},
    topology::{self, BookingId, Room, RoomNumber},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BookingSource {
    Guest,
    Simulated,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: BookingId,
    pub rooms: Vec<RoomNumber>,
    pub created_at: DateTime<Utc>,
    pub source: BookingSource,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OccupancyStatus {
    pub rooms: Vec<Room>,
    pub total_rooms: usize,
    pub available_rooms: usize,
    pub booked_rooms: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingConfirmation {
    pub booking_id: BookingId,
    pub rooms: Vec<Room>,
    pub travel_time: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OccupancySummary {
    pub booked_rooms: usize,
    pub total_rooms: usize,
}

pub struct OccupancyStore<A: RoomAllocator = TravelTimeAllocator> {
    rooms: Vec<Room>,
    bookings: BTreeMap<BookingId, Booking>,
    next_booking_id: BookingId,
    allocator: A,
}

impl OccupancyStore {
    pub fn new() -> Self {
        Self::with_allocator(TravelTimeAllocator)
    }
}

impl Default for OccupancyStore {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: RoomAllocator> OccupancyStore<A> {
    pub fn with_allocator(allocator: A) -> Self {
        Self {
            rooms: topology::generate(),
            bookings: BTreeMap::new(),
            next_booking_id: 1,
            allocator,
        }
    }

    pub fn status(&self) -> OccupancyStatus {
        let available_rooms = self.rooms.iter().filter(|r| r.available).count();

        OccupancyStatus {
            rooms: self.rooms.clone(),
            total_rooms: self.rooms.len(),
            available_rooms,
            booked_rooms: self.rooms.len() - available_rooms,
        }
    }

    // Free rooms in topology order
    pub fn available_rooms(&self) -> Vec<Room> {
        self.rooms.iter().filter(|r| r.available).copied().collect()
    }

    pub fn booking(&self, id: BookingId) -> Option<&Booking> {
        self.bookings.get(&id)
    }

    pub fn bookings(&self) -> impl Iterator<Item = &Booking> {
        self.bookings.values()
    }

    pub fn next_booking_id(&self) -> BookingId {
        self.next_booking_id
    }

    // Allocate and commit `num_rooms` rooms under a fresh booking id.
    // Nothing is touched when the allocator fails.
    pub fn book(&mut self, num_rooms: usize) -> Result<BookingConfirmation, AllocationError> {
        let available = self.available_rooms();
        let allocation = self.allocator.allocate(&available, num_rooms)?;
        let indices = self.selection_indices(&allocation.rooms, num_rooms)?;

        let booking_id = self.take_booking_id();
        let numbers: Vec<RoomNumber> = allocation.rooms.iter().map(|r| r.number).collect();

        // walk the allocator's order so the reply stays canonical
        let mut booked = Vec::with_capacity(indices.len());
        for idx in indices {
            let room = &mut self.rooms[idx];
            room.book(booking_id);
            booked.push(*room);
        }

        self.bookings.insert(
            booking_id,
            Booking {
                id: booking_id,
                rooms: numbers,
                created_at: Utc::now(),
                source: BookingSource::Guest,
            },
        );

        info!(
            booking_id,
            rooms = ?booked.iter().map(|r| r.number).collect::<Vec<_>>(),
            travel_time = allocation.travel_time,
            placement = ?allocation.placement,
            "rooms booked"
        );

        Ok(BookingConfirmation {
            booking_id,
            rooms: booked,
            travel_time: allocation.travel_time,
        })
    }

    pub fn random_occupancy(&mut self, fraction: f64) -> OccupancySummary {
        self.random_occupancy_with_rng(fraction, &mut rand::thread_rng())
    }

    // Reset, then mark floor(total * fraction) rooms as taken, each under its own booking id.
    // `fraction` is clamped to [0, 1]; NaN counts as 0.
    pub fn random_occupancy_with_rng<R: Rng + ?Sized>(
        &mut self,
        fraction: f64,
        rng: &mut R,
    ) -> OccupancySummary {
        self.reset();

        let fraction = if fraction.is_nan() {
            0.0
        } else {
            fraction.clamp(0.0, 1.0)
        };
        let total_rooms = self.rooms.len();
        let to_book = (total_rooms as f64 * fraction).floor() as usize;

        let mut order: Vec<usize> = (0..total_rooms).collect();
        order.shuffle(rng);

        let now = Utc::now();
        for &idx in order.iter().take(to_book) {
            let booking_id = self.take_booking_id();
            let room = &mut self.rooms[idx];
            room.book(booking_id);

            self.bookings.insert(
                booking_id,
                Booking {
                    id: booking_id,
                    rooms: vec![room.number],
                    created_at: now,
                    source: BookingSource::Simulated,
                },
            );
        }

        info!(booked_rooms = to_book, total_rooms, fraction, "random occupancy generated");

        OccupancySummary {
            booked_rooms: to_book,
            total_rooms,
        }
    }

    pub fn reset(&mut self) {
        for room in self.rooms.iter_mut() {
            room.release();
        }
        let cleared = self.bookings.len();
        self.bookings.clear();
        self.next_booking_id = 1;

        debug!(cleared, "all bookings reset");
    }

    // Maps a selection onto the store's rooms. Every room must exist, be free and
    // appear once, and the selection must hold exactly `num_rooms` rooms.
    fn selection_indices(
        &self,
        selection: &[Room],
        num_rooms: usize,
    ) -> Result<Vec<usize>, AllocationError> {
        if selection.len() != num_rooms {
            return Err(AllocationError::InvalidSelection(format!(
                "expected {num_rooms} rooms, got {}",
                selection.len()
            )));
        }

        let mut indices: Vec<usize> = Vec::with_capacity(selection.len());
        for picked in selection {
            let idx = self
                .rooms
                .iter()
                .position(|r| r.number == picked.number)
                .ok_or_else(|| {
                    AllocationError::InvalidSelection(format!("unknown room {}", picked.number))
                })?;

            if !self.rooms[idx].available {
                return Err(AllocationError::InvalidSelection(format!(
                    "room {} is already booked",
                    picked.number
                )));
            }
            if indices.contains(&idx) {
                return Err(AllocationError::InvalidSelection(format!(
                    "room {} selected twice",
                    picked.number
                )));
            }
            indices.push(idx);
        }

        Ok(indices)
    }

    fn take_booking_id(&mut self) -> BookingId {
        let id = self.next_booking_id;
        self.next_booking_id += 1;
        id
    }
}
