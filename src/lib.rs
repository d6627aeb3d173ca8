// Hotel room allocation library
// Fixed 97-room layout, travel-time optimal room selection and occupancy tracking.

pub mod allocator;
pub mod api;
pub mod combinations;
pub mod occupancy;
pub mod topology;
pub mod travel;

// Re-export key types for convenience
pub use allocator::{
    allocate, Allocation, AllocationError, Placement, RoomAllocator, TravelTimeAllocator,
};
pub use api::{
    ApiConfig, ApiError, ApiResponse, ApiResult, BookRequest, HotelApi, HotelApiHandler,
    RandomOccupancyRequest, ResetReply,
};
pub use occupancy::{
    Booking, BookingConfirmation, BookingSource, OccupancyStatus, OccupancyStore,
    OccupancySummary,
};
pub use topology::{BookingId, Room, RoomNumber};
