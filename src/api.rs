// Booking API boundary
// Validates incoming requests, serializes writers on the occupancy store and wraps
// every reply in the `{ success, ... }` envelope the HTTP layer sends back.

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use crate::{
    allocator::AllocationError,
    occupancy::{BookingConfirmation, OccupancyStatus, OccupancyStore, OccupancySummary},
};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    #[error(transparent)]
    Allocation(#[from] AllocationError),

    #[error("{0}")]
    InvalidRequest(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Clone)]
pub struct ApiConfig {
    // upper bound on rooms per booking; keeps the cross-floor search small
    pub max_rooms_per_booking: usize,
    pub default_occupancy: f64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            max_rooms_per_booking: 5,
            default_occupancy: 0.3,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookRequest {
    pub num_rooms: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RandomOccupancyRequest {
    pub percentage: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResetReply {
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ApiResponse<T> {
    Success {
        success: bool,
        #[serde(flatten)]
        data: T,
    },
    Failure {
        success: bool,
        message: String,
    },
}

impl<T> From<ApiResult<T>> for ApiResponse<T> {
    fn from(result: ApiResult<T>) -> Self {
        match result {
            Ok(data) => ApiResponse::Success {
                success: true,
                data,
            },
            Err(e) => ApiResponse::Failure {
                success: false,
                message: e.to_string(),
            },
        }
    }
}

impl<T> ApiResponse<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, ApiResponse::Success { .. })
    }
}

impl<T: Serialize> ApiResponse<T> {
    pub fn into_json(self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}

// Operations exposed to the HTTP layer
#[async_trait]
pub trait HotelApi: Send + Sync + 'static {
    // Full room list plus aggregate counts
    async fn rooms(&self) -> ApiResult<OccupancyStatus>;

    // Book `numRooms` rooms with minimal travel time between them
    async fn book(&self, request: BookRequest) -> ApiResult<BookingConfirmation>;

    // Reset, then occupy a random share of the hotel
    async fn random_occupancy(&self, request: RandomOccupancyRequest)
        -> ApiResult<OccupancySummary>;

    // Release every room and restart booking ids at 1
    async fn reset(&self) -> ApiResult<ResetReply>;
}

pub struct HotelApiHandler {
    store: Arc<RwLock<OccupancyStore>>,
    config: ApiConfig,
}

impl HotelApiHandler {
    pub fn new(config: ApiConfig) -> Self {
        Self::with_store(Arc::new(RwLock::new(OccupancyStore::new())), config)
    }

    pub fn with_store(store: Arc<RwLock<OccupancyStore>>, config: ApiConfig) -> Self {
        Self { store, config }
    }

    pub fn store(&self) -> Arc<RwLock<OccupancyStore>> {
        self.store.clone()
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    fn validate_num_rooms(&self, request: &BookRequest) -> ApiResult<usize> {
        let max = self.config.max_rooms_per_booking;
        match request.num_rooms {
            Some(n) if n >= 1 && n as u64 <= max as u64 => Ok(n as usize),
            other => {
                warn!(num_rooms = ?other, max, "rejected booking request");
                Err(ApiError::InvalidRequest(format!(
                    "Number of rooms must be between 1 and {max}"
                )))
            }
        }
    }

    fn validate_percentage(&self, request: &RandomOccupancyRequest) -> ApiResult<f64> {
        let percentage = request.percentage.unwrap_or(self.config.default_occupancy);
        if (0.0..=1.0).contains(&percentage) {
            Ok(percentage)
        } else {
            warn!(percentage, "rejected random occupancy request");
            Err(ApiError::InvalidRequest(
                "Percentage must be between 0 and 1".to_string(),
            ))
        }
    }

    // Takes the read lock on the blocking pool, so a long-running writer never
    // parks an async worker.
    async fn read<T, F>(&self, op: F) -> ApiResult<T>
    where
        F: FnOnce(&OccupancyStore) -> T + Send + 'static,
        T: Send + 'static,
    {
        let store = self.store.clone();
        tokio::task::spawn_blocking(move || {
            let guard = store.read();
            op(&guard)
        })
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))
    }

    // Runs a mutation under the store's write lock on the blocking pool.
    // The cross-floor search can take a while, so it stays off the async workers.
    async fn write<T, F>(&self, op: F) -> ApiResult<T>
    where
        F: FnOnce(&mut OccupancyStore) -> T + Send + 'static,
        T: Send + 'static,
    {
        let store = self.store.clone();
        tokio::task::spawn_blocking(move || {
            let mut guard = store.write();
            op(&mut guard)
        })
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))
    }
}

impl Default for HotelApiHandler {
    fn default() -> Self {
        Self::new(ApiConfig::default())
    }
}

#[async_trait]
impl HotelApi for HotelApiHandler {
    async fn rooms(&self) -> ApiResult<OccupancyStatus> {
        self.read(|store| store.status()).await
    }

    async fn book(&self, request: BookRequest) -> ApiResult<BookingConfirmation> {
        let num_rooms = self.validate_num_rooms(&request)?;

        let result = self.write(move |store| store.book(num_rooms)).await?;
        if let Err(e) = &result {
            warn!(num_rooms, error = %e, "booking failed");
        }

        result.map_err(ApiError::from)
    }

    async fn random_occupancy(
        &self,
        request: RandomOccupancyRequest,
    ) -> ApiResult<OccupancySummary> {
        let percentage = self.validate_percentage(&request)?;
        self.write(move |store| store.random_occupancy(percentage))
            .await
    }

    async fn reset(&self) -> ApiResult<ResetReply> {
        self.write(|store| store.reset()).await?;
        info!("all bookings reset");

        Ok(ResetReply {
            message: "All bookings reset".to_string(),
        })
    }
}
