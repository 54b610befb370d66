// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Coordinate, Stop, DeliveryStop, ReturnStop, RouteType, PairedRoute, PairingResult};
pub use requests::{ReverseLogisticsPayload, ReverseLogisticsRequest};
pub use responses::{ReverseLogisticsResponse, HealthResponse, ErrorResponse};
