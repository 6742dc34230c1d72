pub mod api;
pub mod auth;
pub mod realtime;

pub use api::{ApiError, TableQuery};
pub use auth::{AuthService, Session};
pub use realtime::RealtimeChannel;
