//! Pure domain logic for the diary service.
//!
//! Nothing in this crate performs I/O: it holds the shared id/timestamp
//! aliases, the domain error type, and the validation rules applied to
//! item payloads and path parameters before any database call.

pub mod database_url;
pub mod error;
pub mod item;
pub mod types;
