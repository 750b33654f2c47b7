//! Request and Response models for the user API
//!
//! This module defines the record type and the DTOs used for
//! serializing/deserializing HTTP request and response bodies.

pub mod responses;
pub mod user;

// Re-export commonly used types
pub use responses::{CreateUserResponse, GetUserResponse, MessageResponse};
pub use user::User;
