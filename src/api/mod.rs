//! API Module
//!
//! HTTP handlers and routing for the user service REST API.
//!
//! # Endpoints
//! - `GET /ping` - Health check
//! - `POST /user/create` - Create a user
//! - `GET /user/:id` - Read a user
//! - `PUT /user/update/:id` - Replace a user
//! - `DELETE /user/:id` - Delete a user

pub mod handlers;
pub mod routes;


pub use handlers::*;
pub use routes::create_router;
