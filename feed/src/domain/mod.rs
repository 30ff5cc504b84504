//! Domain layer
//!
//! Contains the feed's data model with no I/O.
//! - `entities`: Reviews, credentials and the controller's owned state
//! - `ports`: Trait definitions for the fetch service and rendering layer

pub mod entities;
pub mod ports;
