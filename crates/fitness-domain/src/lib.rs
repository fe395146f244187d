//! Domain types shared by the gateway and the users service.
//!
//! This crate contains only pure types with no framework dependencies.
//! Both sides of the `/api/users` HTTP contract serialize through these types,
//! so a field added here shows up on the wire for both processes at once.

pub mod id;
pub mod time;
pub mod user;
