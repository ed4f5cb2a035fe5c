//! LivinLease Application Library
//!
//! Feature modules (vehicle catalog, bookings) wired onto the service kernel.

pub mod modules;
