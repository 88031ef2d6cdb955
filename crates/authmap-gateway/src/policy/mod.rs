//! Policy layer (route table).
//!
//! Compiles route declarations from config into a lookup structure that the
//! enforcement middleware consults once per request.

pub mod route_table;

pub use route_table::{RouteEntry, RouteMethod, RouteTable};
