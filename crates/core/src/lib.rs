//! Domain types and pure logic for the filmwork catalog read service.
//!
//! This crate has no I/O dependencies so it can be shared by the
//! repository layer and the HTTP layer alike.

pub mod aggregation;
pub mod catalog;
pub mod error;
pub mod pagination;
pub mod types;
