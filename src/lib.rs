//! TeachMaster - teaching techniques and lesson planning
//!
//! A static catalog of teaching techniques with search and category
//! filtering, and a planner for lesson plans kept in a local key-value
//! store.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod planner;
pub mod storage;
