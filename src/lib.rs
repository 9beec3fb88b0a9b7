//! CycleSync Library
//!
//! Cycle-phase aware food recommendations.

pub mod build_info;
pub mod data;
pub mod diet;
pub mod mcp;
pub mod models;
pub mod tools;
