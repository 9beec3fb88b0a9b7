//! CycleSync Tools module
//!
//! MCP tool implementations for CycleSync.

pub mod recommendations;
pub mod status;
