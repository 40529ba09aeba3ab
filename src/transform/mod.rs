//! Transformation module.
//!
//! This module handles CSV schema to activity event transformation:
//! - Sample: data type to representative sample value
//! - Resolver: payload path to parameter write
//! - Grouper: flat rows to event definitions
//! - Assembler: definitions plus config to final events
//! - Pipeline: end-to-end orchestration

pub mod assembler;
pub mod grouper;
pub mod pipeline;
pub mod resolver;
pub mod sample;

pub use assembler::assemble;
pub use grouper::group_rows;
pub use pipeline::*;
pub use resolver::write_payload;
pub use sample::sample_value;
