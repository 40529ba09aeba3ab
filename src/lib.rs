//! # Actiload - CSV event schemas to activity upload requests
//!
//! Actiload turns a flat CSV describing event definitions into the nested
//! activity event payloads an ingestion API expects, then renders them
//! (with credentials) into a literal `curl` request. Nothing is ever sent
//! over the network.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  CSV Schema │────▶│   Parser    │────▶│  Transform  │────▶│   Render    │
//! │ (ISO/UTF8)  │     │ (auto-enc)  │     │(group+stamp)│     │ (curl text) │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use actiload::{build_from_bytes, render_curl, SystemClock, UploadConfig};
//!
//! let csv = b"eventName,eventPayload,dataType\nLogin,method,text\n";
//! let config = UploadConfig::default();
//! let result = build_from_bytes(csv, &config, &SystemClock).unwrap();
//! let curl = render_curl(&result.events, &config).unwrap();
//! assert!(curl.starts_with("curl --location --request POST"));
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Error types and result aliases
//! - [`logs`] - Leveled progress logging
//! - [`clock`] - Injectable time source
//! - [`config`] - Upload configuration
//! - [`models`] - Domain models (EventRow, EventDefinition, ActivityEvent)
//! - [`parser`] - CSV parsing with auto-detection
//! - [`transform`] - Sampling, grouping, assembly, and pipeline
//! - [`render`] - Request rendering

// Core modules
pub mod clock;
pub mod config;
pub mod error;
pub mod logs;
pub mod models;

// Parsing
pub mod parser;

// Transformation
pub mod transform;

// Rendering
pub mod render;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{CsvError, CsvResult, PipelineError, PipelineResult};

// =============================================================================
// Re-exports - Clock & Config
// =============================================================================

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{UploadConfig, DEFAULT_ENDPOINT};

// =============================================================================
// Re-exports - Models
// =============================================================================

pub use models::{ActivityEvent, ActivitySource, EventDefinition, EventRow};

// =============================================================================
// Re-exports - CSV Parsing
// =============================================================================

pub use parser::{
    csv_to_records, detect_delimiter, detect_encoding, parse_bytes_auto, parse_csv_file_auto,
    ParseResult,
};

// =============================================================================
// Re-exports - Transform
// =============================================================================

pub use transform::{
    assemble, build_events, build_from_bytes, build_from_path, build_from_records, group_rows,
    sample_value, write_payload, BuildResult, CsvInfo,
};

// =============================================================================
// Re-exports - Render
// =============================================================================

pub use render::render_curl;
