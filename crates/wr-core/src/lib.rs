//! Weather Report core library.
//!
//! The calling layer around the report engine:
//! - Sample and reference-parameter sources, including CSV ingestion
//! - The report service that validates requests and runs the assemblers
//! - Structured logging and stable CLI exit codes
//!
//! The binary entry point is in `main.rs`.

pub mod config;
pub mod exit_codes;
pub mod logging;
pub mod service;
pub mod source;

pub use service::ReportService;
