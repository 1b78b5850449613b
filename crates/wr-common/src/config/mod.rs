//! Configuration loading for Weather Report.
//!
//! This module provides:
//! - Typed per-gateway reference parameters (expected mean/stddev, battery)
//! - Deterministic file resolution (CLI > env > XDG > defaults)

pub mod parameters;
pub mod resolve;

pub use parameters::{GatewayParameters, ParameterSet};
pub use resolve::{resolve_parameters_path, ConfigSource};

use std::path::Path;
use tracing::debug;

use crate::error::Result;

/// Resolve and load the gateway parameters.
///
/// Falls back to an empty parameter set when no file is found.
pub fn load_parameters(cli_path: Option<&Path>) -> Result<(ParameterSet, ConfigSource)> {
    let (path, source) = resolve_parameters_path(cli_path);
    match path {
        Some(path) => {
            debug!(path = %path.display(), source = %source, "Loading gateway parameters");
            Ok((ParameterSet::load(&path)?, source))
        }
        None => Ok((ParameterSet::default(), source)),
    }
}
