//! Subject identity types.
//!
//! Measurements are tied to a three-level topology: a network owns gateways
//! and a gateway owns sensors. Each level has its own code type so that a
//! sensor code can never be passed where a gateway code is expected. Code
//! formats are validated by whoever registers the subjects; these types only
//! carry the string.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which level of the topology a report is computed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubjectKind {
    Sensor,
    Gateway,
    Network,
}

impl fmt::Display for SubjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubjectKind::Sensor => write!(f, "sensor"),
            SubjectKind::Gateway => write!(f, "gateway"),
            SubjectKind::Network => write!(f, "network"),
        }
    }
}

macro_rules! subject_code {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            /// Create a code from anything string-like.
            pub fn new(code: impl Into<String>) -> Self {
                $name(code.into())
            }

            /// Borrow the code as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<&str> for $name {
            fn from(code: &str) -> Self {
                $name(code.to_string())
            }
        }

        impl From<String> for $name {
            fn from(code: String) -> Self {
                $name(code)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

subject_code!(
    /// Sensor code, e.g. `S_000001`.
    SensorCode
);

subject_code!(
    /// Gateway code, e.g. `GW_0001`.
    GatewayCode
);

subject_code!(
    /// Network code, e.g. `NET_01`.
    NetworkCode
);
