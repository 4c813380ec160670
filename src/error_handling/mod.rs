//! Error type definitions.
//!
//! Errors are split by the stage that produces them:
//! - **Initialization**: logger setup
//! - **Lookup**: a single TXT query failed
//! - **Resolution**: a lookup failure anywhere in the include tree, fatal to the run
//! - **Formatting**: an unrecognized output mode

mod types;

// Re-export public API
pub use types::{FormatError, InitializationError, LookupError, ResolveError};
