//! Export types and options.

use std::fmt;
use std::str::FromStr;

use crate::error_handling::FormatError;

/// Output format options.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// `<name> = [ ... ]`
    Tfvars,
    /// `variable "<name>" { default = [ ... ] }`
    Variables,
    /// `variable "<name>" { default = [ { route }, ... ] }`
    Routes,
}

impl OutputFormat {
    /// Returns the name used on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Tfvars => "tfvars",
            OutputFormat::Variables => "variables",
            OutputFormat::Routes => "routes",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = FormatError;

    /// Mode names are matched case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "tfvars" => Ok(OutputFormat::Tfvars),
            "variables" => Ok(OutputFormat::Variables),
            "routes" => Ok(OutputFormat::Routes),
            _ => Err(FormatError::UnknownFormatMode(s.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options for rendering.
///
/// Every value is inserted verbatim into the output.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormatOptions {
    /// Variable name
    pub variable: String,
    /// Route name prefix; routes are named `<prefix>-<index>`
    pub name_prefix: String,
    /// Route description
    pub description: String,
    /// Raw tags expression (e.g. `[ "foo", "bar" ]`), empty for none
    pub tags: String,
    /// Route priority
    pub priority: String,
    /// Next hop field name (e.g. `next_hop_internet`, `next_hop_instance`)
    pub next_hop_type: String,
    /// Next hop value
    pub next_hop_value: String,
    /// Instance zone, only used with `next_hop_instance`
    pub next_hop_instance_zone: String,
}
