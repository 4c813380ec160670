//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use clap::{Parser, ValueEnum};

use crate::config::constants::*;
use crate::export::FormatOptions;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Command-line options and library configuration.
///
/// The same struct drives the binary (via `clap`) and programmatic use
/// (via `Default`). The output mode is kept as a raw string so that an
/// unrecognized mode surfaces as `FormatError::UnknownFormatMode` rather
/// than a clap usage error.
///
/// # Examples
///
/// ```bash
/// # Routes for Google's netblocks (defaults)
/// txt2route
///
/// # A tfvars list for another SPF tree
/// txt2route -o tfvars --domain _spf.example.com --name example_cidrs
///
/// # Routes through an instance in a specific zone
/// txt2route --route-hop-type next_hop_instance --route-hop-value nat-gw \
///     --route-instance-zone us-central1-a
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "txt2route",
    about = "download DNS TXT entries into terraform routes"
)]
pub struct Config {
    /// Output type: tfvars|variables|routes
    #[arg(short = 'o', long = "output", default_value = DEFAULT_OUTPUT)]
    pub output: String,

    /// TXT domain to use for lookup
    #[arg(long, default_value = DEFAULT_DOMAIN)]
    pub domain: String,

    /// Name to use for variable in output
    #[arg(long, default_value = DEFAULT_VARIABLE_NAME)]
    pub name: String,

    /// [route only] prefix for route name
    #[arg(long, default_value = DEFAULT_ROUTE_PREFIX)]
    pub route_prefix: String,

    /// [route only] route description
    #[arg(long, default_value = DEFAULT_ROUTE_DESCRIPTION)]
    pub route_description: String,

    /// [route only] tags (i.e. [ "foo", "bar" ]), "" for no tags
    #[arg(long, default_value = "")]
    pub route_tags: String,

    /// [route only] route priority
    #[arg(long, default_value = DEFAULT_ROUTE_PRIORITY)]
    pub route_priority: String,

    /// [route only] type of next hop
    #[arg(long, default_value = DEFAULT_ROUTE_HOP_TYPE)]
    pub route_hop_type: String,

    /// [route only] value for next hop
    #[arg(long, default_value = DEFAULT_ROUTE_HOP_VALUE)]
    pub route_hop_value: String,

    /// [route only] instance zone (if applicable)
    #[arg(long, default_value = "")]
    pub route_instance_zone: String,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Per-query DNS timeout in seconds
    #[arg(long, default_value_t = DNS_TIMEOUT_SECS)]
    pub dns_timeout_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output: DEFAULT_OUTPUT.to_string(),
            domain: DEFAULT_DOMAIN.to_string(),
            name: DEFAULT_VARIABLE_NAME.to_string(),
            route_prefix: DEFAULT_ROUTE_PREFIX.to_string(),
            route_description: DEFAULT_ROUTE_DESCRIPTION.to_string(),
            route_tags: String::new(),
            route_priority: DEFAULT_ROUTE_PRIORITY.to_string(),
            route_hop_type: DEFAULT_ROUTE_HOP_TYPE.to_string(),
            route_hop_value: DEFAULT_ROUTE_HOP_VALUE.to_string(),
            route_instance_zone: String::new(),
            log_level: LogLevel::Warn,
            log_format: LogFormat::Plain,
            dns_timeout_seconds: DNS_TIMEOUT_SECS,
        }
    }
}

impl Config {
    /// Builds the rendering options carried by this configuration.
    pub fn format_options(&self) -> FormatOptions {
        FormatOptions {
            variable: self.name.clone(),
            name_prefix: self.route_prefix.clone(),
            description: self.route_description.clone(),
            tags: self.route_tags.clone(),
            priority: self.route_priority.clone(),
            next_hop_type: self.route_hop_type.clone(),
            next_hop_value: self.route_hop_value.clone(),
            next_hop_instance_zone: self.route_instance_zone.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_log_level_ordering() {
        let error = log::LevelFilter::from(LogLevel::Error);
        let warn = log::LevelFilter::from(LogLevel::Warn);
        let info = log::LevelFilter::from(LogLevel::Info);
        let debug = log::LevelFilter::from(LogLevel::Debug);
        let trace = log::LevelFilter::from(LogLevel::Trace);

        assert!(error < warn);
        assert!(warn < info);
        assert!(info < debug);
        assert!(debug < trace);
    }

    #[test]
    fn test_config_default_matches_cli_defaults() {
        // Programmatic defaults must agree with what clap produces for an empty command line
        let parsed = Config::try_parse_from(["txt2route"]).unwrap();
        let default = Config::default();

        assert_eq!(parsed.output, default.output);
        assert_eq!(parsed.domain, default.domain);
        assert_eq!(parsed.name, default.name);
        assert_eq!(parsed.route_prefix, default.route_prefix);
        assert_eq!(parsed.route_description, default.route_description);
        assert_eq!(parsed.route_tags, default.route_tags);
        assert_eq!(parsed.route_priority, default.route_priority);
        assert_eq!(parsed.route_hop_type, default.route_hop_type);
        assert_eq!(parsed.route_hop_value, default.route_hop_value);
        assert_eq!(parsed.route_instance_zone, default.route_instance_zone);
        assert_eq!(parsed.dns_timeout_seconds, default.dns_timeout_seconds);
    }

    #[test]
    fn test_format_options_from_config() {
        let config = Config {
            name: "cidrs".to_string(),
            route_prefix: "r".to_string(),
            route_tags: "[ \"nat\" ]".to_string(),
            route_hop_type: "next_hop_instance".to_string(),
            route_instance_zone: "us-central1-a".to_string(),
            ..Default::default()
        };

        let opts = config.format_options();
        assert_eq!(opts.variable, "cidrs");
        assert_eq!(opts.name_prefix, "r");
        assert_eq!(opts.tags, "[ \"nat\" ]");
        assert_eq!(opts.priority, "50");
        assert_eq!(opts.next_hop_type, "next_hop_instance");
        assert_eq!(opts.next_hop_value, "true");
        assert_eq!(opts.next_hop_instance_zone, "us-central1-a");
    }
}
