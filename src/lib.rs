//! txt2route library: SPF TXT include chains to Terraform routes
//!
//! This library resolves a domain's SPF-style TXT records, recursively follows
//! `include:` directives, collects every `ip4:` range, and renders the result
//! as a `tfvars` list, a Terraform `variable` block, or a list of route objects.
//!
//! # Example
//!
//! ```no_run
//! use txt2route::{run, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     output: "tfvars".to_string(),
//!     domain: "_spf.google.com".to_string(),
//!     ..Default::default()
//! };
//!
//! let text = run(&config).await?;
//! println!("{text}");
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

#![warn(missing_docs)]

pub mod config;
pub mod dns;
mod error_handling;
pub mod export;
pub mod initialization;
mod resolve;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use dns::TxtLookup;
pub use error_handling::{FormatError, InitializationError, LookupError, ResolveError};
pub use export::{format, format_str, FormatOptions, OutputFormat};
pub use initialization::init_resolver;
pub use resolve::{resolve, resolve_with_stats, Resolution, ResolutionStats};
pub use run::{run, run_with_lookup};

// Internal run module (one resolve-then-render pass)
mod run {
    use std::sync::Arc;
    use std::time::Instant;

    use anyhow::{Context, Result};
    use log::info;

    use crate::config::Config;
    use crate::dns::TxtLookup;
    use crate::export::{format, OutputFormat};
    use crate::initialization::init_resolver;
    use crate::resolve::resolve;

    /// Resolves `config.domain` through the host DNS resolver and renders
    /// the result in `config.output` format.
    ///
    /// # Errors
    ///
    /// Fails with `FormatError::UnknownFormatMode` before any DNS traffic if the
    /// output mode is not recognized, or with `ResolveError::LookupFailure` if
    /// any lookup in the include tree fails.
    pub async fn run(config: &Config) -> Result<String> {
        // Reject the mode before building a resolver or sending any query
        let mode: OutputFormat = config.output.parse()?;
        let resolver = init_resolver(config.dns_timeout_seconds);
        render(config, mode, resolver).await
    }

    /// Same as [`run`] but with a caller-supplied TXT source.
    pub async fn run_with_lookup<L>(config: &Config, lookup: Arc<L>) -> Result<String>
    where
        L: TxtLookup + ?Sized + 'static,
    {
        let mode: OutputFormat = config.output.parse()?;
        render(config, mode, lookup).await
    }

    async fn render<L>(config: &Config, mode: OutputFormat, lookup: Arc<L>) -> Result<String>
    where
        L: TxtLookup + ?Sized + 'static,
    {
        let start_time = Instant::now();
        info!("Resolving TXT records for {}", config.domain);

        let cidrs = resolve(&config.domain, lookup)
            .await
            .with_context(|| format!("Failed to resolve {}", config.domain))?;

        info!(
            "Collected {} CIDRs in {:.2} seconds, rendering as {}",
            cidrs.len(),
            start_time.elapsed().as_secs_f64(),
            mode
        );
        Ok(format(mode, &cidrs, &config.format_options()))
    }
}
