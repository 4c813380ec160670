//! Rendering of resolved CIDRs into Terraform text.
//!
//! Three output formats are supported:
//! - `tfvars`: a bare list assignment for a `.tfvars` file
//! - `variables`: a `variable` block whose default is the list
//! - `routes`: a `variable` block whose default is one route object per CIDR
//!
//! All formats are plain string templates. Nothing is escaped or validated.

mod routes;
mod tfvars;
mod types;
mod variables;

pub use routes::render_routes;
pub use tfvars::render_tfvars;
pub use types::{FormatOptions, OutputFormat};
pub use variables::render_variables;

/// Renders `cidrs` in the requested format.
///
/// Entries are emitted in the order given; route names are numbered by
/// position in `cidrs`.
pub fn format(mode: OutputFormat, cidrs: &[String], opts: &FormatOptions) -> String {
    match mode {
        OutputFormat::Tfvars => render_tfvars(&opts.variable, cidrs),
        OutputFormat::Variables => render_variables(&opts.variable, cidrs),
        OutputFormat::Routes => render_routes(cidrs, opts),
    }
}

/// Parses `mode` and renders `cidrs` with it.
///
/// # Errors
///
/// Returns `FormatError::UnknownFormatMode` if `mode` is not a recognized
/// output type. Nothing is rendered in that case.
pub fn format_str(
    mode: &str,
    cidrs: &[String],
    opts: &FormatOptions,
) -> Result<String, crate::error_handling::FormatError> {
    let mode: OutputFormat = mode.parse()?;
    Ok(format(mode, cidrs, opts))
}
