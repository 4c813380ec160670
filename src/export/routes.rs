//! Route-table rendering.

use crate::config::NEXT_HOP_INSTANCE;

use super::types::FormatOptions;

/// Renders one route object per CIDR inside a variable block.
///
/// Routes are named `<prefix>-<index>` by position in `cidrs`. The `tags`
/// line appears only when tags are set, and `next_hop_instance_zone` only
/// when the hop type is `next_hop_instance` and a zone is set.
pub fn render_routes(cidrs: &[String], opts: &FormatOptions) -> String {
    let zone_addendum =
        if opts.next_hop_type == NEXT_HOP_INSTANCE && !opts.next_hop_instance_zone.is_empty() {
            format!(
                "\n\tnext_hop_instance_zone\t\t\t = \"{}\"\n",
                opts.next_hop_instance_zone
            )
        } else {
            String::new()
        };
    let tags_addendum = if opts.tags.is_empty() {
        String::new()
    } else {
        format!("\n\ttags\t\t  = {}\n", opts.tags)
    };

    let mut result = format!("variable \"{}\" {{ default = [\n", opts.variable);
    for (i, cidr) in cidrs.iter().enumerate() {
        result.push_str(&format!(
            "\n{{\n\
             \tname                   = \"{prefix}-{i}\"\n\
             \tdescription            = \"{description}\"\n\
             \tdestination_range      = \"{cidr}\"{tags}\n\
             \tpriority               = \"{priority}\"\n\
             \t{hop_type}      = \"{hop_value}\"{zone}\n\
             }},",
            prefix = opts.name_prefix,
            description = opts.description,
            tags = tags_addendum,
            priority = opts.priority,
            hop_type = opts.next_hop_type,
            hop_value = opts.next_hop_value,
            zone = zone_addendum,
        ));
    }
    result.push_str("\t ] }\n");
    result
}
