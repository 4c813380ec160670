//! `tfvars` list rendering.

/// Renders `cidrs` as a list assignment: `<variable> = [ "<cidr>", ... ]`.
pub fn render_tfvars(variable: &str, cidrs: &[String]) -> String {
    let mut result = format!("{variable} = [\n");
    for cidr in cidrs {
        result.push_str(&format!("\t\t\"{cidr}\",\n"));
    }
    result.push_str("\t]\n");
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_tfvars_empty() {
        assert_eq!(render_tfvars("cidrs", &[]), "cidrs = [\n\t]\n");
    }

    #[test]
    fn test_render_tfvars_entries_in_order() {
        let cidrs = vec!["10.0.0.0/8".to_string(), "20.0.0.0/8".to_string()];
        assert_eq!(
            render_tfvars("cidrs", &cidrs),
            "cidrs = [\n\t\t\"10.0.0.0/8\",\n\t\t\"20.0.0.0/8\",\n\t]\n"
        );
    }
}
