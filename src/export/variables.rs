//! Terraform `variable` block rendering.

/// Renders `cidrs` as the default of a variable block.
pub fn render_variables(variable: &str, cidrs: &[String]) -> String {
    let mut result = format!("variable \"{variable}\" {{ default = [\n");
    for cidr in cidrs {
        result.push_str(&format!("\t\t\"{cidr}\",\n"));
    }
    result.push_str("\t] }\n");
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_variables_empty() {
        assert_eq!(
            render_variables("cidrs", &[]),
            "variable \"cidrs\" { default = [\n\t] }\n"
        );
    }

    #[test]
    fn test_render_variables_single() {
        let cidrs = vec!["10.0.0.0/8".to_string()];
        assert_eq!(
            render_variables("cidrs", &cidrs),
            "variable \"cidrs\" { default = [\n\t\t\"10.0.0.0/8\",\n\t] }\n"
        );
    }
}
