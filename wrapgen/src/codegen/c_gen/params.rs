use wrapgen_types::Wrappable;

use super::helpers::c_string_escape;

/* Static parameter-metadata array for one wrappable: one row per parameter
 * plus the all-NULL sentinel consumers use to find the end. The array name
 * <fun>_wrapper_params is what the dispatch-table row references, so it must
 * match emit_command_entry exactly. */
pub fn emit_param_table(wrappable: &Wrappable) -> Vec<String> {
    let mut lines = Vec::with_capacity(wrappable.parameters.len() + 3);
    lines.push(format!(
        "static vde_argument {}_wrapper_params[] = {{",
        wrappable.fun
    ));
    for parameter in &wrappable.parameters {
        lines.push(format!(
            "  {{\"{}\", \"{}\", \"{}\"}},",
            c_string_escape(&parameter.name),
            c_string_escape(&parameter.description),
            c_string_escape(&parameter.ty)
        ));
    }
    lines.push("  { NULL, NULL, NULL },".to_string());
    lines.push("};".to_string());
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use wrapgen_types::{Parameter, Wrappable};

    fn wrappable(parameters: Vec<Parameter>) -> Wrappable {
        Wrappable {
            name: "hub.port_add".to_string(),
            fun: "port_add".to_string(),
            description: "Add a port".to_string(),
            parameters,
        }
    }

    #[test]
    fn rows_follow_declaration_order_and_end_with_sentinel() {
        let lines = emit_param_table(&wrappable(vec![
            Parameter {
                name: "port".to_string(),
                description: "Port number".to_string(),
                ty: "int".to_string(),
            },
            Parameter {
                name: "label".to_string(),
                description: "Port label".to_string(),
                ty: "string".to_string(),
            },
        ]));
        assert_eq!(
            lines,
            vec![
                "static vde_argument port_add_wrapper_params[] = {".to_string(),
                "  {\"port\", \"Port number\", \"int\"},".to_string(),
                "  {\"label\", \"Port label\", \"string\"},".to_string(),
                "  { NULL, NULL, NULL },".to_string(),
                "};".to_string(),
            ]
        );
    }

    #[test]
    fn empty_parameter_list_still_emits_sentinel() {
        let lines = emit_param_table(&wrappable(vec![]));
        assert_eq!(lines[1], "  { NULL, NULL, NULL },");
        assert_eq!(lines.len(), 3);
    }
}
