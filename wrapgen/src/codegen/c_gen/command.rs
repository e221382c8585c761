use wrapgen_types::Wrappable;

use super::helpers::c_string_escape;

/* One dispatch-table row: public command name, wrapper symbol, help text,
 * and the parameter-metadata array. The file writer appends the table's
 * single all-NULL sentinel row after the last entry. */
pub fn emit_command_entry(wrappable: &Wrappable) -> Vec<String> {
    vec![format!(
        "{{ \"{}\", {}_wrapper,   \"{}\", {}_wrapper_params }},",
        c_string_escape(&wrappable.name),
        wrappable.fun,
        c_string_escape(&wrappable.description),
        wrappable.fun
    )]
}
