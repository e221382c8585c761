use wrapgen_types::Wrappable;

/* Forward declaration for one generated entry point. Every wrapper shares
 * the same three-argument shape: the opaque component handle, the tagged
 * input value, and the out slot the wrapper fills with either the result or
 * a failure message. */
pub fn emit_wrapper_declaration(wrappable: &Wrappable) -> Vec<String> {
    vec![format!(
        "int {}_wrapper(vde_component *component, vde_sobj *in, vde_sobj **out);",
        wrappable.fun
    )]
}
