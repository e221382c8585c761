use wrapgen_types::{Parameter, Wrappable};

use super::helpers::c_string_escape;
use crate::error::{GenError, GenResult};
use crate::registry::{self, TypeInfo};

/* Marshaling body for one wrappable. The wrapper checks the input is an
 * array of exactly the declared arity, then checks each element's type tag
 * in declared order, failing fast with a message in the out slot and a -1
 * return. Only once every check passes are the native values extracted and
 * the target invoked; the target's own return value passes through
 * unchanged. */
pub fn emit_wrapper_fn(wrappable: &Wrappable) -> GenResult<Vec<String>> {
    let fun = &wrappable.fun;
    let num_params = wrappable.parameters.len();

    /* Resolve every parameter type up front; the target declaration needs
     * them before any check is emitted. */
    let mut resolved: Vec<(&Parameter, &'static TypeInfo)> = Vec::with_capacity(num_params);
    for parameter in &wrappable.parameters {
        let info = registry::lookup(&parameter.ty).ok_or_else(|| GenError::UnknownType {
            fun: fun.clone(),
            parameter: parameter.name.clone(),
            ty: parameter.ty.clone(),
        })?;
        resolved.push((parameter, info));
    }

    let mut lines = Vec::new();

    /* Real target declaration, matching the call at the end */
    let mut args = vec!["vde_component *component".to_string()];
    args.extend(
        resolved
            .iter()
            .map(|(parameter, info)| format!("{} {}", info.native, parameter.name)),
    );
    args.push("vde_sobj **out".to_string());
    lines.push(format!("int {}({});", fun, args.join(", ")));
    lines.push(String::new());

    lines.push(format!(
        "int {fun}_wrapper(vde_component *component, vde_sobj *in, vde_sobj **out) {{"
    ));

    /* One native local plus one tagged local per parameter */
    for (parameter, info) in &resolved {
        lines.push(format!(
            "  {} {}; vde_sobj *json_{};",
            info.native, parameter.name, parameter.name
        ));
    }

    /* Shape and arity checks on the received value */
    lines.push("  if (!vde_sobj_is_type(in, vde_sobj_type_array)) {".to_string());
    lines.push("    *out = vde_sobj_new_string(\"Did not receive an array\");".to_string());
    lines.push("    return -1;".to_string());
    lines.push("  }".to_string());
    lines.push(format!(
        "  if (vde_sobj_array_length(in) != {num_params}) {{"
    ));
    lines.push(format!(
        "    *out = vde_sobj_new_string(\"Expected {num_params} params\");"
    ));
    lines.push("    return -1;".to_string());
    lines.push("  }".to_string());

    /* Per-parameter tag check and extraction, in declared order */
    for (idx, (parameter, info)) in resolved.iter().enumerate() {
        let name = &parameter.name;
        lines.push(format!(
            "  json_{name} = vde_sobj_array_get_idx(in, {idx});"
        ));
        lines.push(format!(
            "  if (!vde_sobj_is_type(json_{name}, {})) {{",
            info.type_tag
        ));
        lines.push(format!(
            "    *out = vde_sobj_new_string(\"Param {} not a {}\");",
            c_string_escape(name),
            c_string_escape(&parameter.ty)
        ));
        lines.push("    return -1;".to_string());
        lines.push("  }".to_string());
        lines.push(format!("  {name} = {}(json_{name});", info.accessor));
    }

    let call_args: String = resolved
        .iter()
        .map(|(parameter, _)| format!("{}, ", parameter.name))
        .collect();
    lines.push(format!("  return {fun}(component, {call_args}out);"));
    lines.push("}".to_string());

    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wrapgen_types::{Parameter, Wrappable};

    fn param(name: &str, ty: &str) -> Parameter {
        Parameter {
            name: name.to_string(),
            description: format!("{name} description"),
            ty: ty.to_string(),
        }
    }

    #[test]
    fn wrapper_matches_emission_format_exactly() {
        let wrappable = Wrappable {
            name: "hub.port_add".to_string(),
            fun: "port_add".to_string(),
            description: "Add a port".to_string(),
            parameters: vec![param("a", "int"), param("b", "string")],
        };
        let expected = "\
int port_add(vde_component *component, int a, const char *b, vde_sobj **out);

int port_add_wrapper(vde_component *component, vde_sobj *in, vde_sobj **out) {
  int a; vde_sobj *json_a;
  const char *b; vde_sobj *json_b;
  if (!vde_sobj_is_type(in, vde_sobj_type_array)) {
    *out = vde_sobj_new_string(\"Did not receive an array\");
    return -1;
  }
  if (vde_sobj_array_length(in) != 2) {
    *out = vde_sobj_new_string(\"Expected 2 params\");
    return -1;
  }
  json_a = vde_sobj_array_get_idx(in, 0);
  if (!vde_sobj_is_type(json_a, vde_sobj_type_int)) {
    *out = vde_sobj_new_string(\"Param a not a int\");
    return -1;
  }
  a = vde_sobj_get_int(json_a);
  json_b = vde_sobj_array_get_idx(in, 1);
  if (!vde_sobj_is_type(json_b, vde_sobj_type_string)) {
    *out = vde_sobj_new_string(\"Param b not a string\");
    return -1;
  }
  b = vde_sobj_get_string(json_b);
  return port_add(component, a, b, out);
}";
        let lines = emit_wrapper_fn(&wrappable).unwrap();
        assert_eq!(lines.join("\n"), expected);
    }

    #[test]
    fn check_block_count_equals_parameter_count_in_order() {
        let wrappable = Wrappable {
            name: "hub.cfg".to_string(),
            fun: "cfg".to_string(),
            description: String::new(),
            parameters: vec![
                param("rate", "double"),
                param("active", "bool"),
                param("label", "string"),
            ],
        };
        let lines = emit_wrapper_fn(&wrappable).unwrap();
        let checks: Vec<&String> = lines
            .iter()
            .filter(|l| l.contains("vde_sobj_array_get_idx"))
            .collect();
        assert_eq!(checks.len(), 3);
        assert!(checks[0].contains("json_rate") && checks[0].contains("(in, 0)"));
        assert!(checks[1].contains("json_active") && checks[1].contains("(in, 1)"));
        assert!(checks[2].contains("json_label") && checks[2].contains("(in, 2)"));
    }

    #[test]
    fn zero_parameter_wrapper_still_checks_arity() {
        let wrappable = Wrappable {
            name: "hub.reset".to_string(),
            fun: "reset".to_string(),
            description: "Reset".to_string(),
            parameters: vec![],
        };
        let lines = emit_wrapper_fn(&wrappable).unwrap();
        let text = lines.join("\n");
        assert!(text.contains("int reset(vde_component *component, vde_sobj **out);"));
        assert!(text.contains("if (vde_sobj_array_length(in) != 0) {"));
        assert!(text.contains("return reset(component, out);"));
    }

    #[test]
    fn unknown_type_surfaces_with_context() {
        let wrappable = Wrappable {
            name: "hub.x".to_string(),
            fun: "x".to_string(),
            description: String::new(),
            parameters: vec![param("p", "blob")],
        };
        let err = emit_wrapper_fn(&wrappable).unwrap_err();
        assert!(matches!(err, GenError::UnknownType { .. }));
    }
}
