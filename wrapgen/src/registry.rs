/// Native-side mapping for one supported parameter type.
#[derive(Debug, PartialEq, Eq)]
pub struct TypeInfo {
    /// C type used for locals and the target function's declaration.
    pub native: &'static str,
    /// vde_sobj type tag the wrapper checks before extraction.
    pub type_tag: &'static str,
    /// vde_sobj accessor used to pull the native value out.
    pub accessor: &'static str,
}

/* The closed set of wire types. Extending it is one new row here. */
const TYPE_MAP: &[(&str, TypeInfo)] = &[
    (
        "int",
        TypeInfo {
            native: "int",
            type_tag: "vde_sobj_type_int",
            accessor: "vde_sobj_get_int",
        },
    ),
    (
        "double",
        TypeInfo {
            native: "double",
            type_tag: "vde_sobj_type_double",
            accessor: "vde_sobj_get_double",
        },
    ),
    (
        "bool",
        TypeInfo {
            native: "bool",
            type_tag: "vde_sobj_type_boolean",
            accessor: "vde_sobj_get_boolean",
        },
    ),
    (
        "string",
        TypeInfo {
            native: "const char *",
            type_tag: "vde_sobj_type_string",
            accessor: "vde_sobj_get_string",
        },
    ),
];

/// Look up the native mapping for a declared parameter type. Returns `None`
/// for anything outside the supported set; callers turn that into an
/// `UnknownType` error with the offending wrappable's context.
pub fn lookup(ty: &str) -> Option<&'static TypeInfo> {
    TYPE_MAP.iter().find(|(key, _)| *key == ty).map(|(_, info)| info)
}

/// The supported type names, in registry order.
pub fn supported_types() -> impl Iterator<Item = &'static str> {
    TYPE_MAP.iter().map(|(key, _)| *key)
}
