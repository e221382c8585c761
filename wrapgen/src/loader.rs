use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde_json::Value;
use wrapgen_types::Schema;

use crate::error::{GenError, GenResult};
use crate::registry;

/// Read and parse a wrapper schema from disk.
pub fn load_schema(path: &Path) -> GenResult<Schema> {
    let raw = fs::read_to_string(path).map_err(|source| GenError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_schema(&raw)
}

/// Parse a wrapper schema from JSON text.
///
/// Invalid JSON is `MalformedInput`; a document missing the required
/// top-level `basename`/`wrappables` keys, or with wrongly shaped fields, is
/// `InvalidSchema`. Parameter types are deliberately not checked here —
/// `validate_schema` owns that.
pub fn parse_schema(raw: &str) -> GenResult<Schema> {
    let value: Value = serde_json::from_str(raw).map_err(GenError::MalformedInput)?;

    let Some(doc) = value.as_object() else {
        return Err(GenError::InvalidSchema {
            reason: "top level is not an object".to_string(),
        });
    };
    if !doc.contains_key("basename") || !doc.contains_key("wrappables") {
        return Err(GenError::InvalidSchema {
            reason: "basename or wrappables keys not found".to_string(),
        });
    }

    serde_json::from_value(value).map_err(|e| GenError::InvalidSchema {
        reason: e.to_string(),
    })
}

/// Generation-time checks the parser leaves out: every declared parameter
/// type must be in the registry, and generated C symbols and command names
/// must not collide. Fail-fast on the first offender, before any emission.
pub fn validate_schema(schema: &Schema) -> GenResult<()> {
    let mut seen_funs: HashSet<&str> = HashSet::new();
    let mut seen_names: HashSet<&str> = HashSet::new();

    for wrappable in &schema.wrappables {
        if !seen_funs.insert(&wrappable.fun) {
            return Err(GenError::DuplicateSymbol {
                kind: "function symbol",
                value: wrappable.fun.clone(),
            });
        }
        if !seen_names.insert(&wrappable.name) {
            return Err(GenError::DuplicateSymbol {
                kind: "command name",
                value: wrappable.name.clone(),
            });
        }
        for parameter in &wrappable.parameters {
            if registry::lookup(&parameter.ty).is_none() {
                return Err(GenError::UnknownType {
                    fun: wrappable.fun.clone(),
                    parameter: parameter.name.clone(),
                    ty: parameter.ty.clone(),
                });
            }
        }
    }

    Ok(())
}
