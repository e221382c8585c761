//! Command-wrapper code generator.
//!
//! Reads a JSON wrapper schema and emits the C dispatch header and the
//! marshaling source consumed by the component command layer. Generation is
//! a pure function of the schema: parse, validate, emit, write.

pub mod cmds;
pub mod codegen;
pub mod error;
pub mod loader;
pub mod registry;
