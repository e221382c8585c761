use std::path::PathBuf;
use thiserror::Error;

/// Result alias used across the generator crate.
pub type GenResult<T> = Result<T, GenError>;

/// Top-level errors produced by the generator.
///
/// Marshaling failures (arity or type mismatches at dispatch time) are not
/// represented here: the generated wrappers report those through their out
/// slot at run time.
#[derive(Debug, Error)]
pub enum GenError {
    /// Input schema unreadable or an output artifact unwritable.
    #[error("error accessing {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input is not structurally valid JSON.
    #[error("error parsing schema: {0}")]
    MalformedInput(serde_json::Error),

    /// Required top-level keys absent or a field has the wrong shape.
    #[error("invalid wrappable schema: {reason}")]
    InvalidSchema { reason: String },

    /// A parameter's declared type is outside the supported set.
    #[error("unknown type '{ty}' for parameter '{parameter}' of '{fun}'")]
    UnknownType {
        fun: String,
        parameter: String,
        ty: String,
    },

    /// Two wrappables collide on a generated C symbol or command name.
    #[error("duplicate {kind} '{value}' in schema")]
    DuplicateSymbol { kind: &'static str, value: String },
}

impl GenError {
    /// Process exit code reported for this failure: 1 for I/O problems,
    /// 3 for anything wrong with the schema itself.
    pub fn exit_code(&self) -> u8 {
        match self {
            GenError::Io { .. } => 1,
            GenError::MalformedInput(_)
            | GenError::InvalidSchema { .. }
            | GenError::UnknownType { .. }
            | GenError::DuplicateSymbol { .. } => 3,
        }
    }
}
