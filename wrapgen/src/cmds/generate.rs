/* Generate command - emit C dispatch glue from a wrapper schema */

use std::path::PathBuf;

use crate::codegen::c::{CWrapperGenerator, CWrapperGeneratorOptions};
use crate::error::GenResult;
use crate::loader;

/// Execute the generate command: load, validate, emit, write.
///
/// `basename` overrides the schema's declared basename for both file names
/// and the dispatch-table identifier. Nothing is written unless the whole
/// schema loads and validates.
pub fn run(
    input: PathBuf,
    output_dir: PathBuf,
    basename: Option<String>,
    verbose: bool,
) -> GenResult<()> {
    let schema = loader::load_schema(&input)?;
    loader::validate_schema(&schema)?;

    if verbose {
        println!(
            "Loaded {} wrappable(s) from {}",
            schema.wrappables.len(),
            input.display()
        );
    }

    let generator = CWrapperGenerator::new(CWrapperGeneratorOptions {
        output_dir,
        basename,
        tool: "wrapgen".to_string(),
        timestamp: chrono::Local::now().format("%c").to_string(),
    });

    let artifacts = generator.emit_code(&schema)?;
    let (header_path, wrapper_path) = generator.write_artifacts(&artifacts)?;

    if verbose {
        println!("Wrote {}", header_path.display());
        println!("Wrote {}", wrapper_path.display());
    }

    Ok(())
}
