use std::fs;
use std::path::{Path, PathBuf};

use wrapgen_types::Schema;

use crate::codegen::c_gen::{
    emit_command_entry, emit_param_table, emit_wrapper_declaration, emit_wrapper_fn,
    helpers::header_guard,
};
use crate::error::{GenError, GenResult};

/// Suffix of the generated declarations/metadata header.
pub const COMMANDS_SUFFIX: &str = "_commands.h";
/// Suffix of the generated marshaling source.
pub const WRAPPERS_SUFFIX: &str = "_commands.c";

pub struct CWrapperGeneratorOptions {
    pub output_dir: PathBuf,
    /// Overrides the schema's own basename when set.
    pub basename: Option<String>,
    /// Tool name stamped into the generated-file banner.
    pub tool: String,
    /// Timestamp stamped into the generated-file banner. Injected by the
    /// caller so a generation pass stays a pure function of its inputs.
    pub timestamp: String,
}

pub struct CWrapperGenerator {
    options: CWrapperGeneratorOptions,
}

/// Both artifacts of one generation pass, before they touch disk.
#[derive(Debug)]
pub struct GeneratedArtifacts {
    pub header_name: String,
    pub wrapper_name: String,
    pub header: String,
    pub source: String,
}

impl CWrapperGenerator {
    pub fn new(options: CWrapperGeneratorOptions) -> Self {
        Self { options }
    }

    /// Run all four emitters over every wrappable in schema order and frame
    /// the header and source artifacts.
    pub fn emit_code(&self, schema: &Schema) -> GenResult<GeneratedArtifacts> {
        let basename = self
            .options
            .basename
            .as_deref()
            .unwrap_or(&schema.basename);

        let mut declarations = Vec::new();
        let mut params = Vec::new();
        let mut commands = Vec::new();
        let mut wrappers = Vec::new();

        for wrappable in &schema.wrappables {
            declarations.extend(emit_wrapper_declaration(wrappable));
            params.extend(emit_param_table(wrappable));
            commands.extend(emit_command_entry(wrappable));
            wrappers.extend(emit_wrapper_fn(wrappable)?);
            wrappers.push(String::new()); /* separate wrappers with an empty line */
        }

        let header_name = format!("{basename}{COMMANDS_SUFFIX}");
        let wrapper_name = format!("{basename}{WRAPPERS_SUFFIX}");

        let header = self.frame_header(basename, &header_name, &declarations, &params, &commands);
        let source = self.frame_source(&header_name, &wrappers);

        Ok(GeneratedArtifacts {
            header_name,
            wrapper_name,
            header,
            source,
        })
    }

    /// Write both artifacts under the output directory. Each file is staged
    /// next to its destination and renamed into place so a failed run never
    /// leaves a partial artifact behind.
    pub fn write_artifacts(
        &self,
        artifacts: &GeneratedArtifacts,
    ) -> GenResult<(PathBuf, PathBuf)> {
        let header_path = self.options.output_dir.join(&artifacts.header_name);
        let wrapper_path = self.options.output_dir.join(&artifacts.wrapper_name);

        write_atomic(&header_path, &artifacts.header)?;
        write_atomic(&wrapper_path, &artifacts.source)?;

        Ok((header_path, wrapper_path))
    }

    fn banner(&self) -> String {
        format!(
            "/* Autogenerated by {}\n * on {}\n * do not edit!!\n */\n",
            self.options.tool, self.options.timestamp
        )
    }

    fn frame_header(
        &self,
        basename: &str,
        header_name: &str,
        declarations: &[String],
        params: &[String],
        commands: &[String],
    ) -> String {
        let guard = header_guard(header_name);

        let mut out = self.banner();
        out.push('\n');
        out.push_str(&format!("#ifndef {guard}\n"));
        out.push_str(&format!("#define {guard}\n"));
        out.push('\n');
        out.push_str("#include <stdbool.h>\n");
        out.push_str("#include <vde3.h>\n");
        out.push_str("#include <vde3/common.h>\n");
        out.push_str("#include <vde3/command.h>\n");
        out.push('\n');
        for line in declarations {
            out.push_str(line);
            out.push('\n');
        }
        out.push('\n');
        for line in params {
            out.push_str(line);
            out.push('\n');
        }
        out.push('\n');

        out.push_str(&format!("static vde_command {basename}_commands [] = {{\n"));
        for row in commands {
            out.push_str(&format!("  {row}\n"));
        }
        /* table terminator consumers rely on instead of a length field */
        out.push_str("  { NULL, NULL, NULL, NULL },\n");
        out.push_str("};\n");
        out.push('\n');
        out.push_str(&format!("#endif /* {guard} */\n"));
        out.push('\n');

        out
    }

    fn frame_source(&self, header_name: &str, wrappers: &[String]) -> String {
        let mut out = self.banner();
        out.push('\n');
        out.push_str(&format!("#include \"{header_name}\"\n"));
        out.push('\n');
        for line in wrappers {
            out.push_str(line);
            out.push('\n');
        }
        out
    }
}

fn write_atomic(path: &Path, contents: &str) -> GenResult<()> {
    let io_err = |source| GenError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let staging = path.with_file_name(format!("{file_name}.tmp"));

    fs::write(&staging, contents).map_err(io_err)?;
    if let Err(source) = fs::rename(&staging, path) {
        let _ = fs::remove_file(&staging);
        return Err(io_err(source));
    }
    Ok(())
}
