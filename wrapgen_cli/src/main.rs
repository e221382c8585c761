use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "wrapgen")]
#[command(about = "Generate C command-dispatch glue from a wrapper schema")]
#[command(version)]
struct Cli {
    /// Input JSON schema describing the wrappable functions
    schema: PathBuf,

    /// Output generated files to OUTDIR
    #[arg(
        short = 'o',
        long = "outdir",
        value_name = "OUTDIR",
        default_value = "."
    )]
    outdir: PathBuf,

    /// Override the basename declared in the schema
    #[arg(short = 'b', long = "basename", value_name = "NAME")]
    basename: Option<String>,

    /// Output only errors
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose")]
    quiet: bool,

    /// Output progress messages on stdout (default)
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let verbose = cli.verbose || !cli.quiet;

    match wrapgen::cmds::generate::run(cli.schema, cli.outdir, cli.basename, verbose) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("wrapgen: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}
