//! layout2pdf CLI - renders `<name>.txt` layout files to `<name>.pdf`

use std::error::Error;
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

#[derive(Parser)]
#[command(name = "layout2pdf")]
#[command(version)]
#[command(about = "Render a layout file to a PDF document", long_about = None)]
struct Cli {
    /// Base name of the layout file; reads NAME.txt and writes NAME.pdf
    #[arg(value_name = "NAME")]
    name: PathBuf,

    /// Write the PDF here instead of NAME.pdf
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Anything after NAME is accepted and ignored
    #[arg(
        hide = true,
        value_name = "IGNORED",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    ignored: Vec<OsString>,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version are reported as "errors" too, but succeed
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            return ExitCode::from(code);
        }
    };

    if !cli.ignored.is_empty() {
        log::debug!("ignoring extra arguments {:?}", cli.ignored);
    }

    let (input, default_output) = layout2pdf::layout_paths(&cli.name);
    let output = cli.output.unwrap_or(default_output);
    log::debug!("converting {} to {}", input.display(), output.display());

    match layout2pdf::convert_file(&input, &output) {
        Ok(pages) => {
            log::info!("wrote {pages} page(s)");
            println!("Saved to '{}'", output.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            let mut source = e.source();
            while let Some(cause) = source {
                eprintln!("  caused by: {cause}");
                source = cause.source();
            }
            ExitCode::FAILURE
        }
    }
}
