mod args;
mod picker;

use args::Args;
use ascii_textr::{PathProvider, RenderError, render_file, resolve_image_path};
use clap::Parser;
use picker::DialogPathProvider;
use std::io::{self, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    // Configure logging
    env_logger::init();

    let args = Args::parse();
    let result = run(&args, &DialogPathProvider);

    report(&result, &mut io::stdout().lock(), &mut io::stderr().lock())
        .unwrap_or(ExitCode::FAILURE)
}

fn run(args: &Args, provider: &dyn PathProvider) -> Result<String, RenderError> {
    let config = args.render_config();
    let path = resolve_image_path(args.image_path.clone(), provider)?;
    render_file(&path, &config)
}

/// Print the outcome and pick the exit status
///
/// A cancelled picker is not a failure: the message goes to stdout and the
/// process exits 0. Every other error goes to stderr with status 1.
fn report(
    result: &Result<String, RenderError>,
    out: &mut impl Write,
    err: &mut impl Write,
) -> io::Result<ExitCode> {
    match result {
        Ok(text) => {
            writeln!(out, "{}", text)?;
            Ok(ExitCode::SUCCESS)
        }
        Err(RenderError::NoFileSelected) => {
            writeln!(out, "No image file selected.")?;
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            log::debug!("render failed: {:?}", e);
            writeln!(err, "error: {}", e)?;
            Ok(ExitCode::FAILURE)
        }
    }
}
