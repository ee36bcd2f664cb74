use std::error::Error;
use std::process::ExitCode;

use clap::Parser;
use starling_icons::{IconRenderer, RenderProfile};

/// Generates the Starling add-in icons (icon-16/32/64/80.png) in the
/// current directory.
///
/// Set STARLING_ICONS_PROFILE to a JSON profile to change the sizes, the
/// output directory, or to force placeholder output.
///
/// Exits with status 1 if the profile cannot be loaded or an icon cannot be
/// written; icons written before the failure are kept.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let Cli {} = Cli::parse();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let mut message = format!("error: {err}");
            let mut source = err.source();
            while let Some(cause) = source {
                message.push_str(&format!(": {cause}"));
                source = cause.source();
            }
            log::error!("icon generation aborted");
            eprintln!("{message}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), starling_icons::IconError> {
    let profile = RenderProfile::from_env()?;
    let sizes = profile.sizes.clone();
    let renderer = IconRenderer::detect(profile);
    renderer.report(&sizes, &mut std::io::stdout().lock())?;
    Ok(())
}
