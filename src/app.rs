use std::error::Error;
use std::io::Write;

use clap::{Parser, error::ErrorKind};

use crate::config::SelectionConfig;
use crate::constants::app::BIN_NAME;
use crate::selection::run_selection;

#[derive(Debug, Parser)]
#[command(
    name = BIN_NAME,
    version,
    disable_help_subcommand = true,
    about = "Move a random sample of images into a selection directory",
    long_about = "Randomly pick 10 `.jpg` files from `airbus-ship-detection/train_v2` and move them into `selected`, creating it if needed.",
    after_help = "Files are moved, not copied. Set RUST_LOG=debug to log each move on stderr."
)]
struct SelectImagesCli {}

/// Parse `args_iter` (without the program name) and run the default selection.
///
/// Prints the one-line report to stdout.
pub fn run_select_images<I>(args_iter: I) -> Result<(), Box<dyn Error>>
where
    I: Iterator<Item = String>,
{
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();

    run_with_config(
        args_iter,
        SelectionConfig::default(),
        &mut std::io::stdout().lock(),
    )
}

/// Same as [`run_select_images`] with an explicit config and output sink.
pub fn run_with_config<I, W>(
    args_iter: I,
    config: SelectionConfig,
    out: &mut W,
) -> Result<(), Box<dyn Error>>
where
    I: Iterator<Item = String>,
    W: Write,
{
    let Some(_cli) =
        parse_cli::<SelectImagesCli, _>(std::iter::once(BIN_NAME.to_string()).chain(args_iter))?
    else {
        return Ok(());
    };

    let report = run_selection(&config)?;
    writeln!(out, "{report}")?;
    Ok(())
}

fn parse_cli<T, I>(args: I) -> Result<Option<T>, Box<dyn Error>>
where
    T: Parser,
    I: IntoIterator,
    I::Item: Into<std::ffi::OsString> + Clone,
{
    match T::try_parse_from(args) {
        Ok(cli) => Ok(Some(cli)),
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                err.print()?;
                Ok(None)
            }
            _ => Err(err.into()),
        },
    }
}
