use std::io::Write;

use env_logger::Target;
use log::LevelFilter;
use log::SetLoggerError;

use crate::print_polysat_assert_warning_message;

/// Install a logger which writes the plain log messages to stdout. With `verbose` every message
/// is shown, otherwise only messages at the info level and above.
///
/// Fails when a logger has already been installed.
pub fn configure_logging(verbose: bool) -> Result<(), SetLoggerError> {
    env_logger::builder()
        .filter_level(if verbose {
            LevelFilter::Trace
        } else {
            LevelFilter::Info
        })
        .format(|buf, record| writeln!(buf, "{}", record.args()))
        .target(Target::Stdout)
        .try_init()?;

    print_polysat_assert_warning_message!();
    Ok(())
}
