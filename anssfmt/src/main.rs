mod convert;

use failure::Error;
use flexi_logger::{default_format, Logger};
use log::{debug, error};
use std::path::PathBuf;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
/// Reformat a column-delimited seismic event catalog into a fixed-width
/// ANSS-style text report
struct Opt {
    /// Input catalog CSV file with a header row naming its columns
    #[structopt(name = "INPUT", parse(from_os_str))]
    input: PathBuf,
    /// Output report file location
    #[structopt(name = "OUTPUT", parse(from_os_str))]
    output: PathBuf,
    /// Print debug info based on the number of "v"s passed
    #[structopt(short = "v", parse(from_occurrences))]
    verbose: usize,
}

fn main() {
    let opts = Opt::from_args();
    let log_level = match opts.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    Logger::with_str(log_level)
        .format(default_format)
        .start()
        .unwrap_or_else(|e| panic!("Logger initialization failed with {}", e));

    if let Err(e) = run(opts) {
        error!("{}", &e);
        for cause in e.iter_causes() {
            error!("caused by: {}", cause);
        }
        match ::std::env::var("RUST_BACKTRACE").as_ref().map(|s| s.as_str()) {
            Ok("1") => error!("Backtrace:\n{}", e.backtrace()),
            _ => (),
        }
        ::std::process::exit(1);
    }
}

fn run(opts: Opt) -> Result<(), Error> {
    debug!("{:#?}", &opts);
    convert::catalog_to_report(&opts.input, &opts.output)
}
