//! # Storely Main Entry Point
//!
//! Thin shell around the library: initialize logging, parse the command
//! line, execute the single request, print the result. The process exits
//! 0 on every path; advisories and transport failures are ordinary output.

use storely::cmd_args::CommandLineArgs;
use storely::transport::HttpTransport;
use tracing_subscriber::EnvFilter;

fn main() {
    // Diagnostics go to stderr so they never mix with the rendered output
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = CommandLineArgs::parse();
    let transport = HttpTransport::new();

    for line in storely::run(&args, &transport) {
        println!("{line}");
    }
}
