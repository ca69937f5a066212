//! # Storely - Command-Line Client for the Fake Store API
//!
//! Translates positional shell arguments into a single HTTP call against
//! a remote product catalog, then renders the response for a human reader.
//!
//! ## Architecture
//!
//! The pipeline is linear, with the network behind a trait seam:
//!
//! ```text
//! arguments ──► Command Interpreter ──► RequestDescriptor
//!                      │                      │
//!                 usage advisory         Transport (reqwest)
//!                      │                      │
//!   stdout ◄────────── └──── Renderer ◄── body text
//! ```
//!
//! Every malformed invocation is reported as a single advisory line and
//! every transport failure as a single error line; the process always
//! exits 0.

pub mod cmd_args;
pub mod config;
pub mod render;
pub mod request;
pub mod transport;

use cmd_args::CommandLineArgs;
use transport::Transport;

/// Run one invocation against the given transport and return the lines
/// to print, in order. Nothing is sent when the interpreter short-circuits.
pub fn run(args: &CommandLineArgs, transport: &impl Transport) -> Vec<String> {
    let descriptor = match request::interpret(args) {
        Ok(descriptor) => descriptor,
        Err(advice) => return vec![advice.to_string()],
    };

    let mut lines = Vec::new();
    if args.verbose() {
        lines.push(format!(
            "Request: {} {}",
            descriptor.verb.as_str(),
            descriptor.url
        ));
    }

    match transport.send(&descriptor) {
        Ok(response) => {
            if args.verbose() {
                lines.push(format!("Raw API response: {}", response.body));
            }
            lines.extend(render::render_body(&response.body));
        }
        Err(err) => {
            tracing::error!("Request failed: {err:#}");
            lines.push(format!("An error occurred while making the request: {err:#}"));
        }
    }
    lines
}
