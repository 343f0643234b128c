// vim: tw=80
//! Print the unmocked walkthrough.
//!
//! The real functions print their own lines to stdout, interleaved with the
//! descriptions.  Set `RUST_LOG=debug` to see each call's span on stderr.
#![deny(warnings)]

use std::io;

use static_mocking::walkthrough;

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    walkthrough::run(&mut io::stdout())
}
