//! Marshal a blank user and a filled-in user to stdout.
//!
//! Run with: RUST_LOG=xml_marshal=trace cargo run --example users

use std::error::Error;
use std::io::{self, Write};
use tracing_subscriber::EnvFilter;
use xml_marshal::{to_writer, User};

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    // Zero valued user: no LastName, empty Bio.
    to_writer(&mut out, &User::default())?;
    writeln!(out)?;

    let user = User::new("Mary", "Jane").with_bio("An Awesome Coder!");
    to_writer(&mut out, &user)?;
    writeln!(out)?;

    Ok(())
}
