//! Reads a product page from stdin and prints its record as JSON.
//!
//! Usage: `extract_stdin <page-url> [--histogram] < page.html`
//!
//! Log verbosity follows `RUST_LOG` (default `warn`); logs go to stderr.

use pdp_extract::{extract_product_bytes, Error, Options};
use std::env;
use std::io::{self, Read};
use tracing_subscriber::EnvFilter;

fn run() -> Result<(), Error> {
    let mut url = None;
    let mut options = Options::default();
    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--histogram" => options.include_review_histogram = true,
            _ => url = Some(arg),
        }
    }
    let url = url.ok_or(Error::MissingUrl)?;

    let mut page = Vec::new();
    io::stdin().read_to_end(&mut page)?;

    let record = extract_product_bytes(&url, &page, &options);
    if !record.success {
        tracing::warn!(url = %record.url, "page not recognized as a product page");
    }

    println!("{}", record.to_json()?);
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    if let Err(err) = run() {
        tracing::error!("{err}");
        eprintln!("Usage: extract_stdin <page-url> [--histogram] < page.html");
        std::process::exit(1);
    }
}
