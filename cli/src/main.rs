//! `httpclient [GET|POST] <url>`: issue one request and print the raw
//! response, or the error message, on stdout.

mod invocation;
mod logger;

use std::process;

use anyhow::Result;
use httpclient_core::{usage, ClientConfig, HttpClient};

use crate::invocation::Invocation;

fn main() -> Result<()> {
    logger::init_from_env()?;

    let operands: Vec<String> = std::env::args().skip(1).collect();
    let Some(invocation) = Invocation::from_args(&operands) else {
        println!("{}\n", usage());
        process::exit(1);
    };
    log::debug!("{invocation:?}");

    let client = HttpClient::with_config(ClientConfig::from_env()?);
    match client.command(&invocation.url, &invocation.command, None) {
        Ok(response) => println!("{response}"),
        Err(err) if err.is_reported() => println!("{err}"),
        Err(err) => {
            log::error!("{} {} failed: {err}", invocation.command, invocation.url);
            println!("{err}");
            process::exit(1);
        }
    }
    Ok(())
}
