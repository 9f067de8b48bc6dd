//! The checkversion executable.
use std::process;
use clap::Parser;
use dotenv::dotenv;
use log::*;

use checkversion::{run, Opts};

fn main() {
    env_logger::init();
    // this initializes the .env file if present, making its attributes
    // available as environment variables.
    dotenv().ok();
    let options = Opts::parse();

    match run(&options) {
        Ok(outcome) => {
            debug!("terminal outcome: {:?}", outcome);
            process::exit(0);
        },
        Err(error) => {
            eprintln!("{:#}", error);
            error!("error in version check: {:#}", error);
            process::exit(1);
        },
    }
}
