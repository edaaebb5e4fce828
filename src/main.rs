use annotate_headers::{cli, commands};
use clap::Parser;
use env_logger::Env;

fn main() {
    let args = cli::Args::parse();

    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    if let Err(e) = commands::annotate::run(args) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
