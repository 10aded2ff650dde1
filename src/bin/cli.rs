// src/bin/cli.rs
use color_eyre::eyre::eyre;
use social_fetch::{cli, config::options::AppOptions, log};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    log::init();

    let args = cli::parse_args(std::env::args().skip(1)).map_err(|e| eyre!("{e}"))?;
    cli::run(args, AppOptions::from_env()).map_err(|e| eyre!("{e}"))
}
