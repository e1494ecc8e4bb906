mod args;
mod error;
mod output;

use args::Args;
use env_logger::Env;
use error::Error;
use log::info;
use std::process;

fn run(args: Args) -> Result<(), Error> {
    let config = args.config()?;
    info!(
        "Rule {}, initial configuration {}, {} generations",
        config.rule, config.initial, config.generations
    );
    let lattice = config.lattice()?;
    match &args.output {
        Some(path) => {
            output::write_png(&lattice, path)?;
            info!(
                "Wrote a {}x{} image to {}",
                lattice.width(),
                lattice.generations(),
                path.display()
            );
        }
        None => print!("{}", lattice),
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    let args = Args::parse().unwrap_or_else(|e| e.exit());
    if let Err(e) = run(args) {
        eprintln!("{}", e);
        process::exit(1);
    }
}
