mod archive;
mod config;
mod error;
mod fetch;
mod installer;
mod launch;
mod logging;
mod paths;
mod pip;
mod shortcuts;
mod stockfish;

use anyhow::Result;

fn main() -> Result<()> {
    logging::init();
    let base = paths::base_dir()?;
    installer::run(&base)?;
    Ok(())
}
