use anyhow::Result;

mod cli;
mod config;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();
    cli::run()
}
