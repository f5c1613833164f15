use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use dotenv::dotenv;
use job_scraper::fake_jobs::{scraper::build_client, JOB_BOARD_URL};
use job_scraper::settings::DEFAULT_SETTINGS_PATH;
use job_scraper::Outcome;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Settings file with the keyword filters, result limit and output file
    #[clap(long, default_value = DEFAULT_SETTINGS_PATH)]
    config: PathBuf,

    /// Job board page to scrape
    #[clap(long, default_value = JOB_BOARD_URL)]
    url: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stdout)
        .init();
    let args = Cli::parse();

    let client = match build_client() {
        Ok(client) => client,
        Err(e) => {
            log::error!("Failed to create http client: {}", e);
            return ExitCode::FAILURE;
        }
    };
    match job_scraper::run(&client, &args.config, &args.url).await {
        Ok(Outcome::Saved { count, path }) => {
            log::debug!("saved {} jobs to {}", count, path.display());
            ExitCode::SUCCESS
        }
        Ok(outcome) => {
            log::debug!("run finished without output: {:?}", outcome);
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
