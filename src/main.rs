use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;

use weather_advisory::{
    AdvisoryConfig,
    advisory::{generate_advisory, summarize},
    api::{AdvisoryForm, AdvisoryResponse},
    cli::{AdviseArgs, Cli, Command},
    logging, web,
};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AdvisoryConfig::load_from_path(cli.config.clone())?;
    logging::init(&config.logging, cli.verbose)?;

    match cli.command {
        Command::Serve(args) => {
            if let Some(port) = args.port {
                config.server.port = port;
                config.validate()?;
            }
            web::run(&config).await
        }
        Command::Advise(args) => advise(args, &config),
    }
}

fn advise(args: AdviseArgs, config: &AdvisoryConfig) -> Result<()> {
    let json = args.json;
    let request = AdvisoryForm::from(args)
        .into_request(&config.defaults.activity, Local::now().naive_local())
        .map_err(|e| anyhow::anyhow!(e.user_message()))?;

    let record = generate_advisory(&request);

    if json {
        let response = AdvisoryResponse::from(record);
        let rendered =
            serde_json::to_string_pretty(&response).context("Failed to serialize advisory")?;
        println!("{rendered}");
    } else {
        println!("{}", summarize(&record));
    }

    Ok(())
}
