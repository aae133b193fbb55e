use anyhow::{Context, Result};
use clap::Parser;
use std::sync::Arc;
use study_assistant::api::{HttpStudyApi, StudyApi};
use study_assistant::cli::{run_command, Cli, Commands};
use study_assistant::config::Config;
use study_assistant::logger::Logger;
use study_assistant::ui;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(Commands::GenerateConfig { path }) = &cli.command {
        let path = match path {
            Some(path) => path.clone(),
            None => Config::get_default_config_path()?,
        };
        Config::generate_default_config(&path)?;
        return Ok(());
    }

    let config = cli.load_config().context("Failed to load configuration")?;
    let logger = Logger::from_config(config.logging.enabled).context("Failed to set up logging")?;

    let mut api = HttpStudyApi::from_config(&config.api).context("Failed to build HTTP client")?;
    if let Some(url) = &cli.api_url {
        api = api.with_base_url(url);
    }
    logger.log(format!("Backend: {}", api.base_url()));

    match cli.command {
        Some(command) => {
            let stdout = std::io::stdout();
            let stdin = std::io::stdin();
            if let Err(e) = run_command(command, &api, &config.upload, &mut stdout.lock(), &mut stdin.lock()).await {
                eprintln!("❌ Error: {:#}", e);
                std::process::exit(1);
            }
        }
        None => {
            let api: Arc<dyn StudyApi> = Arc::new(api);
            ui::run_app(api, &config, logger).await?;
        }
    }

    Ok(())
}
