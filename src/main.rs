use clap::Parser;
use std::time::Duration;
use tracing_subscriber::EnvFilter;
use vtu_sgpa::{cli, client, config, error, export, pdf_input, render, session};
use vtu_sgpa_common::{render as render_view, Section, UploadController};
use cli::{Cli, Commands};
use client::ApiClient;
use config::Config;
use error::{Result, SgpaError};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = Config::load()?;
    let client_config = config.client_config_with(cli.endpoint.as_deref())?;

    match cli.command {
        Commands::Parse { pdf, api_key, prompt_key, export: export_to, share, json } => {
            let api_key = if prompt_key {
                dialoguer::Password::new()
                    .with_prompt("API key (leave empty to skip)")
                    .allow_empty_password(true)
                    .interact()?
            } else {
                api_key.unwrap_or_else(|| config.get_api_key())
            };

            let file = pdf_input::load_pdf(&pdf)?;
            let client = ApiClient::new(
                client_config.clone(),
                Duration::from_secs(config.timeout_seconds),
            )?;

            let mut controller = UploadController::new(client_config.clone());
            controller.set_api_key(api_key);
            controller.select_file(file);

            session::submit(&mut controller, &client, !json).await;

            let view = render_view(&controller);
            if view.section == Section::Error {
                let message = view.error_message.unwrap_or_default();
                return Err(SgpaError::ParseFailed(message));
            }

            if let Some(results) = &view.results {
                if json {
                    if let Some(payload) = controller.current_results() {
                        println!("{}", serde_json::to_string_pretty(payload)?);
                    }
                } else {
                    print!("{}", render::results_to_text(results));
                }
            }

            if let Some(output) = export_to {
                if let Some(doc) = controller.export_results(&export::now_iso8601())? {
                    let path = export::write_export(&doc, output.as_deref())?;
                    eprintln!("✔ Results saved: {}", path.display());
                }
            }

            if share {
                if let Some(text) = controller.share_text() {
                    println!("\n{}", text);
                }
            }
        }

        Commands::Health => {
            let client = ApiClient::new(
                client_config.clone(),
                Duration::from_secs(config.timeout_seconds),
            )?;
            let health = client.health().await?;
            println!("{}: {}", health.status, health.message);
        }

        Commands::Config { show, set_endpoint, set_api_key, clear_api_key } => {
            let mut changed = false;

            if let Some(endpoint) = set_endpoint {
                config.set_endpoint(endpoint)?;
                changed = true;
                println!("✔ Endpoint set: {}", config.endpoint);
            }

            if let Some(key) = set_api_key {
                config.api_key = Some(key);
                changed = true;
                println!("✔ API key stored");
            }

            if clear_api_key {
                config.api_key = None;
                changed = true;
                println!("✔ API key removed");
            }

            if changed {
                config.save()?;
            }

            if show || !changed {
                println!("Settings ({}):", Config::config_path()?.display());
                println!("  Endpoint: {}", config.endpoint);
                println!("  Timeout: {}s", config.timeout_seconds);
                println!("  API key: {}", if config.api_key.is_some() { "set" } else { "not set" });
            }
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
