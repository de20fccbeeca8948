use clap::Parser;
use kami_catalog::config::{CatalogConfig, Cli, Command};
use kami_catalog::utils::validation::Validate;
use kami_catalog::{init_cli_logger, CatalogView, HttpGateway, SyncController};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_cli_logger(cli.verbose);
    tracing::info!("Starting kami-catalog CLI");
    if cli.verbose {
        tracing::debug!("CLI args: {:?}", cli);
    }

    let config = match CatalogConfig::from_cli(&cli) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(2);
        }
    };
    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(2);
    }

    let gateway = HttpGateway::from_config(&config);
    let controller = SyncController::new(gateway, config.collection.clone());

    match cli.command {
        // Entering the list screen triggers a refresh.
        Command::List => match controller.refresh().await {
            Ok(()) => {
                print_catalog(&controller.current_view().await);
            }
            Err(e) => {
                // Stale-but-available: show the last good list alongside the error.
                let view = controller.current_view().await;
                if !view.records.is_empty() {
                    print_catalog(&view);
                }
                eprintln!("❌ {}", e);
                std::process::exit(1);
            }
        },
        Command::Add {
            creator,
            price,
            name,
        } => match controller.submit_new_record(&creator, &price, &name).await {
            Ok(id) => {
                println!("✅ Service '{}' added with id {}", name, id);
            }
            Err(e) => {
                eprintln!("❌ {}", e);
                let exit_code = if e.is_validation() { 2 } else { 1 };
                std::process::exit(exit_code);
            }
        },
    }

    Ok(())
}

fn print_catalog(view: &CatalogView) {
    if view.records.is_empty() {
        println!("No services yet.");
        return;
    }
    println!("Service List ({} services)", view.records.len());
    for record in &view.records {
        println!(
            "  {}  {} ₫  by {}  [{}]",
            record.service_name, record.price, record.creator_name, record.id
        );
    }
}
