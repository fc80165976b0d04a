use clap::Parser;
use project_link::core::ConfigProvider;
use project_link::utils::{logger, validation::Validate};
use project_link::{
    CliConfig, Command, CredentialStore, LinkError, Linker, LocalStorage, ManagementApi,
};

async fn run(config: &CliConfig) -> project_link::Result<()> {
    let settings = config.settings()?;
    settings.validate()?;
    tracing::debug!("Resolved settings: {:?}", settings);

    let tokens = CredentialStore::from_env(settings.access_token_env());
    let api = ManagementApi::new(settings.api_url())?;
    let storage = LocalStorage::new(&config.workdir);
    let linker = Linker::new(tokens, api, storage, settings.project_ref_path());

    match &config.command {
        Command::Link { project_ref } => {
            linker.link(project_ref).await?;
            println!("Finished linking project {}.", project_ref);
        }
        Command::Unlink => {
            let project = linker.unlink().await?;
            println!("Finished unlinking project {}.", project);
        }
        Command::Status => {
            let project = linker.linked_project().await?;
            println!("{}", project);
        }
    }

    Ok(())
}

fn report(e: &LinkError) {
    tracing::error!(
        "❌ Command failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::debug!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
}

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    if let Err(e) = run(&config).await {
        report(&e);
        std::process::exit(e.exit_code());
    }
}
