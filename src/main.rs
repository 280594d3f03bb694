use clap::Parser;
use push_mail::domain::ports::{ConfigProvider, UniversalSigner};
use push_mail::utils::{logger, validation::Validate};
use push_mail::{
    CliConfig, EmailEngine, EmailOutcome, EmailRequest, PushChainConnector, PushMailError,
    TomlConfig, Wallet, WalletSigner,
};
use std::sync::Arc;
use std::time::Duration;

async fn run<C: ConfigProvider + Validate>(config: &C) -> Result<EmailOutcome, PushMailError> {
    config.validate()?;

    let wallet = match config.private_key() {
        Some(key) => Wallet::from_private_key_hex(key)?,
        None => {
            let wallet = Wallet::generate()?;
            println!("Generated Private Key: {}", wallet.private_key_hex());
            wallet
        }
    };
    println!("Wallet Address: {}", wallet.address());

    let signer = WalletSigner::new(
        wallet,
        config.sender_chain().parse()?,
        config.sender_chain_id(),
    )?;
    println!("Signer created: {}", signer.account());

    let connector = PushChainConnector::new(
        config.rpc_url(),
        Duration::from_secs(config.request_timeout_secs()),
    );
    let request = EmailRequest::from_config(config)?;
    let engine = EmailEngine::new(
        connector,
        request,
        Duration::from_secs(config.settle_delay_secs()),
    );

    engine.run(Arc::new(signer)).await
}

fn report_failure(e: &PushMailError) -> i32 {
    tracing::error!(
        "❌ push-mail failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

    e.exit_code()
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    let toml_config = cli
        .config
        .as_deref()
        .map(TomlConfig::from_file)
        .transpose();

    // 初始化日誌：命令列旗標優先，其次是 TOML 設定
    let loaded = toml_config.as_ref().ok().and_then(Option::as_ref);
    let verbose = cli.verbose || loaded.is_some_and(|c| c.verbose());
    let log_json = cli.log_json || loaded.is_some_and(|c| c.log_json());
    if log_json {
        logger::init_json_logger(verbose);
    } else {
        logger::init_cli_logger(verbose);
    }

    tracing::info!("Starting push-mail");
    if verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let result = match &toml_config {
        Ok(Some(config)) => {
            tracing::info!("Using configuration file {:?}", cli.config);
            run(config).await
        }
        Ok(None) => run(&cli).await,
        Err(e) => {
            tracing::error!("Failed to load configuration file {:?}", cli.config);
            let exit_code = report_failure(e);
            if exit_code > 0 {
                std::process::exit(exit_code);
            }
            return Ok(());
        }
    };

    match result {
        Ok(outcome) => {
            tracing::info!(
                "✅ Email {} delivered into {} block(s)",
                outcome.tx_hash,
                outcome.results.blocks.len()
            );
        }
        Err(e) => {
            let exit_code = report_failure(&e);
            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
