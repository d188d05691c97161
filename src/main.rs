use acme_route53::config::cli::Command;
use acme_route53::utils::error::ErrorSeverity;
use acme_route53::utils::{logger, validation::Validate};
use acme_route53::{AuthenticatorError, CliConfig, Route53Authenticator, Route53Client};
use clap::Parser;

fn report_and_exit(e: &AuthenticatorError) -> ! {
    tracing::error!("❌ {} (Severity: {:?})", e, e.severity());
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2, // 可重試
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);
    tracing::debug!("CLI config: {:?}", cli);

    let config = match cli.resolve_config() {
        Ok(config) => config,
        Err(e) => report_and_exit(&e),
    };

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        report_and_exit(&e);
    }

    let client = Route53Client::from_config(&config).await;
    let authenticator = Route53Authenticator::new(client, config);

    match &cli.command {
        Command::Perform(args) => {
            let challenges = args.challenges().unwrap_or_else(|e| report_and_exit(&e));
            if let Err(e) = authenticator.perform(&challenges).await {
                report_and_exit(&e);
            }
            tracing::info!("✅ {} challenge record(s) published", challenges.len());
        }
        Command::Cleanup(args) => {
            let challenges = args.challenges().unwrap_or_else(|e| report_and_exit(&e));
            if let Err(e) = authenticator.cleanup(&challenges).await {
                report_and_exit(&e);
            }
            tracing::info!("✅ Cleanup finished for {} challenge(s)", challenges.len());
        }
        Command::FindZone { domain } => match authenticator.find_zone_id(domain).await {
            Ok(zone_id) => println!("{}", zone_id),
            Err(e) => report_and_exit(&e),
        },
    }

    Ok(())
}
