use acme_route53::config::lambda::{ChallengeAction, LambdaRequest, LambdaResponse};
use acme_route53::utils::logger;
use acme_route53::utils::validation::Validate;
use acme_route53::{AuthenticatorConfig, Route53Authenticator, Route53Client};
use lambda_runtime::{run, service_fn, Error, LambdaEvent};

async fn function_handler(event: LambdaEvent<LambdaRequest>) -> Result<LambdaResponse, Error> {
    let request = event.payload;
    tracing::info!(
        "Starting Route53 DNS-01 {:?} for {} challenge(s)",
        request.action,
        request.challenges.len()
    );

    // 建立Lambda配置
    let config = AuthenticatorConfig::from_env()?;
    config.validate()?;

    let client = Route53Client::from_config(&config).await;
    let authenticator = Route53Authenticator::new(client, config);

    match request.action {
        ChallengeAction::Perform => authenticator.perform(&request.challenges).await?,
        ChallengeAction::Cleanup => authenticator.cleanup(&request.challenges).await?,
    }

    let response = LambdaResponse {
        message: format!("{:?} completed successfully", request.action),
        action: request.action,
        challenges_processed: request.challenges.len(),
    };

    tracing::info!("Route53 DNS-01 Lambda function completed successfully");
    Ok(response)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();

    run(service_fn(function_handler)).await
}
