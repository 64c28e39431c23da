mod error;
mod remediation;
mod s3;

use flexi_logger::Logger;
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use serde_json::Value;

use remediation::block_public_access;
use s3::{create_s3_client, S3BucketAccessClient};

async fn handle(event: LambdaEvent<Value>, client: &S3BucketAccessClient) -> Result<String, Error> {
    let confirmation = block_public_access(client, event.payload).await?;
    Ok(confirmation)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Lambda captures stdout into CloudWatch; file logging has no writable
    // target in the sandbox.
    Logger::try_with_env_or_str("info")?
        .log_to_stdout()
        .use_utc()
        .format(flexi_logger::detailed_format)
        .start()?;

    log::info!("Starting public access block function.");

    // One client per sandbox, reused across invocations.
    let client = S3BucketAccessClient::new(create_s3_client().await);
    run(service_fn(|event: LambdaEvent<Value>| handle(event, &client))).await
}
