use serde_json::Value;

use super::{AccessBlockPolicy, RemediationEvent};
use crate::error::RemediationError;
use crate::s3::BucketAccessClient;

/// Applies the full public access block to the bucket named in the payload
/// and reports the bucket that was processed.
pub async fn block_public_access(
    client: &impl BucketAccessClient,
    payload: Value,
) -> Result<String, RemediationError> {
    let event = RemediationEvent::parse(payload)?;
    log::info!(
        "Received public access block request for bucket: {}.",
        event.get_bucket_name()
    );

    client
        .put_public_access_block(event.get_bucket_name(), &AccessBlockPolicy::block_all())
        .await?;

    log::info!(
        "Public access block applied to bucket: {}.",
        event.get_bucket_name()
    );
    Ok(format!(
        "Public access blocked for bucket: {}",
        event.get_bucket_name()
    ))
}
