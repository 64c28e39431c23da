use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_s3::types::PublicAccessBlockConfiguration;
use aws_sdk_s3::Client;

use crate::remediation::AccessBlockPolicy;

/// Administrative operations on a bucket's access configuration.
#[async_trait]
pub trait BucketAccessClient {
    async fn put_public_access_block(
        &self,
        bucket: &str,
        policy: &AccessBlockPolicy,
    ) -> Result<(), aws_sdk_s3::Error>;
}

pub struct S3BucketAccessClient {
    client: Client,
}

impl S3BucketAccessClient {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl BucketAccessClient for S3BucketAccessClient {
    async fn put_public_access_block(
        &self,
        bucket: &str,
        policy: &AccessBlockPolicy,
    ) -> Result<(), aws_sdk_s3::Error> {
        self.client
            .put_public_access_block()
            .bucket(bucket)
            .public_access_block_configuration(to_s3_configuration(policy))
            .send()
            .await?;
        Ok(())
    }
}

/// Region and credentials come from the execution environment.
pub async fn create_s3_client() -> Client {
    let config = aws_config::load_defaults(BehaviorVersion::v2025_08_07()).await;
    Client::new(&config)
}

fn to_s3_configuration(policy: &AccessBlockPolicy) -> PublicAccessBlockConfiguration {
    PublicAccessBlockConfiguration::builder()
        .block_public_acls(policy.get_block_public_acls())
        .ignore_public_acls(policy.get_ignore_public_acls())
        .block_public_policy(policy.get_block_public_policy())
        .restrict_public_buckets(policy.get_restrict_public_buckets())
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_block_maps_to_all_flags_set() {
        let config = to_s3_configuration(&AccessBlockPolicy::block_all());
        assert_eq!(config.block_public_acls(), Some(true));
        assert_eq!(config.ignore_public_acls(), Some(true));
        assert_eq!(config.block_public_policy(), Some(true));
        assert_eq!(config.restrict_public_buckets(), Some(true));
    }
}
