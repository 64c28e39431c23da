mod client;

pub use client::{create_s3_client, BucketAccessClient, S3BucketAccessClient};
