use aws_lambda_events::event::s3::{S3Event, S3EventRecord};
use aws_sdk_s3::Client as S3Client;
use lambda_runtime::{tracing, Error, LambdaEvent};

use crate::error::HandlerError;
use crate::response::HandlerResponse;

fn first_record(event: &S3Event) -> Result<&S3EventRecord, HandlerError> {
    event.records.first().ok_or(HandlerError::NoRecords)
}

async fn fetch_object_content(
    s3_client: &S3Client,
    bucket: Option<String>,
    key: Option<String>,
) -> Result<String, HandlerError> {
    let output = s3_client
        .get_object()
        .set_bucket(bucket)
        .set_key(key)
        .send()
        .await?;
    let bytes = output.body.collect().await?.into_bytes();
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

pub(crate) async fn function_handler(
    event: LambdaEvent<S3Event>,
    s3_client: &S3Client,
) -> Result<HandlerResponse, Error> {
    let payload = event.payload;
    let serialized = serde_json::to_string_pretty(&payload)?;
    tracing::info!(event = %serialized, "Received event");

    let record = first_record(&payload)?;
    let bucket = record.s3.bucket.name.clone();
    let key = record.s3.object.key.clone();

    match fetch_object_content(s3_client, bucket.clone(), key.clone()).await {
        Ok(content) => {
            tracing::info!(?bucket, ?key, %content, "File content retrieved");
            Ok(HandlerResponse::processed())
        }
        Err(err) => {
            tracing::error!(?bucket, ?key, error = %err, "Error processing file");
            Ok(HandlerResponse::failed())
        }
    }
}
