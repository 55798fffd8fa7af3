use aws_sdk_s3::error::SdkError;
use aws_sdk_s3::operation::get_object::GetObjectError;
use aws_sdk_s3::primitives::ByteStreamError;
use thiserror::Error;

#[derive(Error, Debug)]
pub(crate) enum HandlerError {
    #[error("No records found in S3 event")]
    NoRecords,

    #[error("Failed to get object: {0}")]
    GetObject(#[from] SdkError<GetObjectError>),

    #[error("Failed to read object body: {0}")]
    ReadBody(#[from] ByteStreamError),
}
