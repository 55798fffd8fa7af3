use serde::Serialize;

const PROCESSED_BODY: &str = "Image processed successfully";
const FAILED_BODY: &str = "Error processing image";

/// Result handed back to the Lambda runtime, serialized as
/// `{"statusCode": ..., "body": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct HandlerResponse {
    pub(crate) status_code: u16,
    pub(crate) body: String,
}

impl HandlerResponse {
    pub(crate) fn processed() -> Self {
        Self {
            status_code: 200,
            body: PROCESSED_BODY.to_string(),
        }
    }

    pub(crate) fn failed() -> Self {
        Self {
            status_code: 500,
            body: FAILED_BODY.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_processed_response_shape() {
        let value = serde_json::to_value(HandlerResponse::processed()).unwrap();
        assert_eq!(
            value,
            json!({ "statusCode": 200, "body": "Image processed successfully" })
        );
    }

    #[test]
    fn test_failed_response_shape() {
        let value = serde_json::to_value(HandlerResponse::failed()).unwrap();
        assert_eq!(
            value,
            json!({ "statusCode": 500, "body": "Error processing image" })
        );
    }
}
