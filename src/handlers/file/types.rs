use crate::error::OperationError;
use crate::response::{ApiResponse, Status};
use axum::{
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    CheckExists,
    Validate,
    RetrieveInfo,
    Copy,
    Rename,
    Delete,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::CheckExists => "check_exists",
            Operation::Validate => "validate",
            Operation::RetrieveInfo => "retrieve_info",
            Operation::Copy => "copy",
            Operation::Rename => "rename",
            Operation::Delete => "delete",
        }
    }
}

impl FromStr for Operation {
    type Err = OperationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "check_exists" => Ok(Operation::CheckExists),
            "validate" => Ok(Operation::Validate),
            "retrieve_info" => Ok(Operation::RetrieveInfo),
            "copy" => Ok(Operation::Copy),
            "rename" => Ok(Operation::Rename),
            "delete" => Ok(Operation::Delete),
            other => Err(OperationError::Unsupported(other.to_string())),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct FileOperationRequest {
    pub operation: String,
    pub file_path: String,
    #[serde(default)]
    pub destination: Option<String>,
    #[serde(default)]
    pub new_name: Option<String>,
}

/// Local-time timestamps, serialized as RFC 3339 with the local UTC offset
/// (`2024-05-01T12:30:00.123456789+02:00`), not as a naive local datetime.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileTimes {
    pub last_modified: DateTime<Local>,
    pub created: DateTime<Local>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileValidation {
    pub size: u64,
    #[serde(rename = "type")]
    pub file_type: String,
    pub extension: String,
    #[serde(flatten)]
    pub times: FileTimes,
}

/// One response per request. Serialized untagged; the `status` field is
/// added by [`ApiResponse`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FileOperationResponse {
    Exists { exists: bool },
    Validation(FileValidation),
    Info(FileTimes),
    Copy { new_file_path: String },
    Rename { new_file_path: String },
    Delete { file_path: String },
    Error { error: String },
}

impl FileOperationResponse {
    pub fn status(&self) -> Status {
        match self {
            FileOperationResponse::Error { .. } => Status::Failure,
            _ => Status::Success,
        }
    }
}

impl From<OperationError> for FileOperationResponse {
    fn from(err: OperationError) -> Self {
        FileOperationResponse::Error {
            error: err.to_string(),
        }
    }
}

impl IntoResponse for FileOperationResponse {
    fn into_response(self) -> Response {
        Json(ApiResponse::new(self.status(), self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_operation() {
        for op in [
            Operation::CheckExists,
            Operation::Validate,
            Operation::RetrieveInfo,
            Operation::Copy,
            Operation::Rename,
            Operation::Delete,
        ] {
            assert_eq!(op.as_str().parse::<Operation>().unwrap(), op);
        }

        let err = "Copy".parse::<Operation>().unwrap_err();
        assert_eq!(err.to_string(), "Unsupported operation: Copy");
    }

    #[test]
    fn test_optional_fields_default_to_none() {
        let req: FileOperationRequest =
            serde_json::from_value(json!({ "operation": "delete", "file_path": "a.txt" }))
                .unwrap();
        assert!(req.destination.is_none());
        assert!(req.new_name.is_none());
    }

    #[test]
    fn test_response_shapes() {
        let exists = FileOperationResponse::Exists { exists: true };
        let body = serde_json::to_value(ApiResponse::new(exists.status(), exists)).unwrap();
        assert_eq!(body, json!({ "status": "success", "exists": true }));

        let error = FileOperationResponse::from(OperationError::FILE_MISSING);
        let body = serde_json::to_value(ApiResponse::new(error.status(), error)).unwrap();
        assert_eq!(
            body,
            json!({ "status": "failure", "error": "File does not exist." })
        );

        let deleted = FileOperationResponse::Delete {
            file_path: "a.txt".to_string(),
        };
        let body = serde_json::to_value(ApiResponse::new(deleted.status(), deleted)).unwrap();
        assert_eq!(body, json!({ "status": "success", "file_path": "a.txt" }));
    }

    #[test]
    fn test_validation_shape() {
        let now = Local::now();
        let validation = FileOperationResponse::Validation(FileValidation {
            size: 10,
            file_type: "txt".to_string(),
            extension: ".txt".to_string(),
            times: FileTimes {
                last_modified: now,
                created: now,
            },
        });
        let body = serde_json::to_value(ApiResponse::new(validation.status(), validation)).unwrap();

        assert_eq!(body["status"], "success");
        assert_eq!(body["size"], 10);
        assert_eq!(body["type"], "txt");
        assert_eq!(body["extension"], ".txt");
        let last_modified = body["last_modified"].as_str().unwrap();
        let parsed = chrono::DateTime::parse_from_rfc3339(last_modified).unwrap();
        assert_eq!(parsed.timestamp(), now.timestamp());
        assert_eq!(parsed.offset().local_minus_utc(), now.offset().local_minus_utc());
        assert!(body["created"].is_string());
    }
}
