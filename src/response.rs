use serde::{Serialize, Serializer};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Status {
    Success,
    Failure,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Success => "success",
            Status::Failure => "failure",
        }
    }
}

impl Serialize for Status {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub status: Status,
    #[serde(flatten)]
    pub data: T,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            status: Status::Success,
            data,
        }
    }

    pub fn new(status: Status, data: T) -> Self {
        Self { status, data }
    }
}

impl ApiResponse<ErrorBody> {
    pub fn failure(error: String) -> Self {
        Self {
            status: Status::Failure,
            data: ErrorBody { error },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_failure_body_shape() {
        let body = serde_json::to_value(ApiResponse::failure("boom".to_string())).unwrap();
        assert_eq!(body, json!({ "status": "failure", "error": "boom" }));
    }
}
