use super::ops;
use super::types::{FileOperationRequest, FileOperationResponse, Operation};
use crate::error::OperationError;
use crate::utils::path::resolve_path;
use std::path::Path;
use tracing::{debug, warn};

/// Run the operation named by `req`. Every failure, including an unknown
/// operation name, comes back as [`FileOperationResponse::Error`].
pub async fn dispatch(workspace: &Path, req: &FileOperationRequest) -> FileOperationResponse {
    match execute(workspace, req).await {
        Ok(resp) => resp,
        Err(err) => {
            warn!(
                operation = %req.operation,
                file_path = %req.file_path,
                error = %err,
                "file operation failed"
            );
            err.into()
        }
    }
}

async fn execute(
    workspace: &Path,
    req: &FileOperationRequest,
) -> Result<FileOperationResponse, OperationError> {
    let operation: Operation = req.operation.parse()?;
    if req.file_path.is_empty() {
        return Err(OperationError::EmptyPath);
    }

    let path = resolve_path(workspace, &req.file_path);
    debug!(%operation, path = %path.display(), "file operation");

    match operation {
        Operation::CheckExists => Ok(ops::check_exists(&path).await),
        Operation::Validate => ops::validate(&path).await,
        Operation::RetrieveInfo => ops::retrieve_info(&path).await,
        Operation::Copy => ops::copy(workspace, &path, req.destination.as_deref()).await,
        Operation::Rename => ops::rename(&path, &req.file_path, req.new_name.as_deref()).await,
        Operation::Delete => ops::delete(&path, &req.file_path).await,
    }
}
