use super::types::{FileOperationResponse, FileTimes, FileValidation};
use crate::error::OperationError;
use crate::utils::path::{ensure_directory, resolve_path};
use crate::utils::time;
use std::fs::Metadata;
use std::path::{Path, MAIN_SEPARATOR};
use tokio::fs;

// Errors such as permission denied read as "does not exist".
async fn exists(path: &Path) -> bool {
    fs::try_exists(path).await.unwrap_or(false)
}

/// Extension including the leading dot, or empty when there is none.
/// Dotfiles like `.bashrc` have no extension.
fn suffix(path: &Path) -> String {
    match path.extension() {
        Some(ext) if !ext.is_empty() => format!(".{}", ext.to_string_lossy()),
        _ => String::new(),
    }
}

fn file_times(metadata: &Metadata) -> Result<FileTimes, OperationError> {
    Ok(FileTimes {
        last_modified: time::modified(metadata)?,
        created: time::created(metadata)?,
    })
}

#[cfg(unix)]
async fn same_file(a: &Path, b: &Path) -> bool {
    use std::os::unix::fs::MetadataExt;

    match (fs::metadata(a).await, fs::metadata(b).await) {
        (Ok(ma), Ok(mb)) => ma.dev() == mb.dev() && ma.ino() == mb.ino(),
        _ => false,
    }
}

#[cfg(not(unix))]
async fn same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a).await, fs::canonicalize(b).await) {
        (Ok(ca), Ok(cb)) => ca == cb,
        _ => false,
    }
}

fn check_name(name: &str) -> Result<(), OperationError> {
    if name.is_empty()
        || name == "."
        || name == ".."
        || name.contains('/')
        || name.contains(MAIN_SEPARATOR)
    {
        return Err(OperationError::InvalidName(name.to_string()));
    }
    Ok(())
}

pub async fn check_exists(path: &Path) -> FileOperationResponse {
    FileOperationResponse::Exists {
        exists: exists(path).await,
    }
}

pub async fn validate(path: &Path) -> Result<FileOperationResponse, OperationError> {
    if !exists(path).await {
        return Err(OperationError::FILE_MISSING);
    }

    let metadata = fs::metadata(path).await?;
    let extension = suffix(path);
    let file_type = extension.trim_start_matches('.').to_string();

    Ok(FileOperationResponse::Validation(FileValidation {
        size: metadata.len(),
        file_type,
        extension,
        times: file_times(&metadata)?,
    }))
}

pub async fn retrieve_info(path: &Path) -> Result<FileOperationResponse, OperationError> {
    if !exists(path).await {
        return Err(OperationError::FILE_MISSING);
    }

    let metadata = fs::metadata(path).await?;
    Ok(FileOperationResponse::Info(file_times(&metadata)?))
}

/// Copy `source` to `destination`, creating missing parent directories.
/// A destination that is an existing directory receives the file under its
/// own name. Copying a file onto itself is refused, since the copy would
/// truncate it.
pub async fn copy(
    workspace: &Path,
    source: &Path,
    destination: Option<&str>,
) -> Result<FileOperationResponse, OperationError> {
    if !exists(source).await {
        return Err(OperationError::SOURCE_MISSING);
    }

    let destination = destination
        .filter(|d| !d.is_empty())
        .ok_or(OperationError::MissingField {
            field: "destination",
            operation: "copy",
        })?;
    let mut target = resolve_path(workspace, destination);

    if let Some(parent) = target.parent() {
        ensure_directory(parent).await?;
    }

    if fs::metadata(&target).await.is_ok_and(|m| m.is_dir()) {
        if let Some(name) = source.file_name() {
            target.push(name);
        }
    }

    if same_file(source, &target).await {
        return Err(OperationError::SameFile {
            src: source.display().to_string(),
            dst: target.display().to_string(),
        });
    }

    fs::copy(source, &target).await?;

    Ok(FileOperationResponse::Copy {
        new_file_path: destination.to_string(),
    })
}

/// Rename `path` within its own directory. `file_path` is the path as the
/// client sent it and is used to build the returned path.
pub async fn rename(
    path: &Path,
    file_path: &str,
    new_name: Option<&str>,
) -> Result<FileOperationResponse, OperationError> {
    if !exists(path).await {
        return Err(OperationError::SOURCE_MISSING);
    }

    let new_name = new_name.ok_or(OperationError::MissingField {
        field: "new_name",
        operation: "rename",
    })?;
    check_name(new_name)?;

    fs::rename(path, path.with_file_name(new_name)).await?;

    Ok(FileOperationResponse::Rename {
        new_file_path: Path::new(file_path)
            .with_file_name(new_name)
            .to_string_lossy()
            .into_owned(),
    })
}

pub async fn delete(path: &Path, file_path: &str) -> Result<FileOperationResponse, OperationError> {
    if !exists(path).await {
        return Err(OperationError::FILE_MISSING);
    }

    fs::remove_file(path).await?;

    Ok(FileOperationResponse::Delete {
        file_path: file_path.to_string(),
    })
}
