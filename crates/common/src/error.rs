use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TmpEraserError {
    #[error("Environment variable '{0}' not found")]
    EnvVarMissing(String),

    #[error("Directory does not exist: {}", .0.display())]
    NotExisting(PathBuf),

    #[error("Not a directory: {}", .0.display())]
    NotDirectory(PathBuf),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// 把 IO 错误按权限不足单独归类，其余保留原始错误
pub fn classify_io(err: std::io::Error, context: &std::path::Path) -> TmpEraserError {
    if err.kind() == std::io::ErrorKind::PermissionDenied {
        TmpEraserError::PermissionDenied(context.display().to_string())
    } else {
        TmpEraserError::Io(err)
    }
}
