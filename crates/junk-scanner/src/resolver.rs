use std::ffi::OsString;
use std::path::PathBuf;

use tmp_eraser_common::TmpEraserError;

/// 从环境变量解析目标目录
pub fn resolve_directory(env_var: &str) -> Result<PathBuf, TmpEraserError> {
    validate_directory(env_var, std::env::var_os(env_var))
}

/// 校验顺序：变量缺失 -> 路径不存在 -> 不是目录
pub fn validate_directory(
    env_var: &str,
    value: Option<OsString>,
) -> Result<PathBuf, TmpEraserError> {
    let value = match value {
        Some(v) if !v.is_empty() => v,
        _ => return Err(TmpEraserError::EnvVarMissing(env_var.to_string())),
    };
    let path = PathBuf::from(value);

    if !path.exists() {
        return Err(TmpEraserError::NotExisting(path));
    }
    if !path.is_dir() {
        return Err(TmpEraserError::NotDirectory(path));
    }
    log::debug!("resolved {} -> {}", env_var, path.display());
    Ok(path)
}
