use std::path::PathBuf;

/// 一个命中前缀的普通文件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JunkFile {
    pub path: PathBuf,
    pub size: u64,
}
