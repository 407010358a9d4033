use std::path::{Path, PathBuf};

use crate::JunkFile;

pub const BYTES_PER_MB: u64 = 1_048_576;

/// 扫描结果：目标目录下所有垃圾文件，按目录遍历顺序排列
#[derive(Debug, Clone, Default)]
pub struct JunkScan {
    pub directory: PathBuf,
    pub files: Vec<JunkFile>,
    /// 命中文件的字节总数
    pub total_size: u64,
    pub scan_time_ms: u64,
}

impl JunkScan {
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// 以 MB 为单位的总大小，向下取整
    pub fn total_size_mb(&self) -> u64 {
        self.total_size / BYTES_PER_MB
    }

    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.files.iter().map(|f| f.path.as_path())
    }
}
