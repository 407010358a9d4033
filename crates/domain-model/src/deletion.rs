use std::path::PathBuf;

/// 删除失败的单个文件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletionFailure {
    pub path: PathBuf,
    pub reason: String,
}

/// 删除结果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeletionReport {
    pub deleted: usize,
    pub failures: Vec<DeletionFailure>,
}

impl DeletionReport {
    pub fn attempted(&self) -> usize {
        self.deleted + self.failures.len()
    }
}
