use std::ffi::OsStr;

/// 固定字面量前缀过滤器
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixFilter {
    prefix: String,
}

impl PrefixFilter {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// 按字节比较，非 UTF-8 文件名同样可以命中
    pub fn matches(&self, file_name: &OsStr) -> bool {
        file_name
            .as_encoded_bytes()
            .starts_with(self.prefix.as_bytes())
    }
}
