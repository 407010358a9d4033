use crate::TmpEraserError;

/// 默认读取的环境变量
pub const DEFAULT_ENV_VAR: &str = "TMP";
/// 垃圾文件名前缀
pub const DEFAULT_PREFIX: &str = "_CL_";
/// 打开逐文件日志的环境变量
pub const VERBOSE_ENV_VAR: &str = "TMP_ERASER_VERBOSE";

/// 运行配置：目标目录变量名、前缀、是否输出逐文件日志
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EraserConfig {
    pub env_var: String,
    pub prefix: String,
    pub verbose: bool,
}

impl Default for EraserConfig {
    fn default() -> Self {
        Self {
            env_var: DEFAULT_ENV_VAR.to_string(),
            prefix: DEFAULT_PREFIX.to_string(),
            verbose: false,
        }
    }
}

impl EraserConfig {
    /// 默认配置，`TMP_ERASER_VERBOSE` 可打开详细输出
    pub fn from_env() -> Self {
        let verbose = std::env::var(VERBOSE_ENV_VAR)
            .map(|v| parse_flag(&v))
            .unwrap_or(false);
        Self {
            verbose,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), TmpEraserError> {
        if self.env_var.trim().is_empty() {
            return Err(TmpEraserError::Config(
                "environment variable name is empty".to_string(),
            ));
        }
        if self.env_var.contains('=') || self.env_var.contains('\0') {
            return Err(TmpEraserError::Config(format!(
                "invalid environment variable name: {:?}",
                self.env_var
            )));
        }
        if self.prefix.is_empty() {
            return Err(TmpEraserError::Config("junk prefix is empty".to_string()));
        }
        Ok(())
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
