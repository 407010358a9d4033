use std::path::Path;
use std::time::Instant;

use log::{debug, info};
use tmp_eraser_common::{classify_io, EraserConfig, TmpEraserError};
use tmp_eraser_domain::{JunkFile, JunkScan};

use crate::PrefixFilter;

const VERBOSE_SEPARATOR: &str =
    "--------------------------------------------------------------------------------";

/// 扫描参数
#[derive(Debug, Clone)]
pub struct ScanOptions {
    pub filter: PrefixFilter,
    pub verbose: bool,
}

impl ScanOptions {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            filter: PrefixFilter::new(prefix),
            verbose: false,
        }
    }
}

impl From<&EraserConfig> for ScanOptions {
    fn from(config: &EraserConfig) -> Self {
        Self {
            filter: PrefixFilter::new(config.prefix.clone()),
            verbose: config.verbose,
        }
    }
}

/// 扫描目录第一层，收集名称带前缀的普通文件（不递归）
///
/// 符号链接本身不是普通文件，即使指向普通文件也不计入、不删除。
pub fn scan_junk(directory: &Path, options: &ScanOptions) -> Result<JunkScan, TmpEraserError> {
    let start = Instant::now();
    let entries = std::fs::read_dir(directory).map_err(|e| classify_io(e, directory))?;

    let mut files = Vec::new();
    let mut total_size = 0u64;

    for entry in entries {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                debug!("skipping unreadable entry in {}: {}", directory.display(), e);
                continue;
            }
        };
        if !options.filter.matches(&entry.file_name()) {
            continue;
        }
        // DirEntry::metadata 不跟随符号链接
        let metadata = match entry.metadata() {
            Ok(m) => m,
            Err(e) => {
                debug!("skipping {}: {}", entry.path().display(), e);
                continue;
            }
        };
        if !metadata.is_file() {
            continue;
        }
        total_size += metadata.len();
        files.push(JunkFile {
            path: entry.path(),
            size: metadata.len(),
        });
    }

    if options.verbose {
        for file in &files {
            info!("{}", file.path.display());
        }
        info!("{}", VERBOSE_SEPARATOR);
    }

    let scan_time_ms = start.elapsed().as_millis() as u64;
    debug!(
        "scanned {} in {} ms, matched {} `{}` files ({} bytes)",
        directory.display(),
        scan_time_ms,
        options.filter.prefix(),
        files.len(),
        total_size
    );

    Ok(JunkScan {
        directory: directory.to_path_buf(),
        files,
        total_size,
        scan_time_ms,
    })
}
