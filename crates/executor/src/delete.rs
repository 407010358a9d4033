use std::path::Path;

use log::{debug, info, warn};
use tmp_eraser_domain::{DeletionFailure, DeletionReport};

/// 删除单个文件，成功返回 Ok
pub fn delete_file(path: &Path, verbose: bool) -> Result<(), DeletionFailure> {
    match std::fs::remove_file(path) {
        Ok(()) => {
            if verbose {
                info!("Removed: {}", path.display());
            } else {
                debug!("Removed: {}", path.display());
            }
            Ok(())
        }
        Err(e) => {
            if verbose {
                warn!("{} | {}", e, path.display());
            } else {
                debug!("{} | {}", e, path.display());
            }
            Err(DeletionFailure {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })
        }
    }
}

/// 逐个删除，单个失败只记录不中断
pub fn delete_files<'a, I>(paths: I, verbose: bool) -> DeletionReport
where
    I: IntoIterator<Item = &'a Path>,
{
    let mut report = DeletionReport::default();
    for path in paths {
        match delete_file(path, verbose) {
            Ok(()) => report.deleted += 1,
            Err(failure) => report.failures.push(failure),
        }
    }
    report
}
