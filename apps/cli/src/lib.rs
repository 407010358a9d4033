mod confirm;
mod logging;
mod report;

use std::io::{BufRead, Write};

use tmp_eraser_common::{EraserConfig, TmpEraserError};
use tmp_eraser_domain::DeletionReport;
use tmp_eraser_executor::delete_files;
use tmp_eraser_scanner::{resolve_directory, scan_junk, ScanOptions};

pub use confirm::{confirm, PROMPT};
pub use logging::init as init_logging;

/// 一次运行的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    NothingFound,
    Declined { found: usize },
    Deleted(DeletionReport),
}

/// 解析目录 -> 扫描 -> 确认 -> 删除
pub fn run_with<R, W>(
    config: &EraserConfig,
    input: R,
    output: &mut W,
) -> Result<RunOutcome, TmpEraserError>
where
    R: BufRead,
    W: Write,
{
    config.validate()?;
    let directory = resolve_directory(&config.env_var)?;
    let scan = scan_junk(&directory, &ScanOptions::from(config))?;
    log::debug!("scan of {} took {} ms", scan.directory.display(), scan.scan_time_ms);

    if scan.is_empty() {
        report::print_nothing_found(output, &scan.directory)?;
        return Ok(RunOutcome::NothingFound);
    }
    report::print_scan_summary(output, &scan)?;

    if !confirm(input, output)? {
        log::info!("deletion cancelled, {} files kept", scan.file_count());
        return Ok(RunOutcome::Declined {
            found: scan.file_count(),
        });
    }

    let result = delete_files(scan.paths(), config.verbose);
    // 详细模式下执行器已逐条 warn
    if !config.verbose {
        for failure in &result.failures {
            log::warn!("could not delete {}: {}", failure.path.display(), failure.reason);
        }
    }
    if !result.failures.is_empty() {
        log::warn!(
            "{} of {} files could not be deleted",
            result.failures.len(),
            result.attempted()
        );
    }
    report::print_deleted(output, &result)?;
    Ok(RunOutcome::Deleted(result))
}

/// 以标准输入输出运行
pub fn run(config: &EraserConfig) -> Result<RunOutcome, TmpEraserError> {
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    run_with(config, stdin.lock(), &mut stdout)
}
