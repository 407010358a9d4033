use std::io::{self, Write};
use std::path::Path;

use tmp_eraser_domain::{DeletionReport, JunkScan};

pub fn print_nothing_found<W: Write>(out: &mut W, directory: &Path) -> io::Result<()> {
    writeln!(out, "No junk files found in [{}]", directory.display())
}

pub fn print_scan_summary<W: Write>(out: &mut W, scan: &JunkScan) -> io::Result<()> {
    writeln!(
        out,
        "Total size: {} MB | in {} files",
        scan.total_size_mb(),
        scan.file_count()
    )
}

pub fn print_deleted<W: Write>(out: &mut W, report: &DeletionReport) -> io::Result<()> {
    writeln!(out, "{} files deleted.", report.deleted)
}
