use std::io::{self, BufRead, Write};

pub const PROMPT: &str = "Delete? (y)";

/// 确认门：只有输入恰好为 `y` 才视为同意，EOF 视为取消
pub fn confirm<R: BufRead, W: Write>(mut input: R, output: &mut W) -> io::Result<bool> {
    writeln!(output, "{}", PROMPT)?;
    output.flush()?;

    let mut answer = String::new();
    if input.read_line(&mut answer)? == 0 {
        return Ok(false);
    }
    Ok(answer.trim() == "y")
}
