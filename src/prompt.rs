//! # 交互模式模块
//!
//! 以问答方式选择编码 (e) 或解码 (d)。输入输出流由调用方传入，
//! 每一步需要的路径和消息都作为显式参数传给 `handler`，不保存任何全局状态。

use crate::error::StegoError;
use crate::handler::{default_hidden_path, ensure_png, hide_payload, recover_payload};
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{BufRead, Write};
use std::path::PathBuf;

/// 打印提示并读取一行，去掉行尾换行符。输入结束时返回空字符串。
fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, question: &str) -> Result<String> {
    write!(output, "{question}")?;
    output.flush()?;

    let mut line = String::new();
    input
        .read_line(&mut line)
        .context("Unable to read from standard input")?;

    Ok(line.trim_end_matches(['\n', '\r']).to_string())
}

/// 运行一次交互流程。
///
/// 非 PNG 路径只打印提示并正常返回；既不是 `e` 也不是 `d` 的选择返回 `InvalidMode`。
pub fn run<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<()> {
    let choice = ask(input, output, "Do you want to encode (e) or decode (d)? ")?
        .trim()
        .to_lowercase();

    match choice.as_str() {
        "e" => encode(input, output),
        "d" => decode(input, output),
        _ => {
            writeln!(output, "{}", "Invalid choice.".red().bold())?;
            Err(StegoError::InvalidMode {
                choice: choice.clone(),
            }
            .into())
        }
    }
}

/// 命令行 `interactive` 子命令的入口。
///
/// 无效选择已由 [`run`] 打印过提示，这里视为正常结束，其余错误原样返回。
pub fn run_session<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<()> {
    match run(input, output) {
        Err(err)
            if matches!(
                err.downcast_ref::<StegoError>(),
                Some(StegoError::InvalidMode { .. })
            ) =>
        {
            Ok(())
        }
        result => result,
    }
}

fn encode<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<()> {
    let image = PathBuf::from(ask(input, output, "Enter image file name (PNG only): ")?.trim());
    if ensure_png(&image).is_err() {
        writeln!(output, "{}", "Only PNG files are supported.".red().bold())?;
        return Ok(());
    }

    let message = ask(input, output, "Enter the secret message: ")?;
    let dest = default_hidden_path(&image);

    hide_payload(&image, message.as_bytes(), &dest, true)?;

    writeln!(
        output,
        "Message encoded and saved as {}",
        dest.to_string_lossy().green().bold()
    )?;

    Ok(())
}

fn decode<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<()> {
    let image = PathBuf::from(ask(input, output, "Enter encoded image file name: ")?.trim());
    if ensure_png(&image).is_err() {
        writeln!(output, "{}", "Only PNG files are supported.".red().bold())?;
        return Ok(());
    }

    let payload = recover_payload(&image)?;
    writeln!(output, "Decoded message: {}", String::from_utf8_lossy(&payload))?;

    Ok(())
}
