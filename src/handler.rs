//! # 命令处理逻辑模块
//!
//! 包含处理 `hide`、`recover` 和 `capacity` 子命令的高级业务逻辑。
//! 本模块负责检查容器格式、通过 `image` 解码与编码 PNG、调用核心隐写算法以及向用户报告结果。

use crate::cli::{CapacityArgs, HideArgs, RecoverArgs};
use crate::constants::{ACCEPTED_EXTENSION, HIDDEN_IMAGE_PREFIX};
use crate::error::StegoError;
use crate::steganography::{capacity, embed, extract};
use anyhow::{Context, Result};
use colored::Colorize;
use image::{ImageFormat, RgbImage};
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

/// 只接受扩展名为 `.png` (不区分大小写) 的文件。
pub fn ensure_png(path: &Path) -> Result<(), StegoError> {
    let accepted = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(ACCEPTED_EXTENSION));

    if accepted {
        Ok(())
    } else {
        Err(StegoError::UnsupportedContainer {
            path: path.to_path_buf(),
        })
    }
}

/// 输入图像旁的默认输出路径：`doctored_<stem>.png`。
pub fn default_hidden_path(image: &Path) -> PathBuf {
    let stem = image
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_string());
    image.with_file_name(format!("{HIDDEN_IMAGE_PREFIX}{stem}.{ACCEPTED_EXTENSION}"))
}

/// 读取 PNG 并转换为 8 位 RGB 网格，alpha 通道被丢弃。
pub fn load_grid(path: &Path) -> Result<RgbImage> {
    ensure_png(path)?;

    let grid = image::open(path)
        .with_context(|| {
            format!(
                "Unable to read image file: {}",
                path.to_string_lossy().red().bold()
            )
        })?
        .to_rgb8();

    info!(
        "loaded {} ({}x{})",
        path.display(),
        grid.width(),
        grid.height()
    );

    Ok(grid)
}

fn ensure_writable(path: &Path, force: bool) -> Result<()> {
    anyhow::ensure!(
        force || !path.exists(),
        "Output file already exists: {}. \nUse --force to overwrite it.",
        path.to_string_lossy().red().bold()
    );
    Ok(())
}

/// 将载荷隐藏到 `image` 中，并以 PNG 格式写入 `dest`。
///
/// 容量不足时不会写出任何文件。
pub fn hide_payload(image: &Path, payload: &[u8], dest: &Path, force: bool) -> Result<()> {
    ensure_writable(dest, force)?;

    let mut grid = load_grid(image)?;

    embed(&mut grid, payload).with_context(|| {
        format!(
            "Failed to hide {} bytes in {}.",
            payload.len().to_string().red().bold(),
            image.to_string_lossy().green().bold()
        )
    })?;

    grid.save_with_format(dest, ImageFormat::Png).with_context(|| {
        format!(
            "Unable to write to target image file: {}",
            dest.to_string_lossy().red().bold()
        )
    })?;

    info!("wrote {} bytes of payload to {}", payload.len(), dest.display());

    Ok(())
}

/// 从 `image` 中恢复隐藏的载荷。
pub fn recover_payload(image: &Path) -> Result<Vec<u8>> {
    let grid = load_grid(image)?;

    extract(&grid).with_context(|| {
        format!(
            "Failed to recover the hidden message from '{}'.",
            image.to_string_lossy().red().bold()
        )
    })
}

/// 处理 'Hide' 命令的执行逻辑。
///
/// 负责读取消息 (命令行或文本文件)、确定输出路径、调用隐写核心函数，
/// 最后报告结果图像的位置。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 输入图像不是 PNG，或无法读取输入的图像或文本文件。
/// * 文本超过 255 字节，或图像没有足够的像素。
/// * 输出文件已存在且未指定 `--force`。
/// * 无法写入到目标图像文件。
pub fn handle_hide(args: HideArgs) -> Result<()> {
    let payload = match (&args.message, &args.text) {
        (Some(message), _) => message.clone().into_bytes(),
        (None, Some(text)) => fs::read(text).with_context(|| {
            format!(
                "Unable to read text file: {}",
                text.to_string_lossy().red().bold()
            )
        })?,
        (None, None) => anyhow::bail!("Either --message or --text must be given."),
    };

    let dest = args
        .dest
        .unwrap_or_else(|| default_hidden_path(&args.image));

    hide_payload(&args.image, &payload, &dest, args.force)?;

    println!(
        "The text has been successfully hidden and saved: {}",
        dest.to_string_lossy().green().bold()
    );

    Ok(())
}

/// 处理 'Recover' 命令的执行逻辑。
///
/// 恢复出的字节原样写入 `--text` 指定的文件；未指定时按 UTF-8 (有损) 打印到标准输出。
pub fn handle_recover(args: RecoverArgs) -> Result<()> {
    let payload = recover_payload(&args.image)?;

    match args.text {
        Some(path) => {
            ensure_writable(&path, args.force)?;
            fs::write(&path, &payload).with_context(|| {
                format!(
                    "Unable to write to target text file: {}",
                    path.to_string_lossy().red().bold()
                )
            })?;
            println!(
                "The text has been successfully recovered and saved: {}",
                path.to_string_lossy().green().bold()
            );
        }
        None => println!("{}", String::from_utf8_lossy(&payload)),
    }

    Ok(())
}

/// 处理 'Capacity' 命令：打印图像最多能隐藏的字节数。
pub fn handle_capacity(args: CapacityArgs) -> Result<()> {
    let grid = load_grid(&args.image)?;

    println!(
        "{} ({}x{}) can hide up to {} bytes.",
        args.image.to_string_lossy().green().bold(),
        grid.width(),
        grid.height(),
        capacity(&grid).to_string().green().bold()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn png_extension_is_case_insensitive() {
        assert!(ensure_png(Path::new("a/b.PNG")).is_ok());
        assert!(ensure_png(Path::new("a/b.png")).is_ok());
        assert!(matches!(
            ensure_png(Path::new("photo.jpg")),
            Err(StegoError::UnsupportedContainer { .. })
        ));
        assert!(ensure_png(Path::new("noext")).is_err());
    }

    #[test]
    fn default_path_sits_next_to_input() {
        assert_eq!(
            default_hidden_path(Path::new("dir/cat.png")),
            PathBuf::from("dir/doctored_cat.png")
        );
    }
}
