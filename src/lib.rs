//! # rgb_lsb 库
//!
//! 本库包含 RGB 最低有效位隐写工具的核心逻辑：
//! `steganography` 是只依赖 `grid::PixelGrid` 的编解码器，其余模块负责文件与命令行。

// 声明库包含的所有模块。

pub mod cli;
pub mod constants;
pub mod error;
pub mod grid;
pub mod handler;
pub mod prompt;
pub mod steganography;
