//! # 错误类型模块
//!
//! 编解码器与容器检查产生的所有错误都集中在 `StegoError` 中，
//! 上层的命令处理逻辑再用 `anyhow` 附加上下文。

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum StegoError {
    /// 载荷长度无法放进单个长度字节。
    #[error("Payload is {len} bytes long, but at most 255 bytes can be hidden.")]
    PayloadTooLong { len: usize },

    /// 图像像素不足以容纳载荷，在写入任何像素之前检测。
    #[error("Not enough space in the image. Required pixels: {required}, Available: {available}")]
    CapacityExceeded { required: usize, available: usize },

    /// 头部声明的长度超出了图像能提供的像素。
    #[error(
        "The header declares {declared} bytes, but the image can hold at most {capacity}. The image may not contain a hidden message."
    )]
    TruncatedData { declared: usize, capacity: usize },

    /// 图像没有任何像素，无法读取头部。
    #[error("The image contains no pixels.")]
    EmptyGrid,

    /// 输入文件不是接受的无损容器格式。
    #[error("Only PNG files are supported: {}", path.display())]
    UnsupportedContainer { path: PathBuf },

    /// 交互模式下既没有选择编码也没有选择解码。
    #[error("Invalid choice '{choice}'. Expected 'e' (encode) or 'd' (decode).")]
    InvalidMode { choice: String },
}
