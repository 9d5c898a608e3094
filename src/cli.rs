//! # 命令行接口模块
//!
//! 使用 `clap` 定义了程序的命令行结构，包括子命令和参数。
//! 所有用户通过命令行与程序交互的入口点都在此模块中定义。

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// 基于 RGB 通道最低有效位的隐写工具，在 PNG 图像中隐藏或恢复最多 255 字节的文本。
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// 在 PNG 图像中隐藏一段文本。
    Hide(HideArgs),

    /// 从经过隐写的 PNG 图像中恢复隐藏的文本。
    Recover(RecoverArgs),

    /// 显示一张 PNG 图像最多能隐藏多少字节。
    Capacity(CapacityArgs),

    /// 以问答方式选择编码或解码。
    Interactive,
}

/// 'hide' 命令所需的参数。
#[derive(Args, Debug)]
#[command(group(clap::ArgGroup::new("payload").required(true).args(["message", "text"])))]
pub struct HideArgs {
    /// 用于隐写的输入 PNG 图像路径。
    #[arg(short, long)]
    pub image: PathBuf,

    /// 直接在命令行给出的要隐藏的文本。
    #[arg(short, long)]
    pub message: Option<String>,

    /// 要隐藏的文本内容的文件路径。
    #[arg(short, long)]
    pub text: Option<PathBuf>,

    /// 结果图像的输出路径，默认为输入图像旁的 `doctored_<name>.png`。
    #[arg(short, long)]
    pub dest: Option<PathBuf>,

    /// 允许覆盖已存在的输出文件。
    #[arg(short, long)]
    pub force: bool,
}

/// 'recover' 命令所需的参数。
#[derive(Args, Debug)]
pub struct RecoverArgs {
    /// 已隐藏文本数据的 PNG 图像路径。
    #[arg(short, long)]
    pub image: PathBuf,

    /// 保存恢复文本的路径；省略时直接打印到标准输出。
    #[arg(short, long)]
    pub text: Option<PathBuf>,

    /// 允许覆盖已存在的输出文件。
    #[arg(short, long)]
    pub force: bool,
}

/// 'capacity' 命令所需的参数。
#[derive(Args, Debug)]
pub struct CapacityArgs {
    /// 要计算容量的 PNG 图像路径。
    #[arg(short, long)]
    pub image: PathBuf,
}
