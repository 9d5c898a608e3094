//! # 像素网格模块
//!
//! 编解码器只依赖 `PixelGrid` 这个最小接口：宽、高以及按 (x, y) 读写 RGB 三元组。
//! 具体的图像解码与编码由 `image` crate 负责。

use image::{Rgb, RgbImage};

/// 由 `width × height` 个 RGB 像素组成的二维网格，坐标从 0 开始。
pub trait PixelGrid {
    fn width(&self) -> u32;

    fn height(&self) -> u32;

    fn get(&self, x: u32, y: u32) -> [u8; 3];

    fn set(&mut self, x: u32, y: u32, rgb: [u8; 3]);

    /// 像素总数。
    fn pixel_count(&self) -> usize {
        self.width() as usize * self.height() as usize
    }

    /// 将行优先的像素索引换算为 (x, y)。
    fn coords(&self, index: usize) -> (u32, u32) {
        let width = self.width() as usize;
        ((index % width) as u32, (index / width) as u32)
    }
}

impl PixelGrid for RgbImage {
    fn width(&self) -> u32 {
        self.dimensions().0
    }

    fn height(&self) -> u32 {
        self.dimensions().1
    }

    fn get(&self, x: u32, y: u32) -> [u8; 3] {
        self.get_pixel(x, y).0
    }

    fn set(&mut self, x: u32, y: u32, rgb: [u8; 3]) {
        self.put_pixel(x, y, Rgb(rgb));
    }
}
