//! # LSB 隐写核心模块
//!
//! 像素 (0,0) 的红色通道保存载荷长度 (0-255)。每个载荷字节按 MSB 优先的顺序
//! 拆成 8 个比特，写入从像素索引 1 开始的 3 个连续像素的最低位，
//! 布局见 [`BIT_LAYOUT`]。头部像素永远不会被载荷遍历再次访问。

use crate::constants::{
    BIT_LAYOUT, HEADER_PIXEL_INDEX, MAX_PAYLOAD_LEN, PAYLOAD_START_INDEX, PIXELS_PER_BYTE, RED,
};
use crate::error::StegoError;
use crate::grid::PixelGrid;
use log::debug;

/// 容纳 `len` 字节载荷所需的像素数 (含头部像素)。
pub fn required_pixels(len: usize) -> usize {
    PAYLOAD_START_INDEX + PIXELS_PER_BYTE * len
}

/// 网格最多能容纳的载荷字节数，即 `(width·height − 1) / 3`，上限 255。
pub fn capacity<G: PixelGrid + ?Sized>(grid: &G) -> usize {
    (grid.pixel_count().saturating_sub(PAYLOAD_START_INDEX) / PIXELS_PER_BYTE).min(MAX_PAYLOAD_LEN)
}

/// 将载荷隐藏到网格中。
///
/// 所有检查都在写入第一个像素之前完成，失败时网格保持不变。
///
/// # Errors
///
/// * `PayloadTooLong` - 载荷超过 255 字节。
/// * `CapacityExceeded` - `width·height < 3·len + 1`。
pub fn embed<G: PixelGrid + ?Sized>(grid: &mut G, payload: &[u8]) -> Result<(), StegoError> {
    if payload.len() > MAX_PAYLOAD_LEN {
        return Err(StegoError::PayloadTooLong { len: payload.len() });
    }

    let required = required_pixels(payload.len());
    let available = grid.pixel_count();
    if available < required {
        return Err(StegoError::CapacityExceeded {
            required,
            available,
        });
    }

    let (hx, hy) = grid.coords(HEADER_PIXEL_INDEX);
    let mut header = grid.get(hx, hy);
    header[RED] = payload.len() as u8;
    grid.set(hx, hy, header);

    for (k, &byte) in payload.iter().enumerate() {
        let base = PAYLOAD_START_INDEX + PIXELS_PER_BYTE * k;
        for slot in 0..PIXELS_PER_BYTE {
            let (x, y) = grid.coords(base + slot);
            let mut rgb = grid.get(x, y);
            for (bit, &(_, channel)) in BIT_LAYOUT
                .iter()
                .enumerate()
                .filter(|(_, (s, _))| *s == slot)
            {
                let value = (byte >> (7 - bit)) & 0x1;
                rgb[channel] = value | (rgb[channel] & 0xFE);
            }
            grid.set(x, y, rgb);
        }
    }

    debug!(
        "embedded {} bytes into {} of {} pixels",
        payload.len(),
        required,
        available
    );

    Ok(())
}

/// 从网格中恢复载荷。
///
/// # Errors
///
/// * `EmptyGrid` - 网格没有像素，无法读取头部。
/// * `TruncatedData` - 头部声明的长度需要的像素多于网格所有。
pub fn extract<G: PixelGrid + ?Sized>(grid: &G) -> Result<Vec<u8>, StegoError> {
    if grid.pixel_count() == 0 {
        return Err(StegoError::EmptyGrid);
    }

    let (hx, hy) = grid.coords(HEADER_PIXEL_INDEX);
    let declared = grid.get(hx, hy)[RED] as usize;
    if declared == 0 {
        return Ok(Vec::new());
    }

    if grid.pixel_count() < required_pixels(declared) {
        return Err(StegoError::TruncatedData {
            declared,
            capacity: capacity(grid),
        });
    }

    let payload: Vec<u8> = (0..declared)
        .map(|k| {
            let base = PAYLOAD_START_INDEX + PIXELS_PER_BYTE * k;
            let pixels: [[u8; 3]; PIXELS_PER_BYTE] = std::array::from_fn(|slot| {
                let (x, y) = grid.coords(base + slot);
                grid.get(x, y)
            });
            BIT_LAYOUT
                .iter()
                .fold(0u8, |acc, &(slot, channel)| (acc << 1) | (pixels[slot][channel] & 0x1))
        })
        .collect();

    debug!("extracted {} bytes", payload.len());

    Ok(payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbImage;

    #[test]
    fn bits_land_in_layout_order() {
        let mut grid = RgbImage::new(4, 1);
        embed(&mut grid, &[0b1010_0101]).unwrap();

        assert_eq!(grid.get(0, 0), [1, 0, 0]);
        // 槽位 0: bit0 -> G, bit1 -> B, R 不动
        assert_eq!(grid.get(1, 0), [0, 1, 0]);
        assert_eq!(grid.get(2, 0), [1, 0, 0]);
        assert_eq!(grid.get(3, 0), [1, 0, 1]);
    }

    #[test]
    fn header_survives_narrow_images() {
        // 宽度为 1 时，行优先遍历也不会回到头部像素
        let mut grid = RgbImage::new(1, 7);
        embed(&mut grid, b"hi").unwrap();

        assert_eq!(grid.get(0, 0)[RED], 2);
        assert_eq!(extract(&grid).unwrap(), b"hi");
    }

    #[test]
    fn capacity_is_clamped_to_one_length_byte() {
        assert_eq!(capacity(&RgbImage::new(0, 0)), 0);
        assert_eq!(capacity(&RgbImage::new(3, 2)), 1);
        assert_eq!(capacity(&RgbImage::new(100, 100)), MAX_PAYLOAD_LEN);
    }

    #[test]
    fn empty_grid_cannot_be_read() {
        assert_eq!(extract(&RgbImage::new(0, 0)), Err(StegoError::EmptyGrid));
    }
}
