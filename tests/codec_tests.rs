use image::RgbImage;
use rand::{Rng, RngCore};
use rgb_lsb::{
    constants::{MAX_PAYLOAD_LEN, RED},
    error::StegoError,
    grid::PixelGrid,
    steganography::{capacity, embed, extract, required_pixels},
};

/// 一个辅助函数，用于创建一个带有随机像素的 RGB 网格
fn random_grid(width: u32, height: u32) -> RgbImage {
    let mut raw = vec![0u8; (width * height * 3) as usize];
    rand::rng().fill_bytes(&mut raw);
    RgbImage::from_raw(width, height, raw).expect("buffer size matches dimensions")
}

fn random_payload(len: usize) -> Vec<u8> {
    let mut payload = vec![0u8; len];
    rand::rng().fill_bytes(&mut payload);
    payload
}

/// 验证任意长度 (0-255) 的载荷都能完整往返
#[test]
fn test_round_trip_random_payloads() {
    let mut rng = rand::rng();
    for _ in 0..32 {
        let len = rng.random_range(0..=MAX_PAYLOAD_LEN);
        let payload = random_payload(len);
        let width = rng.random_range(1..=40);
        let height = (required_pixels(len) as u32).div_ceil(width);

        let mut grid = random_grid(width, height);
        embed(&mut grid, &payload).unwrap();

        assert_eq!(extract(&grid).unwrap(), payload, "width {width}, len {len}");
    }
}

/// 验证载荷之后的像素保持逐位不变，被触及的通道只有最低位可能改变
#[test]
fn test_untouched_pixels_and_high_bits_are_preserved() {
    let original = random_grid(20, 20);
    let mut grid = original.clone();
    let payload = b"Least significant bits only.";
    embed(&mut grid, payload).unwrap();

    let touched = required_pixels(payload.len());
    for index in 0..grid.pixel_count() {
        let (x, y) = grid.coords(index);
        let before = original.get(x, y);
        let after = grid.get(x, y);
        if index == 0 {
            assert_eq!(after[RED], payload.len() as u8);
            assert_eq!(after[1..], before[1..]);
        } else if index < touched {
            for channel in 0..3 {
                assert_eq!(after[channel] & 0xFE, before[channel] & 0xFE);
            }
            // 槽位 0 的红色通道不承载比特
            if (index - 1) % 3 == 0 {
                assert_eq!(after[RED], before[RED]);
            }
        } else {
            assert_eq!(after, before, "pixel {index} must not change");
        }
    }
}

/// 验证空载荷只把头部红色通道清零
#[test]
fn test_empty_payload() {
    let original = random_grid(5, 5);
    let mut grid = original.clone();
    embed(&mut grid, b"").unwrap();

    let mut expected = original.clone();
    let [_, g, b] = expected.get(0, 0);
    expected.set(0, 0, [0, g, b]);
    assert_eq!(grid, expected);

    assert!(extract(&grid).unwrap().is_empty());
}

/// 验证一张单像素图像也能容纳空载荷
#[test]
fn test_single_pixel_grid_holds_empty_payload() {
    let mut grid = random_grid(1, 1);
    embed(&mut grid, b"").unwrap();
    assert!(extract(&grid).unwrap().is_empty());
    assert_eq!(capacity(&grid), 0);
}

/// 验证容量边界：3·255 + 1 个像素刚好够用，少一个像素则失败且网格不变
#[test]
fn test_capacity_boundary() {
    let payload = random_payload(MAX_PAYLOAD_LEN);

    let mut exact = random_grid(3 * MAX_PAYLOAD_LEN as u32 + 1, 1);
    embed(&mut exact, &payload).unwrap();
    assert_eq!(extract(&exact).unwrap(), payload);

    let original = random_grid(3 * MAX_PAYLOAD_LEN as u32, 1);
    let mut short = original.clone();
    assert_eq!(
        embed(&mut short, &payload),
        Err(StegoError::CapacityExceeded {
            required: 3 * MAX_PAYLOAD_LEN + 1,
            available: 3 * MAX_PAYLOAD_LEN,
        })
    );
    assert_eq!(short, original, "a failed embed must not modify the grid");
}

/// 验证超过 255 字节的载荷在写入前被拒绝
#[test]
fn test_payload_too_long() {
    let original = random_grid(100, 100);
    let mut grid = original.clone();
    let result = embed(&mut grid, &random_payload(MAX_PAYLOAD_LEN + 1));

    assert_eq!(
        result,
        Err(StegoError::PayloadTooLong {
            len: MAX_PAYLOAD_LEN + 1
        })
    );
    assert_eq!(grid, original);
}

/// 验证头部声明的长度超出图像容量时返回 TruncatedData
#[test]
fn test_truncated_header() {
    let mut grid = random_grid(4, 4);
    // (16 - 1) / 3 = 5
    assert_eq!(capacity(&grid), 5);

    let [_, g, b] = grid.get(0, 0);
    grid.set(0, 0, [6, g, b]);

    assert_eq!(
        extract(&grid),
        Err(StegoError::TruncatedData {
            declared: 6,
            capacity: 5
        })
    );

    grid.set(0, 0, [5, g, b]);
    assert_eq!(extract(&grid).unwrap().len(), 5);
}

/// 验证 3x2 图像中隐藏 'A' (0b0100_0001) 的具体比特位置
#[test]
fn test_concrete_example() {
    let mut grid = RgbImage::from_pixel(3, 2, image::Rgb([0xFF, 0xFF, 0xFF]));
    embed(&mut grid, b"A").unwrap();

    assert_eq!(grid.get(0, 0), [1, 0xFF, 0xFF]);
    // bit0 = 0 -> G, bit1 = 1 -> B
    assert_eq!(grid.get(1, 0), [0xFF, 0xFE, 0xFF]);
    // bit2..bit4 = 0
    assert_eq!(grid.get(2, 0), [0xFE, 0xFE, 0xFE]);
    // bit5 = 0, bit6 = 0, bit7 = 1
    assert_eq!(grid.get(0, 1), [0xFE, 0xFE, 0xFF]);
    // 载荷之外的像素不变
    assert_eq!(grid.get(1, 1), [0xFF, 0xFF, 0xFF]);
    assert_eq!(grid.get(2, 1), [0xFF, 0xFF, 0xFF]);

    assert_eq!(extract(&grid).unwrap(), vec![0x41]);
}
