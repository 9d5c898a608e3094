/// 头部像素的行优先索引，即像素 (0,0)。
/// 它的红色通道只保存载荷长度，从不承载载荷比特。
pub const HEADER_PIXEL_INDEX: usize = 0;

/// 载荷比特从这个像素索引开始写入。
pub const PAYLOAD_START_INDEX: usize = HEADER_PIXEL_INDEX + 1;

/// 每个载荷字节占用的连续像素数。
/// 3 个像素共 9 个通道，其中 8 个的最低位承载一个字节，槽位 0 的红色通道不用。
pub const PIXELS_PER_BYTE: usize = 3;

/// 长度只用一个通道字节保存，因此载荷最多 255 字节。
pub const MAX_PAYLOAD_LEN: usize = u8::MAX as usize;

/// 通道下标：R = 0, G = 1, B = 2。
pub const RED: usize = 0;
pub const GREEN: usize = 1;
pub const BLUE: usize = 2;

/// 每个字节的 8 个比特 (MSB 优先) 对应的 (像素槽位, 通道)。
pub const BIT_LAYOUT: [(usize, usize); 8] = [
    (0, GREEN),
    (0, BLUE),
    (1, RED),
    (1, GREEN),
    (1, BLUE),
    (2, RED),
    (2, GREEN),
    (2, BLUE),
];

/// 唯一接受的无损容器格式的扩展名。
pub const ACCEPTED_EXTENSION: &str = "png";

/// 未指定输出路径时，隐写结果图像的文件名前缀。
pub const HIDDEN_IMAGE_PREFIX: &str = "doctored_";
