//! Packed ARGB8888 colors used by the canvas.

pub const BACKGROUND: u32 = 0xFFFFFFFF;
pub const GRID: u32 = 0xFFE0E0E0;
pub const AXIS: u32 = 0xFF000000;
pub const LINE_PIXEL: u32 = 0xFF1E50DC;
pub const CIRCLE_PIXEL: u32 = 0xFFDC2828;
pub const WINDOW: u32 = 0xFF20A040;
pub const REJECTED: u32 = 0xFFB0B0B0;
pub const CLIPPED: u32 = 0xFFDC2828;

/// Pack 8-bit channels into ARGB8888.
#[inline]
pub const fn pack(a: u8, r: u8, g: u8, b: u8) -> u32 {
    ((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | (b as u32)
}

/// Unpack ARGB8888 into `[r, g, b, a]` byte order, as used by RGBA images.
#[inline]
pub const fn to_rgba(color: u32) -> [u8; 4] {
    [
        (color >> 16) as u8,
        (color >> 8) as u8,
        color as u8,
        (color >> 24) as u8,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pack_and_unpack_agree() {
        let c = pack(0x80, 0x12, 0x34, 0x56);
        assert_eq!(c, 0x80123456);
        assert_eq!(to_rgba(c), [0x12, 0x34, 0x56, 0x80]);
    }
}
