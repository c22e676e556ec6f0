/// An RGBA color with `f32` components in the `0.0..=1.0` range.
///
/// ```
/// use splitpane_core::Color;
///
/// let gray = Color::from_hex(0x888888);
/// let packed = Color::from_argb_u32(0xFF44_4444);
/// assert_eq!(packed, Color::from_hex(0x444444));
/// assert_eq!(gray.a, 1.0);
/// ```
///
/// The struct is `#[repr(C)]` and implements `bytemuck::Pod`, so hosts can
/// copy divider colors straight into vertex or uniform buffers.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    /// Create a color from RGB components with full opacity.
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create a color from 8-bit RGBA values (0-255 mapped to 0.0-1.0).
    pub fn from_rgba_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: f32::from(r) / 255.0,
            g: f32::from(g) / 255.0,
            b: f32::from(b) / 255.0,
            a: f32::from(a) / 255.0,
        }
    }

    pub fn from_rgb_u8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba_u8(r, g, b, 255)
    }

    /// Create a color from a 24-bit RGB hex value (e.g. `0xFF8800`).
    pub fn from_hex(hex: u32) -> Self {
        let [_, r, g, b] = hex.to_be_bytes();
        Self::from_rgb_u8(r, g, b)
    }

    /// Create a color from a packed `0xAARRGGBB` integer, the layout most
    /// platform toolkits use for color attributes.
    pub fn from_argb_u32(argb: u32) -> Self {
        let [a, r, g, b] = argb.to_be_bytes();
        Self::from_rgba_u8(r, g, b, a)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}
