// Simple color struct, created from an unsigned 32 representing RRGGBB.
// Alpha is supplied per draw call, since every effect on the page fades
// its fixed hue rather than storing translucent colors.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub fn from_u32(num: u32) -> Color {
        let r = (num >> 16) as u8;
        let g = (num >> 8) as u8;
        let b = (num >> 0) as u8;

        Color { r, g, b }
    }

    // CSS color string for the 2d context fill/stroke styles
    pub fn to_css(&self, alpha: f64) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unpacks_rrggbb() {
        let c = Color::from_u32(0x00d4ff);
        assert_eq!(c, Color { r: 0, g: 212, b: 255 });

        let c = Color::from_u32(0xff3366);
        assert_eq!(c, Color { r: 255, g: 51, b: 102 });
    }

    #[test]
    fn css_string_carries_alpha() {
        let c = Color { r: 0, g: 212, b: 255 };
        assert_eq!(c.to_css(1.0), "rgba(0, 212, 255, 1)");
        assert_eq!(c.to_css(0.5), "rgba(0, 212, 255, 0.5)");
    }
}
