use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn from_hex_u32(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as u8,
            g: ((hex >> 8) & 0xff) as u8,
            b: (hex & 0xff) as u8,
        }
    }

    pub fn to_hex_u32(self) -> u32 {
        (u32::from(self.r) << 16) | (u32::from(self.g) << 8) | u32::from(self.b)
    }

    /// Resolves a CSS color name, `#rgb` or `#rrggbb`.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if let Some(hex) = raw.strip_prefix('#') {
            return parse_hex(hex);
        }
        Self::named(raw)
    }

    pub fn named(name: &str) -> Option<Self> {
        let hex = match name.to_ascii_lowercase().as_str() {
            "black" => 0x000000,
            "white" => 0xffffff,
            "red" => 0xff0000,
            "green" => 0x008000,
            "blue" => 0x0000ff,
            "navy" => 0x000080,
            "gray" | "grey" => 0x808080,
            "lightgray" | "lightgrey" => 0xd3d3d3,
            "darkgray" | "darkgrey" => 0xa9a9a9,
            "skyblue" => 0x87ceeb,
            "lightskyblue" => 0x87cefa,
            "steelblue" => 0x4682b4,
            "cornflowerblue" => 0x6495ed,
            "darkslategray" | "darkslategrey" => 0x2f4f4f,
            "slategray" | "slategrey" => 0x708090,
            "orange" => 0xffa500,
            "tomato" => 0xff6347,
            "gold" => 0xffd700,
            _ => return None,
        };
        Some(Self::from_hex_u32(hex))
    }

    /// Channel-wise linear blend. `t` outside `[0, 1]` extrapolates and clamps.
    pub fn interpolate(from: Rgb, to: Rgb, t: f64) -> Rgb {
        let channel = |a: u8, b: u8| -> u8 {
            let v = f64::from(a) + (f64::from(b) - f64::from(a)) * t;
            if v.is_nan() {
                0
            } else {
                v.round().clamp(0.0, 255.0) as u8
            }
        };
        Rgb {
            r: channel(from.r, to.r),
            g: channel(from.g, to.g),
            b: channel(from.b, to.b),
        }
    }

    pub fn to_css(self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

fn parse_hex(hex: &str) -> Option<Rgb> {
    match hex.len() {
        6 => u32::from_str_radix(hex, 16).ok().map(Rgb::from_hex_u32),
        3 => {
            let short = u32::from_str_radix(hex, 16).ok()?;
            let expand = |v: u32| ((v & 0xf) * 0x11) as u8;
            Some(Rgb::new(expand(short >> 8), expand(short >> 4), expand(short)))
        }
        _ => None,
    }
}
