#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0 };
    pub const WHITE: Self = Self {
        r: 255,
        g: 255,
        b: 255,
    };

    /// Linear blend from `from` (at `t = 0`) to `to` (at `t = 1`).
    ///
    /// `t` is clamped to `[0, 1]`.
    #[must_use]
    pub fn lerp(from: Self, to: Self, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);

        Self {
            r: lerp_channel(from.r, to.r, t),
            g: lerp_channel(from.g, to.g, t),
            b: lerp_channel(from.b, to.b, t),
        }
    }
}

fn lerp_channel(from: u8, to: u8, t: f64) -> u8 {
    let from = f64::from(from);
    let to = f64::from(to);

    (from + (to - from) * t).round() as u8
}
