use std::ops::{Add, AddAssign, Div, Mul};
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RGB {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl RGB {
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        RGB { r, g, b }
    }
    pub fn all(x: f64) -> Self {
        Self::new(x, x, x)
    }

    pub fn black() -> Self {
        Self::all(0.0)
    }

    pub fn white() -> Self {
        Self::all(255.0)
    }

    pub fn is_finite(&self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite()
    }

    /// Displayable channels: each clamped to `[0, 255]` and truncated.
    pub fn to_bytes(&self) -> [u8; 3] {
        fn channel(x: f64) -> u8 {
            if x.is_nan() {
                0
            } else {
                x.max(0.0).min(255.0) as u8
            }
        }
        [channel(self.r), channel(self.g), channel(self.b)]
    }
}

impl<'a> Add<&'a Self> for RGB {
    type Output = Self;
    fn add(self, rhs: &'a Self) -> Self {
        RGB {
            r: self.r + rhs.r,
            g: self.g + rhs.g,
            b: self.b + rhs.b,
        }
    }
}

impl Add for RGB {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        self.add(&rhs)
    }
}

impl AddAssign for RGB {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Mul<f64> for RGB {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        RGB {
            r: self.r * rhs,
            g: self.g * rhs,
            b: self.b * rhs,
        }
    }
}

impl Mul<RGB> for f64 {
    type Output = RGB;
    fn mul(self, rhs: RGB) -> RGB {
        rhs * self
    }
}

impl Div<f64> for RGB {
    type Output = Self;
    fn div(self, rhs: f64) -> Self {
        RGB {
            r: self.r / rhs,
            g: self.g / rhs,
            b: self.b / rhs,
        }
    }
}
