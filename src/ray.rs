use crate::*;
#[derive(Clone, Copy, Debug)]
pub struct Ray {
    pub origin: P3,
    pub dir: V3,
}

impl Ray {
    pub fn new(origin: P3, dir: V3) -> Self {
        Ray { origin, dir }
    }

    pub fn from_to(from: &P3, to: &P3) -> Self {
        Ray::new(*from, to - from)
    }

    pub fn at(&self, t: f64) -> P3 {
        self.origin + self.dir * t
    }
}
