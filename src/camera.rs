use crate::*;
use rand::distributions::{Distribution, Uniform};
use rand::Rng;

/// Eye point looking through the `y = 0` film plane.
///
/// Pixel `(i, j)` of a film `film_width` pixels wide covers
/// `x ∈ [i, i + 1) / film_width` and `z ∈ 1 - [j, j + 1) / film_width`.
/// The vertical axis is scaled by the width as well, so non-square films
/// stretch rather than letterbox.
#[derive(Clone, Debug)]
pub struct Camera {
    origin: P3,
    film_width: u32,
}

impl Camera {
    pub fn new(origin: P3, film_width: u32) -> Self {
        Camera { origin, film_width }
    }

    /// Film point at fractional pixel coordinates.
    pub fn film_point(&self, x: f64, y: f64) -> P3 {
        let w = f64::from(self.film_width);
        P3::new(x / w, 0.0, 1.0 - y / w)
    }

    /// Ray leaving the film at `p`, pointing away from the eye.
    pub fn ray_to(&self, p: &P3) -> Ray {
        Ray::new(*p, p - self.origin)
    }

    pub fn sample_ray<R: Rng + ?Sized>(&self, xi: u32, yi: u32, rng: &mut R) -> Ray {
        let u01 = Uniform::new(0.0, 1.0);
        let x = f64::from(xi) + u01.sample(rng);
        let y = f64::from(yi) + u01.sample(rng);
        self.ray_to(&self.film_point(x, y))
    }
}
