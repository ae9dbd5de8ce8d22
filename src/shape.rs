use crate::error::{Error, Result};
use crate::math::VectorExt;
use crate::*;

trait ShapeImpl {
    fn collision(&self, ray: &Ray) -> Option<f64>;
    fn normal(&self, pos: &P3) -> V3;
    fn color(&self, pos: &P3) -> RGB;
}

pub mod shapes {
    use super::*;

    #[derive(Clone, Debug)]
    pub struct Sphere {
        center: P3,
        radius: f64,
        color: RGB,
    }

    impl Sphere {
        pub fn new(center: P3, radius: f64, color: RGB) -> Result<Self> {
            if !(radius > 0.0 && radius.is_finite()) {
                return Err(Error::InvalidRadius(radius));
            }
            Ok(Sphere {
                center,
                radius,
                color,
            })
        }

        pub fn center(&self) -> &P3 {
            &self.center
        }

        pub fn radius(&self) -> f64 {
            self.radius
        }
    }

    impl ShapeImpl for Sphere {
        fn collision(&self, ray: &Ray) -> Option<f64> {
            let a = ray.dir.dot(&ray.dir);
            let v = ray.origin - self.center;
            let b = 2.0 * ray.dir.dot(&v);
            let c = v.dot(&v) - self.radius * self.radius;
            let discr = b * b - 4.0 * a * c;
            if discr < 0.0 {
                return None;
            }
            let sq = discr.sqrt();
            let t1 = (-b - sq) / (2.0 * a);
            let t2 = (-b + sq) / (2.0 * a);
            match (t1 >= 0.0, t2 >= 0.0) {
                (true, true) => Some(t1.min(t2)),
                (true, false) => Some(t1),
                (false, true) => Some(t2),
                (false, false) => None,
            }
        }

        fn normal(&self, pos: &P3) -> V3 {
            pos - self.center
        }

        fn color(&self, _pos: &P3) -> RGB {
            self.color
        }
    }

    /// Second color of a checkered plane and the axis the cells are laid along.
    #[derive(Clone, Debug)]
    pub struct Checkerboard {
        pub color2: RGB,
        pub orientation: V3,
    }

    #[derive(Clone, Debug)]
    pub struct Plane {
        point: P3,
        normal: V3,
        color: RGB,
        checkerboard: Option<Checkerboard>,
    }

    impl Plane {
        pub fn new(point: P3, normal: V3, color: RGB) -> Result<Self> {
            normal.try_unit()?;
            Ok(Plane {
                point,
                normal,
                color,
                checkerboard: None,
            })
        }

        pub fn with_checkerboard(mut self, color2: RGB, orientation: V3) -> Result<Self> {
            orientation.try_unit()?;
            self.checkerboard = Some(Checkerboard {
                color2,
                orientation,
            });
            Ok(self)
        }

        pub fn checkerboard(&self) -> Option<&Checkerboard> {
            self.checkerboard.as_ref()
        }
    }

    impl ShapeImpl for Plane {
        fn collision(&self, ray: &Ray) -> Option<f64> {
            let denom = self.normal.dot(&ray.dir);
            if denom.abs() < 1e-6 {
                return None;
            }
            let t = self.normal.dot(&(self.point - ray.origin)) / denom;
            if t < 0.0 {
                None
            } else {
                Some(t)
            }
        }

        fn normal(&self, _pos: &P3) -> V3 {
            self.normal
        }

        // cells are indexed by unsigned distances, not signed coordinates
        fn color(&self, pos: &P3) -> RGB {
            match &self.checkerboard {
                None => self.color,
                Some(board) => {
                    let v = pos - self.point;
                    let along = v.project(&board.orientation);
                    let across = v - along;
                    // halves go to the even neighbour
                    let cell = along.norm().round_ties_even() as i64
                        + across.norm().round_ties_even() as i64;
                    if cell % 2 == 0 {
                        self.color
                    } else {
                        board.color2
                    }
                }
            }
        }
    }
}

#[derive(Clone, Debug)]
pub enum Shape {
    Sphere(shapes::Sphere),
    Plane(shapes::Plane),
}

impl_wrap_from_many! {Shape, shapes, [Sphere, Plane]}

use Shape::*;
impl Shape {
    /// Distance along `ray.dir` (in units of its length) to the nearest
    /// non-negative hit.
    pub fn collision(&self, ray: &Ray) -> Option<f64> {
        match self {
            Sphere(s) => s.collision(ray),
            Plane(s) => s.collision(ray),
        }
    }

    /// Unnormalized surface normal at `pos`.
    pub fn normal(&self, pos: &P3) -> V3 {
        match self {
            Sphere(s) => s.normal(pos),
            Plane(s) => s.normal(pos),
        }
    }

    pub fn color(&self, pos: &P3) -> RGB {
        match self {
            Sphere(s) => s.color(pos),
            Plane(s) => s.color(pos),
        }
    }
}
