use crate::error::{Error, Result};
use crate::*;

/// A shape together with how much of its color comes from mirror reflection.
#[derive(Clone, Debug)]
pub struct Object {
    shape: shape::Shape,
    reflectivity: f64,
}

impl Object {
    pub fn new(shape: impl Into<shape::Shape>, reflectivity: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&reflectivity) {
            return Err(Error::InvalidReflectivity(reflectivity));
        }
        Ok(Object {
            shape: shape.into(),
            reflectivity,
        })
    }

    pub fn shape(&self) -> &shape::Shape {
        &self.shape
    }

    pub fn reflectivity(&self) -> f64 {
        self.reflectivity
    }

    pub fn collision(&self, ray: &Ray) -> Option<f64> {
        self.shape.collision(ray)
    }

    pub fn normal(&self, pos: &P3) -> V3 {
        self.shape.normal(pos)
    }

    pub fn color(&self, pos: &P3) -> RGB {
        self.shape.color(pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::shapes::Sphere;

    #[test]
    fn reflectivity_must_be_a_fraction() {
        let s = Sphere::new(P3::origin(), 1.0, RGB::black()).unwrap();
        assert!(Object::new(s.clone(), 0.0).is_ok());
        assert!(Object::new(s.clone(), 1.0).is_ok());
        assert!(Object::new(s.clone(), 1.5).is_err());
        assert!(Object::new(s.clone(), -0.1).is_err());
        assert!(Object::new(s, f64::NAN).is_err());
    }
}
