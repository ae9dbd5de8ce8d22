use crate::error::{Error, Result};
use nalgebra::{Point3, Vector3};
pub type P3 = Point3<f64>;
pub type V3 = Vector3<f64>;

pub trait VectorExt {
    fn project(&self, onto: &V3) -> V3;
    fn try_unit(&self) -> Result<V3>;
}

impl VectorExt for V3 {
    //component of self along `onto`
    fn project(&self, onto: &V3) -> V3 {
        onto * (self.dot(onto) / onto.dot(onto))
    }

    fn try_unit(&self) -> Result<V3> {
        let norm = self.norm();
        if norm == 0.0 || !norm.is_finite() {
            Err(Error::DegenerateVector(*self))
        } else {
            Ok(self / norm)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_onto_axis() {
        let v = V3::new(3.0, 4.0, 5.0);
        let p = v.project(&V3::new(0.0, 2.0, 0.0));
        assert_eq!(p, V3::new(0.0, 4.0, 0.0));
        let rest = v - p;
        assert!(rest.dot(&V3::y()).abs() < 1e-12);
    }

    #[test]
    fn unit_of_zero_vector_is_rejected() {
        assert!(V3::zeros().try_unit().is_err());
        let u = V3::new(0.0, 3.0, 4.0).try_unit().unwrap();
        assert!((u.norm() - 1.0).abs() < 1e-12);
        assert!((u[1] - 0.6).abs() < 1e-12);
    }

    #[test]
    fn point_vector_arithmetic() {
        let a = P3::new(1.0, 2.0, 3.0);
        let b = P3::new(0.5, 0.0, -1.0);
        let d: V3 = a - b;
        assert_eq!(d, V3::new(0.5, 2.0, 4.0));
        assert_eq!(b + d, a);
        assert_eq!(2.0 * d, d * 2.0);
        assert_eq!(-d + d, V3::zeros());
    }
}
