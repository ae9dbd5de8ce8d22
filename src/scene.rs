use crate::error::{Error, Result};
use crate::object::Object;
use crate::*;

/// Illumination constants shared by every shading evaluation.
#[derive(Clone, Debug)]
pub struct Lighting {
    pub ambient: f64,
    pub specular: f64,
    pub specular_power: i32,
    pub max_reflections: u32,
    pub background: RGB,
}

impl Default for Lighting {
    fn default() -> Self {
        Lighting {
            ambient: 0.2,
            specular: 0.5,
            specular_power: 8,
            max_reflections: 6,
            background: RGB::new(135.0, 206.0, 235.0),
        }
    }
}

pub struct Scene {
    camera: P3,
    light: P3,
    antialias: u32,
    lighting: Lighting,
    objects: Vec<Object>,
}

impl Scene {
    pub fn new(camera: P3, light: P3, antialias: u32, objects: Vec<Object>) -> Result<Self> {
        if antialias == 0 {
            return Err(Error::InvalidAntialias);
        }
        Ok(Scene {
            camera,
            light,
            antialias,
            lighting: Lighting::default(),
            objects,
        })
    }

    pub fn set_lighting(mut self, lighting: Lighting) -> Self {
        self.lighting = lighting;
        self
    }

    pub fn set_antialias(mut self, antialias: u32) -> Result<Self> {
        if antialias == 0 {
            return Err(Error::InvalidAntialias);
        }
        self.antialias = antialias;
        Ok(self)
    }

    pub fn camera(&self) -> &P3 {
        &self.camera
    }

    pub fn light(&self) -> &P3 {
        &self.light
    }

    pub fn antialias(&self) -> u32 {
        self.antialias
    }

    pub fn lighting(&self) -> &Lighting {
        &self.lighting
    }

    pub fn objects(&self) -> &[Object] {
        &self.objects
    }

    /// Nearest object along `ray`; on equal distances the earlier object wins.
    pub fn nearest_intersection(&self, ray: &Ray) -> Option<(f64, &Object)> {
        let mut nearest = None::<(f64, &Object)>;
        for o in self.objects.iter() {
            if let Some(t) = o.collision(ray) {
                if nearest.map_or(true, |(best, _)| t < best) {
                    nearest = Some((t, o));
                }
            }
        }
        nearest
    }

    /// Anything along the ray from `pos` towards the light blocks it, even
    /// past the light itself.
    pub fn in_shadow(&self, pos: &P3) -> bool {
        self.nearest_intersection(&Ray::from_to(pos, &self.light))
            .is_some()
    }
}
