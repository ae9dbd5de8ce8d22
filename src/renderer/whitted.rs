use super::*;
use crate::math::VectorExt;

/// Origin offset applied to secondary rays so they do not re-hit their own surface.
const EPSILON: f64 = 1e-6;

/// Surfaces this dull never spawn a reflection ray.
const MIN_REFLECTIVITY: f64 = 0.003;

#[derive(Clone, Copy, Debug, Default)]
pub struct TraceStats {
    pub rays: u64,
    pub deepest: u32,
}

impl TraceStats {
    pub fn merge(&mut self, another: &Self) {
        self.rays += another.rays;
        self.deepest = self.deepest.max(another.deepest);
    }
}

/// Mirror image of `v` about the unit normal `n`.
pub fn reflect(v: &V3, n: &V3) -> V3 {
    v + 2.0 * (v.project(n) - v)
}

pub fn color_ray(scene: &Scene, ray: &Ray, refls: u32) -> RGB {
    color_ray_with_stats(scene, ray, refls, &mut TraceStats::default())
}

pub fn color_ray_with_stats(scene: &Scene, ray: &Ray, refls: u32, stats: &mut TraceStats) -> RGB {
    stats.rays += 1;
    stats.deepest = stats.deepest.max(refls);

    let lighting = scene.lighting();
    let (t, obj) = match scene.nearest_intersection(ray) {
        Some(hit) => hit,
        None => return lighting.background,
    };

    let collision = ray.at(t);
    let reflectivity = obj.reflectivity();
    let amb = lighting.ambient * (1.0 - reflectivity);
    let color = obj.color(&collision);
    let mut acc = amb * color;
    let norm = obj.normal(&collision).normalize();

    if !scene.in_shadow(&(collision + EPSILON * norm)) {
        if let Some(light_dir) = (scene.light() - collision).try_normalize(0.0) {
            let diffuse = norm.dot(&light_dir).max(0.0);
            acc += (1.0 - amb) * (1.0 - reflectivity) * diffuse * color;

            if let Some(half) = (light_dir + (-ray.dir).normalize()).try_normalize(0.0) {
                let spec = half.dot(&norm).max(0.0).powi(lighting.specular_power);
                acc += lighting.specular * spec * RGB::white();
            }
        }
    }

    if refls < lighting.max_reflections && reflectivity > MIN_REFLECTIVITY {
        let dir = reflect(&-ray.dir.normalize(), &norm);
        let next = Ray::new(collision + EPSILON * dir, dir);
        let reflected = color_ray_with_stats(scene, &next, refls + 1, stats);
        acc += (1.0 - amb) * reflectivity * reflected;
    }

    acc
}

/// Color seen through film point `p`.
pub fn color_point(scene: &Scene, p: &P3) -> RGB {
    color_ray(scene, &Ray::new(*p, p - scene.camera()), 0)
}
