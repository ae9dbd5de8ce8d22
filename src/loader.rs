//! JSON scene files.
//!
//! ```json
//! {
//!   "camera": [0.5, -3.0, 0.5],
//!   "light": [3.0, -3.0, 3.0],
//!   "antialias": 4,
//!   "objects": [
//!     {"type": "sphere", "reflectivity": 0.2, "color": [255, 0, 0],
//!      "center": [0.5, 5.0, 0.5], "radius": 1.0},
//!     {"type": "plane", "reflectivity": 0.0, "color": [255, 255, 255],
//!      "point": [0, 0, -1], "normal": [0, 0, 1],
//!      "checkerboard": true, "color2": [0, 0, 0], "orientation": [1, 0, 0]}
//!   ]
//! }
//! ```

use crate::error::{Error, Result};
use crate::object::Object;
use crate::scene::Scene;
use crate::shape::shapes::{Plane, Sphere};
use crate::*;

use log::*;
use serde::Deserialize;
use std::path::Path;

type Triple = [f64; 3];

fn point(t: Triple) -> P3 {
    P3::new(t[0], t[1], t[2])
}

fn vector(t: Triple) -> V3 {
    V3::new(t[0], t[1], t[2])
}

fn color(t: Triple) -> RGB {
    RGB::new(t[0], t[1], t[2])
}

#[derive(Deserialize, Debug)]
struct SceneDesc {
    camera: Triple,
    light: Triple,
    antialias: u32,
    objects: Vec<ObjectDesc>,
}

// `type` is read by hand so an unrecognized value gets its own error.
#[derive(Deserialize, Debug)]
struct ObjectDesc {
    #[serde(rename = "type")]
    kind: String,
    reflectivity: f64,
    color: Triple,
    center: Option<Triple>,
    radius: Option<f64>,
    point: Option<Triple>,
    normal: Option<Triple>,
    #[serde(default)]
    checkerboard: bool,
    color2: Option<Triple>,
    orientation: Option<Triple>,
}

fn required<T>(value: Option<T>, object: &'static str, field: &'static str) -> Result<T> {
    value.ok_or(Error::MissingField { object, field })
}

impl ObjectDesc {
    fn build(self) -> Result<Object> {
        match self.kind.as_str() {
            "sphere" => {
                let center = required(self.center, "sphere", "center")?;
                let radius = required(self.radius, "sphere", "radius")?;
                let sphere = Sphere::new(point(center), radius, color(self.color))?;
                Object::new(sphere, self.reflectivity)
            }
            "plane" => {
                let p = required(self.point, "plane", "point")?;
                let normal = required(self.normal, "plane", "normal")?;
                let mut plane = Plane::new(point(p), vector(normal), color(self.color))?;
                if self.checkerboard {
                    let color2 = required(self.color2, "plane", "color2")?;
                    let orientation = required(self.orientation, "plane", "orientation")?;
                    plane = plane.with_checkerboard(color(color2), vector(orientation))?;
                }
                Object::new(plane, self.reflectivity)
            }
            other => Err(Error::UnknownObjectType(other.to_string())),
        }
    }
}

pub fn parse_scene(text: &str) -> Result<Scene> {
    let desc: SceneDesc = serde_json::from_str(text)?;
    let objects = desc
        .objects
        .into_iter()
        .map(ObjectDesc::build)
        .collect::<Result<Vec<_>>>()?;
    debug!("parsed scene with {} objects", objects.len());
    Scene::new(point(desc.camera), point(desc.light), desc.antialias, objects)
}

pub fn load_scene<P: AsRef<Path>>(path: P) -> Result<Scene> {
    let path = path.as_ref();
    info!("loading scene from {}", path.display());
    let text = std::fs::read_to_string(path)?;
    parse_scene(&text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::Shape;

    const SCENE: &str = r#"{
        "camera": [0.5, -3.0, 0.5],
        "light": [3, -3, 3],
        "antialias": 4,
        "objects": [
            {"type": "sphere", "reflectivity": 0.25, "color": [255, 0, 0],
             "center": [0.5, 5.0, 0.5], "radius": 1.5},
            {"type": "plane", "reflectivity": 0.0, "color": [255, 255, 255],
             "point": [0, 0, -1], "normal": [0, 0, 1], "checkerboard": false},
            {"type": "plane", "reflectivity": 0.5, "color": [255, 255, 255],
             "point": [0, 9, 0], "normal": [0, -1, 0],
             "checkerboard": true, "color2": [0, 0, 0], "orientation": [1, 0, 0]}
        ]
    }"#;

    #[test]
    fn parses_all_object_kinds() {
        let scene = parse_scene(SCENE).unwrap();
        assert_eq!(*scene.camera(), P3::new(0.5, -3.0, 0.5));
        assert_eq!(*scene.light(), P3::new(3.0, -3.0, 3.0));
        assert_eq!(scene.antialias(), 4);
        let objects = scene.objects();
        assert_eq!(objects.len(), 3);

        match objects[0].shape() {
            Shape::Sphere(s) => {
                assert_eq!(*s.center(), P3::new(0.5, 5.0, 0.5));
                assert_eq!(s.radius(), 1.5);
            }
            other => panic!("expected sphere, got {:?}", other),
        }
        assert_eq!(objects[0].reflectivity(), 0.25);

        match objects[1].shape() {
            Shape::Plane(p) => assert!(p.checkerboard().is_none()),
            other => panic!("expected plane, got {:?}", other),
        }
        match objects[2].shape() {
            Shape::Plane(p) => {
                let board = p.checkerboard().unwrap();
                assert_eq!(board.color2, RGB::black());
                assert_eq!(board.orientation, V3::x());
            }
            other => panic!("expected plane, got {:?}", other),
        }
    }

    #[test]
    fn checkerboard_flag_is_optional() {
        let text = r#"{"camera": [0,0,0], "light": [0,0,0], "antialias": 1, "objects": [
            {"type": "plane", "reflectivity": 0, "color": [1, 2, 3],
             "point": [0, 0, 0], "normal": [0, 0, 1]}]}"#;
        assert_eq!(parse_scene(text).unwrap().objects().len(), 1);
    }

    #[test]
    fn unknown_type_is_an_error() {
        let text = r#"{"camera": [0,0,0], "light": [0,0,0], "antialias": 1, "objects": [
            {"type": "cube", "reflectivity": 0, "color": [1, 2, 3]}]}"#;
        match parse_scene(text) {
            Err(Error::UnknownObjectType(t)) => assert_eq!(t, "cube"),
            other => panic!("unexpected {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn checkerboard_needs_second_color() {
        let text = r#"{"camera": [0,0,0], "light": [0,0,0], "antialias": 1, "objects": [
            {"type": "plane", "reflectivity": 0, "color": [1, 2, 3],
             "point": [0, 0, 0], "normal": [0, 0, 1],
             "checkerboard": true, "orientation": [1, 0, 0]}]}"#;
        match parse_scene(text) {
            Err(Error::MissingField { field, .. }) => assert_eq!(field, "color2"),
            other => panic!("unexpected {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn invalid_values_are_rejected() {
        let zero_normal = r#"{"camera": [0,0,0], "light": [0,0,0], "antialias": 1, "objects": [
            {"type": "plane", "reflectivity": 0, "color": [1, 2, 3],
             "point": [0, 0, 0], "normal": [0, 0, 0]}]}"#;
        assert!(matches!(
            parse_scene(zero_normal),
            Err(Error::DegenerateVector(_))
        ));

        let no_samples = r#"{"camera": [0,0,0], "light": [0,0,0], "antialias": 0, "objects": []}"#;
        assert!(matches!(
            parse_scene(no_samples),
            Err(Error::InvalidAntialias)
        ));

        assert!(matches!(parse_scene("{"), Err(Error::Parse(_))));
    }

    #[test]
    fn missing_file_is_io_error() {
        assert!(matches!(
            load_scene("/nonexistent/scene.json"),
            Err(Error::Io(_))
        ));
    }
}
