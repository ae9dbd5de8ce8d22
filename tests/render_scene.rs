use mirrortrace::loader::{load_scene, parse_scene};
use mirrortrace::renderer::{RenderConfig, Renderer};
use std::sync::Arc;

const FLOOR: &str = r#"{
    "camera": [0.5, -3.0, 0.5],
    "light": [0.5, -1.0, 4.0],
    "antialias": 1,
    "objects": [
        {"type": "plane", "reflectivity": 0.0, "color": [255, 255, 255],
         "point": [0, 0, -1], "normal": [0, 0, 1],
         "checkerboard": true, "color2": [0, 0, 0], "orientation": [1, 0, 0]}
    ]
}"#;

#[test]
fn sky_above_horizon_floor_below() {
    let scene = Arc::new(parse_scene(FLOOR).unwrap());
    let config = RenderConfig {
        width: 20,
        height: 20,
        nthread: 4,
    };
    let image = Renderer.render(scene, &config).unwrap();

    let mut count = 0;
    let mut floor_pixels = 0;
    image.for_each_pixel(|_, y, rgb| {
        count += 1;
        if y < 10 {
            assert_eq!(rgb, [135, 206, 235], "row {}", y);
        } else if rgb != [135, 206, 235] {
            floor_pixels += 1;
        }
    });
    assert_eq!(count, 400);
    assert_eq!(floor_pixels, 200);
}

#[test]
fn demo_scene_renders_to_png() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/scenes/mirrors.json");
    let scene = load_scene(path).unwrap();
    assert_eq!(scene.objects().len(), 4);

    let config = RenderConfig {
        width: 24,
        height: 16,
        nthread: 2,
    };
    let image = Renderer.render(Arc::new(scene), &config).unwrap();
    for y in 0..image.h() {
        for x in 0..image.w() {
            assert!(image.at(x, y).is_finite(), "pixel ({}, {})", x, y);
        }
    }

    let out = std::env::temp_dir().join(format!("mirrortrace-{}.png", std::process::id()));
    image.write_png(&out).unwrap();
    let bytes = std::fs::read(&out).unwrap();
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    std::fs::remove_file(&out).unwrap();
}
