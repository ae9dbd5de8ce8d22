use crate::camera::Camera;
use crate::error::{Error, Result};
use crate::image::Image;
use crate::manager::*;
use crate::scene::Scene;
use crate::*;

use log::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::sync::{mpsc, Arc, Mutex};

pub mod whitted;
use whitted::TraceStats;

#[derive(Clone, Copy, Debug)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    pub nthread: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            width: 512,
            height: 512,
            nthread: num_cpus::get(),
        }
    }
}

impl RenderConfig {
    pub fn validate(&self) -> Result<()> {
        let pixels = (self.width as usize).checked_mul(self.height as usize);
        if self.width == 0 || self.height == 0 || pixels.is_none() {
            return Err(Error::InvalidResolution {
                width: self.width,
                height: self.height,
            });
        }
        if self.nthread == 0 {
            return Err(Error::InvalidThreadCount);
        }
        Ok(())
    }
}

/// Average of `scene.antialias()` jittered samples inside pixel `(xi, yi)`.
pub fn color_pixel<R: Rng + ?Sized>(
    scene: &Scene,
    camera: &Camera,
    xi: u32,
    yi: u32,
    rng: &mut R,
) -> RGB {
    sample_pixel(scene, camera, xi, yi, rng, &mut TraceStats::default())
}

fn sample_pixel<R: Rng + ?Sized>(
    scene: &Scene,
    camera: &Camera,
    xi: u32,
    yi: u32,
    rng: &mut R,
    stats: &mut TraceStats,
) -> RGB {
    let mut color = RGB::black();
    for _ in 0..scene.antialias() {
        let ray = camera.sample_ray(xi, yi, rng);
        color += whitted::color_ray_with_stats(scene, &ray, 0, stats);
    }
    color / f64::from(scene.antialias())
}

fn render_row<R: Rng + ?Sized>(
    scene: &Scene,
    camera: &Camera,
    width: u32,
    yi: u32,
    rng: &mut R,
    stats: &mut TraceStats,
) -> Vec<RGB> {
    (0..width)
        .map(|xi| {
            let color = sample_pixel(scene, camera, xi, yi, rng, stats);
            if !color.is_finite() {
                warn!("color at ({}, {}) is not finite: {:?}", xi, yi, color);
            }
            color
        })
        .collect()
}

struct Row {
    yi: u32,
    pixels: Vec<RGB>,
    stats: TraceStats,
}

pub struct Renderer;

impl Renderer {
    /// Renders on `config.nthread` worker threads, each pulling whole rows and
    /// drawing jitter from its own generator.
    pub fn render(&self, scene: Arc<Scene>, config: &RenderConfig) -> Result<Image> {
        use std::thread;
        config.validate()?;
        info!(
            "rendering {}x{}, {} objects, {} samples per pixel, {} threads",
            config.width,
            config.height,
            scene.objects().len(),
            scene.antialias(),
            config.nthread
        );

        let camera = Camera::new(*scene.camera(), config.width);
        let manager = Arc::new(Mutex::new(Manager::new(config.height)));
        let (tx, rx) = mpsc::channel();
        let mut threads = vec![];
        for i in 0..config.nthread {
            let scene = scene.clone();
            let camera = camera.clone();
            let manager = manager.clone();
            let tx = tx.clone();
            let width = config.width;
            let thread = thread::spawn(move || {
                Self::render_thread(&scene, &camera, width, i, &manager, tx)
            });
            threads.push(thread);
        }
        drop(tx);

        let mut image = Image::new(config.width, config.height);
        let mut stats = TraceStats::default();
        for row in rx {
            for (xi, color) in row.pixels.into_iter().enumerate() {
                *image.at_mut(xi as u32, row.yi) = color;
            }
            stats.merge(&row.stats);
            if let Ok(mut manager) = manager.lock() {
                let done = manager.complete();
                debug!("row {} done ({}/{})", row.yi, done, manager.rows());
            }
        }
        for thread in threads {
            if let Err(panic) = thread.join() {
                std::panic::resume_unwind(panic);
            }
        }

        info!(
            "traced {} rays, deepest reflection {}",
            stats.rays, stats.deepest
        );
        Ok(image)
    }

    /// Single-threaded render drawing all jitter from `rng`, row by row.
    pub fn render_with_rng<R: Rng + ?Sized>(
        &self,
        scene: &Scene,
        config: &RenderConfig,
        rng: &mut R,
    ) -> Result<Image> {
        config.validate()?;
        let camera = Camera::new(*scene.camera(), config.width);
        let mut image = Image::new(config.width, config.height);
        let mut stats = TraceStats::default();
        for yi in 0..config.height {
            let pixels = render_row(scene, &camera, config.width, yi, rng, &mut stats);
            for (xi, color) in pixels.into_iter().enumerate() {
                *image.at_mut(xi as u32, yi) = color;
            }
        }
        debug!("traced {} rays", stats.rays);
        Ok(image)
    }

    fn render_thread(
        scene: &Scene,
        camera: &Camera,
        width: u32,
        thread_id: usize,
        manager: &Mutex<Manager>,
        tx: mpsc::Sender<Row>,
    ) {
        let mut rng = SmallRng::from_entropy();
        loop {
            let task = match manager.lock() {
                Ok(mut manager) => manager.next(),
                Err(_) => None,
            };
            let task = match task {
                Some(task) => task,
                None => break,
            };

            let mut stats = TraceStats::default();
            let pixels = render_row(scene, camera, width, task.row, &mut rng, &mut stats);
            let row = Row {
                yi: task.row,
                pixels,
                stats,
            };
            if tx.send(row).is_err() {
                break;
            }
        }
        debug!("render thread {} finished", thread_id);
    }
}
