use crate::error::Result;
use crate::*;
use std::path::Path;

/// Averaged, unclamped pixel colors. Quantization only happens on the way out.
#[derive(Clone, Debug)]
pub struct Image {
    w: u32,
    h: u32,
    buf: Vec<RGB>,
}

// `w * h` may not fit in u32
fn index(w: u32, x: u32, y: u32) -> usize {
    y as usize * w as usize + x as usize
}

impl Image {
    pub fn new(w: u32, h: u32) -> Self {
        let mut buf = Vec::new();
        buf.resize(w as usize * h as usize, RGB::black());
        Image { w, h, buf }
    }

    pub fn at(&self, x: u32, y: u32) -> &RGB {
        &self.buf[index(self.w, x, y)]
    }

    pub fn at_mut(&mut self, x: u32, y: u32) -> &mut RGB {
        &mut self.buf[index(self.w, x, y)]
    }

    pub fn w(&self) -> u32 {
        self.w
    }
    pub fn h(&self) -> u32 {
        self.h
    }

    /// Feeds every pixel, row by row, to `sink` as clamped 8-bit channels.
    pub fn for_each_pixel<F: FnMut(u32, u32, [u8; 3])>(&self, mut sink: F) {
        for y in 0..self.h {
            for x in 0..self.w {
                sink(x, y, self.at(x, y).to_bytes());
            }
        }
    }

    pub fn to_rgb_image(&self) -> ::image::RgbImage {
        let mut img = ::image::RgbImage::new(self.w, self.h);
        self.for_each_pixel(|x, y, rgb| img.put_pixel(x, y, ::image::Rgb(rgb)));
        img
    }

    pub fn write_png<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        self.to_rgb_image()
            .save_with_format(path, ::image::ImageFormat::Png)?;
        Ok(())
    }
}
