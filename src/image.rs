use crate::*;
use std::path::Path;
use std::sync::{Arc, Mutex};

pub struct Image {
    w: u32,
    h: u32,
    buf: Vec<RGB>,
}

impl Image {
    pub fn new(w: u32, h: u32) -> Self {
        let mut buf = Vec::new();
        buf.resize((w * h) as usize, RGB::all(0.0));
        Image { w, h, buf }
    }

    pub fn at(&self, x: u32, y: u32) -> &RGB {
        &self.buf[(y * self.w + x) as usize]
    }

    pub fn at_mut(&mut self, x: u32, y: u32) -> &mut RGB {
        &mut self.buf[(y * self.w + x) as usize]
    }

    pub fn w(&self) -> u32 {
        self.w
    }

    pub fn h(&self) -> u32 {
        self.h
    }

    /// Quantize to 8-bit RGB and write a PNG.
    pub fn write_png(&self, path: &Path) -> std::io::Result<()> {
        let mut out = ::image::RgbImage::new(self.w, self.h);
        for (x, y, pixel) in out.enumerate_pixels_mut() {
            let c = self.at(x, y).to_u8();
            for i in 0..3 {
                pixel[i] = c[i];
            }
        }
        out.save(path)
    }
}

/// Film shared between worker threads. Workers write disjoint pixels in
/// batches under a short-lived lock.
#[derive(Clone)]
pub struct FilmArc {
    w: u32,
    h: u32,
    film: Arc<Mutex<Image>>,
}

impl FilmArc {
    pub fn new(image: Image) -> Self {
        FilmArc {
            w: image.w,
            h: image.h,
            film: Arc::new(Mutex::new(image)),
        }
    }

    pub fn w(&self) -> u32 {
        self.w
    }

    pub fn h(&self) -> u32 {
        self.h
    }

    pub fn with_lock<R>(&self, f: impl FnOnce(&mut Image) -> R) -> Option<R> {
        self.film.lock().ok().map(|mut film| f(&mut film))
    }

    /// Recover the image once every clone handed to a render thread has
    /// been dropped.
    pub fn into_image(self) -> Option<Image> {
        Arc::try_unwrap(self.film).ok().and_then(|m| m.into_inner().ok())
    }
}
