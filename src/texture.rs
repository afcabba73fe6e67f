use crate::shape::shapes::Plane;
use crate::*;
use log::*;
use std::path::Path;

/// How many times a texture repeats across a plane's extent.
pub const NUM_TILES: f32 = 10.0;

pub struct Texture {
    w: u32,
    h: u32,
    buf: Vec<RGB>,
}

impl Texture {
    pub fn from_pixels(w: u32, h: u32, buf: Vec<RGB>) -> Self {
        assert_eq!(buf.len(), (w * h) as usize);
        Texture { w, h, buf }
    }

    pub fn load(path: &Path) -> Result<Self, ::image::ImageError> {
        let img = ::image::open(path)?.to_rgb();
        let (w, h) = (img.width(), img.height());
        let buf = img
            .pixels()
            .map(|p| RGB::from_u8(p[0], p[1], p[2]))
            .collect();
        Ok(Texture { w, h, buf })
    }

    pub fn w(&self) -> u32 {
        self.w
    }

    pub fn h(&self) -> u32 {
        self.h
    }

    /// Nearest-pixel lookup from continuous coordinates.
    pub fn at(&self, i: f32, j: f32) -> RGB {
        let x = (i.max(0.0) as u32).min(self.w - 1);
        let y = (j.max(0.0) as u32).min(self.h - 1);
        self.buf[(y * self.w + x) as usize]
    }
}

/// Wrap a continuous pixel coordinate into the texture's extent.
/// Coordinates left of zero mirror across the origin instead of repeating.
pub fn wrap(x: f32, period: f32) -> f32 {
    if x < 0.0 {
        -(x % period)
    } else {
        x % period
    }
}

/// Offsets along a plane's two in-plane axes to wrapped texture pixel
/// coordinates: rescale the physical extent to NUM_TILES repeats, convert
/// to pixels with a half-texel shift, then wrap.
pub fn tile_coords(
    width: f32,
    height: f32,
    off_u: f32,
    off_v: f32,
    tex_w: f32,
    tex_h: f32,
) -> (f32, f32) {
    let u = off_u / width * NUM_TILES;
    let v = off_v / height * NUM_TILES;
    let i = u * tex_w - 0.5;
    let j = v * tex_h - 0.5;
    (wrap(i, tex_w), wrap(j, tex_h))
}

/// Horizontal surfaces tile along x/z.
pub fn map_horizontal(plane: &Plane, point: &P3, tex: &Texture) -> (f32, f32) {
    let off = point - plane.position;
    tile_coords(
        plane.width,
        plane.height,
        off[0],
        off[2],
        tex.w() as f32,
        tex.h() as f32,
    )
}

/// Vertical front/back surfaces tile along x/y.
pub fn map_vertical(plane: &Plane, point: &P3, tex: &Texture) -> (f32, f32) {
    let off = point - plane.position;
    tile_coords(
        plane.width,
        plane.height,
        off[0],
        off[1],
        tex.w() as f32,
        tex.h() as f32,
    )
}

pub struct TexturePair {
    pub diffuse: Texture,
    pub specular: Texture,
}

#[derive(Default)]
pub struct TextureSet {
    pub horizontal: Option<TexturePair>,
    pub vertical: Option<TexturePair>,
}

const HORIZONTAL_FILES: (&str, &str) = ("hDiffuse.jpg", "hSpecular.jpg");
const VERTICAL_FILES: (&str, &str) = ("vDiffuse.jpg", "vSpecular.jpg");

impl TextureSet {
    /// Load the four fixed-name tile textures from `dir`. A pair that fails
    /// to load is logged and left empty; affected surfaces fall back to
    /// their flat colors.
    pub fn load(dir: &Path) -> Self {
        TextureSet {
            horizontal: Self::load_pair(dir, HORIZONTAL_FILES),
            vertical: Self::load_pair(dir, VERTICAL_FILES),
        }
    }

    fn load_pair(dir: &Path, (diffuse, specular): (&str, &str)) -> Option<TexturePair> {
        let load = |name: &str| match Texture::load(&dir.join(name)) {
            Ok(tex) => Some(tex),
            Err(e) => {
                warn!("failed to load texture {}: {}", name, e);
                None
            }
        };
        Some(TexturePair {
            diffuse: load(diffuse)?,
            specular: load(specular)?,
        })
    }
}
