use crate::shape::Shape;
use crate::texture::{self, TextureSet};
use crate::*;

/// Per-object reflectance data. A `textured` surface samples the tiled
/// texture set when its orientation is recognized.
#[derive(Clone, Debug)]
pub struct Surface {
    pub diffuse: RGB,
    pub specular: RGB,
    pub textured: bool,
}

impl Surface {
    pub fn flat(diffuse: RGB, specular: RGB) -> Self {
        Surface {
            diffuse,
            specular,
            textured: false,
        }
    }

    pub fn tiled(diffuse: RGB, specular: RGB) -> Self {
        Surface {
            diffuse,
            specular,
            textured: true,
        }
    }

    /// Diffuse and specular colors at `point`. Texture lookups replace the
    /// flat colors on upward-facing (+y) and front-facing (+z) planes;
    /// every other orientation keeps the flat colors. Both textures of a
    /// pair are sampled at coordinates derived from the diffuse texture's
    /// dimensions.
    pub fn resolve(&self, shape: &Shape, point: &P3, textures: &TextureSet) -> (RGB, RGB) {
        if self.textured {
            if let Shape::Plane(plane) = shape {
                if plane.normal == V3::y() {
                    if let Some(pair) = &textures.horizontal {
                        let (i, j) = texture::map_horizontal(plane, point, &pair.diffuse);
                        return (pair.diffuse.at(i, j), pair.specular.at(i, j));
                    }
                } else if plane.normal == V3::z() {
                    if let Some(pair) = &textures.vertical {
                        let (i, j) = texture::map_vertical(plane, point, &pair.diffuse);
                        return (pair.diffuse.at(i, j), pair.specular.at(i, j));
                    }
                }
            }
        }
        (self.diffuse, self.specular)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::shapes::Plane;
    use crate::texture::{Texture, TexturePair};

    fn one_by_one(color: RGB) -> Texture {
        Texture::from_pixels(1, 1, vec![color])
    }

    fn horizontal_only() -> TextureSet {
        TextureSet {
            horizontal: Some(TexturePair {
                diffuse: one_by_one(RGB::new(1.0, 0.0, 0.0)),
                specular: one_by_one(RGB::new(0.0, 1.0, 0.0)),
            }),
            vertical: None,
        }
    }

    #[test]
    fn textured_floor_samples_horizontal_pair() {
        let shape = Shape::from(Plane::new(P3::new(0.0, -2.0, 0.0), V3::y(), 10.0, 10.0));
        let surface = Surface::tiled(RGB::all(0.5), RGB::all(0.5));
        let (kd, ks) = surface.resolve(&shape, &P3::new(0.3, -2.0, 0.7), &horizontal_only());
        assert_eq!(kd, RGB::new(1.0, 0.0, 0.0));
        assert_eq!(ks, RGB::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn unrecognized_orientation_keeps_flat_colors() {
        // Downward-facing planes are bounded like horizontal ones but do
        // not sample textures.
        let shape = Shape::from(Plane::new(P3::origin(), -V3::y(), 10.0, 10.0));
        let surface = Surface::tiled(RGB::all(0.5), RGB::all(0.25));
        let (kd, ks) = surface.resolve(&shape, &P3::origin(), &horizontal_only());
        assert_eq!(kd, RGB::all(0.5));
        assert_eq!(ks, RGB::all(0.25));
    }

    #[test]
    fn missing_pair_keeps_flat_colors() {
        let shape = Shape::from(Plane::new(P3::origin(), V3::y(), 10.0, 10.0));
        let surface = Surface::tiled(RGB::all(0.5), RGB::all(0.25));
        let (kd, ks) = surface.resolve(&shape, &P3::origin(), &TextureSet::default());
        assert_eq!(kd, RGB::all(0.5));
        assert_eq!(ks, RGB::all(0.25));
    }

    #[test]
    fn flat_surface_ignores_textures() {
        let shape = Shape::from(Plane::new(P3::origin(), V3::y(), 10.0, 10.0));
        let surface = Surface::flat(RGB::all(0.5), RGB::all(0.25));
        let (kd, _) = surface.resolve(&shape, &P3::origin(), &horizontal_only());
        assert_eq!(kd, RGB::all(0.5));
    }
}
