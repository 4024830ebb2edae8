//! Cubemap assembly from a single cross-layout image.
//!
//! The source image is a 3-wide by 2-tall grid of square tiles:
//!
//! ```text
//!   -x  +z  +x
//!   -y  +y  -z
//! ```
//!
//! Faces are sliced out by fixed tile coordinates and uploaded as the six
//! layers of a cube texture.

use image::{ImageBuffer, Rgba, RgbaImage};
use thiserror::Error;

/// Tile coordinates (column, row) in the cross image, listed in wgpu cube
/// layer order: +x, -x, +y, -y, +z, -z.
const FACE_TILES: [(u32, u32); 6] = [
    (2, 0), // +x
    (0, 0), // -x
    (1, 1), // +y
    (0, 1), // -y
    (1, 0), // +z
    (2, 1), // -z
];

const GRID_COLS: u32 = 3;
const GRID_ROWS: u32 = 2;

#[derive(Debug, Error)]
pub enum CubemapError {
    #[error("failed to decode skybox image: {0}")]
    Decode(#[from] image::ImageError),

    #[error("skybox image is {width}x{height}, expected a 3x2 grid of squares")]
    BadLayout { width: u32, height: u32 },
}

/// The six sliced faces of a cubemap, in wgpu layer order
pub struct CubemapFaces {
    pub size: u32,
    pub faces: [RgbaImage; 6],
}

impl CubemapFaces {
    /// Slice a cross-layout image into faces.
    pub fn from_cross(image: &RgbaImage) -> Result<Self, CubemapError> {
        let (width, height) = image.dimensions();
        let tile = width / GRID_COLS;
        if tile == 0 || width != tile * GRID_COLS || height != tile * GRID_ROWS {
            return Err(CubemapError::BadLayout { width, height });
        }

        let faces = FACE_TILES.map(|(col, row)| {
            image::imageops::crop_imm(image, col * tile, row * tile, tile, tile).to_image()
        });

        Ok(Self { size: tile, faces })
    }

    /// Load and slice a cross-layout image file.
    pub fn load(path: &std::path::Path) -> Result<Self, CubemapError> {
        let image = image::open(path)?.to_rgba8();
        Self::from_cross(&image)
    }

    /// Upload the faces as a cube texture and build its view and sampler.
    pub fn create_texture(
        &self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
    ) -> (wgpu::TextureView, wgpu::Sampler) {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Skybox Cubemap"),
            size: wgpu::Extent3d {
                width: self.size,
                height: self.size,
                depth_or_array_layers: 6,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8UnormSrgb,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        for (layer, face) in self.faces.iter().enumerate() {
            queue.write_texture(
                wgpu::ImageCopyTexture {
                    texture: &texture,
                    mip_level: 0,
                    origin: wgpu::Origin3d {
                        x: 0,
                        y: 0,
                        z: layer as u32,
                    },
                    aspect: wgpu::TextureAspect::All,
                },
                face.as_raw(),
                wgpu::ImageDataLayout {
                    offset: 0,
                    bytes_per_row: Some(4 * self.size),
                    rows_per_image: Some(self.size),
                },
                wgpu::Extent3d {
                    width: self.size,
                    height: self.size,
                    depth_or_array_layers: 1,
                },
            );
        }

        let view = texture.create_view(&wgpu::TextureViewDescriptor {
            label: Some("Skybox Cubemap View"),
            dimension: Some(wgpu::TextureViewDimension::Cube),
            ..Default::default()
        });

        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("Skybox Sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });

        (view, sampler)
    }
}

/// Procedural fallback sky: a vertical gradient cross so the viewer renders
/// without any asset on disk.
pub fn procedural_cross(tile: u32) -> RgbaImage {
    let zenith = [82.0_f32, 140.0, 214.0];
    let horizon = [214.0_f32, 230.0, 242.0];
    let floor = [46.0_f32, 62.0, 88.0];

    ImageBuffer::from_fn(tile * GRID_COLS, tile * GRID_ROWS, |x, y| {
        let col = x / tile;
        let row = y / tile;
        let fy = (y % tile) as f32 / tile as f32;

        // Altitude of this pixel on the unit sphere, per face
        let altitude = match (col, row) {
            (1, 1) => 1.0,             // +y looks straight up
            (0, 1) => -1.0,            // -y looks straight down
            _ => 0.5 - fy,             // side faces span horizon +/- 0.5
        };

        let (a, b, t) = if altitude >= 0.0 {
            (horizon, zenith, altitude)
        } else {
            (horizon, floor, -altitude)
        };
        let mix = |i: usize| (a[i] + (b[i] - a[i]) * t) as u8;
        Rgba([mix(0), mix(1), mix(2), 255])
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Build a cross where every tile is a solid unique color keyed by
    /// (col, row).
    fn keyed_cross(tile: u32) -> RgbaImage {
        ImageBuffer::from_fn(tile * GRID_COLS, tile * GRID_ROWS, |x, y| {
            let col = (x / tile) as u8;
            let row = (y / tile) as u8;
            Rgba([col, row, 0, 255])
        })
    }

    #[test]
    fn test_face_slicing_order() {
        let faces = CubemapFaces::from_cross(&keyed_cross(8)).unwrap();
        assert_eq!(faces.size, 8);

        let tile_of = |i: usize| {
            let px = faces.faces[i].get_pixel(0, 0).0;
            (u32::from(px[0]), u32::from(px[1]))
        };

        // wgpu layer order: +x, -x, +y, -y, +z, -z
        assert_eq!(tile_of(0), (2, 0));
        assert_eq!(tile_of(1), (0, 0));
        assert_eq!(tile_of(2), (1, 1));
        assert_eq!(tile_of(3), (0, 1));
        assert_eq!(tile_of(4), (1, 0));
        assert_eq!(tile_of(5), (2, 1));
    }

    #[test]
    fn test_faces_are_square_tiles() {
        let faces = CubemapFaces::from_cross(&keyed_cross(16)).unwrap();
        for face in &faces.faces {
            assert_eq!(face.dimensions(), (16, 16));
        }
    }

    #[test]
    fn test_bad_layout_rejected() {
        let not_a_cross = RgbaImage::new(100, 100);
        assert!(matches!(
            CubemapFaces::from_cross(&not_a_cross),
            Err(CubemapError::BadLayout {
                width: 100,
                height: 100
            })
        ));
    }

    #[test]
    fn test_procedural_cross_slices_cleanly() {
        let cross = procedural_cross(32);
        let faces = CubemapFaces::from_cross(&cross).unwrap();
        assert_eq!(faces.size, 32);

        // Zenith face is uniformly the zenith color
        let up = &faces.faces[2];
        assert_eq!(up.get_pixel(0, 0), up.get_pixel(31, 31));
    }
}
