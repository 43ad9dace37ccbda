//! Image textures with CPU-generated mipmaps

use std::path::Path;

use image::imageops::{self, FilterType};
use image::RgbaImage;
use wgpu::*;

use crate::config::TextureSpec;
use crate::error::TextureError;

/// Number of mip levels down to 1x1
pub fn mip_level_count(width: u32, height: u32) -> u32 {
    32 - width.max(height).max(1).leading_zeros()
}

/// Decode an image file into RGBA8, optionally flipping its rows
pub fn decode(path: &Path, flip_vertically: bool) -> Result<RgbaImage, TextureError> {
    let image = image::open(path).map_err(|source| TextureError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    let mut rgba = image.to_rgba8();
    if flip_vertically {
        imageops::flip_vertical_in_place(&mut rgba);
    }
    Ok(rgba)
}

/// Level 0 followed by successively halved copies, ending at 1x1
pub fn mip_chain(base: &RgbaImage) -> Vec<RgbaImage> {
    let levels = mip_level_count(base.width(), base.height());
    let mut chain = Vec::with_capacity(levels as usize);
    chain.push(base.clone());

    for _ in 1..levels {
        let Some(previous) = chain.last() else { break };
        let width = (previous.width() / 2).max(1);
        let height = (previous.height() / 2).max(1);
        let next = imageops::resize(previous, width, height, FilterType::Triangle);
        chain.push(next);
    }
    chain
}

/// A sampled 2D texture with repeat wrapping and linear filtering
///
/// The view keeps the underlying texture alive.
pub struct Texture {
    pub view: TextureView,
    pub sampler: Sampler,
}

impl Texture {
    /// Load `spec.path`. A decode failure is logged and yields a placeholder.
    pub fn from_file(device: &Device, queue: &Queue, spec: &TextureSpec) -> Self {
        match decode(&spec.path, spec.flip_vertically) {
            Ok(image) => {
                tracing::info!(
                    path = %spec.path.display(),
                    width = image.width(),
                    height = image.height(),
                    flipped = spec.flip_vertically,
                    "loaded texture"
                );
                let label = spec.path.display().to_string();
                Self::from_image(device, queue, &label, &image)
            }
            Err(e) => {
                tracing::error!("Failed to load texture: {e}");
                Self::placeholder(device)
            }
        }
    }

    pub fn from_image(device: &Device, queue: &Queue, label: &str, image: &RgbaImage) -> Self {
        let chain = mip_chain(image);
        let texture = device.create_texture(&TextureDescriptor {
            label: Some(label),
            size: Extent3d {
                width: image.width(),
                height: image.height(),
                depth_or_array_layers: 1,
            },
            mip_level_count: chain.len() as u32,
            sample_count: 1,
            dimension: TextureDimension::D2,
            format: TextureFormat::Rgba8UnormSrgb,
            usage: TextureUsages::TEXTURE_BINDING | TextureUsages::COPY_DST,
            view_formats: &[],
        });

        for (level, mip) in chain.iter().enumerate() {
            queue.write_texture(
                TexelCopyTextureInfo {
                    texture: &texture,
                    mip_level: level as u32,
                    origin: Origin3d::ZERO,
                    aspect: TextureAspect::All,
                },
                mip.as_raw(),
                TexelCopyBufferLayout {
                    offset: 0,
                    bytes_per_row: Some(mip.width() * 4),
                    rows_per_image: Some(mip.height()),
                },
                Extent3d {
                    width: mip.width(),
                    height: mip.height(),
                    depth_or_array_layers: 1,
                },
            );
        }

        Self::with_texture(device, texture)
    }

    /// 1x1 texture with no data written, standing in for one that failed to load
    pub fn placeholder(device: &Device) -> Self {
        let texture = device.create_texture(&TextureDescriptor {
            label: Some("Placeholder Texture"),
            size: Extent3d {
                width: 1,
                height: 1,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: TextureDimension::D2,
            format: TextureFormat::Rgba8UnormSrgb,
            usage: TextureUsages::TEXTURE_BINDING | TextureUsages::COPY_DST,
            view_formats: &[],
        });
        Self::with_texture(device, texture)
    }

    fn with_texture(device: &Device, texture: wgpu::Texture) -> Self {
        let view = texture.create_view(&TextureViewDescriptor::default());
        let sampler = device.create_sampler(&SamplerDescriptor {
            label: Some("Texture Sampler"),
            address_mode_u: AddressMode::Repeat,
            address_mode_v: AddressMode::Repeat,
            address_mode_w: AddressMode::Repeat,
            mag_filter: FilterMode::Linear,
            min_filter: FilterMode::Linear,
            mipmap_filter: FilterMode::Linear,
            ..Default::default()
        });

        Self { view, sampler }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn test_mip_level_count() {
        assert_eq!(mip_level_count(1, 1), 1);
        assert_eq!(mip_level_count(2, 1), 2);
        assert_eq!(mip_level_count(512, 512), 10);
        assert_eq!(mip_level_count(800, 600), 10);
        assert_eq!(mip_level_count(0, 0), 1);
    }

    #[test]
    fn test_mip_chain_halves_to_one() {
        let base = RgbaImage::new(8, 2);
        let sizes: Vec<(u32, u32)> = mip_chain(&base)
            .iter()
            .map(|m| (m.width(), m.height()))
            .collect();
        assert_eq!(sizes, vec![(8, 2), (4, 1), (2, 1), (1, 1)]);
    }

    #[test]
    fn test_decode_flips_only_when_asked() {
        let mut image = RgbaImage::new(1, 2);
        image.put_pixel(0, 0, Rgba([255, 0, 0, 255]));
        image.put_pixel(0, 1, Rgba([0, 0, 255, 255]));

        let path = std::env::temp_dir().join(format!("paddles-flip-{}.png", std::process::id()));
        image.save(&path).unwrap();

        let plain = decode(&path, false).unwrap();
        let flipped = decode(&path, true).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(plain.get_pixel(0, 0), &Rgba([255, 0, 0, 255]));
        assert_eq!(flipped.get_pixel(0, 0), &Rgba([0, 0, 255, 255]));
        assert_eq!(flipped.get_pixel(0, 1), &Rgba([255, 0, 0, 255]));
    }

    #[test]
    fn test_decode_reports_missing_file() {
        let result = decode(Path::new("definitely/not/here.png"), false);
        assert!(matches!(result, Err(TextureError::Decode { .. })));
    }
}
