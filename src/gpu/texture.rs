//! GPU upload for decoded card images.

use crate::assets::CardImage;
use crate::gpu::render_context::RenderContext;

/// A sampled 2D texture uploaded from a [`CardImage`], plus the metadata the
/// cover-fit pass needs.
pub struct ImageTexture {
    /// The underlying GPU texture.
    pub texture: wgpu::Texture,
    /// A default full-texture view.
    pub view: wgpu::TextureView,
    /// Native aspect ratio (width / height) of the source image.
    pub aspect: f32,
}

impl ImageTexture {
    /// Upload an image as an sRGB texture with a default view.
    #[must_use]
    pub fn from_image(context: &RenderContext, image: &CardImage) -> Self {
        let (width, height) = image.pixels.dimensions();
        let size = wgpu::Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        };

        let texture =
            context.device.create_texture(&wgpu::TextureDescriptor {
                label: Some(&format!("Card Texture '{}'", image.name)),
                size,
                mip_level_count: 1,
                sample_count: 1,
                dimension: wgpu::TextureDimension::D2,
                format: wgpu::TextureFormat::Rgba8UnormSrgb,
                usage: wgpu::TextureUsages::TEXTURE_BINDING
                    | wgpu::TextureUsages::COPY_DST,
                view_formats: &[],
            });

        context.queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            &image.pixels,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(4 * width),
                rows_per_image: Some(height),
            },
            size,
        );

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        Self {
            texture,
            view,
            aspect: image.aspect(),
        }
    }
}
