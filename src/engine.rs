//! The carousel engine: initialization, per-frame update, and drawing.
//!
//! Initialization gates on the asset batch: every card image must decode
//! before any GPU state is created, so the engine either exists fully
//! configured or not at all. Per frame the viewer calls [`update`]
//! (wrap pass, then smoothing, then the speed residual) followed by
//! [`render`].
//!
//! [`update`]: CarouselEngine::update
//! [`render`]: CarouselEngine::render

use glam::Vec3;

use crate::assets::AssetManifest;
use crate::camera::{Camera, Frustum};
use crate::carousel::Formation;
use crate::error::WhorlError;
use crate::gpu::{ImageTexture, RenderContext};
use crate::input::{InputEvent, ScrollAdapter};
use crate::options::Options;
use crate::renderer::{CardRenderer, PlaneMesh};
use crate::util::FrameTiming;

/// Owns the render context, camera, formation, and card renderer, and maps
/// input events onto the formation's scroll target.
pub struct CarouselEngine {
    context: RenderContext,
    camera: Camera,
    formation: Formation,
    renderer: CardRenderer,
    scroll: ScrollAdapter,
    /// Frame-rate diagnostics.
    pub frame_timing: FrameTiming,
    frame_count: u64,
    texture_aspects: Vec<f32>,
    background: wgpu::Color,
    options: Options,
}

/// Frames between FPS debug log lines.
const FPS_LOG_INTERVAL: u64 = 300;

impl CarouselEngine {
    /// Load all assets, then configure the GPU context, camera, formation,
    /// and renderer.
    ///
    /// # Errors
    ///
    /// Returns [`WhorlError::AssetLoad`] if any image in the manifest fails
    /// to decode (the engine is never partially constructed) or
    /// [`WhorlError::Gpu`] if GPU context creation fails.
    pub async fn new(
        window: impl Into<wgpu::SurfaceTarget<'static>>,
        size: (u32, u32),
        manifest: &AssetManifest,
        options: Options,
    ) -> Result<Self, WhorlError> {
        // Asset loading gates everything: no GPU state exists on failure.
        let images = manifest.load()?;
        if images.is_empty() {
            return Err(WhorlError::AssetLoad {
                name: "manifest".to_owned(),
                message: "no card images in manifest".to_owned(),
            });
        }
        log::info!("loaded {} card images", images.len());

        let context = RenderContext::new(window, size).await?;

        let camera = Camera {
            eye: Vec3::new(0.0, 0.0, options.scene.camera_z),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: context.aspect(),
            fovy: options.scene.fovy,
            znear: options.scene.znear,
            zfar: options.scene.zfar,
        };

        let textures: Vec<ImageTexture> = images
            .iter()
            .map(|image| ImageTexture::from_image(&context, image))
            .collect();
        let texture_aspects: Vec<f32> =
            textures.iter().map(|t| t.aspect).collect();

        let formation = Formation::new(
            &options.formation,
            &options.motion,
            &texture_aspects,
            context.aspect(),
        );

        let mesh = PlaneMesh::new(
            options.formation.card_width,
            options.formation.card_height,
            options.formation.segments,
        );
        let renderer = CardRenderer::new(
            &context,
            &mesh,
            &textures,
            &formation,
            options.formation.radius,
        );

        let [r, g, b] = options.scene.background;
        let background = wgpu::Color {
            r: f64::from(r),
            g: f64::from(g),
            b: f64::from(b),
            a: 1.0,
        };

        Ok(Self {
            context,
            camera,
            formation,
            renderer,
            scroll: ScrollAdapter::new(&options.input),
            frame_timing: FrameTiming::new(),
            frame_count: 0,
            texture_aspects,
            background,
            options,
        })
    }

    /// Feed a platform input event. Scroll-producing events accumulate into
    /// the formation's motion target.
    pub fn handle_input(&mut self, event: InputEvent) {
        if let Some(delta) = self.scroll.handle(event) {
            self.formation.apply_scroll(delta);
        }
    }

    /// Advance one frame: wrap pass against the current camera frustum,
    /// then the smoothing step.
    pub fn update(&mut self) {
        let frustum =
            Frustum::from_view_projection(self.camera.build_matrix());
        self.formation.wrap_offscreen(&frustum);
        self.formation.advance();
    }

    /// Draw the formation and present the frame.
    ///
    /// # Errors
    ///
    /// Returns [`wgpu::SurfaceError`] if the swapchain texture cannot be
    /// acquired; `Outdated`/`Lost` are expected around resizes and the
    /// caller recovers by calling [`resize`](Self::resize).
    pub fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        self.renderer
            .prepare(&self.context, &self.camera, &self.formation);

        let frame = self.context.get_next_frame()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self.context.create_encoder();
        self.renderer.render(&mut encoder, &view, self.background);
        self.context.submit(encoder);
        frame.present();

        let _ = self.frame_timing.end_frame();
        self.frame_count += 1;
        if self.frame_count % FPS_LOG_INTERVAL == 0 {
            log::debug!("fps: {:.1}", self.frame_timing.fps());
        }
        Ok(())
    }

    /// Reconfigure the surface and recompute aspect-dependent state: camera
    /// aspect, depth buffer, and every card's cover-fit UV scale.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.context.resize(width, height);
        self.camera.aspect = self.context.aspect();
        self.formation
            .rescale_uvs(&self.texture_aspects, self.context.aspect());
        self.renderer.resize(&self.context);
    }

    /// The formation's current state (diagnostics).
    #[must_use]
    pub fn formation(&self) -> &Formation {
        &self.formation
    }

    /// The active options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }
}
