//! Standalone carousel window backed by winit.
//!
//! ```no_run
//! # use whorl::Viewer;
//! Viewer::builder()
//!     .with_image_dir("assets/images")
//!     .run()
//!     .unwrap();
//! ```

use std::{path::Path, sync::Arc};

use winit::{
    application::ApplicationHandler,
    event::{ElementState, MouseScrollDelta, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use crate::{
    assets::AssetManifest, engine::CarouselEngine, error::WhorlError,
    input::InputEvent, options::Options,
};

// ── Builder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`Viewer`].
pub struct ViewerBuilder {
    manifest: AssetManifest,
    options: Options,
    title: String,
}

impl ViewerBuilder {
    /// Create a builder with sensible defaults (title "Whorl", stock
    /// manifest, default options).
    fn new() -> Self {
        Self {
            manifest: AssetManifest::default(),
            options: Options::default(),
            title: "Whorl".into(),
        }
    }

    /// Use the stock manifest rooted at a different image directory.
    #[must_use]
    pub fn with_image_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.manifest = AssetManifest::stock(dir.as_ref());
        self
    }

    /// Replace the asset manifest entirely.
    #[must_use]
    pub fn with_manifest(mut self, manifest: AssetManifest) -> Self {
        self.manifest = manifest;
        self
    }

    /// Override the default options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    /// Set the window title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Consume the builder and produce a [`Viewer`].
    #[must_use]
    pub fn build(self) -> Viewer {
        Viewer {
            manifest: self.manifest,
            options: self.options,
            title: self.title,
        }
    }

    /// Shorthand for `build().run()`.
    ///
    /// # Errors
    ///
    /// See [`Viewer::run`].
    pub fn run(self) -> Result<(), WhorlError> {
        self.build().run()
    }
}

// ── Viewer ───────────────────────────────────────────────────────────────

/// A standalone window that displays the card carousel.
///
/// Construct via [`Viewer::builder`], then call [`run`](Self::run) to
/// enter the event loop.
pub struct Viewer {
    manifest: AssetManifest,
    options: Options,
    title: String,
}

impl Viewer {
    /// Start a new builder.
    #[must_use]
    pub fn builder() -> ViewerBuilder {
        ViewerBuilder::new()
    }

    /// Open the window and run the event loop. Blocks until the window is
    /// closed.
    ///
    /// # Errors
    ///
    /// Returns [`WhorlError::Viewer`] if the event loop cannot be created
    /// or exits abnormally. Engine initialization failures (asset load, GPU
    /// setup) are logged and close the window.
    pub fn run(self) -> Result<(), WhorlError> {
        let event_loop =
            EventLoop::new().map_err(|e| WhorlError::Viewer(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = ViewerApp {
            window: None,
            engine: None,
            manifest: self.manifest,
            options: Some(self.options),
            title: self.title,
        };

        event_loop
            .run_app(&mut app)
            .map_err(|e| WhorlError::Viewer(e.to_string()))
    }
}

// ── Winit app ────────────────────────────────────────────────────────────

/// Internal winit application handler.
struct ViewerApp {
    window: Option<Arc<Window>>,
    engine: Option<CarouselEngine>,
    manifest: AssetManifest,
    options: Option<Options>,
    title: String,
}

/// Compute the wgpu surface size, guarding against zero dimensions.
fn viewport_size(inner: winit::dpi::PhysicalSize<u32>) -> (u32, u32) {
    (inner.width.max(1), inner.height.max(1))
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let monitor = event_loop
            .primary_monitor()
            .or_else(|| event_loop.available_monitors().next());
        let attrs = if let Some(mon) = &monitor {
            let mon_size = mon.size();
            let scale = mon.scale_factor();
            let logical_w = (f64::from(mon_size.width) / scale * 0.75) as u32;
            let logical_h = (f64::from(mon_size.height) / scale * 0.75) as u32;
            Window::default_attributes()
                .with_title(&self.title)
                .with_inner_size(winit::dpi::LogicalSize::new(
                    logical_w, logical_h,
                ))
        } else {
            Window::default_attributes().with_title(&self.title)
        };

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("Failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        let (vp_w, vp_h) = viewport_size(window.inner_size());
        let options = self.options.take().unwrap_or_default();

        let engine = match pollster::block_on(CarouselEngine::new(
            window.clone(),
            (vp_w, vp_h),
            &self.manifest,
            options,
        )) {
            Ok(e) => e,
            Err(e) => {
                log::error!("Failed to initialize engine: {e}");
                event_loop.exit();
                return;
            }
        };

        window.request_redraw();
        self.window = Some(window);
        self.engine = Some(engine);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        if matches!(event, WindowEvent::CloseRequested) {
            event_loop.exit();
            return;
        }

        // Guard: both window and engine must be initialised.
        if self.window.is_none() || self.engine.is_none() {
            return;
        }

        match event {
            WindowEvent::Resized(event_size) => {
                let (vp_w, vp_h) = viewport_size(event_size);
                if let Some(engine) = &mut self.engine {
                    engine.resize(vp_w, vp_h);
                }
            }

            WindowEvent::RedrawRequested => {
                if let Some(engine) = &mut self.engine {
                    engine.update();
                    match engine.render() {
                        Ok(()) => {}
                        Err(
                            wgpu::SurfaceError::Outdated
                            | wgpu::SurfaceError::Lost,
                        ) => {
                            if let Some(w) = &self.window {
                                let (vp_w, vp_h) =
                                    viewport_size(w.inner_size());
                                engine.resize(vp_w, vp_h);
                            }
                        }
                        Err(e) => {
                            log::error!("render error: {e:?}");
                        }
                    }
                }
                if let Some(w) = &self.window {
                    w.request_redraw();
                }
            }

            WindowEvent::MouseWheel { delta, .. } => {
                let input = match delta {
                    MouseScrollDelta::LineDelta(_, y) => {
                        InputEvent::ScrollLines { y }
                    }
                    MouseScrollDelta::PixelDelta(pos) => {
                        InputEvent::ScrollPixels { y: pos.y as f32 }
                    }
                };
                if let Some(engine) = &mut self.engine {
                    engine.handle_input(input);
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                if let Some(engine) = &mut self.engine {
                    engine.handle_input(InputEvent::CursorMoved {
                        x: position.x as f32,
                        y: position.y as f32,
                    });
                }
            }

            WindowEvent::MouseInput { button, state, .. } => {
                let pressed = state == ElementState::Pressed;
                if let Some(engine) = &mut self.engine {
                    engine.handle_input(InputEvent::PointerButton {
                        button: button.into(),
                        pressed,
                    });
                }
            }

            _ => (),
        }
    }
}
