use winit::dpi::PhysicalSize;
use winit::window::Window;

use super::{Surface, SurfaceSize};

impl From<PhysicalSize<u32>> for SurfaceSize {
    fn from(size: PhysicalSize<u32>) -> Self {
        Self::new(size.width, size.height)
    }
}

impl From<SurfaceSize> for PhysicalSize<u32> {
    fn from(size: SurfaceSize) -> Self {
        PhysicalSize::new(size.width, size.height)
    }
}

/// Drawable size tracked against a winit window.
///
/// The displayed size is the window's inner size. The backing size is owned
/// here: callers read it after [`resize_surface`](super::resize_surface) to
/// reconfigure their swapchain or GL viewport.
///
/// Window lifetime is tied to `'w`; the window must outlive the surface.
///
/// Unit tests only cover the size conversions below: constructing a `Window`
/// needs a live event loop, which the test harness does not provide.
pub struct WindowSurface<'w> {
    window: &'w Window,
    backing: PhysicalSize<u32>,
}

impl<'w> WindowSurface<'w> {
    /// Starts with the backing size equal to the window's current inner size.
    pub fn new(window: &'w Window) -> Self {
        Self::with_backing_size(window, window.inner_size())
    }

    pub fn with_backing_size(window: &'w Window, backing: PhysicalSize<u32>) -> Self {
        Self { window, backing }
    }

    pub fn window(&self) -> &'w Window {
        self.window
    }

    /// Current drawable size in physical pixels.
    pub fn backing(&self) -> PhysicalSize<u32> {
        self.backing
    }
}

impl Surface for WindowSurface<'_> {
    fn display_size(&self) -> SurfaceSize {
        self.window.inner_size().into()
    }

    fn backing_size(&self) -> SurfaceSize {
        self.backing.into()
    }

    fn set_backing_size(&mut self, size: SurfaceSize) {
        self.backing = size.into();
    }
}
