//! Drawable surfaces whose backing resolution follows their displayed size.
//!
//! Platform adapters:
//! - `web`: `web_sys::HtmlCanvasElement` (`clientWidth`/`clientHeight` vs `width`/`height`)
//! - `winit`: [`WindowSurface`], tracking a window's inner size

#[cfg(feature = "web")]
mod canvas;
#[cfg(feature = "winit")]
mod winit;

#[cfg(feature = "winit")]
pub use self::winit::WindowSurface;

/// Size in physical pixels.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
}

impl SurfaceSize {
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// A drawable target with a caller-visible backing buffer.
pub trait Surface {
    /// Size the surface is currently displayed at.
    fn display_size(&self) -> SurfaceSize;

    /// Size of the backing buffer rendering goes into.
    fn backing_size(&self) -> SurfaceSize;

    /// Resizes the backing buffer. Hosts typically reallocate render targets here.
    fn set_backing_size(&mut self, size: SurfaceSize);
}

/// Makes the backing buffer match the displayed size.
///
/// The backing size is only written when it differs in at least one dimension,
/// so calling this every frame does not reallocate anything.
pub fn resize_surface<S: Surface + ?Sized>(surface: &mut S) {
    let display = surface.display_size();
    let backing = surface.backing_size();

    if backing == display {
        return;
    }

    log::debug!(
        "resizing surface backing {}x{} -> {}x{}",
        backing.width,
        backing.height,
        display.width,
        display.height
    );
    surface.set_backing_size(display);
}
