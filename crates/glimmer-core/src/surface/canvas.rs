use web_sys::HtmlCanvasElement;

use super::{Surface, SurfaceSize};

impl Surface for HtmlCanvasElement {
    fn display_size(&self) -> SurfaceSize {
        // `clientWidth` is signed in the DOM bindings. Hidden canvases report 0.
        SurfaceSize::new(
            self.client_width().max(0) as u32,
            self.client_height().max(0) as u32,
        )
    }

    fn backing_size(&self) -> SurfaceSize {
        SurfaceSize::new(self.width(), self.height())
    }

    fn set_backing_size(&mut self, size: SurfaceSize) {
        self.set_width(size.width);
        self.set_height(size.height);
    }
}
