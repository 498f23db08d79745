use anyhow::{anyhow, Context, Result};
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, WebGl2RenderingContext};

/// Acquires the WebGL2 context of `canvas`.
///
/// Fails when the browser has no WebGL2, or when the canvas was already bound
/// to a different context type.
pub fn webgl2_context(canvas: &HtmlCanvasElement) -> Result<WebGl2RenderingContext> {
    let object = canvas
        .get_context("webgl2")
        .map_err(|err| anyhow!("getContext(\"webgl2\") threw: {err:?}"))?
        .context("WebGL2 is not available for this canvas")?;

    object
        .dyn_into::<WebGl2RenderingContext>()
        .map_err(|_| anyhow!("getContext(\"webgl2\") returned an unexpected object"))
}
