use glimmer_core::{GlError, ShaderKind};
use js_sys::Array;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, WebGl2RenderingContext, WebGlProgram, WebGlShader};

/// Installs console logging and the panic hook. Safe to call more than once.
#[wasm_bindgen]
pub fn init() {
    crate::logging::init_console_logging();
}

/// Makes the canvas backing store match its CSS size.
#[wasm_bindgen(js_name = resizeCanvas)]
pub fn resize_canvas(canvas: &HtmlCanvasElement) {
    // Clones the JS reference, not the element.
    let mut canvas = canvas.clone();
    glimmer_core::resize_surface(&mut canvas);
}

/// Returns the canvas' WebGL2 context.
#[wasm_bindgen(js_name = getWebGl2Context)]
pub fn get_webgl2_context(canvas: &HtmlCanvasElement) -> Result<WebGl2RenderingContext, JsError> {
    crate::canvas::webgl2_context(canvas).map_err(|err| JsError::new(&format!("{err:#}")))
}

/// Compiles a shader. `kind` is `gl.VERTEX_SHADER` or `gl.FRAGMENT_SHADER`.
#[wasm_bindgen(js_name = createShader)]
pub fn create_shader(
    gl: &WebGl2RenderingContext,
    kind: u32,
    source: &str,
) -> Result<WebGlShader, JsError> {
    let kind = ShaderKind::from_gl_enum(kind)
        .ok_or_else(|| JsError::new(&format!("unsupported shader type {kind:#06x}")))?;

    glimmer_core::compile_shader(gl, kind, source).map_err(to_js_error)
}

/// Links an array of compiled shaders, attached in array order.
#[wasm_bindgen(js_name = createProgram)]
pub fn create_program(
    gl: &WebGl2RenderingContext,
    shaders: &Array,
) -> Result<WebGlProgram, JsError> {
    let shaders = shaders
        .iter()
        .map(|value| {
            value
                .dyn_into::<WebGlShader>()
                .map_err(|_| JsError::new("createProgram expects an array of WebGLShader"))
        })
        .collect::<Result<Vec<_>, _>>()?;

    glimmer_core::link_program(gl, &shaders).map_err(to_js_error)
}

/// Compiles a vertex and a fragment shader and links them.
#[wasm_bindgen(js_name = createProgramFromSources)]
pub fn create_program_from_sources(
    gl: &WebGl2RenderingContext,
    vertex_source: &str,
    fragment_source: &str,
) -> Result<WebGlProgram, JsError> {
    glimmer_core::link_program_from_sources(gl, vertex_source, fragment_source)
        .map_err(to_js_error)
}

fn to_js_error(err: GlError) -> JsError {
    match err.info_log().map(str::trim_end) {
        Some(log) if !log.is_empty() => JsError::new(&format!("{err}\n{log}")),
        _ => JsError::new(&err.to_string()),
    }
}
