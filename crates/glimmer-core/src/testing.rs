//! Recording `GraphicsContext` used by unit tests.
//!
//! Compilation fails for sources containing `#error`. Linking checks that a
//! vertex and a fragment unit are attached and that every fragment `in`
//! declaration has a vertex `out` of the same type and name.
//!
//! Also holds a capturing `log::Log` so tests can assert on emitted records.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::sync::{Mutex, Once};
use std::thread::{self, ThreadId};

use crate::context::{GraphicsContext, ShaderKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Call {
    CreateShader(ShaderKind),
    ShaderSource(u32),
    CompileShader(u32),
    CompileStatus(u32),
    ShaderInfoLog(u32),
    DeleteShader(u32),
    CreateProgram,
    AttachShader { program: u32, shader: u32 },
    LinkProgram(u32),
    LinkStatus(u32),
    ProgramInfoLog(u32),
    DeleteProgram(u32),
}

struct FakeShader {
    kind: ShaderKind,
    source: String,
    compile_log: Option<String>,
}

#[derive(Default)]
pub(crate) struct FakeContext {
    fail_shader_alloc: bool,
    fail_program_alloc: bool,
    calls: RefCell<Vec<Call>>,
    next_id: Cell<u32>,
    shaders: RefCell<HashMap<u32, FakeShader>>,
    attached: RefCell<HashMap<u32, Vec<u32>>>,
    link_logs: RefCell<HashMap<u32, String>>,
}

impl FakeContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every `create_shader` returns the null sentinel.
    pub fn without_shader_objects() -> Self {
        Self { fail_shader_alloc: true, ..Self::default() }
    }

    /// Every `create_program` returns the null sentinel.
    pub fn without_program_objects() -> Self {
        Self { fail_program_alloc: true, ..Self::default() }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.calls.borrow().iter().filter(|c| pred(c)).count()
    }

    pub fn attached(&self, program: u32) -> Vec<u32> {
        self.attached.borrow().get(&program).cloned().unwrap_or_default()
    }

    pub fn kind_of(&self, shader: u32) -> Option<ShaderKind> {
        self.shaders.borrow().get(&shader).map(|s| s.kind)
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }

    fn alloc_id(&self) -> u32 {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        id
    }

    fn check_link(&self, program: u32) -> Option<String> {
        let shaders = self.shaders.borrow();
        let units: Vec<&FakeShader> = self
            .attached(program)
            .iter()
            .filter_map(|id| shaders.get(id))
            .collect();

        if units.iter().any(|s| s.compile_log.is_some()) {
            return Some("ERROR: attached shader is not compiled".into());
        }

        let vertex = units.iter().find(|s| s.kind == ShaderKind::Vertex);
        let fragment = units.iter().find(|s| s.kind == ShaderKind::Fragment);
        let (Some(vertex), Some(fragment)) = (vertex, fragment) else {
            return Some("ERROR: program needs a vertex and a fragment shader".into());
        };

        let outs = declarations(&vertex.source, "out");
        for (ty, name) in declarations(&fragment.source, "in") {
            if !outs.contains(&(ty, name)) {
                return Some(format!(
                    "ERROR: fragment input '{name}' ({ty}) is not written by the vertex shader"
                ));
            }
        }
        None
    }
}

/// `(type, name)` of every `<qualifier> <type> <name>;` line.
fn declarations<'a>(source: &'a str, qualifier: &str) -> Vec<(&'a str, &'a str)> {
    source
        .lines()
        .filter_map(|line| {
            let mut words = line.trim().trim_end_matches(';').split_whitespace();
            if words.next()? != qualifier {
                return None;
            }
            Some((words.next()?, words.next()?))
        })
        .collect()
}

impl GraphicsContext for FakeContext {
    type Shader = u32;
    type Program = u32;

    fn create_shader(&self, kind: ShaderKind) -> Option<u32> {
        self.record(Call::CreateShader(kind));
        if self.fail_shader_alloc {
            return None;
        }
        let id = self.alloc_id();
        self.shaders.borrow_mut().insert(
            id,
            FakeShader { kind, source: String::new(), compile_log: None },
        );
        Some(id)
    }

    fn shader_source(&self, shader: &u32, source: &str) {
        self.record(Call::ShaderSource(*shader));
        if let Some(s) = self.shaders.borrow_mut().get_mut(shader) {
            s.source = source.to_owned();
        }
    }

    fn compile_shader(&self, shader: &u32) {
        self.record(Call::CompileShader(*shader));
        if let Some(s) = self.shaders.borrow_mut().get_mut(shader) {
            s.compile_log = s
                .source
                .lines()
                .position(|l| l.trim_start().starts_with("#error"))
                .map(|i| format!("ERROR: 0:{}: '#error' : user-defined error\n", i + 1));
        }
    }

    fn shader_compile_status(&self, shader: &u32) -> bool {
        self.record(Call::CompileStatus(*shader));
        self.shaders
            .borrow()
            .get(shader)
            .is_some_and(|s| s.compile_log.is_none())
    }

    fn shader_info_log(&self, shader: &u32) -> String {
        self.record(Call::ShaderInfoLog(*shader));
        self.shaders
            .borrow()
            .get(shader)
            .and_then(|s| s.compile_log.clone())
            .unwrap_or_default()
    }

    fn delete_shader(&self, shader: &u32) {
        self.record(Call::DeleteShader(*shader));
    }

    fn create_program(&self) -> Option<u32> {
        self.record(Call::CreateProgram);
        if self.fail_program_alloc {
            return None;
        }
        let id = self.alloc_id();
        self.attached.borrow_mut().insert(id, Vec::new());
        Some(id)
    }

    fn attach_shader(&self, program: &u32, shader: &u32) {
        self.record(Call::AttachShader { program: *program, shader: *shader });
        self.attached.borrow_mut().entry(*program).or_default().push(*shader);
    }

    fn link_program(&self, program: &u32) {
        self.record(Call::LinkProgram(*program));
        match self.check_link(*program) {
            Some(log) => self.link_logs.borrow_mut().insert(*program, log),
            None => self.link_logs.borrow_mut().remove(program),
        };
    }

    fn program_link_status(&self, program: &u32) -> bool {
        self.record(Call::LinkStatus(*program));
        self.attached.borrow().contains_key(program)
            && !self.link_logs.borrow().contains_key(program)
    }

    fn program_info_log(&self, program: &u32) -> String {
        self.record(Call::ProgramInfoLog(*program));
        self.link_logs.borrow().get(program).cloned().unwrap_or_default()
    }

    fn delete_program(&self, program: &u32) {
        self.record(Call::DeleteProgram(*program));
    }
}

pub(crate) const VERTEX_SRC: &str = "#version 300 es
in vec4 a_position;
out vec3 v_color;
void main() {
    v_color = a_position.xyz;
    gl_Position = a_position;
}
";

pub(crate) const FRAGMENT_SRC: &str = "#version 300 es
precision highp float;
in vec3 v_color;
out vec4 outColor;
void main() {
    outColor = vec4(v_color, 1.0);
}
";

/// Reads a varying the vertex stage never writes.
pub(crate) const MISMATCHED_FRAGMENT_SRC: &str = "#version 300 es
precision highp float;
in vec2 v_uv;
out vec4 outColor;
void main() {
    outColor = vec4(v_uv, 0.0, 1.0);
}
";

pub(crate) const BROKEN_SRC: &str = "#version 300 es
#error missing semicolon below
void main() { gl_Position = vec4(0.0) }
";

// ── log capture ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CapturedRecord {
    pub target: String,
    pub level: log::Level,
    pub message: String,
}

/// Keeps records per thread; the test harness runs each test on its own thread.
struct CaptureLogger {
    records: Mutex<Vec<(ThreadId, CapturedRecord)>>,
}

impl log::Log for CaptureLogger {
    fn enabled(&self, _: &log::Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &log::Record<'_>) {
        let captured = CapturedRecord {
            target: record.target().to_owned(),
            level: record.level(),
            message: record.args().to_string(),
        };
        if let Ok(mut records) = self.records.lock() {
            records.push((thread::current().id(), captured));
        }
    }

    fn flush(&self) {}
}

static CAPTURE: CaptureLogger = CaptureLogger { records: Mutex::new(Vec::new()) };
static CAPTURE_INIT: Once = Once::new();

/// Installs the capturing logger as the process logger and clears whatever the
/// calling thread logged so far. Every test touching the global logger goes
/// through here first, so installation cannot race.
pub(crate) fn capture_logs() {
    CAPTURE_INIT.call_once(|| {
        log::set_logger(&CAPTURE).expect("capture logger installed first");
        log::set_max_level(log::LevelFilter::Trace);
    });
    // With `--test-threads=1` every test shares one thread.
    take_logs();
}

/// Drains the records emitted on the calling thread.
pub(crate) fn take_logs() -> Vec<CapturedRecord> {
    let me = thread::current().id();
    let mut records = CAPTURE.records.lock().expect("capture lock");
    let (mine, rest): (Vec<_>, Vec<_>) = records.drain(..).partition(|(id, _)| *id == me);
    *records = rest;
    mine.into_iter().map(|(_, record)| record).collect()
}

/// Records on the diagnostics target, in emission order.
pub(crate) fn take_diagnostics() -> Vec<CapturedRecord> {
    take_logs()
        .into_iter()
        .filter(|r| r.target == crate::logging::DIAGNOSTICS_TARGET)
        .collect()
}
