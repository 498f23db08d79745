/// Log target carrying driver compile and link output.
pub const DIAGNOSTICS_TARGET: &str = "glimmer::diagnostics";

/// Emits a driver info log before the matching error is returned.
///
/// The returned error only carries a fixed message in `Display`, so this record
/// is where the GLSL line numbers show up in a console.
pub(crate) fn report_info_log(what: &str, info_log: &str) {
    let info_log = info_log.trim_end();
    if info_log.is_empty() {
        log::error!(target: DIAGNOSTICS_TARGET, "{what}: <empty info log>");
    } else {
        log::error!(target: DIAGNOSTICS_TARGET, "{what}:\n{info_log}");
    }
}
