// Tue Feb 10 2026 - Alex

/// Host API that only exists inside the full game client. Scripts that call
/// it cannot load in the reduced server-side Lua environment without stubs.
pub const GATED_HOST_API: &str = "CreateFrame";

/// Guarded stand-ins for the two optional host functions. Prepended to any
/// script that references the gated API so it still loads where the real
/// implementations are absent.
pub const COMPAT_PREAMBLE: &str = "if not GetLocale then\n    GetLocale = function() return \"enUS\" end\nend\nif not CreateFrame then\n    CreateFrame = function() return {} end\nend\n";

pub fn needs_shim(contents: &str) -> bool {
    contents.contains(GATED_HOST_API) && !contents.starts_with(COMPAT_PREAMBLE)
}

pub fn apply_shim(contents: &str) -> String {
    format!("{}{}", COMPAT_PREAMBLE, contents)
}
