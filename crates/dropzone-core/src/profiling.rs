//! Profiling utilities based on the `puffin` crate.
//!
//! With the `profiling` feature disabled the scope macros expand to nothing,
//! so call sites never need their own `cfg` guards.

#[cfg(feature = "profiling")]
pub use puffin::{GlobalProfiler, profile_function, profile_scope};

#[cfg(not(feature = "profiling"))]
pub use crate::{profile_function, profile_scope};

#[cfg(not(feature = "profiling"))]
#[doc(hidden)]
#[macro_export]
macro_rules! profile_function {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "profiling"))]
#[doc(hidden)]
#[macro_export]
macro_rules! profile_scope {
    ($($arg:tt)*) => {};
}

/// Profiling backend options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfilingBackend {
    /// Send profiling data to puffin_viewer via HTTP.
    PuffinHttp,
}

/// Default address for the puffin HTTP server.
pub const PUFFIN_ADDR: &str = "127.0.0.1:8585";

#[cfg(feature = "profiling")]
static PROFILING_SERVER: std::sync::OnceLock<puffin_http::Server> = std::sync::OnceLock::new();

/// Initialize profiling with the specified backend.
///
/// # Example
/// ```no_run
/// use dropzone_core::profiling::{init_profiling, ProfilingBackend};
///
/// init_profiling(ProfilingBackend::PuffinHttp);
/// ```
#[cfg(feature = "profiling")]
pub fn init_profiling(backend: ProfilingBackend) {
    match backend {
        ProfilingBackend::PuffinHttp => {
            puffin::set_scopes_on(true);

            match puffin_http::Server::new(PUFFIN_ADDR) {
                Ok(server) => {
                    tracing::info!("Puffin profiler server started on http://{}", PUFFIN_ADDR);
                    let _ = PROFILING_SERVER.set(server);
                }
                Err(e) => {
                    tracing::error!("Failed to start puffin server: {}", e);
                }
            }
        }
    }
}

#[cfg(not(feature = "profiling"))]
pub fn init_profiling(backend: ProfilingBackend) {
    tracing::warn!(?backend, "profiling feature disabled, ignoring init_profiling");
}

/// Mark the start of a new frame for profiling.
///
/// Hosts driving the animation loop call this once per display refresh.
#[inline]
pub fn new_frame() {
    #[cfg(feature = "profiling")]
    puffin::GlobalProfiler::lock().new_frame();
}
