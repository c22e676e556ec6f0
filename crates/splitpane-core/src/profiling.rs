//! Profiling utilities based on the `puffin` crate.
//!
//! Scopes are cheap no-ops until [`set_enabled`] (or `init_profiling` with
//! the `profiling-server` feature) turns them on.

pub use puffin::{GlobalProfiler, profile_function, profile_scope};

/// Turn scope collection on or off.
pub fn set_enabled(enabled: bool) {
    puffin::set_scopes_on(enabled);
}

/// Mark the start of a new frame for profiling.
///
/// Hosts call this once per event loop iteration so pointer dispatch and
/// layout passes are grouped per frame.
#[inline]
pub fn new_frame() {
    puffin::GlobalProfiler::lock().new_frame();
}

#[cfg(feature = "profiling-server")]
mod server {
    use std::sync::OnceLock;

    /// Profiling backend options.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum ProfilingBackend {
        /// Send profiling data to puffin_viewer via HTTP.
        PuffinHttp,
    }

    static PROFILING_SERVER: OnceLock<puffin_http::Server> = OnceLock::new();

    /// Initialize profiling with the specified backend.
    ///
    /// ```no_run
    /// use splitpane_core::profiling::{ProfilingBackend, init_profiling};
    ///
    /// init_profiling(ProfilingBackend::PuffinHttp);
    /// ```
    pub fn init_profiling(backend: ProfilingBackend) {
        match backend {
            ProfilingBackend::PuffinHttp => {
                puffin::set_scopes_on(true);

                match puffin_http::Server::new("0.0.0.0:8585") {
                    Ok(server) => {
                        tracing::info!("Puffin profiler server started on http://0.0.0.0:8585");
                        let _ = PROFILING_SERVER.set(server);
                    }
                    Err(e) => {
                        tracing::error!("Failed to start puffin server: {}", e);
                    }
                }
            }
        }
    }
}

#[cfg(feature = "profiling-server")]
pub use server::{ProfilingBackend, init_profiling};
