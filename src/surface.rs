//! Process-wide rendering-surface defaults, set once before any surface
//! exists. This layer never creates a context and cannot fail; it only
//! records default parameters for hosts to pick up.

use std::sync::OnceLock;

use tracing::info;

/// Default parameters applied to rendering surfaces created by the host.
///
/// Context version/profile selection is the host's concern and deliberately
/// not represented here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceFormat {
    /// MSAA sample count.
    pub samples: u16,
    pub depth_bits: u8,
    pub stencil_bits: u8,
    /// Request a debug context where the backend supports one.
    pub debug_context: bool,
}

impl Default for SurfaceFormat {
    fn default() -> Self {
        Self {
            samples: 4,
            depth_bits: 24,
            stencil_bits: 8,
            debug_context: true,
        }
    }
}

static DEFAULT_FORMAT: OnceLock<SurfaceFormat> = OnceLock::new();

/// Installs the process-wide default surface format and returns the effective
/// default. The first call wins; later calls reapply the installed default.
pub fn install_default_format(format: SurfaceFormat) -> SurfaceFormat {
    let installed = *DEFAULT_FORMAT.get_or_init(|| format);
    info!(
        samples = installed.samples,
        depth_bits = installed.depth_bits,
        stencil_bits = installed.stencil_bits,
        debug_context = installed.debug_context,
        "surface format defaults installed"
    );
    installed
}

/// The installed default, or the built-in one when nothing was installed.
pub fn default_format() -> SurfaceFormat {
    DEFAULT_FORMAT.get().copied().unwrap_or_default()
}

/// eframe options carrying the default surface format, for hosts about to
/// create a rendering surface.
pub fn native_options() -> eframe::NativeOptions {
    let format = default_format();
    eframe::NativeOptions {
        multisampling: format.samples,
        depth_buffer: format.depth_bits,
        stencil_buffer: format.stencil_bits,
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test so the process-global install order stays deterministic.
    #[test]
    fn first_install_wins_and_later_calls_reapply_it() {
        let custom = SurfaceFormat {
            samples: 8,
            ..Default::default()
        };
        assert_eq!(install_default_format(custom), custom);
        assert_eq!(default_format(), custom);

        let other = SurfaceFormat {
            samples: 2,
            debug_context: false,
            ..Default::default()
        };
        assert_eq!(install_default_format(other), custom);

        let options = native_options();
        assert_eq!(options.multisampling, 8);
        assert_eq!(options.depth_buffer, 24);
        assert_eq!(options.stencil_buffer, 8);
    }
}
