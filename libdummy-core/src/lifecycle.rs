//! Version information and the process-wide init flag.
//!
//! `init` and `cleanup` only toggle the flag and emit a diagnostic event.
//! The flag is atomic so concurrent callers observe exactly one
//! false -> true transition per `init`/`cleanup` cycle.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::Result;

pub const VERSION_MAJOR: u32 = 1;
pub const VERSION_MINOR: u32 = 0;
pub const VERSION_PATCH: u32 = 0;
pub const VERSION: &str = "1.0.0";

static INITIALIZED: AtomicBool = AtomicBool::new(false);

/// Semantic version string; callable at any time
pub fn get_version() -> &'static str {
    VERSION
}

/// Mark the library initialized. Idempotent, never fails.
pub fn init() -> Result<()> {
    if INITIALIZED
        .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
        .is_ok()
    {
        tracing::info!("libdummy v{} initialized", VERSION);
    }
    Ok(())
}

/// Reset the init flag. Silent no-op when not initialized.
pub fn cleanup() {
    if INITIALIZED
        .compare_exchange(true, false, Ordering::AcqRel, Ordering::Acquire)
        .is_ok()
    {
        tracing::info!("libdummy cleaned up");
    }
}

pub fn is_initialized() -> bool {
    INITIALIZED.load(Ordering::Acquire)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_matches_components() {
        assert_eq!(get_version(), "1.0.0");
        assert_eq!(
            get_version(),
            format!("{}.{}.{}", VERSION_MAJOR, VERSION_MINOR, VERSION_PATCH)
        );
    }

    // The flag is process-wide, so the whole cycle lives in one test.
    #[test]
    fn test_init_cleanup_cycle() {
        assert!(!is_initialized());

        // cleanup before init is a no-op
        cleanup();
        assert!(!is_initialized());

        assert!(init().is_ok());
        assert!(is_initialized());

        // idempotent
        assert!(init().is_ok());
        assert!(is_initialized());

        cleanup();
        assert!(!is_initialized());
        cleanup();
        assert!(!is_initialized());

        // re-init after cleanup
        assert!(init().is_ok());
        assert!(is_initialized());
        cleanup();
    }
}
