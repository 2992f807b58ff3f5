#![no_main]

use display_interop::display::config_types::{
    DISPLAYCONFIG_MODE_INFO, DISPLAYCONFIG_PATH_INFO, ModeInfo,
};
use libfuzzer_sys::fuzz_target;
use std::mem::size_of;

/// Copy up to `size_of::<T>()` bytes over a default record
fn overlay<T: Copy + Default>(data: &[u8]) -> T {
    let mut record = T::default();
    let len = data.len().min(size_of::<T>());
    // SAFETY: T is a plain-old-data FFI record in which every bit pattern is valid.
    unsafe {
        std::ptr::copy_nonoverlapping(data.as_ptr(), (&raw mut record).cast::<u8>(), len);
    }
    record
}

fuzz_target!(|data: &[u8]| {
    // Mode records arrive straight from the driver; any tag must decode or fail cleanly
    let raw: DISPLAYCONFIG_MODE_INFO = overlay(data);
    match raw.decode() {
        Ok(mode) => {
            assert_eq!(mode.kind(), raw.infoType);
            assert_eq!(mode.id(), raw.id);
            // Re-encoding keeps the tag and the arm it selects
            let reencoded = DISPLAYCONFIG_MODE_INFO::from(mode);
            assert_eq!(ModeInfo::try_from(&reencoded).ok(), Some(mode));
        }
        Err(_) => {
            assert!(raw.source_mode().is_none());
            assert!(raw.target_mode().is_none());
            assert!(raw.desktop_image_info().is_none());
        }
    }

    // Mode indices of arbitrary path records never panic
    let path: DISPLAYCONFIG_PATH_INFO = overlay(data.get(size_of::<DISPLAYCONFIG_MODE_INFO>()..).unwrap_or(&[]));
    let _ = path.source_mode_index();
    let _ = path.target_mode_index();
    let _ = path.targetInfo.is_target_available();
});
