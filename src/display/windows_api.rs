//! Raw User32 declarations for the display configuration and display settings APIs
//!
//! On Windows these link against `user32.dll`. On other platforms the same
//! names exist as stubs so the crate builds and its layout tests run; the
//! display configuration family reports `ERROR_NOT_SUPPORTED` and the legacy
//! family reports `FALSE` or `DISP_CHANGE_FAILED`.
//!
//! Nothing here is safe to call directly. Use [`super::api::User32`] instead.

#![allow(non_snake_case)]
#![allow(clippy::missing_safety_doc)]

use super::config_types::{
    DISPLAYCONFIG_MODE_INFO, DISPLAYCONFIG_PATH_INFO, DISPLAYCONFIG_TOPOLOGY_ID,
};
use super::device_info::DISPLAYCONFIG_DEVICE_INFO_HEADER;
use super::device_types::DISPLAY_DEVICEW;
use super::settings_types::{DEVMODEW, VIDEOPARAMETERS};
use std::ffi::c_void;

// These functions are not exposed by the windows crate features we enable, so we declare them manually

#[cfg(windows)]
#[link(name = "user32")]
unsafe extern "system" {
    /// Gets the size of the buffers needed for `QueryDisplayConfig`
    pub fn GetDisplayConfigBufferSizes(
        flags: u32,
        numPathArrayElements: *mut u32,
        numModeInfoArrayElements: *mut u32,
    ) -> i32;

    /// Queries the display configuration
    pub fn QueryDisplayConfig(
        flags: u32,
        numPathArrayElements: *mut u32,
        pathArray: *mut DISPLAYCONFIG_PATH_INFO,
        numModeInfoArrayElements: *mut u32,
        modeInfoArray: *mut DISPLAYCONFIG_MODE_INFO,
        currentTopologyId: *mut DISPLAYCONFIG_TOPOLOGY_ID,
    ) -> i32;

    /// Applies or validates a display configuration
    pub fn SetDisplayConfig(
        numPathArrayElements: u32,
        pathArray: *const DISPLAYCONFIG_PATH_INFO,
        numModeInfoArrayElements: u32,
        modeInfoArray: *const DISPLAYCONFIG_MODE_INFO,
        flags: u32,
    ) -> i32;

    /// Gets display device information
    pub fn DisplayConfigGetDeviceInfo(requestPacket: *mut DISPLAYCONFIG_DEVICE_INFO_HEADER) -> i32;

    /// Sets display device information
    pub fn DisplayConfigSetDeviceInfo(setPacket: *const DISPLAYCONFIG_DEVICE_INFO_HEADER) -> i32;

    /// Enumerates adapters, or the monitors of one adapter
    pub fn EnumDisplayDevicesW(
        lpDevice: *const u16,
        iDevNum: u32,
        lpDisplayDevice: *mut DISPLAY_DEVICEW,
        dwFlags: u32,
    ) -> i32;

    /// Retrieves one graphics mode of a display device
    pub fn EnumDisplaySettingsW(
        lpszDeviceName: *const u16,
        iModeNum: u32,
        lpDevMode: *mut DEVMODEW,
    ) -> i32;

    /// Retrieves one graphics mode of a display device, with `EDS_*` flags
    pub fn EnumDisplaySettingsExW(
        lpszDeviceName: *const u16,
        iModeNum: u32,
        lpDevMode: *mut DEVMODEW,
        dwFlags: u32,
    ) -> i32;

    /// Changes the settings of the default display device
    pub fn ChangeDisplaySettingsW(lpDevMode: *const DEVMODEW, dwFlags: u32) -> i32;

    /// Changes the settings of the named display device
    pub fn ChangeDisplaySettingsExW(
        lpszDeviceName: *const u16,
        lpDevMode: *const DEVMODEW,
        hwnd: *mut c_void,
        dwflags: u32,
        lParam: *mut c_void,
    ) -> i32;
}

#[cfg(not(windows))]
const ERROR_NOT_SUPPORTED: i32 = 50;

#[cfg(not(windows))]
const FALSE: i32 = 0;

#[cfg(not(windows))]
const DISP_CHANGE_FAILED: i32 = -1;

// Stub implementations for non-Windows platforms
#[cfg(not(windows))]
/// Stub implementation for non-Windows platforms
///
/// # Safety
/// This is a stub function that always returns an error. It does not access any memory.
pub unsafe fn GetDisplayConfigBufferSizes(
    _flags: u32,
    _numPathArrayElements: *mut u32,
    _numModeInfoArrayElements: *mut u32,
) -> i32 {
    ERROR_NOT_SUPPORTED
}

#[cfg(not(windows))]
/// Stub implementation for non-Windows platforms
///
/// # Safety
/// This is a stub function that always returns an error. It does not access any memory.
pub unsafe fn QueryDisplayConfig(
    _flags: u32,
    _numPathArrayElements: *mut u32,
    _pathArray: *mut DISPLAYCONFIG_PATH_INFO,
    _numModeInfoArrayElements: *mut u32,
    _modeInfoArray: *mut DISPLAYCONFIG_MODE_INFO,
    _currentTopologyId: *mut DISPLAYCONFIG_TOPOLOGY_ID,
) -> i32 {
    ERROR_NOT_SUPPORTED
}

#[cfg(not(windows))]
/// Stub implementation for non-Windows platforms
///
/// # Safety
/// This is a stub function that always returns an error. It does not access any memory.
pub unsafe fn SetDisplayConfig(
    _numPathArrayElements: u32,
    _pathArray: *const DISPLAYCONFIG_PATH_INFO,
    _numModeInfoArrayElements: u32,
    _modeInfoArray: *const DISPLAYCONFIG_MODE_INFO,
    _flags: u32,
) -> i32 {
    ERROR_NOT_SUPPORTED
}

#[cfg(not(windows))]
/// Stub implementation for non-Windows platforms
///
/// # Safety
/// This is a stub function that always returns an error. It does not access any memory.
pub unsafe fn DisplayConfigGetDeviceInfo(
    _requestPacket: *mut DISPLAYCONFIG_DEVICE_INFO_HEADER,
) -> i32 {
    ERROR_NOT_SUPPORTED
}

#[cfg(not(windows))]
/// Stub implementation for non-Windows platforms
///
/// # Safety
/// This is a stub function that always returns an error. It does not access any memory.
pub unsafe fn DisplayConfigSetDeviceInfo(
    _setPacket: *const DISPLAYCONFIG_DEVICE_INFO_HEADER,
) -> i32 {
    ERROR_NOT_SUPPORTED
}

#[cfg(not(windows))]
/// Stub implementation for non-Windows platforms
///
/// # Safety
/// This is a stub function that always fails. It does not access any memory.
pub unsafe fn EnumDisplayDevicesW(
    _lpDevice: *const u16,
    _iDevNum: u32,
    _lpDisplayDevice: *mut DISPLAY_DEVICEW,
    _dwFlags: u32,
) -> i32 {
    FALSE
}

#[cfg(not(windows))]
/// Stub implementation for non-Windows platforms
///
/// # Safety
/// This is a stub function that always fails. It does not access any memory.
pub unsafe fn EnumDisplaySettingsW(
    _lpszDeviceName: *const u16,
    _iModeNum: u32,
    _lpDevMode: *mut DEVMODEW,
) -> i32 {
    FALSE
}

#[cfg(not(windows))]
/// Stub implementation for non-Windows platforms
///
/// # Safety
/// This is a stub function that always fails. It does not access any memory.
pub unsafe fn EnumDisplaySettingsExW(
    _lpszDeviceName: *const u16,
    _iModeNum: u32,
    _lpDevMode: *mut DEVMODEW,
    _dwFlags: u32,
) -> i32 {
    FALSE
}

#[cfg(not(windows))]
/// Stub implementation for non-Windows platforms
///
/// # Safety
/// This is a stub function that always fails. It does not access any memory.
pub unsafe fn ChangeDisplaySettingsW(_lpDevMode: *const DEVMODEW, _dwFlags: u32) -> i32 {
    DISP_CHANGE_FAILED
}

#[cfg(not(windows))]
/// Stub implementation for non-Windows platforms
///
/// # Safety
/// This is a stub function that always fails. It does not access any memory.
pub unsafe fn ChangeDisplaySettingsExW(
    _lpszDeviceName: *const u16,
    _lpDevMode: *const DEVMODEW,
    _hwnd: *mut c_void,
    _dwflags: u32,
    _lParam: *mut c_void,
) -> i32 {
    DISP_CHANGE_FAILED
}

/// Pointer to `VIDEOPARAMETERS` for the `lParam` of `ChangeDisplaySettingsExW`
pub(crate) fn video_parameters_ptr(params: Option<&mut VIDEOPARAMETERS>) -> *mut c_void {
    params.map_or(std::ptr::null_mut(), |params| {
        std::ptr::from_mut(params).cast()
    })
}
