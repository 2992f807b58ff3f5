//! `DEVMODEW`, `VIDEOPARAMETERS` and the flags of the legacy display settings calls
//!
//! Only the display arm of the `DEVMODEW` unions is modelled. The record is
//! still the full 220 bytes the OS expects in `dmSize`.

#![allow(non_snake_case)]
#![allow(non_camel_case_types)]
#![expect(unsafe_code, reason = "zero-initialization of plain-old-data FFI records")]

use super::config_types::{POINTL, os_enum};
use super::wide::WideBuf;
use bitflags::bitflags;
use std::fmt;
use std::mem::size_of;

#[cfg(windows)]
pub use windows::core::GUID;

/// Layout-compatible stand-in for `windows::core::GUID` on non-Windows platforms
#[cfg(not(windows))]
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct GUID {
    pub data1: u32,
    pub data2: u16,
    pub data3: u16,
    pub data4: [u8; 8],
}

/// `ENUM_CURRENT_SETTINGS`
pub const ENUM_CURRENT_SETTINGS: u32 = 0xFFFF_FFFF;
/// `ENUM_REGISTRY_SETTINGS`
pub const ENUM_REGISTRY_SETTINGS: u32 = 0xFFFF_FFFE;

/// Which mode `EnumDisplaySettings[Ex]W` should return
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnumDisplaySettingsMode {
    /// The mode currently in use
    Current,
    /// The mode stored in the registry
    Registry,
    /// The n-th mode supported by the device, starting at zero
    Index(u32),
}

impl EnumDisplaySettingsMode {
    /// Value passed as `iModeNum`
    pub fn as_raw(self) -> u32 {
        match self {
            Self::Current => ENUM_CURRENT_SETTINGS,
            Self::Registry => ENUM_REGISTRY_SETTINGS,
            Self::Index(index) => index,
        }
    }
}

impl From<u32> for EnumDisplaySettingsMode {
    fn from(raw: u32) -> Self {
        match raw {
            ENUM_CURRENT_SETTINGS => Self::Current,
            ENUM_REGISTRY_SETTINGS => Self::Registry,
            index => Self::Index(index),
        }
    }
}

bitflags! {
    /// `EDS_*` flags of `EnumDisplaySettingsExW`
    #[repr(transparent)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct EnumDisplaySettingsFlags: u32 {
        /// Include modes the monitor may not support
        const RAW_MODE = 0x0000_0002;
        /// Include modes in all orientations
        const ROTATED_MODE = 0x0000_0004;
    }
}

bitflags! {
    /// `CDS_*` flags of `ChangeDisplaySettings[Ex]W`
    #[repr(transparent)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ChangeDisplaySettingsFlags: u32 {
        /// Change the mode and write it to the registry
        const UPDATE_REGISTRY = 0x0000_0001;
        /// Only test whether the mode could be set
        const TEST = 0x0000_0002;
        /// The mode is temporary
        const FULLSCREEN = 0x0000_0004;
        /// With `UPDATE_REGISTRY`, store the mode for all users
        const GLOBAL = 0x0000_0008;
        /// Make this device the primary device
        const SET_PRIMARY = 0x0000_0010;
        /// `lParam` points to a `VIDEOPARAMETERS` (Ex only)
        const VIDEO_PARAMETERS = 0x0000_0020;
        /// Allow modes the monitor reports as unsafe (Ex only)
        const ENABLE_UNSAFE_MODES = 0x0000_0100;
        /// Disallow modes the monitor reports as unsafe (Ex only)
        const DISABLE_UNSAFE_MODES = 0x0000_0200;
        /// With `UPDATE_REGISTRY`, stage the change without applying it
        const NORESET = 0x1000_0000;
        /// Same as `RESET`, for `ChangeDisplaySettingsExW`
        const RESET_EX = 0x2000_0000;
        /// Apply even if the settings match the current ones
        const RESET = 0x4000_0000;
    }
}

impl ChangeDisplaySettingsFlags {
    /// `0`: change the mode dynamically without touching the registry
    pub const DYNAMIC: Self = Self::empty();
}

bitflags! {
    /// `DM_*` bits of `DEVMODEW::dmFields` that apply to displays
    #[repr(transparent)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct DeviceModeFields: u32 {
        /// `dmPosition`
        const POSITION = 0x0000_0020;
        /// `dmDisplayOrientation`
        const DISPLAY_ORIENTATION = 0x0000_0080;
        /// `dmLogPixels`
        const LOG_PIXELS = 0x0002_0000;
        /// `dmBitsPerPel`
        const BITS_PER_PEL = 0x0004_0000;
        /// `dmPelsWidth`
        const PELS_WIDTH = 0x0008_0000;
        /// `dmPelsHeight`
        const PELS_HEIGHT = 0x0010_0000;
        /// `dmDisplayFlags`
        const DISPLAY_FLAGS = 0x0020_0000;
        /// `dmDisplayFrequency`
        const DISPLAY_FREQUENCY = 0x0040_0000;
        /// `dmPanningWidth`
        const PANNING_WIDTH = 0x0800_0000;
        /// `dmPanningHeight`
        const PANNING_HEIGHT = 0x1000_0000;
        /// `dmDisplayFixedOutput`
        const DISPLAY_FIXED_OUTPUT = 0x2000_0000;
    }
}

bitflags! {
    /// `DM_*` bits of `DEVMODEW::dmDisplayFlags`
    #[repr(transparent)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct DisplayModeFlags: u32 {
        /// Grayscale display
        const GRAYSCALE = 0x0000_0001;
        /// Interlaced mode
        const INTERLACED = 0x0000_0002;
    }
}

os_enum! {
    /// `DMDO_*` display orientation
    pub struct DisplayOrientation(u32) {
        /// Natural orientation
        DEFAULT = 0,
        /// Rotated 90 degrees
        ROTATE90 = 1,
        /// Rotated 180 degrees
        ROTATE180 = 2,
        /// Rotated 270 degrees
        ROTATE270 = 3,
    }
}

os_enum! {
    /// `DMDFO_*` fixed-output scaling of a lower resolution mode
    pub struct DisplayFixedOutput(u32) {
        /// Driver default
        DEFAULT = 0,
        /// Stretch to fill the panel
        STRETCH = 1,
        /// Center on the panel
        CENTER = 2,
    }
}

/// `DEVMODEW` with the display arms of its unions
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DEVMODEW {
    pub dmDeviceName: WideBuf<32>,
    pub dmSpecVersion: u16,
    pub dmDriverVersion: u16,
    pub dmSize: u16,
    pub dmDriverExtra: u16,
    pub dmFields: DeviceModeFields,
    pub dmPosition: POINTL,
    pub dmDisplayOrientation: DisplayOrientation,
    pub dmDisplayFixedOutput: DisplayFixedOutput,
    pub dmColor: i16,
    pub dmDuplex: i16,
    pub dmYResolution: i16,
    pub dmTTOption: i16,
    pub dmCollate: i16,
    pub dmFormName: WideBuf<32>,
    pub dmLogPixels: u16,
    pub dmBitsPerPel: u32,
    pub dmPelsWidth: u32,
    pub dmPelsHeight: u32,
    pub dmDisplayFlags: DisplayModeFlags,
    pub dmDisplayFrequency: u32,
    pub dmICMMethod: u32,
    pub dmICMIntent: u32,
    pub dmMediaType: u32,
    pub dmDitherType: u32,
    pub dmReserved1: u32,
    pub dmReserved2: u32,
    pub dmPanningWidth: u32,
    pub dmPanningHeight: u32,
}

/// `DM_SPECVERSION` for Windows 2000 and later
pub const DM_SPECVERSION: u16 = 0x0401;

impl DEVMODEW {
    /// Empty record with `dmSize` and `dmSpecVersion` set and no fields selected
    #[expect(clippy::cast_possible_truncation, reason = "220 fits in u16")]
    pub fn new() -> Self {
        // SAFETY: every field is an integer or integer array; all-zero is valid.
        let mut devmode: Self = unsafe { std::mem::zeroed() };
        devmode.dmSize = size_of::<Self>() as u16;
        devmode.dmSpecVersion = DM_SPECVERSION;
        devmode
    }

    /// Whether the OS or caller marked `field` as valid
    pub fn has(&self, field: DeviceModeFields) -> bool {
        self.dmFields.contains(field)
    }

    /// Desktop position, if set
    pub fn position(&self) -> Option<POINTL> {
        self.has(DeviceModeFields::POSITION).then_some(self.dmPosition)
    }

    /// Set the desktop position
    pub fn set_position(&mut self, x: i32, y: i32) {
        self.dmPosition = POINTL { x, y };
        self.dmFields |= DeviceModeFields::POSITION;
    }

    /// Orientation, if set
    pub fn orientation(&self) -> Option<DisplayOrientation> {
        self.has(DeviceModeFields::DISPLAY_ORIENTATION)
            .then_some(self.dmDisplayOrientation)
    }

    /// Set the orientation
    pub fn set_orientation(&mut self, orientation: DisplayOrientation) {
        self.dmDisplayOrientation = orientation;
        self.dmFields |= DeviceModeFields::DISPLAY_ORIENTATION;
    }

    /// Set how a lower resolution is shown on a fixed-resolution panel
    pub fn set_fixed_output(&mut self, fixed_output: DisplayFixedOutput) {
        self.dmDisplayFixedOutput = fixed_output;
        self.dmFields |= DeviceModeFields::DISPLAY_FIXED_OUTPUT;
    }

    /// Color depth in bits per pixel, if set
    pub fn bits_per_pel(&self) -> Option<u32> {
        self.has(DeviceModeFields::BITS_PER_PEL)
            .then_some(self.dmBitsPerPel)
    }

    /// Set the color depth
    pub fn set_bits_per_pel(&mut self, bits: u32) {
        self.dmBitsPerPel = bits;
        self.dmFields |= DeviceModeFields::BITS_PER_PEL;
    }

    /// Resolution in pixels, if both dimensions are set
    pub fn resolution(&self) -> Option<(u32, u32)> {
        self.has(DeviceModeFields::PELS_WIDTH | DeviceModeFields::PELS_HEIGHT)
            .then_some((self.dmPelsWidth, self.dmPelsHeight))
    }

    /// Set the resolution
    pub fn set_resolution(&mut self, width: u32, height: u32) {
        self.dmPelsWidth = width;
        self.dmPelsHeight = height;
        self.dmFields |= DeviceModeFields::PELS_WIDTH | DeviceModeFields::PELS_HEIGHT;
    }

    /// Set the display flags
    pub fn set_display_flags(&mut self, flags: DisplayModeFlags) {
        self.dmDisplayFlags = flags;
        self.dmFields |= DeviceModeFields::DISPLAY_FLAGS;
    }

    /// Refresh rate in hertz, if set
    ///
    /// `0` and `1` mean the hardware default.
    pub fn display_frequency(&self) -> Option<u32> {
        self.has(DeviceModeFields::DISPLAY_FREQUENCY)
            .then_some(self.dmDisplayFrequency)
    }

    /// Set the refresh rate
    pub fn set_display_frequency(&mut self, hertz: u32) {
        self.dmDisplayFrequency = hertz;
        self.dmFields |= DeviceModeFields::DISPLAY_FREQUENCY;
    }
}

impl Default for DEVMODEW {
    fn default() -> Self {
        Self::new()
    }
}

/// `VP_COMMAND_GET`: read the TV-out parameters
pub const VP_COMMAND_GET: u32 = 0x0001;
/// `VP_COMMAND_SET`: write the TV-out parameters
pub const VP_COMMAND_SET: u32 = 0x0002;

/// `VIDEOPARAMETERS` (`tvout.h`), the `lParam` of `CDS_VIDEOPARAMETERS`
///
/// Every `dw*` field is a 32-bit `ULONG`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VIDEOPARAMETERS {
    pub Guid: GUID,
    pub dwOffset: u32,
    pub dwCommand: u32,
    pub dwFlags: u32,
    pub dwMode: u32,
    pub dwTVStandard: u32,
    pub dwAvailableModes: u32,
    pub dwAvailableTVStandard: u32,
    pub dwFlickerFilter: u32,
    pub dwOverScanX: u32,
    pub dwOverScanY: u32,
    pub dwMaxUnscaledX: u32,
    pub dwMaxUnscaledY: u32,
    pub dwPositionX: u32,
    pub dwPositionY: u32,
    pub dwBrightness: u32,
    pub dwContrast: u32,
    pub dwCPType: u32,
    pub dwCPCommand: u32,
    pub dwCPStandard: u32,
    pub dwCPKey: u32,
    pub bCP_APSTriggerBits: u32,
    pub bOEMCopyProtection: [u8; 256],
}

impl Default for VIDEOPARAMETERS {
    fn default() -> Self {
        // SAFETY: GUID, integers and a byte array; all-zero is valid.
        unsafe { std::mem::zeroed() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::offset_of;

    #[test]
    fn test_devmode_layout() {
        assert_eq!(size_of::<DEVMODEW>(), 220);
        assert_eq!(offset_of!(DEVMODEW, dmDeviceName), 0);
        assert_eq!(offset_of!(DEVMODEW, dmSpecVersion), 64);
        assert_eq!(offset_of!(DEVMODEW, dmDriverVersion), 66);
        assert_eq!(offset_of!(DEVMODEW, dmSize), 68);
        assert_eq!(offset_of!(DEVMODEW, dmDriverExtra), 70);
        assert_eq!(offset_of!(DEVMODEW, dmFields), 72);
        assert_eq!(offset_of!(DEVMODEW, dmPosition), 76);
        assert_eq!(offset_of!(DEVMODEW, dmDisplayOrientation), 84);
        assert_eq!(offset_of!(DEVMODEW, dmDisplayFixedOutput), 88);
        assert_eq!(offset_of!(DEVMODEW, dmColor), 92);
        assert_eq!(offset_of!(DEVMODEW, dmCollate), 100);
        assert_eq!(offset_of!(DEVMODEW, dmFormName), 102);
        assert_eq!(offset_of!(DEVMODEW, dmLogPixels), 166);
        assert_eq!(offset_of!(DEVMODEW, dmBitsPerPel), 168);
        assert_eq!(offset_of!(DEVMODEW, dmPelsWidth), 172);
        assert_eq!(offset_of!(DEVMODEW, dmPelsHeight), 176);
        assert_eq!(offset_of!(DEVMODEW, dmDisplayFlags), 180);
        assert_eq!(offset_of!(DEVMODEW, dmDisplayFrequency), 184);
        assert_eq!(offset_of!(DEVMODEW, dmPanningHeight), 216);
    }

    #[test]
    fn test_video_parameters_layout() {
        assert_eq!(size_of::<GUID>(), 16);
        assert_eq!(size_of::<VIDEOPARAMETERS>(), 356);
        assert_eq!(offset_of!(VIDEOPARAMETERS, dwOffset), 16);
        assert_eq!(offset_of!(VIDEOPARAMETERS, bCP_APSTriggerBits), 96);
        assert_eq!(offset_of!(VIDEOPARAMETERS, bOEMCopyProtection), 100);
    }

    #[test]
    fn test_new_sets_size_and_no_fields() {
        let devmode = DEVMODEW::new();
        assert_eq!(devmode.dmSize, 220);
        assert_eq!(devmode.dmDriverExtra, 0);
        assert!(devmode.dmFields.is_empty());
        assert_eq!(devmode.resolution(), None);
    }

    #[test]
    fn test_setters_mark_fields() {
        let mut devmode = DEVMODEW::new();
        devmode.set_resolution(3840, 2160);
        devmode.set_display_frequency(120);
        devmode.set_position(-1920, 0);
        assert_eq!(devmode.resolution(), Some((3840, 2160)));
        assert_eq!(devmode.display_frequency(), Some(120));
        assert_eq!(devmode.position(), Some(POINTL { x: -1920, y: 0 }));
        assert_eq!(devmode.bits_per_pel(), None);
        assert_eq!(
            devmode.dmFields,
            DeviceModeFields::PELS_WIDTH
                | DeviceModeFields::PELS_HEIGHT
                | DeviceModeFields::DISPLAY_FREQUENCY
                | DeviceModeFields::POSITION
        );

        devmode.set_orientation(DisplayOrientation::ROTATE90);
        assert_eq!(devmode.orientation(), Some(DisplayOrientation::ROTATE90));
    }

    #[test]
    fn test_enum_settings_mode_raw_values() {
        assert_eq!(EnumDisplaySettingsMode::Current.as_raw(), 0xFFFF_FFFF);
        assert_eq!(EnumDisplaySettingsMode::Registry.as_raw(), 0xFFFF_FFFE);
        assert_eq!(EnumDisplaySettingsMode::Index(3).as_raw(), 3);
        assert_eq!(
            EnumDisplaySettingsMode::from(u32::MAX),
            EnumDisplaySettingsMode::Current
        );
    }

    #[test]
    fn test_dynamic_is_zero() {
        assert_eq!(ChangeDisplaySettingsFlags::DYNAMIC.bits(), 0);
        assert_eq!(
            (ChangeDisplaySettingsFlags::UPDATE_REGISTRY | ChangeDisplaySettingsFlags::NORESET)
                .bits(),
            0x1000_0001
        );
    }
}
