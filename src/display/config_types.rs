//! `DISPLAYCONFIG_*` structures, enumerations and flags
//!
//! Definitions mirror `wingdi.h` and `WinUser.h` from the Windows SDK. Every
//! structure is `#[repr(C)]` and keeps the SDK field names so it can be passed
//! straight to `QueryDisplayConfig` and `SetDisplayConfig`.
//!
//! Enumerations the OS writes back are `#[repr(transparent)]` newtypes with
//! associated constants rather than Rust enums, so a value added by a newer
//! Windows release is carried through instead of being undefined behavior.
//! Flag sets are `bitflags` types, which keep unknown bits for the same reason.
//!
//! `DISPLAYCONFIG_MODE_INFO` holds a C union. Read it through
//! [`DISPLAYCONFIG_MODE_INFO::decode`] or the tag-checked accessors, which pick
//! the union arm from `infoType` and nothing else.

#![allow(non_snake_case)]
#![allow(non_camel_case_types)]
#![expect(
    unsafe_code,
    reason = "C union access and zero-initialization of plain-old-data FFI records"
)]

use crate::error::{DisplayInteropError, Result};
use bitflags::bitflags;
use std::fmt;

// Import LUID from windows-rs on Windows, or define a stub for non-Windows platforms
#[cfg(windows)]
pub use windows::Win32::Foundation::LUID;

// For non-Windows platforms (testing), define a stub LUID structure
#[cfg(not(windows))]
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LUID {
    pub LowPart: u32,
    pub HighPart: i32,
}

/// Pack an adapter LUID into a single `u64` (`HighPart` in the upper half)
pub fn luid_to_u64(luid: LUID) -> u64 {
    (u64::from(luid.HighPart.cast_unsigned()) << 32) | u64::from(luid.LowPart)
}

/// Inverse of [`luid_to_u64`]
pub fn luid_from_u64(value: u64) -> LUID {
    let low = u32::try_from(value & u64::from(u32::MAX)).unwrap_or(u32::MAX);
    let high = u32::try_from(value >> 32).unwrap_or(u32::MAX);
    LUID {
        LowPart: low,
        HighPart: high.cast_signed(),
    }
}

/// `LUID` as written in log messages, `HighPart:LowPart` in hex
pub(crate) fn format_luid(luid: LUID) -> String {
    format!("{:08X}:{:08X}", luid.HighPart, luid.LowPart)
}

/// Declares a `#[repr(transparent)]` newtype over an OS enumeration.
macro_rules! os_enum {
    (
        $(#[$meta:meta])*
        pub struct $name:ident($repr:ty) {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = $value:expr,
            )+
        }
    ) => {
        $(#[$meta])*
        #[repr(transparent)]
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
        pub struct $name(pub $repr);

        impl $name {
            $(
                $(#[$vmeta])*
                pub const $variant: Self = Self($value);
            )+

            /// Every value declared by the SDK header
            pub const KNOWN: &'static [Self] = &[$(Self::$variant),+];

            /// SDK name of the value, or `None` for a value this crate does not know
            pub fn name(self) -> Option<&'static str> {
                $(
                    if self == Self::$variant {
                        return Some(stringify!($variant));
                    }
                )+
                None
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self.name() {
                    Some(name) => write!(f, "{}::{}", stringify!($name), name),
                    None => write!(f, "{}({:#x})", stringify!($name), self.0),
                }
            }
        }
    };
}

pub(crate) use os_enum;

os_enum! {
    /// `DISPLAYCONFIG_TOPOLOGY_ID`, returned with `QDC_DATABASE_CURRENT`
    pub struct DISPLAYCONFIG_TOPOLOGY_ID(u32) {
        /// Only the internal display is active
        INTERNAL = 0x0000_0001,
        /// Displays show the same desktop
        CLONE = 0x0000_0002,
        /// Desktop spans all displays
        EXTEND = 0x0000_0004,
        /// Only the external display is active
        EXTERNAL = 0x0000_0008,
    }
}

os_enum! {
    /// `DISPLAYCONFIG_VIDEO_OUTPUT_TECHNOLOGY`
    pub struct DISPLAYCONFIG_VIDEO_OUTPUT_TECHNOLOGY(u32) {
        /// Connector type not covered below
        OTHER = 0xFFFF_FFFF,
        /// VGA (HD15)
        HD15 = 0,
        /// S-Video
        SVIDEO = 1,
        /// Composite video
        COMPOSITE_VIDEO = 2,
        /// Component video
        COMPONENT_VIDEO = 3,
        /// DVI
        DVI = 4,
        /// HDMI
        HDMI = 5,
        /// LVDS
        LVDS = 6,
        /// Japanese D connector
        D_JPN = 8,
        /// SDI
        SDI = 9,
        /// External DisplayPort
        DISPLAYPORT_EXTERNAL = 10,
        /// Embedded DisplayPort
        DISPLAYPORT_EMBEDDED = 11,
        /// External UDI
        UDI_EXTERNAL = 12,
        /// Embedded UDI
        UDI_EMBEDDED = 13,
        /// SDTV dongle
        SDTVDONGLE = 14,
        /// Miracast wireless display
        MIRACAST = 15,
        /// Indirect display over a wired transport
        INDIRECT_WIRED = 16,
        /// Indirect display without a physical connector
        INDIRECT_VIRTUAL = 17,
        /// DisplayPort tunneled over USB4
        DISPLAYPORT_USB_TUNNEL = 18,
        /// Internal connection such as a laptop panel
        INTERNAL = 0x8000_0000,
    }
}

os_enum! {
    /// `DISPLAYCONFIG_ROTATION`
    pub struct DISPLAYCONFIG_ROTATION(u32) {
        /// No rotation
        IDENTITY = 1,
        /// Rotated 90 degrees clockwise
        ROTATE90 = 2,
        /// Rotated 180 degrees
        ROTATE180 = 3,
        /// Rotated 270 degrees clockwise
        ROTATE270 = 4,
    }
}

os_enum! {
    /// `DISPLAYCONFIG_SCALING`
    pub struct DISPLAYCONFIG_SCALING(u32) {
        /// Source and target sizes match
        IDENTITY = 1,
        /// Source centered on the target
        CENTERED = 2,
        /// Source stretched to fill the target
        STRETCHED = 3,
        /// Largest aspect-preserving fit, centered
        ASPECTRATIOCENTEREDMAX = 4,
        /// Driver-defined custom scaling
        CUSTOM = 5,
        /// Let the driver choose
        PREFERRED = 128,
    }
}

os_enum! {
    /// `DISPLAYCONFIG_PIXELFORMAT`
    pub struct DISPLAYCONFIG_PIXELFORMAT(u32) {
        /// 8 bits per pixel
        PIXELFORMAT_8BPP = 1,
        /// 16 bits per pixel
        PIXELFORMAT_16BPP = 2,
        /// 24 bits per pixel
        PIXELFORMAT_24BPP = 3,
        /// 32 bits per pixel
        PIXELFORMAT_32BPP = 4,
        /// Not GDI compatible
        PIXELFORMAT_NONGDI = 5,
    }
}

os_enum! {
    /// `DISPLAYCONFIG_SCANLINE_ORDERING`
    pub struct DISPLAYCONFIG_SCANLINE_ORDERING(u32) {
        /// Not specified
        UNSPECIFIED = 0,
        /// Progressive scan
        PROGRESSIVE = 1,
        /// Interlaced, upper field first
        INTERLACED = 2,
        /// Interlaced, lower field first
        INTERLACED_LOWERFIELDFIRST = 3,
    }
}

impl DISPLAYCONFIG_SCANLINE_ORDERING {
    /// Alias of [`Self::INTERLACED`]
    pub const INTERLACED_UPPERFIELDFIRST: Self = Self::INTERLACED;
}

os_enum! {
    /// `DISPLAYCONFIG_MODE_INFO_TYPE`: selects the arm of the mode record union
    pub struct DISPLAYCONFIG_MODE_INFO_TYPE(u32) {
        /// `sourceMode` is valid
        SOURCE = 1,
        /// `targetMode` is valid
        TARGET = 2,
        /// `desktopImageInfo` is valid
        DESKTOP_IMAGE = 3,
    }
}

os_enum! {
    /// `D3DKMDT_VIDEO_SIGNAL_STANDARD`
    pub struct D3DKMDT_VIDEO_SIGNAL_STANDARD(u32) {
        /// Not initialized
        UNINITIALIZED = 0,
        /// VESA Display Monitor Timing
        VESA_DMT = 1,
        /// VESA Generalized Timing Formula
        VESA_GTF = 2,
        /// VESA Coordinated Video Timing
        VESA_CVT = 3,
        /// IBM
        IBM = 4,
        /// Apple
        APPLE = 5,
        /// NTSC-M
        NTSC_M = 6,
        /// NTSC-J
        NTSC_J = 7,
        /// NTSC 4.43
        NTSC_443 = 8,
        /// PAL-B
        PAL_B = 9,
        /// PAL-B1
        PAL_B1 = 10,
        /// PAL-G
        PAL_G = 11,
        /// PAL-H
        PAL_H = 12,
        /// PAL-I
        PAL_I = 13,
        /// PAL-D
        PAL_D = 14,
        /// PAL-N
        PAL_N = 15,
        /// PAL-NC
        PAL_NC = 16,
        /// SECAM-B
        SECAM_B = 17,
        /// SECAM-D
        SECAM_D = 18,
        /// SECAM-G
        SECAM_G = 19,
        /// SECAM-H
        SECAM_H = 20,
        /// SECAM-K
        SECAM_K = 21,
        /// SECAM-K1
        SECAM_K1 = 22,
        /// SECAM-L
        SECAM_L = 23,
        /// SECAM-L1
        SECAM_L1 = 24,
        /// EIA-861
        EIA_861 = 25,
        /// EIA-861A
        EIA_861A = 26,
        /// EIA-861B
        EIA_861B = 27,
        /// PAL-K
        PAL_K = 28,
        /// PAL-K1
        PAL_K1 = 29,
        /// PAL-L
        PAL_L = 30,
        /// PAL-M
        PAL_M = 31,
        /// Any other standard
        OTHER = 255,
    }
}

bitflags! {
    /// `QDC_*` flags for `GetDisplayConfigBufferSizes` and `QueryDisplayConfig`
    #[repr(transparent)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct QueryDisplayConfigFlags: u32 {
        /// All paths, active or not
        const ALL_PATHS = 0x0000_0001;
        /// Only paths that are currently active
        const ONLY_ACTIVE_PATHS = 0x0000_0002;
        /// Paths from the persistence database for the current connections
        const DATABASE_CURRENT = 0x0000_0004;
        /// Caller understands virtual mode paths
        const VIRTUAL_MODE_AWARE = 0x0000_0010;
        /// Include head-mounted displays
        const INCLUDE_HMD = 0x0000_0020;
        /// Caller understands virtual refresh rates
        const VIRTUAL_REFRESH_RATE_AWARE = 0x0000_0040;
    }
}

bitflags! {
    /// `SDC_*` flags for `SetDisplayConfig`
    #[repr(transparent)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct SetDisplayConfigFlags: u32 {
        /// Switch to the internal-only topology
        const TOPOLOGY_INTERNAL = 0x0000_0001;
        /// Switch to the clone topology
        const TOPOLOGY_CLONE = 0x0000_0002;
        /// Switch to the extend topology
        const TOPOLOGY_EXTEND = 0x0000_0004;
        /// Switch to the external-only topology
        const TOPOLOGY_EXTERNAL = 0x0000_0008;
        /// Look up the supplied paths in the database
        const TOPOLOGY_SUPPLIED = 0x0000_0010;
        /// Use the supplied path and mode arrays as-is
        const USE_SUPPLIED_DISPLAY_CONFIG = 0x0000_0020;
        /// Only validate the configuration
        const VALIDATE = 0x0000_0040;
        /// Apply the configuration
        const APPLY = 0x0000_0080;
        /// Do not let the OS optimize the configuration
        const NO_OPTIMIZATION = 0x0000_0100;
        /// Persist the configuration to the database
        const SAVE_TO_DATABASE = 0x0000_0200;
        /// Let the OS change the supplied configuration to make it work
        const ALLOW_CHANGES = 0x0000_0400;
        /// Persist the path only if it is required
        const PATH_PERSIST_IF_REQUIRED = 0x0000_0800;
        /// Re-enumerate modes
        const FORCE_MODE_ENUMERATION = 0x0000_1000;
        /// Let the OS reorder paths
        const ALLOW_PATH_ORDER_CHANGES = 0x0000_2000;
        /// Caller understands virtual mode paths
        const VIRTUAL_MODE_AWARE = 0x0000_8000;
        /// Caller understands virtual refresh rates
        const VIRTUAL_REFRESH_RATE_AWARE = 0x0002_0000;

        /// Use the last persisted configuration for the current connections
        const USE_DATABASE_CURRENT = Self::TOPOLOGY_INTERNAL.bits()
            | Self::TOPOLOGY_CLONE.bits()
            | Self::TOPOLOGY_EXTEND.bits()
            | Self::TOPOLOGY_EXTERNAL.bits();
    }
}

bitflags! {
    /// `DISPLAYCONFIG_PATH_*` flags of `DISPLAYCONFIG_PATH_INFO`
    #[repr(transparent)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct PathFlags: u32 {
        /// The path is active
        const ACTIVE = 0x0000_0001;
        /// The path prefers an unscaled mode
        const PREFERRED_UNSCALED = 0x0000_0004;
        /// The path supports virtual modes
        const SUPPORT_VIRTUAL_MODE = 0x0000_0008;
        /// The path runs a boosted refresh rate
        const BOOST_REFRESH_RATE = 0x0000_0010;
    }
}

bitflags! {
    /// `DISPLAYCONFIG_SOURCE_*` status flags
    #[repr(transparent)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct SourceStatusFlags: u32 {
        /// The source is used by an active path
        const IN_USE = 0x0000_0001;
    }
}

bitflags! {
    /// `DISPLAYCONFIG_TARGET_*` status flags
    #[repr(transparent)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct TargetStatusFlags: u32 {
        /// The target is used by an active path
        const IN_USE = 0x0000_0001;
        /// The output can be forced active
        const FORCIBLE = 0x0000_0002;
        /// Forced available by the boot display
        const FORCED_AVAILABILITY_BOOT = 0x0000_0004;
        /// Forced available by the path
        const FORCED_AVAILABILITY_PATH = 0x0000_0008;
        /// Forced available by the system
        const FORCED_AVAILABILITY_SYSTEM = 0x0000_0010;
        /// The target is a head-mounted display
        const IS_HMD = 0x0000_0020;
    }
}

/// Mode index meaning "no mode" in path source/target infos
pub const DISPLAYCONFIG_PATH_MODE_IDX_INVALID: u32 = 0xFFFF_FFFF;

/// 16-bit invalid index used by the virtual-mode-aware path bitfields
pub const DISPLAYCONFIG_PATH_SUB_IDX_INVALID: u32 = 0xFFFF;

/// `DISPLAYCONFIG_RATIONAL`
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DISPLAYCONFIG_RATIONAL {
    pub Numerator: u32,
    pub Denominator: u32,
}

impl DISPLAYCONFIG_RATIONAL {
    /// Quotient as a float, `None` when the denominator is zero
    pub fn value(self) -> Option<f64> {
        (self.Denominator != 0).then(|| f64::from(self.Numerator) / f64::from(self.Denominator))
    }
}

/// `DISPLAYCONFIG_2DREGION`
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DISPLAYCONFIG_2DREGION {
    pub cx: u32,
    pub cy: u32,
}

/// `POINTL`
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct POINTL {
    pub x: i32,
    pub y: i32,
}

/// `RECTL`
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RECTL {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

/// `DISPLAYCONFIG_VIDEO_SIGNAL_INFO`
///
/// `videoStandard` is the C union of the plain value and the
/// `AdditionalSignalInfo` bitfield; use the accessors to split it.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DISPLAYCONFIG_VIDEO_SIGNAL_INFO {
    pub pixelRate: u64,
    pub hSyncFreq: DISPLAYCONFIG_RATIONAL,
    pub vSyncFreq: DISPLAYCONFIG_RATIONAL,
    pub activeSize: DISPLAYCONFIG_2DREGION,
    pub totalSize: DISPLAYCONFIG_2DREGION,
    pub videoStandard: u32,
    pub scanLineOrdering: DISPLAYCONFIG_SCANLINE_ORDERING,
}

impl DISPLAYCONFIG_VIDEO_SIGNAL_INFO {
    /// Low 16 bits of the additional signal info
    pub fn video_standard(&self) -> D3DKMDT_VIDEO_SIGNAL_STANDARD {
        D3DKMDT_VIDEO_SIGNAL_STANDARD(self.videoStandard & 0xFFFF)
    }

    /// Six-bit vertical sync frequency divider
    pub fn vsync_freq_divider(&self) -> u32 {
        (self.videoStandard >> 16) & 0x3F
    }
}

/// `DISPLAYCONFIG_TARGET_MODE`
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DISPLAYCONFIG_TARGET_MODE {
    pub targetVideoSignalInfo: DISPLAYCONFIG_VIDEO_SIGNAL_INFO,
}

/// `DISPLAYCONFIG_SOURCE_MODE`
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DISPLAYCONFIG_SOURCE_MODE {
    pub width: u32,
    pub height: u32,
    pub pixelFormat: DISPLAYCONFIG_PIXELFORMAT,
    pub position: POINTL,
}

/// `DISPLAYCONFIG_DESKTOP_IMAGE_INFO`
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DISPLAYCONFIG_DESKTOP_IMAGE_INFO {
    pub PathSourceSize: POINTL,
    pub DesktopImageRegion: RECTL,
    pub DesktopImageClip: RECTL,
}

/// Payload union of `DISPLAYCONFIG_MODE_INFO`
#[repr(C)]
#[derive(Clone, Copy)]
pub union DISPLAYCONFIG_MODE_INFO_UNION {
    pub targetMode: DISPLAYCONFIG_TARGET_MODE,
    pub sourceMode: DISPLAYCONFIG_SOURCE_MODE,
    pub desktopImageInfo: DISPLAYCONFIG_DESKTOP_IMAGE_INFO,
}

/// `DISPLAYCONFIG_MODE_INFO`
///
/// The common prefix sits at fixed offsets (`infoType` 0, `id` 4,
/// `adapterId` 8) and the payload at 16. Only the arm named by `infoType`
/// holds meaningful data.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct DISPLAYCONFIG_MODE_INFO {
    pub infoType: DISPLAYCONFIG_MODE_INFO_TYPE,
    pub id: u32,
    pub adapterId: LUID,
    pub modeInfo: DISPLAYCONFIG_MODE_INFO_UNION,
}

impl DISPLAYCONFIG_MODE_INFO {
    /// Source mode, if `infoType` says this record holds one
    pub fn source_mode(&self) -> Option<&DISPLAYCONFIG_SOURCE_MODE> {
        // SAFETY: the tag names the source arm, and every bit pattern is a valid
        // DISPLAYCONFIG_SOURCE_MODE (plain integers).
        (self.infoType == DISPLAYCONFIG_MODE_INFO_TYPE::SOURCE)
            .then(|| unsafe { &self.modeInfo.sourceMode })
    }

    /// Target mode, if `infoType` says this record holds one
    pub fn target_mode(&self) -> Option<&DISPLAYCONFIG_TARGET_MODE> {
        // SAFETY: the tag names the target arm; the arm is plain integers.
        (self.infoType == DISPLAYCONFIG_MODE_INFO_TYPE::TARGET)
            .then(|| unsafe { &self.modeInfo.targetMode })
    }

    /// Desktop image info, if `infoType` says this record holds one
    pub fn desktop_image_info(&self) -> Option<&DISPLAYCONFIG_DESKTOP_IMAGE_INFO> {
        // SAFETY: the tag names the desktop image arm; the arm is plain integers.
        (self.infoType == DISPLAYCONFIG_MODE_INFO_TYPE::DESKTOP_IMAGE)
            .then(|| unsafe { &self.modeInfo.desktopImageInfo })
    }

    /// Decode into the tagged [`ModeInfo`] representation
    pub fn decode(&self) -> Result<ModeInfo> {
        ModeInfo::try_from(self)
    }
}

impl Default for DISPLAYCONFIG_MODE_INFO {
    fn default() -> Self {
        // SAFETY: all fields are integers; zero is a valid value for each.
        unsafe { std::mem::zeroed() }
    }
}

impl fmt::Debug for DISPLAYCONFIG_MODE_INFO {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = f.debug_struct("DISPLAYCONFIG_MODE_INFO");
        out.field("infoType", &self.infoType)
            .field("id", &self.id)
            .field("adapterId", &self.adapterId);
        if let Some(mode) = self.source_mode() {
            out.field("sourceMode", mode);
        } else if let Some(mode) = self.target_mode() {
            out.field("targetMode", mode);
        } else if let Some(info) = self.desktop_image_info() {
            out.field("desktopImageInfo", info);
        }
        out.finish()
    }
}

/// Tagged view of a `DISPLAYCONFIG_MODE_INFO`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeInfo {
    /// Desktop source mode (resolution, pixel format, position)
    Source {
        /// Source id
        id: u32,
        /// Adapter owning the source
        adapter_id: LUID,
        /// Mode payload
        mode: DISPLAYCONFIG_SOURCE_MODE,
    },
    /// Monitor target mode (video signal timing)
    Target {
        /// Target id
        id: u32,
        /// Adapter owning the target
        adapter_id: LUID,
        /// Mode payload
        mode: DISPLAYCONFIG_TARGET_MODE,
    },
    /// Desktop image placement for virtual-mode-aware paths
    DesktopImage {
        /// Target id
        id: u32,
        /// Adapter owning the target
        adapter_id: LUID,
        /// Image placement payload
        info: DISPLAYCONFIG_DESKTOP_IMAGE_INFO,
    },
}

impl ModeInfo {
    /// Kind tag this variant is stored under
    pub fn kind(&self) -> DISPLAYCONFIG_MODE_INFO_TYPE {
        match self {
            Self::Source { .. } => DISPLAYCONFIG_MODE_INFO_TYPE::SOURCE,
            Self::Target { .. } => DISPLAYCONFIG_MODE_INFO_TYPE::TARGET,
            Self::DesktopImage { .. } => DISPLAYCONFIG_MODE_INFO_TYPE::DESKTOP_IMAGE,
        }
    }

    /// Source or target id
    pub fn id(&self) -> u32 {
        match self {
            Self::Source { id, .. } | Self::Target { id, .. } | Self::DesktopImage { id, .. } => {
                *id
            }
        }
    }

    /// Adapter LUID
    pub fn adapter_id(&self) -> LUID {
        match self {
            Self::Source { adapter_id, .. }
            | Self::Target { adapter_id, .. }
            | Self::DesktopImage { adapter_id, .. } => *adapter_id,
        }
    }
}

impl TryFrom<&DISPLAYCONFIG_MODE_INFO> for ModeInfo {
    type Error = DisplayInteropError;

    fn try_from(raw: &DISPLAYCONFIG_MODE_INFO) -> Result<Self> {
        let (id, adapter_id) = (raw.id, raw.adapterId);
        if let Some(mode) = raw.source_mode() {
            Ok(Self::Source {
                id,
                adapter_id,
                mode: *mode,
            })
        } else if let Some(mode) = raw.target_mode() {
            Ok(Self::Target {
                id,
                adapter_id,
                mode: *mode,
            })
        } else if let Some(info) = raw.desktop_image_info() {
            Ok(Self::DesktopImage {
                id,
                adapter_id,
                info: *info,
            })
        } else {
            Err(DisplayInteropError::UnknownModeInfoType(raw.infoType.0))
        }
    }
}

impl From<ModeInfo> for DISPLAYCONFIG_MODE_INFO {
    fn from(mode: ModeInfo) -> Self {
        let mut raw = Self {
            infoType: mode.kind(),
            id: mode.id(),
            adapterId: mode.adapter_id(),
            ..Self::default()
        };
        match mode {
            ModeInfo::Source { mode, .. } => raw.modeInfo.sourceMode = mode,
            ModeInfo::Target { mode, .. } => raw.modeInfo.targetMode = mode,
            ModeInfo::DesktopImage { info, .. } => raw.modeInfo.desktopImageInfo = info,
        }
        raw
    }
}

/// `DISPLAYCONFIG_PATH_SOURCE_INFO`
///
/// `modeInfoIdx` is the C union of the plain index and the
/// `cloneGroupId`/`sourceModeInfoIdx` bitfield used when the path has
/// [`PathFlags::SUPPORT_VIRTUAL_MODE`].
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DISPLAYCONFIG_PATH_SOURCE_INFO {
    pub adapterId: LUID,
    pub id: u32,
    pub modeInfoIdx: u32,
    pub statusFlags: SourceStatusFlags,
}

impl DISPLAYCONFIG_PATH_SOURCE_INFO {
    /// Clone group of a virtual-mode-aware path (low 16 bits)
    pub fn clone_group_id(&self) -> u32 {
        self.modeInfoIdx & 0xFFFF
    }

    /// Source mode index of a virtual-mode-aware path (high 16 bits)
    pub fn source_mode_info_idx(&self) -> u32 {
        self.modeInfoIdx >> 16
    }
}

/// `DISPLAYCONFIG_PATH_TARGET_INFO`
///
/// `modeInfoIdx` is the C union of the plain index and the
/// `desktopModeInfoIdx`/`targetModeInfoIdx` bitfield used when the path has
/// [`PathFlags::SUPPORT_VIRTUAL_MODE`]. `targetAvailable` is a Win32 `BOOL`.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DISPLAYCONFIG_PATH_TARGET_INFO {
    pub adapterId: LUID,
    pub id: u32,
    pub modeInfoIdx: u32,
    pub outputTechnology: DISPLAYCONFIG_VIDEO_OUTPUT_TECHNOLOGY,
    pub rotation: DISPLAYCONFIG_ROTATION,
    pub scaling: DISPLAYCONFIG_SCALING,
    pub refreshRate: DISPLAYCONFIG_RATIONAL,
    pub scanLineOrdering: DISPLAYCONFIG_SCANLINE_ORDERING,
    pub targetAvailable: i32,
    pub statusFlags: TargetStatusFlags,
}

impl DISPLAYCONFIG_PATH_TARGET_INFO {
    /// Whether a monitor is connected to the target
    pub fn is_target_available(&self) -> bool {
        self.targetAvailable != 0
    }

    /// Desktop image mode index of a virtual-mode-aware path (low 16 bits)
    pub fn desktop_mode_info_idx(&self) -> u32 {
        self.modeInfoIdx & 0xFFFF
    }

    /// Target mode index of a virtual-mode-aware path (high 16 bits)
    pub fn target_mode_info_idx(&self) -> u32 {
        self.modeInfoIdx >> 16
    }
}

/// `DISPLAYCONFIG_PATH_INFO`
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DISPLAYCONFIG_PATH_INFO {
    pub sourceInfo: DISPLAYCONFIG_PATH_SOURCE_INFO,
    pub targetInfo: DISPLAYCONFIG_PATH_TARGET_INFO,
    pub flags: PathFlags,
}

impl DISPLAYCONFIG_PATH_INFO {
    /// Whether the path is part of the active topology
    pub fn is_active(&self) -> bool {
        self.flags.contains(PathFlags::ACTIVE)
    }

    /// Source mode index, resolving the virtual-mode bitfield when in use
    pub fn source_mode_index(&self) -> Option<usize> {
        let idx = if self.flags.contains(PathFlags::SUPPORT_VIRTUAL_MODE) {
            Some(self.sourceInfo.source_mode_info_idx())
                .filter(|&i| i != DISPLAYCONFIG_PATH_SUB_IDX_INVALID)
        } else {
            Some(self.sourceInfo.modeInfoIdx).filter(|&i| i != DISPLAYCONFIG_PATH_MODE_IDX_INVALID)
        };
        idx.map(|i| i as usize)
    }

    /// Target mode index, resolving the virtual-mode bitfield when in use
    pub fn target_mode_index(&self) -> Option<usize> {
        let idx = if self.flags.contains(PathFlags::SUPPORT_VIRTUAL_MODE) {
            Some(self.targetInfo.target_mode_info_idx())
                .filter(|&i| i != DISPLAYCONFIG_PATH_SUB_IDX_INVALID)
        } else {
            Some(self.targetInfo.modeInfoIdx).filter(|&i| i != DISPLAYCONFIG_PATH_MODE_IDX_INVALID)
        };
        idx.map(|i| i as usize)
    }
}
