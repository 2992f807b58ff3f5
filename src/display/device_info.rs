//! Device-info packets for `DisplayConfigGetDeviceInfo` and `DisplayConfigSetDeviceInfo`
//!
//! Every packet starts with a [`DISPLAYCONFIG_DEVICE_INFO_HEADER`] whose `type`
//! selects the request and whose `size` must equal the size of the whole packet.
//! The OS reads the header, then reads or writes the rest of the packet in place.

#![allow(non_snake_case)]
#![allow(non_camel_case_types)]
#![expect(
    unsafe_code,
    reason = "DeviceInfoPacket is an unsafe trait; packets are zero-initialized POD records"
)]

use super::config_types::{
    DISPLAYCONFIG_TARGET_MODE, DISPLAYCONFIG_VIDEO_OUTPUT_TECHNOLOGY, LUID, os_enum,
};
use super::wide::WideBuf;
use bitflags::bitflags;
use std::fmt;
use std::mem::size_of;

os_enum! {
    /// `DISPLAYCONFIG_DEVICE_INFO_TYPE`
    ///
    /// Specifies the type of display device info to configure or obtain through
    /// `DisplayConfigSetDeviceInfo` or `DisplayConfigGetDeviceInfo`.
    pub struct DISPLAYCONFIG_DEVICE_INFO_TYPE(u32) {
        /// GDI device name of a source
        GET_SOURCE_NAME = 1,
        /// Monitor name, connector and EDID ids of a target
        GET_TARGET_NAME = 2,
        /// Preferred mode of a target
        GET_TARGET_PREFERRED_MODE = 3,
        /// Device path of an adapter
        GET_ADAPTER_NAME = 4,
        /// Persistence of a target
        SET_TARGET_PERSISTENCE = 5,
        /// Base output technology of a target
        GET_TARGET_BASE_TYPE = 6,
        /// Whether a target supports virtual resolution
        GET_SUPPORT_VIRTUAL_RESOLUTION = 7,
        /// Enable or disable virtual resolution on a target
        SET_SUPPORT_VIRTUAL_RESOLUTION = 8,
        /// Advanced color capabilities and state of a target
        GET_ADVANCED_COLOR_INFO = 9,
        /// Enable or disable advanced color on a target
        SET_ADVANCED_COLOR_STATE = 10,
        /// SDR white level of a target
        GET_SDR_WHITE_LEVEL = 11,
        /// Monitor specialization state
        GET_MONITOR_SPECIALIZATION = 12,
        /// Set monitor specialization
        SET_MONITOR_SPECIALIZATION = 13,
        /// Reserved
        SET_RESERVED1 = 14,
        /// Advanced color info including the active color mode (Windows 11 24H2+)
        GET_ADVANCED_COLOR_INFO_2 = 15,
        /// Enable or disable HDR (Windows 11 24H2+)
        SET_HDR_STATE = 16,
        /// Enable or disable wide color gamut (Windows 11 24H2+)
        SET_WCG_STATE = 17,
    }
}

os_enum! {
    /// `DISPLAYCONFIG_COLOR_ENCODING`
    pub struct DISPLAYCONFIG_COLOR_ENCODING(u32) {
        /// RGB
        RGB = 0,
        /// YCbCr 4:4:4
        YCBCR444 = 1,
        /// YCbCr 4:2:2
        YCBCR422 = 2,
        /// YCbCr 4:2:0
        YCBCR420 = 3,
        /// Intensity only
        INTENSITY = 4,
    }
}

os_enum! {
    /// `DISPLAYCONFIG_ADVANCED_COLOR_MODE`
    pub struct DISPLAYCONFIG_ADVANCED_COLOR_MODE(u32) {
        /// Standard dynamic range
        SDR = 0,
        /// Wide color gamut
        WCG = 1,
        /// High dynamic range
        HDR = 2,
    }
}

bitflags! {
    /// Flags of `DISPLAYCONFIG_TARGET_DEVICE_NAME`
    #[repr(transparent)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct TargetDeviceNameFlags: u32 {
        /// The friendly name came from the monitor EDID
        const FRIENDLY_NAME_FROM_EDID = 0x0000_0001;
        /// The friendly name was forced by the driver
        const FRIENDLY_NAME_FORCED = 0x0000_0002;
        /// `edidManufactureId` and `edidProductCodeId` are valid
        const EDID_IDS_VALID = 0x0000_0004;
    }
}

/// `DISPLAYCONFIG_DEVICE_INFO_HEADER`
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DISPLAYCONFIG_DEVICE_INFO_HEADER {
    /// Type of device information to retrieve or set
    pub type_: DISPLAYCONFIG_DEVICE_INFO_TYPE,
    /// Size in bytes of the whole packet, header included
    pub size: u32,
    /// Adapter LUID
    pub adapterId: LUID,
    /// Source or target identifier
    pub id: u32,
}

impl DISPLAYCONFIG_DEVICE_INFO_HEADER {
    /// Header for packet type `P` addressed to `id` on `adapter_id`
    #[expect(
        clippy::cast_possible_truncation,
        reason = "packets are a few hundred bytes"
    )]
    pub fn for_packet<P: DeviceInfoPacket>(adapter_id: LUID, id: u32) -> Self {
        Self {
            type_: P::KIND,
            size: size_of::<P>() as u32,
            adapterId: adapter_id,
            id,
        }
    }
}

/// A record that can be sent through `DisplayConfigGetDeviceInfo` or
/// `DisplayConfigSetDeviceInfo`
///
/// # Safety
///
/// Implementors must be `#[repr(C)]`, start with a
/// [`DISPLAYCONFIG_DEVICE_INFO_HEADER`] at offset 0, and consist only of
/// integer fields so that an all-zero or OS-written bit pattern is valid.
pub unsafe trait DeviceInfoPacket: Copy + 'static {
    /// Request type written into the header by [`DeviceInfoPacket::for_target`]
    const KIND: DISPLAYCONFIG_DEVICE_INFO_TYPE;

    /// Packet header
    fn header(&self) -> &DISPLAYCONFIG_DEVICE_INFO_HEADER;

    /// Mutable packet header
    fn header_mut(&mut self) -> &mut DISPLAYCONFIG_DEVICE_INFO_HEADER;

    /// Zeroed packet whose header addresses `id` on `adapter_id`
    fn for_target(adapter_id: LUID, id: u32) -> Self {
        // SAFETY: the trait contract guarantees an all-zero packet is valid.
        let mut packet: Self = unsafe { std::mem::zeroed() };
        *packet.header_mut() = DISPLAYCONFIG_DEVICE_INFO_HEADER::for_packet::<Self>(adapter_id, id);
        packet
    }
}

macro_rules! device_info_packet {
    ($($packet:ident => $kind:ident,)+) => {
        $(
            // SAFETY: the packet is repr(C), starts with the header and holds only integers.
            unsafe impl DeviceInfoPacket for $packet {
                const KIND: DISPLAYCONFIG_DEVICE_INFO_TYPE = DISPLAYCONFIG_DEVICE_INFO_TYPE::$kind;

                fn header(&self) -> &DISPLAYCONFIG_DEVICE_INFO_HEADER {
                    &self.header
                }

                fn header_mut(&mut self) -> &mut DISPLAYCONFIG_DEVICE_INFO_HEADER {
                    &mut self.header
                }
            }

            impl Default for $packet {
                fn default() -> Self {
                    Self::for_target(LUID::default(), 0)
                }
            }
        )+
    };
}

device_info_packet! {
    DISPLAYCONFIG_SOURCE_DEVICE_NAME => GET_SOURCE_NAME,
    DISPLAYCONFIG_TARGET_DEVICE_NAME => GET_TARGET_NAME,
    DISPLAYCONFIG_TARGET_PREFERRED_MODE => GET_TARGET_PREFERRED_MODE,
    DISPLAYCONFIG_ADAPTER_NAME => GET_ADAPTER_NAME,
    DISPLAYCONFIG_SET_TARGET_PERSISTENCE => SET_TARGET_PERSISTENCE,
    DISPLAYCONFIG_TARGET_BASE_TYPE => GET_TARGET_BASE_TYPE,
    DISPLAYCONFIG_SUPPORT_VIRTUAL_RESOLUTION => GET_SUPPORT_VIRTUAL_RESOLUTION,
    DISPLAYCONFIG_GET_ADVANCED_COLOR_INFO => GET_ADVANCED_COLOR_INFO,
    DISPLAYCONFIG_SET_ADVANCED_COLOR_STATE => SET_ADVANCED_COLOR_STATE,
    DISPLAYCONFIG_SDR_WHITE_LEVEL => GET_SDR_WHITE_LEVEL,
    DISPLAYCONFIG_GET_ADVANCED_COLOR_INFO_2 => GET_ADVANCED_COLOR_INFO_2,
    DISPLAYCONFIG_SET_HDR_STATE => SET_HDR_STATE,
}

/// `DISPLAYCONFIG_SOURCE_DEVICE_NAME`: GDI name such as `\\.\DISPLAY1`
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct DISPLAYCONFIG_SOURCE_DEVICE_NAME {
    pub header: DISPLAYCONFIG_DEVICE_INFO_HEADER,
    pub viewGdiDeviceName: WideBuf<32>,
}

/// `DISPLAYCONFIG_TARGET_DEVICE_NAME`
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct DISPLAYCONFIG_TARGET_DEVICE_NAME {
    pub header: DISPLAYCONFIG_DEVICE_INFO_HEADER,
    pub flags: TargetDeviceNameFlags,
    pub outputTechnology: DISPLAYCONFIG_VIDEO_OUTPUT_TECHNOLOGY,
    pub edidManufactureId: u16,
    pub edidProductCodeId: u16,
    pub connectorInstance: u32,
    pub monitorFriendlyDeviceName: WideBuf<64>,
    pub monitorDevicePath: WideBuf<128>,
}

impl DISPLAYCONFIG_TARGET_DEVICE_NAME {
    /// Three-letter PnP manufacturer code decoded from the EDID id
    ///
    /// `None` unless [`TargetDeviceNameFlags::EDID_IDS_VALID`] is set. The id is
    /// stored big-endian as three 5-bit letters where 1 is `A`.
    pub fn edid_manufacturer(&self) -> Option<String> {
        if !self.flags.contains(TargetDeviceNameFlags::EDID_IDS_VALID) {
            return None;
        }
        let packed = self.edidManufactureId.swap_bytes();
        [10u16, 5, 0]
            .into_iter()
            .map(|shift| {
                u8::try_from((packed >> shift) & 0x1F)
                    .ok()
                    .filter(|letter| (1..=26).contains(letter))
                    .map(|letter| char::from(b'@' + letter))
            })
            .collect()
    }
}

/// `DISPLAYCONFIG_TARGET_PREFERRED_MODE`
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct DISPLAYCONFIG_TARGET_PREFERRED_MODE {
    pub header: DISPLAYCONFIG_DEVICE_INFO_HEADER,
    pub width: u32,
    pub height: u32,
    pub targetMode: DISPLAYCONFIG_TARGET_MODE,
}

/// `DISPLAYCONFIG_ADAPTER_NAME`
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct DISPLAYCONFIG_ADAPTER_NAME {
    pub header: DISPLAYCONFIG_DEVICE_INFO_HEADER,
    pub adapterDevicePath: WideBuf<128>,
}

/// `DISPLAYCONFIG_SET_TARGET_PERSISTENCE`
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct DISPLAYCONFIG_SET_TARGET_PERSISTENCE {
    pub header: DISPLAYCONFIG_DEVICE_INFO_HEADER,
    /// Bit 0: `bootPersistenceOn`
    pub value: u32,
}

impl DISPLAYCONFIG_SET_TARGET_PERSISTENCE {
    /// Packet turning boot persistence on or off for a target
    pub fn new(adapter_id: LUID, target_id: u32, boot_persistence_on: bool) -> Self {
        Self {
            value: u32::from(boot_persistence_on),
            ..Self::for_target(adapter_id, target_id)
        }
    }
}

/// `DISPLAYCONFIG_TARGET_BASE_TYPE`
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct DISPLAYCONFIG_TARGET_BASE_TYPE {
    pub header: DISPLAYCONFIG_DEVICE_INFO_HEADER,
    pub baseOutputTechnology: DISPLAYCONFIG_VIDEO_OUTPUT_TECHNOLOGY,
}

/// `DISPLAYCONFIG_SUPPORT_VIRTUAL_RESOLUTION`
///
/// The same record is used for the get (7) and set (8) requests; [`Self::set`]
/// builds the set form.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct DISPLAYCONFIG_SUPPORT_VIRTUAL_RESOLUTION {
    pub header: DISPLAYCONFIG_DEVICE_INFO_HEADER,
    /// Bit 0: `disableMonitorVirtualResolution`
    pub value: u32,
}

impl DISPLAYCONFIG_SUPPORT_VIRTUAL_RESOLUTION {
    /// Set-request packet
    pub fn set(adapter_id: LUID, target_id: u32, disable_virtual_resolution: bool) -> Self {
        let mut packet = Self::for_target(adapter_id, target_id);
        packet.header.type_ = DISPLAYCONFIG_DEVICE_INFO_TYPE::SET_SUPPORT_VIRTUAL_RESOLUTION;
        packet.value = u32::from(disable_virtual_resolution);
        packet
    }

    /// Whether virtual resolution is disabled for the monitor
    pub fn disableMonitorVirtualResolution(&self) -> bool {
        (self.value & 0x1) != 0
    }
}

/// `DISPLAYCONFIG_GET_ADVANCED_COLOR_INFO` (Windows 10 and Windows 11 before 24H2)
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct DISPLAYCONFIG_GET_ADVANCED_COLOR_INFO {
    pub header: DISPLAYCONFIG_DEVICE_INFO_HEADER,
    /// Anonymous union containing bit fields
    pub value: u32,
    pub colorEncoding: DISPLAYCONFIG_COLOR_ENCODING,
    pub bitsPerColorChannel: u32,
}

impl DISPLAYCONFIG_GET_ADVANCED_COLOR_INFO {
    /// Check if advanced color is supported
    pub fn advancedColorSupported(&self) -> bool {
        (self.value & 0x1) != 0
    }

    /// Check if advanced color is enabled
    pub fn advancedColorEnabled(&self) -> bool {
        (self.value & 0x2) != 0
    }

    /// Check if wide color gamut is enforced
    pub fn wideColorEnforced(&self) -> bool {
        (self.value & 0x4) != 0
    }

    /// Check if advanced color is force disabled
    pub fn advancedColorForceDisabled(&self) -> bool {
        (self.value & 0x8) != 0
    }
}

/// `DISPLAYCONFIG_SET_ADVANCED_COLOR_STATE`
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct DISPLAYCONFIG_SET_ADVANCED_COLOR_STATE {
    pub header: DISPLAYCONFIG_DEVICE_INFO_HEADER,
    /// Bit 0: `enableAdvancedColor`
    pub value: u32,
}

impl DISPLAYCONFIG_SET_ADVANCED_COLOR_STATE {
    /// Create a new structure to enable or disable advanced color
    pub fn new(adapter_id: LUID, target_id: u32, enable: bool) -> Self {
        Self {
            value: u32::from(enable),
            ..Self::for_target(adapter_id, target_id)
        }
    }
}

/// `DISPLAYCONFIG_SDR_WHITE_LEVEL`
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct DISPLAYCONFIG_SDR_WHITE_LEVEL {
    pub header: DISPLAYCONFIG_DEVICE_INFO_HEADER,
    /// White level as a multiplier of 80 nits, in thousandths
    pub SDRWhiteLevel: u32,
}

impl DISPLAYCONFIG_SDR_WHITE_LEVEL {
    /// SDR white level in nits
    pub fn nits(&self) -> f64 {
        f64::from(self.SDRWhiteLevel) * 80.0 / 1000.0
    }
}

/// `DISPLAYCONFIG_GET_ADVANCED_COLOR_INFO_2` (Windows 11 24H2+)
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct DISPLAYCONFIG_GET_ADVANCED_COLOR_INFO_2 {
    pub header: DISPLAYCONFIG_DEVICE_INFO_HEADER,
    /// Anonymous union containing bit fields
    pub value: u32,
    pub colorEncoding: DISPLAYCONFIG_COLOR_ENCODING,
    pub bitsPerColorChannel: u32,
    pub activeColorMode: DISPLAYCONFIG_ADVANCED_COLOR_MODE,
}

impl DISPLAYCONFIG_GET_ADVANCED_COLOR_INFO_2 {
    /// Check if advanced color is supported
    pub fn advancedColorSupported(&self) -> bool {
        (self.value & 0x1) != 0
    }

    /// Check if advanced color is active
    pub fn advancedColorActive(&self) -> bool {
        (self.value & 0x2) != 0
    }

    /// Check if advanced color is limited by policy
    pub fn advancedColorLimitedByPolicy(&self) -> bool {
        (self.value & 0x8) != 0
    }

    /// Check if high dynamic range is supported
    pub fn highDynamicRangeSupported(&self) -> bool {
        (self.value & 0x10) != 0
    }

    /// Check if the user enabled high dynamic range
    pub fn highDynamicRangeUserEnabled(&self) -> bool {
        (self.value & 0x20) != 0
    }

    /// Check if wide color gamut is supported
    pub fn wideColorSupported(&self) -> bool {
        (self.value & 0x40) != 0
    }

    /// Check if the user enabled wide color gamut
    pub fn wideColorUserEnabled(&self) -> bool {
        (self.value & 0x80) != 0
    }
}

/// `DISPLAYCONFIG_SET_HDR_STATE` (Windows 11 24H2+)
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct DISPLAYCONFIG_SET_HDR_STATE {
    pub header: DISPLAYCONFIG_DEVICE_INFO_HEADER,
    /// Bit 0: `enableHdr`
    pub value: u32,
}

impl DISPLAYCONFIG_SET_HDR_STATE {
    /// Create a new structure to enable or disable HDR
    pub fn new(adapter_id: LUID, target_id: u32, enable: bool) -> Self {
        Self {
            value: u32::from(enable),
            ..Self::for_target(adapter_id, target_id)
        }
    }
}

impl fmt::Display for DISPLAYCONFIG_SOURCE_DEVICE_NAME {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.viewGdiDeviceName, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::offset_of;

    fn luid() -> LUID {
        LUID {
            LowPart: 0x1234,
            HighPart: 0x5678,
        }
    }

    #[test]
    fn test_packet_sizes() {
        assert_eq!(size_of::<DISPLAYCONFIG_DEVICE_INFO_HEADER>(), 20);
        assert_eq!(size_of::<DISPLAYCONFIG_SOURCE_DEVICE_NAME>(), 84);
        assert_eq!(size_of::<DISPLAYCONFIG_TARGET_DEVICE_NAME>(), 420);
        assert_eq!(size_of::<DISPLAYCONFIG_TARGET_PREFERRED_MODE>(), 80);
        assert_eq!(size_of::<DISPLAYCONFIG_ADAPTER_NAME>(), 276);
        assert_eq!(size_of::<DISPLAYCONFIG_SET_TARGET_PERSISTENCE>(), 24);
        assert_eq!(size_of::<DISPLAYCONFIG_TARGET_BASE_TYPE>(), 24);
        assert_eq!(size_of::<DISPLAYCONFIG_SUPPORT_VIRTUAL_RESOLUTION>(), 24);
        assert_eq!(size_of::<DISPLAYCONFIG_GET_ADVANCED_COLOR_INFO>(), 32);
        assert_eq!(size_of::<DISPLAYCONFIG_SET_ADVANCED_COLOR_STATE>(), 24);
        assert_eq!(size_of::<DISPLAYCONFIG_SDR_WHITE_LEVEL>(), 24);
        assert_eq!(size_of::<DISPLAYCONFIG_GET_ADVANCED_COLOR_INFO_2>(), 36);
        assert_eq!(size_of::<DISPLAYCONFIG_SET_HDR_STATE>(), 24);
    }

    #[test]
    fn test_target_device_name_offsets() {
        assert_eq!(offset_of!(DISPLAYCONFIG_TARGET_DEVICE_NAME, flags), 20);
        assert_eq!(offset_of!(DISPLAYCONFIG_TARGET_DEVICE_NAME, edidManufactureId), 28);
        assert_eq!(offset_of!(DISPLAYCONFIG_TARGET_DEVICE_NAME, connectorInstance), 32);
        assert_eq!(
            offset_of!(DISPLAYCONFIG_TARGET_DEVICE_NAME, monitorFriendlyDeviceName),
            36
        );
        assert_eq!(offset_of!(DISPLAYCONFIG_TARGET_DEVICE_NAME, monitorDevicePath), 164);
        assert_eq!(offset_of!(DISPLAYCONFIG_TARGET_PREFERRED_MODE, targetMode), 32);
        assert_eq!(offset_of!(DISPLAYCONFIG_GET_ADVANCED_COLOR_INFO_2, activeColorMode), 32);
    }

    #[test]
    fn test_for_target_fills_header() {
        let packet = DISPLAYCONFIG_TARGET_DEVICE_NAME::for_target(luid(), 42);
        assert_eq!(packet.header.type_, DISPLAYCONFIG_DEVICE_INFO_TYPE::GET_TARGET_NAME);
        assert_eq!(packet.header.size, 420);
        assert_eq!(packet.header.adapterId, luid());
        assert_eq!(packet.header.id, 42);
        assert!(packet.monitorFriendlyDeviceName.is_empty());
    }

    #[test]
    fn test_default_packet_has_type_and_size() {
        let packet = DISPLAYCONFIG_GET_ADVANCED_COLOR_INFO_2::default();
        assert_eq!(
            packet.header().type_,
            DISPLAYCONFIG_DEVICE_INFO_TYPE::GET_ADVANCED_COLOR_INFO_2
        );
        assert_eq!(packet.header().size, 36);
    }

    #[test]
    fn test_displayconfig_get_advanced_color_info_bit_fields() {
        let mut info = DISPLAYCONFIG_GET_ADVANCED_COLOR_INFO::default();

        info.value = 0x1;
        assert!(info.advancedColorSupported());
        assert!(!info.advancedColorEnabled());

        info.value = 0x2;
        assert!(!info.advancedColorSupported());
        assert!(info.advancedColorEnabled());

        info.value = 0x4;
        assert!(info.wideColorEnforced());
        assert!(!info.advancedColorForceDisabled());

        info.value = 0x8;
        assert!(info.advancedColorForceDisabled());
    }

    #[test]
    fn test_displayconfig_get_advanced_color_info_2_bit_fields() {
        let mut info = DISPLAYCONFIG_GET_ADVANCED_COLOR_INFO_2::default();

        info.value = 0x13;
        assert!(info.advancedColorSupported());
        assert!(info.advancedColorActive());
        assert!(info.highDynamicRangeSupported());
        assert!(!info.advancedColorLimitedByPolicy());
        assert!(!info.wideColorSupported());

        info.value = 0xE8;
        assert!(info.advancedColorLimitedByPolicy());
        assert!(info.highDynamicRangeUserEnabled());
        assert!(info.wideColorSupported());
        assert!(info.wideColorUserEnabled());
        assert!(!info.highDynamicRangeSupported());
    }

    #[test]
    fn test_set_packets_new() {
        let state = DISPLAYCONFIG_SET_ADVANCED_COLOR_STATE::new(luid(), 7, true);
        assert_eq!(
            state.header.type_,
            DISPLAYCONFIG_DEVICE_INFO_TYPE::SET_ADVANCED_COLOR_STATE
        );
        assert_eq!(state.header.size, 24);
        assert_eq!(state.value, 1);
        assert_eq!(
            DISPLAYCONFIG_SET_ADVANCED_COLOR_STATE::new(luid(), 7, false).value,
            0
        );

        let hdr = DISPLAYCONFIG_SET_HDR_STATE::new(luid(), 99, true);
        assert_eq!(hdr.header.type_, DISPLAYCONFIG_DEVICE_INFO_TYPE::SET_HDR_STATE);
        assert_eq!(hdr.header.id, 99);
        assert_eq!(hdr.value, 1);

        let persistence = DISPLAYCONFIG_SET_TARGET_PERSISTENCE::new(luid(), 3, true);
        assert_eq!(
            persistence.header.type_,
            DISPLAYCONFIG_DEVICE_INFO_TYPE::SET_TARGET_PERSISTENCE
        );
        assert_eq!(persistence.value, 1);
    }

    #[test]
    fn test_virtual_resolution_set_uses_set_type() {
        let packet = DISPLAYCONFIG_SUPPORT_VIRTUAL_RESOLUTION::set(luid(), 1, true);
        assert_eq!(
            packet.header.type_,
            DISPLAYCONFIG_DEVICE_INFO_TYPE::SET_SUPPORT_VIRTUAL_RESOLUTION
        );
        assert!(packet.disableMonitorVirtualResolution());
        assert_eq!(
            DISPLAYCONFIG_SUPPORT_VIRTUAL_RESOLUTION::default().header.type_,
            DISPLAYCONFIG_DEVICE_INFO_TYPE::GET_SUPPORT_VIRTUAL_RESOLUTION
        );
    }

    #[test]
    fn test_edid_manufacturer() {
        let mut name = DISPLAYCONFIG_TARGET_DEVICE_NAME::default();
        name.edidManufactureId = 0xAC10;
        assert_eq!(name.edid_manufacturer(), None);

        name.flags = TargetDeviceNameFlags::EDID_IDS_VALID;
        assert_eq!(name.edid_manufacturer().as_deref(), Some("DEL"));

        name.edidManufactureId = 0;
        assert_eq!(name.edid_manufacturer(), None);

        // 0x7C1F is 11111 00000 11111: letter codes above 26 are rejected
        name.edidManufactureId = 0x7C1F_u16.swap_bytes();
        assert_eq!(name.edid_manufacturer(), None);

        // 0x0421 is 00001 00001 00001
        name.edidManufactureId = 0x0421_u16.swap_bytes();
        assert_eq!(name.edid_manufacturer().as_deref(), Some("AAA"));
    }

    #[test]
    fn test_sdr_white_level_nits() {
        let mut level = DISPLAYCONFIG_SDR_WHITE_LEVEL::default();
        level.SDRWhiteLevel = 2500;
        assert!((level.nits() - 200.0).abs() < f64::EPSILON);
    }
}
