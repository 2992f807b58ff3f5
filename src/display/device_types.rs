//! `DISPLAY_DEVICEW` and the flags of `EnumDisplayDevicesW`

#![allow(non_snake_case)]
#![allow(non_camel_case_types)]

use super::wide::WideBuf;
use bitflags::bitflags;
use std::mem::size_of;

bitflags! {
    /// `DISPLAY_DEVICE_*` state flags
    #[repr(transparent)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct DisplayDeviceStateFlags: u32 {
        /// The device is part of the desktop
        const ACTIVE = 0x0000_0001;
        /// The primary desktop is on this device
        const PRIMARY_DEVICE = 0x0000_0004;
        /// Pseudo device used to mirror drawing for remoting
        const MIRRORING_DRIVER = 0x0000_0008;
        /// The device is VGA compatible
        const VGA_COMPATIBLE = 0x0000_0010;
        /// The device is removable and cannot be the primary display
        const REMOVABLE = 0x0000_0020;
        /// The device is disconnected
        const DISCONNECT = 0x0200_0000;
        /// The device is a remote session display
        const REMOTE = 0x0400_0000;
        /// The device has more modes than its output devices support
        const MODES_PRUNED = 0x0800_0000;
    }
}

bitflags! {
    /// Flags of `EnumDisplayDevicesW`
    #[repr(transparent)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct EnumDisplayDevicesFlags: u32 {
        /// Return the device interface name in `DeviceID` instead of the PnP id
        const GET_DEVICE_INTERFACE_NAME = 0x0000_0001;
    }
}

/// `DISPLAY_DEVICEW`
///
/// Describes an adapter when enumerated without a parent name, or a monitor
/// when enumerated with an adapter's `DeviceName` as the parent.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DISPLAY_DEVICEW {
    /// Size of the structure; must be set before the call
    pub cb: u32,
    pub DeviceName: WideBuf<32>,
    pub DeviceString: WideBuf<128>,
    pub StateFlags: DisplayDeviceStateFlags,
    pub DeviceID: WideBuf<128>,
    pub DeviceKey: WideBuf<128>,
}

impl DISPLAY_DEVICEW {
    /// Empty record with `cb` set
    #[expect(clippy::cast_possible_truncation, reason = "840 fits in u32")]
    pub fn new() -> Self {
        Self {
            cb: size_of::<Self>() as u32,
            DeviceName: WideBuf::new(),
            DeviceString: WideBuf::new(),
            StateFlags: DisplayDeviceStateFlags::empty(),
            DeviceID: WideBuf::new(),
            DeviceKey: WideBuf::new(),
        }
    }

    /// Whether the device is attached to the desktop
    pub fn is_active(&self) -> bool {
        self.StateFlags.contains(DisplayDeviceStateFlags::ACTIVE)
    }

    /// Whether the device holds the primary desktop
    pub fn is_primary(&self) -> bool {
        self.StateFlags.contains(DisplayDeviceStateFlags::PRIMARY_DEVICE)
    }
}

impl Default for DISPLAY_DEVICEW {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::offset_of;

    #[test]
    fn test_display_device_layout() {
        assert_eq!(size_of::<DISPLAY_DEVICEW>(), 840);
        assert_eq!(offset_of!(DISPLAY_DEVICEW, DeviceName), 4);
        assert_eq!(offset_of!(DISPLAY_DEVICEW, DeviceString), 68);
        assert_eq!(offset_of!(DISPLAY_DEVICEW, StateFlags), 324);
        assert_eq!(offset_of!(DISPLAY_DEVICEW, DeviceID), 328);
        assert_eq!(offset_of!(DISPLAY_DEVICEW, DeviceKey), 584);
    }

    #[test]
    fn test_new_sets_cb() {
        let device = DISPLAY_DEVICEW::new();
        assert_eq!(device.cb, 840);
        assert!(device.DeviceName.is_empty());
        assert!(!device.is_active());
    }

    #[test]
    fn test_state_flags() {
        let mut device = DISPLAY_DEVICEW::new();
        device.StateFlags = DisplayDeviceStateFlags::from_bits_retain(0x0800_0005);
        assert!(device.is_active());
        assert!(device.is_primary());
        assert!(device.StateFlags.contains(DisplayDeviceStateFlags::MODES_PRUNED));
    }
}
