//! Safe calling layer over the display APIs
//!
//! [`DisplayApi`] is the seam between this crate and User32. Its methods take
//! slices and references instead of raw pointers but otherwise pass arguments
//! and status codes through unchanged. [`User32`] implements it with the real
//! functions; tests substitute scripted fakes.
//!
//! [`DisplayInterop`] builds the query-then-apply protocol on top:
//!
//! 1. `GetDisplayConfigBufferSizes` reports how many path and mode records the
//!    current topology needs.
//! 2. `QueryDisplayConfig` fills arrays of exactly that size and writes back
//!    the counts it used, which may be smaller. Both arrays are truncated to
//!    those counts before they are returned.
//! 3. `SetDisplayConfig` applies or validates a topology.
//!
//! If the topology grows between steps 1 and 2 the OS returns
//! `ERROR_INSUFFICIENT_BUFFER`. That error is returned to the caller as-is.

use super::config_types::{
    DISPLAYCONFIG_MODE_INFO, DISPLAYCONFIG_PATH_INFO, DISPLAYCONFIG_TOPOLOGY_ID,
    DISPLAYCONFIG_VIDEO_OUTPUT_TECHNOLOGY, LUID, QueryDisplayConfigFlags, SetDisplayConfigFlags,
    format_luid,
};
use super::device_info::{
    DISPLAYCONFIG_ADAPTER_NAME, DISPLAYCONFIG_GET_ADVANCED_COLOR_INFO,
    DISPLAYCONFIG_GET_ADVANCED_COLOR_INFO_2, DISPLAYCONFIG_SDR_WHITE_LEVEL,
    DISPLAYCONFIG_SET_ADVANCED_COLOR_STATE, DISPLAYCONFIG_SET_HDR_STATE,
    DISPLAYCONFIG_SET_TARGET_PERSISTENCE, DISPLAYCONFIG_SOURCE_DEVICE_NAME,
    DISPLAYCONFIG_SUPPORT_VIRTUAL_RESOLUTION, DISPLAYCONFIG_TARGET_BASE_TYPE,
    DISPLAYCONFIG_TARGET_DEVICE_NAME, DISPLAYCONFIG_TARGET_PREFERRED_MODE, DeviceInfoPacket,
};
use super::device_types::{DISPLAY_DEVICEW, EnumDisplayDevicesFlags};
use super::errors::DisplayChangeResult;
use super::settings_types::{
    ChangeDisplaySettingsFlags, DEVMODEW, EnumDisplaySettingsFlags, EnumDisplaySettingsMode,
    VIDEOPARAMETERS,
};
use super::wide::to_wide_null;
use super::windows_api;
use crate::error::{DisplayInteropError, Result, check_display_change, check_status};
use tracing::{debug, warn};

/// Raw display API surface
///
/// Status codes are returned unchanged: Win32 error codes for the display
/// configuration family, `BOOL` as `bool` for the enumeration calls and
/// `DISP_CHANGE_*` codes for the settings calls. Device names are
/// NUL-terminated UTF-16.
pub trait DisplayApi {
    /// `GetDisplayConfigBufferSizes`
    fn get_display_config_buffer_sizes(
        &self,
        flags: QueryDisplayConfigFlags,
        num_paths: &mut u32,
        num_modes: &mut u32,
    ) -> i32;

    /// `QueryDisplayConfig`
    ///
    /// On entry `num_paths` and `num_modes` hold the capacities to use, which
    /// must not exceed the slice lengths. On success they hold the counts written.
    fn query_display_config(
        &self,
        flags: QueryDisplayConfigFlags,
        num_paths: &mut u32,
        paths: &mut [DISPLAYCONFIG_PATH_INFO],
        num_modes: &mut u32,
        modes: &mut [DISPLAYCONFIG_MODE_INFO],
        topology_id: Option<&mut DISPLAYCONFIG_TOPOLOGY_ID>,
    ) -> i32;

    /// `SetDisplayConfig`; `None` passes a null array with a zero count
    fn set_display_config(
        &self,
        paths: Option<&[DISPLAYCONFIG_PATH_INFO]>,
        modes: Option<&[DISPLAYCONFIG_MODE_INFO]>,
        flags: SetDisplayConfigFlags,
    ) -> i32;

    /// `DisplayConfigGetDeviceInfo`
    fn get_device_info<P: DeviceInfoPacket>(&self, packet: &mut P) -> i32;

    /// `DisplayConfigSetDeviceInfo`
    fn set_device_info<P: DeviceInfoPacket>(&self, packet: &P) -> i32;

    /// `EnumDisplayDevicesW`; `false` ends the enumeration
    fn enum_display_devices(
        &self,
        device: Option<&[u16]>,
        index: u32,
        display_device: &mut DISPLAY_DEVICEW,
        flags: EnumDisplayDevicesFlags,
    ) -> bool;

    /// `EnumDisplaySettingsW`
    fn enum_display_settings(
        &self,
        device: Option<&[u16]>,
        mode: EnumDisplaySettingsMode,
        devmode: &mut DEVMODEW,
    ) -> bool;

    /// `EnumDisplaySettingsExW`
    fn enum_display_settings_ex(
        &self,
        device: Option<&[u16]>,
        mode: EnumDisplaySettingsMode,
        devmode: &mut DEVMODEW,
        flags: EnumDisplaySettingsFlags,
    ) -> bool;

    /// `ChangeDisplaySettingsW`
    fn change_display_settings(
        &self,
        devmode: Option<&DEVMODEW>,
        flags: ChangeDisplaySettingsFlags,
    ) -> i32;

    /// `ChangeDisplaySettingsExW`; the reserved `hwnd` is always null
    fn change_display_settings_ex(
        &self,
        device: Option<&[u16]>,
        devmode: Option<&DEVMODEW>,
        flags: ChangeDisplaySettingsFlags,
        video_parameters: Option<&mut VIDEOPARAMETERS>,
    ) -> i32;
}

/// The real User32 functions
#[derive(Debug, Clone, Copy, Default)]
pub struct User32;

fn opt_ptr<T>(value: Option<&[T]>) -> *const T {
    value.map_or(std::ptr::null(), <[T]>::as_ptr)
}

#[expect(clippy::cast_possible_truncation, reason = "record arrays are far below u32::MAX")]
fn slice_len<T>(value: Option<&[T]>) -> u32 {
    value.map_or(0, |slice| slice.len() as u32)
}

/// `requested`, lowered to the number of records `slice` can hold
fn fit_count<T>(requested: u32, slice: &[T]) -> u32 {
    requested.min(slice_len(Some(slice)))
}

#[expect(
    unsafe_code,
    reason = "Windows FFI for the display configuration and display settings functions"
)]
impl DisplayApi for User32 {
    fn get_display_config_buffer_sizes(
        &self,
        flags: QueryDisplayConfigFlags,
        num_paths: &mut u32,
        num_modes: &mut u32,
    ) -> i32 {
        // SAFETY: both out-pointers come from live mutable references.
        unsafe { windows_api::GetDisplayConfigBufferSizes(flags.bits(), num_paths, num_modes) }
    }

    fn query_display_config(
        &self,
        flags: QueryDisplayConfigFlags,
        num_paths: &mut u32,
        paths: &mut [DISPLAYCONFIG_PATH_INFO],
        num_modes: &mut u32,
        modes: &mut [DISPLAYCONFIG_MODE_INFO],
        topology_id: Option<&mut DISPLAYCONFIG_TOPOLOGY_ID>,
    ) -> i32 {
        // The OS trusts the counts, so never advertise more than the slices hold
        *num_paths = fit_count(*num_paths, paths);
        *num_modes = fit_count(*num_modes, modes);
        let topology_id = topology_id.map_or(std::ptr::null_mut(), std::ptr::from_mut);
        // SAFETY: the arrays hold at least `num_paths`/`num_modes` records and
        // outlive the call; `topology_id` is null or a live mutable reference.
        unsafe {
            windows_api::QueryDisplayConfig(
                flags.bits(),
                num_paths,
                paths.as_mut_ptr(),
                num_modes,
                modes.as_mut_ptr(),
                topology_id,
            )
        }
    }

    fn set_display_config(
        &self,
        paths: Option<&[DISPLAYCONFIG_PATH_INFO]>,
        modes: Option<&[DISPLAYCONFIG_MODE_INFO]>,
        flags: SetDisplayConfigFlags,
    ) -> i32 {
        // SAFETY: each pointer is null with a zero count or a live slice with its length.
        unsafe {
            windows_api::SetDisplayConfig(
                slice_len(paths),
                opt_ptr(paths),
                slice_len(modes),
                opt_ptr(modes),
                flags.bits(),
            )
        }
    }

    fn get_device_info<P: DeviceInfoPacket>(&self, packet: &mut P) -> i32 {
        // SAFETY: DeviceInfoPacket guarantees a repr(C) record starting with the
        // header; the pointer covers the whole packet named by `header.size`.
        unsafe { windows_api::DisplayConfigGetDeviceInfo(std::ptr::from_mut(packet).cast()) }
    }

    fn set_device_info<P: DeviceInfoPacket>(&self, packet: &P) -> i32 {
        // SAFETY: as for get_device_info; the OS only reads the packet.
        unsafe { windows_api::DisplayConfigSetDeviceInfo(std::ptr::from_ref(packet).cast()) }
    }

    fn enum_display_devices(
        &self,
        device: Option<&[u16]>,
        index: u32,
        display_device: &mut DISPLAY_DEVICEW,
        flags: EnumDisplayDevicesFlags,
    ) -> bool {
        // SAFETY: `device` is null or NUL-terminated; `display_device` has `cb` set.
        unsafe {
            windows_api::EnumDisplayDevicesW(opt_ptr(device), index, display_device, flags.bits())
                != 0
        }
    }

    fn enum_display_settings(
        &self,
        device: Option<&[u16]>,
        mode: EnumDisplaySettingsMode,
        devmode: &mut DEVMODEW,
    ) -> bool {
        // SAFETY: `device` is null or NUL-terminated; `devmode` has `dmSize` set.
        unsafe { windows_api::EnumDisplaySettingsW(opt_ptr(device), mode.as_raw(), devmode) != 0 }
    }

    fn enum_display_settings_ex(
        &self,
        device: Option<&[u16]>,
        mode: EnumDisplaySettingsMode,
        devmode: &mut DEVMODEW,
        flags: EnumDisplaySettingsFlags,
    ) -> bool {
        // SAFETY: as for enum_display_settings.
        unsafe {
            windows_api::EnumDisplaySettingsExW(
                opt_ptr(device),
                mode.as_raw(),
                devmode,
                flags.bits(),
            ) != 0
        }
    }

    fn change_display_settings(
        &self,
        devmode: Option<&DEVMODEW>,
        flags: ChangeDisplaySettingsFlags,
    ) -> i32 {
        let devmode = devmode.map_or(std::ptr::null(), std::ptr::from_ref);
        // SAFETY: `devmode` is null or a live record with `dmSize` set.
        unsafe { windows_api::ChangeDisplaySettingsW(devmode, flags.bits()) }
    }

    fn change_display_settings_ex(
        &self,
        device: Option<&[u16]>,
        devmode: Option<&DEVMODEW>,
        flags: ChangeDisplaySettingsFlags,
        video_parameters: Option<&mut VIDEOPARAMETERS>,
    ) -> i32 {
        let devmode = devmode.map_or(std::ptr::null(), std::ptr::from_ref);
        // SAFETY: every pointer is null or derived from a live reference; `hwnd` is
        // reserved and must be null.
        unsafe {
            windows_api::ChangeDisplaySettingsExW(
                opt_ptr(device),
                devmode,
                std::ptr::null_mut(),
                flags.bits(),
                windows_api::video_parameters_ptr(video_parameters),
            )
        }
    }
}

/// Record counts reported by `GetDisplayConfigBufferSizes`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BufferSizes {
    /// Number of `DISPLAYCONFIG_PATH_INFO` records
    pub paths: u32,
    /// Number of `DISPLAYCONFIG_MODE_INFO` records
    pub modes: u32,
}

/// Paths and modes returned by `QueryDisplayConfig`, trimmed to the counts the OS wrote
#[derive(Debug, Clone, Default)]
pub struct DisplayTopology {
    /// Path records
    pub paths: Vec<DISPLAYCONFIG_PATH_INFO>,
    /// Mode records referenced by the paths' mode indices
    pub modes: Vec<DISPLAYCONFIG_MODE_INFO>,
}

impl DisplayTopology {
    /// Whether there are neither paths nor modes
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty() && self.modes.is_empty()
    }

    /// Paths with the `DISPLAYCONFIG_PATH_ACTIVE` flag
    pub fn active_paths(&self) -> impl Iterator<Item = &DISPLAYCONFIG_PATH_INFO> {
        self.paths.iter().filter(|path| path.is_active())
    }

    /// Mode record at `index`, if any
    pub fn mode(&self, index: Option<usize>) -> Option<&DISPLAYCONFIG_MODE_INFO> {
        index.and_then(|index| self.modes.get(index))
    }
}

/// Display configuration and display settings calls with `Result` returns
#[derive(Debug, Clone, Default)]
pub struct DisplayInterop<A: DisplayApi = User32> {
    api: A,
}

impl DisplayInterop<User32> {
    /// Facade over the real User32 functions
    pub fn new() -> Self {
        Self { api: User32 }
    }
}

impl<A: DisplayApi> DisplayInterop<A> {
    /// Facade over a custom [`DisplayApi`]
    pub fn with_api(api: A) -> Self {
        Self { api }
    }

    /// The underlying API
    pub fn api(&self) -> &A {
        &self.api
    }

    /// Ask how many path and mode records a query with `flags` needs
    pub fn buffer_sizes(&self, flags: QueryDisplayConfigFlags) -> Result<BufferSizes> {
        let mut sizes = BufferSizes::default();
        let status =
            self.api
                .get_display_config_buffer_sizes(flags, &mut sizes.paths, &mut sizes.modes);
        debug!(
            "GetDisplayConfigBufferSizes({:?}) -> {} ({} paths, {} modes)",
            flags, status, sizes.paths, sizes.modes
        );
        check_status("GetDisplayConfigBufferSizes", status)?;
        Ok(sizes)
    }

    /// Query the topology into arrays of exactly `sizes` records
    ///
    /// `flags` must not contain `DATABASE_CURRENT`; use
    /// [`DisplayInterop::query_database_current`] for that form.
    pub fn query(
        &self,
        flags: QueryDisplayConfigFlags,
        sizes: BufferSizes,
    ) -> Result<DisplayTopology> {
        if flags.contains(QueryDisplayConfigFlags::DATABASE_CURRENT) {
            return Err(DisplayInteropError::UnsupportedQueryFlags(flags.bits()));
        }
        self.query_into(flags, sizes, None)
    }

    /// Discover buffer sizes, then query once
    ///
    /// `ERROR_INSUFFICIENT_BUFFER` means the topology changed in between; check
    /// [`DisplayInteropError::is_insufficient_buffer`] and call again if wanted.
    pub fn query_display_config(&self, flags: QueryDisplayConfigFlags) -> Result<DisplayTopology> {
        if flags.contains(QueryDisplayConfigFlags::DATABASE_CURRENT) {
            return Err(DisplayInteropError::UnsupportedQueryFlags(flags.bits()));
        }
        let sizes = self.buffer_sizes(flags)?;
        self.query_into(flags, sizes, None)
    }

    /// Query the persisted configuration for the current connections
    ///
    /// Returns the topology together with the topology id Windows reports for it.
    pub fn query_database_current(&self) -> Result<(DisplayTopology, DISPLAYCONFIG_TOPOLOGY_ID)> {
        let flags = QueryDisplayConfigFlags::DATABASE_CURRENT;
        let sizes = self.buffer_sizes(flags)?;
        let mut topology_id = DISPLAYCONFIG_TOPOLOGY_ID::default();
        let topology = self.query_into(flags, sizes, Some(&mut topology_id))?;
        debug!("Current database topology: {:?}", topology_id);
        Ok((topology, topology_id))
    }

    fn query_into(
        &self,
        flags: QueryDisplayConfigFlags,
        sizes: BufferSizes,
        topology_id: Option<&mut DISPLAYCONFIG_TOPOLOGY_ID>,
    ) -> Result<DisplayTopology> {
        let mut paths = vec![DISPLAYCONFIG_PATH_INFO::default(); sizes.paths as usize];
        let mut modes = vec![DISPLAYCONFIG_MODE_INFO::default(); sizes.modes as usize];
        let mut num_paths = sizes.paths;
        let mut num_modes = sizes.modes;

        let status = self.api.query_display_config(
            flags,
            &mut num_paths,
            &mut paths,
            &mut num_modes,
            &mut modes,
            topology_id,
        );
        debug!(
            "QueryDisplayConfig({:?}) -> {} ({}/{} paths, {}/{} modes)",
            flags, status, num_paths, sizes.paths, num_modes, sizes.modes
        );
        check_status("QueryDisplayConfig", status)?;

        paths.truncate(num_paths as usize);
        modes.truncate(num_modes as usize);
        Ok(DisplayTopology { paths, modes })
    }

    /// Apply or validate a topology
    ///
    /// `None` or an empty topology passes null arrays, which is what the
    /// `TOPOLOGY_*` and `USE_DATABASE_CURRENT` flags expect.
    pub fn set_display_config(
        &self,
        topology: Option<&DisplayTopology>,
        flags: SetDisplayConfigFlags,
    ) -> Result<()> {
        let paths = topology
            .map(|topology| topology.paths.as_slice())
            .filter(|paths| !paths.is_empty());
        let modes = topology
            .map(|topology| topology.modes.as_slice())
            .filter(|modes| !modes.is_empty());

        let status = self.api.set_display_config(paths, modes, flags);
        debug!(
            "SetDisplayConfig({:?}, {} paths, {} modes) -> {}",
            flags,
            paths.map_or(0, <[_]>::len),
            modes.map_or(0, <[_]>::len),
            status
        );
        check_status("SetDisplayConfig", status)
    }

    /// Fill `packet` through `DisplayConfigGetDeviceInfo`
    pub fn get_device_info<P: DeviceInfoPacket>(&self, packet: &mut P) -> Result<()> {
        let status = self.api.get_device_info(packet);
        let header = packet.header();
        debug!(
            "DisplayConfigGetDeviceInfo({:?}, adapter {}, id {}) -> {}",
            header.type_,
            format_luid(header.adapterId),
            header.id,
            status
        );
        check_status("DisplayConfigGetDeviceInfo", status)
    }

    /// Send `packet` through `DisplayConfigSetDeviceInfo`
    pub fn set_device_info<P: DeviceInfoPacket>(&self, packet: &P) -> Result<()> {
        let status = self.api.set_device_info(packet);
        let header = packet.header();
        debug!(
            "DisplayConfigSetDeviceInfo({:?}, adapter {}, id {}) -> {}",
            header.type_,
            format_luid(header.adapterId),
            header.id,
            status
        );
        check_status("DisplayConfigSetDeviceInfo", status)
    }

    fn fetch<P: DeviceInfoPacket>(&self, adapter_id: LUID, id: u32) -> Result<P> {
        let mut packet = P::for_target(adapter_id, id);
        self.get_device_info(&mut packet)?;
        Ok(packet)
    }

    /// GDI device name of a source, such as `\\.\DISPLAY1`
    pub fn source_name(&self, adapter_id: LUID, source_id: u32) -> Result<String> {
        let packet: DISPLAYCONFIG_SOURCE_DEVICE_NAME = self.fetch(adapter_id, source_id)?;
        Ok(packet.viewGdiDeviceName.to_string_lossy())
    }

    /// Monitor name, connector and EDID ids of a target
    pub fn target_name(
        &self,
        adapter_id: LUID,
        target_id: u32,
    ) -> Result<DISPLAYCONFIG_TARGET_DEVICE_NAME> {
        self.fetch(adapter_id, target_id)
    }

    /// Preferred mode of the monitor on a target
    pub fn target_preferred_mode(
        &self,
        adapter_id: LUID,
        target_id: u32,
    ) -> Result<DISPLAYCONFIG_TARGET_PREFERRED_MODE> {
        self.fetch(adapter_id, target_id)
    }

    /// Device path of an adapter
    pub fn adapter_name(&self, adapter_id: LUID) -> Result<String> {
        let packet: DISPLAYCONFIG_ADAPTER_NAME = self.fetch(adapter_id, 0)?;
        Ok(packet.adapterDevicePath.to_string_lossy())
    }

    /// Device path of the adapter driving a path's target
    pub fn target_adapter_name(&self, path: &DISPLAYCONFIG_PATH_INFO) -> Result<String> {
        self.adapter_name(path.targetInfo.adapterId)
    }

    /// Output technology of the target's physical connector
    pub fn target_base_type(
        &self,
        adapter_id: LUID,
        target_id: u32,
    ) -> Result<DISPLAYCONFIG_VIDEO_OUTPUT_TECHNOLOGY> {
        let packet: DISPLAYCONFIG_TARGET_BASE_TYPE = self.fetch(adapter_id, target_id)?;
        Ok(packet.baseOutputTechnology)
    }

    /// Whether virtual resolution is disabled for the monitor on a target
    pub fn virtual_resolution_disabled(&self, adapter_id: LUID, target_id: u32) -> Result<bool> {
        let packet: DISPLAYCONFIG_SUPPORT_VIRTUAL_RESOLUTION = self.fetch(adapter_id, target_id)?;
        Ok(packet.disableMonitorVirtualResolution())
    }

    /// Enable or disable virtual resolution for the monitor on a target
    pub fn set_virtual_resolution_disabled(
        &self,
        adapter_id: LUID,
        target_id: u32,
        disabled: bool,
    ) -> Result<()> {
        self.set_device_info(&DISPLAYCONFIG_SUPPORT_VIRTUAL_RESOLUTION::set(
            adapter_id, target_id, disabled,
        ))
    }

    /// Advanced color capabilities and state (Windows 10 and 11 before 24H2)
    pub fn advanced_color_info(
        &self,
        adapter_id: LUID,
        target_id: u32,
    ) -> Result<DISPLAYCONFIG_GET_ADVANCED_COLOR_INFO> {
        self.fetch(adapter_id, target_id)
    }

    /// Advanced color capabilities and active color mode (Windows 11 24H2+)
    pub fn advanced_color_info_2(
        &self,
        adapter_id: LUID,
        target_id: u32,
    ) -> Result<DISPLAYCONFIG_GET_ADVANCED_COLOR_INFO_2> {
        self.fetch(adapter_id, target_id)
    }

    /// Enable or disable advanced color on a target
    pub fn set_advanced_color_state(
        &self,
        adapter_id: LUID,
        target_id: u32,
        enable: bool,
    ) -> Result<()> {
        self.set_device_info(&DISPLAYCONFIG_SET_ADVANCED_COLOR_STATE::new(
            adapter_id, target_id, enable,
        ))
    }

    /// Enable or disable HDR on a target (Windows 11 24H2+)
    pub fn set_hdr_state(&self, adapter_id: LUID, target_id: u32, enable: bool) -> Result<()> {
        self.set_device_info(&DISPLAYCONFIG_SET_HDR_STATE::new(
            adapter_id, target_id, enable,
        ))
    }

    /// SDR content white level of a target
    pub fn sdr_white_level(
        &self,
        adapter_id: LUID,
        target_id: u32,
    ) -> Result<DISPLAYCONFIG_SDR_WHITE_LEVEL> {
        self.fetch(adapter_id, target_id)
    }

    /// Turn boot persistence on or off for a target
    pub fn set_target_persistence(
        &self,
        adapter_id: LUID,
        target_id: u32,
        boot_persistence_on: bool,
    ) -> Result<()> {
        self.set_device_info(&DISPLAYCONFIG_SET_TARGET_PERSISTENCE::new(
            adapter_id,
            target_id,
            boot_persistence_on,
        ))
    }

    /// Device `index` under `parent`, or an adapter when `parent` is `None`
    ///
    /// `None` marks the end of the enumeration.
    pub fn enum_display_devices(
        &self,
        parent: Option<&str>,
        index: u32,
        flags: EnumDisplayDevicesFlags,
    ) -> Option<DISPLAY_DEVICEW> {
        let parent = parent.map(to_wide_null);
        let mut device = DISPLAY_DEVICEW::new();
        let found =
            self.api
                .enum_display_devices(parent.as_deref(), index, &mut device, flags);
        debug!("EnumDisplayDevicesW(index {}) -> {}", index, found);
        found.then_some(device)
    }

    /// Every device under `parent`, or every adapter when `parent` is `None`
    pub fn display_devices(
        &self,
        parent: Option<&str>,
        flags: EnumDisplayDevicesFlags,
    ) -> Vec<DISPLAY_DEVICEW> {
        (0..)
            .map_while(|index| self.enum_display_devices(parent, index, flags))
            .collect()
    }

    /// `EnumDisplaySettingsW`; `None` when the device or mode does not exist
    pub fn enum_display_settings(
        &self,
        device: Option<&str>,
        mode: EnumDisplaySettingsMode,
    ) -> Option<DEVMODEW> {
        let device = device.map(to_wide_null);
        let mut devmode = DEVMODEW::new();
        let found = self
            .api
            .enum_display_settings(device.as_deref(), mode, &mut devmode);
        debug!("EnumDisplaySettingsW({:?}) -> {}", mode, found);
        found.then_some(devmode)
    }

    /// `EnumDisplaySettingsExW`; `None` when the device or mode does not exist
    pub fn enum_display_settings_ex(
        &self,
        device: Option<&str>,
        mode: EnumDisplaySettingsMode,
        flags: EnumDisplaySettingsFlags,
    ) -> Option<DEVMODEW> {
        let device = device.map(to_wide_null);
        let mut devmode = DEVMODEW::new();
        let found =
            self.api
                .enum_display_settings_ex(device.as_deref(), mode, &mut devmode, flags);
        debug!("EnumDisplaySettingsExW({:?}, {:?}) -> {}", mode, flags, found);
        found.then_some(devmode)
    }

    /// Settings currently in use on `device`
    pub fn current_settings(&self, device: Option<&str>) -> Result<DEVMODEW> {
        self.enum_display_settings(device, EnumDisplaySettingsMode::Current)
            .ok_or(DisplayInteropError::CallFailed {
                call: "EnumDisplaySettingsW",
            })
    }

    /// Every mode `device` reports, by increasing mode index
    pub fn display_modes(
        &self,
        device: Option<&str>,
        flags: EnumDisplaySettingsFlags,
    ) -> Vec<DEVMODEW> {
        (0..)
            .map_while(|index| {
                self.enum_display_settings_ex(device, EnumDisplaySettingsMode::Index(index), flags)
            })
            .collect()
    }

    /// `ChangeDisplaySettingsW` on the default display device
    pub fn change_display_settings(
        &self,
        devmode: Option<&DEVMODEW>,
        flags: ChangeDisplaySettingsFlags,
    ) -> Result<DisplayChangeResult> {
        let code = self.api.change_display_settings(devmode, flags);
        debug!("ChangeDisplaySettingsW({:?}) -> {}", flags, code);
        let result = check_display_change("ChangeDisplaySettingsW", code);
        log_restart(&result);
        result
    }

    /// `ChangeDisplaySettingsExW` on the named device
    pub fn change_display_settings_ex(
        &self,
        device: Option<&str>,
        devmode: Option<&DEVMODEW>,
        flags: ChangeDisplaySettingsFlags,
        video_parameters: Option<&mut VIDEOPARAMETERS>,
    ) -> Result<DisplayChangeResult> {
        let device = device.map(to_wide_null);
        let code = self.api.change_display_settings_ex(
            device.as_deref(),
            devmode,
            flags,
            video_parameters,
        );
        debug!("ChangeDisplaySettingsExW({:?}) -> {}", flags, code);
        let result = check_display_change("ChangeDisplaySettingsExW", code);
        log_restart(&result);
        result
    }

    /// Apply every change staged with `CDS_UPDATEREGISTRY | CDS_NORESET`
    pub fn commit_pending_settings(&self) -> Result<DisplayChangeResult> {
        self.change_display_settings_ex(None, None, ChangeDisplaySettingsFlags::DYNAMIC, None)
    }
}

fn log_restart(result: &Result<DisplayChangeResult>) {
    if matches!(result, Ok(DisplayChangeResult::Restart)) {
        warn!("Display settings change requires a restart to take effect");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::errors::Win32Error;

    #[test]
    fn test_fit_count_never_exceeds_slice() {
        let records = vec![DISPLAYCONFIG_PATH_INFO::default(); 3];
        assert_eq!(fit_count(8, &records), 3);
        assert_eq!(fit_count(2, &records), 2);
        assert_eq!(fit_count(5, &records[..0]), 0);
    }

    #[cfg(not(windows))]
    #[test]
    fn test_user32_query_clamps_counts_to_buffers() {
        let mut paths = vec![DISPLAYCONFIG_PATH_INFO::default(); 1];
        let mut modes: Vec<DISPLAYCONFIG_MODE_INFO> = Vec::new();
        let (mut num_paths, mut num_modes) = (8, 8);

        let status = User32.query_display_config(
            QueryDisplayConfigFlags::ALL_PATHS,
            &mut num_paths,
            &mut paths,
            &mut num_modes,
            &mut modes,
            None,
        );

        assert_eq!(status, Win32Error::NotSupported as i32);
        assert_eq!((num_paths, num_modes), (1, 0));
    }
}
