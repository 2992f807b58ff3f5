//! Windows display configuration and display settings bindings
//!
//! This module exposes the User32 display APIs with their SDK record layouts.
//!
//! # Overview
//!
//! Two API families are covered:
//! - **Display configuration** (`QueryDisplayConfig`, `SetDisplayConfig`,
//!   `DisplayConfigGetDeviceInfo`, ...) works on paths (source to target links)
//!   and the mode records they reference. Calls return Win32 error codes.
//! - **Legacy display settings** (`EnumDisplayDevicesW`, `EnumDisplaySettings[Ex]W`,
//!   `ChangeDisplaySettings[Ex]W`) works on GDI device names and `DEVMODEW`.
//!   Settings calls return `DISP_CHANGE_*` codes.
//!
//! # Architecture
//!
//! - `config_types`, `device_info`, `device_types`, `settings_types`: `#[repr(C)]`
//!   records, enumerations and flag sets named after the SDK
//! - `windows_api`: raw `extern "system"` declarations, stubbed off Windows
//! - `api`: the [`DisplayApi`] seam, the [`User32`] implementation and the
//!   [`DisplayInterop`] facade returning `Result`s
//! - `snapshot`: a serializable decoding of a queried topology
//!
//! # Example Usage
//!
//! ```no_run
//! use display_interop::display::{DisplayInterop, QueryDisplayConfigFlags};
//!
//! let interop = DisplayInterop::new();
//! let topology = interop.query_display_config(QueryDisplayConfigFlags::ONLY_ACTIVE_PATHS)?;
//!
//! for path in topology.active_paths() {
//!     let source = &path.sourceInfo;
//!     let name = interop.source_name(source.adapterId, source.id)?;
//!     println!("{name}: target {}", path.targetInfo.id);
//! }
//! # Ok::<(), display_interop::error::DisplayInteropError>(())
//! ```
//!
//! Nothing in this module retries. A query that races a topology change fails
//! with `ERROR_INSUFFICIENT_BUFFER` and the caller decides what to do.

pub mod api;
pub mod config_types;
pub mod device_info;
pub mod device_types;
pub mod errors;
pub mod settings_types;
pub mod snapshot;
pub mod wide;
pub mod windows_api;

pub use api::{BufferSizes, DisplayApi, DisplayInterop, DisplayTopology, User32};
pub use config_types::{
    DISPLAYCONFIG_MODE_INFO, DISPLAYCONFIG_PATH_INFO, DISPLAYCONFIG_TOPOLOGY_ID, LUID, ModeInfo,
    PathFlags, QueryDisplayConfigFlags, SetDisplayConfigFlags, luid_from_u64, luid_to_u64,
};
pub use device_info::{DISPLAYCONFIG_DEVICE_INFO_HEADER, DeviceInfoPacket};
pub use device_types::{DISPLAY_DEVICEW, DisplayDeviceStateFlags, EnumDisplayDevicesFlags};
pub use errors::{DisplayChangeResult, Win32Error};
pub use settings_types::{
    ChangeDisplaySettingsFlags, DEVMODEW, EnumDisplaySettingsFlags, EnumDisplaySettingsMode,
};
pub use snapshot::TopologySnapshot;
pub use wide::WideBuf;
