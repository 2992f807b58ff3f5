//! Status codes returned by the display APIs
//!
//! The display configuration family (`QueryDisplayConfig`, `SetDisplayConfig`,
//! `DisplayConfigGetDeviceInfo`, ...) returns Win32 system error codes. The
//! legacy settings family (`ChangeDisplaySettings[Ex]W`) returns `DISP_CHANGE_*`
//! codes from `WinUser.h`.

use std::fmt;

/// Win32 system error codes the display configuration functions document
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Win32Error {
    /// `ERROR_SUCCESS`: the operation completed successfully
    Success = 0,
    /// `ERROR_ACCESS_DENIED`: the caller has no access to the console session
    AccessDenied = 5,
    /// `ERROR_GEN_FAILURE`: unspecified failure in the display stack
    GenFailure = 31,
    /// `ERROR_NOT_SUPPORTED`: the system is not running a WDDM driver
    NotSupported = 50,
    /// `ERROR_INVALID_PARAMETER`: flags, sizes or array contents were rejected
    InvalidParameter = 87,
    /// `ERROR_INSUFFICIENT_BUFFER`: the supplied arrays are too small
    InsufficientBuffer = 122,
    /// `ERROR_BAD_CONFIGURATION`: no persisted configuration matches
    BadConfiguration = 1610,
}

impl Win32Error {
    /// Every documented code, in ascending numeric order
    pub const ALL: [Self; 7] = [
        Self::Success,
        Self::AccessDenied,
        Self::GenFailure,
        Self::NotSupported,
        Self::InvalidParameter,
        Self::InsufficientBuffer,
        Self::BadConfiguration,
    ];

    /// SDK name of the code
    pub const fn name(self) -> &'static str {
        match self {
            Self::Success => "ERROR_SUCCESS",
            Self::AccessDenied => "ERROR_ACCESS_DENIED",
            Self::GenFailure => "ERROR_GEN_FAILURE",
            Self::NotSupported => "ERROR_NOT_SUPPORTED",
            Self::InvalidParameter => "ERROR_INVALID_PARAMETER",
            Self::InsufficientBuffer => "ERROR_INSUFFICIENT_BUFFER",
            Self::BadConfiguration => "ERROR_BAD_CONFIGURATION",
        }
    }
}

impl TryFrom<i32> for Win32Error {
    type Error = i32;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|known| *known as i32 == code)
            .ok_or(code)
    }
}

impl fmt::Display for Win32Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), *self as i32)
    }
}

/// `DISP_CHANGE_*` result of `ChangeDisplaySettings[Ex]W`
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayChangeResult {
    /// The settings change was successful
    Successful = 0,
    /// The computer must be restarted for the graphics mode to work
    Restart = 1,
    /// The display driver failed the specified graphics mode
    Failed = -1,
    /// The graphics mode is not supported
    BadMode = -2,
    /// Unable to write settings to the registry
    NotUpdated = -3,
    /// An invalid set of flags was passed in
    BadFlags = -4,
    /// An invalid parameter was passed in
    BadParam = -5,
    /// The settings change was unsuccessful because the system is `DualView` capable
    BadDualView = -6,
}

impl DisplayChangeResult {
    /// Every documented result, in the order `WinUser.h` lists them
    pub const ALL: [Self; 8] = [
        Self::Successful,
        Self::Restart,
        Self::Failed,
        Self::BadMode,
        Self::NotUpdated,
        Self::BadFlags,
        Self::BadParam,
        Self::BadDualView,
    ];

    /// SDK name of the result
    pub const fn name(self) -> &'static str {
        match self {
            Self::Successful => "DISP_CHANGE_SUCCESSFUL",
            Self::Restart => "DISP_CHANGE_RESTART",
            Self::Failed => "DISP_CHANGE_FAILED",
            Self::BadMode => "DISP_CHANGE_BADMODE",
            Self::NotUpdated => "DISP_CHANGE_NOTUPDATED",
            Self::BadFlags => "DISP_CHANGE_BADFLAGS",
            Self::BadParam => "DISP_CHANGE_BADPARAM",
            Self::BadDualView => "DISP_CHANGE_BADDUALVIEW",
        }
    }

    /// Whether the settings were accepted (possibly pending a restart)
    pub const fn is_success(self) -> bool {
        matches!(self, Self::Successful | Self::Restart)
    }

    /// Whether the change only takes effect after a restart
    pub const fn requires_restart(self) -> bool {
        matches!(self, Self::Restart)
    }
}

impl TryFrom<i32> for DisplayChangeResult {
    type Error = i32;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|known| *known as i32 == code)
            .ok_or(code)
    }
}

impl fmt::Display for DisplayChangeResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), *self as i32)
    }
}
