//! Fixed-capacity UTF-16 text embedded in display records
//!
//! Records such as `DISPLAY_DEVICEW` and `DISPLAYCONFIG_TARGET_DEVICE_NAME`
//! carry `WCHAR name[N]` arrays. [`WideBuf`] is that array with the
//! NUL-termination rule enforced on every write.

use crate::error::{DisplayInteropError, Result};
use std::fmt;

/// `WCHAR[N]` text buffer, always NUL-terminated within `N` code units
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct WideBuf<const N: usize>(pub [u16; N]);

impl<const N: usize> WideBuf<N> {
    /// Capacity in UTF-16 code units, including the terminating NUL
    pub const CAPACITY: usize = N;

    /// Empty buffer
    pub const fn new() -> Self {
        Self([0; N])
    }

    /// Encode `text`, failing if it needs more than `N - 1` code units
    pub fn try_from_str(text: &str) -> Result<Self> {
        let len = text.encode_utf16().count();
        if len >= N {
            return Err(DisplayInteropError::TextTooLong { len, capacity: N });
        }
        Ok(Self::from_str_truncated(text))
    }

    /// Encode `text`, keeping at most `N - 1` code units
    ///
    /// A surrogate pair that would be split by the cut is dropped whole.
    pub fn from_str_truncated(text: &str) -> Self {
        let mut buf = [0u16; N];
        let limit = N.saturating_sub(1);
        let mut written = 0;
        for ch in text.chars() {
            let mut units = [0u16; 2];
            let encoded = ch.encode_utf16(&mut units);
            if written + encoded.len() > limit {
                break;
            }
            buf[written..written + encoded.len()].copy_from_slice(encoded);
            written += encoded.len();
        }
        Self(buf)
    }

    /// Code units before the first NUL
    ///
    /// A buffer the OS filled to capacity without a terminator is read up to `N`.
    pub fn as_units(&self) -> &[u16] {
        let end = self.0.iter().position(|&unit| unit == 0).unwrap_or(N);
        &self.0[..end]
    }

    /// Number of code units before the terminator
    pub fn len(&self) -> usize {
        self.as_units().len()
    }

    /// Whether the text is empty
    pub fn is_empty(&self) -> bool {
        self.0.first().is_none_or(|&unit| unit == 0)
    }

    /// Decode to a `String`, replacing unpaired surrogates
    pub fn to_string_lossy(&self) -> String {
        String::from_utf16_lossy(self.as_units())
    }
}

impl<const N: usize> Default for WideBuf<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> fmt::Debug for WideBuf<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.to_string_lossy(), f)
    }
}

impl<const N: usize> fmt::Display for WideBuf<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_lossy())
    }
}

/// NUL-terminated UTF-16 copy of `text` for `LPCWSTR` parameters
pub fn to_wide_null(text: &str) -> Vec<u16> {
    text.encode_utf16().chain(std::iter::once(0)).collect()
}
