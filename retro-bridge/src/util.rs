//! Utility functions
use super::*;

/// Tries to convert a pointer to a C string into a Rust [`str`]
///
/// # Safety
/// `ptr` must be NULL or point to a NUL-terminated string that outlives `'a`.
pub unsafe fn get_str_from_pointer<'a>(ptr: *const c_char) -> Result<&'a str, StringError> {
    if ptr.is_null() {
        return Err(StringError::NullPointer("string"));
    }

    let slice = CStr::from_ptr(ptr);

    std::str::from_utf8(slice.to_bytes()).map_err(Into::into)
}

/// Tries to convert a pointer to a C string into a Rust [`String`]
///
/// # Safety
/// See [`get_str_from_pointer`].
pub unsafe fn get_string_from_pointer(ptr: *const c_char) -> Result<String, StringError> {
    get_str_from_pointer(ptr).map(|s| s.to_owned())
}

/// Converts a [`Path`] into a [`CString`] the core can read back.
///
/// On Unix the raw bytes are kept, other platforms require valid UTF-8.
pub fn path_to_c_string(path: &Path) -> Result<CString, StringError> {
    cfg_if::cfg_if! {
        if #[cfg(target_family = "unix")] {
            use std::os::unix::ffi::OsStrExt;
            let bytes = path.as_os_str().as_bytes().to_vec();
        }
        else {
            let bytes = path
                .to_str()
                .ok_or_else(|| StringError::InvalidPath(path.to_string_lossy().into_owned()))?
                .as_bytes()
                .to_vec();
        }
    }

    CString::new(bytes).map_err(Into::into)
}

/// Cuts `message` at its first NUL byte, the way C would read it.
pub fn until_nul(message: &str) -> &str {
    match message.find('\0') {
        Some(end) => &message[..end],
        None => message,
    }
}
