//! Writing strings into core-owned slots.
//!
//! Every successful write hands a fresh allocation to the core; the bridge never
//! keeps or frees it. On allocation failure the slot is set to NULL, so the core
//! never sees a stale or half-written pointer.
use super::*;

/// Sets [`retro_variable::value`] to NULL, the "no value" answer for a variable.
pub fn clear_variable_value(variable: &mut retro_variable) {
    variable.value = std::ptr::null();
}

/// Replaces [`retro_variable::value`] with a copy of `value` allocated by `allocator`.
///
/// The previous value is not freed, it belongs to the core.
pub fn write_variable_value<A: ForeignAllocator + ?Sized>(
    variable: &mut retro_variable,
    value: &CStr,
    allocator: &A,
) -> Result<(), BridgeError> {
    variable.value = std::ptr::null();
    variable.value = allocate_c_string(allocator, value)?.as_ptr();

    Ok(())
}

/// Stores a copy of `directory` in a `const char *` out parameter.
pub fn write_directory<A: ForeignAllocator + ?Sized>(
    out: &mut *const c_char,
    directory: &CStr,
    allocator: &A,
) -> Result<(), BridgeError> {
    *out = std::ptr::null();
    *out = allocate_c_string(allocator, directory)?.as_ptr();

    Ok(())
}

/// Sets the `value` of the `struct retro_variable *` in `data` to NULL.
///
/// # Safety
/// `data` must be NULL or point to a valid, writable [`retro_variable`].
pub unsafe fn set_variable_value_as_null(data: *mut c_void) -> Result<(), BridgeError> {
    let variable = (data as *mut retro_variable)
        .as_mut()
        .ok_or(BridgeError::NullPointer("retro_variable"))?;

    clear_variable_value(variable);

    Ok(())
}

/// Copies `new_value` into a `malloc`ed buffer and stores it in the
/// `struct retro_variable *` in `data`.
///
/// # Safety
/// `data` must be NULL or point to a valid, writable [`retro_variable`],
/// `new_value` must be NULL or a NUL-terminated string.
pub unsafe fn set_new_value_variable(
    data: *mut c_void,
    new_value: *const c_char,
) -> Result<(), BridgeError> {
    set_new_value_variable_with(data, new_value, &LibcAllocator)
}

/// [`set_new_value_variable`] with a caller-chosen allocator.
///
/// # Safety
/// See [`set_new_value_variable`].
pub unsafe fn set_new_value_variable_with<A: ForeignAllocator + ?Sized>(
    data: *mut c_void,
    new_value: *const c_char,
    allocator: &A,
) -> Result<(), BridgeError> {
    let variable = (data as *mut retro_variable)
        .as_mut()
        .ok_or(BridgeError::NullPointer("retro_variable"))?;

    if new_value.is_null() {
        clear_variable_value(variable);
        return Err(StringError::NullPointer("new_value").into());
    }

    write_variable_value(variable, CStr::from_ptr(new_value), allocator)
}

/// Copies `new_directory` into a `malloc`ed buffer and stores it in the
/// `const char **` in `data`.
///
/// # Safety
/// `data` must be NULL or point to a writable `const char *`,
/// `new_directory` must be NULL or a NUL-terminated string.
pub unsafe fn set_directory(
    data: *mut c_void,
    new_directory: *const c_char,
) -> Result<(), BridgeError> {
    set_directory_with(data, new_directory, &LibcAllocator)
}

/// [`set_directory`] with a caller-chosen allocator.
///
/// # Safety
/// See [`set_directory`].
pub unsafe fn set_directory_with<A: ForeignAllocator + ?Sized>(
    data: *mut c_void,
    new_directory: *const c_char,
    allocator: &A,
) -> Result<(), BridgeError> {
    let out = (data as *mut *const c_char)
        .as_mut()
        .ok_or(BridgeError::NullPointer("const char **"))?;

    if new_directory.is_null() {
        *out = std::ptr::null();
        return Err(StringError::NullPointer("new_directory").into());
    }

    write_directory(out, CStr::from_ptr(new_directory), allocator)
}
