//! C entry points for frontends that are not written in Rust.
//!
//! The signatures follow the plain C bridge these functions replace. Failures are
//! reported as `false` (or ignored where the C function returns nothing); nothing
//! here unwinds across the boundary.
use super::*;

/// Log callback of a C frontend: receives the level and the formatted message.
#[allow(non_camel_case_types)]
pub type retro_bridge_log_cb_t =
    Option<unsafe extern "C" fn(level: retro_log_level, message: *const c_char)>;

fn report(function: &'static str, result: Result<(), BridgeError>) -> bool {
    match result {
        Ok(()) => true,
        Err(_err) => {
            #[cfg(feature = "log")]
            log::warn!("{function}: {_err}");

            #[cfg(not(feature = "log"))]
            let _ = function;

            false
        }
    }
}

/// Registers `rs_cb` as log handler and installs the trampoline into the
/// `struct retro_log_callback *` in `data`.
///
/// A NULL `rs_cb` leaves everything unchanged.
#[no_mangle]
pub unsafe extern "C" fn configure_log_interface(rs_cb: retro_bridge_log_cb_t, data: *mut c_void) {
    let Some(cb) = rs_cb else {
        report(
            "configure_log_interface",
            Err(BridgeError::NullPointer("log handler")),
        );
        return;
    };

    let handler = move |level: LogLevel, message: &str| {
        // Messages coming from the trampoline never contain a NUL
        if let Ok(message) = CString::new(until_nul(message)) {
            unsafe { cb(level.into(), message.as_ptr()) }
        }
    };

    report(
        "configure_log_interface",
        log_interface::configure_log_interface(handler, data),
    );
}

#[no_mangle]
pub unsafe extern "C" fn set_variable_value_as_null(data: *mut c_void) {
    report(
        "set_variable_value_as_null",
        strings::set_variable_value_as_null(data),
    );
}

#[no_mangle]
pub unsafe extern "C" fn set_new_value_variable(data: *mut c_void, new_value: *const c_char) -> bool {
    report(
        "set_new_value_variable",
        strings::set_new_value_variable(data, new_value),
    )
}

#[no_mangle]
pub unsafe extern "C" fn set_directory(data: *mut c_void, new_directory: *const c_char) -> bool {
    report("set_directory", strings::set_directory(data, new_directory))
}

#[no_mangle]
pub unsafe extern "C" fn set_hw_callback(
    data: *mut c_void,
    context_reset: retro_hw_context_reset_t,
    get_current_framebuffer: retro_hw_get_current_framebuffer_t,
    context_destroy: retro_hw_context_reset_t,
    get_proc_address: retro_hw_get_proc_address_t,
) {
    report(
        "set_hw_callback",
        hw_render::set_hw_callback(
            data,
            context_reset,
            get_current_framebuffer,
            context_destroy,
            get_proc_address,
        ),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::allocator::testing::free_c_string;

    #[test]
    fn string_entry_points_report_success() {
        let mut variable = retro_variable::default();
        let value = CString::new("enabled").unwrap();

        let ok = unsafe {
            set_new_value_variable(&mut variable as *mut _ as *mut c_void, value.as_ptr())
        };
        assert!(ok);
        assert_eq!(
            unsafe { CStr::from_ptr(variable.value) }.to_str().unwrap(),
            "enabled"
        );
        unsafe { free_c_string(variable.value) };

        unsafe { set_variable_value_as_null(&mut variable as *mut _ as *mut c_void) };
        assert!(variable.value.is_null());

        let mut dir: *const c_char = std::ptr::null();
        let path = CString::new("/system").unwrap();
        assert!(unsafe { set_directory(&mut dir as *mut _ as *mut c_void, path.as_ptr()) });
        assert_eq!(unsafe { CStr::from_ptr(dir) }.to_str().unwrap(), "/system");
        unsafe { free_c_string(dir) };
    }

    #[test]
    fn null_pointers_report_failure() {
        let value = CString::new("x").unwrap();

        assert!(!unsafe { set_new_value_variable(std::ptr::null_mut(), value.as_ptr()) });
        assert!(!unsafe { set_directory(std::ptr::null_mut(), value.as_ptr()) });

        // Must not crash
        unsafe {
            set_variable_value_as_null(std::ptr::null_mut());
            set_hw_callback(std::ptr::null_mut(), None, None, None, None);
        }
    }

    #[test]
    fn hw_callback_entry_point() {
        unsafe extern "C" fn reset() {}

        let mut hw = retro_hw_render_callback::default();
        unsafe { set_hw_callback(&mut hw as *mut _ as *mut c_void, Some(reset), None, None, None) };

        assert!(hw.context_reset.is_some());
        assert!(hw.context_destroy.is_none());
    }
}
