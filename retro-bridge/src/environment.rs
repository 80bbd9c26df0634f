//! Frontend side of the libretro environment callback.
//!
//! A core calls `retro_environment_t` with a command number and a pointer to
//! command-specific data. [`dispatch`] answers the commands that involve the
//! bridge (directories, variables, logging and hardware rendering) by asking a
//! [`Frontend`] implementation for the values and writing them with the
//! bridge functions.
//!
//! The environment callback carries no user data, so frontends usually keep their
//! [`Frontend`] in a static and forward from a tiny `extern "C"` function:
//!
//! ```ignore
//! unsafe extern "C" fn environment(cmd: c_uint, data: *mut c_void) -> bool {
//!     retro_bridge::environment::dispatch(&*FRONTEND, cmd, data).is_ok()
//! }
//! ```

use crate::{
    error::BridgeError,
    hw_render::{HwRenderCallbacks, HwRenderRequest},
    log_interface::{self, LogHandler},
    strings, sys::*,
    types::*,
    util::{get_str_from_pointer, path_to_c_string},
};
use std::{
    ffi::{c_uint, c_void},
    path::Path,
    sync::Arc,
};

/// Values and decisions the frontend contributes to environment calls.
///
/// Every method has a default that answers "not available".
pub trait Frontend {
    /// Directory for BIOS files and other system data, `RETRO_ENVIRONMENT_GET_SYSTEM_DIRECTORY`.
    fn system_directory(&self) -> Option<&Path> {
        None
    }

    /// Directory for save data, `RETRO_ENVIRONMENT_GET_SAVE_DIRECTORY`.
    fn save_directory(&self) -> Option<&Path> {
        None
    }

    /// Directory for core assets, `RETRO_ENVIRONMENT_GET_CORE_ASSETS_DIRECTORY`.
    fn core_assets_directory(&self) -> Option<&Path> {
        None
    }

    /// Current value of the core option `key`.
    fn variable(&self, _key: &str) -> Option<String> {
        None
    }

    /// Whether any core option changed since the core last asked.
    fn variables_updated(&self) -> bool {
        false
    }

    /// Answer to `RETRO_ENVIRONMENT_GET_PREFERRED_HW_RENDER`.
    fn preferred_hw_context(&self) -> Option<HwContextType> {
        None
    }

    /// Called for `RETRO_ENVIRONMENT_SET_HW_RENDER`.
    ///
    /// Return the callbacks to install to accept the request, [`None`] to reject it.
    fn set_hw_render(&self, _request: HwRenderRequest) -> Option<HwRenderCallbacks> {
        None
    }

    /// Handler for messages the core logs through `RETRO_ENVIRONMENT_GET_LOG_INTERFACE`.
    fn log_handler(&self) -> Arc<LogHandler> {
        default_log_handler()
    }
}

/// Forwards into the [`log`] facade when the `log` feature is enabled,
/// writes to `stderr` otherwise.
pub fn default_log_handler() -> Arc<LogHandler> {
    cfg_if::cfg_if! {
        if #[cfg(feature = "log")] {
            let forwarder = crate::logger::RetroLogForwarder::new();
            Arc::new(move |level: LogLevel, message: &str| forwarder.forward(level, message))
        }
        else {
            Arc::new(|level: LogLevel, message: &str| {
                eprintln!("[libretro {}] {}", level, message.trim_end_matches('\n'))
            })
        }
    }
}

/// Answers the environment command `cmd` for `frontend`.
///
/// The `RETRO_ENVIRONMENT_EXPERIMENTAL` and `RETRO_ENVIRONMENT_PRIVATE` bits are
/// ignored. Commands not listed in the module docs yield
/// [`BridgeError::UnsupportedCommand`].
///
/// # Safety
/// `data` must be NULL or point to the data type libretro defines for `cmd`.
pub unsafe fn dispatch<F: Frontend + ?Sized>(
    frontend: &F,
    cmd: c_uint,
    data: *mut c_void,
) -> Result<(), BridgeError> {
    let (command, _flags) = EnvironmentFlags::split(cmd);

    match command {
        RETRO_ENVIRONMENT_GET_SYSTEM_DIRECTORY => {
            answer_directory(frontend.system_directory(), data)
        }
        RETRO_ENVIRONMENT_GET_SAVE_DIRECTORY => answer_directory(frontend.save_directory(), data),
        RETRO_ENVIRONMENT_GET_CORE_ASSETS_DIRECTORY => {
            answer_directory(frontend.core_assets_directory(), data)
        }
        RETRO_ENVIRONMENT_GET_VARIABLE => answer_variable(frontend, data),
        RETRO_ENVIRONMENT_GET_VARIABLE_UPDATE => {
            let updated = (data as *mut bool)
                .as_mut()
                .ok_or(BridgeError::NullPointer("bool"))?;

            *updated = frontend.variables_updated();

            Ok(())
        }
        RETRO_ENVIRONMENT_GET_LOG_INTERFACE => {
            let handler = frontend.log_handler();
            log_interface::configure_log_interface(move |level, message| handler(level, message), data)
        }
        RETRO_ENVIRONMENT_GET_PREFERRED_HW_RENDER => {
            let preferred = (data as *mut c_uint)
                .as_mut()
                .ok_or(BridgeError::NullPointer("unsigned"))?;

            let context = frontend
                .preferred_hw_context()
                .ok_or(BridgeError::Unavailable("preferred hardware context"))?;

            *preferred = retro_hw_context_type::from(context).0;

            Ok(())
        }
        RETRO_ENVIRONMENT_SET_HW_RENDER => answer_hw_render(frontend, data),
        _ => {
            #[cfg(feature = "log")]
            log::debug!("unsupported environment command {command} (raw {cmd:#x})");

            Err(BridgeError::UnsupportedCommand(cmd))
        }
    }
}

/// `const char **`: a copy of `directory`, or NULL if the frontend has none.
unsafe fn answer_directory(directory: Option<&Path>, data: *mut c_void) -> Result<(), BridgeError> {
    match directory {
        Some(directory) => {
            let directory = path_to_c_string(directory)?;
            strings::set_directory(data, directory.as_ptr())
        }
        None => {
            let out = (data as *mut *const std::ffi::c_char)
                .as_mut()
                .ok_or(BridgeError::NullPointer("const char **"))?;

            *out = std::ptr::null();

            Ok(())
        }
    }
}

/// `struct retro_variable *`: the value for `key`, or NULL for unknown keys.
unsafe fn answer_variable<F: Frontend + ?Sized>(
    frontend: &F,
    data: *mut c_void,
) -> Result<(), BridgeError> {
    let variable = (data as *const retro_variable)
        .as_ref()
        .ok_or(BridgeError::NullPointer("retro_variable"))?;

    let key = match get_str_from_pointer(variable.key) {
        Ok(key) => key,
        Err(err) => {
            strings::set_variable_value_as_null(data)?;
            return Err(err.into());
        }
    };

    match frontend.variable(key) {
        Some(value) => {
            let value = match std::ffi::CString::new(value) {
                Ok(value) => value,
                Err(err) => {
                    strings::set_variable_value_as_null(data)?;
                    return Err(crate::error::StringError::from(err).into());
                }
            };

            strings::set_new_value_variable(data, value.as_ptr())
        }
        None => {
            let key = key.to_owned();
            strings::set_variable_value_as_null(data)?;

            Err(BridgeError::UnknownVariable(key))
        }
    }
}

/// `struct retro_hw_render_callback *`: install the frontend callbacks if it accepts.
unsafe fn answer_hw_render<F: Frontend + ?Sized>(
    frontend: &F,
    data: *mut c_void,
) -> Result<(), BridgeError> {
    let hw = (data as *const retro_hw_render_callback)
        .as_ref()
        .ok_or(BridgeError::NullPointer("retro_hw_render_callback"))?;

    let request = HwRenderRequest::try_from(hw)?;
    let callbacks = frontend
        .set_hw_render(request)
        .ok_or(BridgeError::HwRenderRejected)?;

    crate::hw_render::set_hw_callback(
        data,
        callbacks.context_reset,
        callbacks.get_current_framebuffer,
        callbacks.context_destroy,
        callbacks.get_proc_address,
    )
}
