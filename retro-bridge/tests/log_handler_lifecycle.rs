//! The handler slot going from unset to set, and being replaced.
//!
//! Kept in its own test binary and in a single test, because every step depends
//! on the state the previous one left in the process-wide slot.
use retro_bridge::{
    error::BridgeError,
    log_interface::{self, dispatch_log, has_log_handler},
    sys::*,
    types::LogLevel,
};
use std::ffi::{c_char, c_int, c_void, CStr};
use std::sync::{Arc, Mutex};

type Messages = Arc<Mutex<Vec<(LogLevel, String)>>>;

fn recorder(messages: &Messages) -> impl Fn(LogLevel, &str) + Send + Sync + 'static {
    let messages = Arc::clone(messages);
    move |level: LogLevel, message: &str| messages.lock().unwrap().push((level, message.to_owned()))
}

fn drain(messages: &Messages) -> Vec<(LogLevel, String)> {
    std::mem::take(&mut *messages.lock().unwrap())
}

#[cfg(feature = "c-api")]
static C_MESSAGES: Mutex<Vec<(u32, String)>> = Mutex::new(Vec::new());

#[cfg(feature = "c-api")]
unsafe extern "C" fn c_handler(level: retro_log_level, message: *const c_char) {
    let message = CStr::from_ptr(message).to_string_lossy().into_owned();
    C_MESSAGES.lock().unwrap().push((level.0, message));
}

#[test]
fn handler_lifecycle() {
    let trampoline = log_interface::log_trampoline().unwrap();

    // Unset: dispatch reports the violated precondition ...
    assert!(!has_log_handler());
    assert!(matches!(
        dispatch_log(LogLevel::Info, "too early"),
        Err(BridgeError::PreconditionViolation(_))
    ));

    // ... and a core calling the trampoline anyway does not crash
    unsafe { trampoline(retro_log_level::RETRO_LOG_INFO, c"early %d\n".as_ptr(), 1 as c_int) };

    // A NULL target leaves the slot alone
    let result = unsafe { retro_bridge::configure_log_interface(|_, _| {}, std::ptr::null_mut()) };
    assert!(matches!(result, Err(BridgeError::NullPointer(_))));
    assert!(!has_log_handler());

    // Set
    let first: Messages = Default::default();
    let mut callback = retro_log_callback::default();
    unsafe {
        retro_bridge::configure_log_interface(
            recorder(&first),
            &mut callback as *mut _ as *mut c_void,
        )
    }
    .unwrap();
    assert!(has_log_handler());

    let log = callback.log.unwrap();
    unsafe { log(retro_log_level::RETRO_LOG_INFO, c"value=%d".as_ptr(), 42 as c_int) };
    assert_eq!(drain(&first), [(LogLevel::Info, "value=42".to_owned())]);

    dispatch_log(LogLevel::Warn, "from rust").unwrap();
    assert_eq!(drain(&first), [(LogLevel::Warn, "from rust".to_owned())]);

    // Replaced: the trampoline a core already holds reaches the new handler only
    let second: Messages = Default::default();
    let mut other_callback = retro_log_callback::default();
    unsafe {
        retro_bridge::configure_log_interface(
            recorder(&second),
            &mut other_callback as *mut _ as *mut c_void,
        )
    }
    .unwrap();

    unsafe { log(retro_log_level::RETRO_LOG_ERROR, c"%s".as_ptr(), c"after".as_ptr()) };
    assert!(drain(&first).is_empty());
    assert_eq!(drain(&second), [(LogLevel::Error, "after".to_owned())]);

    // A handler may reconfigure logging from inside a message
    let third: Messages = Default::default();
    let third_for_handler = Arc::clone(&third);
    log_interface::set_log_handler(Arc::new(move |_level: LogLevel, _message: &str| {
        log_interface::set_log_handler(Arc::new(recorder(&third_for_handler)));
    }));

    unsafe { log(retro_log_level::RETRO_LOG_DEBUG, c"switch".as_ptr()) };
    unsafe { log(retro_log_level::RETRO_LOG_DEBUG, c"switched".as_ptr()) };
    assert_eq!(drain(&third), [(LogLevel::Debug, "switched".to_owned())]);

    #[cfg(feature = "c-api")]
    {
        let mut c_callback = retro_log_callback::default();

        unsafe {
            retro_bridge::ffi::configure_log_interface(
                None,
                &mut c_callback as *mut _ as *mut c_void,
            )
        };
        assert!(c_callback.log.is_none());

        unsafe {
            retro_bridge::ffi::configure_log_interface(
                Some(c_handler),
                &mut c_callback as *mut _ as *mut c_void,
            )
        };

        let log = c_callback.log.unwrap();
        unsafe { log(retro_log_level::RETRO_LOG_WARN, c"%s=%d\n".as_ptr(), c"fps".as_ptr(), 60 as c_int) };

        assert_eq!(
            std::mem::take(&mut *C_MESSAGES.lock().unwrap()),
            [(retro_log_level::RETRO_LOG_WARN.0, "fps=60\n".to_owned())]
        );
    }
}
