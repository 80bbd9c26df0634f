//! The libretro log interface, seen from the frontend.
//!
//! Cores log through a `printf`-style function pointer with no user data, so the
//! handler that receives their messages has to live in a process-wide slot.
//! The slot is written when the frontend answers `RETRO_ENVIRONMENT_GET_LOG_INTERFACE`
//! and read on every message.
//!
//! Formatting happens in C (`csrc/log_trampoline.c`) with `vsnprintf` into a
//! [`LOG_BUFFER_SIZE`] byte stack buffer. Longer messages are truncated silently
//! to `LOG_BUFFER_SIZE - 1` bytes.
use super::*;
use std::io::Write;
use std::sync::{Arc, PoisonError, RwLock};

/// Size of the buffer core log messages are formatted into, terminator included.
///
/// Configured at build time through the `RETRO_BRIDGE_LOG_BUFFER_SIZE` environment variable.
pub const LOG_BUFFER_SIZE: usize = const_str::parse!(env!("RETRO_BRIDGE_LOG_BUFFER_SIZE"), usize);

/// Receives every message the core logs, already formatted.
pub type LogHandler = dyn Fn(LogLevel, &str) + Send + Sync + 'static;

static LOG_HANDLER: RwLock<Option<Arc<LogHandler>>> = RwLock::new(None);

extern "C" {
    /// Formats its arguments and passes the result to [`retro_bridge_dispatch_log`].
    fn retro_bridge_log_trampoline(level: retro_log_level, fmt: *const c_char, ...);
}

/// The function pointer installed into [`retro_log_callback::log`].
pub fn log_trampoline() -> retro_log_printf_t {
    Some(retro_bridge_log_trampoline)
}

/// Registers `handler` and points `callback.log` at the trampoline.
///
/// A later call replaces the handler for every core that already holds the trampoline.
pub fn install_log_interface<F>(handler: F, callback: &mut retro_log_callback)
where
    F: Fn(LogLevel, &str) + Send + Sync + 'static,
{
    set_log_handler(Arc::new(handler));
    callback.log = log_trampoline();
}

/// Registers `handler` and writes the trampoline into the
/// `struct retro_log_callback *` in `data`.
///
/// Nothing is changed when `data` is NULL.
///
/// # Safety
/// `data` must be NULL or point to a valid, writable [`retro_log_callback`].
pub unsafe fn configure_log_interface<F>(handler: F, data: *mut c_void) -> Result<(), BridgeError>
where
    F: Fn(LogLevel, &str) + Send + Sync + 'static,
{
    let callback = (data as *mut retro_log_callback)
        .as_mut()
        .ok_or(BridgeError::NullPointer("retro_log_callback"))?;

    install_log_interface(handler, callback);

    Ok(())
}

/// Replaces the handler without touching any struct.
pub fn set_log_handler(handler: Arc<LogHandler>) {
    let mut slot = LOG_HANDLER.write().unwrap_or_else(PoisonError::into_inner);
    slot.replace(handler);
}

/// Returns [`true`] once a handler has been registered.
pub fn has_log_handler() -> bool {
    LOG_HANDLER
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .is_some()
}

fn current_handler() -> Option<Arc<LogHandler>> {
    LOG_HANDLER
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// Delivers an already formatted message to the registered handler.
///
/// The handler runs after the slot lock has been released, so it may reconfigure
/// logging itself.
pub fn dispatch_log(level: LogLevel, message: &str) -> Result<(), BridgeError> {
    let handler = current_handler().ok_or(BridgeError::PreconditionViolation(
        "the log trampoline was called before a handler was configured",
    ))?;

    (handler)(level, message);

    Ok(())
}

/// Writes `[libretro LEVEL] message` as a single line.
fn write_fallback<W: Write>(mut out: W, level: LogLevel, message: &str) -> std::io::Result<()> {
    writeln!(out, "[libretro {}] {}", level, message.trim_end_matches('\n'))
}

/// Used when a message arrives before any handler was configured.
fn write_to_stderr(level: LogLevel, message: &str) {
    let stderr = std::io::stderr();
    let _ = write_fallback(stderr.lock(), level, message);
}

/// Called by the C trampoline with the formatted message.
///
/// Messages are decoded lossily because truncation may cut a UTF-8 sequence in half.
#[doc(hidden)]
#[no_mangle]
pub unsafe extern "C" fn retro_bridge_dispatch_log(level: retro_log_level, message: *const c_char) {
    let level = LogLevel::from_raw(level);

    let message = if message.is_null() {
        std::borrow::Cow::Borrowed("")
    } else {
        String::from_utf8_lossy(CStr::from_ptr(message).to_bytes())
    };

    if let Err(BridgeError::PreconditionViolation(_)) = dispatch_log(level, &message) {
        write_to_stderr(level, &message);
    }
}
