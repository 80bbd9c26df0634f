#![allow(clippy::missing_safety_doc)]

//! Frontend-side bridge for the libretro ABI.
//!
//! A frontend answering a core's environment calls has to hand over strings the
//! core will later `free`, fill in callback structs and receive `printf`-style log
//! messages. This crate covers those pieces:
//!
//! - [`log_interface`]: a variadic log trampoline for [`retro_log_callback`] that
//!   formats into a bounded buffer and forwards to one registered handler,
//! - [`strings`]: `malloc`ed copies written into [`retro_variable::value`] and
//!   `const char **` directory out parameters, with allocation failure reported
//!   instead of aborting,
//! - [`hw_render`]: installing the frontend's callbacks into a
//!   [`retro_hw_render_callback`],
//! - [`environment`]: a dispatcher tying those to the environment commands.
//!
//! With the `c-api` feature the same operations are exported under their C names
//! (see [`ffi`]).

mod allocator;
#[cfg(feature = "log")]
mod logger;

pub mod environment;
pub mod error;
#[cfg(feature = "c-api")]
pub mod ffi;
pub mod hw_render;
pub mod log_interface;
pub mod strings;
pub mod types;
pub mod util;

pub use retro_bridge_sys as sys;

pub use allocator::{allocate_c_string, ForeignAllocator, LibcAllocator};
pub use environment::{dispatch, Frontend};
pub use hw_render::{HwRenderCallbacks, HwRenderRequest};
pub use log_interface::{configure_log_interface, dispatch_log, LogHandler, LOG_BUFFER_SIZE};
#[cfg(feature = "log")]
pub use logger::{forward_core_logs, RetroLogForwarder, CORE_LOG_TARGET};

use error::*;
#[cfg(feature = "log")]
use log_interface::install_log_interface;
use std::{
    ffi::*,
    os::raw::c_char,
    path::Path,
    ptr::NonNull,
};
use sys::*;
use types::*;
#[cfg(feature = "c-api")]
use util::*;
