#![allow(non_upper_case_globals)]
#![allow(non_camel_case_types)]
#![allow(non_snake_case)]

//! The subset of `libretro.h` a frontend needs to answer log, variable,
//! directory and hardware render requests.
//!
//! Enums are modelled as transparent newtypes over `c_uint` so values written by
//! a foreign core can never be an invalid Rust enum discriminant.

use core::fmt::Display;
use libc::{c_char, c_uint, c_void, uintptr_t};

pub const RETRO_API_VERSION: c_uint = 1;

/// Defines a transparent newtype with an associated constant per known value,
/// the same shape bindgen produces for `newtype_enum`.
macro_rules! newtype_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $( $(#[$vmeta:meta])* $variant:ident = $value:expr, )+ }
    ) => {
        $(#[$meta])*
        #[repr(transparent)]
        #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
        pub struct $name(pub c_uint);

        impl $name {
            $( $(#[$vmeta])* pub const $variant: $name = $name($value); )+

            /// Returns [`true`] if the value is one `libretro.h` defines.
            pub fn is_known(self) -> bool {
                $( self == $name::$variant )||+
            }
        }
    };
}

newtype_enum! {
    /// `enum retro_log_level`
    retro_log_level {
        RETRO_LOG_DEBUG = 0,
        RETRO_LOG_INFO = 1,
        RETRO_LOG_WARN = 2,
        RETRO_LOG_ERROR = 3,
        RETRO_LOG_DUMMY = i32::MAX as c_uint,
    }
}

newtype_enum! {
    /// `enum retro_hw_context_type`
    retro_hw_context_type {
        RETRO_HW_CONTEXT_NONE = 0,
        /// OpenGL 2.x. Driver can choose to use latest compatibility context.
        RETRO_HW_CONTEXT_OPENGL = 1,
        /// OpenGL ES 2.0.
        RETRO_HW_CONTEXT_OPENGLES2 = 2,
        /// Modern desktop core GL context. Use `version_major`/`version_minor`
        /// fields to set GL version.
        RETRO_HW_CONTEXT_OPENGL_CORE = 3,
        /// OpenGL ES 3.0
        RETRO_HW_CONTEXT_OPENGLES3 = 4,
        /// OpenGL ES 3.1+. Set `version_major`/`version_minor`.
        RETRO_HW_CONTEXT_OPENGLES_VERSION = 5,
        RETRO_HW_CONTEXT_VULKAN = 6,
        RETRO_HW_CONTEXT_D3D11 = 7,
        RETRO_HW_CONTEXT_D3D10 = 8,
        RETRO_HW_CONTEXT_D3D12 = 9,
        RETRO_HW_CONTEXT_D3D9 = 10,
        RETRO_HW_CONTEXT_DUMMY = i32::MAX as c_uint,
    }
}

/// `printf`-style logging function the frontend hands to the core.
pub type retro_log_printf_t =
    Option<unsafe extern "C" fn(level: retro_log_level, fmt: *const c_char, ...)>;

#[repr(C)]
#[derive(Debug, Default, Copy, Clone)]
pub struct retro_log_callback {
    pub log: retro_log_printf_t,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct retro_variable {
    /// Variable to query in `RETRO_ENVIRONMENT_GET_VARIABLE`.
    pub key: *const c_char,

    /// Value to be obtained. If key does not exist, it is set to NULL.
    pub value: *const c_char,
}

impl Default for retro_variable {
    fn default() -> Self {
        Self {
            key: std::ptr::null(),
            value: std::ptr::null(),
        }
    }
}

pub type retro_proc_address_t = Option<unsafe extern "C" fn()>;

/// Invalidates the current HW context.
/// Any GPU state is lost, and must not be deinitialized explicitly.
pub type retro_hw_context_reset_t = Option<unsafe extern "C" fn()>;

/// Gets current framebuffer which is to be rendered to.
/// Could change every frame potentially.
pub type retro_hw_get_current_framebuffer_t = Option<unsafe extern "C" fn() -> uintptr_t>;

/// Get a symbol from HW context.
pub type retro_hw_get_proc_address_t =
    Option<unsafe extern "C" fn(sym: *const c_char) -> retro_proc_address_t>;

#[repr(C)]
#[derive(Debug, Default, Copy, Clone)]
pub struct retro_hw_render_callback {
    /// Which API to use. Set by libretro core.
    pub context_type: retro_hw_context_type,

    /// Called when a context has been created or when it has been reset.
    /// Set by frontend.
    pub context_reset: retro_hw_context_reset_t,

    /// Set by frontend.
    pub get_current_framebuffer: retro_hw_get_current_framebuffer_t,

    /// Set by frontend.
    pub get_proc_address: retro_hw_get_proc_address_t,

    /// Set if render buffers should have depth component attached.
    pub depth: bool,

    /// Set if stencil buffers should be attached.
    pub stencil: bool,

    /// If depth and stencil are true, a packed 24/8 buffer will be added.
    /// Only attaching stencil is invalid and will be ignored.
    pub bottom_left_origin: bool,

    /// Major version number for core GL context or GLES 3.1+.
    pub version_major: c_uint,

    /// Minor version number for core GL context or GLES 3.1+.
    pub version_minor: c_uint,

    /// If this is true, the frontend will go very far to avoid
    /// resetting context in scenarios like toggling fullscreen, etc.
    pub cache_context: bool,

    /// A callback to be called before the context is destroyed in a
    /// controlled way by the frontend.
    pub context_destroy: retro_hw_context_reset_t,

    /// Creates a debug context.
    pub debug_context: bool,
}

pub type retro_environment_t =
    Option<unsafe extern "C" fn(cmd: c_uint, data: *mut c_void) -> bool>;

/// Defined commands are not stable yet, and may change.
pub const RETRO_ENVIRONMENT_EXPERIMENTAL: c_uint = 0x10000;
/// Environment callback to be used internally in frontend.
pub const RETRO_ENVIRONMENT_PRIVATE: c_uint = 0x20000;

/// `struct retro_hw_render_callback *`
pub const RETRO_ENVIRONMENT_SET_HW_RENDER: c_uint = 14;
/// `const char **`
pub const RETRO_ENVIRONMENT_GET_SYSTEM_DIRECTORY: c_uint = 9;
/// `struct retro_variable *`
pub const RETRO_ENVIRONMENT_GET_VARIABLE: c_uint = 15;
/// `const struct retro_variable *`
pub const RETRO_ENVIRONMENT_SET_VARIABLES: c_uint = 16;
/// `bool *`
pub const RETRO_ENVIRONMENT_GET_VARIABLE_UPDATE: c_uint = 17;
/// `struct retro_log_callback *`
pub const RETRO_ENVIRONMENT_GET_LOG_INTERFACE: c_uint = 27;
/// `const char **`
pub const RETRO_ENVIRONMENT_GET_CORE_ASSETS_DIRECTORY: c_uint = 30;
/// `const char **`
pub const RETRO_ENVIRONMENT_GET_SAVE_DIRECTORY: c_uint = 31;
/// `unsigned *`
pub const RETRO_ENVIRONMENT_GET_PREFERRED_HW_RENDER: c_uint = 56;

#[derive(Debug, Default)]
pub struct InvalidEnumValue<T: Display>(T);

impl<T: Display> InvalidEnumValue<T> {
    pub fn new(value: T) -> Self {
        InvalidEnumValue(value)
    }

    pub fn value(&self) -> &T {
        &self.0
    }
}

impl<T: Display> Display for InvalidEnumValue<T> {
    fn fmt(&self, fmt: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(fmt, "Invalid enum value: {}", self.0)
    }
}
