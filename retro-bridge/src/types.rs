//! Rust versions of the libretro values the bridge passes around.
use super::*;
use std::fmt;

/// Severity of a message logged by the core.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Converts a raw level coming from the core.
    ///
    /// Cores are not supposed to pass anything but the four defined levels,
    /// anything else (including `RETRO_LOG_DUMMY`) is reported as [`LogLevel::Error`].
    pub fn from_raw(level: retro_log_level) -> Self {
        Self::try_from(level).unwrap_or(LogLevel::Error)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        }
    }
}

impl TryFrom<retro_log_level> for LogLevel {
    type Error = InvalidEnumValue<u32>;

    fn try_from(level: retro_log_level) -> Result<Self, InvalidEnumValue<u32>> {
        match level {
            retro_log_level::RETRO_LOG_DEBUG => Ok(LogLevel::Debug),
            retro_log_level::RETRO_LOG_INFO => Ok(LogLevel::Info),
            retro_log_level::RETRO_LOG_WARN => Ok(LogLevel::Warn),
            retro_log_level::RETRO_LOG_ERROR => Ok(LogLevel::Error),
            other => Err(InvalidEnumValue::new(other.0)),
        }
    }
}

impl From<LogLevel> for retro_log_level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Debug => retro_log_level::RETRO_LOG_DEBUG,
            LogLevel::Info => retro_log_level::RETRO_LOG_INFO,
            LogLevel::Warn => retro_log_level::RETRO_LOG_WARN,
            LogLevel::Error => retro_log_level::RETRO_LOG_ERROR,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Graphics API a core asks for in `RETRO_ENVIRONMENT_SET_HW_RENDER`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum HwContextType {
    None,
    OpenGl,
    OpenGlEs2,
    OpenGlCore,
    OpenGlEs3,
    OpenGlEsVersion,
    Vulkan,
    Direct3D11,
    Direct3D10,
    Direct3D12,
    Direct3D9,
}

impl TryFrom<retro_hw_context_type> for HwContextType {
    type Error = InvalidEnumValue<u32>;

    fn try_from(value: retro_hw_context_type) -> Result<Self, Self::Error> {
        Ok(match value {
            retro_hw_context_type::RETRO_HW_CONTEXT_NONE => HwContextType::None,
            retro_hw_context_type::RETRO_HW_CONTEXT_OPENGL => HwContextType::OpenGl,
            retro_hw_context_type::RETRO_HW_CONTEXT_OPENGLES2 => HwContextType::OpenGlEs2,
            retro_hw_context_type::RETRO_HW_CONTEXT_OPENGL_CORE => HwContextType::OpenGlCore,
            retro_hw_context_type::RETRO_HW_CONTEXT_OPENGLES3 => HwContextType::OpenGlEs3,
            retro_hw_context_type::RETRO_HW_CONTEXT_OPENGLES_VERSION => {
                HwContextType::OpenGlEsVersion
            }
            retro_hw_context_type::RETRO_HW_CONTEXT_VULKAN => HwContextType::Vulkan,
            retro_hw_context_type::RETRO_HW_CONTEXT_D3D11 => HwContextType::Direct3D11,
            retro_hw_context_type::RETRO_HW_CONTEXT_D3D10 => HwContextType::Direct3D10,
            retro_hw_context_type::RETRO_HW_CONTEXT_D3D12 => HwContextType::Direct3D12,
            retro_hw_context_type::RETRO_HW_CONTEXT_D3D9 => HwContextType::Direct3D9,
            other => return Err(InvalidEnumValue::new(other.0)),
        })
    }
}

impl From<HwContextType> for retro_hw_context_type {
    fn from(value: HwContextType) -> Self {
        match value {
            HwContextType::None => retro_hw_context_type::RETRO_HW_CONTEXT_NONE,
            HwContextType::OpenGl => retro_hw_context_type::RETRO_HW_CONTEXT_OPENGL,
            HwContextType::OpenGlEs2 => retro_hw_context_type::RETRO_HW_CONTEXT_OPENGLES2,
            HwContextType::OpenGlCore => retro_hw_context_type::RETRO_HW_CONTEXT_OPENGL_CORE,
            HwContextType::OpenGlEs3 => retro_hw_context_type::RETRO_HW_CONTEXT_OPENGLES3,
            HwContextType::OpenGlEsVersion => {
                retro_hw_context_type::RETRO_HW_CONTEXT_OPENGLES_VERSION
            }
            HwContextType::Vulkan => retro_hw_context_type::RETRO_HW_CONTEXT_VULKAN,
            HwContextType::Direct3D11 => retro_hw_context_type::RETRO_HW_CONTEXT_D3D11,
            HwContextType::Direct3D10 => retro_hw_context_type::RETRO_HW_CONTEXT_D3D10,
            HwContextType::Direct3D12 => retro_hw_context_type::RETRO_HW_CONTEXT_D3D12,
            HwContextType::Direct3D9 => retro_hw_context_type::RETRO_HW_CONTEXT_D3D9,
        }
    }
}

bitflags::bitflags! {
    /// Flag bits a core may OR into an environment command number.
    pub struct EnvironmentFlags: u32 {
        /// The command is not stable yet.
        const EXPERIMENTAL = RETRO_ENVIRONMENT_EXPERIMENTAL;

        /// The command is meant for frontend-internal use.
        const PRIVATE = RETRO_ENVIRONMENT_PRIVATE;
    }
}

impl EnvironmentFlags {
    /// Splits a raw command into its number and flag bits.
    pub fn split(cmd: u32) -> (u32, EnvironmentFlags) {
        let flags = EnvironmentFlags::from_bits_truncate(cmd);
        (cmd & !EnvironmentFlags::all().bits(), flags)
    }
}
