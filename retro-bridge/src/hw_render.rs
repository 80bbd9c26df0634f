//! Hardware render callbacks the frontend installs for the core.
use super::*;

/// The four frontend-provided functions of a [`retro_hw_render_callback`].
///
/// These are plain function pointers, nobody owns or frees them.
#[derive(Debug, Default, Copy, Clone)]
pub struct HwRenderCallbacks {
    pub context_reset: retro_hw_context_reset_t,
    pub get_current_framebuffer: retro_hw_get_current_framebuffer_t,
    pub context_destroy: retro_hw_context_reset_t,
    pub get_proc_address: retro_hw_get_proc_address_t,
}

impl HwRenderCallbacks {
    /// Copies the callbacks into `hw`, leaving every core-owned field alone.
    pub fn install(&self, hw: &mut retro_hw_render_callback) {
        hw.context_reset = self.context_reset;
        hw.get_current_framebuffer = self.get_current_framebuffer;
        hw.context_destroy = self.context_destroy;
        hw.get_proc_address = self.get_proc_address;
    }
}

/// What the core asked for in `RETRO_ENVIRONMENT_SET_HW_RENDER`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct HwRenderRequest {
    pub context_type: HwContextType,
    pub version_major: u32,
    pub version_minor: u32,
    pub depth: bool,
    pub stencil: bool,
    pub bottom_left_origin: bool,
    pub cache_context: bool,
    pub debug_context: bool,
}

impl TryFrom<&retro_hw_render_callback> for HwRenderRequest {
    type Error = BridgeError;

    fn try_from(hw: &retro_hw_render_callback) -> Result<Self, Self::Error> {
        Ok(Self {
            context_type: HwContextType::try_from(hw.context_type)?,
            version_major: hw.version_major,
            version_minor: hw.version_minor,
            depth: hw.depth,
            stencil: hw.stencil,
            bottom_left_origin: hw.bottom_left_origin,
            cache_context: hw.cache_context,
            debug_context: hw.debug_context,
        })
    }
}

/// Writes the four callbacks into the `struct retro_hw_render_callback *` in `data`.
///
/// # Safety
/// `data` must be NULL or point to a valid, writable [`retro_hw_render_callback`].
pub unsafe fn set_hw_callback(
    data: *mut c_void,
    context_reset: retro_hw_context_reset_t,
    get_current_framebuffer: retro_hw_get_current_framebuffer_t,
    context_destroy: retro_hw_context_reset_t,
    get_proc_address: retro_hw_get_proc_address_t,
) -> Result<(), BridgeError> {
    let hw = (data as *mut retro_hw_render_callback)
        .as_mut()
        .ok_or(BridgeError::NullPointer("retro_hw_render_callback"))?;

    HwRenderCallbacks {
        context_reset,
        get_current_framebuffer,
        context_destroy,
        get_proc_address,
    }
    .install(hw);

    Ok(())
}
