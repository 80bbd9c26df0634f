//! Allocation seam for memory that is handed over to the core.
//!
//! Strings written into core-owned structs must come from an allocator the core
//! can release with `free`, never from Rust's global allocator.
use super::*;

/// Source of memory whose ownership is transferred to the core.
///
/// # Safety
/// [`ForeignAllocator::allocate`] must return either NULL or a pointer to at least
/// `size` writable bytes that stay valid until the core releases them.
pub unsafe trait ForeignAllocator {
    /// Returns NULL when the request cannot be satisfied.
    fn allocate(&self, size: usize) -> *mut c_char;
}

/// The C allocator (`malloc`), matching what cores use to `free` the strings.
#[derive(Debug, Default, Copy, Clone)]
pub struct LibcAllocator;

unsafe impl ForeignAllocator for LibcAllocator {
    fn allocate(&self, size: usize) -> *mut c_char {
        unsafe { libc::malloc(size) as *mut c_char }
    }
}

unsafe impl<A: ForeignAllocator + ?Sized> ForeignAllocator for &A {
    fn allocate(&self, size: usize) -> *mut c_char {
        (**self).allocate(size)
    }
}

/// Copies `value` and its terminator into a fresh allocation from `allocator`.
///
/// On success the caller owns the returned buffer and is expected to hand it over
/// to the core right away.
pub fn allocate_c_string<A: ForeignAllocator + ?Sized>(
    allocator: &A,
    value: &CStr,
) -> Result<NonNull<c_char>, BridgeError> {
    let bytes = value.to_bytes_with_nul();

    let ptr = NonNull::new(allocator.allocate(bytes.len()))
        .ok_or(BridgeError::AllocationFailure(bytes.len()))?;

    // SAFETY: the allocator contract guarantees `bytes.len()` writable bytes
    unsafe {
        std::ptr::copy_nonoverlapping(bytes.as_ptr() as *const c_char, ptr.as_ptr(), bytes.len());
    }

    Ok(ptr)
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::cell::Cell;

    /// Fails every request.
    pub struct ZeroCapacityAllocator;

    unsafe impl ForeignAllocator for ZeroCapacityAllocator {
        fn allocate(&self, _size: usize) -> *mut c_char {
            std::ptr::null_mut()
        }
    }

    /// Delegates to `malloc` and remembers the size of the last request.
    #[derive(Default)]
    pub struct RecordingAllocator {
        pub last_request: Cell<Option<usize>>,
    }

    unsafe impl ForeignAllocator for RecordingAllocator {
        fn allocate(&self, size: usize) -> *mut c_char {
            self.last_request.set(Some(size));
            LibcAllocator.allocate(size)
        }
    }

    /// Releases a string the bridge handed over, like the core eventually would.
    pub unsafe fn free_c_string(ptr: *const c_char) {
        libc::free(ptr as *mut libc::c_void);
    }
}

#[cfg(test)]
mod tests {
    use super::testing::*;
    use super::*;

    #[test]
    fn copies_string_with_terminator() {
        let allocator = RecordingAllocator::default();
        let value = CString::new("snes9x").unwrap();

        let ptr = allocate_c_string(&allocator, &value).unwrap();

        assert_eq!(allocator.last_request.get(), Some(7));
        unsafe {
            assert_eq!(CStr::from_ptr(ptr.as_ptr()), value.as_c_str());
            free_c_string(ptr.as_ptr());
        }
    }

    #[test]
    fn empty_string_still_gets_a_terminator() {
        let allocator = RecordingAllocator::default();
        let ptr = allocate_c_string(&allocator, c"").unwrap();

        assert_eq!(allocator.last_request.get(), Some(1));
        unsafe {
            assert_eq!(CStr::from_ptr(ptr.as_ptr()).to_bytes(), b"");
            free_c_string(ptr.as_ptr());
        }
    }

    #[test]
    fn zero_capacity_allocator_reports_failure() {
        let result = allocate_c_string(&ZeroCapacityAllocator, c"value");
        assert!(matches!(result, Err(BridgeError::AllocationFailure(6))));
    }
}
