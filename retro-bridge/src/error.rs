use thiserror::Error;

#[derive(Error, Debug)]
pub enum StringError {
    #[error("{0} is a null pointer")]
    NullPointer(&'static str),

    #[error("invalid UTF-8 sequence")]
    NonUTF8(#[from] std::str::Utf8Error),

    #[error("string contains a null byte")]
    StringContainsNull(#[from] std::ffi::NulError),

    #[error("path “{0}” cannot be represented as a C string on this platform")]
    InvalidPath(String),
}

#[derive(Error, Debug)]
pub enum BridgeError {
    #[error("invalid string")]
    StringError(#[from] StringError),

    #[error("{0} is a null pointer")]
    NullPointer(&'static str),

    /// The target allocator returned NULL. The output slot has been left NULL.
    #[error("failed to allocate {0} bytes")]
    AllocationFailure(usize),

    #[error("precondition violated: {0}")]
    PreconditionViolation(&'static str),

    #[error("core passed an invalid enum value: {0}")]
    InvalidEnumValue(String),

    #[error("unsupported environment command: {0}")]
    UnsupportedCommand(u32),

    /// The command is understood, but the frontend has no value to answer it with.
    #[error("the frontend provides no {0}")]
    Unavailable(&'static str),

    #[error("unknown variable: “{0}”")]
    UnknownVariable(String),

    #[error("the frontend rejected the hardware render request")]
    HwRenderRejected,
}

impl<T> From<crate::sys::InvalidEnumValue<T>> for BridgeError
where
    T: std::fmt::Display,
{
    fn from(source: crate::sys::InvalidEnumValue<T>) -> Self {
        Self::InvalidEnumValue(source.value().to_string())
    }
}
