//! Error macros for skein

/// Macro for returning invalid argument errors
#[macro_export]
macro_rules! bail_invalid {
    ($context:expr, $value:expr) => {
        return Err($crate::error::SkeinError::invalid_argument($context, $value))
    };
}

/// Macro for returning not-found errors
#[macro_export]
macro_rules! bail_not_found {
    ($context:expr, $value:expr) => {
        return Err($crate::error::SkeinError::not_found($context, $value))
    };
}

/// Macro for returning unsupported errors
#[macro_export]
macro_rules! bail_unsupported {
    ($context:expr, $value:expr, $supported:expr) => {
        return Err($crate::error::SkeinError::unsupported(
            $context, $value, $supported,
        ))
    };
}

/// Macro for returning usage errors
#[macro_export]
macro_rules! bail_usage {
    ($msg:expr) => {
        return Err($crate::error::SkeinError::UsageError($msg.to_string()))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::error::SkeinError::UsageError(format!($fmt, $($arg)*)))
    };
}
