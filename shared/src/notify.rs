/// Message shown when a backend call fails for any reason
pub const GENERIC_FAILURE: &str = "Something went wrong. Please try again later";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
}

/// A short-lived notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub level: ToastLevel,
    pub message: String,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: ToastLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: ToastLevel::Error,
            message: message.into(),
        }
    }

    pub fn generic_failure() -> Self {
        Self::error(GENERIC_FAILURE)
    }
}

/// User-facing feedback: toasts and the full-screen loading indicator
pub trait Notifier {
    fn notify(&self, toast: Toast);
    fn set_loading(&self, loading: bool);
}
