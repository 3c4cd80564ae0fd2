//! Status messages shown in the shared status region.

use std::fmt;
use std::time::Duration;

/// How long a success message stays up before it clears itself.
pub const SUCCESS_CLEAR_DELAY: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Success,
    Error,
}

impl StatusKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusKind::Info => "info",
            StatusKind::Success => "success",
            StatusKind::Error => "error",
        }
    }

    /// Class list for the status region, e.g. `message error`.
    pub fn css_class(&self) -> String {
        format!("message {}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub kind: StatusKind,
}

impl StatusMessage {
    pub fn new(text: impl Into<String>, kind: StatusKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }
}

/// Everything the controller tells the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    LoggedIn,
    LoginRejected(Option<String>),
    NetworkFailure,
    SignInRequired,
    NameRequired,
    SetCreated(String),
    SetRejected(Option<String>),
    LoggedOut,
    FormCleared,
    Online,
    Offline,
}

impl Notice {
    pub fn kind(&self) -> StatusKind {
        match self {
            Notice::LoggedIn | Notice::SetCreated(_) => StatusKind::Success,
            Notice::LoggedOut | Notice::FormCleared | Notice::Online => StatusKind::Info,
            Notice::LoginRejected(_)
            | Notice::NetworkFailure
            | Notice::SignInRequired
            | Notice::NameRequired
            | Notice::SetRejected(_)
            | Notice::Offline => StatusKind::Error,
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::LoggedIn => f.write_str("Signed in successfully!"),
            Notice::LoginRejected(detail) => write!(
                f,
                "Sign-in failed: {}",
                detail.as_deref().unwrap_or("Invalid credentials")
            ),
            Notice::NetworkFailure => f.write_str("Network or server error"),
            Notice::SignInRequired => f.write_str("Please sign in first"),
            Notice::NameRequired => f.write_str("Set name is required"),
            Notice::SetCreated(name) => write!(f, "Set \"{name}\" created successfully!"),
            Notice::SetRejected(reason) => write!(
                f,
                "Could not create set: {}",
                reason.as_deref().unwrap_or("Unknown error")
            ),
            Notice::LoggedOut => f.write_str("You have signed out"),
            Notice::FormCleared => f.write_str("Form cleared"),
            Notice::Online => f.write_str("Connection restored"),
            Notice::Offline => f.write_str("No internet connection"),
        }
    }
}

impl From<Notice> for StatusMessage {
    fn from(notice: Notice) -> Self {
        StatusMessage::new(notice.to_string(), notice.kind())
    }
}

/// Network state reported by the browser's `online`/`offline` events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connectivity {
    Online,
    Offline,
}

impl From<Connectivity> for Notice {
    fn from(connectivity: Connectivity) -> Self {
        match connectivity {
            Connectivity::Online => Notice::Online,
            Connectivity::Offline => Notice::Offline,
        }
    }
}

/// One-shot timer used for the success auto-clear.
pub trait Timer {
    fn schedule(&self, delay: Duration, callback: Box<dyn FnOnce()>);
}
