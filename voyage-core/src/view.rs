use serde::Serialize;

/// A blocking alert with a short title and message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }
}

/// The parts of the booking screen the submission workflow drives.
pub trait BookingView: Send + Sync {
    /// Toggle the progress indicator and disable or enable the submit button
    fn set_busy(&self, busy: bool);

    fn show_notice(&self, notice: Notice);
}
