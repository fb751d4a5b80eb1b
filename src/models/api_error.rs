use serde::Deserialize;

/// Error body returned by the backend when it rejects a payload.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<ErrorMessage>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ErrorMessage {
    One(String),
    Many(Vec<String>),
}

impl ErrorMessage {
    pub fn into_text(self) -> String {
        match self {
            ErrorMessage::One(msg) => msg,
            ErrorMessage::Many(msgs) => msgs.join(", "),
        }
    }
}

impl ErrorBody {
    /// Collapses the message into one display string, or `None` when the
    /// backend sent nothing usable.
    pub fn into_text(self) -> Option<String> {
        self.message
            .map(ErrorMessage::into_text)
            .filter(|msg| !msg.is_empty())
    }
}
