//! Interpretation of what the user typed before pressing Send.

/// Serial port names typed into the text box start with this prefix.
pub const PORT_PREFIX: &str = "COM";

/// Length, in characters, of a port name typed into the text box.
pub const PORT_NAME_LEN: usize = 4;

/// What a press of Send should do with the current text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    /// Nothing left after normalization.
    Nothing,
    /// Switch the session to another serial port, e.g. `COM7`.
    SetPort(String),
    /// Convert the text to allophones and send it.
    Speak(String),
}

/// Turns line breaks into spaces and trims the surrounding whitespace.
pub fn normalize(raw: &str) -> String {
    raw.replace("\r\n", " ")
        .replace(['\r', '\n'], " ")
        .trim()
        .to_string()
}

/// Normalizes `raw` and decides between a port change and speech.
pub fn classify(raw: &str) -> Request {
    let text = normalize(raw);
    if is_port_name(&text) {
        Request::SetPort(text)
    } else if text.is_empty() {
        Request::Nothing
    } else {
        Request::Speak(text)
    }
}

pub fn is_port_name(text: &str) -> bool {
    text.chars().count() == PORT_NAME_LEN && text.starts_with(PORT_PREFIX)
}

/// Applied on every keystroke so the text box only ever holds capitals.
pub fn uppercase(text: &str) -> String {
    text.to_uppercase()
}
