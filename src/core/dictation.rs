/// Text produced by a speech-to-text source. Only the transcript crosses
/// the boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcript {
    pub text: String,
}

impl Transcript {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Append a transcript to existing notes, separated by one space.
pub fn append_transcript(notes: &str, transcript: &Transcript) -> String {
    let text = transcript.text.trim();

    if text.is_empty() {
        notes.to_string()
    } else if notes.is_empty() {
        text.to_string()
    } else {
        format!("{notes} {text}")
    }
}
