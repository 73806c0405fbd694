/// A barcode value read from a video frame.
/// Never empty; surrounding whitespace is stripped.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ScannedCode(String);

impl ScannedCode {
    /// Builds a code from raw decoder text. Returns `None` for blank input,
    /// which the decode engine uses to mean "no code in this frame".
    pub fn parse(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        if trimmed.len() == raw.len() {
            Some(Self(raw))
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ScannedCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque identifier of the video element or device a decode engine binds to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VideoSource(String);

impl VideoSource {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for VideoSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for VideoSource {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}
