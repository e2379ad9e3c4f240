/// Transient signature state for the current invocation.
/// Never persisted: the image only leaves memory when it is embedded
/// into an exported PDF.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignatureState {
    /// PNG (or uploaded image) encoded as a data URL.
    pub image: Option<String>,
    /// True only when `image` is present and non-empty.
    pub complete: bool,
}

impl SignatureState {
    pub fn captured(image: String) -> Self {
        let complete = !image.is_empty();
        Self {
            image: if complete { Some(image) } else { None },
            complete,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.complete && self.image.as_deref().is_some_and(|i| !i.is_empty())
    }
}
