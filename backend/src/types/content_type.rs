use strum::{AsRefStr, EnumIter, EnumString, IntoEnumIterator};

/// Image content types accepted for upload
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, AsRefStr, EnumIter)]
pub enum ImageContentType {
    /// `image/jpeg`
    #[strum(serialize = "image/jpeg")]
    Jpeg,
    /// `image/jpg`, a non-standard alias some clients send
    #[strum(serialize = "image/jpg")]
    Jpg,
    /// `image/png`
    #[strum(serialize = "image/png")]
    Png,
    /// `image/webp`
    #[strum(serialize = "image/webp")]
    Webp,
}

impl ImageContentType {
    /// Comma separated list of every accepted content type
    #[must_use]
    pub fn allowed_list() -> String {
        Self::iter()
            .map(|content_type| content_type.as_ref().to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
