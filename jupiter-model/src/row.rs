/// One front page row: a titled group of media items shown as a single
/// horizontally scrollable strip.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Row {
    #[cfg_attr(
        feature = "serde",
        serde(default, deserialize_with = "crate::serde_helpers::null_as_default")
    )]
    pub header: Option<String>,
    /// Decoded with JavaScript truthiness; see [`Row::is_displayable`].
    #[cfg_attr(
        feature = "serde",
        serde(default, deserialize_with = "crate::serde_helpers::truthy")
    )]
    pub high_timeline: bool,
    #[cfg_attr(
        feature = "serde",
        serde(default, deserialize_with = "crate::serde_helpers::null_as_default")
    )]
    pub data: Vec<Item>,
}

impl Row {
    /// A row is rendered only when it is flagged for the high timeline and
    /// has at least one item.
    pub fn is_displayable(&self) -> bool {
        self.high_timeline && !self.data.is_empty()
    }

    pub fn title(&self) -> &str {
        self.header.as_deref().unwrap_or_default()
    }
}

/// A single media entry, displayed as one card.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Item {
    #[cfg_attr(
        feature = "serde",
        serde(default, deserialize_with = "crate::serde_helpers::null_as_default")
    )]
    pub heading: Option<String>,
    #[cfg_attr(
        feature = "serde",
        serde(default, deserialize_with = "crate::serde_helpers::null_as_default")
    )]
    pub vertical_photos: Vec<Photo>,
}

impl Item {
    /// URL of the first vertical photo, if the item has one.
    pub fn photo_url(&self) -> Option<&str> {
        self.vertical_photos
            .first()
            .and_then(|photo| photo.photo_url_base.as_deref())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Photo {
    #[cfg_attr(
        feature = "serde",
        serde(default, deserialize_with = "crate::serde_helpers::null_as_default")
    )]
    pub photo_url_base: Option<String>,
}

impl Photo {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            photo_url_base: Some(url.into()),
        }
    }
}
