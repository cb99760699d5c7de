use crate::row::Row;

/// Top-level response body of the category endpoint.
///
/// Missing or `null` levels along `data.category.frontPage` decode to an
/// empty front page rather than failing the whole payload.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CategoryPayload {
    #[cfg_attr(
        feature = "serde",
        serde(default, deserialize_with = "crate::serde_helpers::null_as_default")
    )]
    pub data: CategoryData,
}

#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CategoryData {
    #[cfg_attr(
        feature = "serde",
        serde(default, deserialize_with = "crate::serde_helpers::null_as_default")
    )]
    pub category: Category,
}

#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Category {
    #[cfg_attr(
        feature = "serde",
        serde(default, deserialize_with = "crate::serde_helpers::null_as_default")
    )]
    pub front_page: Vec<Row>,
}

impl CategoryPayload {
    pub fn from_rows(rows: Vec<Row>) -> Self {
        Self {
            data: CategoryData {
                category: Category { front_page: rows },
            },
        }
    }

    /// Every front page row, in payload order.
    pub fn front_page(&self) -> &[Row] {
        &self.data.category.front_page
    }

    pub fn into_front_page(self) -> Vec<Row> {
        self.data.category.front_page
    }
}
