//! Poster handles for card images, keyed by photo URL

use std::collections::HashMap;

use iced::widget::image;
use jupiter_model::Row;

#[derive(Debug, Clone)]
pub enum PosterState {
    Loading,
    Ready(image::Handle),
    Failed,
}

#[derive(Debug, Default)]
pub struct PosterCache {
    entries: HashMap<String, PosterState>,
}

impl PosterCache {
    /// Mark every not yet known poster of `rows` as loading and return the
    /// URLs that need a download, in row order.
    pub fn queue_rows(&mut self, rows: &[Row]) -> Vec<String> {
        let mut pending = Vec::new();
        for item in rows.iter().flat_map(|row| row.data.iter()) {
            let Some(url) = item.photo_url() else {
                continue;
            };
            if !self.entries.contains_key(url) {
                self.entries.insert(url.to_string(), PosterState::Loading);
                pending.push(url.to_string());
            }
        }
        pending
    }

    pub fn complete(&mut self, url: String, result: Result<image::Handle, String>) {
        let state = match result {
            Ok(handle) => PosterState::Ready(handle),
            Err(err) => {
                log::debug!("Poster '{}' failed to load: {}", url, err);
                PosterState::Failed
            }
        };
        self.entries.insert(url, state);
    }

    pub fn handle(&self, url: &str) -> Option<&image::Handle> {
        match self.entries.get(url) {
            Some(PosterState::Ready(handle)) => Some(handle),
            _ => None,
        }
    }

    pub fn state(&self, url: &str) -> Option<&PosterState> {
        self.entries.get(url)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
