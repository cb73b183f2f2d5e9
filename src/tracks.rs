// src/tracks.rs
//
// The set of lines being tracked, keyed by name in configured order.

use crate::line::LineState;
use crate::types::Config;
use serde::ser::{Serialize, SerializeMap, Serializer};
use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct LineTracks {
    lines: Vec<(String, LineState)>,
}

impl LineTracks {
    /// One fresh `LineState` per configured line name.
    pub fn from_config(config: &Config) -> Self {
        let lines = config
            .lines
            .0
            .iter()
            .map(|name| {
                debug!("Initialized line state for '{}'", name);
                (name.clone(), LineState::new())
            })
            .collect();
        Self { lines }
    }

    /// State for the named line, if tracked.
    pub fn get(&self, name: &str) -> Option<&LineState> {
        self.lines
            .iter()
            .find(|(n, _)| n.as_str() == name)
            .map(|(_, s)| s)
    }

    /// Mutable state for the named line, if tracked.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut LineState> {
        self.lines
            .iter_mut()
            .find(|(n, _)| n.as_str() == name)
            .map(|(_, s)| s)
    }

    /// Number of tracked lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Lines with their names, in configured order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &LineState)> {
        self.lines.iter().map(|(n, s)| (n.as_str(), s))
    }
}

impl Serialize for LineTracks {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.lines.len()))?;
        for (name, state) in &self.lines {
            map.serialize_entry(name, state)?;
        }
        map.end()
    }
}
