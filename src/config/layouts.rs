//! Auditorium layout table.
//!
//! Layouts are keyed by [`AuditoriumLayoutId`] and start from the built-in
//! shapes; entries in the TOML file replace the built-in ones.

use serde::Deserialize;
use std::collections::HashMap;
use tracing::{info, warn};

use crate::errors::BookingError;
use crate::models::layout::{AuditoriumLayoutId, Layout};

#[derive(Debug, Default, Deserialize)]
struct LayoutFile {
    #[serde(default)]
    auditoriums: Vec<LayoutEntry>,
}

#[derive(Debug, Deserialize)]
struct LayoutEntry {
    layout: AuditoriumLayoutId,
    sections: Vec<u32>,
    premium_rows: u32,
    total_rows: u32,
}

#[derive(Debug, Clone)]
pub struct LayoutTable {
    layouts: HashMap<AuditoriumLayoutId, Layout>,
}

impl LayoutTable {
    pub fn builtin() -> Self {
        let layouts = AuditoriumLayoutId::ALL
            .into_iter()
            .map(|id| (id, id.builtin_layout()))
            .collect();
        Self { layouts }
    }

    /// Loads overrides from `path`. A missing file leaves the built-in
    /// layouts in place; a malformed one is a configuration error.
    pub fn load(path: &str) -> Result<Self, BookingError> {
        let settings = config::Config::builder()
            .add_source(config::File::new(path, config::FileFormat::Toml).required(false))
            .build()?;
        let file: LayoutFile = settings.try_deserialize()?;

        let mut table = Self::builtin();
        for entry in file.auditoriums {
            let layout = Layout::new(entry.sections, entry.premium_rows, entry.total_rows);
            if let Err(e) = layout.validate() {
                warn!("Ignoring layout {:?} from {}: {}", entry.layout, path, e);
                continue;
            }
            table.layouts.insert(entry.layout, layout);
        }
        info!("Loaded {} auditorium layouts", table.layouts.len());
        Ok(table)
    }

    pub fn get(&self, id: AuditoriumLayoutId) -> Option<&Layout> {
        self.layouts.get(&id)
    }

    /// Layout for an auditorium; unknown auditoriums get the default layout.
    pub fn resolve(&self, auditorium_id: u32) -> Layout {
        match AuditoriumLayoutId::from_auditorium_id(auditorium_id).and_then(|id| self.get(id)) {
            Some(layout) => layout.clone(),
            None => {
                warn!("No layout for auditorium {}, using the default layout", auditorium_id);
                Layout::default()
            }
        }
    }
}

impl Default for LayoutTable {
    fn default() -> Self {
        Self::builtin()
    }
}
