//! Content domain: data-driven level descriptors loaded from RON.

mod data;
mod loader;
mod registry;
mod validation;


pub use data::{DataFile, LadderDef, LevelDef, PlatformDef, TILE_STRIDE};
pub use loader::{ContentLoadError, load_levels, parse_data_file};
pub use registry::ContentRegistry;
pub use validation::{ValidationError, validate_levels};

use bevy::prelude::*;
use std::path::Path;

use crate::level::WorldBounds;

const CONTENT_PATH: &str = "assets/data";

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ContentRegistry>()
            .init_resource::<WorldBounds>()
            .add_systems(Startup, load_content);
    }
}

/// Load level data into the registry, falling back to a built-in level when
/// the file is missing or fails validation.
pub(crate) fn load_content(mut registry: ResMut<ContentRegistry>, bounds: Res<WorldBounds>) {
    let levels = match load_levels(Path::new(CONTENT_PATH)) {
        Ok(levels) => levels,
        Err(e) => {
            error!("{}", e);
            warn!("Using built-in fallback level");
            vec![LevelDef::fallback()]
        }
    };

    let errors = validate_levels(&levels, &bounds);
    if errors.is_empty() {
        *registry = ContentRegistry::new(levels);
    } else {
        for e in &errors {
            error!("{}", e);
        }
        warn!(
            "{} level validation error(s), using built-in fallback level",
            errors.len()
        );
        *registry = ContentRegistry::new(vec![LevelDef::fallback()]);
    }

    info!("{}", registry.summary());
}
