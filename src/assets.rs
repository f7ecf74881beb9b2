//! Table-driven resolution of model assets on disk.
//!
//! Every modelled object is described by one [`AssetSpec`] row. A single
//! [`AssetResolver`] walks a row's search paths and extensions in order and
//! returns the first file that exists.

use std::path::{Path, PathBuf};

/// Where to look for one object's model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssetSpec {
    /// Object the asset belongs to.
    pub object_id: &'static str,
    /// File name without extension. Matches `GameObject::model`.
    pub asset_name: &'static str,
    /// Directories relative to the asset root, searched in order.
    pub search_paths: &'static [&'static str],
    /// Extensions tried in order for each directory.
    pub extensions: &'static [&'static str],
}

const MODEL_EXTENSIONS: &[&str] = &["usdz", "scn", "obj"];
const BUILDINGS: &[&str] = &["models/buildings", "models", "."];
const CASTLE: &[&str] = &["models/castle", "models/buildings", "models", "."];
const UNITS: &[&str] = &["models/units", "models", "."];

const fn building(object_id: &'static str, asset_name: &'static str) -> AssetSpec {
    AssetSpec {
        object_id,
        asset_name,
        search_paths: BUILDINGS,
        extensions: MODEL_EXTENSIONS,
    }
}

const fn castle(object_id: &'static str, asset_name: &'static str) -> AssetSpec {
    AssetSpec {
        object_id,
        asset_name,
        search_paths: CASTLE,
        extensions: MODEL_EXTENSIONS,
    }
}

const fn unit(object_id: &'static str, asset_name: &'static str) -> AssetSpec {
    AssetSpec {
        object_id,
        asset_name,
        search_paths: UNITS,
        extensions: MODEL_EXTENSIONS,
    }
}

/// Asset rows for every default object that has a model.
pub const DEFAULT_ASSETS: &[AssetSpec] = &[
    building("object_stockpile", "stockpile"),
    building("object_granary", "granary"),
    building("object_armory", "armory"),
    building("object_quarry", "quarry"),
    building("object_woodcutter", "woodcutter"),
    building("object_iron_mine", "iron_mine"),
    building("object_bakery", "bakery"),
    building("object_brewery", "brewery"),
    building("object_mill", "mill"),
    building("object_wheat_farm", "wheat_farm"),
    building("object_apple_orchard", "apple_orchard"),
    building("object_barracks", "barracks"),
    building("object_chapel", "chapel"),
    building("object_church", "church"),
    building("object_cathedral", "cathedral"),
    castle("object_castle", "castle"),
    castle("object_wall_wood", "wall_wood"),
    castle("object_wall_stone", "wall_stone"),
    castle("object_wall_fortified", "wall_fortified"),
    castle("object_tower_lookout", "tower_lookout"),
    castle("object_tower_defense", "tower_defense"),
    castle("object_tower_great", "tower_great"),
    castle("object_gatehouse", "gatehouse"),
    unit("object_archer", "archer"),
    unit("object_spearman", "spearman"),
    unit("object_knight", "knight"),
    unit("object_peasant", "peasant"),
    building("object_smithy", "smithy"),
    building("object_house", "house"),
    building("object_well", "well"),
    building("object_market", "market"),
];

/// Asset row for an object, if it has one.
#[must_use]
pub fn spec_for(object_id: &str) -> Option<&'static AssetSpec> {
    DEFAULT_ASSETS.iter().find(|spec| spec.object_id == object_id)
}

/// Resolves asset rows against a root directory.
#[derive(Debug, Clone)]
pub struct AssetResolver {
    root: PathBuf,
}

impl AssetResolver {
    /// Create a resolver rooted at `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The asset root.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Candidate paths for a row, in search order.
    pub fn candidates<'a>(&'a self, spec: &'a AssetSpec) -> impl Iterator<Item = PathBuf> + 'a {
        spec.search_paths.iter().flat_map(move |dir| {
            spec.extensions.iter().map(move |ext| {
                self.root
                    .join(dir)
                    .join(format!("{}.{ext}", spec.asset_name))
            })
        })
    }

    /// First existing file for a row.
    #[must_use]
    pub fn resolve(&self, spec: &AssetSpec) -> Option<PathBuf> {
        let found = self.candidates(spec).find(|path| path.is_file());
        if found.is_none() {
            tracing::debug!(
                id = spec.object_id,
                asset = spec.asset_name,
                root = %self.root.display(),
                "model asset not found"
            );
        }
        found
    }

    /// First existing model file for an object id.
    #[must_use]
    pub fn resolve_object(&self, object_id: &str) -> Option<PathBuf> {
        spec_for(object_id).and_then(|spec| self.resolve(spec))
    }
}
