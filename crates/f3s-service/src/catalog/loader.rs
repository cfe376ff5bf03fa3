//! Loads the catalog from a data directory.
//!
//! Layout:
//!
//! ```text
//! <data_dir>/games.json
//! <data_dir>/items/<slug>/<kind>_dml_format.json
//! ```
//!
//! Every item read from a file gets the equipment type that file holds.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use f3s_core::{AppError, AppResult, ErrorKind};

use super::model::{CatalogItem, Game};

const GAMES_FILE: &str = "games.json";
const ITEMS_DIR: &str = "items";
const ITEM_FILE_SUFFIX: &str = "_dml_format";

/// Item file stems whose type name differs from the stem.
const TYPE_NAMES: [(&str, &str); 10] = [
    ("armors", "armor"),
    ("helmets", "helmet"),
    ("clubs", "club"),
    ("axes", "axe"),
    ("swords", "sword"),
    ("wands", "wand"),
    ("rods", "rod"),
    ("crossbows", "crossbow"),
    ("bows", "bow"),
    ("shields", "shield"),
];

/// Games and their items, held in memory.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub games: Vec<Game>,
    pub items: HashMap<String, Vec<CatalogItem>>,
}

impl Catalog {
    /// Reads the catalog under `data_dir`.
    ///
    /// A missing directory or `games.json` yields an empty catalog; a file
    /// that exists but does not parse is an error.
    pub async fn load(data_dir: impl AsRef<Path>) -> AppResult<Self> {
        let data_dir = data_dir.as_ref();

        let games_path = data_dir.join(GAMES_FILE);
        let games: Vec<Game> = match read_json(&games_path).await? {
            Some(games) => games,
            None => {
                warn!(path = %games_path.display(), "Game list not found, catalog is empty");
                Vec::new()
            }
        };

        let mut items = HashMap::new();
        for game in &games {
            let game_items = load_items(&data_dir.join(ITEMS_DIR).join(&game.slug)).await?;
            if !game_items.is_empty() {
                items.insert(game.slug.clone(), game_items);
            }
        }

        info!(
            games = games.len(),
            item_sets = items.len(),
            data_dir = %data_dir.display(),
            "Catalog loaded"
        );
        Ok(Self { games, items })
    }

    /// The game with `slug`.
    pub fn game(&self, slug: &str) -> Option<&Game> {
        self.games.iter().find(|g| g.slug == slug)
    }

    /// Items of the game with `slug`; empty when it has none.
    pub fn items_for(&self, slug: &str) -> &[CatalogItem] {
        self.items.get(slug).map(Vec::as_slice).unwrap_or_default()
    }
}

async fn load_items(dir: &Path) -> AppResult<Vec<CatalogItem>> {
    let mut entries = match tokio::fs::read_dir(dir).await {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e.into()),
    };

    let mut files: Vec<PathBuf> = Vec::new();
    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if path.extension().is_some_and(|ext| ext == "json") {
            files.push(path);
        }
    }
    files.sort();

    let mut items = Vec::new();
    for path in files {
        let item_type = type_for_file(&path);
        let file_items: Vec<CatalogItem> = read_json(&path).await?.unwrap_or_default();
        items.extend(file_items.into_iter().map(|mut item| {
            item.item_type = item_type.clone();
            item
        }));
    }
    Ok(items)
}

/// `armors_dml_format.json` holds `armor` items.
pub fn type_for_file(path: &Path) -> String {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default();
    let stem = stem.strip_suffix(ITEM_FILE_SUFFIX).unwrap_or(stem);

    TYPE_NAMES
        .iter()
        .find(|(file, _)| *file == stem)
        .map(|(_, name)| name.to_string())
        .unwrap_or_else(|| stem.to_string())
}

async fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> AppResult<Option<T>> {
    let contents = match tokio::fs::read_to_string(path).await {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    serde_json::from_str(&contents).map(Some).map_err(|e| {
        AppError::with_source(
            ErrorKind::Serialization,
            format!("Invalid catalog file {}: {e}", path.display()),
            e,
        )
    })
}
