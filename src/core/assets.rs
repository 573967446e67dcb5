//! Core domain: tolerant asset loading.
//!
//! Images and sounds are optional decoration. A failed load is reported once
//! with `warn!` and the screen keeps working without it.

use bevy::asset::{LoadState, UntypedHandle};
use bevy::prelude::*;

/// Handles whose load outcome has not been observed yet.
#[derive(Resource, Debug, Default)]
pub struct AssetWatchlist {
    pending: Vec<(String, UntypedHandle)>,
}

impl AssetWatchlist {
    pub fn watch(&mut self, path: &str, handle: UntypedHandle) {
        if self.pending.iter().any(|(watched, _)| watched == path) {
            return;
        }
        self.pending.push((path.to_string(), handle));
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

/// Load an image and keep an eye on whether it actually arrives.
pub fn load_image(
    asset_server: &AssetServer,
    watchlist: &mut AssetWatchlist,
    path: &str,
) -> Handle<Image> {
    let handle: Handle<Image> = asset_server.load(path.to_string());
    watchlist.watch(path, handle.clone().untyped());
    handle
}

pub(crate) fn report_failed_assets(
    asset_server: Res<AssetServer>,
    mut watchlist: ResMut<AssetWatchlist>,
) {
    if watchlist.is_empty() {
        return;
    }

    watchlist
        .pending
        .retain(|(path, handle)| match asset_server.load_state(handle.id()) {
            LoadState::Loaded => false,
            LoadState::Failed(error) => {
                warn!("Asset '{}' failed to load, continuing without it: {}", path, error);
                false
            }
            _ => true,
        });
}
