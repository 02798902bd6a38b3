use crate::core::filter::{blend_matches_search, SpiceFilter};
use crate::domain::composition::resolve_all_spices;
use crate::domain::model::{Blend, BlendId, BlendWithSpices, NewBlend, Spice, SpiceId};
use crate::domain::ports::{BlendStore, CatalogSource};
use crate::utils::error::{CatalogError, Result};
use crate::utils::validation::validate_new_blend;
use std::collections::HashSet;

/// Immutable view of both entity collections, with remote and locally
/// created blends already merged.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub spices: Vec<Spice>,
    pub blends: Vec<Blend>,
}

/// Application service over the catalog ports. Queries run against a
/// [`Snapshot`]; creation writes through to the blend store.
pub struct Catalog<S: CatalogSource, B: BlendStore> {
    source: S,
    store: B,
}

impl<S: CatalogSource, B: BlendStore> Catalog<S, B> {
    pub fn new(source: S, store: B) -> Self {
        Self { source, store }
    }

    /// Fetches both collections and merges remote blends with locally
    /// created ones. Merge contract: dedup by id, first occurrence wins,
    /// remote list before local list.
    pub async fn snapshot(&self) -> Result<Snapshot> {
        let spices = self.source.fetch_spices().await?;
        let remote_blends = self.source.fetch_blends().await?;
        let local_blends = self.store.load()?;

        tracing::debug!(
            "snapshot: {} spices, {} remote blends, {} local blends",
            spices.len(),
            remote_blends.len(),
            local_blends.len()
        );

        let mut seen: HashSet<BlendId> = HashSet::new();
        let mut blends = Vec::with_capacity(remote_blends.len() + local_blends.len());
        for blend in remote_blends.into_iter().chain(local_blends) {
            if seen.insert(blend.id) {
                blends.push(blend);
            }
        }

        Ok(Snapshot { spices, blends })
    }

    pub fn spices<'a>(&self, snapshot: &'a Snapshot, filter: &SpiceFilter) -> Vec<&'a Spice> {
        snapshot.spices.iter().filter(|s| filter.matches(s)).collect()
    }

    pub fn blends<'a>(&self, snapshot: &'a Snapshot, search: Option<&str>) -> Vec<&'a Blend> {
        snapshot
            .blends
            .iter()
            .filter(|b| search.map_or(true, |s| blend_matches_search(b, s)))
            .collect()
    }

    pub fn spice<'a>(&self, snapshot: &'a Snapshot, id: SpiceId) -> Result<&'a Spice> {
        snapshot
            .spices
            .iter()
            .find(|s| s.id == id)
            .ok_or(CatalogError::NotFound { kind: "spice", id })
    }

    pub fn blend<'a>(&self, snapshot: &'a Snapshot, id: BlendId) -> Result<&'a Blend> {
        snapshot
            .blends
            .iter()
            .find(|b| b.id == id)
            .ok_or(CatalogError::NotFound { kind: "blend", id })
    }

    /// Blend detail view: the blend plus its resolved spice closure.
    pub fn blend_with_spices(&self, snapshot: &Snapshot, id: BlendId) -> Result<BlendWithSpices> {
        let blend = self.blend(snapshot, id)?;
        let all_spices = resolve_all_spices(blend, &snapshot.blends, &snapshot.spices);
        Ok(BlendWithSpices {
            blend: blend.clone(),
            all_spices,
        })
    }

    /// Validates the payload, assigns the next id over the merged universe,
    /// and appends the blend to the local store.
    pub async fn create_blend(&self, new_blend: NewBlend) -> Result<Blend> {
        validate_new_blend(&new_blend)?;

        let snapshot = self.snapshot().await?;
        let id = snapshot.blends.iter().map(|b| b.id).max().map_or(1, |max| max + 1);

        let blend = Blend {
            id,
            name: new_blend.name,
            description: new_blend.description,
            spices: new_blend.spices,
            blends: new_blend.blends,
        };

        self.store.append(blend.clone())?;
        tracing::info!("created blend '{}' with id {}", blend.name, blend.id);
        Ok(blend)
    }

    /// Drops every locally created blend.
    pub fn reset_blends(&self) -> Result<()> {
        self.store.reset()
    }
}
