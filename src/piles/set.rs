//! The pile arena owned by a table.
//!
//! Piles are stored in insertion order, which is also drawing order
//! (back to front). Hit-testing walks the arena in reverse so the
//! front-most pile wins.

use std::rc::Rc;

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use super::pile::Pile;
use crate::core::{EngineError, EngineResult, PileConfig, PileId, PileTag, Point, TableConfig};
use crate::rules::PileStrategy;

/// All piles on a table, indexed by `PileId`.
#[derive(Debug, Default)]
pub struct PileSet {
    piles: Vec<Pile>,
    names: FxHashMap<String, PileId>,
}

impl PileSet {
    /// Create an empty pile set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a pile on top (in drawing order) of the existing ones.
    ///
    /// Panics if a pile with the same name already exists.
    pub fn add(
        &mut self,
        config: PileConfig,
        table: &TableConfig,
        strategy: Rc<dyn PileStrategy>,
    ) -> PileId {
        if self.names.contains_key(&config.name) {
            panic!("Pile {:?} already exists on the table", config.name);
        }

        let id = PileId::new(self.piles.len() as u16);
        self.names.insert(config.name.clone(), id);
        self.piles.push(Pile::new(id, config, table, strategy));
        id
    }

    /// Look up a pile.
    pub fn get(&self, id: PileId) -> EngineResult<&Pile> {
        self.piles.get(id.index()).ok_or(EngineError::UnknownPile(id))
    }

    pub(crate) fn get_mut(&mut self, id: PileId) -> EngineResult<&mut Pile> {
        self.piles.get_mut(id.index()).ok_or(EngineError::UnknownPile(id))
    }

    /// Look up a pile by name.
    #[must_use]
    pub fn by_name(&self, name: &str) -> Option<&Pile> {
        self.names.get(name).and_then(|&id| self.piles.get(id.index()))
    }

    /// Iterate piles back to front.
    pub fn iter(&self) -> impl Iterator<Item = &Pile> + '_ {
        self.piles.iter()
    }

    /// Iterate piles with the given role, back to front.
    pub fn tagged(&self, tag: PileTag) -> impl Iterator<Item = &Pile> + '_ {
        self.piles.iter().filter(move |p| p.tag() == tag)
    }

    /// IDs of the piles with the given role, back to front.
    ///
    /// Owned so callers can go on to move cards between them.
    #[must_use]
    pub fn tagged_ids(&self, tag: PileTag) -> SmallVec<[PileId; 8]> {
        self.tagged(tag).map(Pile::id).collect()
    }

    /// The front-most pile under `point`.
    #[must_use]
    pub fn find_at(&self, point: Point) -> Option<PileId> {
        self.piles
            .iter()
            .rev()
            .find(|p| p.under_mouse(point))
            .map(Pile::id)
    }

    /// Number of piles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.piles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.piles.is_empty()
    }

    /// Total cards across all piles.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.piles.iter().map(Pile::size).sum()
    }
}
