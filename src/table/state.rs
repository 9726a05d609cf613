//! Table state: piles, history and the deal RNG.
//!
//! ## Table
//!
//! Everything that persists between input events:
//! - The pile arena (owning every card)
//! - Undo/redo history
//! - The seeded RNG used for the one shuffle at deal time
//!
//! ## TableSnapshot
//!
//! A cheap, serializable copy of every pile's contents for renderers and
//! tests. Uses `im` vectors, so taking one is O(piles).

use std::rc::Rc;

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::cards::Card;
use crate::core::{EngineError, EngineResult, GameRng, PileConfig, PileId, Point, TableConfig};
use crate::moves::{Dealer, History, Mover, Notifications, Transaction};
use crate::piles::{Pile, PileSet};
use crate::rules::{Game, PileStrategy};

/// The piles of one game plus their history.
#[derive(Debug)]
pub struct Table {
    config: TableConfig,
    piles: PileSet,
    history: History,
    rng: GameRng,
    dealt: bool,
}

impl Table {
    /// Create an empty table. The RNG is seeded from `config.seed` if set.
    #[must_use]
    pub fn new(config: TableConfig) -> Self {
        let rng = GameRng::from_seed_or_entropy(config.seed);
        Self {
            config,
            piles: PileSet::new(),
            history: History::new(),
            rng,
            dealt: false,
        }
    }

    #[must_use]
    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    #[must_use]
    pub fn piles(&self) -> &PileSet {
        &self.piles
    }

    pub(crate) fn piles_mut(&mut self) -> &mut PileSet {
        &mut self.piles
    }

    pub fn pile(&self, id: PileId) -> EngineResult<&Pile> {
        self.piles.get(id)
    }

    /// Add a pile in front of those already on the table.
    ///
    /// Panics if the name is taken.
    pub fn add_pile(&mut self, config: PileConfig, strategy: Rc<dyn PileStrategy>) -> PileId {
        self.piles.add(config, &self.config, strategy)
    }

    /// Move a pile on the surface.
    pub fn set_pile_position(&mut self, id: PileId, position: Point) -> EngineResult<()> {
        self.piles.get_mut(id)?.set_position(position);
        Ok(())
    }

    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Whether the initial deal has happened.
    #[must_use]
    pub fn is_dealt(&self) -> bool {
        self.dealt
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Build `game`'s piles and deal it.
    ///
    /// The deal is an initial commit: history is cleared afterwards instead
    /// of recording the deal, so it can never be undone. If the game fails
    /// to lay out or deal, the table is emptied and reseeded, so `start`
    /// can be retried and deals as if it were the first attempt.
    pub fn start<G: Game + ?Sized>(&mut self, game: &mut G) -> EngineResult<()> {
        if self.dealt {
            return Err(EngineError::AlreadyDealt);
        }
        let transaction = match self.lay_out(game) {
            Ok(transaction) => transaction,
            Err(err) => {
                warn!(game = game.name(), error = %err, "deal failed, table reset");
                self.piles = PileSet::new();
                self.rng = GameRng::new(self.rng.seed());
                self.history.clear();
                return Err(err);
            }
        };

        self.history.clear();
        self.dealt = true;
        info!(
            game = game.name(),
            seed = self.rng.seed(),
            piles = self.piles.len(),
            cards = self.piles.total_cards(),
            moves = transaction.len(),
            "initial deal"
        );
        Ok(())
    }

    fn lay_out<G: Game + ?Sized>(&mut self, game: &mut G) -> EngineResult<Transaction> {
        game.start(self)?;
        let mut dealer = Dealer::new(&mut self.piles, &mut self.rng);
        game.deal_game(&mut dealer)?;
        let (transaction, _) = dealer.into_mover().finish();
        Ok(transaction)
    }

    /// Run one user-level action.
    ///
    /// Everything `action` does through the mover becomes a single undo
    /// step (nothing is committed if it moved no cards). If `action` fails,
    /// what it already did is reverted before the error is returned.
    pub fn transact<F>(&mut self, action: F) -> EngineResult<Notifications>
    where
        F: FnOnce(&mut Mover<'_>) -> EngineResult<()>,
    {
        let mut mover = Mover::new(&mut self.piles);
        match action(&mut mover) {
            Ok(()) => {
                let (transaction, notifications) = mover.finish();
                self.history.commit(transaction);
                Ok(notifications)
            }
            Err(err) => {
                mover.rollback()?;
                Err(err)
            }
        }
    }

    /// Revert the last committed action.
    pub fn undo(&mut self) -> EngineResult<()> {
        self.history.undo(&mut self.piles)
    }

    /// Re-apply the last undone action.
    pub fn redo(&mut self) -> EngineResult<()> {
        self.history.redo(&mut self.piles)
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.piles.total_cards()
    }

    /// Copy out every pile's contents.
    #[must_use]
    pub fn snapshot(&self) -> TableSnapshot {
        TableSnapshot {
            piles: self
                .piles
                .iter()
                .map(|pile| PileSnapshot {
                    id: pile.id(),
                    name: pile.name().to_string(),
                    cards: pile.stack().cards().clone(),
                })
                .collect(),
        }
    }
}

/// Contents of one pile at a point in time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PileSnapshot {
    pub id: PileId,
    pub name: String,
    /// Bottom to top.
    pub cards: Vector<Card>,
}

/// Contents of every pile, back to front.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSnapshot {
    piles: Vec<PileSnapshot>,
}

impl TableSnapshot {
    pub fn iter(&self) -> impl Iterator<Item = &PileSnapshot> + '_ {
        self.piles.iter()
    }

    #[must_use]
    pub fn pile(&self, id: PileId) -> Option<&PileSnapshot> {
        self.piles.iter().find(|p| p.id == id)
    }

    #[must_use]
    pub fn by_name(&self, name: &str) -> Option<&PileSnapshot> {
        self.piles.iter().find(|p| p.name == name)
    }

    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.piles.iter().map(|p| p.cards.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Suit;
    use crate::core::PileTag;
    use crate::rules::DefaultStrategy;

    struct TwoPiles {
        piles: Option<(PileId, PileId)>,
    }

    impl Game for TwoPiles {
        fn name(&self) -> &str {
            "two piles"
        }

        fn start(&mut self, table: &mut Table) -> EngineResult<()> {
            let a = table.add_pile(PileConfig::new("a", PileTag::new(0)), Rc::new(DefaultStrategy));
            let b = table.add_pile(PileConfig::new("b", PileTag::new(0)).at(100, 0), Rc::new(DefaultStrategy));
            self.piles = Some((a, b));
            Ok(())
        }

        fn deal_game(&self, dealer: &mut Dealer<'_>) -> EngineResult<()> {
            let Some((a, b)) = self.piles else {
                return Ok(());
            };
            dealer.add_suit(Suit::Spades, a)?;
            dealer.shuffle(a)?;
            dealer.move_cards(3, a, b)
        }
    }

    fn dealt_table() -> (Table, PileId, PileId) {
        let mut table = Table::new(TableConfig::default().with_seed(11));
        let mut game = TwoPiles { piles: None };
        table.start(&mut game).unwrap();
        let (a, b) = game.piles.unwrap();
        (table, a, b)
    }

    #[test]
    fn test_deal_is_not_undoable() {
        let (table, a, b) = dealt_table();

        assert!(table.is_dealt());
        assert_eq!(table.pile(a).unwrap().size(), 10);
        assert_eq!(table.pile(b).unwrap().size(), 3);
        assert!(!table.can_undo());
        assert!(!table.can_redo());
    }

    #[test]
    fn test_start_twice_fails() {
        let (mut table, _, _) = dealt_table();
        let mut game = TwoPiles { piles: None };

        assert_eq!(table.start(&mut game), Err(EngineError::AlreadyDealt));
        assert_eq!(table.piles().len(), 2);
    }

    /// Deals a suit and a split, failing after the suit while `fail` is set.
    struct Flaky {
        inner: TwoPiles,
        fail: std::cell::Cell<bool>,
    }

    impl Game for Flaky {
        fn name(&self) -> &str {
            "flaky"
        }

        fn start(&mut self, table: &mut Table) -> EngineResult<()> {
            self.inner.start(table)
        }

        fn deal_game(&self, dealer: &mut Dealer<'_>) -> EngineResult<()> {
            let Some((a, b)) = self.inner.piles else {
                return Ok(());
            };
            if self.fail.get() {
                dealer.add_suit(Suit::Hearts, a)?;
                dealer.shuffle(a)?;
                return dealer.move_cards(20, a, b);
            }
            self.inner.deal_game(dealer)
        }
    }

    #[test]
    fn test_failed_start_can_be_retried() {
        let mut table = Table::new(TableConfig::default().with_seed(11));
        let mut game = Flaky {
            inner: TwoPiles { piles: None },
            fail: std::cell::Cell::new(true),
        };

        assert_eq!(table.start(&mut game), Err(EngineError::EmptyStack));
        assert!(!table.is_dealt());
        assert!(table.piles().is_empty());
        assert!(!table.can_undo());

        game.fail.set(false);
        table.start(&mut game).unwrap();

        let (fresh, _, _) = dealt_table();
        assert!(table.is_dealt());
        assert_eq!(table.snapshot(), fresh.snapshot());
    }

    #[test]
    fn test_moved_pile_is_hit_at_new_position() {
        let mut table = Table::new(TableConfig::default());
        let id = table.add_pile(
            PileConfig::new("fan", PileTag::new(0)).vertical(),
            Rc::new(DefaultStrategy),
        );
        table.piles_mut().get_mut(id).unwrap().stack_mut().add_suit(Suit::Clubs);

        table.set_pile_position(id, Point::new(200, 300)).unwrap();

        let pile = table.pile(id).unwrap();
        assert_eq!(pile.position(), Point::new(200, 300));
        assert_eq!(pile.card_position(2), Point::new(200, 336));
        assert_eq!(table.piles().find_at(Point::new(10, 10)), None);
        assert_eq!(table.piles().find_at(Point::new(210, 310)), Some(id));
        assert_eq!(pile.identify_selection(Point::new(230, 300 + 18 * 3 + 5)), Some(3));
        assert_eq!(pile.count_selected(Point::new(230, 300 + 18 * 3 + 5)), 10);

        assert_eq!(
            table.set_pile_position(PileId::new(9), Point::new(0, 0)),
            Err(EngineError::UnknownPile(PileId::new(9)))
        );
    }

    #[test]
    fn test_transact_commits_one_step() {
        let (mut table, a, b) = dealt_table();

        table
            .transact(|mover| {
                mover.move_cards(2, a, b)?;
                mover.flip_top(b)
            })
            .unwrap();

        assert_eq!(table.history().undo_len(), 1);
        assert_eq!(table.history().last().unwrap().len(), 2);
    }

    #[test]
    fn test_transact_empty_commits_nothing() {
        let (mut table, a, b) = dealt_table();

        table.transact(|mover| mover.move_cards(0, a, b)).unwrap();

        assert!(!table.can_undo());
    }

    #[test]
    fn test_failed_transact_rolls_back() {
        let (mut table, a, b) = dealt_table();
        let before = table.snapshot();

        let result = table.transact(|mover| {
            mover.flip_move(2, a, b)?;
            mover.move_cards(50, a, b)
        });

        assert_eq!(result, Err(EngineError::EmptyStack));
        assert_eq!(table.snapshot(), before);
        assert!(!table.can_undo());
    }

    #[test]
    fn test_snapshot_serialization() {
        let (table, _, _) = dealt_table();
        let snapshot = table.snapshot();

        let json = serde_json::to_string(&snapshot).unwrap();
        let deserialized: TableSnapshot = serde_json::from_str(&json).unwrap();

        assert_eq!(snapshot, deserialized);
        assert_eq!(deserialized.total_cards(), 13);
        assert_eq!(deserialized.by_name("b").unwrap().cards.len(), 3);
    }
}
