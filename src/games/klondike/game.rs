//! Klondike layout and deal.

use std::rc::Rc;

use super::strategies::{FoundationStrategy, StockStrategy, TableauStrategy, WasteStrategy};
use super::{FOUNDATION, STOCK, TABLEAU, WASTE};
use crate::core::{EngineResult, PileConfig, PileId};
use crate::moves::Dealer;
use crate::rules::{Game, PileStrategy};
use crate::table::Table;

/// Number of tableau piles.
pub const TABLEAU_COUNT: usize = 7;

/// Number of foundation piles.
pub const FOUNDATION_COUNT: usize = 4;

/// Pile IDs of a Klondike table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KlondikePiles {
    pub stock: PileId,
    pub waste: PileId,
    pub tableaus: [PileId; TABLEAU_COUNT],
    pub foundations: [PileId; FOUNDATION_COUNT],
}

/// Klondike, turning one card at a time with unlimited redeals.
#[derive(Clone, Debug, Default)]
pub struct KlondikeGame {
    piles: Option<KlondikePiles>,
}

impl KlondikeGame {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pile IDs, once `start` has built the table.
    #[must_use]
    pub fn piles(&self) -> Option<&KlondikePiles> {
        self.piles.as_ref()
    }
}

impl Game for KlondikeGame {
    fn name(&self) -> &str {
        "Klondike"
    }

    /// Lay out the piles back to front: waste, stock, tableaus, foundations.
    fn start(&mut self, table: &mut Table) -> EngineResult<()> {
        let tableau: Rc<dyn PileStrategy> = Rc::new(TableauStrategy);
        let foundation: Rc<dyn PileStrategy> = Rc::new(FoundationStrategy);

        let waste = table.add_pile(
            PileConfig::new("waste", WASTE).at(110, 10).squared(),
            Rc::new(WasteStrategy),
        );
        let stock = table.add_pile(
            PileConfig::new("stock", STOCK).at(10, 10).squared(),
            Rc::new(StockStrategy),
        );
        let tableaus = std::array::from_fn(|i| {
            let config = PileConfig::new(format!("tableau{}", i + 1), TABLEAU)
                .at(10 + 100 * i as i32, 160)
                .vertical();
            table.add_pile(config, Rc::clone(&tableau))
        });
        let foundations = std::array::from_fn(|i| {
            let config = PileConfig::new(format!("foundation{}", i + 1), FOUNDATION)
                .at(310 + 100 * i as i32, 10)
                .squared();
            table.add_pile(config, Rc::clone(&foundation))
        });

        self.piles = Some(KlondikePiles {
            stock,
            waste,
            tableaus,
            foundations,
        });
        Ok(())
    }

    /// Shuffle a deck into the stock, then deal tableau `i` `i + 1` cards
    /// with the top one turned up.
    fn deal_game(&self, dealer: &mut Dealer<'_>) -> EngineResult<()> {
        let Some(piles) = &self.piles else {
            return Ok(());
        };

        dealer.add_deck(piles.stock)?;
        dealer.shuffle(piles.stock)?;
        for (i, &tableau) in piles.tableaus.iter().enumerate() {
            dealer.move_cards(i + 1, piles.stock, tableau)?;
            dealer.flip_top(tableau)?;
        }
        Ok(())
    }
}
