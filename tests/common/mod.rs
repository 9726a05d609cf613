//! Shared helpers for driving a table through pointer events.
#![allow(dead_code)]

use rust_patience::core::{EngineResult, PileId, Point, TableConfig};
use rust_patience::games::klondike::{KlondikeGame, KlondikePiles};
use rust_patience::{Card, Dealer, Game, Table, TableController};

/// Klondike piles with a hand-arranged deal instead of a shuffle.
pub struct Rigged<F> {
    pub inner: KlondikeGame,
    pub deal: F,
}

impl<F> Game for Rigged<F>
where
    F: Fn(&KlondikePiles, &mut Dealer<'_>) -> EngineResult<()>,
{
    fn name(&self) -> &str {
        "rigged klondike"
    }

    fn start(&mut self, table: &mut Table) -> EngineResult<()> {
        self.inner.start(table)
    }

    fn deal_game(&self, dealer: &mut Dealer<'_>) -> EngineResult<()> {
        match self.inner.piles() {
            Some(piles) => (self.deal)(piles, dealer),
            None => Ok(()),
        }
    }
}

/// Start a Klondike table dealt by `deal`.
pub fn rigged<F>(deal: F) -> (TableController, KlondikePiles)
where
    F: Fn(&KlondikePiles, &mut Dealer<'_>) -> EngineResult<()>,
{
    let mut controller = TableController::new(TableConfig::default().with_seed(7));
    let mut game = Rigged {
        inner: KlondikeGame::new(),
        deal,
    };
    controller.start(&mut game).unwrap();
    let piles = *game.inner.piles().unwrap();
    (controller, piles)
}

/// Start a normally shuffled Klondike table.
pub fn klondike(seed: u64) -> (TableController, KlondikePiles) {
    let mut controller = TableController::new(TableConfig::default().with_seed(seed));
    let mut game = KlondikeGame::new();
    controller.start(&mut game).unwrap();
    let piles = *game.piles().unwrap();
    (controller, piles)
}

/// A point on the `depth`-th card from the top of `id` (the placeholder if
/// the pile is empty).
pub fn card_point(controller: &TableController, id: PileId, depth: usize) -> Point {
    let pile = controller.table().pile(id).unwrap();
    let index = pile.size().saturating_sub(depth.max(1));
    pile.card_position(index).offset(30, 8)
}

pub fn top_point(controller: &TableController, id: PileId) -> Point {
    card_point(controller, id, 1)
}

/// Press and release on the top card of `id` without moving.
pub fn click(controller: &mut TableController, id: PileId) {
    let point = top_point(controller, id);
    controller.press(point).unwrap();
    controller.release(point).unwrap();
}

/// Drag the top `depth` cards of `from` and release them over `to`.
pub fn drag(controller: &mut TableController, from: PileId, depth: usize, to: PileId) {
    let start = card_point(controller, from, depth);
    let end = top_point(controller, to);
    controller.press(start).unwrap();
    controller.drag(start.offset(2, 2)).unwrap();
    controller.drag(end).unwrap();
    controller.release(end).unwrap();
}

pub fn cards(controller: &TableController, id: PileId) -> Vec<Card> {
    controller
        .table()
        .pile(id)
        .unwrap()
        .stack()
        .iter()
        .copied()
        .collect()
}

pub fn size(controller: &TableController, id: PileId) -> usize {
    controller.table().pile(id).unwrap().size()
}
