//! Deal and history replay benchmarks.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rust_patience::games::klondike::KlondikeGame;
use rust_patience::{Point, TableConfig, TableController};

fn dealt(seed: u64) -> TableController {
    let mut controller = TableController::new(TableConfig::default().with_seed(seed));
    controller.start(&mut KlondikeGame::new()).unwrap();
    controller
}

fn bench_deal(c: &mut Criterion) {
    c.bench_function("klondike_deal", |b| {
        let mut seed = 0;
        b.iter(|| {
            seed += 1;
            black_box(dealt(seed))
        })
    });
}

fn bench_stock_cycle(c: &mut Criterion) {
    let stock = Point::new(40, 40);

    c.bench_function("stock_cycle_undo_redo", |b| {
        b.iter_batched(
            || dealt(7),
            |mut controller| {
                // Turn the whole stock, recycle it, then replay the history both ways
                for _ in 0..25 {
                    controller.press(stock).unwrap();
                    controller.release(stock).unwrap();
                }
                while controller.can_undo() {
                    controller.undo().unwrap();
                }
                while controller.can_redo() {
                    controller.redo().unwrap();
                }
                controller
            },
            criterion::BatchSize::SmallInput,
        )
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let controller = dealt(11);

    c.bench_function("table_snapshot", |b| {
        b.iter(|| black_box(controller.table().snapshot()))
    });
}

criterion_group!(benches, bench_deal, bench_stock_cycle, bench_snapshot);
criterion_main!(benches);
