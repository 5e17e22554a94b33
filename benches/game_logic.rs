use criterion::{black_box, criterion_group, criterion_main, Criterion};

use tui_snake::core::{ScriptedPlacement, Session};
use tui_snake::term::Screen;
use tui_snake::types::{Cell, Color, Difficulty, FoodKind, InputEvent, Point};

fn bench_session() -> Session {
    let session = Session::new(
        Difficulty::Normal,
        Box::new(ScriptedPlacement::new([(
            Point::new(50, 20),
            FoodKind::Normal,
        )])),
        None,
    );
    session.start();
    session
}

fn bench_draw_pass(c: &mut Criterion) {
    let session = bench_session();
    let mut screen = Screen::new();

    c.bench_function("draw_pass", |b| {
        b.iter(|| {
            session.registry().draw_entities(&session, &mut screen);
            black_box(screen.composite())
        })
    });
}

fn bench_event_dispatch(c: &mut Criterion) {
    let session = bench_session();

    c.bench_function("event_dispatch", |b| {
        b.iter(|| {
            session
                .registry()
                .dispatch_event(&session, black_box(InputEvent::ArrowUp));
            session
                .registry()
                .dispatch_event(&session, black_box(InputEvent::ArrowRight));
        })
    });
}

fn bench_composite_full_grid(c: &mut Criterion) {
    let mut screen = Screen::new();

    c.bench_function("composite_full_grid", |b| {
        b.iter(|| {
            for y in 0..25 {
                for x in 0..70 {
                    screen.render_cell(x, y, Cell::bg(Color::White));
                }
            }
            black_box(screen.composite())
        })
    });
}

criterion_group!(
    benches,
    bench_draw_pass,
    bench_event_dispatch,
    bench_composite_full_grid
);
criterion_main!(benches);
