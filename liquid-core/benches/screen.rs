//! Screen benchmarks

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use liquid_core::{Screen, TextDisplay, TextLine, MAX_LINES};

fn full_menu() -> Vec<TextLine> {
    (0..MAX_LINES)
        .map(|i| {
            let mut line = TextLine::new(1, i as u8, format!("Menu entry {}", i));
            line.attach_function(1, || {}).unwrap();
            line
        })
        .collect()
}

fn bench_screen_print(c: &mut Criterion) {
    let mut group = c.benchmark_group("screen");
    let lines = full_menu();

    // Scroll through a full screen on a four-row display
    group.bench_function("print_scrolling", |b| {
        let mut screen = Screen::new();
        for line in &lines {
            screen.add_line(line).unwrap();
        }
        screen.set_max_line_display(4);
        let mut display = TextDisplay::new(20, 4);

        b.iter(|| {
            screen.switch_focus(true);
            screen.print(&mut display);
            black_box(&display);
        })
    });

    group.finish();
}

fn bench_screen_switch_focus(c: &mut Criterion) {
    let mut group = c.benchmark_group("screen");

    // Worst case: nothing is focusable, every move walks the whole lap
    let lines: Vec<TextLine> = (0..MAX_LINES).map(|_| TextLine::new(0, 0, "-")).collect();

    group.bench_function("switch_focus_unfocusable", |b| {
        let mut screen = Screen::new();
        for line in &lines {
            screen.add_line(line).unwrap();
        }

        b.iter(|| {
            screen.switch_focus(black_box(true));
            black_box(screen.focus_index())
        })
    });

    group.finish();
}

criterion_group!(benches, bench_screen_print, bench_screen_switch_focus);

criterion_main!(benches);
