//! Screen behaviour tests
//!
//! These tests drive a screen of text lines onto an in-memory display and
//! compare what ends up on the display, plus property tests for focus
//! navigation and the scrolling window.

use std::cell::RefCell;
use std::rc::Rc;

use liquid_core::{Error, Line, Position, Screen, TextDisplay, TextLine, MAX_LINES};
use proptest::prelude::*;

/// Helper to build a menu of focusable lines, one per row
fn menu(labels: &[&str]) -> Vec<TextLine> {
    labels
        .iter()
        .enumerate()
        .map(|(row, label)| {
            let mut line = TextLine::new(0, row as u8, *label);
            line.attach_function(1, || {}).unwrap();
            line
        })
        .collect()
}

/// Helper to render a screen the way a menu would: clear, then print
fn render(screen: &Screen<'_>, display: &mut TextDisplay) -> String {
    use liquid_core::DisplayTarget;

    display.clear();
    if !screen.is_hidden() {
        screen.print(display);
    }
    display.to_text()
}

// ============================================================================
// Rendering
// ============================================================================

#[test]
fn test_two_row_display_scrolls_with_focus() {
    let lines = menu(&["Volume", "Bass", "Treble", "Balance", "Back"]);
    let mut screen = Screen::new();
    for line in &lines {
        screen.add_line(line).unwrap();
    }
    screen.set_max_line_display(2);
    let mut display = TextDisplay::new(16, 2);

    screen.switch_focus(true);
    assert_eq!(render(&screen, &mut display), "Volume<\nBass");

    screen.switch_focus(true);
    assert_eq!(render(&screen, &mut display), "Volume\nBass<");

    screen.switch_focus(true);
    assert_eq!(render(&screen, &mut display), "Bass\nTreble<");

    screen.switch_focus(true);
    screen.switch_focus(true);
    assert_eq!(render(&screen, &mut display), "Balance\nBack<");

    // Moving back keeps the focused line on the bottom row
    screen.switch_focus(false);
    assert_eq!(render(&screen, &mut display), "Treble\nBalance<");
}

#[test]
fn test_full_screen_renders_in_order() {
    let lines = menu(&["One", "Two", "Three"]);
    let refs: Vec<&dyn Line> = lines.iter().map(|l| l as &dyn Line).collect();
    let mut screen = Screen::with_lines(&refs);
    screen.set_max_line_display(0);
    let mut display = TextDisplay::new(16, 4);

    assert_eq!(render(&screen, &mut display), "One\nTwo\nThree\n");
    // Rows were never rewritten
    assert_eq!(lines[2].row(), 2);
}

#[test]
fn test_hidden_screen_is_skipped_by_caller() {
    let lines = menu(&["Status"]);
    let mut screen = Screen::with_lines(&[&lines[0]]);
    let mut display = TextDisplay::new(16, 1);

    screen.hide(true);
    assert_eq!(render(&screen, &mut display), "");
    screen.hide(false);
    assert_eq!(render(&screen, &mut display), "Status");
}

#[test]
fn test_focus_position_left_for_whole_screen() {
    let mut lines = vec![TextLine::new(1, 0, "A"), TextLine::new(1, 1, "B")];
    for line in &mut lines {
        line.attach_function(1, || {}).unwrap();
    }
    let mut screen = Screen::with_lines(&[&lines[0], &lines[1]]);
    screen.set_focus_position(Position::Left).unwrap();
    screen.switch_focus(true);

    let mut display = TextDisplay::new(8, 2);
    assert_eq!(render(&screen, &mut display), ">A\n B");
    assert_eq!(
        screen.set_focus_position(Position::Custom),
        Err(Error::InvalidFocusPosition)
    );
    assert_eq!(lines[0].focus_position(), Position::Left);
}

// ============================================================================
// Capacity and functions
// ============================================================================

#[test]
fn test_capacity_keeps_existing_lines() {
    let labels: Vec<String> = (0..MAX_LINES + 3).map(|i| format!("L{}", i)).collect();
    let lines: Vec<TextLine> = labels
        .iter()
        .map(|label| TextLine::new(0, 0, label.as_str()))
        .collect();

    let mut screen = Screen::new();
    for (i, line) in lines.iter().enumerate() {
        let result = screen.add_line(line);
        if i < MAX_LINES {
            assert!(result.is_ok());
            assert_eq!(screen.line_count(), i + 1);
        } else {
            assert!(matches!(result, Err(Error::CapacityExceeded { .. })));
            assert_eq!(screen.line_count(), MAX_LINES);
        }
    }

    screen.set_max_line_display(0);
    let mut display = TextDisplay::new(4, 1);
    screen.print(&mut display);
    // Every registered line drew on row 0; the last one drawn wins
    assert_eq!(display.to_text(), format!("L{}", MAX_LINES - 1));
}

#[test]
fn test_call_function_reaches_focused_line() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut lines = vec![TextLine::new(0, 0, "Up"), TextLine::new(0, 1, "Down")];
    for (i, line) in lines.iter_mut().enumerate() {
        let log = Rc::clone(&log);
        line.attach_function(1, move || log.borrow_mut().push(i))
            .unwrap();
    }
    let mut screen = Screen::with_lines(&[&lines[0], &lines[1]]);

    assert!(!screen.call_function(1));
    screen.switch_focus(true);
    screen.switch_focus(true);
    assert!(screen.call_function(1));
    assert!(!screen.call_function(9));
    assert_eq!(*log.borrow(), vec![1]);
}

// ============================================================================
// Property tests
// ============================================================================

fn lines_from_mask(mask: &[bool]) -> Vec<TextLine> {
    mask.iter()
        .map(|&focusable| {
            let line = TextLine::new(0, 0, "x");
            line.set_focusable(focusable);
            line
        })
        .collect()
}

proptest! {
    #[test]
    fn prop_focus_stays_in_bounds(
        mask in prop::collection::vec(any::<bool>(), 0..=MAX_LINES),
        moves in prop::collection::vec(any::<bool>(), 0..64),
    ) {
        let lines = lines_from_mask(&mask);
        let mut screen = Screen::new();
        for line in &lines {
            screen.add_line(line).unwrap();
        }

        for forward in moves {
            screen.switch_focus(forward);
            let focus = screen.focus_index();
            prop_assert!(focus <= screen.line_count());
            if let Some(index) = screen.focus() {
                prop_assert!(mask[index]);
            }
        }
    }

    #[test]
    fn prop_forward_lap_visits_every_focusable_line(
        mask in prop::collection::vec(any::<bool>(), 1..=MAX_LINES),
    ) {
        let lines = lines_from_mask(&mask);
        let mut screen = Screen::new();
        for line in &lines {
            screen.add_line(line).unwrap();
        }

        let expected: Vec<usize> = (0..mask.len()).filter(|&i| mask[i]).collect();
        let mut visited = Vec::new();
        loop {
            screen.switch_focus(true);
            match screen.focus() {
                Some(index) => visited.push(index),
                None => break,
            }
        }
        prop_assert_eq!(visited, expected);
    }

    #[test]
    fn prop_focused_line_is_inside_window(
        count in 1..=MAX_LINES,
        max_display in 0..=MAX_LINES + 2,
        moves in prop::collection::vec(any::<bool>(), 0..32),
    ) {
        let lines = lines_from_mask(&vec![true; count]);
        let mut screen = Screen::new();
        for line in &lines {
            screen.add_line(line).unwrap();
        }
        screen.set_max_line_display(max_display);

        for forward in moves {
            screen.switch_focus(forward);
            let window = screen.visible_window();
            prop_assert!(window.end <= screen.line_count());
            let expected_len = if max_display == 0 { count } else { max_display.min(count) };
            prop_assert_eq!(window.len(), expected_len);
            if let Some(index) = screen.focus() {
                prop_assert!(window.contains(&index));
            }
        }
    }
}
