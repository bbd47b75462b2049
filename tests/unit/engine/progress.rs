use super::*;
use crate::deck::model::{Deck, Slide};
use crate::foundation::core::{Rgb8, SlideSize};
use crate::layout::calculator::SegmentRole;

const MARKER: &str = "Section Header";
const WIDTH: f64 = 12_192_000.0;
const HEIGHT: f64 = 6_858_000.0;

/// Ten pages with chapters opening on pages 4 and 9.
fn ten_page_deck() -> Deck {
    let mut deck = Deck::new(SlideSize::new(WIDTH, HEIGHT).unwrap());
    for p in 0..10 {
        let slide = match p {
            4 => Slide::new(MARKER).with_text("Ch1"),
            9 => Slide::new(MARKER).with_text("Ch2"),
            _ => Slide::new("Title and Content").with_text(format!("page {p}")),
        };
        deck = deck.with_slide(slide);
    }
    deck
}

fn engine() -> ProgressBarEngine {
    let cfg = BarConfig::default()
        .with_marker_layout(MARKER)
        .unwrap()
        .with_colors(&["ff0000", "00ff00", "0000ff"])
        .unwrap()
        .with_bg_color("cccccc")
        .unwrap();
    ProgressBarEngine::new(cfg)
}

#[test]
fn plan_matches_chapter_structure() {
    let plan = engine().plan(&ten_page_deck()).unwrap();
    let starts: Vec<usize> = plan
        .boundaries
        .as_slice()
        .iter()
        .map(|b| b.start.0)
        .collect();
    assert_eq!(starts, vec![0, 4, 9, 10]);
    assert_eq!(plan.pages.len(), 10);

    let page6 = &plan.pages[6];
    let lengths: Vec<f64> = page6.segments.iter().map(|s| s.segment.length).collect();
    assert_eq!(lengths, vec![4_876_800.0, 3_657_600.0, 3_657_600.0]);
    let colors: Vec<Rgb8> = page6.segments.iter().map(|s| s.segment.color).collect();
    assert_eq!(
        colors,
        vec![
            Rgb8::new(255, 0, 0),
            Rgb8::new(0, 255, 0),
            Rgb8::new(0xcc, 0xcc, 0xcc)
        ]
    );
    assert_eq!(page6.segments[0].rect.x0, 0.0);
    assert_eq!(page6.segments[2].rect.x1, WIDTH);
}

#[test]
fn draw_all_tags_every_segment() {
    let mut deck = ten_page_deck();
    let stats = engine().draw_all(&mut deck).unwrap();
    assert_eq!(stats.pages, 10);
    assert_eq!(stats.chapters, 3);
    // Pages 0..4 draw 2 shapes, 4..9 draw 3, page 9 draws 4.
    assert_eq!(stats.shapes_drawn, 4 * 2 + 5 * 3 + 4);

    let names: Vec<&str> = deck.slides[6]
        .shapes
        .iter()
        .map(|s| s.name.as_str())
        .collect();
    assert_eq!(
        names,
        vec![
            "progress_bar_tag:fg:0",
            "progress_bar_tag:fg:1",
            "progress_bar_tag:bg:2"
        ]
    );
}

#[test]
fn remove_all_is_idempotent() {
    let mut deck = ten_page_deck();
    let eng = engine();
    assert_eq!(eng.remove_all(&mut deck).unwrap(), 0);
    let stats = eng.draw_all(&mut deck).unwrap();
    assert_eq!(eng.remove_all(&mut deck).unwrap(), stats.shapes_drawn);
    assert_eq!(eng.remove_all(&mut deck).unwrap(), 0);
    assert_eq!(deck, ten_page_deck());
}

#[test]
fn redraw_is_deterministic() {
    let eng = engine();
    let mut deck = ten_page_deck();
    eng.redraw_all(&mut deck).unwrap();
    let first = deck.clone();
    let stats = eng.redraw_all(&mut deck).unwrap();
    assert_eq!(deck, first);
    assert_eq!(stats.shapes_removed, stats.shapes_drawn);
}

#[test]
fn parallel_plan_equals_sequential_plan() {
    let deck = ten_page_deck();
    let seq = engine().plan(&deck).unwrap();
    let par = engine()
        .with_opts(EngineOpts {
            parallel: true,
            threads: Some(2),
        })
        .plan(&deck)
        .unwrap();
    assert_eq!(seq, par);
}

#[test]
fn zero_threads_is_rejected() {
    let err = engine()
        .with_opts(EngineOpts {
            parallel: true,
            threads: Some(0),
        })
        .plan(&ten_page_deck())
        .unwrap_err();
    assert!(err.to_string().contains("threads"));
}

#[test]
fn empty_deck_fails_without_mutation() {
    let mut deck = Deck::new(SlideSize::new(WIDTH, HEIGHT).unwrap());
    let err = engine().draw_all(&mut deck).unwrap_err();
    assert!(matches!(err, DeckbarError::EmptyDeck));
    assert!(deck.slides.is_empty());
}

#[test]
fn failed_redraw_keeps_previous_bars() {
    let mut deck = ten_page_deck();
    engine().draw_all(&mut deck).unwrap();
    let drawn = deck.clone();

    // Thicker than the slide is tall.
    let too_thick = BarConfig::default()
        .with_marker_layout(MARKER)
        .unwrap()
        .with_thickness_in(100.0)
        .unwrap();
    assert!(
        ProgressBarEngine::new(too_thick)
            .redraw_all(&mut deck)
            .is_err()
    );
    assert_eq!(deck, drawn);
}

#[test]
fn vertical_bar_runs_along_the_height() {
    let eng = ProgressBarEngine::new(
        engine().config().clone().with_position("left").unwrap(),
    );
    let plan = eng.plan(&ten_page_deck()).unwrap();
    let last = plan.pages[9].segments.last().unwrap();
    assert_eq!(last.segment.role, SegmentRole::Background);
    assert_eq!(last.rect.y1, HEIGHT);
    assert_eq!(plan.pages[0].segments[0].rect.x0, 0.0);
}

#[test]
fn shape_tag_format() {
    assert_eq!(shape_tag("bar", "fg", 3), "bar:fg:3");
}
