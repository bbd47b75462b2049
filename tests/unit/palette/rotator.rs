use super::*;

fn chapter_palette() -> Palette {
    Palette::from_hex(&["540d6e", "ee4266", "ffd23f", "3bceac"]).unwrap()
}

#[test]
fn empty_palette_is_rejected() {
    let err = Palette::new(Vec::<Rgb8>::new()).unwrap_err();
    assert!(matches!(err, DeckbarError::InvalidPalette(_)));

    let err = Palette::from_hex::<&str>(&[]).unwrap_err();
    assert!(matches!(err, DeckbarError::InvalidPalette(_)));
}

#[test]
fn bad_hex_reports_invalid_palette() {
    let err = Palette::from_hex(&["540d6e", "nope"]).unwrap_err();
    assert!(matches!(err, DeckbarError::InvalidPalette(_)));
}

#[test]
fn advance_cycles_back_to_first_color() {
    let palette = chapter_palette();
    let mut rot = palette.rotator();
    let mut seen = Vec::new();
    for _ in 0..palette.len() {
        seen.push(rot.current());
        rot.advance();
    }
    assert_eq!(seen, palette.colors());
    assert_eq!(rot.current(), palette.colors()[0]);
    assert_eq!(rot.cursor(), 0);
}

#[test]
fn single_color_palette_is_constant() {
    let gray = Rgb8::new(0xd8, 0xe1, 0xe9);
    let mut rot = Palette::solid(gray).rotator();
    for _ in 0..5 {
        assert_eq!(rot.current(), gray);
        rot.advance();
    }
}

#[test]
fn reset_returns_to_first_color() {
    let palette = chapter_palette();
    let mut rot = ColorRotator::new(palette.clone());
    rot.advance();
    rot.advance();
    assert_eq!(rot.current(), palette.colors()[2]);
    rot.reset();
    assert_eq!(rot.current(), palette.colors()[0]);
}

#[test]
fn rotators_sharing_a_palette_are_independent() {
    let palette = chapter_palette();
    let mut a = palette.rotator();
    let b = palette.rotator();
    a.advance();
    assert_eq!(b.current(), palette.colors()[0]);
    assert_eq!(a.current(), palette.colors()[1]);
}
