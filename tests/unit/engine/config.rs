use super::*;
use crate::foundation::core::EMU_PER_INCH;

#[test]
fn defaults_match_the_stock_bar() {
    let cfg = BarConfig::default();
    assert_eq!(cfg.orientation(), Orientation::Bottom);
    assert_eq!(cfg.thickness_in(), 0.3);
    assert_eq!(cfg.bg_thickness_ratio(), 0.5);
    assert_eq!(cfg.palette().len(), 4);
    assert_eq!(cfg.palette().colors()[1], Rgb8::new(0xee, 0x42, 0x66));
    assert_eq!(cfg.bg_color(), Rgb8::new(0xd8, 0xe1, 0xe9));
    assert_eq!(cfg.marker_layout(), "节标题");
    assert_eq!(cfg.tag(), "progress_bar_tag");
}

#[test]
fn setters_chain_and_validate_eagerly() {
    let cfg = BarConfig::default()
        .with_position("left")
        .unwrap()
        .with_thickness_in(0.2)
        .unwrap()
        .with_colors(&["c93456", "18c9a0", "a2418a"])
        .unwrap()
        .with_bg_thickness_ratio(0.75)
        .unwrap();
    assert_eq!(cfg.orientation(), Orientation::Left);
    assert_eq!(cfg.palette().len(), 3);

    assert!(matches!(
        cfg.clone().with_position("diagonal"),
        Err(DeckbarError::InvalidOrientation(_))
    ));
    assert!(matches!(
        cfg.clone().with_colors::<&str>(&[]),
        Err(DeckbarError::InvalidPalette(_))
    ));
    assert!(matches!(
        cfg.clone().with_bg_color("12"),
        Err(DeckbarError::InvalidPalette(_))
    ));
    assert!(matches!(
        cfg.clone().with_bg_color("#+a+b+c"),
        Err(DeckbarError::InvalidPalette(_))
    ));
    assert!(cfg.clone().with_thickness_in(-1.0).is_err());
    assert!(cfg.clone().with_bg_thickness_ratio(0.0).is_err());
    assert!(cfg.clone().with_bg_thickness_ratio(1.01).is_err());
    assert!(cfg.clone().with_tag("  ").is_err());
    assert!(cfg.with_marker_layout("").is_err());
}

#[test]
fn failed_setter_leaves_original_untouched() {
    let base = BarConfig::default().with_position("top").unwrap();
    let _ = base.clone().with_position("sideways");
    assert_eq!(base.orientation(), Orientation::Top);
}

#[test]
fn json_config_fills_missing_fields_with_defaults() {
    let cfg = BarConfig::from_json_str(r##"{ "position": "right", "colors": ["#112233"] }"##)
        .unwrap();
    assert_eq!(cfg.orientation(), Orientation::Right);
    assert_eq!(cfg.palette().colors(), &[Rgb8::new(0x11, 0x22, 0x33)]);
    assert_eq!(cfg.thickness_in(), 0.3);
    assert_eq!(cfg.tag(), DEFAULT_TAG);
}

#[test]
fn json_config_runs_setter_validation() {
    let err = BarConfig::from_json_str(r#"{ "position": "center" }"#).unwrap_err();
    assert!(err.to_string().contains("invalid orientation"));

    let err = BarConfig::from_json_str(r#"{ "colors": [] }"#).unwrap_err();
    assert!(err.to_string().contains("invalid palette"));

    assert!(BarConfig::from_json_str(r#"{ "thickness": 1.0 }"#).is_err());
}

#[test]
fn json_config_roundtrips() {
    let cfg = BarConfig::default()
        .with_position("top")
        .unwrap()
        .with_tag("deck_progress")
        .unwrap();
    let s = serde_json::to_string(&cfg).unwrap();
    assert_eq!(BarConfig::from_json_str(&s).unwrap(), cfg);
}

#[test]
fn geometry_converts_inches_to_emu() {
    let cfg = BarConfig::default();
    let geo = cfg
        .geometry(SlideSize::new(12_192_000.0, 6_858_000.0).unwrap())
        .unwrap();
    assert_eq!(geo.thickness(), 0.3 * EMU_PER_INCH);
    assert_eq!(geo.bg_thickness(), 0.3 * EMU_PER_INCH * 0.5);
    assert_eq!(geo.bar_length(), 12_192_000.0);
}
