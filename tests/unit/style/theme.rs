use super::*;

#[test]
fn default_palette_matches_brand_colors() {
    let p = Palette::default();
    assert_eq!(p.background.to_string(), "#030712");
    assert_eq!(p.background_secondary.to_string(), "#0c1222");
    assert_eq!(p.accent_sky.to_string(), "#38bdf8");
    assert_eq!(p.accent_violet.to_string(), "#a78bfa");
    assert_eq!(p.ethereal_cyan.to_string(), "#00d4ff");
    assert_eq!(p.ethereal_green.to_string(), "#00ff88");
    assert_eq!(p.danger.to_string(), "#ef4444");
}

#[test]
fn partial_override_keeps_defaults() {
    let json = r##"{ "palette": { "accent_sky": "#ff0000" } }"##;
    let theme = Theme::from_reader(json.as_bytes()).unwrap();
    assert_eq!(theme.palette.accent_sky, Color::rgb(255, 0, 0));
    assert_eq!(theme.palette.accent_violet, Palette::default().accent_violet);
    assert_eq!(theme.font_family, Theme::default().font_family);
}

#[test]
fn unknown_keys_and_bad_colors_are_rejected() {
    let err = Theme::from_reader(r#"{ "colour": {} }"#.as_bytes()).unwrap_err();
    assert!(matches!(err, PromoError::Serde(_)));

    let err = Theme::from_reader(r##"{ "palette": { "white": "#zzzzzz" } }"##.as_bytes()).unwrap_err();
    assert!(err.to_string().starts_with("serialization error:"));
}

#[test]
fn empty_font_family_fails_validation() {
    let err = Theme::from_reader(r#"{ "font_family": "  " }"#.as_bytes()).unwrap_err();
    assert!(matches!(err, PromoError::Validation(_)));
}

#[test]
fn from_path_reports_missing_file() {
    let err = Theme::from_path("/definitely/not/here/theme.json").unwrap_err();
    assert!(err.to_string().contains("failed to open theme"));
}

#[test]
fn brand_gradient_runs_sky_to_violet() {
    let theme = Theme::default();
    let Paint::LinearGradient { angle_deg, stops } = theme.brand_gradient() else {
        panic!("expected linear gradient");
    };
    assert_eq!(angle_deg, 135.0);
    assert_eq!(stops.len(), 2);
    assert_eq!(stops[0].color, theme.palette.accent_sky);
    assert_eq!(stops[1].color, theme.palette.accent_violet);
}

#[test]
fn glass_is_translucent() {
    let glass = Theme::default().glass();
    let layers = glass.background_layers();
    assert_eq!(layers.len(), 1);
    let Paint::Solid { color } = layers[0] else {
        panic!("expected solid fill");
    };
    assert!(!color.is_opaque());
    assert!(glass.border_value().is_some());
}

#[test]
fn cyan_text_uses_double_width_tile() {
    let theme = Theme::default();
    let s = theme.gradient_text_cyan();
    let v = serde_json::to_value(&s).unwrap();
    assert_eq!(v["text_fill"]["angle_deg"], 90.0);
    assert_eq!(v["text_fill"]["stops"].as_array().unwrap().len(), 3);
    assert_eq!(v["background_size"][0]["percent"], 200.0);
}

#[test]
fn button_matches_brand_metrics() {
    let v = serde_json::to_value(Theme::default().button()).unwrap();
    assert_eq!(v["border_radius"], 12.0);
    assert_eq!(v["font_size"], 18.0);
    assert_eq!(v["font_weight"], 600);
    assert_eq!(v["padding"]["left"], 32.0);
}
