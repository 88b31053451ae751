use cell_charts::{ChartError, SizingConfig, SizingInput, compute_svg_size};

fn windowed(parent_width: u32, viewport_height: u32) -> SizingInput {
    SizingInput {
        fullscreen: false,
        element_width: 1234,
        parent_width: Some(parent_width),
        viewport_height,
    }
}

#[test]
fn windowed_size_is_min_of_parent_width_and_viewport_budget() {
    let config = SizingConfig::default();
    assert_eq!(compute_svg_size(windowed(640, 1080), config).expect("wide viewport"), 640);
    assert_eq!(compute_svg_size(windowed(1600, 900), config).expect("short viewport"), 770);
}

#[test]
fn fullscreen_uses_element_width_regardless_of_parent() {
    let input = SizingInput {
        fullscreen: true,
        element_width: 1920,
        parent_width: Some(300),
        viewport_height: 1080,
    };
    assert_eq!(compute_svg_size(input, SizingConfig::default()).expect("size"), 1920);
}

#[test]
fn fullscreen_does_not_need_a_parent() {
    let input = SizingInput {
        fullscreen: true,
        element_width: 800,
        parent_width: None,
        viewport_height: 600,
    };
    assert_eq!(compute_svg_size(input, SizingConfig::default()).expect("size"), 800);
}

#[test]
fn missing_parent_is_a_precondition_error() {
    let input = SizingInput {
        parent_width: None,
        ..windowed(0, 800)
    };
    let err = compute_svg_size(input, SizingConfig::default()).expect_err("no parent");
    assert!(matches!(err, ChartError::MissingParent));
}

#[test]
fn reserved_chrome_is_configurable() {
    let config = SizingConfig {
        reserved_chrome_px: 200,
    };
    assert_eq!(compute_svg_size(windowed(1000, 700), config).expect("size"), 500);
}
