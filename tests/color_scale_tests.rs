use cell_charts::core::{Color, ColorScale, Lab};
use cell_charts::palette::{BLUE, ORANGE, TEAL};

#[test]
fn domain_ends_map_to_exact_reference_colors() {
    let scale = ColorScale::reference((0.0, 100.0)).expect("scale");
    assert_eq!(scale.color_at(0.0), BLUE);
    assert_eq!(scale.color_at(100.0), ORANGE);
}

#[test]
fn midpoint_lies_strictly_between_reference_colors() {
    let scale = ColorScale::reference((0.0, 100.0)).expect("scale");
    let mid = scale.color_at(50.0);

    let between = |a: u8, b: u8, v: u8| a.min(b) < v && v < a.max(b);
    assert!(between(BLUE.red, ORANGE.red, mid.red));
    assert!(between(BLUE.green, ORANGE.green, mid.green));
    assert!(between(BLUE.blue, ORANGE.blue, mid.blue));
}

#[test]
fn lightness_moves_monotonically_across_domain() {
    let scale = ColorScale::reference((0.0, 1.0)).expect("scale");
    let lightness: Vec<f64> = (0..=10)
        .map(|step| Lab::from_color(scale.color_at(f64::from(step) / 10.0)).l)
        .collect();
    assert!(lightness.windows(2).all(|pair| pair[0] <= pair[1] + 0.5));
    assert!(lightness[0] < lightness[10]);
}

#[test]
fn descending_domain_swaps_ends() {
    let scale = ColorScale::new((1.0, 0.0), BLUE, TEAL).expect("scale");
    assert_eq!(scale.color_at(1.0), BLUE);
    assert_eq!(scale.color_at(0.0), TEAL);
}

#[test]
fn custom_colors_are_allowed() {
    let red = Color::from_hex("#ff0000").expect("red");
    let scale = ColorScale::new((0.0, 10.0), red, TEAL).expect("scale");
    assert_eq!(scale.endpoints(), (red, TEAL));
}

#[test]
fn degenerate_domain_is_rejected() {
    assert!(ColorScale::reference((5.0, 5.0)).is_err());
}
