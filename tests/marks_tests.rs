use cell_charts::core::{BandScale, DatePoint, KeyedValue, LinearScale, PixelRect, TimeScale};
use cell_charts::marks::{
    BarStyle, EventCallout, StrokeStyle, draw_backdrop, draw_band_bars, draw_event_callouts,
    draw_line_series,
};
use cell_charts::palette::{BLUE, TEAL};
use cell_charts::render::{BoundData, ElementKind, SvgDocument};
use chrono::{TimeZone, Utc};

#[test]
fn backdrop_is_a_grey_rect() {
    let mut doc = SvgDocument::new(300, 200);
    let root = doc.root();
    let rect = draw_backdrop(&mut doc, root, PixelRect::new(0.0, 0.0, 290.0, 190.0))
        .expect("backdrop");
    assert_eq!(doc.node(rect).map(|node| node.kind), Some(ElementKind::Rect));
    assert_eq!(doc.attribute(rect, "width"), Some("290"));
    assert_eq!(doc.attribute(rect, "fill"), Some("#E9E9EB"));
}

#[test]
fn line_series_binds_data_and_maps_points() {
    let mut doc = SvgDocument::new(300, 200);
    let root = doc.root();
    let data = vec![
        DatePoint::new(Utc.with_ymd_and_hms(2020, 3, 1, 0, 0, 0).unwrap(), 100.0),
        DatePoint::new(Utc.with_ymd_and_hms(2020, 3, 11, 0, 0, 0).unwrap(), 50.0),
        DatePoint::new(Utc.with_ymd_and_hms(2020, 3, 21, 0, 0, 0).unwrap(), 0.0),
    ];
    let x = TimeScale::from_extent(&data, (0.0, 200.0)).expect("x");
    let y = LinearScale::percentage((100.0, 0.0)).expect("y");

    let path = draw_line_series(&mut doc, root, &data, &x, &y, StrokeStyle::new(TEAL, 2.0))
        .expect("line");

    assert_eq!(doc.attribute(path, "d"), Some("M0,0 L100,50 L200,100"));
    assert_eq!(doc.attribute(path, "fill"), Some("none"));
    assert_eq!(doc.attribute(path, "stroke"), Some("#41999A"));
    assert_eq!(doc.attribute(path, "stroke-width"), Some("2"));
    assert_eq!(doc.data(path), Some(&BoundData::Series(data)));
}

#[test]
fn empty_line_series_is_rejected_without_drawing() {
    let mut doc = SvgDocument::new(300, 200);
    let root = doc.root();
    let start = Utc.with_ymd_and_hms(2020, 3, 1, 0, 0, 0).unwrap();
    let end = Utc.with_ymd_and_hms(2020, 4, 1, 0, 0, 0).unwrap();
    let x = TimeScale::new(start, end, (0.0, 200.0)).expect("x");
    let y = LinearScale::percentage((100.0, 0.0)).expect("y");

    let result = draw_line_series(&mut doc, root, &[], &x, &y, StrokeStyle::new(BLUE, 1.0));
    assert!(result.is_err());
    assert!(doc.children(root).is_empty());
}

#[test]
fn band_bars_are_labelled_with_percentages() {
    let mut doc = SvgDocument::new(300, 200);
    let root = doc.root();
    let data = vec![KeyedValue::new("A", 40.0), KeyedValue::new("B", 12.5)];
    let band = BandScale::new(data.iter().map(|d| d.key.clone()), (0.0, 90.0)).expect("band");
    let x = LinearScale::percentage((0.0, 200.0)).expect("x");

    let bars =
        draw_band_bars(&mut doc, root, &data, &x, &band, BarStyle::new(BLUE)).expect("bars");
    assert_eq!(bars.len(), 2);

    let first = bars[0];
    assert_eq!(doc.attribute(first.group, "class"), Some("bar"));
    assert_eq!(doc.data(first.group), Some(&BoundData::Keyed(data[0].clone())));
    assert_eq!(doc.attribute(first.rect, "y"), Some("10"));
    assert_eq!(doc.attribute(first.rect, "width"), Some("80"));
    assert_eq!(doc.attribute(first.rect, "height"), Some("30"));
    assert_eq!(doc.text(first.label), Some("40%"));
    assert_eq!(doc.attribute(first.label, "x"), Some("85"));
    assert_eq!(doc.attribute(first.label, "y"), Some("25"));
    assert_eq!(doc.style(first.label, "font-weight"), Some("bold"));
    assert_eq!(doc.style(first.label, "font-size"), Some("14px"));
    assert_eq!(doc.style(first.label, "fill"), Some("#30469C"));

    assert_eq!(doc.text(bars[1].label), Some("12.5%"));
    assert_eq!(doc.attribute(bars[1].rect, "y"), Some("50"));
}

#[test]
fn bar_with_unknown_key_is_an_error() {
    let mut doc = SvgDocument::new(300, 200);
    let root = doc.root();
    let band = BandScale::new(["A"], (0.0, 90.0)).expect("band");
    let x = LinearScale::percentage((0.0, 200.0)).expect("x");
    let result = draw_band_bars(
        &mut doc,
        root,
        &[KeyedValue::new("Z", 1.0)],
        &x,
        &band,
        BarStyle::new(BLUE),
    );
    assert!(result.is_err());
}

#[test]
fn bar_label_size_follows_style() {
    let mut doc = SvgDocument::new(300, 200);
    let root = doc.root();
    let data = [KeyedValue::new("A", 40.0)];
    let band = BandScale::new(["A"], (0.0, 90.0)).expect("band");
    let x = LinearScale::percentage((0.0, 200.0)).expect("x");

    let bars = draw_band_bars(
        &mut doc,
        root,
        &data,
        &x,
        &band,
        BarStyle::new(TEAL).with_label_font_size(9.5),
    )
    .expect("bars");
    assert_eq!(doc.style(bars[0].label, "font-size"), Some("9.5px"));
    assert_eq!(doc.attribute(bars[0].rect, "fill"), Some("#41999A"));

    let invalid = draw_band_bars(
        &mut doc,
        root,
        &data,
        &x,
        &band,
        BarStyle::new(TEAL).with_label_font_size(0.0),
    );
    assert!(invalid.is_err());
}

#[test]
fn callouts_are_drawn_back_to_front() {
    let mut doc = SvgDocument::new(300, 200);
    let root = doc.root();
    let callouts = vec![
        EventCallout::new(["UK first", "lockdown"], 40.0, 60.0),
        EventCallout::new(["Schools", "reopen"], 120.0, 80.0),
    ];

    let handles = draw_event_callouts(&mut doc, root, &callouts).expect("callouts");
    assert_eq!(handles.len(), 2);
    // The later callout is drawn first, so the earlier one's box sits above it.
    assert!(handles[0].marker > handles[1].label_box);
    assert_eq!(doc.text(handles[0].lines[0]), Some("UK first"));
    assert_eq!(doc.attribute(handles[0].marker, "d"), Some("M 40 50 v 100"));
    assert_eq!(doc.attribute(handles[0].marker, "stroke-dasharray"), Some("2,2"));
    assert_eq!(doc.attribute(handles[1].label_box, "fill"), Some("#FFFFFF"));
    assert_eq!(doc.style(handles[1].lines[1], "text-anchor"), Some("end"));
    assert_eq!(doc.descendants_of_kind(root, ElementKind::Text).len(), 4);
}

#[test]
fn callout_round_trips_through_json_with_marker_defaults() {
    let callout: EventCallout =
        serde_json::from_str(r#"{"lines":["Tier system"],"x":10.0,"y":20.0}"#).expect("json");
    assert_eq!(callout, EventCallout::new(["Tier system"], 10.0, 20.0));
    assert_eq!(callout.marker_top, 50.0);
    assert_eq!(callout.marker_length, 100.0);
}
