use cell_charts::ChartError;
use cell_charts::axis::{
    append_window_suffix, format_date_window, format_file_tick, format_month_day,
};
use chrono::{TimeZone, Utc};

#[test]
fn month_day_drops_leading_zero() {
    let date = Utc.with_ymd_and_hms(2020, 10, 8, 0, 0, 0).unwrap();
    assert_eq!(format_month_day(date), "Oct 8");
}

#[test]
fn two_digit_days_are_kept() {
    let date = Utc.with_ymd_and_hms(2020, 12, 17, 0, 0, 0).unwrap();
    assert_eq!(format_month_day(date), "Dec 17");
}

#[test]
fn three_day_window_is_appended() {
    let date = Utc.with_ymd_and_hms(2020, 10, 8, 0, 0, 0).unwrap();
    assert_eq!(format_date_window(date, 3).expect("window"), "Oct 8 -Oct 11");
}

#[test]
fn generated_label_can_be_suffixed_after_the_fact() {
    assert_eq!(
        append_window_suffix("Oct 8", 2020, 3).expect("suffix"),
        "Oct 8 -Oct 11"
    );
}

#[test]
fn malformed_generated_label_reports_the_label() {
    let err = append_window_suffix("Octember 8", 2020, 3).expect_err("bad label");
    assert!(matches!(err, ChartError::InvalidTickLabel { label } if label == "Octember 8"));
}

#[test]
fn short_paths_are_unchanged() {
    let path = "swt/widgets/Button.java";
    assert!(path.len() < 50);
    assert_eq!(format_file_tick(path), path);
}

#[test]
fn sixty_char_path_keeps_three_leading_segments_and_file_name() {
    let path = "bundles/org.eclipse.swt/Eclipse_SWT/cocoa/GtkWidgetTips.java";
    assert_eq!(path.len(), 60);
    assert_eq!(path.split('/').count(), 5);

    let tick = format_file_tick(path);
    assert_eq!(tick, "bundles/org.eclipse.swt/Eclipse_SWT/.../GtkWidgetTips.java");
    assert!(tick.len() < path.len());
}

#[test]
fn windows_paths_are_truncated_after_normalizing() {
    let path = r"bundles\org.eclipse.swt\Eclipse_SWT\cocoa\GtkWidgetTips.java";
    assert_eq!(
        format_file_tick(path),
        "bundles/org.eclipse.swt/Eclipse_SWT/.../GtkWidgetTips.java"
    );
}

#[test]
fn long_path_that_elision_cannot_shorten_is_kept() {
    let path = "a_very_long_directory_name_for_testing/another_long_file_name.rs";
    assert_eq!(format_file_tick(path), path);
}
