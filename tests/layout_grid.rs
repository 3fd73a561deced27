//! Month grid layout: marker counts, grid spacing, today indicator.

mod common;

use chrono::NaiveDate;
use common::RecordingSurface;
use printcal::{render_month_grid, CalendarDate, LayoutMetrics, Point};

const PITCH: i32 = 104;

fn far_away_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(1970, 1, 1).unwrap()
}

fn render(date: CalendarDate, today: NaiveDate) -> (RecordingSurface, Point) {
    let mut surface = RecordingSurface::new(2480, 3508);
    let bounds = render_month_grid(
        &mut surface,
        date,
        Point::new(100, 300),
        &LayoutMetrics::default(),
        128.0,
        today,
    );
    (surface, bounds)
}

fn day_markers(surface: &RecordingSurface) -> Vec<Point> {
    surface
        .circles()
        .into_iter()
        .filter(|(_, radius)| *radius == 41)
        .map(|(center, _)| center)
        .collect()
}

#[test]
fn test_marker_count_matches_days_in_month() {
    for year in [2024, 2025] {
        for month in 1..=12 {
            let date = CalendarDate::new(year, month);
            let (surface, _) = render(date, far_away_today());
            assert_eq!(
                day_markers(&surface).len() as u32,
                date.days_in_month(),
                "wrong marker count for {year}-{month:02}"
            );
        }
    }
}

#[test]
fn test_leap_february_gets_29_markers() {
    let (surface, _) = render(CalendarDate::new(2024, 2), far_away_today());
    assert_eq!(day_markers(&surface).len(), 29);

    let (surface, _) = render(CalendarDate::new(2025, 2), far_away_today());
    assert_eq!(day_markers(&surface).len(), 28);
}

#[test]
fn test_first_row_starts_at_weekday_column() {
    // June 2025 starts on a Sunday (column 6)
    let (surface, _) = render(CalendarDate::new(2025, 6), far_away_today());
    assert_eq!(day_markers(&surface)[0], Point::new(100 + 6 * PITCH, 300));

    // January 2024 starts on a Monday (column 0)
    let (surface, _) = render(CalendarDate::new(2024, 1), far_away_today());
    assert_eq!(day_markers(&surface)[0], Point::new(100, 300));
}

#[test]
fn test_markers_stay_on_the_pitch_grid() {
    let (surface, _) = render(CalendarDate::new(2025, 6), far_away_today());
    for center in day_markers(&surface) {
        assert_eq!((center.x - 100) % PITCH, 0, "off-grid x at {center:?}");
        assert_eq!((center.y - 300) % PITCH, 0, "off-grid y at {center:?}");
        assert!((center.x - 100) / PITCH <= 6);
    }
}

#[test]
fn test_rows_wrap_after_seven_columns() {
    // January 2024: Monday start, 31 days => four full rows then three days
    let (surface, _) = render(CalendarDate::new(2024, 1), far_away_today());
    let markers = day_markers(&surface);
    // day 8 sits under day 1
    assert_eq!(markers[7], Point::new(100, 300 + PITCH));
    // day 31 is the third marker of the fifth row
    assert_eq!(markers[30], Point::new(100 + 2 * PITCH, 300 + 4 * PITCH));
}

#[test]
fn test_today_gets_concentric_inner_marker() {
    let today = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
    let (surface, _) = render(CalendarDate::new(2025, 6), today);
    let inner: Vec<Point> = surface
        .circles()
        .into_iter()
        .filter(|(_, radius)| *radius == 20)
        .map(|(center, _)| center)
        .collect();
    assert_eq!(inner.len(), 1);
    // concentric with the 15th's own marker
    assert_eq!(inner[0], day_markers(&surface)[14]);
}

#[test]
fn test_no_inner_marker_outside_todays_month() {
    let today = NaiveDate::from_ymd_opt(2025, 7, 15).unwrap();
    let (surface, _) = render(CalendarDate::new(2025, 6), today);
    assert!(surface.circles().iter().all(|(_, radius)| *radius == 41));

    // same month, different year
    let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
    let (surface, _) = render(CalendarDate::new(2025, 6), today);
    assert!(surface.circles().iter().all(|(_, radius)| *radius == 41));
}

#[test]
fn test_bounds_cover_consumed_grid() {
    // January 2024: full rows reach column 6, four wraps happen
    let (_, bounds) = render(CalendarDate::new(2024, 1), far_away_today());
    assert_eq!(bounds, Point::new(6 * PITCH, 4 * PITCH));
}

#[test]
fn test_month_label_centered_below_grid() {
    let (surface, bounds) = render(CalendarDate::new(2024, 1), far_away_today());
    let texts = surface.texts();
    assert_eq!(texts.len(), 1);
    let (origin, label) = &texts[0];
    assert_eq!(label, "1");
    // fake metrics: "1" at size 128 is 64 wide
    assert_eq!(origin.x, 100 + bounds.x / 2 - 32);
    assert_eq!(origin.y, 300 + bounds.y + PITCH);
}
