//! Chart Geometry
//!
//! Pure helpers mapping the weekly progress series onto SVG coordinates.
//! The chart itself is plain SVG assembled in `components::progress_chart`.

use crate::models::ProgressDay;

/// SVG viewBox size and inner padding
pub const VIEW_W: f64 = 640.0;
pub const VIEW_H: f64 = 240.0;
pub const PAD: f64 = 32.0;

/// Line colors, assigned to series by index (wraps around)
const PALETTE: [&str; 4] = ["#8884d8", "#82ca9d", "#ffc658", "#5cb0ff"];

pub fn series_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

/// Habit names present in the progress series, in first-seen order
pub fn series_names(days: &[ProgressDay]) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for day in days {
        for mark in &day.marks {
            if !names.iter().any(|n| n == &mark.habit) {
                names.push(mark.habit.clone());
            }
        }
    }
    names
}

/// Binary series for one habit across the days.
/// A day without a mark for the habit counts as not done.
pub fn series_for(habit: &str, days: &[ProgressDay]) -> Vec<bool> {
    days.iter()
        .map(|day| {
            day.marks
                .iter()
                .find(|m| m.habit == habit)
                .map(|m| m.done)
                .unwrap_or(false)
        })
        .collect()
}

/// X coordinate of point `i` out of `n`, spread across the padded width
pub fn point_x(i: usize, n: usize) -> f64 {
    if n < 2 {
        return VIEW_W / 2.0;
    }
    PAD + i as f64 * (VIEW_W - 2.0 * PAD) / (n - 1) as f64
}

/// Y coordinate for a done/not-done value (done renders at the top)
pub fn point_y(done: bool) -> f64 {
    if done {
        PAD
    } else {
        VIEW_H - PAD
    }
}

/// SVG polyline `points` attribute for a binary series
pub fn polyline_points(series: &[bool]) -> String {
    let n = series.len();
    series
        .iter()
        .enumerate()
        .map(|(i, done)| format!("{:.1},{:.1}", point_x(i, n), point_y(*done)))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{HabitSource, SampleSource};

    #[test]
    fn test_series_names_from_sample() {
        let week = SampleSource.weekly_progress();
        assert_eq!(series_names(&week), ["Exercise", "Read", "Meditate"]);
    }

    #[test]
    fn test_series_for_sample() {
        let week = SampleSource.weekly_progress();

        let exercise = series_for("Exercise", &week);
        assert_eq!(exercise, [true, true, false, true, true, true, false]);
        assert_eq!(exercise.len(), 7);

        let read = series_for("Read", &week);
        assert_eq!(read, [true, true, true, false, true, true, true]);

        // Unknown habit yields an all-false series of the same length
        assert_eq!(series_for("Journal", &week), [false; 7]);
    }

    #[test]
    fn test_point_spread() {
        // Endpoints sit on the padded edges
        assert_eq!(point_x(0, 7), PAD);
        assert_eq!(point_x(6, 7), VIEW_W - PAD);
        // Done renders above not-done
        assert!(point_y(true) < point_y(false));
    }

    #[test]
    fn test_polyline_points() {
        let points = polyline_points(&[true, false, true]);
        let pairs: Vec<&str> = points.split(' ').collect();
        assert_eq!(pairs.len(), 3);
        assert_eq!(pairs[0], format!("{:.1},{:.1}", PAD, PAD));
        assert_eq!(pairs[1], format!("{:.1},{:.1}", VIEW_W / 2.0, VIEW_H - PAD));
    }

    #[test]
    fn test_palette_wraps() {
        assert_eq!(series_color(0), "#8884d8");
        assert_eq!(series_color(4), series_color(0));
    }
}
