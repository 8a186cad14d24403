use std::ops::Range;

use chrono::{DateTime, Datelike};

pub const SKILL_GRID_MAX: usize = 4;
pub const CERTIFICATION_GRID_MAX: usize = 6;
/// Scroll distance after which the navbar gets its opaque background.
pub const NAVBAR_SOLID_AFTER: f64 = 50.0;
/// Height of the fixed navbar, used when deciding which section is current.
pub const NAVBAR_HEIGHT: f64 = 80.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    Grid,
    Carousel,
}

impl DisplayMode {
    pub fn for_count(count: usize, grid_max: usize) -> Self {
        if count <= grid_max {
            Self::Grid
        } else {
            Self::Carousel
        }
    }
}

/// Stroke offset of the circular progress ring for a skill level.
pub fn progress_offset(level: u8, circumference: f64) -> f64 {
    let level = f64::from(level.min(100));
    circumference - (level / 100.0) * circumference
}

/// Paging state of a carousel: which item is first on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselState {
    len: usize,
    per_page: usize,
    start: usize,
}

impl CarouselState {
    pub fn new(len: usize, per_page: usize) -> Self {
        Self {
            len,
            per_page: per_page.max(1),
            start: 0,
        }
    }

    fn last_start(&self) -> usize {
        self.len.saturating_sub(self.per_page)
    }

    pub fn can_prev(&self) -> bool {
        self.start > 0
    }

    pub fn can_next(&self) -> bool {
        self.start < self.last_start()
    }

    pub fn next(self) -> Self {
        Self {
            start: (self.start + 1).min(self.last_start()),
            ..self
        }
    }

    pub fn prev(self) -> Self {
        Self {
            start: self.start.saturating_sub(1),
            ..self
        }
    }

    /// Indices of the items currently visible.
    pub fn visible(&self) -> Range<usize> {
        self.start..(self.start + self.per_page).min(self.len)
    }
}

/// Id of the section the reader is in: the last one whose top edge is
/// above the scroll position plus the navbar height.
pub fn active_section(scroll_y: f64, section_tops: &[(&'static str, f64)]) -> Option<&'static str> {
    section_tops
        .iter()
        .filter(|(_, top)| *top <= scroll_y + NAVBAR_HEIGHT)
        .last()
        .or_else(|| section_tops.first())
        .map(|(id, _)| *id)
}

pub fn navbar_is_solid(scroll_y: f64) -> bool {
    scroll_y > NAVBAR_SOLID_AFTER
}

/// Copyright year taken from the RFC 3339 build timestamp.
pub fn copyright_year(build_time: &str) -> Option<i32> {
    DateTime::parse_from_rfc3339(build_time)
        .ok()
        .map(|d| d.year())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_mode_thresholds() {
        assert_eq!(DisplayMode::for_count(4, SKILL_GRID_MAX), DisplayMode::Grid);
        assert_eq!(DisplayMode::for_count(5, SKILL_GRID_MAX), DisplayMode::Carousel);
        assert_eq!(DisplayMode::for_count(6, CERTIFICATION_GRID_MAX), DisplayMode::Grid);
        assert_eq!(DisplayMode::for_count(11, CERTIFICATION_GRID_MAX), DisplayMode::Carousel);
        assert_eq!(DisplayMode::for_count(0, 0), DisplayMode::Grid);
    }

    #[test]
    fn test_progress_offset() {
        assert_eq!(progress_offset(0, 200.0), 200.0);
        assert_eq!(progress_offset(100, 200.0), 0.0);
        assert_eq!(progress_offset(50, 200.0), 100.0);
        assert_eq!(progress_offset(250, 200.0), 0.0);
    }

    #[test]
    fn test_carousel_paging() {
        let state = CarouselState::new(11, 3);
        assert_eq!(state.visible(), 0..3);
        assert!(!state.can_prev());
        assert!(state.can_next());

        let state = state.next().next();
        assert_eq!(state.visible(), 2..5);
        assert!(state.can_prev());

        let mut end = state;
        for _ in 0..20 {
            end = end.next();
        }
        assert_eq!(end.visible(), 8..11);
        assert!(!end.can_next());

        let mut start = end;
        for _ in 0..20 {
            start = start.prev();
        }
        assert_eq!(start.visible(), 0..3);
    }

    #[test]
    fn test_carousel_short_list() {
        let state = CarouselState::new(2, 3);
        assert_eq!(state.visible(), 0..2);
        assert!(!state.can_next());
        assert_eq!(state.next(), state);

        let empty = CarouselState::new(0, 0);
        assert_eq!(empty.visible(), 0..0);
    }

    #[test]
    fn test_active_section() {
        let tops = [("home", 0.0), ("about", 900.0), ("skills", 1800.0)];
        assert_eq!(active_section(0.0, &tops), Some("home"));
        assert_eq!(active_section(850.0, &tops), Some("about"));
        assert_eq!(active_section(1000.0, &tops), Some("about"));
        assert_eq!(active_section(5000.0, &tops), Some("skills"));
        assert_eq!(active_section(0.0, &[("about", 500.0)]), Some("about"));
        assert_eq!(active_section(0.0, &[]), None);
    }

    #[test]
    fn test_navbar_solid() {
        assert!(!navbar_is_solid(0.0));
        assert!(!navbar_is_solid(50.0));
        assert!(navbar_is_solid(51.0));
    }

    #[test]
    fn test_copyright_year() {
        assert_eq!(copyright_year("2025-09-23T10:00:00+00:00"), Some(2025));
        assert_eq!(copyright_year("not a date"), None);
        assert!(copyright_year(env!("BUILD_TIME")).is_some());
    }
}
