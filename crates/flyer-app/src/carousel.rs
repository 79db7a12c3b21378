//! Slide sequence and circular navigation for the flyer preview
//!
//! Slides are derived from [`FlyerContent`] every time they are needed; only
//! the current index lives in state.

use flyer_core::FlyerContent;

/// Title of the closing slide
pub const OUTRO_TITLE: &str = "¡Sumate!";

/// Which part of the flyer a slide presents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideKind {
    Intro,
    /// 1-based position of the point
    Point(usize),
    Outro,
}

/// One page of the preview carousel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    pub kind: SlideKind,
    pub title: String,
    pub body: String,
}

/// Title shown on the slide for the `n`th point (1-based)
pub fn point_title(n: usize) -> String {
    format!("Paso {n}")
}

/// Intro, one slide per point in order, then the outro
pub fn build_slides(content: &FlyerContent) -> Vec<Slide> {
    let mut slides = Vec::with_capacity(content.points.len() + 2);
    slides.push(Slide {
        kind: SlideKind::Intro,
        title: content.title.clone(),
        body: content.description.clone(),
    });
    slides.extend(content.points.iter().enumerate().map(|(i, point)| Slide {
        kind: SlideKind::Point(i + 1),
        title: point_title(i + 1),
        body: point.clone(),
    }));
    slides.push(Slide {
        kind: SlideKind::Outro,
        title: OUTRO_TITLE.to_string(),
        body: content.call_to_action.clone(),
    });
    slides
}

/// Number of slides [`build_slides`] produces for `content`
pub fn slide_count(content: &FlyerContent) -> usize {
    content.points.len() + 2
}

/// Current position within a slide sequence of fixed length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Carousel {
    current: usize,
    len: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { current: 0, len }
    }

    /// Start over on the first slide of a sequence of `len` slides
    pub fn reset(&mut self, len: usize) {
        self.current = 0;
        self.len = len;
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_first(&self) -> bool {
        self.current == 0
    }

    /// Advance, wrapping past the last slide to the first
    pub fn next(&mut self) {
        if self.len > 0 {
            self.current = (self.current + 1) % self.len;
        }
    }

    /// Retreat, wrapping from the first slide to the last
    pub fn previous(&mut self) {
        if self.len > 0 {
            self.current = (self.current + self.len - 1) % self.len;
        }
    }
}
