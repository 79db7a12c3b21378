//! Flyer card preview and the empty-state hero

use flyer_app::{AppState, SlideKind};
use flyer_genai::IMAGE_DATA_URI_PREFIX;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, BorderType, Clear, Paragraph, Widget, Wrap},
};

use super::header::BRAND;
use crate::layout;
use crate::theme::{palette, styles};

pub const EMPTY_TITLE: &str = "Tu idea, potenciada";
pub const EMPTY_BODY: &str = "Escribí tu pedido, elegí el público y dejá que Little Founders cree un post bien argentino para tus redes.";

const HERO_HEIGHT: u16 = 5;

/// Shown in place of the preview until a flyer exists
pub struct EmptyHero;

impl Widget for EmptyHero {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false);
        let inner = block.inner(area);
        block.render(area, buf);

        let content_area = layout_centered_text(inner, 5);
        let text = vec![
            Line::from(Span::styled("✦", styles::accent_bold())),
            Line::default(),
            Line::from(Span::styled(EMPTY_TITLE, styles::brand_title())),
            Line::default(),
            Line::from(Span::styled(EMPTY_BODY, styles::text_secondary())),
        ];
        Paragraph::new(text)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(content_area, buf);
    }
}

fn layout_centered_text(area: Rect, lines: u16) -> Rect {
    let width = area.width.saturating_sub(4).min(60);
    let height = (lines + 2).min(area.height);
    Rect::new(
        area.x + area.width.saturating_sub(width) / 2,
        area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    )
}

/// Decoded size of a base64 data URI, in bytes
pub fn image_size_estimate(data_uri: &str) -> usize {
    let payload = data_uri
        .strip_prefix(IMAGE_DATA_URI_PREFIX)
        .or_else(|| data_uri.split_once("base64,").map(|(_, p)| p))
        .unwrap_or(data_uri);
    let padding = payload.bytes().rev().take_while(|b| *b == b'=').count();
    (payload.len() * 3 / 4).saturating_sub(padding)
}

fn format_size(bytes: usize) -> String {
    if bytes >= 1024 {
        format!("{} KB", bytes / 1024)
    } else {
        format!("{bytes} B")
    }
}

/// The current slide of the generated flyer, drawn as a card
pub struct FlyerPreview<'a> {
    state: &'a AppState,
}

impl<'a> FlyerPreview<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn card_style() -> Style {
        Style::default().bg(palette::CARD_BG).fg(palette::TEXT_ON_CARD)
    }

    fn render_badges(&self, area: Rect, buf: &mut Buffer) {
        let brand = Span::styled(
            format!(" {BRAND} "),
            Style::default()
                .bg(palette::BRAND_ORANGE)
                .fg(palette::CONTRAST_FG)
                .add_modifier(Modifier::BOLD),
        );
        Paragraph::new(Line::from(brand)).render(area, buf);

        let category = Span::styled(
            format!(" {} ", self.state.flyer.category.label()),
            Style::default()
                .bg(palette::BRAND_BLUE)
                .fg(palette::TEXT_PRIMARY),
        );
        Paragraph::new(Line::from(category))
            .alignment(Alignment::Right)
            .render(area, buf);
    }

    fn render_hero(&self, image: &str, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(Style::default().fg(palette::BRAND_ORANGE))
            .style(Style::default().bg(palette::BRAND_ORANGE_SOFT));
        let inner = block.inner(area);
        block.render(area, buf);

        let text = vec![
            Line::from(Span::styled("▣ Imagen generada", styles::accent_bold())),
            Line::from(Span::styled(
                format_size(image_size_estimate(image)),
                Style::default().fg(palette::TEXT_ON_CARD),
            )),
        ];
        let y = inner.y + inner.height.saturating_sub(2) / 2;
        let text_area = Rect::new(inner.x, y, inner.width, inner.height.min(2));
        Paragraph::new(text)
            .alignment(Alignment::Center)
            .render(text_area, buf);
    }

    fn render_dots(&self, area: Rect, buf: &mut Buffer) {
        let carousel = &self.state.carousel;
        let mut spans: Vec<Span> = (0..carousel.len())
            .map(|i| {
                if i == carousel.current() {
                    Span::styled("● ", Style::default().fg(palette::BRAND_ORANGE))
                } else {
                    Span::styled("○ ", Style::default().fg(palette::TEXT_MUTED))
                }
            })
            .collect();
        spans.push(Span::styled(
            format!(" {}/{}", carousel.current() + 1, carousel.len()),
            Style::default().fg(palette::TEXT_ON_CARD),
        ));
        Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}

impl Widget for FlyerPreview<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(slide) = self.state.current_slide() else {
            EmptyHero.render(area, buf);
            return;
        };

        let card = layout::card_rect(area, self.state.flyer.format);
        Clear.render(card, buf);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(palette::BRAND_ORANGE))
            .style(Self::card_style());
        let inner = block.inner(card);
        block.render(card, buf);

        let hero = self.state.hero_image();
        let hero_height = if hero.is_some() { HERO_HEIGHT } else { 0 };
        let rows = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(hero_height),
            Constraint::Length(2),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(inner);

        self.render_badges(rows[0], buf);
        if let Some(image) = hero {
            self.render_hero(image, rows[2], buf);
        }

        let title_style = match slide.kind {
            SlideKind::Intro => Style::default()
                .fg(palette::BRAND_ORANGE)
                .add_modifier(Modifier::BOLD),
            SlideKind::Point(_) => Style::default()
                .fg(palette::BRAND_BLUE)
                .add_modifier(Modifier::BOLD),
            SlideKind::Outro => Style::default()
                .fg(palette::BRAND_ORANGE)
                .add_modifier(Modifier::BOLD | Modifier::ITALIC),
        };
        Paragraph::new(Span::styled(slide.title.as_str(), title_style))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(rows[3], buf);
        Paragraph::new(slide.body.as_str())
            .style(Self::card_style())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(rows[4], buf);

        self.render_dots(rows[5], buf);
    }
}
