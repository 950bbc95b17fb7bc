//! Chrome around the tab content: header, stats bar, navigation, footer

use crate::components::layout::{equal_columns, hit};
use crate::model::{StatTile, Tab};
use crate::theme::{self, fade, fade_style};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

pub const FOOTER_TEXT: &str = "Requested by @pierreascone · Built by @clonkbot";

/// Clickable regions of the chrome from the last draw
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShellHitboxes {
    pub tabs: Vec<(Tab, Rect)>,
    pub log_button: Rect,
}

impl ShellHitboxes {
    pub fn tab_at(&self, column: u16, row: u16) -> Option<Tab> {
        self.tabs
            .iter()
            .find(|(_, rect)| hit(*rect, column, row))
            .map(|(tab, _)| *tab)
    }

    pub fn is_log_button(&self, column: u16, row: u16) -> bool {
        hit(self.log_button, column, row)
    }
}

/// Logo, tagline, log button and avatar; returns the button's rectangle
pub fn draw_header(frame: &mut Frame, area: Rect, compact: bool, opacity: f32) -> Rect {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(fade(theme::BORDER, opacity)))
        .style(Style::default().bg(fade(theme::BG, opacity)));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height == 0 {
        return Rect::default();
    }
    let row = Rect {
        y: inner.y + inner.height / 2,
        height: 1,
        ..inner
    };

    let mut left = vec![
        Span::raw(" "),
        Span::styled(" W ", fade_style(theme::key_hint(), opacity)),
        Span::styled(
            " WODTRACK",
            Style::default()
                .fg(fade(theme::TEXT, opacity))
                .add_modifier(Modifier::BOLD),
        ),
    ];
    if !compact {
        left.push(Span::styled(
            "  Crush. Log. Repeat.",
            Style::default().fg(fade(theme::MUTED, opacity)),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(left)), row);

    let button_label = if compact { " + " } else { " + Log WOD " };
    let avatar = " YO ";
    let button_width = button_label.width() as u16;
    let avatar_width = avatar.width() as u16;
    let right_edge = row.right().saturating_sub(1);
    let avatar_x = right_edge.saturating_sub(avatar_width);
    let button_x = avatar_x.saturating_sub(button_width + 1);

    let button = Rect::new(button_x.max(row.x), row.y, button_width.min(row.width), 1);
    frame.render_widget(
        Paragraph::new(Span::styled(button_label, fade_style(theme::key_hint(), opacity))),
        button,
    );
    frame.render_widget(
        Paragraph::new(Span::styled(
            avatar,
            Style::default()
                .fg(fade(theme::TEXT, opacity))
                .bg(fade(theme::SURFACE_RAISED, opacity))
                .add_modifier(Modifier::BOLD),
        )),
        Rect::new(avatar_x.max(row.x), row.y, avatar_width.min(row.width), 1),
    );
    button
}

pub fn draw_stats(frame: &mut Frame, area: Rect, stats: &[StatTile], opacity: f32) {
    for (tile, rect) in stats.iter().zip(equal_columns(area, stats.len())) {
        let lines = vec![
            Line::from(Span::styled(
                tile.label.to_uppercase(),
                Style::default().fg(fade(theme::MUTED, opacity)),
            )),
            Line::from(Span::styled(
                tile.value.clone(),
                Style::default()
                    .fg(fade(theme::LIME, opacity))
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                tile.unit.clone(),
                Style::default().fg(fade(theme::TEXT_DIM, opacity)),
            )),
        ];
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(fade(theme::BORDER, opacity)))
            .style(Style::default().bg(fade(theme::SURFACE, opacity)));
        frame.render_widget(
            Paragraph::new(lines).alignment(Alignment::Center).block(block),
            rect,
        );
    }
}

fn tab_style(tab: Tab, active: Tab) -> Style {
    if tab == active {
        Style::default().fg(theme::LIME).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme::MUTED)
    }
}

/// Desktop tab bar; the active tab is underlined in lime
pub fn draw_tab_bar(frame: &mut Frame, area: Rect, active: Tab) -> Vec<(Tab, Rect)> {
    let mut hitboxes = Vec::new();
    for (tab, rect) in Tab::all().into_iter().zip(equal_columns(area, 3)) {
        let underline = if tab == active { "━" } else { "─" };
        let underline_color = if tab == active {
            theme::LIME
        } else {
            theme::BORDER
        };
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                format!("{} {}", tab.icon(), tab.name()),
                tab_style(tab, active),
            )),
            Line::from(Span::styled(
                underline.repeat(rect.width as usize),
                Style::default().fg(underline_color),
            )),
        ];
        frame.render_widget(
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .style(Style::default().bg(theme::BG)),
            rect,
        );
        hitboxes.push((tab, rect));
    }
    hitboxes
}

/// Mobile navigation at the bottom of narrow terminals
pub fn draw_bottom_nav(frame: &mut Frame, area: Rect, active: Tab) -> Vec<(Tab, Rect)> {
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(theme::BORDER))
        .style(Style::default().bg(theme::SURFACE));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut hitboxes = Vec::new();
    for (tab, rect) in Tab::all().into_iter().zip(equal_columns(inner, 3)) {
        let lines = vec![
            Line::from(Span::styled(tab.icon(), tab_style(tab, active))),
            Line::from(Span::styled(tab.short_name(), tab_style(tab, active))),
        ];
        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), rect);
        hitboxes.push((tab, rect));
    }
    hitboxes
}

pub fn draw_footer(frame: &mut Frame, area: Rect) {
    frame.render_widget(
        Paragraph::new(Span::styled(FOOTER_TEXT, Style::default().fg(theme::SUBTLE)))
            .alignment(Alignment::Center),
        area,
    );
}

pub fn draw_help_bar(frame: &mut Frame, area: Rect) {
    let hints = [
        ("n", "log"),
        ("1-3", "tabs"),
        ("j/k", "focus"),
        ("space", "like"),
        ("?", "help"),
        ("q", "quit"),
    ];
    let mut spans = Vec::new();
    for (key, label) in hints {
        spans.push(Span::styled(format!(" {} ", key), theme::key_hint()));
        spans.push(Span::styled(
            format!(" {}  ", label),
            Style::default().fg(theme::MUTED),
        ));
    }
    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(theme::BG)),
        area,
    );
}
