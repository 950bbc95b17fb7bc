//! Splash screen component
//!
//! Displays the WODTRACK logo briefly before transitioning to the feed.

use crate::action::Action;
use crate::component::Component;
use crate::theme;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph},
    Frame,
};
use std::time::{Duration, Instant};
use unicode_width::UnicodeWidthStr;

/// Splash screen component
pub struct SplashComponent {
    /// When the splash screen was shown
    start_time: Option<Instant>,
    /// Duration to show splash before auto-advancing
    duration: Duration,
}

impl Default for SplashComponent {
    fn default() -> Self {
        Self::new(Duration::from_millis(1200))
    }
}

impl SplashComponent {
    pub fn new(duration: Duration) -> Self {
        Self {
            start_time: None,
            duration,
        }
    }

    /// Check if splash duration has elapsed at `now`
    pub fn is_complete_at(&self, now: Instant) -> bool {
        self.start_time
            .map(|t| now.saturating_duration_since(t) >= self.duration)
            .unwrap_or(false)
    }

    pub fn start_at(&mut self, now: Instant) {
        self.start_time = Some(now);
    }

    fn logo() -> [&'static str; 5] {
        [
            "█   █  ███  ████  █████ ████   ███   ████ █   █",
            "█   █ █   █ █   █   █   █   █ █   █ █     █  █ ",
            "█ █ █ █   █ █   █   █   ████  █████ █     ███  ",
            "██ ██ █   █ █   █   █   █  █  █   █ █     █  █ ",
            "█   █  ███  ████    █   █   █ █   █  ████ █   █",
        ]
    }
}

impl Component for SplashComponent {
    fn init(&mut self) -> Result<()> {
        self.start_at(Instant::now());
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        // Any key press skips the splash screen
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Ok(Some(Action::ForceQuit))
            }
            KeyCode::Char('q') => Ok(Some(Action::ForceQuit)),
            _ => Ok(Some(Action::SplashComplete)),
        }
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        if action == Action::Tick && self.is_complete_at(Instant::now()) {
            return Ok(Some(Action::SplashComplete));
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        frame.render_widget(Clear, area);
        frame.render_widget(Block::default().style(Style::default().bg(theme::BG)), area);

        let logo = Self::logo();
        let logo_height = logo.len() as u16;
        let logo_width = logo.iter().map(|l| l.width()).max().unwrap_or(0) as u16;

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(area.height.saturating_sub(logo_height + 4) / 2),
                Constraint::Length(logo_height),
                Constraint::Length(2),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(area);

        let lines: Vec<Line> = logo
            .iter()
            .map(|line| {
                Line::from(Span::styled(
                    *line,
                    Style::default().fg(theme::LIME).bg(theme::BG),
                ))
            })
            .collect();
        let logo_x = area.x + area.width.saturating_sub(logo_width) / 2;
        let logo_rect = Rect::new(
            logo_x,
            chunks[1].y,
            logo_width.min(area.width),
            chunks[1].height,
        );
        frame.render_widget(Paragraph::new(lines), logo_rect);

        let tagline = "Crush. Log. Repeat.";
        let tagline_width = tagline.width() as u16;
        let tagline_rect = Rect::new(
            area.x + area.width.saturating_sub(tagline_width) / 2,
            chunks[3].y,
            tagline_width.min(area.width),
            chunks[3].height,
        );
        frame.render_widget(
            Paragraph::new(Span::styled(
                tagline,
                Style::default()
                    .fg(theme::TEXT_DIM)
                    .bg(theme::BG)
                    .add_modifier(Modifier::BOLD),
            )),
            tagline_rect,
        );

        Ok(())
    }
}
