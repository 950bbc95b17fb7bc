//! Log-workout form
//!
//! Layout:
//! 1. Workout name
//! 2. Type (For Time / AMRAP / EMOM / Strength, 2x2 grid)
//! 3. Result and movements
//! 4. RX checkbox and the post button
//!
//! The buffers are local to the dialog and nothing outside reads them.
//! Posting only asks the shell to close the form.

use crate::action::Action;
use crate::component::Component;
use crate::components::layout::{centered_popup, hit};
use crate::model::WorkoutCategory;
use crate::theme::{self, fade, fade_style};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Padding, Paragraph},
    Frame,
};

const PANEL_WIDTH: u16 = 56;
const PANEL_HEIGHT: u16 = 22;
const MOVEMENT_LINES: u16 = 3;

const NAME_PLACEHOLDER: &str = "e.g., Fran, Morning WOD...";
const MOVEMENTS_PLACEHOLDER: &str = "21-15-9 / Thrusters 95/65 / Pull-ups";

/// Focusable parts of the form, in Tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Name,
    Category,
    Result,
    Movements,
    Post,
}

impl FormField {
    fn all() -> [FormField; 5] {
        [
            FormField::Name,
            FormField::Category,
            FormField::Result,
            FormField::Movements,
            FormField::Post,
        ]
    }

    fn position(self) -> usize {
        Self::all().iter().position(|f| *f == self).unwrap_or(0)
    }

    fn next(self) -> FormField {
        let all = Self::all();
        all[(self.position() + 1) % all.len()]
    }

    fn previous(self) -> FormField {
        let all = Self::all();
        all[(self.position() + all.len() - 1) % all.len()]
    }
}

/// Click targets from the last draw
#[derive(Debug, Clone, Copy, Default)]
struct FormAreas {
    panel: Rect,
    close: Rect,
    name: Rect,
    categories: [Rect; 4],
    result: Rect,
    movements: Rect,
    post: Rect,
}

#[derive(Debug, Default)]
pub struct LogWorkoutDialog {
    category: WorkoutCategory,
    focus: FormField,
    name: String,
    result: String,
    movements: String,
    areas: FormAreas,
}

impl LogWorkoutDialog {
    /// Fresh state for a new opening
    pub fn reset(&mut self) {
        self.category = WorkoutCategory::ForTime;
        self.focus = FormField::Name;
        self.name.clear();
        self.result.clear();
        self.movements.clear();
        self.areas = FormAreas::default();
    }

    pub fn selected_category(&self) -> WorkoutCategory {
        self.category
    }

    pub fn select_category(&mut self, category: WorkoutCategory) {
        self.category = category;
    }

    pub fn is_selected(&self, category: WorkoutCategory) -> bool {
        self.category == category
    }

    pub fn focus(&self) -> FormField {
        self.focus
    }

    fn category_index(&self) -> usize {
        WorkoutCategory::all()
            .iter()
            .position(|c| *c == self.category)
            .unwrap_or(0)
    }

    /// Move inside the 2x2 grid; moves that leave the grid are ignored
    fn move_category(&mut self, delta: isize) {
        let target = self.category_index() as isize + delta;
        if let Some(category) = usize::try_from(target)
            .ok()
            .and_then(|i| WorkoutCategory::all().get(i).copied())
        {
            self.category = category;
        }
    }

    fn buffer_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            FormField::Name => Some(&mut self.name),
            FormField::Result => Some(&mut self.result),
            FormField::Movements => Some(&mut self.movements),
            FormField::Category | FormField::Post => None,
        }
    }

    fn handle_category_key(&mut self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => self.move_category(-1),
            KeyCode::Right | KeyCode::Char('l') => self.move_category(1),
            KeyCode::Up | KeyCode::Char('k') => self.move_category(-2),
            KeyCode::Down | KeyCode::Char('j') => self.move_category(2),
            KeyCode::Char(c @ '1'..='4') => {
                let index = c as usize - '1' as usize;
                if let Some(category) = WorkoutCategory::all().get(index) {
                    self.category = *category;
                }
            }
            KeyCode::Enter => self.focus = self.focus.next(),
            _ => {}
        }
        None
    }

    fn handle_text_key(&mut self, key: KeyEvent) -> Option<Action> {
        let multiline = self.focus == FormField::Movements;
        match key.code {
            KeyCode::Enter if multiline => {
                if let Some(buffer) = self.buffer_mut() {
                    buffer.push('\n');
                }
            }
            KeyCode::Enter => self.focus = self.focus.next(),
            KeyCode::Backspace => {
                if let Some(buffer) = self.buffer_mut() {
                    buffer.pop();
                }
            }
            KeyCode::Char(c) => {
                if let Some(buffer) = self.buffer_mut() {
                    buffer.push(c);
                }
            }
            _ => {}
        }
        None
    }

    /// Draw the backdrop and the panel; `opacity` drives the open and close fade
    pub fn draw_with_opacity(&mut self, frame: &mut Frame, area: Rect, opacity: f32) {
        let opacity = opacity.clamp(0.0, 1.0);
        dim_backdrop(frame, area, 1.0 - 0.6 * opacity);

        // Panel grows from 95% to full width while it fades in
        let scale = 0.95 + 0.05 * opacity;
        let width = (f32::from(PANEL_WIDTH) * scale).round() as u16;
        let panel = centered_popup(area, width, PANEL_HEIGHT);
        frame.render_widget(Clear, panel);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(fade(theme::BORDER, opacity)))
            .padding(Padding::horizontal(1))
            .style(Style::default().bg(fade(theme::SURFACE, opacity)));
        let inner = block.inner(panel);
        frame.render_widget(block, panel);

        let mut areas = FormAreas {
            panel,
            ..FormAreas::default()
        };
        let row = |offset: u16, height: u16| -> Rect {
            let y = inner.y.saturating_add(offset);
            let bottom = inner.bottom();
            if y >= bottom {
                return Rect::new(inner.x, bottom, inner.width, 0);
            }
            Rect::new(inner.x, y, inner.width, height.min(bottom - y))
        };

        // Title and close glyph
        let title_row = row(0, 1);
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "LOG WORKOUT",
                Style::default()
                    .fg(fade(theme::TEXT, opacity))
                    .add_modifier(Modifier::BOLD),
            ))),
            title_row,
        );
        areas.close = Rect::new(
            title_row.right().saturating_sub(3),
            title_row.y,
            3.min(title_row.width),
            title_row.height,
        );
        frame.render_widget(
            Paragraph::new(Span::styled(" ✕ ", Style::default().fg(fade(theme::MUTED, opacity))))
                .alignment(Alignment::Right),
            areas.close,
        );

        self.draw_label(frame, row(2, 1), "WORKOUT NAME", FormField::Name, opacity);
        areas.name = row(3, 1);
        self.draw_input(frame, areas.name, &self.name, NAME_PLACEHOLDER, FormField::Name, opacity);

        self.draw_label(frame, row(5, 1), "TYPE", FormField::Category, opacity);
        let half = inner.width / 2;
        for (i, category) in WorkoutCategory::all().into_iter().enumerate() {
            let grid_row = row(6 + (i / 2) as u16, 1);
            let rect = if i % 2 == 0 {
                Rect { width: half.saturating_sub(1), ..grid_row }
            } else {
                Rect {
                    x: grid_row.x + half,
                    width: grid_row.width.saturating_sub(half),
                    ..grid_row
                }
            };
            areas.categories[i] = rect;
            self.draw_category(frame, rect, category, opacity);
        }

        self.draw_label(frame, row(9, 1), "RESULT", FormField::Result, opacity);
        areas.result = row(10, 1);
        self.draw_input(
            frame,
            areas.result,
            &self.result,
            self.category.result_placeholder(),
            FormField::Result,
            opacity,
        );

        self.draw_label(frame, row(12, 1), "MOVEMENTS", FormField::Movements, opacity);
        areas.movements = row(13, MOVEMENT_LINES);
        self.draw_input(
            frame,
            areas.movements,
            &self.movements,
            MOVEMENTS_PLACEHOLDER,
            FormField::Movements,
            opacity,
        );

        // Display only
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(
                    "[✓]",
                    Style::default()
                        .fg(fade(theme::LIME, opacity))
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    " RX (as prescribed)",
                    Style::default().fg(fade(theme::TEXT_DIM, opacity)),
                ),
            ])),
            row(17, 1),
        );

        areas.post = row(19, 1);
        let mut post_style = Style::default()
            .fg(theme::BLACK)
            .bg(theme::LIME)
            .add_modifier(Modifier::BOLD);
        if self.focus == FormField::Post {
            post_style = post_style.add_modifier(Modifier::REVERSED);
        }
        frame.render_widget(
            Paragraph::new(Span::styled("POST WORKOUT", fade_style(post_style, opacity)))
                .alignment(Alignment::Center)
                .style(fade_style(post_style, opacity)),
            areas.post,
        );

        self.areas = areas;
    }

    fn draw_label(&self, frame: &mut Frame, area: Rect, text: &str, field: FormField, opacity: f32) {
        let color = if self.focus == field {
            theme::LIME
        } else {
            theme::MUTED
        };
        frame.render_widget(
            Paragraph::new(Span::styled(
                text.to_string(),
                Style::default()
                    .fg(fade(color, opacity))
                    .add_modifier(Modifier::BOLD),
            )),
            area,
        );
    }

    fn draw_input(
        &self,
        frame: &mut Frame,
        area: Rect,
        value: &str,
        placeholder: &str,
        field: FormField,
        opacity: f32,
    ) {
        let focused = self.focus == field;
        let lines: Vec<Line> = if value.is_empty() {
            vec![Line::from(vec![
                Span::styled(
                    if focused { "▏" } else { " " },
                    Style::default().fg(fade(theme::LIME, opacity)),
                ),
                Span::styled(
                    placeholder.to_string(),
                    Style::default().fg(fade(theme::SUBTLE, opacity)),
                ),
            ])]
        } else {
            let all: Vec<&str> = value.split('\n').collect();
            let visible = all.len().saturating_sub(area.height as usize);
            let last = all.len() - 1;
            all[visible..]
                .iter()
                .enumerate()
                .map(|(i, text)| {
                    let mut spans = vec![
                        Span::raw(" "),
                        Span::styled(
                            text.to_string(),
                            Style::default().fg(fade(theme::TEXT, opacity)),
                        ),
                    ];
                    if focused && visible + i == last {
                        spans.push(Span::styled(
                            "▏",
                            Style::default().fg(fade(theme::LIME, opacity)),
                        ));
                    }
                    Line::from(spans)
                })
                .collect()
        };
        frame.render_widget(
            Paragraph::new(lines)
                .style(Style::default().bg(fade(theme::SURFACE_RAISED, opacity))),
            area,
        );
    }

    fn draw_category(&self, frame: &mut Frame, area: Rect, category: WorkoutCategory, opacity: f32) {
        let selected = self.is_selected(category);
        let style = if selected {
            Style::default()
                .fg(theme::BLACK)
                .bg(theme::LIME)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme::TEXT_DIM).bg(theme::SURFACE_RAISED)
        };
        let marker = if selected { "●" } else { "○" };
        let mut text = Style::default();
        if selected && self.focus == FormField::Category {
            text = text.add_modifier(Modifier::UNDERLINED);
        }
        frame.render_widget(
            Paragraph::new(Span::styled(format!("{} {}", marker, category.label()), text))
                .alignment(Alignment::Center)
                .style(fade_style(style, opacity)),
            area,
        );
    }
}

/// Blend every cell of `area` toward the background
fn dim_backdrop(frame: &mut Frame, area: Rect, opacity: f32) {
    let buffer = frame.buffer_mut();
    let area = area.intersection(buffer.area);
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            let cell = &mut buffer[(x, y)];
            let fg = fade(cell.fg, opacity);
            let bg = fade(cell.bg, opacity);
            cell.set_fg(fg).set_bg(bg);
        }
    }
}

impl Component for LogWorkoutDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        match key.code {
            KeyCode::Esc => return Ok(Some(Action::CloseModal)),
            KeyCode::Tab => {
                self.focus = self.focus.next();
                return Ok(None);
            }
            KeyCode::BackTab => {
                self.focus = self.focus.previous();
                return Ok(None);
            }
            _ => {}
        }

        let action = match self.focus {
            FormField::Category => self.handle_category_key(key),
            FormField::Post => match key.code {
                KeyCode::Enter | KeyCode::Char(' ') => Some(Action::SubmitWorkout),
                _ => None,
            },
            FormField::Name | FormField::Result | FormField::Movements => {
                self.handle_text_key(key)
            }
        };
        Ok(action)
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent, _area: Rect) -> Result<Option<Action>> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Ok(None);
        }
        let (column, row) = (mouse.column, mouse.row);
        let areas = self.areas;

        if !hit(areas.panel, column, row) || hit(areas.close, column, row) {
            return Ok(Some(Action::CloseModal));
        }
        if hit(areas.post, column, row) {
            self.focus = FormField::Post;
            return Ok(Some(Action::SubmitWorkout));
        }
        if let Some(i) = areas.categories.iter().position(|r| hit(*r, column, row)) {
            self.category = WorkoutCategory::all()[i];
            self.focus = FormField::Category;
            return Ok(None);
        }
        for (rect, field) in [
            (areas.name, FormField::Name),
            (areas.result, FormField::Result),
            (areas.movements, FormField::Movements),
        ] {
            if hit(rect, column, row) {
                self.focus = field;
            }
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        self.draw_with_opacity(frame, area, 1.0);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use ratatui::{backend::TestBackend, Terminal};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn type_text(dialog: &mut LogWorkoutDialog, text: &str) {
        for c in text.chars() {
            dialog.handle_key_event(key(KeyCode::Char(c))).unwrap();
        }
    }

    fn drawn() -> (LogWorkoutDialog, Terminal<TestBackend>) {
        let mut dialog = LogWorkoutDialog::default();
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal
            .draw(|frame| dialog.draw(frame, frame.area()).unwrap())
            .unwrap();
        (dialog, terminal)
    }

    fn selected_count(dialog: &LogWorkoutDialog) -> usize {
        WorkoutCategory::all()
            .iter()
            .filter(|c| dialog.is_selected(**c))
            .count()
    }

    #[test]
    fn test_starts_on_for_time() {
        let dialog = LogWorkoutDialog::default();
        assert_eq!(dialog.selected_category(), WorkoutCategory::ForTime);
        assert_eq!(dialog.focus(), FormField::Name);
    }

    #[test]
    fn test_exactly_one_category_selected() {
        let mut dialog = LogWorkoutDialog::default();
        for category in WorkoutCategory::all() {
            dialog.select_category(category);
            assert_eq!(selected_count(&dialog), 1);
            assert!(dialog.is_selected(category));
        }
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut dialog = LogWorkoutDialog::default();
        type_text(&mut dialog, "Grace");
        dialog.select_category(WorkoutCategory::Strength);
        dialog.handle_key_event(key(KeyCode::Tab)).unwrap();

        dialog.reset();
        assert_eq!(dialog.selected_category(), WorkoutCategory::ForTime);
        assert_eq!(dialog.focus(), FormField::Name);
        assert!(dialog.name.is_empty());
    }

    #[test]
    fn test_result_placeholder_follows_category() {
        let mut dialog = LogWorkoutDialog::default();
        assert_eq!(dialog.selected_category().result_placeholder(), "e.g., 5:30");
        dialog.select_category(WorkoutCategory::Amrap);
        assert_eq!(
            dialog.selected_category().result_placeholder(),
            "e.g., 8 rounds + 5 reps"
        );
    }

    #[test]
    fn test_category_grid_navigation() {
        let mut dialog = LogWorkoutDialog::default();
        dialog.handle_key_event(key(KeyCode::Tab)).unwrap();
        assert_eq!(dialog.focus(), FormField::Category);

        dialog.handle_key_event(key(KeyCode::Right)).unwrap();
        assert_eq!(dialog.selected_category(), WorkoutCategory::Amrap);
        dialog.handle_key_event(key(KeyCode::Down)).unwrap();
        assert_eq!(dialog.selected_category(), WorkoutCategory::Strength);
        // leaving the grid is ignored
        dialog.handle_key_event(key(KeyCode::Down)).unwrap();
        assert_eq!(dialog.selected_category(), WorkoutCategory::Strength);
        dialog.handle_key_event(key(KeyCode::Char('h'))).unwrap();
        assert_eq!(dialog.selected_category(), WorkoutCategory::Emom);
        dialog.handle_key_event(key(KeyCode::Char('1'))).unwrap();
        assert_eq!(dialog.selected_category(), WorkoutCategory::ForTime);
        assert_eq!(selected_count(&dialog), 1);
    }

    #[test]
    fn test_typing_edits_focused_buffer_only() {
        let mut dialog = LogWorkoutDialog::default();
        type_text(&mut dialog, "Fran q");
        dialog.handle_key_event(key(KeyCode::Backspace)).unwrap();
        assert_eq!(dialog.name, "Fran ");
        assert!(dialog.result.is_empty());

        dialog.focus = FormField::Movements;
        type_text(&mut dialog, "Thrusters");
        dialog.handle_key_event(key(KeyCode::Enter)).unwrap();
        type_text(&mut dialog, "Pull-ups");
        assert_eq!(dialog.movements, "Thrusters\nPull-ups");
        assert_eq!(dialog.focus(), FormField::Movements);
    }

    #[test]
    fn test_escape_and_post_request_close() {
        let mut dialog = LogWorkoutDialog::default();
        assert_eq!(
            dialog.handle_key_event(key(KeyCode::Esc)).unwrap(),
            Some(Action::CloseModal)
        );

        dialog.handle_key_event(key(KeyCode::BackTab)).unwrap();
        assert_eq!(dialog.focus(), FormField::Post);
        assert_eq!(
            dialog.handle_key_event(key(KeyCode::Enter)).unwrap(),
            Some(Action::SubmitWorkout)
        );
    }

    #[test]
    fn test_renders_fields_and_placeholders() {
        let (_, terminal) = drawn();
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        assert!(text.contains("LOG WORKOUT"));
        assert!(text.contains(NAME_PLACEHOLDER));
        assert!(text.contains("e.g., 5:30"));
        assert!(text.contains(MOVEMENTS_PLACEHOLDER));
        assert!(text.contains("RX (as prescribed)"));
        assert!(text.contains("POST WORKOUT"));
        for category in WorkoutCategory::all() {
            assert!(text.contains(category.label()));
        }
    }

    #[test]
    fn test_click_outside_panel_closes() {
        let (mut dialog, _terminal) = drawn();
        let area = Rect::new(0, 0, 80, 30);
        assert_eq!(
            dialog.handle_mouse_event(click(0, 0), area).unwrap(),
            Some(Action::CloseModal)
        );
        let close = dialog.areas.close;
        assert_eq!(
            dialog.handle_mouse_event(click(close.x + 1, close.y), area).unwrap(),
            Some(Action::CloseModal)
        );
    }

    #[test]
    fn test_click_selects_category() {
        let (mut dialog, _terminal) = drawn();
        let area = Rect::new(0, 0, 80, 30);
        let emom = dialog.areas.categories[2];
        let action = dialog.handle_mouse_event(click(emom.x + 1, emom.y), area).unwrap();
        assert_eq!(action, None);
        assert_eq!(dialog.selected_category(), WorkoutCategory::Emom);
        assert_eq!(selected_count(&dialog), 1);

        let post = dialog.areas.post;
        assert_eq!(
            dialog.handle_mouse_event(click(post.x + 1, post.y), area).unwrap(),
            Some(Action::SubmitWorkout)
        );
    }

    #[test]
    fn test_backdrop_is_dimmed() {
        let mut dialog = LogWorkoutDialog::default();
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal
            .draw(|frame| {
                frame.render_widget(
                    Block::default().style(Style::default().bg(theme::LIME)),
                    frame.area(),
                );
                dialog.draw(frame, frame.area()).unwrap();
            })
            .unwrap();
        let corner = &terminal.backend().buffer()[(0, 0)];
        assert_ne!(corner.bg, theme::LIME);
    }
}
