//! Layout calculations for the shell

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Narrower terminals get the bottom navigation instead of the tab bar
pub const DESKTOP_MIN_WIDTH: u16 = 80;
/// Narrower terminals hide the sidebar
pub const SIDEBAR_MIN_WIDTH: u16 = 110;

const HEADER_HEIGHT: u16 = 3;
const STATS_HEIGHT: u16 = 5;
const TAB_BAR_HEIGHT: u16 = 3;
const BOTTOM_NAV_HEIGHT: u16 = 3;

/// Screen regions of the shell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellLayout {
    pub header: Rect,
    pub stats: Rect,
    /// Desktop tab bar
    pub tabs: Option<Rect>,
    pub content: Rect,
    pub sidebar: Option<Rect>,
    /// Mobile navigation
    pub bottom_nav: Option<Rect>,
    pub footer: Rect,
    pub help: Rect,
}

impl ShellLayout {
    pub fn is_desktop(&self) -> bool {
        self.tabs.is_some()
    }
}

/// Calculate centered popup area
pub fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// Whether the cell at (`column`, `row`) lies inside `rect`
pub fn hit(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

/// Split `area` into `count` equal columns
pub fn equal_columns(area: Rect, count: usize) -> Vec<Rect> {
    if count == 0 {
        return Vec::new();
    }
    let constraints = vec![Constraint::Ratio(1, count as u32); count];
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area)
        .to_vec()
}

pub fn calculate_shell_layout(area: Rect) -> ShellLayout {
    let desktop = area.width >= DESKTOP_MIN_WIDTH;
    let with_sidebar = area.width >= SIDEBAR_MIN_WIDTH;

    let rows = if desktop {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Length(STATS_HEIGHT),
                Constraint::Length(TAB_BAR_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(area)
    } else {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Length(STATS_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(1),
                Constraint::Length(BOTTOM_NAV_HEIGHT),
                Constraint::Length(1),
            ])
            .split(area)
    };

    let (tabs, body, footer, bottom_nav, help) = if desktop {
        (Some(rows[2]), rows[3], rows[4], None, rows[5])
    } else {
        (None, rows[2], rows[3], Some(rows[4]), rows[5])
    };

    let (content, sidebar) = if with_sidebar {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(66),
                Constraint::Length(2),
                Constraint::Min(0),
            ])
            .split(body);
        (columns[0], Some(columns[2]))
    } else {
        (body, None)
    };

    ShellLayout {
        header: rows[0],
        stats: rows[1],
        tabs,
        content,
        sidebar,
        bottom_nav,
        footer,
        help,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wide_terminal_shows_sidebar_and_tab_bar() {
        let layout = calculate_shell_layout(Rect::new(0, 0, 140, 50));
        assert!(layout.is_desktop());
        assert!(layout.sidebar.is_some());
        assert!(layout.bottom_nav.is_none());
        assert!(layout.content.width > layout.sidebar.unwrap().width);
    }

    #[test]
    fn test_medium_terminal_hides_sidebar() {
        let layout = calculate_shell_layout(Rect::new(0, 0, 90, 40));
        assert!(layout.is_desktop());
        assert!(layout.sidebar.is_none());
        assert_eq!(layout.content.width, 90);
    }

    #[test]
    fn test_narrow_terminal_uses_bottom_nav() {
        let area = Rect::new(0, 0, 60, 40);
        let layout = calculate_shell_layout(area);
        assert!(layout.tabs.is_none());
        assert!(layout.sidebar.is_none());
        let nav = layout.bottom_nav.unwrap();
        assert_eq!(nav.height, 3);
        assert_eq!(layout.help.y, area.height - 1);
        assert!(nav.y > layout.content.y);
    }

    #[test]
    fn test_centered_popup_clamps_to_area() {
        let area = Rect::new(0, 0, 40, 10);
        let popup = centered_popup(area, 60, 6);
        assert_eq!(popup.width, 40);
        assert_eq!(popup.height, 6);
        assert_eq!(popup.y, 2);
    }

    #[test]
    fn test_hit() {
        let rect = Rect::new(2, 3, 4, 2);
        assert!(hit(rect, 2, 3));
        assert!(hit(rect, 5, 4));
        assert!(!hit(rect, 6, 4));
        assert!(!hit(rect, 2, 5));
    }

    #[test]
    fn test_equal_columns() {
        let cols = equal_columns(Rect::new(0, 0, 90, 3), 3);
        assert_eq!(cols.len(), 3);
        assert_eq!(cols.iter().map(|c| c.width).sum::<u16>(), 90);
        assert!(equal_columns(Rect::new(0, 0, 90, 3), 0).is_empty());
    }
}
