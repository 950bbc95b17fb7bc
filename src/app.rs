//! Root application component
//!
//! The App owns the only two pieces of cross-cutting state (the active tab
//! and the modal stack) plus the motion timeline. Everything else lives in
//! the child components and is handed to them when they draw.

use crate::action::Action;
use crate::component::Component;
use crate::components::tab_content::CONTENT_FADE;
use crate::components::{
    calculate_shell_layout, shell, sidebar, HelpDialog, LogWorkoutDialog, QuitDialog,
    ShellHitboxes, ShellLayout, SplashComponent, TabContent,
};
use crate::config::Config;
use crate::model::modal::{Modal, ModalStack};
use crate::model::ui::AppMode;
use crate::model::{SampleData, Tab};
use crate::motion::{ElementId, Motion, Timeline, TransitionSpec};
use crate::theme;
use anyhow::{Context, Result};
use crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{layout::Rect, style::Style, widgets::Block, Frame};
use std::time::{Duration, Instant};
use tracing::debug;

const CHROME_ENTRANCE: Duration = Duration::from_millis(400);
const MODAL_FADE: Duration = Duration::from_millis(200);
const LIKE_POP: Duration = Duration::from_millis(300);

/// Main application state - coordinates between components
pub struct App {
    /// Current application mode
    pub mode: AppMode,

    /// Fixtures, immutable after startup
    pub data: SampleData,

    /// Selected tab; the mounted content catches up once its exit finishes
    active_tab: Tab,

    /// Content of exactly one tab
    content: TabContent,

    /// Modal overlay stack
    pub modals: ModalStack,

    motion: Timeline,

    /// Flag to indicate the app should quit
    pub should_quit: bool,

    // ─────────────────────────────────────────────────────────────────────────
    // Child Components
    // ─────────────────────────────────────────────────────────────────────────
    pub splash: SplashComponent,
    pub log_workout: LogWorkoutDialog,
    pub quit_dialog: QuitDialog,
    pub help_dialog: HelpDialog,

    /// Shell regions and click targets from the last draw
    layout: Option<ShellLayout>,
    hitboxes: ShellHitboxes,
    last_area: Rect,
}

impl App {
    pub fn new(config: &Config) -> Result<App> {
        let data = SampleData::new();
        data.validate().context("built-in sample data is inconsistent")?;

        let mut motion = Timeline::new(Instant::now()).with_enabled(config.animations);
        let content = TabContent::mount(Tab::Feed, &data, &mut motion);
        let mode = if config.splash_ms == 0 {
            AppMode::Running
        } else {
            AppMode::Splash
        };

        let mut app = App {
            mode,
            data,
            active_tab: Tab::Feed,
            content,
            modals: ModalStack::new(),
            motion,
            should_quit: false,
            splash: SplashComponent::new(config.splash_duration()),
            log_workout: LogWorkoutDialog::default(),
            quit_dialog: QuitDialog,
            help_dialog: HelpDialog::default(),
            layout: None,
            hitboxes: ShellHitboxes::default(),
            last_area: Rect::default(),
        };
        if app.mode == AppMode::Running {
            app.play_entrance();
        }
        Ok(app)
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    /// Tab whose content is currently mounted
    pub fn mounted_tab(&self) -> Tab {
        self.content.tab()
    }

    pub fn content(&self) -> &TabContent {
        &self.content
    }

    pub fn last_area(&self) -> Rect {
        self.last_area
    }

    /// Remount the feed and start every entrance transition
    fn play_entrance(&mut self) {
        self.motion.advance(Instant::now());
        self.motion
            .begin(ElementId::Header, TransitionSpec::fade_in(CHROME_ENTRANCE));
        self.motion.begin(
            ElementId::StatsBar,
            TransitionSpec::fade_in(CHROME_ENTRANCE).with_delay(Duration::from_millis(100)),
        );
        for i in 0..sidebar::WIDGET_COUNT {
            self.motion.begin(
                ElementId::Sidebar(i),
                TransitionSpec::fade_in(sidebar::ENTRANCE).with_delay(sidebar::entrance_delay(i)),
            );
        }
        self.content = TabContent::mount(self.active_tab, &self.data, &mut self.motion);
    }

    /// Select a tab. The old content fades out before the new one mounts;
    /// returning to the old tab mid-fade cancels the exit.
    pub fn set_active_tab(&mut self, tab: Tab) {
        if tab == self.active_tab {
            return;
        }
        debug!(from = self.active_tab.name(), to = tab.name(), "tab selected");
        self.active_tab = tab;

        let mounted = ElementId::Content(self.content.tab());
        if self.content.tab() == tab {
            let from = self.motion.progress(mounted);
            self.motion
                .begin(mounted, TransitionSpec::fade_in(CONTENT_FADE).starting_at(from));
        } else if !self.motion.is_exiting(mounted) && !self.motion.exit_complete(mounted) {
            let from = self.motion.progress(mounted);
            self.motion
                .exit(mounted, TransitionSpec::fade_out(CONTENT_FADE).starting_at(from));
        }
        self.settle_content();
    }

    /// Mount the selected tab once the outgoing content has faded out
    fn settle_content(&mut self) {
        let mounted = ElementId::Content(self.content.tab());
        if self.content.tab() != self.active_tab && self.motion.exit_complete(mounted) {
            self.motion.forget(mounted);
            self.content = TabContent::mount(self.active_tab, &self.data, &mut self.motion);
        }
    }

    pub fn modal_visible(&self) -> bool {
        self.modals.contains(Modal::LogWorkout)
    }

    /// Open or close the log form; opening always starts from a fresh form
    pub fn set_modal_visible(&mut self, visible: bool) {
        match (visible, self.modal_visible()) {
            (true, false) => {
                debug!("log workout form opened");
                self.log_workout.reset();
                self.modals.push(Modal::LogWorkout);
                let from = self.motion.progress(ElementId::ModalPanel);
                let from = if self.motion.is_exiting(ElementId::ModalPanel) {
                    from
                } else {
                    0.0
                };
                self.motion.begin(
                    ElementId::ModalPanel,
                    TransitionSpec::fade_in(MODAL_FADE).starting_at(from),
                );
            }
            (false, true) => {
                debug!("log workout form closed");
                self.modals.remove(Modal::LogWorkout);
                let from = self.motion.progress(ElementId::ModalPanel);
                self.motion.exit(
                    ElementId::ModalPanel,
                    TransitionSpec::fade_out(MODAL_FADE).starting_at(from),
                );
            }
            _ => {}
        }
    }

    /// Advance transitions to `now`
    pub fn tick_at(&mut self, now: Instant) {
        self.motion.advance(now);
        self.settle_content();
    }

    /// Feed of the mounted content, unless it is on its way out
    fn interactive_feed(&mut self) -> Option<&mut crate::components::feed::FeedView> {
        if self.content.tab() != self.active_tab {
            return None;
        }
        self.content.feed_mut()
    }

    fn toggle_focused_like(&mut self) -> Result<()> {
        let Some(feed) = self.interactive_feed() else {
            return Ok(());
        };
        let Some(card) = feed.focused_card_mut() else {
            return Ok(());
        };
        card.update(Action::ToggleLike)?;
        let (index, liked) = (card.index(), card.is_liked());
        debug!(card = index, liked, "like toggled");
        if liked {
            self.motion
                .begin(ElementId::LikePop(index), TransitionSpec::fade_in(LIKE_POP));
        } else {
            self.motion.forget(ElementId::LikePop(index));
        }
        Ok(())
    }

    fn close_top_modal(&mut self) {
        match self.modals.top().copied() {
            Some(Modal::LogWorkout) => self.set_modal_visible(false),
            Some(_) => {
                self.modals.pop();
            }
            None => {}
        }
    }

    fn handle_shell_key(&self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Char('q') => Some(Action::OpenQuitDialog),
            KeyCode::Char('?') => Some(Action::OpenHelp),
            KeyCode::Char('n') | KeyCode::Char('+') => Some(Action::OpenLogWorkout),
            KeyCode::Char('1') => Some(Action::SelectTab(Tab::Feed)),
            KeyCode::Char('2') => Some(Action::SelectTab(Tab::PersonalRecords)),
            KeyCode::Char('3') => Some(Action::SelectTab(Tab::Leaderboard)),
            KeyCode::Tab => Some(Action::NextTab),
            KeyCode::BackTab => Some(Action::PrevTab),
            KeyCode::Char('j') | KeyCode::Down => Some(Action::NextCard),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::PrevCard),
            KeyCode::Char(' ') | KeyCode::Char('l') => Some(Action::ToggleLike),
            _ => None,
        }
    }

    fn handle_shell_mouse(&self, mouse: MouseEvent) -> Option<Action> {
        let (column, row) = (mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if self.hitboxes.is_log_button(column, row) {
                    return Some(Action::OpenLogWorkout);
                }
                if let Some(tab) = self.hitboxes.tab_at(column, row) {
                    return Some(Action::SelectTab(tab));
                }
                let feed = self.content.feed()?;
                let index = feed.card_at(column, row)?;
                if index == feed.focused() {
                    Some(Action::ToggleLike)
                } else {
                    Some(Action::FocusCard(index))
                }
            }
            MouseEventKind::ScrollDown if self.over_content(column, row) => Some(Action::NextCard),
            MouseEventKind::ScrollUp if self.over_content(column, row) => Some(Action::PrevCard),
            _ => None,
        }
    }

    fn over_content(&self, column: u16, row: u16) -> bool {
        self.layout
            .is_some_and(|l| crate::components::layout::hit(l.content, column, row))
    }

    fn draw_shell(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Block::default().style(Style::default().bg(theme::BG)), area);

        let layout = calculate_shell_layout(area);
        let log_button = shell::draw_header(
            frame,
            layout.header,
            !layout.is_desktop(),
            self.motion.progress(ElementId::Header),
        );
        shell::draw_stats(
            frame,
            layout.stats,
            &self.data.stats,
            self.motion.progress(ElementId::StatsBar),
        );

        let mut tabs = Vec::new();
        if let Some(rect) = layout.tabs {
            tabs = shell::draw_tab_bar(frame, rect, self.active_tab);
        }
        if let Some(rect) = layout.bottom_nav {
            tabs = shell::draw_bottom_nav(frame, rect, self.active_tab);
        }

        self.content
            .draw(frame, layout.content, &self.data, &self.motion);
        if let Some(rect) = layout.sidebar {
            sidebar::draw_sidebar(frame, rect, &self.data, &self.motion);
        }
        shell::draw_footer(frame, layout.footer);
        shell::draw_help_bar(frame, layout.help);

        self.layout = Some(layout);
        self.hitboxes = ShellHitboxes { tabs, log_button };
    }

    fn draw_modals(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let panel = ElementId::ModalPanel;
        // Closed form still fading out
        if !self.modal_visible() && self.motion.is_exiting(panel) {
            self.log_workout
                .draw_with_opacity(frame, area, self.motion.progress(panel));
        }

        let stack: Vec<Modal> = self.modals.iter().copied().collect();
        for modal in stack {
            match modal {
                Modal::LogWorkout => {
                    self.log_workout
                        .draw_with_opacity(frame, area, self.motion.progress(panel));
                }
                Modal::QuitConfirm => self.quit_dialog.draw(frame, area)?,
                Modal::Help => self.help_dialog.draw(frame, area)?,
            }
        }
        Ok(())
    }
}

impl Component for App {
    fn init(&mut self) -> Result<()> {
        if self.mode == AppMode::Splash {
            self.splash.init()?;
        }
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Ok(Some(Action::ForceQuit));
        }
        if self.mode == AppMode::Splash {
            return self.splash.handle_key_event(key);
        }
        match self.modals.top().copied() {
            Some(Modal::LogWorkout) => self.log_workout.handle_key_event(key),
            Some(Modal::QuitConfirm) => self.quit_dialog.handle_key_event(key),
            Some(Modal::Help) => self.help_dialog.handle_key_event(key),
            None => Ok(self.handle_shell_key(key)),
        }
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent, area: Rect) -> Result<Option<Action>> {
        if self.mode == AppMode::Splash {
            return Ok(None);
        }
        match self.modals.top().copied() {
            Some(Modal::LogWorkout) => self.log_workout.handle_mouse_event(mouse, area),
            Some(_) => Ok(None),
            None => Ok(self.handle_shell_mouse(mouse)),
        }
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::Tick => {
                self.tick_at(Instant::now());
                if self.mode == AppMode::Splash {
                    return self.splash.update(Action::Tick);
                }
            }
            Action::Resize(_, _) => {}
            Action::ForceQuit => self.should_quit = true,
            Action::SplashComplete => {
                if self.mode == AppMode::Splash {
                    self.mode = AppMode::Running;
                    self.play_entrance();
                }
            }
            Action::SelectTab(tab) => self.set_active_tab(tab),
            Action::NextTab => self.set_active_tab(self.active_tab.next()),
            Action::PrevTab => self.set_active_tab(self.active_tab.previous()),
            Action::NextCard => {
                if let Some(feed) = self.interactive_feed() {
                    feed.focus_next();
                }
            }
            Action::PrevCard => {
                if let Some(feed) = self.interactive_feed() {
                    feed.focus_previous();
                }
            }
            Action::FocusCard(index) => {
                if let Some(feed) = self.interactive_feed() {
                    feed.focus(index);
                }
            }
            Action::ToggleLike => self.toggle_focused_like()?,
            Action::OpenLogWorkout => self.set_modal_visible(true),
            Action::SubmitWorkout => {
                // No submission target exists; the form only closes
                debug!(
                    category = self.log_workout.selected_category().label(),
                    "post workout requested"
                );
                self.set_modal_visible(false);
            }
            Action::OpenQuitDialog => {
                if !self.modals.contains(Modal::QuitConfirm) {
                    self.modals.push(Modal::QuitConfirm);
                }
            }
            Action::OpenHelp => {
                if !self.modals.contains(Modal::Help) {
                    self.help_dialog.scroll_offset = 0;
                    self.modals.push(Modal::Help);
                }
            }
            Action::CloseModal => self.close_top_modal(),
            Action::ConfirmModal => {
                if self.modals.top() == Some(&Modal::QuitConfirm) {
                    self.should_quit = true;
                }
            }
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        self.last_area = area;
        if self.mode == AppMode::Splash {
            return self.splash.draw(frame, area);
        }
        self.draw_shell(frame, area);
        self.draw_modals(frame, area)
    }
}
