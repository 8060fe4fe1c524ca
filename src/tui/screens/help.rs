//! Help screen: scrollable keybinding reference for the current stage.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::model::Stage;
use crate::tui::action::Action;
use crate::tui::app::Screen;

static EDITING_KEYS: &[(&str, &str)] = &[
    ("Tab / Shift-Tab", "next / prev field"),
    ("↑/↓", "next / prev field"),
    ("Backspace", "delete last character"),
];

static PERSONAL_INFO_KEYS: &[(&str, &str)] = &[
    ("Enter (Country)", "open country picker"),
    ("Enter / Alt+n", "next stage"),
    ("Esc", "quit"),
];

static TRAVEL_KEYS: &[(&str, &str)] = &[
    ("←/→ / Space", "change accommodation"),
    ("Enter / Alt+n", "next stage"),
    ("Esc / Alt+b", "previous stage"),
];

static HEALTH_KEYS: &[(&str, &str)] = &[
    ("Space", "toggle health declaration"),
    ("Enter / Alt+n", "submit application"),
    ("Esc / Alt+b", "previous stage"),
];

static CONFIRMATION_KEYS: &[(&str, &str)] = &[("q / Esc", "quit")];

static PICKER_KEYS: &[(&str, &str)] = &[
    ("type", "filter countries"),
    ("↑/↓", "move selection"),
    ("Enter", "choose country"),
    ("Esc", "cancel"),
];

static GLOBAL_KEYS: &[(&str, &str)] = &[("F1", "help"), ("Ctrl+C", "quit")];

/// State for the help screen.
#[derive(Debug, Clone, Default)]
pub struct HelpState {
    scroll: u16,
}

impl HelpState {
    /// Creates a new [`HelpState`] with scroll position at the top.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current scroll offset.
    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    /// Resets the scroll position to the top.
    pub fn reset(&mut self) {
        self.scroll = 0;
    }

    /// Handles a key event, returning an [`Action`] for the app to apply.
    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Up => {
                self.scroll = self.scroll.saturating_sub(1);
                Action::None
            }
            KeyCode::Down => {
                self.scroll = self.scroll.saturating_add(1);
                Action::None
            }
            KeyCode::Char('q') | KeyCode::Esc | KeyCode::F(1) => {
                Action::Navigate(Screen::Application)
            }
            _ => Action::None,
        }
    }
}

fn build_section(title: &'static str, keys: &[(&'static str, &'static str)]) -> Vec<Line<'static>> {
    let header_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let key_style = Style::default().fg(Color::Yellow);
    let dim_style = Style::default().fg(Color::DarkGray);

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(title, header_style)),
    ];
    for (key, desc) in keys {
        lines.push(Line::from(vec![
            Span::styled(format!("  {key:<20}"), key_style),
            Span::styled(*desc, dim_style),
        ]));
    }
    lines
}

/// Returns the help lines relevant to `stage`.
fn help_content(stage: Stage) -> Vec<Line<'static>> {
    let mut lines = match stage {
        Stage::PersonalInfo => {
            let mut lines = build_section("Personal Information", PERSONAL_INFO_KEYS);
            lines.extend(build_section("Country Picker", PICKER_KEYS));
            lines
        }
        Stage::TravelPreferences => build_section("Travel Preferences", TRAVEL_KEYS),
        Stage::HealthAndSafety => build_section("Health and Safety", HEALTH_KEYS),
        Stage::Confirmation => build_section("Confirmation", CONFIRMATION_KEYS),
    };
    if !stage.is_terminal() {
        lines.extend(build_section("Editing", EDITING_KEYS));
    }
    lines.extend(build_section("Global", GLOBAL_KEYS));
    lines
}

/// Renders the help screen for the stage the visitor came from.
#[mutants::skip]
pub fn draw_help(state: &HelpState, stage: Stage, frame: &mut Frame, area: Rect) {
    let title = format!(" Help – {} ", stage.title());
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [content_area, footer_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(inner);

    let content_lines = help_content(stage);
    let total = content_lines.len() as u16;
    let height = content_area.height;
    let capped_scroll = state.scroll().min(total.saturating_sub(height));

    let paragraph = Paragraph::new(content_lines).scroll((capped_scroll, 0));
    frame.render_widget(paragraph, content_area);

    let footer =
        Paragraph::new("↑/↓: scroll  q/Esc: back").style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);
}
