//! Country picker popup: a filterable list that reports the chosen country
//! name back to the form.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph};

static COUNTRIES: &[&str] = &[
    "Argentina",
    "Australia",
    "Austria",
    "Bangladesh",
    "Belgium",
    "Brazil",
    "Canada",
    "Chile",
    "China",
    "Colombia",
    "Czechia",
    "Denmark",
    "Egypt",
    "Ethiopia",
    "Finland",
    "France",
    "Germany",
    "Ghana",
    "Greece",
    "Hungary",
    "Iceland",
    "India",
    "Indonesia",
    "Ireland",
    "Israel",
    "Italy",
    "Japan",
    "Kenya",
    "Mexico",
    "Morocco",
    "Netherlands",
    "New Zealand",
    "Nigeria",
    "Norway",
    "Pakistan",
    "Peru",
    "Philippines",
    "Poland",
    "Portugal",
    "Romania",
    "Saudi Arabia",
    "Singapore",
    "South Africa",
    "South Korea",
    "Spain",
    "Sweden",
    "Switzerland",
    "Thailand",
    "Turkey",
    "Ukraine",
    "United Arab Emirates",
    "United Kingdom",
    "United States",
    "Vietnam",
];

/// What the picker wants the owning screen to do after a key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerEvent {
    /// Keep the picker open.
    None,
    /// A country was chosen.
    Selected(String),
    /// The picker was dismissed without a choice.
    Cancelled,
}

/// State for the country picker popup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountryPicker {
    query: String,
    selected: usize,
}

impl CountryPicker {
    /// Opens the picker with an initial filter.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            selected: 0,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Returns the index of the highlighted entry within [`matches`](Self::matches).
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Returns the countries whose name contains the query, ignoring case.
    pub fn matches(&self) -> Vec<&'static str> {
        let needle = self.query.to_lowercase();
        COUNTRIES
            .iter()
            .copied()
            .filter(|name| name.to_lowercase().contains(&needle))
            .collect()
    }

    /// Handles a key event while the picker is open.
    pub fn handle_key(&mut self, key: KeyEvent) -> PickerEvent {
        match key.code {
            KeyCode::Esc => PickerEvent::Cancelled,
            KeyCode::Enter => self
                .matches()
                .get(self.selected)
                .map_or(PickerEvent::None, |name| {
                    PickerEvent::Selected((*name).to_string())
                }),
            KeyCode::Up => {
                self.selected = self.selected.saturating_sub(1);
                PickerEvent::None
            }
            KeyCode::Down => {
                let len = self.matches().len();
                if self.selected + 1 < len {
                    self.selected += 1;
                }
                PickerEvent::None
            }
            KeyCode::Backspace => {
                self.query.pop();
                self.selected = 0;
                PickerEvent::None
            }
            KeyCode::Char(ch) => {
                self.query.push(ch);
                self.selected = 0;
                PickerEvent::None
            }
            _ => PickerEvent::None,
        }
    }
}

/// Renders the picker as a centred popup over `area`.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_country_picker(picker: &CountryPicker, frame: &mut Frame, area: Rect) {
    let [popup] = Layout::horizontal([Constraint::Length(40)])
        .flex(Flex::Center)
        .areas(area);
    let [popup] = Layout::vertical([Constraint::Length(16)])
        .flex(Flex::Center)
        .areas(popup);

    frame.render_widget(Clear, popup);

    let block = Block::default()
        .title(" Select Country ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let [query_area, list_area, footer_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(inner);

    let query = Paragraph::new(Line::from(vec![
        Span::styled("Filter: ", Style::default().fg(Color::DarkGray)),
        Span::raw(picker.query()),
        Span::styled("\u{2588}", Style::default().add_modifier(Modifier::SLOW_BLINK)),
    ]));
    frame.render_widget(query, query_area);

    let matches = picker.matches();
    if matches.is_empty() {
        let none = Paragraph::new("No matching countries")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(none, list_area);
    } else {
        let items: Vec<ListItem> = matches.iter().map(|name| ListItem::new(*name)).collect();
        let list = List::new(items).highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );
        let mut state = ListState::default().with_selected(Some(picker.selected()));
        frame.render_stateful_widget(list, list_area, &mut state);
    }

    let footer = Paragraph::new("↑/↓: move  Enter: choose  Esc: cancel")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);
}
