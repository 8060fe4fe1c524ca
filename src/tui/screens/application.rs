//! Application screen: the stepped form itself, from personal information
//! through to the confirmation message.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::model::{Accommodation, ApplicationForm, Field, FieldInput, InputKind, Stage};
use crate::tui::action::Action;
use crate::tui::widgets::country_picker::{CountryPicker, PickerEvent, draw_country_picker};
use crate::tui::widgets::form::{Form, cycle_focus, draw_form};
use crate::tui::widgets::status_bar::{StatusBarContext, draw_status_bar};

/// Heading of the confirmation stage.
pub const CONFIRMATION_TITLE: &str = "Application Submitted Successfully!";
/// Body of the confirmation stage.
pub const CONFIRMATION_BODY: &str =
    "Thank you for your application. We will process it and get back to you soon.";

/// View state for the application screen. The application data itself lives
/// in the [`ApplicationForm`] owned by the [`App`](crate::tui::App).
#[derive(Debug, Clone, Default)]
pub struct ApplicationState {
    focus: usize,
    picker: Option<CountryPicker>,
    notice: Option<String>,
}

impl ApplicationState {
    /// Creates a fresh view with focus on the first field.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the index of the focused field within the current stage.
    pub fn focus(&self) -> usize {
        self.focus
    }

    /// Returns the open country picker, if any.
    pub fn picker(&self) -> Option<&CountryPicker> {
        self.picker.as_ref()
    }

    /// Returns the blocking notification, if one is showing.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Shows a blocking notification; the next key press dismisses it.
    pub fn set_notice(&mut self, msg: impl Into<String>) {
        self.notice = Some(msg.into());
    }

    /// Moves focus back to the first field, e.g. after a stage change.
    pub fn reset_focus(&mut self) {
        self.focus = 0;
    }

    /// Returns the field that currently has focus.
    pub fn focused_field(&self, stage: Stage) -> Option<Field> {
        stage.fields().get(self.focus).copied()
    }

    /// Handles a key event, returning an [`Action`] for the app to apply.
    pub fn handle_key(&mut self, key: KeyEvent, form: &ApplicationForm) -> Action {
        if self.notice.take().is_some() {
            return Action::None;
        }

        if let Some(picker) = self.picker.as_mut() {
            return match picker.handle_key(key) {
                PickerEvent::None => Action::None,
                PickerEvent::Selected(name) => {
                    self.picker = None;
                    Action::SelectCountry(name)
                }
                PickerEvent::Cancelled => {
                    self.picker = None;
                    Action::Blur(Field::Country)
                }
            };
        }

        let stage = form.stage();
        if stage.is_terminal() {
            return match key.code {
                KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
                _ => Action::None,
            };
        }

        if key.modifiers == KeyModifiers::ALT {
            match key.code {
                KeyCode::Char('n') => return advance(stage),
                KeyCode::Char('b') => return Action::Back,
                _ => {}
            }
        }

        let Some(field) = self.focused_field(stage) else {
            return Action::None;
        };

        match key.code {
            KeyCode::Tab | KeyCode::Down => self.move_focus(stage, field, true),
            KeyCode::BackTab | KeyCode::Up => self.move_focus(stage, field, false),
            KeyCode::Esc if stage.prev().is_some() => Action::Back,
            KeyCode::Esc => Action::Quit,
            KeyCode::Enter if field.kind() == InputKind::Country => {
                self.picker = Some(CountryPicker::default());
                Action::None
            }
            KeyCode::Enter => advance(stage),
            KeyCode::Left if field.kind() == InputKind::Choice => {
                cycle_accommodation(form, false)
            }
            KeyCode::Right if field.kind() == InputKind::Choice => {
                cycle_accommodation(form, true)
            }
            KeyCode::Backspace => edit_text(form, field, |value| {
                value.pop();
            }),
            KeyCode::Char(ch) => self.handle_char(form, field, ch),
            _ => Action::None,
        }
    }

    /// Moves focus and reports the field that was left as blurred.
    fn move_focus(&mut self, stage: Stage, left: Field, forward: bool) -> Action {
        self.focus = cycle_focus(self.focus, stage.fields().len(), forward);
        Action::Blur(left)
    }

    fn handle_char(&mut self, form: &ApplicationForm, field: Field, ch: char) -> Action {
        match field.kind() {
            InputKind::Checkbox if ch == ' ' => {
                Action::Change(FieldInput::HealthDeclaration(!form.record().health_declaration))
            }
            InputKind::Choice if ch == ' ' => cycle_accommodation(form, true),
            InputKind::Checkbox | InputKind::Choice => Action::None,
            InputKind::Country => {
                let query = if ch == ' ' { String::new() } else { ch.to_string() };
                self.picker = Some(CountryPicker::new(query));
                Action::None
            }
            InputKind::Date if !(ch.is_ascii_digit() || ch == '-') => Action::None,
            InputKind::Date | InputKind::Text => edit_text(form, field, |value| value.push(ch)),
        }
    }
}

/// Next on the first two stages, Submit on the last input stage.
fn advance(stage: Stage) -> Action {
    if stage == Stage::HealthAndSafety {
        Action::Submit
    } else {
        Action::Next
    }
}

/// Applies `edit` to a copy of the field's text and returns the change.
fn edit_text(form: &ApplicationForm, field: Field, edit: impl FnOnce(&mut String)) -> Action {
    let Some(current) = form.record().text(field) else {
        return Action::None;
    };
    let mut value = current.to_string();
    edit(&mut value);
    FieldInput::text(field, value).map_or(Action::None, Action::Change)
}

fn cycle_accommodation(form: &ApplicationForm, forward: bool) -> Action {
    let options = Accommodation::all();
    let pos = options
        .iter()
        .position(|a| *a == form.record().accommodation)
        .unwrap_or(0);
    let next = cycle_focus(pos, options.len(), forward);
    Action::Change(FieldInput::Accommodation(options[next]))
}

/// Renders the application screen, including any popup on top of it.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_application(
    state: &ApplicationState,
    form: &ApplicationForm,
    frame: &mut Frame,
    area: Rect,
) {
    let block = Block::default()
        .title(" Mars Visit Application Form ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [heading_area, body_area, status_area, footer_area] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(inner);

    let stage = form.stage();
    if stage.is_terminal() {
        draw_confirmation(frame, body_area);
    } else {
        let heading = Paragraph::new(Line::from(Span::styled(
            stage.title(),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        frame.render_widget(heading, heading_area);
        draw_form(
            &Form::for_stage(stage, form, state.focus()),
            frame,
            body_area,
        );
    }

    draw_status_bar(&StatusBarContext::from_application(form), frame, status_area);

    let footer = Paragraph::new(Line::from(footer_hint(stage)))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);

    if let Some(picker) = state.picker() {
        draw_country_picker(picker, frame, area);
    }
    if let Some(notice) = state.notice() {
        draw_notice(notice, frame, area);
    }
}

fn footer_hint(stage: Stage) -> &'static str {
    match stage {
        Stage::PersonalInfo => "Tab: next field  Enter: next  Esc: quit  F1: help",
        Stage::TravelPreferences => "Tab: next field  ←/→: option  Enter: next  Esc: back  F1: help",
        Stage::HealthAndSafety => "Tab: next field  Space: toggle  Enter: submit  Esc: back  F1: help",
        Stage::Confirmation => "q/Esc: quit",
    }
}

#[mutants::skip]
fn draw_confirmation(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            CONFIRMATION_TITLE,
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(CONFIRMATION_BODY),
    ];
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

#[mutants::skip]
fn draw_notice(msg: &str, frame: &mut Frame, area: Rect) {
    let [popup] = Layout::horizontal([Constraint::Length(54)])
        .flex(Flex::Center)
        .areas(area);
    let [popup] = Layout::vertical([Constraint::Length(5)])
        .flex(Flex::Center)
        .areas(popup);

    frame.render_widget(Clear, popup);
    let block = Block::default()
        .title(" Cannot Submit ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));
    let paragraph = Paragraph::new(vec![
        Line::from(Span::styled(msg, Style::default().fg(Color::Red))),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key to continue",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .alignment(Alignment::Center)
    .block(block);
    frame.render_widget(paragraph, popup);
}
