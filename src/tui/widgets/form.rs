//! Form widget: renders one stage's fields with focus, required markers and
//! inline errors.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::model::{ApplicationForm, Field, InputKind, Stage};

/// A single row within a [`Form`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    /// Display label shown in the field's border.
    pub label: String,
    /// Text shown inside the field.
    pub value: String,
    /// Validation error message, if any.
    pub error: Option<String>,
    /// Whether the field is marked as required.
    pub required: bool,
    /// Whether typing edits the value directly; other kinds show no cursor.
    pub editable: bool,
}

impl FormField {
    /// Builds the row for `field` from the current application state.
    pub fn from_application(field: Field, form: &ApplicationForm) -> Self {
        let record = form.record();
        let (value, editable) = match field.kind() {
            InputKind::Checkbox => {
                let mark = if record.health_declaration { "[x]" } else { "[ ]" };
                (mark.to_string(), false)
            }
            InputKind::Choice => (format!("< {} >", record.accommodation), false),
            InputKind::Country => {
                let value = if form.country().is_empty() {
                    "Select Country (Enter)".to_string()
                } else {
                    form.country().to_string()
                };
                (value, false)
            }
            InputKind::Text | InputKind::Date => {
                (record.text(field).unwrap_or_default().to_string(), true)
            }
        };
        Self {
            label: field.label().to_string(),
            value,
            error: form.error(field).map(str::to_string),
            required: field.is_required(),
            editable,
        }
    }
}

/// The rows of one stage plus which row has focus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Form {
    fields: Vec<FormField>,
    focus: usize,
}

impl Form {
    /// Creates a form with the given fields and focus index.
    pub fn new(fields: Vec<FormField>, focus: usize) -> Self {
        Self { fields, focus }
    }

    /// Builds the form for the current stage of `form`.
    pub fn for_stage(stage: Stage, form: &ApplicationForm, focus: usize) -> Self {
        let fields = stage
            .fields()
            .iter()
            .map(|field| FormField::from_application(*field, form))
            .collect();
        Self::new(fields, focus)
    }

    pub fn focus(&self) -> usize {
        self.focus
    }

    /// Returns `true` if any field has an error set.
    pub fn has_errors(&self) -> bool {
        self.fields.iter().any(|f| f.error.is_some())
    }

    /// Returns a reference to the fields.
    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }
}

/// Moves `focus` one step forward or back through `len` rows, wrapping around.
pub fn cycle_focus(focus: usize, len: usize, forward: bool) -> usize {
    if len == 0 {
        return 0;
    }
    if forward {
        (focus + 1) % len
    } else {
        (focus + len - 1) % len
    }
}

/// Renders a form within the given area.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_form(form: &Form, frame: &mut Frame, area: Rect) {
    let row_height = 3_u16;
    let constraints: Vec<Constraint> = form
        .fields
        .iter()
        .map(|_| Constraint::Length(row_height))
        .collect();

    let rows = Layout::vertical(constraints).split(area);

    for (i, field) in form.fields.iter().enumerate() {
        let is_focused = i == form.focus;

        let border_color = if field.error.is_some() {
            Color::Red
        } else if is_focused {
            Color::Yellow
        } else {
            Color::DarkGray
        };

        let label = if field.required {
            format!("{} *", field.label)
        } else {
            field.label.clone()
        };

        let block = Block::default()
            .title(label)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color));

        let mut spans = vec![Span::raw(&field.value)];
        if is_focused && field.editable {
            spans.push(Span::styled(
                "\u{2588}",
                Style::default().add_modifier(Modifier::SLOW_BLINK),
            ));
        }

        let paragraph = Paragraph::new(Line::from(spans)).block(block);
        frame.render_widget(paragraph, rows[i]);

        // Error text sits on the bottom border of its row.
        if let Some(ref err) = field.error {
            let error_line = Paragraph::new(Span::styled(err, Style::default().fg(Color::Red)));
            let err_area = Rect {
                x: rows[i].x + 2,
                y: rows[i].y + row_height.saturating_sub(1),
                width: rows[i].width.saturating_sub(4),
                height: 1,
            };
            frame.render_widget(error_line, err_area);
        }
    }
}
