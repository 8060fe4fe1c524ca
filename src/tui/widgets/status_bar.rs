//! Status bar widget: one-line stage progress and control availability.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::{ApplicationForm, Controls, INPUT_STAGES, Stage};

/// Data passed to the status bar widget; decoupled from [`ApplicationForm`]
/// so it can be rendered in isolation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusBarContext {
    /// The stage being shown.
    pub stage: Stage,
    /// Which navigation controls are enabled.
    pub controls: Controls,
}

impl StatusBarContext {
    pub fn from_application(form: &ApplicationForm) -> Self {
        Self {
            stage: form.stage(),
            controls: form.controls(),
        }
    }
}

/// Renders the stage progress line.
///
/// Display format:
/// - Stage 1 or 2: `Step 1 of 3 · Personal Information   Next`
/// - Stage 3:      `Step 3 of 3 · Health and Safety   Back  Submit`
/// - Confirmation: `Submitted`
///
/// Enabled controls are Green; disabled Next is DarkGray. Hidden controls
/// are not shown at all.
#[mutants::skip]
pub fn draw_status_bar(ctx: &StatusBarContext, frame: &mut Frame, area: Rect) {
    let cyan = Style::default().fg(Color::Cyan);
    let green = Style::default().fg(Color::Green);
    let dim = Style::default().fg(Color::DarkGray);

    if ctx.stage.is_terminal() {
        frame.render_widget(Paragraph::new(Span::styled("Submitted", green)), area);
        return;
    }

    let mut spans = vec![Span::styled(
        format!(
            "Step {} of {INPUT_STAGES} · {}",
            ctx.stage.number(),
            ctx.stage.title()
        ),
        cyan,
    )];

    spans.push(Span::raw("   "));
    if ctx.controls.back {
        spans.push(Span::styled("Back  ", green));
    }
    if ctx.stage.next().is_some() {
        let style = if ctx.controls.next { green } else { dim };
        spans.push(Span::styled("Next", style));
    }
    if ctx.controls.submit {
        spans.push(Span::styled("Submit", green));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
