use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{Frame, Terminal};
use tracing::{debug, info};

use crate::model::{ApplicationForm, SUBMIT_BLOCKED_MESSAGE, SubmitOutcome, ValidationMode};

use super::action::Action;
use super::error::AppError;
use super::screens::{ApplicationState, HelpState, draw_application, draw_help};

/// All screens the app can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    /// The stepped application form.
    Application,
    /// Show keybinding help.
    Help,
}

/// Top-level application state.
pub struct App {
    screen: Screen,
    form: ApplicationForm,
    application: ApplicationState,
    help: HelpState,
    should_quit: bool,
}

impl App {
    /// Creates a new `App` with an empty application on its first stage.
    pub fn new(mode: ValidationMode) -> Self {
        Self {
            screen: Screen::Application,
            form: ApplicationForm::new(mode),
            application: ApplicationState::new(),
            help: HelpState::new(),
            should_quit: false,
        }
    }

    /// Main event loop: draw → read event → dispatch → check quit.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    pub fn run<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<(), AppError> {
        info!(mode = %self.form.mode(), "application form opened");
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        info!(stage = self.form.stage().number(), "application form closed");
        Ok(())
    }

    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        match self.screen {
            Screen::Application => draw_application(&self.application, &self.form, frame, area),
            Screen::Help => draw_help(&self.help, self.form.stage(), frame, area),
        }
    }

    /// Handles a key event: global keys first, then screen-specific.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        if key.code == KeyCode::F(1) && self.screen != Screen::Help {
            self.help.reset();
            self.screen = Screen::Help;
            return;
        }

        let action = match self.screen {
            Screen::Application => self.application.handle_key(key, &self.form),
            Screen::Help => self.help.handle_key(key),
        };
        self.apply(action);
    }

    fn apply(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::Navigate(screen) => self.screen = screen,
            Action::Change(input) => self.form.change(input),
            Action::Blur(field) => self.form.blur(field),
            Action::SelectCountry(name) => self.form.select_country(name),
            Action::Next => {
                if self.form.next().is_some() {
                    self.application.reset_focus();
                }
            }
            Action::Back => {
                if self.form.back().is_some() {
                    self.application.reset_focus();
                }
            }
            Action::Submit => match self.form.submit() {
                SubmitOutcome::Submitted => self.application.reset_focus(),
                SubmitOutcome::Blocked => self.application.set_notice(SUBMIT_BLOCKED_MESSAGE),
                SubmitOutcome::Unavailable => debug!("submit ignored outside final stage"),
            },
            Action::Quit => self.should_quit = true,
        }
    }

    /// Returns the current screen.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Returns `true` if the app should quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Returns the application being filled in.
    pub fn form(&self) -> &ApplicationForm {
        &self.form
    }

    /// Returns the application screen's view state.
    pub fn application(&self) -> &ApplicationState {
        &self.application
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEventState, KeyModifiers};

    use super::*;
    use crate::model::{Field, Stage};

    fn make_app() -> App {
        App::new(ValidationMode::Touched)
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn ctrl(ch: char) -> KeyEvent {
        KeyEvent {
            code: KeyCode::Char(ch),
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn release(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        }
    }

    fn type_string(app: &mut App, s: &str) {
        for ch in s.chars() {
            app.handle_key(press(KeyCode::Char(ch)));
        }
    }

    fn tab(app: &mut App) {
        app.handle_key(press(KeyCode::Tab));
    }

    fn fill_personal_info(app: &mut App) {
        type_string(app, "Jane Doe");
        tab(app);
        type_string(app, "1990-01-01");
        tab(app);
        type_string(app, "fran");
        app.handle_key(press(KeyCode::Enter));
        tab(app);
        type_string(app, "jane@doe.com");
        tab(app);
        type_string(app, "1234567890");
    }

    fn fill_travel(app: &mut App) {
        type_string(app, "2030-07-01");
        tab(app);
        type_string(app, "2030-08-01");
    }

    fn to_health_and_safety(app: &mut App) {
        fill_personal_info(app);
        app.handle_key(press(KeyCode::Enter));
        fill_travel(app);
        app.handle_key(press(KeyCode::Enter));
        assert_eq!(app.form().stage(), Stage::HealthAndSafety);
    }

    #[test]
    fn new_starts_on_first_stage() {
        let app = make_app();
        assert_eq!(app.screen(), Screen::Application);
        assert_eq!(app.form().stage(), Stage::PersonalInfo);
        assert!(!app.should_quit());
    }

    #[test]
    fn ctrl_c_quits() {
        let mut app = make_app();
        app.handle_key(ctrl('c'));
        assert!(app.should_quit());
    }

    #[test]
    fn esc_on_first_stage_quits() {
        let mut app = make_app();
        app.handle_key(press(KeyCode::Esc));
        assert!(app.should_quit());
    }

    #[test]
    fn release_events_are_ignored() {
        let mut app = make_app();
        app.handle_key(release(KeyCode::Esc));
        app.handle_key(release(KeyCode::Char('x')));
        assert!(!app.should_quit());
        assert_eq!(app.form().record().full_name, "");
    }

    #[test]
    fn f1_opens_help_and_q_returns() {
        let mut app = make_app();
        app.handle_key(press(KeyCode::F(1)));
        assert_eq!(app.screen(), Screen::Help);
        app.handle_key(press(KeyCode::Char('q')));
        assert_eq!(app.screen(), Screen::Application);
        assert!(!app.should_quit());
        assert_eq!(app.form().record().full_name, "");
    }

    #[test]
    fn typing_updates_record_and_errors() {
        let mut app = make_app();
        type_string(&mut app, " ");
        assert_eq!(app.form().record().full_name, " ");
        assert_eq!(
            app.form().error(Field::FullName),
            Some("Full Name is required.")
        );
        type_string(&mut app, "J");
        assert_eq!(app.form().error(Field::FullName), None);
    }

    #[test]
    fn leaving_an_untouched_field_validates_it() {
        let mut app = make_app();
        tab(&mut app);
        assert_eq!(
            app.form().error(Field::FullName),
            Some("Full Name is required.")
        );
    }

    #[test]
    fn next_blocked_until_stage_complete() {
        let mut app = make_app();
        type_string(&mut app, "Jane Doe");
        app.handle_key(press(KeyCode::Enter));
        assert_eq!(app.form().stage(), Stage::PersonalInfo);
    }

    #[test]
    fn country_picked_through_popup() {
        let mut app = make_app();
        fill_personal_info(&mut app);
        assert_eq!(app.form().country(), "France");
        assert_eq!(app.form().record().country, "France");
    }

    #[test]
    fn next_moves_stage_and_resets_focus() {
        let mut app = make_app();
        fill_personal_info(&mut app);
        app.handle_key(press(KeyCode::Enter));
        assert_eq!(app.form().stage(), Stage::TravelPreferences);
        assert_eq!(app.application().focus(), 0);
    }

    #[test]
    fn back_keeps_values() {
        let mut app = make_app();
        fill_personal_info(&mut app);
        app.handle_key(press(KeyCode::Enter));
        app.handle_key(press(KeyCode::Esc));
        assert_eq!(app.form().stage(), Stage::PersonalInfo);
        assert_eq!(app.form().record().email, "jane@doe.com");
        assert!(!app.should_quit());
    }

    #[test]
    fn blocked_submit_shows_notice_and_stays() {
        let mut app = make_app();
        to_health_and_safety(&mut app);
        tab(&mut app);
        type_string(&mut app, "John Doe");
        app.handle_key(press(KeyCode::Enter));
        assert_eq!(app.form().stage(), Stage::HealthAndSafety);
        assert_eq!(app.application().notice(), Some(SUBMIT_BLOCKED_MESSAGE));

        // The next key only dismisses the notice.
        app.handle_key(press(KeyCode::Esc));
        assert_eq!(app.application().notice(), None);
        assert_eq!(app.form().stage(), Stage::HealthAndSafety);
    }

    #[test]
    fn full_application_reaches_confirmation() {
        let mut app = make_app();
        to_health_and_safety(&mut app);
        type_string(&mut app, " ");
        tab(&mut app);
        type_string(&mut app, "John Doe");
        app.handle_key(press(KeyCode::Enter));
        assert_eq!(app.form().stage(), Stage::Confirmation);
        assert!(app.form().record().health_declaration);

        app.handle_key(press(KeyCode::Esc));
        assert!(app.should_quit());
    }

    #[test]
    fn eager_mode_shows_errors_on_mount() {
        let app = App::new(ValidationMode::Eager);
        assert_eq!(
            app.form().error(Field::Email),
            Some("Please enter a valid email address.")
        );
    }
}
