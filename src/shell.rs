//! Headless navigation state of the main window.
//!
//! The egui view only renders [`Shell`] and forwards clicks to it, so every
//! navigation rule lives here.

use crate::auth::{GateOutcome, LOGIN_ERROR_MESSAGE, LOGIN_ERROR_TITLE, LoginDialog};
use crate::content::{Department, WELCOME_SCREEN};
use crate::error::Result;
use crate::registry::{Screen, ScreenContent, ScreenRegistry};

/// Modal notice waiting to be acknowledged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Notice {
    pub title: &'static str,
    pub message: &'static str,
}

impl Notice {
    /// Notice shown after a credential mismatch.
    pub const LOGIN_FAILED: Notice = Notice {
        title: LOGIN_ERROR_TITLE,
        message: LOGIN_ERROR_MESSAGE,
    };
}

/// Main window state: registered screens, the visible one, the open gate.
#[derive(Debug)]
pub struct Shell {
    registry: ScreenRegistry,
    visible: Screen,
    login: Option<LoginDialog>,
    notice: Option<Notice>,
}

impl Shell {
    /// Register all screens and show the welcome screen.
    pub fn new() -> Result<Self> {
        Ok(Self {
            registry: ScreenRegistry::standard()?,
            visible: Screen::Welcome,
            login: None,
            notice: None,
        })
    }

    /// Currently visible screen.
    pub fn visible_screen(&self) -> Screen {
        self.visible
    }

    /// Content of the currently visible screen.
    pub fn visible_content(&self) -> Option<&ScreenContent> {
        self.registry.content(self.visible)
    }

    /// Open login prompt, if any.
    pub fn pending_login(&self) -> Option<&LoginDialog> {
        self.login.as_ref()
    }

    /// Mutable access to the open login prompt's inputs.
    pub fn pending_login_mut(&mut self) -> Option<&mut LoginDialog> {
        self.login.as_mut()
    }

    /// Notice waiting to be acknowledged.
    pub fn notice(&self) -> Option<Notice> {
        self.notice
    }

    /// Whether a modal currently blocks the rest of the window.
    pub fn is_modal_open(&self) -> bool {
        self.login.is_some() || self.notice.is_some()
    }

    /// Open the access gate for a department.
    ///
    /// The visible screen only changes once [`Shell::submit_login`] grants access.
    /// A prompt that is already open is replaced with an empty one.
    pub fn select_department(&mut self, department: Department) {
        tracing::info!("Access requested for {}", department.name());
        self.login = Some(LoginDialog::new(department));
    }

    /// Select a department by its screen name. Unknown names are ignored.
    pub fn select_department_by_name(&mut self, name: &str) -> bool {
        match Department::from_name(name) {
            Some(department) => {
                self.select_department(department);
                true
            }
            None => {
                tracing::warn!("Ignoring selection of unknown department: {}", name);
                false
            }
        }
    }

    /// Submit the open prompt.
    ///
    /// On a match the prompt closes and the gated screen becomes visible. On a
    /// mismatch the login error notice is raised and the prompt stays open for
    /// another attempt. Returns `None` when no prompt is open.
    pub fn submit_login(&mut self) -> Option<GateOutcome> {
        let dialog = self.login.as_ref()?;
        let department = dialog.department;
        let outcome = dialog.check();

        match outcome {
            GateOutcome::Granted => {
                tracing::info!("Access granted to {}", department.name());
                self.login = None;
                self.show(department.name());
            }
            GateOutcome::Denied => {
                tracing::warn!("Access denied to {}: invalid credentials", department.name());
                self.notice = Some(Notice::LOGIN_FAILED);
            }
        }

        Some(outcome)
    }

    /// Dismiss the open prompt without a notice.
    pub fn cancel_login(&mut self) {
        if let Some(dialog) = self.login.take() {
            tracing::info!("Login cancelled for {}", dialog.department.name());
        }
    }

    /// Acknowledge the current notice.
    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// Return to the welcome screen unconditionally.
    pub fn go_home(&mut self) {
        self.show(WELCOME_SCREEN);
    }

    /// Switch to a registered screen by name.
    fn show(&mut self, name: &str) -> bool {
        match self.registry.lookup(name) {
            Ok(screen) => {
                if self.visible != screen {
                    tracing::info!("Showing screen: {}", name);
                }
                self.visible = screen;
                true
            }
            Err(e) => {
                tracing::warn!("{}", e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enter(shell: &mut Shell, username: &str, password: &str) {
        let dialog = shell.pending_login_mut().expect("login prompt open");
        dialog.username = username.to_string();
        dialog.password = password.to_string();
    }

    #[test]
    fn test_starts_on_welcome() {
        let shell = Shell::new().unwrap();
        assert_eq!(shell.visible_screen(), Screen::Welcome);
        assert!(!shell.is_modal_open());
        assert_eq!(shell.visible_content().unwrap().title, "Welcome to LogiSphere");
    }

    #[test]
    fn test_select_opens_gate_without_switching() {
        let mut shell = Shell::new().unwrap();
        shell.select_department(Department::Fleet);

        assert_eq!(shell.visible_screen(), Screen::Welcome);
        assert_eq!(shell.pending_login().unwrap().department, Department::Fleet);
        assert!(shell.is_modal_open());
    }

    #[test]
    fn test_correct_credentials_switch_screen() {
        let mut shell = Shell::new().unwrap();
        shell.select_department(Department::Fleet);
        enter(&mut shell, "admin", "pass123");

        assert_eq!(shell.submit_login(), Some(GateOutcome::Granted));
        assert_eq!(shell.visible_screen(), Screen::Department(Department::Fleet));
        assert!(shell.pending_login().is_none());
        assert!(shell.notice().is_none());
    }

    #[test]
    fn test_wrong_password_keeps_screen_and_raises_notice() {
        let mut shell = Shell::new().unwrap();
        shell.select_department(Department::Fleet);
        enter(&mut shell, "admin", "wrong");

        assert_eq!(shell.submit_login(), Some(GateOutcome::Denied));
        assert_eq!(shell.visible_screen(), Screen::Welcome);
        assert_eq!(shell.notice(), Some(Notice::LOGIN_FAILED));
        // Prompt stays open for a retry.
        assert!(shell.pending_login().is_some());
    }

    #[test]
    fn test_retry_after_failure() {
        let mut shell = Shell::new().unwrap();
        shell.select_department(Department::Warehouse);
        enter(&mut shell, "admin", "nope");
        shell.submit_login();
        shell.dismiss_notice();

        enter(&mut shell, "admin", "pass123");
        assert_eq!(shell.submit_login(), Some(GateOutcome::Granted));
        assert_eq!(shell.visible_screen(), Screen::Department(Department::Warehouse));
    }

    #[test]
    fn test_cancel_keeps_screen_without_notice() {
        let mut shell = Shell::new().unwrap();
        shell.select_department(Department::Customer);
        enter(&mut shell, "admin", "pass123");
        shell.cancel_login();

        assert_eq!(shell.visible_screen(), Screen::Welcome);
        assert!(shell.notice().is_none());
        assert!(!shell.is_modal_open());
    }

    #[test]
    fn test_submit_without_prompt() {
        let mut shell = Shell::new().unwrap();
        assert_eq!(shell.submit_login(), None);
        assert_eq!(shell.visible_screen(), Screen::Welcome);
    }

    #[test]
    fn test_reselect_resets_fields() {
        let mut shell = Shell::new().unwrap();
        shell.select_department(Department::Inventory);
        enter(&mut shell, "admin", "pass123");
        shell.select_department(Department::Supplier);

        let dialog = shell.pending_login().unwrap();
        assert_eq!(dialog.department, Department::Supplier);
        assert!(dialog.username.is_empty());
        assert!(dialog.password.is_empty());
    }

    #[test]
    fn test_go_home() {
        let mut shell = Shell::new().unwrap();
        shell.select_department(Department::Inventory);
        enter(&mut shell, "admin", "pass123");
        shell.submit_login();
        assert_ne!(shell.visible_screen(), Screen::Welcome);

        shell.go_home();
        assert_eq!(shell.visible_screen(), Screen::Welcome);

        shell.go_home();
        assert_eq!(shell.visible_screen(), Screen::Welcome);
    }

    #[test]
    fn test_select_by_name() {
        let mut shell = Shell::new().unwrap();
        assert!(!shell.select_department_by_name("WELCOME"));
        assert!(shell.pending_login().is_none());

        assert!(shell.select_department_by_name("Customer Options"));
        assert_eq!(shell.pending_login().unwrap().department, Department::Customer);
    }
}
