//! Named screens that can be swapped into the content region.

use crate::content::{self, Department, WELCOME_SCREEN};
use crate::error::{AppError, Result};

/// A screen the content region can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Screen {
    #[default]
    Welcome,
    Department(Department),
}

impl Screen {
    /// Registered screen name.
    pub fn name(&self) -> &'static str {
        match self {
            Screen::Welcome => WELCOME_SCREEN,
            Screen::Department(dept) => dept.name(),
        }
    }
}

/// Renderable content of a screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenContent {
    pub title: String,
    pub subtitle: Option<&'static str>,
    pub body: &'static str,
}

impl ScreenContent {
    /// Content for one of the built-in screens.
    pub fn for_screen(screen: Screen) -> Self {
        match screen {
            Screen::Welcome => Self {
                title: content::WELCOME_TITLE.to_string(),
                subtitle: Some(content::WELCOME_SUBTITLE),
                body: content::WELCOME_TIPS,
            },
            Screen::Department(dept) => Self {
                title: dept.title(),
                subtitle: None,
                body: content::content_for(dept.name()),
            },
        }
    }
}

/// Screens registered under unique names, in registration order.
#[derive(Debug, Clone, Default)]
pub struct ScreenRegistry {
    screens: Vec<(Screen, ScreenContent)>,
}

impl ScreenRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the welcome screen and all five department screens.
    pub fn standard() -> Result<Self> {
        let mut registry = Self::new();
        for screen in std::iter::once(Screen::Welcome).chain(Department::ALL.into_iter().map(Screen::Department)) {
            registry.register(screen, ScreenContent::for_screen(screen))?;
        }
        Ok(registry)
    }

    /// Register a screen. Names must be unique.
    pub fn register(&mut self, screen: Screen, content: ScreenContent) -> Result<()> {
        if self.contains(screen.name()) {
            return Err(AppError::duplicate_screen(screen.name()));
        }
        self.screens.push((screen, content));
        Ok(())
    }

    /// Whether a screen with this name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.lookup(name).is_ok()
    }

    /// Resolve a screen by name.
    pub fn lookup(&self, name: &str) -> Result<Screen> {
        self.screens
            .iter()
            .map(|(s, _)| *s)
            .find(|s| s.name() == name)
            .ok_or_else(|| AppError::unknown_screen(name))
    }

    /// Content for a registered screen.
    pub fn content(&self, screen: Screen) -> Option<&ScreenContent> {
        self.screens.iter().find(|(s, _)| *s == screen).map(|(_, c)| c)
    }

    /// Registered screen names in order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.screens.iter().map(|(s, _)| s.name())
    }
}
