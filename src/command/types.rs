#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    NextSlide,
    PrevSlide,
    FirstSlide,
    LastSlide,
    GotoSlide { index: usize },
    ToggleFullscreen,
    CycleLanguage,
    SetLanguage { code: String },
    OpenGoto,
    Cancel,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionId {
    NextSlide,
    PrevSlide,
    FirstSlide,
    LastSlide,
    GotoSlide,
    ToggleFullscreen,
    CycleLanguage,
    SetLanguage,
    OpenGoto,
    Cancel,
    Quit,
    Input,
}

impl ActionId {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NextSlide => "next-slide",
            Self::PrevSlide => "prev-slide",
            Self::FirstSlide => "first-slide",
            Self::LastSlide => "last-slide",
            Self::GotoSlide => "goto-slide",
            Self::ToggleFullscreen => "toggle-fullscreen",
            Self::CycleLanguage => "cycle-language",
            Self::SetLanguage => "set-language",
            Self::OpenGoto => "open-goto",
            Self::Cancel => "cancel",
            Self::Quit => "quit",
            Self::Input => "input",
        }
    }
}

impl Command {
    pub fn action_id(&self) -> ActionId {
        match self {
            Self::NextSlide => ActionId::NextSlide,
            Self::PrevSlide => ActionId::PrevSlide,
            Self::FirstSlide => ActionId::FirstSlide,
            Self::LastSlide => ActionId::LastSlide,
            Self::GotoSlide { .. } => ActionId::GotoSlide,
            Self::ToggleFullscreen => ActionId::ToggleFullscreen,
            Self::CycleLanguage => ActionId::CycleLanguage,
            Self::SetLanguage { .. } => ActionId::SetLanguage,
            Self::OpenGoto => ActionId::OpenGoto,
            Self::Cancel => ActionId::Cancel,
            Self::Quit => ActionId::Quit,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    Applied,
    Noop,
    QuitRequested,
}

#[cfg(test)]
mod tests {
    use super::{ActionId, Command};

    #[test]
    fn command_action_id_maps_navigation_variants() {
        assert_eq!(Command::NextSlide.action_id(), ActionId::NextSlide);
        assert_eq!(
            Command::GotoSlide { index: 4 }.action_id(),
            ActionId::GotoSlide
        );
        assert_eq!(
            Command::SetLanguage {
                code: "en".to_string()
            }
            .action_id(),
            ActionId::SetLanguage
        );
        assert_eq!(ActionId::ToggleFullscreen.as_str(), "toggle-fullscreen");
    }
}
