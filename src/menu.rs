//! Mobile navigation menu state.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    /// The hamburger button was clicked.
    Toggle,
    /// A link inside the menu was followed.
    LinkClicked,
    /// A click landed outside both the button and the menu.
    OutsideClick,
    /// Escape was pressed.
    Escape,
}

/// What the DOM layer has to do after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Open,
    Close,
    Nothing,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }

    pub fn handle(&mut self, event: MenuEvent) -> MenuAction {
        let action = match (*self, event) {
            (MenuState::Closed, MenuEvent::Toggle) => MenuAction::Open,
            (MenuState::Open, MenuEvent::Toggle) => MenuAction::Close,
            (MenuState::Open, MenuEvent::OutsideClick | MenuEvent::Escape) => MenuAction::Close,
            // Link clicks close unconditionally; harmless when already closed.
            (_, MenuEvent::LinkClicked) => MenuAction::Close,
            (MenuState::Closed, _) => MenuAction::Nothing,
        };
        match action {
            MenuAction::Open => *self = MenuState::Open,
            MenuAction::Close => *self = MenuState::Closed,
            MenuAction::Nothing => {}
        }
        action
    }
}
