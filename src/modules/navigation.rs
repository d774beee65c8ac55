// src/modules/navigation.rs

/// Top-level screens. Any screen can be reached from any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Chat,
    Bookmarks,
    Verified,
}

impl View {
    pub fn all() -> [View; 3] {
        [View::Chat, View::Bookmarks, View::Verified]
    }

    pub fn title(&self) -> &str {
        match self {
            View::Chat => "Chat",
            View::Bookmarks => "Bookmarks",
            View::Verified => "Verified conversations",
        }
    }

    pub fn shortcut(&self) -> &str {
        match self {
            View::Chat => "F1",
            View::Bookmarks => "F2",
            View::Verified => "F3",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_in_chat() {
        assert_eq!(View::default(), View::Chat);
        assert_eq!(View::all()[0], View::Chat);
    }
}
