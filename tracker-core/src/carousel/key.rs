//! Keyboard bindings.

/// Keys the carousel reacts to. Everything else is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Left,
    Right,
}

impl NavKey {
    /// Map a DOM `KeyboardEvent.key` value.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(Self::Left),
            "ArrowRight" => Some(Self::Right),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_arrow_keys() {
        assert_eq!(NavKey::from_key("ArrowLeft"), Some(NavKey::Left));
        assert_eq!(NavKey::from_key("ArrowRight"), Some(NavKey::Right));
    }

    #[test]
    fn ignores_other_keys() {
        for key in ["ArrowUp", "ArrowDown", "Enter", " ", "arrowleft", ""] {
            assert_eq!(NavKey::from_key(key), None, "{key:?}");
        }
    }
}
