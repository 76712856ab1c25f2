use glam::DVec3;

use crate::catalog::solar::SUN_NAME;

/// The star's configuration: a name for selection matching and a fixed
/// position that is the orbital center for every top-level body. Settable —
/// nothing in the simulation assumes the star sits at the origin.
#[derive(Debug, Clone, PartialEq)]
pub struct SunSettings {
    pub name: String,
    pub position: DVec3,
}

impl Default for SunSettings {
    fn default() -> Self {
        Self {
            name: SUN_NAME.to_owned(),
            position: DVec3::ZERO,
        }
    }
}

/// Externally driven selection state. Set by the embedding UI between ticks;
/// the core reads it and never mutates it on its own.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    /// Nothing selected — the camera frames the star from its home offset.
    #[default]
    None,
    /// The star itself.
    Star,
    /// A named body. The name may refer to a body without a published
    /// position yet; framing defers until one appears.
    Body(String),
}

impl Selection {
    /// Map a raw name (or none) from the UI into a selection state.
    pub fn from_name(name: Option<&str>, star_name: &str) -> Self {
        match name {
            None => Selection::None,
            Some(n) if n == star_name => Selection::Star,
            Some(n) => Selection::Body(n.to_owned()),
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Selection::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_mapping() {
        assert_eq!(Selection::from_name(None, SUN_NAME), Selection::None);
        assert_eq!(Selection::from_name(Some("Sun"), SUN_NAME), Selection::Star);
        assert_eq!(
            Selection::from_name(Some("Earth"), SUN_NAME),
            Selection::Body("Earth".to_owned())
        );
    }
}
