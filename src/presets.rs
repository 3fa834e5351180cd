//! The game's sound effects.

use std::path::{Path, PathBuf};

use crate::SynthesisRequest;

/// Directory, relative to the working directory, that the effects are written to.
pub const OUTPUT_DIR: &str = "sounds";

/// A named sound effect and the file it is saved as.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SoundEffect {
    pub name: &'static str,
    pub file_name: &'static str,
    pub request: SynthesisRequest,
}

impl SoundEffect {
    /// Location of this effect's file inside `dir`.
    ///
    /// ```
    /// use dirge::presets::DEATH;
    /// use std::path::Path;
    ///
    /// assert_eq!(DEATH.path_in("sounds"), Path::new("sounds/death.wav"));
    /// ```
    pub fn path_in(&self, dir: impl AsRef<Path>) -> PathBuf {
        dir.as_ref().join(self.file_name)
    }
}

/// Short falling blip played when the player is hit.
pub const DEATH: SoundEffect = SoundEffect {
    name: "death",
    file_name: "death.wav",
    request: SynthesisRequest::new(220.0, 55.0, 0.18, 0.25),
};

/// Longer, quieter fall played when the last life is lost.
pub const GAME_OVER: SoundEffect = SoundEffect {
    name: "gameover",
    file_name: "gameover.wav",
    request: SynthesisRequest::new(330.0, 55.0, 0.55, 0.2),
};

/// Every effect, in the order they are generated.
pub const ALL: [SoundEffect; 2] = [DEATH, GAME_OVER];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render;

    #[test]
    fn test_file_names_are_distinct() {
        assert_ne!(DEATH.file_name, GAME_OVER.file_name);
        assert_eq!(ALL.len(), 2);
    }

    #[test]
    fn test_game_over_is_longer_and_quieter() {
        assert!(GAME_OVER.request.duration > DEATH.request.duration);
        assert!(GAME_OVER.request.volume < DEATH.request.volume);
    }

    #[test]
    fn test_rendered_lengths() {
        assert_eq!(render(&DEATH.request).len(), 3969);
        assert_eq!(render(&GAME_OVER.request).len(), 12127);
    }

    #[test]
    fn test_game_over_peak() {
        // 0.2 * 32767 = 6553.4
        assert_eq!(render(&GAME_OVER.request).peak(), 6553);
    }
}
