//! Session volume
//!
//! Volume is a session-level property: it survives track changes. The public
//! range is 0-100; the media element receives a normalized 0.0-1.0 value.

/// Level plus mute flag
#[derive(Debug, Clone)]
pub struct Volume {
    /// Volume level (0-100)
    level: u8,

    muted: bool,
}

impl Volume {
    /// `level` above 100 is clamped
    pub fn new(level: u8) -> Self {
        Self {
            level: level.min(100),
            muted: false,
        }
    }

    /// Set volume level, clamping to 0-100
    pub fn set_level(&mut self, level: i32) {
        self.level = level.clamp(0, 100) as u8;
    }

    /// Get current volume level (0-100)
    pub fn level(&self) -> u8 {
        self.level
    }

    /// Silence output; the level is kept
    pub fn mute(&mut self) {
        self.muted = true;
    }

    pub fn unmute(&mut self) {
        self.muted = false;
    }

    pub fn toggle_mute(&mut self) {
        self.muted = !self.muted;
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Normalized value for the media element
    ///
    /// Returns 0.0 if muted, otherwise `level / 100`
    pub fn gain(&self) -> f64 {
        if self.muted {
            0.0
        } else {
            f64::from(self.level) / 100.0
        }
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self::new(75)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_out_of_range_levels() {
        let mut volume = Volume::default();

        volume.set_level(150);
        assert_eq!(volume.level(), 100);

        volume.set_level(-10);
        assert_eq!(volume.level(), 0);

        assert_eq!(Volume::new(200).level(), 100);
    }

    #[test]
    fn gain_is_normalized() {
        let mut volume = Volume::new(0);
        assert_eq!(volume.gain(), 0.0);

        volume.set_level(50);
        assert_eq!(volume.gain(), 0.5);

        volume.set_level(100);
        assert_eq!(volume.gain(), 1.0);
    }

    #[test]
    fn mute_preserves_level() {
        let mut volume = Volume::new(60);

        volume.mute();
        assert!(volume.is_muted());
        assert_eq!(volume.gain(), 0.0);
        assert_eq!(volume.level(), 60);

        volume.toggle_mute();
        assert!(!volume.is_muted());
        assert_eq!(volume.gain(), 0.6);
    }
}
