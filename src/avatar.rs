use rand::Rng;

/// Fixed palette for profile avatars.
const PROFILE_COLORS: [&str; 5] = ["Brick", "Lilac", "Peach", "SoftGreen", "Sky"];

/// Cycles through the avatar palette, one color per call.
///
/// Each instance owns its own cursor; the starting offset is randomized
/// once at construction.
#[derive(Debug, Clone)]
pub struct AvatarColorAssigner {
    current_index: usize,
}

impl AvatarColorAssigner {
    pub fn new() -> Self {
        Self {
            current_index: rand::rng().random_range(0..4),
        }
    }

    /// Next color in the palette, wrapping around at the end.
    pub fn next_color(&mut self) -> String {
        let color = PROFILE_COLORS[self.current_index];
        self.current_index = (self.current_index + 1) % PROFILE_COLORS.len();
        color.to_string()
    }
}

impl Default for AvatarColorAssigner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_five_calls_cover_the_palette() {
        let mut assigner = AvatarColorAssigner::new();
        let colors: HashSet<String> = (0..5).map(|_| assigner.next_color()).collect();
        assert_eq!(colors.len(), 5);
    }

    #[test]
    fn test_cycle_wraps_around() {
        let mut assigner = AvatarColorAssigner::new();
        let first_lap: Vec<String> = (0..5).map(|_| assigner.next_color()).collect();
        let second_lap: Vec<String> = (0..5).map(|_| assigner.next_color()).collect();
        assert_eq!(first_lap, second_lap);
    }

    #[test]
    fn test_starting_offset_skips_last_palette_entry() {
        // The starting index is drawn from 0..4, so the last palette color
        // can never be the first one handed out.
        for _ in 0..50 {
            let mut assigner = AvatarColorAssigner::new();
            assert_ne!(assigner.next_color(), "Sky");
        }
    }
}
