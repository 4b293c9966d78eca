use crate::commands::CmdResult;
use crate::model::{Preferences, MAX_FONT_SIZE, MIN_FONT_SIZE};
use crate::notice::Notice;

pub fn toggle_word_wrap(preferences: &mut Preferences) -> CmdResult {
    preferences.word_wrap = !preferences.word_wrap;
    CmdResult::changed().with_preferences(preferences.clone())
}

pub fn cycle_theme(preferences: &mut Preferences) -> CmdResult {
    preferences.theme = preferences.theme.next();
    CmdResult::changed().with_preferences(preferences.clone())
}

/// Moves the font size by `delta`, clamping at the bounds.
///
/// Hitting a bound still stores the clamped size and adds the matching notice.
pub fn change_font_size(preferences: &mut Preferences, delta: i32) -> CmdResult {
    let wanted = i32::from(preferences.font_size).saturating_add(delta);
    let mut result = CmdResult::changed();

    preferences.font_size = if wanted < i32::from(MIN_FONT_SIZE) {
        result.add_notice(Notice::MinFontSize {
            size: MIN_FONT_SIZE,
        });
        MIN_FONT_SIZE
    } else if wanted > i32::from(MAX_FONT_SIZE) {
        result.add_notice(Notice::MaxFontSize {
            size: MAX_FONT_SIZE,
        });
        MAX_FONT_SIZE
    } else {
        wanted as u8
    };

    result.with_preferences(preferences.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Theme;

    #[test]
    fn toggles_wrap() {
        let mut prefs = Preferences::default();
        toggle_word_wrap(&mut prefs);
        assert!(!prefs.word_wrap);
        toggle_word_wrap(&mut prefs);
        assert!(prefs.word_wrap);
    }

    #[test]
    fn cycles_theme() {
        let mut prefs = Preferences::default();
        let result = cycle_theme(&mut prefs);
        assert_eq!(result.preferences.unwrap().theme, Theme::Green);
    }

    #[test]
    fn font_size_moves_within_bounds() {
        let mut prefs = Preferences::default();
        let result = change_font_size(&mut prefs, 1);
        assert_eq!(prefs.font_size, 16);
        assert!(result.notices.is_empty());
    }

    #[test]
    fn font_size_clamps_low() {
        let mut prefs = Preferences {
            font_size: 12,
            ..Preferences::default()
        };
        let result = change_font_size(&mut prefs, -1);
        assert_eq!(prefs.font_size, 12);
        assert_eq!(result.notices, vec![Notice::MinFontSize { size: 12 }]);
    }

    #[test]
    fn font_size_clamps_high() {
        let mut prefs = Preferences::default();
        let result = change_font_size(&mut prefs, 100);
        assert_eq!(prefs.font_size, 24);
        assert_eq!(result.notices, vec![Notice::MaxFontSize { size: 24 }]);
    }

    #[test]
    fn extreme_deltas_clamp_to_matching_bound() {
        let mut prefs = Preferences::default();
        let result = change_font_size(&mut prefs, i32::MAX);
        assert_eq!(prefs.font_size, MAX_FONT_SIZE);
        assert_eq!(result.notices, vec![Notice::MaxFontSize { size: 24 }]);

        let result = change_font_size(&mut prefs, i32::MIN);
        assert_eq!(prefs.font_size, MIN_FONT_SIZE);
        assert_eq!(result.notices, vec![Notice::MinFontSize { size: 12 }]);
    }

    #[test]
    fn out_of_range_stored_size_is_pulled_back() {
        let mut prefs = Preferences {
            font_size: 40,
            ..Preferences::default()
        };
        change_font_size(&mut prefs, 0);
        assert_eq!(prefs.font_size, 24);
    }
}
