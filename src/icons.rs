//! Icon service for managing different icon themes
//!
//! This module provides a centralized way to manage icons throughout the
//! application, supporting different themes like emoji, Unicode, and ASCII
//! fallbacks. Views ask for icons either through the typed accessors or by
//! name; unknown names render a fallback glyph instead of failing.

use serde::{Deserialize, Serialize};

/// Icon theme variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconTheme {
    /// Emoji icons (colorful, modern look)
    Emoji,
    /// Unicode symbols (clean, native look)
    Unicode,
    /// ASCII characters (maximum compatibility)
    Ascii,
}

impl Default for IconTheme {
    fn default() -> Self {
        Self::Ascii
    }
}

/// Notification icons, one per toast kind
#[derive(Debug, Clone)]
pub struct ToastIcons {
    pub info: &'static str,
    pub success: &'static str,
    pub error: &'static str,
}

/// UI element icons
#[derive(Debug, Clone)]
pub struct UiIcons {
    pub gallery_title: &'static str,
    pub users_title: &'static str,
    pub error: &'static str,
    pub info: &'static str,
    pub warning: &'static str,
    pub success: &'static str,
}

/// Gallery item icons
#[derive(Debug, Clone)]
pub struct GalleryIcons {
    pub image: &'static str,
    pub primary: &'static str,
    pub upload: &'static str,
}

/// User list icons
#[derive(Debug, Clone)]
pub struct UserIcons {
    pub invited: &'static str,
    pub active: &'static str,
    pub invite: &'static str,
}

/// Complete icon set for a specific theme
#[derive(Debug, Clone)]
pub struct IconSet {
    pub toast: ToastIcons,
    pub ui: UiIcons,
    pub gallery: GalleryIcons,
    pub user: UserIcons,
}

/// Icon service for managing themes and providing icons
#[derive(Debug, Clone)]
pub struct IconService {
    current_theme: IconTheme,
}

impl Default for IconService {
    fn default() -> Self {
        Self::new(IconTheme::default())
    }
}

impl IconService {
    /// Create a new icon service with the specified theme
    #[must_use]
    pub fn new(theme: IconTheme) -> Self {
        Self { current_theme: theme }
    }

    /// Get the current theme
    #[must_use]
    pub fn theme(&self) -> IconTheme {
        self.current_theme
    }

    /// Set the current theme
    pub fn set_theme(&mut self, theme: IconTheme) {
        self.current_theme = theme;
    }

    /// Cycle to the next icon theme in the sequence: Ascii -> Unicode -> Emoji -> Ascii
    pub fn cycle_icon_theme(&mut self) {
        self.current_theme = match self.current_theme {
            IconTheme::Ascii => IconTheme::Unicode,
            IconTheme::Unicode => IconTheme::Emoji,
            IconTheme::Emoji => IconTheme::Ascii,
        };
    }

    /// Get the complete icon set for the current theme
    #[must_use]
    pub fn icons(&self) -> IconSet {
        match self.current_theme {
            IconTheme::Emoji => Self::emoji_icons(),
            IconTheme::Unicode => Self::unicode_icons(),
            IconTheme::Ascii => Self::ascii_icons(),
        }
    }

    /// Get emoji icon set
    fn emoji_icons() -> IconSet {
        IconSet {
            toast: ToastIcons {
                info: "💡",
                success: "✅",
                error: "❌",
            },
            ui: UiIcons {
                gallery_title: "🖼️",
                users_title: "👥",
                error: "❌",
                info: "💡",
                warning: "⚠️",
                success: "✅",
            },
            gallery: GalleryIcons {
                image: "🖼️",
                primary: "⭐",
                upload: "📤",
            },
            user: UserIcons {
                invited: "✉️",
                active: "👤",
                invite: "➕",
            },
        }
    }

    /// Get Unicode icon set
    fn unicode_icons() -> IconSet {
        IconSet {
            toast: ToastIcons {
                info: "ⓘ",
                success: "✓",
                error: "✗",
            },
            ui: UiIcons {
                gallery_title: "▣",
                users_title: "◆",
                error: "✗",
                info: "ⓘ",
                warning: "⚠",
                success: "✓",
            },
            gallery: GalleryIcons {
                image: "▣",
                primary: "★",
                upload: "↥",
            },
            user: UserIcons {
                invited: "✉",
                active: "●",
                invite: "+",
            },
        }
    }

    /// Get ASCII icon set
    fn ascii_icons() -> IconSet {
        IconSet {
            toast: ToastIcons {
                info: "i",
                success: "+",
                error: "X",
            },
            ui: UiIcons {
                gallery_title: ">",
                users_title: "#",
                error: "X",
                info: "i",
                warning: "!",
                success: "+",
            },
            gallery: GalleryIcons {
                image: "[]",
                primary: "*",
                upload: "^",
            },
            user: UserIcons {
                invited: "?",
                active: "o",
                invite: "+",
            },
        }
    }

    /// Look up an icon by name.
    ///
    /// Unknown names log a warning and resolve to a theme-appropriate
    /// fallback glyph rather than failing, so a view never renders nothing.
    #[must_use]
    pub fn named(&self, name: &str) -> &'static str {
        let set = self.icons();
        match name {
            "image" => set.gallery.image,
            "primary" => set.gallery.primary,
            "upload" => set.gallery.upload,
            "user" => set.user.active,
            "invited" => set.user.invited,
            "invite" => set.user.invite,
            "info" => set.ui.info,
            "success" => set.ui.success,
            "warning" => set.ui.warning,
            "error" => set.ui.error,
            "gallery" => set.ui.gallery_title,
            "users" => set.ui.users_title,
            _ => {
                log::warn!("Icon \"{}\" not found, using fallback", name);
                self.fallback()
            }
        }
    }

    /// Fallback glyph for unknown icon names
    #[must_use]
    pub fn fallback(&self) -> &'static str {
        match self.current_theme {
            IconTheme::Emoji => "❓",
            IconTheme::Unicode => "◌",
            IconTheme::Ascii => "?",
        }
    }

    /// Convenience methods for commonly used icons
    #[must_use]
    pub fn error(&self) -> &'static str {
        self.icons().ui.error
    }

    #[must_use]
    pub fn info(&self) -> &'static str {
        self.icons().ui.info
    }

    #[must_use]
    pub fn warning(&self) -> &'static str {
        self.icons().ui.warning
    }

    #[must_use]
    pub fn success(&self) -> &'static str {
        self.icons().ui.success
    }

    #[must_use]
    pub fn gallery_title(&self) -> &'static str {
        self.icons().ui.gallery_title
    }

    #[must_use]
    pub fn users_title(&self) -> &'static str {
        self.icons().ui.users_title
    }

    #[must_use]
    pub fn primary_marker(&self) -> &'static str {
        self.icons().gallery.primary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme() {
        let service = IconService::default();
        assert_eq!(service.theme(), IconTheme::Ascii);
    }

    #[test]
    fn test_theme_switching() {
        let mut service = IconService::new(IconTheme::Emoji);
        assert_eq!(service.theme(), IconTheme::Emoji);

        service.set_theme(IconTheme::Ascii);
        assert_eq!(service.theme(), IconTheme::Ascii);
    }

    #[test]
    fn test_named_lookup() {
        let service = IconService::new(IconTheme::Unicode);
        assert_eq!(service.named("primary"), "★");
        assert_eq!(service.named("error"), "✗");
    }

    #[test]
    fn test_named_lookup_falls_back() {
        let service = IconService::new(IconTheme::Ascii);
        assert_eq!(service.named("no-such-icon"), "?");

        let service = IconService::new(IconTheme::Unicode);
        assert_eq!(service.named("no-such-icon"), "◌");
    }

    #[test]
    fn test_theme_cycling() {
        let mut service = IconService::new(IconTheme::Ascii);
        assert_eq!(service.theme(), IconTheme::Ascii);

        service.cycle_icon_theme();
        assert_eq!(service.theme(), IconTheme::Unicode);

        service.cycle_icon_theme();
        assert_eq!(service.theme(), IconTheme::Emoji);

        service.cycle_icon_theme();
        assert_eq!(service.theme(), IconTheme::Ascii);
    }
}
