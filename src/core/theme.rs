/// Light/dark theme resolution, independent of the DOM.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

pub const STORAGE_KEY: &str = "ogctz-theme";
pub const DARK_QUERY: &str = "(prefers-color-scheme: dark)";

/// One favicon `<link>` kept in sync with the theme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FaviconLink {
    pub id: &'static str,
    pub file: &'static str,
    pub rel: &'static str,
    pub mime: Option<&'static str>,
}

pub const FAVICON_LINKS: [FaviconLink; 4] = [
    FaviconLink {
        id: "icon16",
        file: "favicon-16x16.png",
        rel: "icon",
        mime: Some("image/png"),
    },
    FaviconLink {
        id: "icon32",
        file: "favicon-32x32.png",
        rel: "icon",
        mime: Some("image/png"),
    },
    FaviconLink {
        id: "icon-ico",
        file: "favicon.ico",
        rel: "icon",
        mime: Some("image/x-icon"),
    },
    FaviconLink {
        id: "apple-touch",
        file: "apple-touch-icon.png",
        rel: "apple-touch-icon",
        mime: None,
    },
];

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(s: &str) -> Option<Theme> {
        match s.trim() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn from_system(prefers_dark: bool) -> Theme {
        if prefers_dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// A valid stored preference wins over the system setting.
    pub fn resolve(stored: Option<&str>, system_prefers_dark: bool) -> Theme {
        stored
            .and_then(Theme::parse)
            .unwrap_or_else(|| Theme::from_system(system_prefers_dark))
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    /// (background, text) colours applied to `<body>`.
    pub fn body_colors(self) -> (&'static str, &'static str) {
        match self {
            Theme::Light => ("#ffffff", "#0f172a"),
            Theme::Dark => ("#0f172a", "#f8fafc"),
        }
    }

    pub fn favicon_dir(self) -> &'static str {
        match self {
            Theme::Light => "/static/img/favicons/fav_org",
            Theme::Dark => "/static/img/favicons/fav_white",
        }
    }

    pub fn favicon_href(self, link: &FaviconLink) -> String {
        format!("{}/{}", self.favicon_dir(), link.file)
    }

    /// Icon class shown on the toggle button: the moon while dark.
    pub fn icon_class(self) -> &'static str {
        match self {
            Theme::Light => "sun-icon",
            Theme::Dark => "moon-icon",
        }
    }
}
