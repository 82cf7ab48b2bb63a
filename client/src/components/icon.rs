//! Inline SVG glyphs (Lucide outline set, 24x24 stroke paths).

use leptos::prelude::*;

/// Glyphs used across the landing page and dashboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IconKind {
    Bug,
    ArrowLeft,
    ArrowRight,
    Play,
    Zap,
    Eye,
    Brain,
    Shield,
    Clock,
    Target,
    Upload,
    Scan,
    AlertTriangle,
    CheckCircle,
    Plus,
    Globe,
    LogOut,
    User,
}

impl IconKind {
    /// Stroke path data for the glyph.
    #[must_use]
    pub fn paths(self) -> &'static [&'static str] {
        match self {
            Self::Bug => &[
                "m8 2 1.88 1.88",
                "M14.12 3.88 16 2",
                "M9 7.13v-1a3.003 3.003 0 1 1 6 0v1",
                "M12 20c-3.3 0-6-2.7-6-6v-3a4 4 0 0 1 4-4h4a4 4 0 0 1 4 4v3c0 3.3-2.7 6-6 6",
                "M12 20v-9",
                "M6.53 9C4.6 8.8 3 7.1 3 5",
                "M6 13H2",
                "M3 21c0-2.1 1.7-3.9 3.8-4",
                "M20.97 5c0 2.1-1.6 3.8-3.5 4",
                "M22 13h-4",
                "M17.2 17c2.1.1 3.8 1.9 3.8 4",
            ],
            Self::ArrowLeft => &["m12 19-7-7 7-7", "M19 12H5"],
            Self::ArrowRight => &["M5 12h14", "m12 5 7 7-7 7"],
            Self::Play => &["M6 3l14 9-14 9V3z"],
            Self::Zap => &[
                "M4 14a1 1 0 0 1-.78-1.63l9.9-10.2a.5.5 0 0 1 .86.46l-1.92 6.02A1 1 0 0 0 13 10h7a1 1 0 0 1 .78 1.63l-9.9 10.2a.5.5 0 0 1-.86-.46l1.92-6.02A1 1 0 0 0 11 14z",
            ],
            Self::Eye => &["M2 12s3-7 10-7 10 7 10 7-3 7-10 7-10-7-10-7Z", "M9 12a3 3 0 1 0 6 0a3 3 0 1 0-6 0"],
            Self::Brain => &[
                "M12 5a3 3 0 1 0-5.997.125 4 4 0 0 0-2.526 5.77 4 4 0 0 0 .556 6.588A4 4 0 1 0 12 18Z",
                "M12 5a3 3 0 1 1 5.997.125 4 4 0 0 1 2.526 5.77 4 4 0 0 1-.556 6.588A4 4 0 1 1 12 18Z",
                "M12 5v13",
            ],
            Self::Shield => &[
                "M20 13c0 5-3.5 7.5-7.66 8.95a1 1 0 0 1-.67-.01C7.5 20.5 4 18 4 13V6a1 1 0 0 1 1-1c2 0 4.5-1.2 6.24-2.72a1.17 1.17 0 0 1 1.52 0C14.51 3.81 17 5 19 5a1 1 0 0 1 1 1z",
            ],
            Self::Clock => &["M2 12a10 10 0 1 0 20 0a10 10 0 1 0-20 0", "M12 6v6l4 2"],
            Self::Target => &[
                "M2 12a10 10 0 1 0 20 0a10 10 0 1 0-20 0",
                "M6 12a6 6 0 1 0 12 0a6 6 0 1 0-12 0",
                "M10 12a2 2 0 1 0 4 0a2 2 0 1 0-4 0",
            ],
            Self::Upload => &["M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4", "M17 8l-5-5-5 5", "M12 3v12"],
            Self::Scan => &[
                "M3 7V5a2 2 0 0 1 2-2h2",
                "M17 3h2a2 2 0 0 1 2 2v2",
                "M21 17v2a2 2 0 0 1-2 2h-2",
                "M7 21H5a2 2 0 0 1-2-2v-2",
            ],
            Self::AlertTriangle => &[
                "m21.73 18-8-14a2 2 0 0 0-3.48 0l-8 14A2 2 0 0 0 4 21h16a2 2 0 0 0 1.73-3",
                "M12 9v4",
                "M12 17h.01",
            ],
            Self::CheckCircle => &["M22 11.08V12a10 10 0 1 1-5.93-9.14", "m9 11 3 3L22 4"],
            Self::Plus => &["M5 12h14", "M12 5v14"],
            Self::Globe => &[
                "M2 12a10 10 0 1 0 20 0a10 10 0 1 0-20 0",
                "M12 2a14.5 14.5 0 0 0 0 20 14.5 14.5 0 0 0 0-20",
                "M2 12h20",
            ],
            Self::LogOut => &["M9 21H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h4", "m16 17 5-5-5-5", "M21 12H9"],
            Self::User => &["M19 21v-2a4 4 0 0 0-4-4H9a4 4 0 0 0-4 4v2", "M8 7a4 4 0 1 0 8 0a4 4 0 1 0-8 0"],
        }
    }
}

/// Render `kind` as an inline SVG sized by CSS via `class`.
#[component]
pub fn Icon(kind: IconKind, #[prop(into, optional)] class: String) -> impl IntoView {
    let class = if class.is_empty() { "icon".to_owned() } else { format!("icon {class}") };
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            class=class
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            {kind.paths().iter().map(|d| view! { <path d=*d></path> }).collect_view()}
        </svg>
    }
}
