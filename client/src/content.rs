//! Literal marketing copy rendered by the landing page sections.
//!
//! DESIGN
//! ======
//! Sections iterate these arrays for layout; nothing here is fetched or
//! computed. Keeping copy out of the components lets tests check the shape
//! of each section without rendering it.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

use crate::components::icon::IconKind;

/// Accent colour applied to a card's icon.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Primary,
    Accent,
}

impl Tone {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Primary => "tone--primary",
            Self::Accent => "tone--accent",
        }
    }
}

/// A headline number in the hero's stats row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeroStat {
    pub value: &'static str,
    pub label: &'static str,
}

/// One card of the feature grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Feature {
    pub icon: IconKind,
    pub title: &'static str,
    pub description: &'static str,
    pub tone: Tone,
}

/// One card of the how-it-works sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Step {
    pub icon: IconKind,
    pub number: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub tone: Tone,
}

pub const HERO_STATS: [HeroStat; 3] = [
    HeroStat { value: "99.2%", label: "Bug Detection" },
    HeroStat { value: "50ms", label: "Avg Response" },
    HeroStat { value: "10,000+", label: "Apps Tested" },
];

pub const FEATURES: [Feature; 6] = [
    Feature {
        icon: IconKind::Brain,
        title: "AI-Powered Detection",
        description: "Advanced machine learning algorithms trained on millions of UI patterns to detect even the subtlest visual inconsistencies.",
        tone: Tone::Primary,
    },
    Feature {
        icon: IconKind::Eye,
        title: "Visual Regression Testing",
        description: "Automatically compare screenshots across deployments to catch unintended visual changes before they reach production.",
        tone: Tone::Accent,
    },
    Feature {
        icon: IconKind::Zap,
        title: "Real-time Analysis",
        description: "Get instant feedback during development with our live preview integration. Fix bugs as you code, not after deployment.",
        tone: Tone::Primary,
    },
    Feature {
        icon: IconKind::Shield,
        title: "Cross-Browser Coverage",
        description: "Test across all major browsers and devices simultaneously. Ensure consistent user experience everywhere.",
        tone: Tone::Accent,
    },
    Feature {
        icon: IconKind::Clock,
        title: "Automated Workflows",
        description: "Integrate seamlessly into your CI/CD pipeline. Run visual tests on every commit and pull request automatically.",
        tone: Tone::Primary,
    },
    Feature {
        icon: IconKind::Target,
        title: "Precision Targeting",
        description: "Smart component-level analysis that identifies exactly which elements have issues and suggests specific fixes.",
        tone: Tone::Accent,
    },
];

pub const STEPS: [Step; 4] = [
    Step {
        icon: IconKind::Upload,
        number: "01",
        title: "Upload Your UI",
        description: "Simply upload screenshots, connect your staging environment, or integrate with your design tools.",
        tone: Tone::Primary,
    },
    Step {
        icon: IconKind::Scan,
        number: "02",
        title: "AI Analysis",
        description: "Our machine learning models analyze every pixel, comparing against design systems and best practices.",
        tone: Tone::Accent,
    },
    Step {
        icon: IconKind::AlertTriangle,
        number: "03",
        title: "Issue Detection",
        description: "Get detailed reports highlighting inconsistencies, alignment issues, typography problems, and more.",
        tone: Tone::Primary,
    },
    Step {
        icon: IconKind::CheckCircle,
        number: "04",
        title: "Fix & Verify",
        description: "Apply suggested fixes and re-run analysis to ensure all issues are resolved before deployment.",
        tone: Tone::Accent,
    },
];

const FEATURE_STAGGER_MS: usize = 100;
const STEP_STAGGER_MS: usize = 200;

/// Entrance animation delay of the feature card at `index`.
#[must_use]
pub fn feature_delay_ms(index: usize) -> usize {
    index * FEATURE_STAGGER_MS
}

/// Entrance animation delay of the step card at `index`.
#[must_use]
pub fn step_delay_ms(index: usize) -> usize {
    index * STEP_STAGGER_MS
}

/// Whether an arrow connector follows the step at `index`.
#[must_use]
pub fn shows_arrow(index: usize) -> bool {
    index + 1 < STEPS.len()
}

/// Inline `style` value for a staggered entrance.
#[must_use]
pub fn animation_delay_style(delay_ms: usize) -> String {
    format!("animation-delay: {delay_ms}ms")
}
