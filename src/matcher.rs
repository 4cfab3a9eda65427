//! Classify catalog projects against the contributor's preferences

use colored::{Color, ColoredString, Colorize};
use std::fmt;

use crate::catalog::Project;
use crate::preferences::Preferences;

/// How well a project fits the contributor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    GoodMatch,
    NewLanguage,
    ExcludedFramework,
    NewFramework,
}

impl Verdict {
    pub fn label(self) -> &'static str {
        match self {
            Verdict::GoodMatch => "good match",
            Verdict::NewLanguage => "new language",
            Verdict::ExcludedFramework => "excluded framework",
            Verdict::NewFramework => "new framework",
        }
    }

    pub fn color(self) -> Color {
        match self {
            Verdict::GoodMatch => Color::Green,
            Verdict::NewLanguage | Verdict::ExcludedFramework => Color::Red,
            Verdict::NewFramework => Color::Yellow,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify a project.
///
/// Precedence: new language, then excluded framework, then new framework.
/// An excluded framework wins over a new one wherever it appears in the
/// project's framework list.
pub fn classify(project: &Project, prefs: &Preferences) -> Verdict {
    if project
        .languages
        .iter()
        .any(|language| !prefs.languages.contains(language))
    {
        return Verdict::NewLanguage;
    }

    let mut verdict = Verdict::GoodMatch;
    for framework in &project.frameworks {
        if prefs.excluded_frameworks.contains(framework) {
            return Verdict::ExcludedFramework;
        }
        if !prefs.frameworks.contains(framework) {
            verdict = Verdict::NewFramework;
        }
    }
    verdict
}

/// Listing line for a project, e.g. `foo, d good match`
pub fn listing_line(project: &Project, verdict: Verdict) -> String {
    format!("{}, {} {}", project.name, project.desc, verdict)
}

/// Listing line painted in the verdict's color
pub fn colored_listing_line(project: &Project, verdict: Verdict) -> ColoredString {
    listing_line(project, verdict).color(verdict.color())
}
