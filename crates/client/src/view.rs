//! What each page section renders, independent of any UI toolkit.

use service::resource::{CaseStudy, Insight, LeadershipProfile, Offering, Service, Solution};

pub const SOLUTION_EXCERPT_CHARS: usize = 150;
pub const SERVICE_EXCERPT_CHARS: usize = 200;

/// Title plus body text, used by offerings, solutions, services and insights.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentBlock {
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecondaryBlock {
    pub subtitle: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseStudyBlock {
    pub badge: String,
    pub title: String,
    pub description: String,
    pub secondary: Option<SecondaryBlock>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderBlock {
    pub initials: String,
    pub name: String,
    pub title: String,
}

/// First `max` characters followed by `...`, or the text unchanged if it fits.
pub fn excerpt(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

/// First letter of each space-separated part of the name.
pub fn initials(name: &str) -> String {
    name.split(' ').filter_map(|part| part.chars().next()).collect()
}

impl From<&Offering> for ContentBlock {
    fn from(o: &Offering) -> Self { Self { title: o.title.clone(), body: o.description.clone() } }
}

impl From<&Solution> for ContentBlock {
    fn from(s: &Solution) -> Self {
        Self { title: s.title.clone(), body: excerpt(&s.description, SOLUTION_EXCERPT_CHARS) }
    }
}

impl From<&Service> for ContentBlock {
    fn from(s: &Service) -> Self {
        Self { title: s.title.clone(), body: excerpt(&s.description, SERVICE_EXCERPT_CHARS) }
    }
}

impl From<&Insight> for ContentBlock {
    fn from(i: &Insight) -> Self { Self { title: i.title.clone(), body: i.description.clone() } }
}

impl From<&CaseStudy> for CaseStudyBlock {
    fn from(c: &CaseStudy) -> Self {
        // shown only when both halves exist
        let secondary = match (&c.secondary_subtitle, &c.secondary_description) {
            (Some(subtitle), Some(description)) if !subtitle.is_empty() && !description.is_empty() => {
                Some(SecondaryBlock { subtitle: subtitle.clone(), description: description.clone() })
            }
            _ => None,
        };
        Self {
            badge: c.main_title.clone(),
            title: c.primary_subtitle.clone(),
            description: c.primary_description.clone(),
            secondary,
        }
    }
}

impl From<&LeadershipProfile> for LeaderBlock {
    fn from(p: &LeadershipProfile) -> Self {
        Self { initials: initials(&p.name), name: p.name.clone(), title: p.title.clone() }
    }
}
