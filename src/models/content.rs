use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::profile::{About, ContactLink, Hero, NavItem};
use super::project::{Project, Skill};
use crate::gallery::GalleryDefinition;

/// Everything the pages display, loaded from the content TOML file.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
pub struct Content {
    #[serde(default)]
    pub nav: Vec<NavItem>,
    #[serde(default)]
    pub hero: Hero,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub contacts: Vec<ContactLink>,
    #[serde(default)]
    pub about: About,
}

/// One line of the gallery manifest.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct GalleryEntry {
    pub id: String,
    pub title: String,
    pub images: usize,
}

impl Content {
    pub fn load(path: &Path) -> Result<Self, String> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| format!("cannot read content file {}: {}", path.display(), e))?;
        Self::from_toml_str(&raw).map_err(|e| format!("{}: {}", path.display(), e))
    }

    pub fn from_toml_str(raw: &str) -> Result<Self, String> {
        let content: Content = toml::from_str(raw).map_err(|e| e.to_string())?;
        content.validate()?;
        Ok(content)
    }

    pub fn validate(&self) -> Result<(), String> {
        for item in &self.nav {
            if item.label.trim().is_empty() {
                return Err(format!("nav item '{}' has an empty label", item.href));
            }
        }
        let mut anchors = HashSet::new();
        for project in &self.projects {
            if project.title.trim().is_empty() {
                return Err("project with an empty title".to_string());
            }
            // Card ids come from the title slug.
            if !anchors.insert(project.anchor()) {
                return Err(format!(
                    "project '{}' duplicates the anchor '{}' of an earlier project",
                    project.title,
                    project.anchor()
                ));
            }
        }
        self.galleries().map(|_| ())
    }

    /// Gallery definitions for every project that has one, in project order.
    pub fn galleries(&self) -> Result<Vec<GalleryDefinition>, String> {
        self.projects
            .iter()
            .enumerate()
            .filter_map(|(idx, p)| p.gallery_definition(idx))
            .collect()
    }

    pub fn manifest(&self) -> Result<Vec<GalleryEntry>, String> {
        Ok(self
            .galleries()?
            .iter()
            .map(|g| GalleryEntry {
                id: g.id().to_string(),
                title: g.title().to_string(),
                images: g.len(),
            })
            .collect())
    }

    /// Every image path referenced by a gallery or the about page.
    pub fn image_paths(&self) -> Vec<&str> {
        let mut out: Vec<&str> = self
            .projects
            .iter()
            .filter_map(|p| p.gallery.as_ref())
            .flatten()
            .map(String::as_str)
            .collect();
        if let Some(headshot) = self.about.headshot.as_deref() {
            out.push(headshot);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
[[nav]]
label = "Home"
href = "index.html"

[hero]
first_name = "Ada"
last_name = "Lovelace"

[[hero.stats]]
label = "Focus"
value = "Engines"

[[skills]]
name = "Rust"

[[projects]]
title = "Engine"
description = "Analytical"
tags = ["maths"]
gallery = ["images/a.png", "images/b c.png"]

[[projects]]
title = "Notes"

[[projects]]
title = "Loom"
gallery = ["images/loom.png"]

[[contacts]]
label = "Email"
href = "mailto:ada@example.com"
icon = "email"

[about]
headshot = "images/ada.png"
"#;

    #[test]
    fn parses_sections_and_defaults() {
        let c = Content::from_toml_str(SAMPLE).unwrap();
        assert_eq!(c.nav.len(), 1);
        assert_eq!(c.hero.stats[0].value, "Engines");
        assert_eq!(c.projects[1].gallery, None);
        assert!(c.projects[1].tags.is_empty());
        assert!(!c.contacts[0].download);
    }

    #[test]
    fn gallery_ids_follow_project_position() {
        let c = Content::from_toml_str(SAMPLE).unwrap();
        let ids: Vec<String> = c.galleries().unwrap().iter().map(|g| g.id().to_string()).collect();
        assert_eq!(ids, vec!["gallery-0", "gallery-2"]);
    }

    #[test]
    fn manifest_counts_images() {
        let c = Content::from_toml_str(SAMPLE).unwrap();
        let m = c.manifest().unwrap();
        assert_eq!(m.len(), 2);
        assert_eq!(m[0].images, 2);
        assert_eq!(m[1].title, "Loom");
    }

    #[test]
    fn empty_gallery_is_rejected() {
        let raw = "[[projects]]\ntitle = \"Bare\"\ngallery = []\n";
        let err = Content::from_toml_str(raw).unwrap_err();
        assert!(err.contains("Bare"));
    }

    #[test]
    fn titles_with_the_same_anchor_are_rejected() {
        let raw = "[[projects]]\ntitle = \"Gym Manager\"\n\n[[projects]]\ntitle = \"gym manager!\"\n";
        let err = Content::from_toml_str(raw).unwrap_err();
        assert!(err.contains("project-gym-manager"));
        assert!(Content::from_toml_str("[[projects]]\ntitle = \"A\"\n\n[[projects]]\ntitle = \"B\"\n").is_ok());
    }

    #[test]
    fn image_paths_include_headshot() {
        let c = Content::from_toml_str(SAMPLE).unwrap();
        let paths = c.image_paths();
        assert_eq!(paths.len(), 4);
        assert!(paths.contains(&"images/ada.png"));
    }
}
