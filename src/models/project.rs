use serde::{Deserialize, Serialize};

use crate::gallery::GalleryDefinition;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Skill {
    pub name: String,
    /// Logo URL; when absent the built-in logo table is consulted.
    #[serde(default)]
    pub icon: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Project {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub link: Option<String>,
    /// Image paths relative to the site root. An empty list is rejected at load time.
    #[serde(default)]
    pub gallery: Option<Vec<String>>,
}

impl Project {
    /// Overlay id for the project at `index` in the project list.
    pub fn gallery_id(index: usize) -> String {
        format!("gallery-{}", index)
    }

    /// Anchor id for the project card.
    pub fn anchor(&self) -> String {
        format!("project-{}", slug::slugify(&self.title))
    }

    pub fn gallery_definition(&self, index: usize) -> Option<Result<GalleryDefinition, String>> {
        self.gallery.as_ref().map(|images| {
            GalleryDefinition::new(Self::gallery_id(index), self.title.clone(), images.clone())
                .map_err(|e| format!("project '{}': {}", self.title, e))
        })
    }
}
