use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
pub struct HeroStat {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
pub struct Hero {
    #[serde(default)]
    pub badge: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub stats: Vec<HeroStat>,
}

/// Which inline SVG a contact button carries.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ContactIcon {
    Email,
    Github,
    Linkedin,
    Download,
    #[default]
    Link,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ContactLink {
    pub label: String,
    pub href: String,
    #[serde(default)]
    pub icon: ContactIcon,
    /// Emit the `download` attribute (resume and other files).
    #[serde(default)]
    pub download: bool,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
pub struct Education {
    pub school: String,
    #[serde(default)]
    pub degree: String,
    #[serde(default)]
    pub expected: String,
    #[serde(default)]
    pub coursework: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
pub struct Experience {
    pub role: String,
    #[serde(default)]
    pub organisation: String,
    #[serde(default)]
    pub period: String,
    #[serde(default)]
    pub highlights: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
pub struct About {
    #[serde(default)]
    pub teaser: String,
    #[serde(default)]
    pub headshot: Option<String>,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub education: Option<Education>,
    #[serde(default)]
    pub experience: Vec<Experience>,
}
