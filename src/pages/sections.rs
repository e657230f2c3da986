//! Home-page sections. Each function returns a self-contained fragment;
//! fragments are well-formed so tests can mount them into a `MemoryDocument`.

use crate::gallery;
use crate::models::profile::{ContactLink, Hero, HeroStat, NavItem};
use crate::models::project::{Project, Skill};
use crate::render::{html_escape, initials};

use super::icons::{contact_svg, skill_logo, MENU_SVG};

/// Fixed top navigation with a desktop row and a collapsed mobile menu.
/// The item whose href equals `active_href` is highlighted.
pub fn render_nav(site_name: &str, items: &[NavItem], active_href: &str) -> String {
    let link = |item: &NavItem, base: &str| -> String {
        let classes = if item.href == active_href {
            format!("{} text-slate-900 font-semibold", base)
        } else {
            format!("{} text-gray-700 hover:text-slate-800 transition-colors", base)
        };
        format!(
            r#"<a href="{}" class="{}">{}</a>"#,
            html_escape(&item.href),
            classes,
            html_escape(&item.label)
        )
    };

    let desktop: String = items.iter().map(|i| link(i, "nav-link")).collect();
    let mobile: String = items.iter().map(|i| link(i, "block")).collect();

    format!(
        r#"
        <nav class="fixed top-0 left-0 right-0 bg-white/90 backdrop-blur-md shadow-sm z-50">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <div class="text-xl font-bold text-slate-800">{site_name}</div>
                    <div class="hidden md:flex space-x-8">{desktop}</div>
                    <button id="mobile-menu-button" class="md:hidden text-gray-700" aria-label="Menu">{menu}</button>
                </div>
            </div>
            <div id="mobile-menu" class="hidden md:hidden bg-white border-t">
                <div class="px-4 py-4 space-y-4">{mobile}</div>
            </div>
        </nav>
"#,
        site_name = html_escape(site_name),
        menu = MENU_SVG,
    )
}

fn render_hero_stat(stat: &HeroStat) -> String {
    format!(
        r#"
                    <div class="rounded-xl bg-white/5 border border-white/10 p-5 text-left">
                        <div class="text-sm text-slate-400">{}</div>
                        <div class="mt-2 text-slate-100 font-semibold">{}</div>
                    </div>"#,
        html_escape(&stat.label),
        html_escape(&stat.value)
    )
}

pub fn render_hero(hero: &Hero) -> String {
    let badge = if hero.badge.is_empty() {
        String::new()
    } else {
        format!(
            r#"<div class="inline-flex items-center gap-2 px-4 py-2 rounded-full bg-white/10 text-slate-200 border border-white/10"><span class="w-2 h-2 rounded-full bg-slate-200"></span><span class="text-sm font-semibold tracking-wide">{}</span></div>"#,
            html_escape(&hero.badge)
        )
    };
    let stats: String = hero.stats.iter().map(render_hero_stat).collect();

    format!(
        r##"
        <section class="pt-32 pb-20 px-4 sm:px-6 lg:px-8 bg-gradient-to-b from-slate-950 via-slate-900 to-slate-950">
            <div class="max-w-5xl mx-auto text-center">
                {badge}
                <h1 class="mt-6 text-4xl sm:text-5xl md:text-6xl font-bold text-white animate-fade-in">{first} <span class="text-slate-300">{last}</span></h1>
                <p class="mt-6 text-base sm:text-lg md:text-xl text-slate-300 max-w-2xl mx-auto px-4 animate-fade-in-delay">{summary}</p>
                <div class="mt-10 flex flex-col sm:flex-row gap-4 justify-center px-4 animate-fade-in-delay-2">
                    <a href="#projects" class="px-6 sm:px-8 py-3 bg-white text-slate-950 rounded-lg font-semibold hover:bg-slate-100 transition-all shadow-lg hover:shadow-xl text-sm sm:text-base">View Projects</a>
                    <a href="#contact" class="px-6 sm:px-8 py-3 bg-slate-800 text-white rounded-lg font-semibold hover:bg-slate-700 transition-all border border-slate-700 text-sm sm:text-base">Contact</a>
                </div>
                <div class="mt-12 grid grid-cols-1 sm:grid-cols-3 gap-4 max-w-4xl mx-auto px-4 animate-fade-in-delay-3">{stats}
                </div>
            </div>
        </section>
"##,
        first = html_escape(&hero.first_name),
        last = html_escape(&hero.last_name),
        summary = html_escape(&hero.summary),
    )
}

pub fn render_about_teaser(teaser: &str) -> String {
    let text = if teaser.is_empty() {
        "Learn more about my background, education, and professional experience."
    } else {
        teaser
    };
    format!(
        r#"
        <section class="py-16 px-4 sm:px-6 lg:px-8 bg-white">
            <div class="max-w-6xl mx-auto flex justify-center">
                <div class="rounded-2xl border border-slate-200 bg-slate-50 p-6 md:p-8 text-center">
                    <h2 class="text-2xl md:text-3xl font-bold text-slate-900">About</h2>
                    <p class="mt-3 text-gray-600 max-w-md mx-auto">{}</p>
                    <a href="about.html" class="inline-flex items-center justify-center px-6 py-3 bg-slate-900 text-white rounded-lg font-semibold hover:bg-slate-800 transition-colors mt-4">Read About</a>
                </div>
            </div>
        </section>
"#,
        html_escape(text)
    )
}

fn render_skill_icon(skill: &Skill) -> String {
    let logo = skill.icon.as_deref().or_else(|| skill_logo(&skill.name));
    match logo {
        Some(url) => format!(
            r#"<img src="{}" alt="{}" class="h-10 w-10 object-contain" />"#,
            html_escape(url),
            html_escape(&skill.name)
        ),
        None => format!(
            r#"<div class="h-10 w-10 rounded-lg bg-slate-900 text-white flex items-center justify-center font-bold tracking-wide">{}</div>"#,
            html_escape(&initials(&skill.name))
        ),
    }
}

pub fn render_skills(skills: &[Skill]) -> String {
    if skills.is_empty() {
        return String::new();
    }
    let cards: String = skills
        .iter()
        .map(|skill| {
            format!(
                r#"
                <div class="bg-white p-6 rounded-xl shadow-sm hover:shadow-md transition-shadow border border-slate-200">
                    <div class="flex items-center gap-4">
                        <div class="h-10 w-10 rounded-lg flex items-center justify-center shrink-0">{}</div>
                        <h3 class="font-semibold text-slate-900">{}</h3>
                    </div>
                </div>"#,
                render_skill_icon(skill),
                html_escape(&skill.name)
            )
        })
        .collect();

    format!(
        r#"
        <section id="skills" class="py-20 px-4 sm:px-6 lg:px-8 bg-slate-50">
            <div class="max-w-6xl mx-auto">
                <h2 class="text-3xl sm:text-4xl font-bold text-center mb-4 text-slate-900">Skills</h2>
                <div class="w-24 h-1 bg-slate-800 mx-auto mb-12"></div>
                <div class="grid grid-cols-2 sm:grid-cols-3 md:grid-cols-4 gap-4 sm:gap-6">{cards}
                </div>
            </div>
        </section>
"#
    )
}

fn render_project_card(index: usize, project: &Project) -> Result<String, String> {
    let tags: String = project
        .tags
        .iter()
        .map(|t| {
            format!(
                r#"<span class="px-3 py-1 bg-slate-100 text-slate-700 rounded-full text-sm">{}</span>"#,
                html_escape(t)
            )
        })
        .collect();

    let (repo_link, view_link) = match project.link.as_deref() {
        Some(href) => {
            let href = html_escape(href);
            (
                format!(r#"<a href="{href}" class="text-sm font-semibold text-slate-800 hover:text-slate-600">GitHub</a>"#),
                format!(r#"<a href="{href}" class="text-slate-800 hover:text-slate-600 font-semibold">View Project</a>"#),
            )
        }
        None => (String::new(), String::new()),
    };

    let (button, overlay) = match project.gallery_definition(index) {
        Some(def) => {
            let def = def?;
            (
                format!(
                    r#"<button {}="{}" class="mt-3 px-5 sm:px-6 py-2 bg-slate-900 text-white rounded-lg font-semibold hover:bg-slate-800 transition-all shadow-md hover:shadow-lg transform hover:scale-105 active:scale-95 duration-200 text-sm sm:text-base">View Gallery <span class="inline-block ml-2">→</span></button>"#,
                    gallery::TRIGGER_ATTR,
                    html_escape(def.id())
                ),
                gallery::render(&def),
            )
        }
        None => (String::new(), String::new()),
    };

    Ok(format!(
        r#"
                <div id="{anchor}" class="bg-white p-6 sm:p-8 rounded-xl shadow-md hover:shadow-xl transition-all border border-slate-200">
                    <div class="flex items-start justify-between gap-4">
                        <h3 class="text-lg sm:text-xl font-bold text-slate-900">{title}</h3>
                        {repo_link}
                    </div>
                    <p class="text-sm sm:text-base text-gray-600 mb-4 mt-3">{description}</p>
                    <div class="flex flex-wrap gap-2 mb-4">{tags}</div>
                    <div class="flex flex-wrap gap-3">{view_link}{button}</div>{overlay}
                </div>"#,
        anchor = html_escape(&project.anchor()),
        title = html_escape(&project.title),
        description = html_escape(&project.description),
    ))
}

/// Project cards; projects with a gallery get an open button and their
/// hidden overlay inline.
pub fn render_projects(projects: &[Project]) -> Result<String, String> {
    let mut cards = String::new();
    for (index, project) in projects.iter().enumerate() {
        cards.push_str(&render_project_card(index, project)?);
    }

    Ok(format!(
        r#"
        <section id="projects" class="py-20 px-4 sm:px-6 lg:px-8 bg-white">
            <div class="max-w-6xl mx-auto">
                <h2 class="text-3xl sm:text-4xl font-bold text-center mb-4 text-slate-900">Projects</h2>
                <div class="w-24 h-1 bg-slate-800 mx-auto mb-12"></div>
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6 md:gap-8">{cards}
                </div>
            </div>
        </section>
"#
    ))
}

pub fn render_contact(contacts: &[ContactLink]) -> String {
    let buttons: String = contacts
        .iter()
        .map(|c| {
            let download = if c.download { r#" download="""# } else { "" };
            format!(
                r#"
                <a href="{href}"{download} class="px-6 sm:px-8 py-3 sm:py-4 bg-white text-slate-900 rounded-lg font-semibold hover:bg-slate-100 transition-all shadow-lg hover:shadow-xl flex items-center justify-center gap-2 text-sm sm:text-base">{icon} {label}</a>"#,
                href = html_escape(&c.href),
                icon = contact_svg(c.icon),
                label = html_escape(&c.label),
            )
        })
        .collect();

    format!(
        r#"
        <section id="contact" class="py-20 px-4 sm:px-6 lg:px-8 bg-gradient-to-b from-slate-900 via-slate-800 to-slate-900">
            <div class="max-w-4xl mx-auto text-center">
                <h2 class="text-3xl sm:text-4xl font-bold text-white mb-4">Get In Touch</h2>
                <div class="w-24 h-1 bg-slate-300 mx-auto mb-12"></div>
                <p class="text-lg sm:text-xl text-slate-300 mb-10 px-4">I'm always open to discussing new projects, creative ideas, or opportunities to be part of your vision.</p>
                <div class="flex flex-col sm:flex-row gap-6 justify-center">{buttons}
                </div>
            </div>
        </section>
"#
    )
}

pub fn render_footer(owner: &str, year: i32) -> String {
    format!(
        r#"
        <footer class="bg-slate-900 text-slate-400 py-8 px-4 sm:px-6 lg:px-8">
            <div class="max-w-6xl mx-auto text-center">
                <p>&#169; {} {}. All rights reserved.</p>
            </div>
        </footer>
"#,
        year,
        html_escape(owner)
    )
}

pub fn render_dev_banner() -> String {
    r#"
        <div id="dev-banner" class="fixed bottom-0 left-0 right-0 bg-orange-500 text-white text-center py-2 font-bold text-sm z-[10000] shadow-md">DEVELOPMENT ENVIRONMENT NOT PRODUCTION</div>
"#
    .to_string()
}

/// Toggles `#mobile-menu` from the nav's menu button.
pub fn render_menu_script() -> String {
    "<script>\
\n(function(){\
\nvar b=document.getElementById('mobile-menu-button'),m=document.getElementById('mobile-menu');\
\nif(!b||!m)return;\
\nb.addEventListener('click',function(){m.classList.toggle('hidden');});\
\n})();\
\n</script>\n"
        .to_string()
}

/// Page header used by secondary pages.
pub fn render_page_header(title: &str) -> String {
    format!(
        r#"
        <header class="pt-28 pb-10 px-4 sm:px-6 lg:px-8 bg-white">
            <div class="max-w-6xl mx-auto">
                <h1 class="text-4xl md:text-5xl font-bold text-slate-900">{}</h1>
                <div class="w-24 h-1 bg-slate-800 mt-4"></div>
            </div>
        </header>
"#,
        html_escape(title)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::MemoryDocument;
    use crate::gallery::Document;
    use crate::models::profile::ContactIcon;

    fn nav() -> Vec<NavItem> {
        vec![
            NavItem { label: "Home".into(), href: "index.html".into() },
            NavItem { label: "About".into(), href: "about.html".into() },
        ]
    }

    fn project(title: &str, gallery: Option<Vec<&str>>) -> Project {
        Project {
            title: title.to_string(),
            description: "desc".to_string(),
            tags: vec!["Rust".to_string()],
            link: None,
            gallery: gallery.map(|g| g.into_iter().map(str::to_string).collect()),
        }
    }

    #[test]
    fn nav_highlights_active_link_in_both_menus() {
        let html = render_nav("Ada", &nav(), "about.html");
        assert_eq!(html.matches("text-slate-900 font-semibold").count(), 2);
        assert!(html.contains(r#"<a href="about.html" class="nav-link text-slate-900 font-semibold">About</a>"#));
        assert!(html.contains(r#"<a href="index.html" class="block text-gray-700"#));
    }

    #[test]
    fn skill_without_logo_gets_initials() {
        let html = render_skills(&[Skill { name: "Deep Learning".into(), icon: None }]);
        assert!(html.contains(">DL</div>"));
        let html = render_skills(&[Skill { name: "Python".into(), icon: None }]);
        assert!(html.contains("logos/python.svg"));
    }

    #[test]
    fn no_skills_renders_nothing() {
        assert!(render_skills(&[]).is_empty());
    }

    #[test]
    fn only_gallery_projects_get_buttons_and_overlays() {
        let html = render_projects(&[
            project("Gym Manager", Some(vec!["a.png", "b.png"])),
            project("Chat", None),
            project("Site", Some(vec!["c.png"])),
        ])
        .unwrap();
        assert!(html.contains(r#"data-gallery-id="gallery-0""#));
        assert!(!html.contains(r#"data-gallery-id="gallery-1""#));
        assert!(html.contains(r#"id="gallery-2""#));
        assert!(html.contains(r#"id="project-gym-manager""#));
    }

    #[test]
    fn project_section_is_mountable() {
        let html = render_projects(&[project("Gym", Some(vec!["a b.png"]))]).unwrap();
        let mut doc = MemoryDocument::new();
        doc.mount(&html).unwrap();
        let triggers = doc.elements_with_attribute("data-gallery-id");
        assert_eq!(triggers.len(), 1);
        let overlay = doc.element_by_id(&triggers[0].1).unwrap();
        assert!(doc.has_class(overlay, "hidden"));
    }

    #[test]
    fn download_contacts_carry_attribute() {
        let html = render_contact(&[
            ContactLink {
                label: "Resume".into(),
                href: "files/cv.pdf".into(),
                icon: ContactIcon::Download,
                download: true,
            },
            ContactLink {
                label: "Email".into(),
                href: "mailto:a@b.c".into(),
                icon: ContactIcon::Email,
                download: false,
            },
        ]);
        assert_eq!(html.matches("download=\"\"").count(), 1);
        assert!(html.contains("mailto:a@b.c"));
    }

    #[test]
    fn footer_uses_year_and_owner() {
        let html = render_footer("Ada & Co", 2031);
        assert!(html.contains("2031 Ada &amp; Co."));
    }

    #[test]
    fn menu_script_targets_nav_ids() {
        let mut doc = MemoryDocument::new();
        doc.mount(&render_nav("Site", &nav(), "index.html")).unwrap();
        let roots = doc.mount(&render_menu_script()).unwrap();
        let js = doc.text(roots[0]).unwrap();
        for id in ["mobile-menu-button", "mobile-menu"] {
            assert!(js.contains(&format!("getElementById('{}')", id)));
            assert!(doc.element_by_id(id).is_some());
        }
        assert!(js.contains("classList.toggle('hidden')"));
    }
}
