use crate::models::profile::{About, Education, Experience};
use crate::render::{encode_path_whitespace, html_escape};

fn render_education(edu: &Education) -> String {
    let coursework = if edu.coursework.is_empty() {
        String::new()
    } else {
        format!(
            r#"
                        <div class="mt-4">
                            <p class="text-sm font-semibold text-slate-700 mb-2">Relevant Coursework:</p>
                            <p class="text-sm text-gray-600">{}</p>
                        </div>"#,
            html_escape(&edu.coursework.join(" | "))
        )
    };
    format!(
        r#"
                <div class="mt-10">
                    <h2 class="text-xl sm:text-2xl font-bold text-slate-900 mb-4">Education</h2>
                    <div class="rounded-xl border border-slate-200 bg-slate-50 p-4 sm:p-6">
                        <h3 class="text-base sm:text-lg font-bold text-slate-900">{}</h3>
                        <p class="text-slate-700 mt-1">{}</p>
                        <p class="text-slate-600 text-sm mt-1">{}</p>{}
                    </div>
                </div>"#,
        html_escape(&edu.school),
        html_escape(&edu.degree),
        html_escape(&edu.expected),
        coursework
    )
}

fn render_experience(entry: &Experience) -> String {
    let items: String = entry
        .highlights
        .iter()
        .map(|h| format!("<li>{}</li>", html_escape(h)))
        .collect();
    let org_line = match (entry.organisation.is_empty(), entry.period.is_empty()) {
        (false, false) => format!("{} | {}", entry.organisation, entry.period),
        (false, true) => entry.organisation.clone(),
        (true, false) => entry.period.clone(),
        (true, true) => String::new(),
    };
    format!(
        r#"
                        <div class="rounded-xl border border-slate-200 bg-white p-4 sm:p-6">
                            <h3 class="text-base sm:text-lg font-bold text-slate-900">{}</h3>
                            <p class="text-slate-700 mt-1">{}</p>
                            <ul class="mt-4 space-y-2 text-gray-700 text-sm list-disc list-inside">{}</ul>
                        </div>"#,
        html_escape(&entry.role),
        html_escape(&org_line),
        items
    )
}

/// Body of the about page: headshot, summary, education and experience.
pub fn render_about(about: &About, owner: &str) -> String {
    let headshot = match about.headshot.as_deref() {
        Some(src) => format!(
            r#"<img src="{}" alt="{}" class="w-full rounded-2xl shadow-xl object-cover aspect-[3/4] border-4 border-slate-100 hover:shadow-2xl transition-shadow duration-300" />"#,
            html_escape(&encode_path_whitespace(src)),
            html_escape(owner)
        ),
        None => String::new(),
    };
    let education = about.education.as_ref().map(render_education).unwrap_or_default();
    let experience = if about.experience.is_empty() {
        String::new()
    } else {
        let entries: String = about.experience.iter().map(render_experience).collect();
        format!(
            r#"
                <div class="mt-10">
                    <h2 class="text-xl sm:text-2xl font-bold text-slate-900 mb-4">Professional Experience</h2>
                    <div class="space-y-6">{}
                    </div>
                </div>"#,
            entries
        )
    };

    format!(
        r#"
        <section id="about" class="py-16 px-4 sm:px-6 lg:px-8 bg-white">
            <div class="max-w-6xl mx-auto">
                <div class="grid md:grid-cols-2 gap-10 items-start">
                    <div class="flex items-center justify-center">
                        <div class="relative max-w-sm w-full">{headshot}</div>
                    </div>
                    <div>
                        <div class="prose max-w-none">
                            <h2 class="text-xl sm:text-2xl font-bold text-slate-900 mb-4">Professional Summary</h2>
                            <p class="text-gray-700 text-base sm:text-lg leading-relaxed">{summary}</p>
                        </div>{education}{experience}
                    </div>
                </div>
            </div>
        </section>
"#,
        summary = html_escape(&about.summary),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_blocks_are_omitted() {
        let html = render_about(&About::default(), "Ada");
        assert!(!html.contains("Education"));
        assert!(!html.contains("Professional Experience"));
        assert!(!html.contains("<img"));
    }

    #[test]
    fn experience_and_coursework_render() {
        let about = About {
            headshot: Some("images/Head Shot.png".into()),
            education: Some(Education {
                school: "Frostburg".into(),
                degree: "BSc".into(),
                expected: "2026".into(),
                coursework: vec!["Networks".into(), "Databases".into()],
            }),
            experience: vec![Experience {
                role: "Intern".into(),
                organisation: "Acme".into(),
                period: "2025".into(),
                highlights: vec!["Built <things>".into()],
            }],
            ..About::default()
        };
        let html = render_about(&about, "Ada");
        assert!(html.contains("Networks | Databases"));
        assert!(html.contains("Acme | 2025"));
        assert!(html.contains("<li>Built &lt;things&gt;</li>"));
        assert!(html.contains("images/Head%20Shot.png"));
    }
}
