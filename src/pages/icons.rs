use crate::models::profile::ContactIcon;

/// Known skill logos, keyed by display name.
const SKILL_LOGOS: &[(&str, &str)] = &[
    ("Java", "https://api.iconify.design/logos/java.svg"),
    ("Python", "https://api.iconify.design/logos/python.svg"),
    ("C", "https://api.iconify.design/logos/c.svg"),
    ("C++", "https://api.iconify.design/logos/c-plusplus.svg"),
    ("PHP", "https://api.iconify.design/logos/php.svg"),
    ("CakePHP", "https://api.iconify.design/logos/cakephp.svg"),
    ("JavaScript", "https://api.iconify.design/logos/javascript.svg"),
    ("Node.js", "https://api.iconify.design/logos/nodejs-icon.svg"),
    ("React", "https://api.iconify.design/logos/react.svg"),
    ("Tailwind CSS", "https://api.iconify.design/logos/tailwindcss-icon.svg"),
    ("TypeScript", "https://api.iconify.design/logos/typescript-icon.svg"),
    ("HTML", "https://api.iconify.design/logos/html-5.svg"),
    ("CSS", "https://api.iconify.design/logos/css-3.svg"),
    ("SQL", "https://api.iconify.design/vscode-icons/file-type-sql.svg"),
    ("WebSockets", "https://api.iconify.design/logos/websocket.svg"),
    ("Git", "https://api.iconify.design/logos/git-icon.svg"),
    ("Rust", "https://api.iconify.design/logos/rust.svg"),
];

pub fn skill_logo(name: &str) -> Option<&'static str> {
    SKILL_LOGOS
        .iter()
        .find(|(skill, _)| *skill == name)
        .map(|(_, url)| *url)
}

pub fn contact_svg(icon: ContactIcon) -> &'static str {
    match icon {
        ContactIcon::Email => r#"<svg class="w-5 h-5" fill="none" stroke="currentColor" viewBox="0 0 24 24"><path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M3 8l7.89 5.26a2 2 0 002.22 0L21 8M5 19h14a2 2 0 002-2V7a2 2 0 00-2-2H5a2 2 0 00-2 2v10a2 2 0 002 2z"></path></svg>"#,
        ContactIcon::Github => r#"<svg class="w-5 h-5" fill="currentColor" viewBox="0 0 24 24"><path d="M12 0c-6.626 0-12 5.373-12 12 0 5.302 3.438 9.8 8.207 11.387.599.111.793-.261.793-.577v-2.234c-3.338.726-4.033-1.416-4.033-1.416-.546-1.387-1.333-1.756-1.333-1.756-1.089-.745.083-.729.083-.729 1.205.084 1.839 1.237 1.839 1.237 1.07 1.834 2.807 1.304 3.492.997.107-.775.418-1.305.762-1.604-2.665-.305-5.467-1.334-5.467-5.931 0-1.311.469-2.381 1.236-3.221-.124-.303-.535-1.524.117-3.176 0 0 1.008-.322 3.301 1.23.957-.266 1.983-.399 3.003-.404 1.02.005 2.047.138 3.006.404 2.291-1.552 3.297-1.23 3.297-1.23.653 1.653.242 2.874.118 3.176.77.84 1.235 1.911 1.235 3.221 0 4.609-2.807 5.624-5.479 5.921.43.372.823 1.102.823 2.222v3.293c0 .319.192.694.801.576 4.765-1.589 8.199-6.086 8.199-11.386 0-6.627-5.373-12-12-12z"></path></svg>"#,
        ContactIcon::Linkedin => r#"<svg class="w-5 h-5" fill="currentColor" viewBox="0 0 24 24"><path d="M20.447 20.452h-3.554v-5.569c0-1.328-.027-3.037-1.852-3.037-1.853 0-2.136 1.445-2.136 2.939v5.667H9.351V9h3.414v1.561h.046c.477-.9 1.637-1.85 3.37-1.85 3.601 0 4.267 2.37 4.267 5.455v6.286zM5.337 7.433c-1.144 0-2.063-.926-2.063-2.065 0-1.138.92-2.063 2.063-2.063 1.14 0 2.064.925 2.064 2.063 0 1.139-.925 2.065-2.064 2.065zm1.782 13.019H3.555V9h3.564v11.452zM22.225 0H1.771C.792 0 0 .774 0 1.729v20.542C0 23.227.792 24 1.771 24h20.451C23.2 24 24 23.227 24 22.271V1.729C24 .774 23.2 0 22.222 0h.003z"></path></svg>"#,
        ContactIcon::Download => r#"<svg class="w-5 h-5" fill="none" stroke="currentColor" viewBox="0 0 24 24"><path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M12 10v6m0 0l-3-3m3 3l3-3m2 8H7a2 2 0 01-2-2V5a2 2 0 012-2h5.586a1 1 0 01.707.293l5.414 5.414a1 1 0 01.293.707V19a2 2 0 01-2 2z"></path></svg>"#,
        ContactIcon::Link => r#"<svg class="w-5 h-5" fill="none" stroke="currentColor" viewBox="0 0 24 24"><path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M13.828 10.172a4 4 0 00-5.656 0l-4 4a4 4 0 105.656 5.656l1.102-1.101m-.758-4.899a4 4 0 005.656 0l4-4a4 4 0 00-5.656-5.656l-1.1 1.1"></path></svg>"#,
    }
}

pub const MENU_SVG: &str = r#"<svg class="w-6 h-6" fill="none" stroke="currentColor" viewBox="0 0 24 24"><path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M4 6h16M4 12h16M4 18h16"></path></svg>"#;
