//! Shared HTML helpers and the outer page shell.

/// Tailwind runtime used by every page; the markup relies on utility classes only.
const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";

const FADE_CSS: &str = r#"@keyframes fadeIn { 0% { opacity: 0; transform: translateY(20px); } 100% { opacity: 1; transform: translateY(0); } }
        .animate-fade-in { animation: fadeIn 0.6s ease-in; }
        .animate-fade-in-delay { animation: fadeIn 0.8s ease-in 0.2s both; }
        .animate-fade-in-delay-2 { animation: fadeIn 1s ease-in 0.4s both; }
        .animate-fade-in-delay-3 { animation: fadeIn 1.2s ease-in 0.6s both; }"#;

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Replace every whitespace character in an asset path with `%20`.
/// Everything else is left as-is so existing `%xx` sequences survive.
pub fn encode_path_whitespace(path: &str) -> String {
    let mut out = String::with_capacity(path.len());
    for c in path.chars() {
        if c.is_whitespace() {
            out.push_str("%20");
        } else {
            out.push(c);
        }
    }
    out
}

/// Up to two uppercase initials from a name, dots ignored.
/// Falls back to the first two characters when the name has no words.
pub fn initials(name: &str) -> String {
    let cleaned = name.replace('.', "");
    let letters: String = cleaned
        .split(' ')
        .filter(|p| !p.is_empty())
        .filter_map(|p| p.chars().next())
        .take(2)
        .collect();
    if letters.is_empty() {
        name.chars().take(2).collect::<String>().to_uppercase()
    } else {
        letters.to_uppercase()
    }
}

/// Wrap a rendered body in a full HTML document.
pub fn render_document(title: &str, description: &str, body_html: &str, scripts: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <meta name="description" content="{description}">
    <title>{title}</title>
    <script src="{tailwind}"></script>
    <style>
        html {{ scroll-behavior: smooth; }}
        {fade_css}
    </style>
</head>
<body class="bg-white text-slate-900 antialiased">
    <div id="app">
{body_html}
    </div>
{scripts}
</body>
</html>
"#,
        title = html_escape(title),
        description = html_escape(description),
        tailwind = TAILWIND_CDN,
        fade_css = FADE_CSS,
        body_html = body_html,
        scripts = scripts,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_covers_markup_chars() {
        assert_eq!(html_escape(r#"a & <b> "c""#), "a &amp; &lt;b&gt; &quot;c&quot;");
    }

    #[test]
    fn whitespace_becomes_percent_twenty() {
        assert_eq!(encode_path_whitespace("My Photo.png"), "My%20Photo.png");
        assert_eq!(encode_path_whitespace("a\tb c"), "a%20b%20c");
        assert_eq!(encode_path_whitespace("already%20ok.png"), "already%20ok.png");
    }

    #[test]
    fn initials_from_words() {
        assert_eq!(initials("Tailwind CSS"), "TC");
        assert_eq!(initials("Node.js"), "N");
        assert_eq!(initials("c"), "C");
        assert_eq!(initials("Very Long Skill Name"), "VL");
    }

    #[test]
    fn document_shell_escapes_title() {
        let html = render_document("A & B", "desc", "<main></main>", "");
        assert!(html.contains("<title>A &amp; B</title>"));
        assert!(html.contains("<main></main>"));
    }
}
