//! Layout components - page shell, navigation, cards

use axum::response::Html;

/// Renders a full page with the base template.
///
/// All pages share the same Tailwind-based dark shell and navigation bar.
pub fn render_page(title: &str, content: &str) -> Html<String> {
    let html = format!(
        r#"<!DOCTYPE html>
        <html lang="en">
        <head>
            <title>{title} - Reelhouse</title>
            <meta charset="utf-8">
            <meta name="viewport" content="width=device-width, initial-scale=1">
            <script src="https://cdn.tailwindcss.com"></script>
            <script>
                tailwind.config = {{
                    darkMode: 'class',
                    theme: {{
                        extend: {{
                            colors: {{
                                'reel': {{
                                    50: '#fff7ed',
                                    400: '#fb923c',
                                    500: '#f97316',
                                    600: '#ea580c',
                                    900: '#0a0a0a'
                                }}
                            }}
                        }}
                    }}
                }}
            </script>
        </head>
        <body class="bg-gray-900 text-gray-100 min-h-screen">
            {nav}
            <main class="max-w-7xl mx-auto px-4 py-8">
                {content}
            </main>
        </body>
        </html>"#,
        nav = nav_bar(),
    );

    Html(html)
}

/// Renders the main navigation bar.
pub fn nav_bar() -> String {
    r#"<nav class="bg-gray-800 border-b border-gray-700 sticky top-0 z-50">
            <div class="max-w-7xl mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    <a href="/" class="text-2xl font-bold text-reel-500">Reelhouse</a>
                    <div class="flex items-center space-x-6">
                        <a href="/" class="px-3 py-2 rounded-md text-sm font-medium text-gray-300 hover:text-reel-500 hover:bg-gray-700 transition-colors">Library</a>
                    </div>
                </div>
            </div>
        </nav>"#
        .to_string()
}

/// Renders a page header with title and optional subtitle.
pub fn page_header(title: &str, subtitle: Option<&str>) -> String {
    let subtitle_html = subtitle
        .map(|s| format!(r#"<p class="text-gray-400 mt-2">{s}</p>"#))
        .unwrap_or_default();

    format!(
        r#"<div class="mb-8">
            <h1 class="text-3xl font-bold text-white">{title}</h1>
            {subtitle_html}
        </div>"#
    )
}

/// Renders a card container with optional header.
pub fn card(title: Option<&str>, content: &str) -> String {
    let header_html = title
        .map(|t| format!(r#"<h3 class="text-lg font-semibold text-white mb-6">{t}</h3>"#))
        .unwrap_or_default();

    format!(
        r#"<div class="bg-gray-800 border border-gray-700 rounded-lg p-6 mb-6">
            {header_html}
            {content}
        </div>"#
    )
}

/// Renders a link pill for one video inside a category card.
pub fn video_link(category: &str, filename: &str) -> String {
    let encoded = urlencoding::encode(filename);
    format!(
        r#"<a href="/player/{category}/{encoded}" class="block px-4 py-2 rounded-lg text-gray-300 hover:text-reel-400 hover:bg-gray-700 transition-colors">{filename}</a>"#
    )
}
