use axum::http::StatusCode;

/// Wrap a page body in the shared document shell.
pub fn page(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="no">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{} | Prisfinder</title>
</head>
<body>
    <header><a href="/">Prisfinder</a></header>
    <main>
        {}
    </main>
</body>
</html>"#,
        html_escape(title),
        body
    )
}

pub fn error_page(status: StatusCode, message: &str) -> String {
    let title = status.canonical_reason().unwrap_or("Error");

    page(
        title,
        &format!(
            r#"<section class="error-state">
    <h1>{} {}</h1>
    <p>{}</p>
</section>"#,
            status.as_u16(),
            html_escape(title),
            html_escape(message)
        ),
    )
}

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
