use axum::response::Html;

const LANDING_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>Cafe Registry API</title>
</head>
<body>
    <h1>Cafe Registry API</h1>
    <p>A small JSON API over a single table of cafes.</p>
    <ul>
        <li><code>GET /random</code> — one cafe at random</li>
        <li><code>GET /all</code> — every cafe</li>
        <li><code>GET /search?loc=&lt;location&gt;</code> — first cafe at a location</li>
        <li><code>POST /add</code> — add a cafe (form-encoded)</li>
        <li><code>PATCH /patch/&lt;id&gt;/&lt;new_price&gt;</code> — update a coffee price</li>
        <li><code>DELETE /delete/&lt;id&gt;</code> — delete a cafe (header <code>s</code>)</li>
    </ul>
    <p>Interactive docs at <a href="/swagger-ui">/swagger-ui</a>.</p>
</body>
</html>
"#;

pub async fn home_handler() -> Html<&'static str> {
    Html(LANDING_PAGE)
}
