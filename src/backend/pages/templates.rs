/**
 * HTML Templates
 *
 * Each page is the shared `layout` (head, navigation, flash messages)
 * wrapped around a page body. Values coming from users or the session are
 * escaped with `escape_html`.
 */

use std::fmt::Write;

use crate::backend::auth::service::{MIN_PASSWORD_LEN, MIN_USERNAME_LEN};
use crate::backend::pages::PageContext;
use crate::shared::spot::MAP_STATES;

const LEAFLET_CSS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
const LEAFLET_JS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";

/// Escape text for use in element content and quoted attributes
pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn nav(context: &PageContext) -> String {
    let account = match &context.user {
        Some(user) => format!(
            r#"<span class="nav-user">Signed in as {}</span>
      <a href="/logout">Log out</a>"#,
            escape_html(&user.username)
        ),
        None => r#"<a href="/login">Log in</a>
      <a href="/register">Register</a>"#
            .to_string(),
    };

    format!(
        r#"<nav class="site-nav">
      <a href="/" class="brand">Free Camping Map</a>
      <a href="/map">Map</a>
      {account}
    </nav>"#
    )
}

fn flashes(context: &PageContext) -> String {
    if context.flashes.is_empty() {
        return String::new();
    }

    let mut out = String::from(r#"<ul class="flashes">"#);
    for flash in &context.flashes {
        let _ = write!(
            out,
            r#"<li class="flash flash-{}">{}</li>"#,
            flash.level.as_str(),
            escape_html(&flash.message)
        );
    }
    out.push_str("</ul>");
    out
}

fn layout(title: &str, context: &PageContext, head_extra: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title} | Free Camping Map</title>
    <link rel="stylesheet" href="/static/css/style.css">
    {head_extra}
  </head>
  <body>
    {nav}
    <main>
      {flashes}
      {body}
    </main>
  </body>
</html>
"#,
        title = escape_html(title),
        nav = nav(context),
        flashes = flashes(context),
    )
}

/// Landing page
pub fn index_page(context: &PageContext) -> String {
    let call_to_action = match &context.user {
        Some(user) => format!(
            r#"<p>Welcome back, {}. Open the <a href="/map">map</a> to browse or add spots.</p>"#,
            escape_html(&user.username)
        ),
        None => r#"<p>Browse the <a href="/map">map</a>, or <a href="/register">create an account</a> to share your own spots.</p>"#
            .to_string(),
    };

    let body = format!(
        r#"<section class="hero">
        <h1>Find free camping on public land</h1>
        <p>Dispersed campsites alongside National Forest boundaries and forest roads.</p>
        {call_to_action}
      </section>"#
    );

    layout("Home", context, "", &body)
}

fn state_options(blank_label: &str) -> String {
    let mut options = format!(r#"<option value="">{}</option>"#, escape_html(blank_label));
    for (code, name) in MAP_STATES {
        let _ = write!(options, r#"<option value="{code}">{name}</option>"#);
    }
    options
}

/// Map page with the state filter, the spot list and, for logged-in users,
/// the add-spot form
pub fn map_page(context: &PageContext) -> String {
    let add_spot = if context.user.is_some() {
        format!(
            r#"<section class="add-spot">
        <h2>Add a spot</h2>
        <form id="add-spot-form">
          <label>Name <input id="spot-name" name="name" required></label>
          <label>Location <input id="spot-location" name="location" required></label>
          <label>State <select id="spot-state" name="state" required>{states}</select></label>
          <label>Latitude <input id="spot-latitude" name="latitude" type="number" step="any" min="-90" max="90" required></label>
          <label>Longitude <input id="spot-longitude" name="longitude" type="number" step="any" min="-180" max="180" required></label>
          <label>Description <textarea id="spot-description" name="description"></textarea></label>
          <button type="submit">Add spot</button>
        </form>
      </section>"#,
            states = state_options("Choose a state")
        )
    } else {
        r#"<p class="add-spot-hint"><a href="/login">Log in</a> to add a spot.</p>"#.to_string()
    };

    let body = format!(
        r#"<div class="map-layout">
        <aside class="sidebar">
          <label for="state-filter">State</label>
          <select id="state-filter">{states}</select>
          <ul id="camping-list"></ul>
          {add_spot}
        </aside>
        <div id="map"></div>
      </div>
      <script src="{LEAFLET_JS}"></script>
      <script src="/static/js/script.js"></script>"#,
        states = state_options("All States"),
    );

    let head_extra = format!(r#"<link rel="stylesheet" href="{LEAFLET_CSS}">"#);
    layout("Map", context, &head_extra, &body)
}

/// Registration form
pub fn register_page(context: &PageContext) -> String {
    let body = format!(
        r#"<section class="auth-form">
        <h1>Create an account</h1>
        <form method="post" action="/register">
          <label>Username <input name="username" minlength="{MIN_USERNAME_LEN}" required></label>
          <label>Password <input name="password" type="password" minlength="{MIN_PASSWORD_LEN}" required></label>
          <label>Confirm password <input name="confirm_password" type="password" required></label>
          <button type="submit">Register</button>
        </form>
        <p>Already registered? <a href="/login">Log in</a></p>
      </section>"#
    );

    layout("Register", context, "", &body)
}

/// Login form
pub fn login_page(context: &PageContext) -> String {
    let body = r#"<section class="auth-form">
        <h1>Log in</h1>
        <form method="post" action="/login">
          <label>Username <input name="username" required></label>
          <label>Password <input name="password" type="password" required></label>
          <button type="submit">Log in</button>
        </form>
        <p>New here? <a href="/register">Create an account</a></p>
      </section>"#;

    layout("Log in", context, "", body)
}
