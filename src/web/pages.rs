//! Server-rendered HTML pages.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse},
};

use crate::domain::Contact;
use crate::validation::{ContactForm, FieldError};
use crate::web::flash::Flash;

const STYLE: &str = r#"
    body { font-family: system-ui, -apple-system, sans-serif; margin: 0; background: #f7f7f9; color: #222; }
    nav { background: #1a1a2e; padding: 0.75rem 1.5rem; }
    nav a { color: #eee; margin-right: 1rem; text-decoration: none; }
    main { max-width: 48rem; margin: 2rem auto; padding: 0 1rem; }
    table { width: 100%; border-collapse: collapse; }
    td, th { text-align: left; padding: 0.4rem; border-bottom: 1px solid #ddd; }
    .flash { background: #dcfce7; color: #166534; padding: 0.75rem; border-radius: 0.4rem; }
    .errors { background: #fee2e2; color: #991b1b; padding: 0.75rem; border-radius: 0.4rem; }
    form.inline { display: inline; }
    label { display: block; margin-top: 0.75rem; }
"#;

/// Escape HTML special characters.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn name_path(name: &str) -> String {
    urlencoding::encode(name).into_owned()
}

fn layout(title: &str, body: &str) -> Html<String> {
    Html(format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <title>{title}</title>
  <style>{STYLE}</style>
</head>
<body>
  <nav>
    <a href="/">Home</a>
    <a href="/about">About</a>
    <a href="/contact">Contact</a>
  </nav>
  <main>
{body}
  </main>
</body>
</html>"#,
        title = html_escape(title),
    ))
}

pub fn home() -> Html<String> {
    layout(
        "Home",
        r#"    <h1>Contact Book</h1>
    <p>Keep track of names, e-mail addresses and phone numbers.</p>
    <p><a href="/contact">See your contacts</a></p>"#,
    )
}

pub fn about() -> Html<String> {
    layout(
        "About",
        r#"    <h1>About</h1>
    <p>A small contact book. Contacts are kept in a single JSON file on the server.</p>"#,
    )
}

pub fn contact_list(contacts: &[Contact], flash: Option<Flash>) -> Html<String> {
    let mut body = String::from("    <h1>Contacts</h1>\n");

    if let Some(flash) = flash {
        body.push_str(&format!(
            "    <p class=\"flash\">{}</p>\n",
            html_escape(flash.message())
        ));
    }

    body.push_str("    <p><a href=\"/contact/add\">Add contact</a></p>\n");

    if contacts.is_empty() {
        body.push_str("    <p>No contacts yet.</p>\n");
        return layout("Contact", &body);
    }

    body.push_str("    <table>\n      <tr><th>#</th><th>Name</th><th>Phone</th><th></th></tr>\n");
    for (i, contact) in contacts.iter().enumerate() {
        body.push_str(&format!(
            "      <tr><td>{}</td><td>{}</td><td>{}</td><td><a href=\"/contact/{}\">Detail</a></td></tr>\n",
            i + 1,
            html_escape(&contact.name),
            html_escape(&contact.phone),
            name_path(&contact.name),
        ));
    }
    body.push_str("    </table>\n");

    layout("Contact", &body)
}

fn error_list(errors: &[FieldError]) -> String {
    if errors.is_empty() {
        return String::new();
    }

    let items: String = errors
        .iter()
        .map(|e| {
            format!(
                "        <li data-field=\"{}\">{}</li>\n",
                html_escape(&e.field),
                html_escape(&e.message)
            )
        })
        .collect();
    format!("    <ul class=\"errors\">\n{}    </ul>\n", items)
}

fn contact_fields(form: &ContactForm) -> String {
    format!(
        r#"      <label>Name <input type="text" name="name" value="{}" required></label>
      <label>E-mail <input type="email" name="email" value="{}" required></label>
      <label>Phone <input type="text" name="phone" value="{}" required></label>
"#,
        html_escape(&form.name),
        html_escape(&form.email),
        html_escape(&form.phone),
    )
}

pub fn add_form(form: &ContactForm, errors: &[FieldError]) -> Html<String> {
    let body = format!(
        r#"    <h1>Add Contact</h1>
{}    <form method="post" action="/contact">
{}      <button type="submit">Add</button>
    </form>"#,
        error_list(errors),
        contact_fields(form),
    );
    layout("Add Contact Form", &body)
}

pub fn edit_form(form: &ContactForm, errors: &[FieldError]) -> Html<String> {
    let old_name = form.old_name.as_deref().unwrap_or(&form.name);
    let body = format!(
        r#"    <h1>Edit Contact</h1>
{}    <form method="post" action="/contact/update">
      <input type="hidden" name="oldName" value="{}">
{}      <button type="submit">Save</button>
    </form>"#,
        error_list(errors),
        html_escape(old_name),
        contact_fields(form),
    );
    layout("Edit Contact Form", &body)
}

pub fn detail(contact: &Contact) -> Html<String> {
    let path = name_path(&contact.name);
    let body = format!(
        r#"    <h1>{name}</h1>
    <p>E-mail: {email}</p>
    <p>Phone: {phone}</p>
    <a href="/contact/edit/{path}">Edit</a>
    <form class="inline" method="post" action="/contact/delete/{path}">
      <button type="submit">Delete</button>
    </form>
    <p><a href="/contact">Back to contacts</a></p>"#,
        name = html_escape(&contact.name),
        email = html_escape(&contact.email),
        phone = html_escape(&contact.phone),
    );
    layout("Contact Detail Page", &body)
}

pub fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Html("<h1>404</h1>"))
}

pub fn server_error() -> String {
    "<h1>500</h1><p>Something went wrong. Please try again later.</p>".to_string()
}
