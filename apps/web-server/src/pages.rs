//! Rendering boundary.
//!
//! Templating is an external concern; these functions are the seam where a
//! real renderer would plug in. They produce small self-contained pages and
//! escape all user-supplied content.

use quill_shared::dto::PostView;

/// Escape text for interpolation into HTML.
fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn layout(title: &str, user: Option<&str>, flash: Option<&str>, content: &str) -> String {
    let nav = match user {
        Some(name) => format!(
            r#"<span>{}</span> <a href="/auth/logout">Log Out</a>"#,
            escape(name)
        ),
        None => {
            r#"<a href="/auth/register">Register</a> <a href="/auth/login">Log In</a>"#.to_string()
        }
    };
    let flash = match flash {
        Some(message) => format!(r#"<div class="flash">{}</div>"#, escape(message)),
        None => String::new(),
    };

    format!(
        "<!doctype html>\n<html>\n<head><title>{title} - Quill</title></head>\n<body>\n<nav><h1><a href=\"/blog/\">Quill</a></h1>{nav}</nav>\n<section class=\"content\">\n{flash}{content}</section>\n</body>\n</html>\n",
        title = escape(title),
        nav = nav,
        flash = flash,
        content = content,
    )
}

/// The post listing.
pub fn index_page(user: Option<&str>, posts: &[PostView]) -> String {
    let mut content = String::from("<h2>Posts</h2>\n");

    if user.is_some() {
        content.push_str("<a class=\"action\" href=\"/blog/create\">New</a>\n");
    }

    if posts.is_empty() {
        content.push_str("<p>No posts yet.</p>\n");
    }

    for post in posts {
        content.push_str(&format!(
            "<article class=\"post\">\n<header><h3>{title}</h3><div class=\"about\">by {author} on {created}</div></header>\n<p>{body}</p>\n</article>\n",
            title = escape(&post.title),
            author = escape(&post.author_username),
            created = post.created.format("%Y-%m-%d"),
            body = escape(post.body.as_deref().unwrap_or("")),
        ));
    }

    layout("Posts", user, None, &content)
}

/// The registration form.
pub fn register_page(flash: Option<&str>, username: &str) -> String {
    let content = format!(
        "<h2>Register</h2>\n<form method=\"post\">\n<label for=\"username\">Username</label>\n<input name=\"username\" id=\"username\" value=\"{username}\" required>\n<label for=\"password\">Password</label>\n<input type=\"password\" name=\"password\" id=\"password\" required>\n<input type=\"submit\" value=\"Register\">\n</form>\n",
        username = escape(username),
    );

    layout("Register", None, flash, &content)
}

/// The login form.
pub fn login_page(flash: Option<&str>, username: &str) -> String {
    let content = format!(
        "<h2>Log In</h2>\n<form method=\"post\">\n<label for=\"username\">Username</label>\n<input name=\"username\" id=\"username\" value=\"{username}\" required>\n<label for=\"password\">Password</label>\n<input type=\"password\" name=\"password\" id=\"password\" required>\n<input type=\"submit\" value=\"Log In\">\n</form>\n",
        username = escape(username),
    );

    layout("Log In", None, flash, &content)
}

/// The post creation form.
pub fn create_page(user: &str, flash: Option<&str>, title: &str, body: &str) -> String {
    let content = format!(
        "<h2>New Post</h2>\n<form method=\"post\">\n<label for=\"title\">Title</label>\n<input name=\"title\" id=\"title\" value=\"{title}\">\n<label for=\"body\">Body</label>\n<textarea name=\"body\" id=\"body\">{body}</textarea>\n<input type=\"submit\" value=\"Save\">\n</form>\n",
        title = escape(title),
        body = escape(body),
    );

    layout("New Post", Some(user), flash, &content)
}

/// Minimal page for unrecoverable errors.
pub fn error_page(status: u16) -> String {
    let content = format!("<h2>Something went wrong</h2>\n<p>Error {status}.</p>\n");

    layout("Error", None, None, &content)
}
