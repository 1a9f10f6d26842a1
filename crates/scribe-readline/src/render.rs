//! Text rendering of views and records.

use colored::Colorize;
use scribe_application::{PostCard, View};
use scribe_core::comment::Comment;
use scribe_core::form::Credentials;
use scribe_core::post::Post;
use scribe_core::session::EndpointInfo;

use crate::command::USAGE;

const INDENT: &str = "  ";

pub fn render_view(view: &View<'_>) -> String {
    let mut out = Vec::new();

    match view {
        View::Anonymous {
            login_form,
            signup_form,
        } => {
            out.push(heading("Login"));
            credentials_fields(&mut out, login_form);
            out.push(hint("/login <email> <password>  or  /set login <field> <value> + /submit login"));
            out.push(String::new());
            out.push(heading("Signup"));
            credentials_fields(&mut out, signup_form);
            out.push(hint("/signup <email> <password>  or  /set signup <field> <value> + /submit signup"));
        }
        View::Authenticated {
            user,
            new_post,
            new_comment,
            posts,
        } => {
            out.push(format!("Welcome, {}!", user).bright_green().bold().to_string());
            out.push(hint("/logout"));
            out.push(String::new());
            out.push(heading("Create Post"));
            out.push(field("title", &new_post.title));
            out.push(field("content", &new_post.content));
            out.push(field("author", &new_post.author));
            out.push(hint("/post <title> | <content> | <author>  or  /submit post"));
            out.push(String::new());
            out.push(heading("Posts"));
            if posts.is_empty() {
                out.push(format!("{}{}", INDENT, "(no posts yet)".bright_black()));
            }
            for card in posts {
                post_card(&mut out, card, &new_comment.content, &new_comment.author);
            }
        }
    }

    out.join("\n")
}

fn post_card(out: &mut Vec<String>, card: &PostCard<'_>, draft_content: &str, draft_author: &str) {
    out.push(String::new());
    out.push(format!(
        "{}{} {}",
        INDENT,
        format!("#{}", card.post.id).bright_black(),
        card.post.title.bright_cyan().bold()
    ));
    for line in card.post.content.lines() {
        out.push(format!("{}{}", INDENT.repeat(2), line));
    }
    out.push(format!("{}Author: {}", INDENT.repeat(2), card.post.author));
    out.push(format!("{}{}", INDENT.repeat(2), "Comments".bold()));
    for comment in &card.comments {
        out.push(format!(
            "{}{} {} {}",
            INDENT.repeat(3),
            format!("#{}", comment.id).bright_black(),
            comment.content,
            format!("(Author: {})", comment.author).bright_black()
        ));
    }
    let draft = if draft_content.is_empty() && draft_author.is_empty() {
        String::new()
    } else {
        format!("  [draft: {} | {}]", draft_content, draft_author)
    };
    out.push(format!(
        "{}{}{}",
        INDENT.repeat(3),
        hint(&format!(
            "/comment {} <content> | <author>",
            card.comment_form_post_id
        )),
        draft
    ));
}

fn credentials_fields(out: &mut Vec<String>, form: &Credentials) {
    out.push(field("email", &form.email));
    out.push(field("password", &"*".repeat(form.password.chars().count())));
}

fn heading(title: &str) -> String {
    format!("== {} ==", title).bright_magenta().bold().to_string()
}

fn field(name: &str, value: &str) -> String {
    let shown = if value.is_empty() {
        "(empty)".bright_black().to_string()
    } else {
        value.to_string()
    };
    format!("{}{}: {}", INDENT, name, shown)
}

fn hint(text: &str) -> String {
    format!("{}{}", INDENT, text.bright_black())
}

pub fn render_post(post: &Post) -> String {
    [
        format!("#{} {}", post.id, post.title).bright_cyan().bold().to_string(),
        post.content.clone(),
        format!("Author: {}", post.author),
    ]
    .join("\n")
}

pub fn render_comment(comment: &Comment) -> String {
    format!(
        "#{} on post #{}: {} (Author: {})",
        comment.id, comment.post_id, comment.content, comment.author
    )
}

pub fn render_endpoints(endpoints: &[EndpointInfo]) -> String {
    if endpoints.is_empty() {
        return "No endpoints advertised.".bright_black().to_string();
    }
    endpoints
        .iter()
        .map(|e| format!("{:<12} {}", e.url.bright_cyan(), e.description))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_help() -> String {
    USAGE
        .iter()
        .map(|(usage, what)| format!("{:<44} {}", usage.bright_cyan(), what.bright_black()))
        .collect::<Vec<_>>()
        .join("\n")
}
