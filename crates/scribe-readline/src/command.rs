//! REPL command parsing.

use scribe_application::FormKind;
use scribe_core::comment::CommentId;
use scribe_core::post::PostId;
use thiserror::Error;

/// Slash commands offered for completion, in help order.
pub const COMMANDS: &[&str] = &[
    "/login",
    "/signup",
    "/logout",
    "/post",
    "/comment",
    "/set",
    "/submit",
    "/edit-post",
    "/delete-post",
    "/edit-comment",
    "/delete-comment",
    "/show-post",
    "/show-comment",
    "/refresh",
    "/view",
    "/endpoints",
    "/help",
];

/// Usage line of every command, shown by `/help`.
pub const USAGE: &[(&str, &str)] = &[
    ("/login <email> <password>", "log in"),
    ("/signup <email> <password>", "create an account"),
    ("/logout", "forget the current user"),
    ("/post <title> | <content> | <author>", "create a post"),
    ("/comment <post-id> <content> | <author>", "comment on a post"),
    ("/set <form> <field> <value>", "edit a form field (login, signup, post, comment)"),
    ("/submit <form> [post-id]", "submit a form; comments need the post id"),
    ("/edit-post <id> <title> | <content>", "edit a post"),
    ("/delete-post <id>", "delete a post"),
    ("/edit-comment <id> <content>", "edit a comment"),
    ("/delete-comment <id>", "delete a comment"),
    ("/show-post <id>", "fetch a single post"),
    ("/show-comment <id>", "fetch a single comment"),
    ("/refresh", "re-fetch posts and comments"),
    ("/view", "print the current view"),
    ("/endpoints", "list the endpoints the server advertises"),
    ("/help", "show this help"),
    ("quit", "exit"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Login { email: String, password: String },
    Signup { email: String, password: String },
    Logout,
    Post { title: String, content: String, author: String },
    Comment { post_id: PostId, content: String, author: String },
    Set { form: FormKind, field: String, value: String },
    Submit { form: FormKind, post_id: Option<PostId> },
    EditPost { id: PostId, title: String, content: String },
    DeletePost(PostId),
    EditComment { id: CommentId, content: String },
    DeleteComment(CommentId),
    ShowPost(PostId),
    ShowComment(CommentId),
    Refresh,
    View,
    Endpoints,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command '{0}'. Type /help for the list of commands.")]
    Unknown(String),
    #[error("Usage: {0}")]
    Usage(&'static str),
    #[error("{0}")]
    Invalid(String),
}

impl Command {
    /// Parses one trimmed, non-empty input line.
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let line = line.trim();
        let (name, rest) = split_word(line);

        match name {
            "quit" | "exit" | "/quit" | "/exit" => Ok(Command::Quit),
            "/login" => {
                let (email, password) = two_words(rest, "/login <email> <password>")?;
                Ok(Command::Login { email, password })
            }
            "/signup" => {
                let (email, password) = two_words(rest, "/signup <email> <password>")?;
                Ok(Command::Signup { email, password })
            }
            "/logout" => no_args(rest, Command::Logout, "/logout"),
            "/post" => {
                const USAGE: &str = "/post <title> | <content> | <author>";
                match pipe_fields(rest).as_slice() {
                    [title, content, author] if !title.is_empty() => Ok(Command::Post {
                        title: title.clone(),
                        content: content.clone(),
                        author: author.clone(),
                    }),
                    _ => Err(CommandError::Usage(USAGE)),
                }
            }
            "/comment" => {
                const USAGE: &str = "/comment <post-id> <content> | <author>";
                let (id, body) = split_word(rest);
                let post_id = parse_id(id, USAGE)?;
                match pipe_fields(body).as_slice() {
                    [content, author] if !content.is_empty() => Ok(Command::Comment {
                        post_id,
                        content: content.clone(),
                        author: author.clone(),
                    }),
                    _ => Err(CommandError::Usage(USAGE)),
                }
            }
            "/set" => {
                const USAGE: &str = "/set <form> <field> <value>";
                let (form, rest) = split_word(rest);
                let (field, value) = split_word(rest);
                if form.is_empty() || field.is_empty() {
                    return Err(CommandError::Usage(USAGE));
                }
                Ok(Command::Set {
                    form: parse_form(form)?,
                    field: field.to_string(),
                    value: value.to_string(),
                })
            }
            "/submit" => {
                const USAGE: &str = "/submit <form> [post-id]";
                let (form, id) = split_word(rest);
                if form.is_empty() {
                    return Err(CommandError::Usage(USAGE));
                }
                let form = parse_form(form)?;
                let post_id = match (form, id.is_empty()) {
                    (FormKind::NewComment, true) => {
                        return Err(CommandError::Usage("/submit comment <post-id>"));
                    }
                    (FormKind::NewComment, false) => Some(parse_id(id, USAGE)?),
                    (_, true) => None,
                    (_, false) => return Err(CommandError::Usage("/submit <form>")),
                };
                Ok(Command::Submit { form, post_id })
            }
            "/edit-post" => {
                const USAGE: &str = "/edit-post <id> <title> | <content>";
                let (id, body) = split_word(rest);
                let id = parse_id(id, USAGE)?;
                match pipe_fields(body).as_slice() {
                    [title, content] if !title.is_empty() => Ok(Command::EditPost {
                        id,
                        title: title.clone(),
                        content: content.clone(),
                    }),
                    _ => Err(CommandError::Usage(USAGE)),
                }
            }
            "/edit-comment" => {
                const USAGE: &str = "/edit-comment <id> <content>";
                let (id, content) = split_word(rest);
                let id = parse_id(id, USAGE)?;
                if content.is_empty() {
                    return Err(CommandError::Usage(USAGE));
                }
                Ok(Command::EditComment {
                    id,
                    content: content.to_string(),
                })
            }
            "/delete-post" => single_id(rest, "/delete-post <id>").map(Command::DeletePost),
            "/delete-comment" => {
                single_id(rest, "/delete-comment <id>").map(Command::DeleteComment)
            }
            "/show-post" => single_id(rest, "/show-post <id>").map(Command::ShowPost),
            "/show-comment" => single_id(rest, "/show-comment <id>").map(Command::ShowComment),
            "/refresh" => no_args(rest, Command::Refresh, "/refresh"),
            "/view" => no_args(rest, Command::View, "/view"),
            "/endpoints" => no_args(rest, Command::Endpoints, "/endpoints"),
            "/help" | "help" => Ok(Command::Help),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

/// Whether a raw input line may be kept in the editor history. Lines that
/// carry a password are not.
pub fn is_history_safe(line: &str) -> bool {
    let (name, rest) = split_word(line.trim());
    match name {
        "/login" | "/signup" => false,
        "/set" => {
            let (form, rest) = split_word(rest);
            let (field, _) = split_word(rest);
            let credentials_form = form
                .parse::<FormKind>()
                .is_ok_and(|kind| kind.is_anonymous_form());
            !(credentials_form && field == "password")
        }
        _ => true,
    }
}

/// Splits off the first whitespace-delimited word; the remainder is trimmed.
fn split_word(s: &str) -> (&str, &str) {
    let s = s.trim_start();
    match s.find(char::is_whitespace) {
        Some(pos) => (&s[..pos], s[pos..].trim()),
        None => (s, ""),
    }
}

fn pipe_fields(s: &str) -> Vec<String> {
    if s.trim().is_empty() {
        return Vec::new();
    }
    s.split('|').map(|part| part.trim().to_string()).collect()
}

fn two_words(rest: &str, usage: &'static str) -> Result<(String, String), CommandError> {
    let words: Vec<&str> = rest.split_whitespace().collect();
    match words.as_slice() {
        [first, second] => Ok((first.to_string(), second.to_string())),
        _ => Err(CommandError::Usage(usage)),
    }
}

fn no_args(rest: &str, command: Command, usage: &'static str) -> Result<Command, CommandError> {
    if rest.is_empty() {
        Ok(command)
    } else {
        Err(CommandError::Usage(usage))
    }
}

fn parse_id(word: &str, usage: &'static str) -> Result<i64, CommandError> {
    word.parse().map_err(|_| CommandError::Usage(usage))
}

fn single_id(rest: &str, usage: &'static str) -> Result<i64, CommandError> {
    let (id, extra) = split_word(rest);
    if !extra.is_empty() {
        return Err(CommandError::Usage(usage));
    }
    parse_id(id, usage)
}

fn parse_form(word: &str) -> Result<FormKind, CommandError> {
    word.parse()
        .map_err(|e: scribe_core::ScribeError| CommandError::Invalid(e.to_string()))
}
