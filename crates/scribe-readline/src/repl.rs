//! Command dispatch against the view-model.

use scribe_application::{BlogApp, FormKind};
use scribe_core::comment::CommentUpdate;
use scribe_core::post::PostUpdate;

use crate::command::Command;
use crate::render;

/// What the REPL should show after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// State may have changed; print the current view.
    View,
    /// Print this text.
    Text(String),
    /// The command is not available in the current view.
    Refused(&'static str),
    Quit,
}

const LOGIN_FIRST: &str = "Log in first: /login <email> <password>";
const LOGOUT_FIRST: &str = "Already logged in. Use /logout first.";

/// Which controls the current view offers. Session forms only exist in the
/// anonymous view; authoring controls only in the authenticated one.
pub fn refusal(command: &Command, authenticated: bool) -> Option<&'static str> {
    let needs_session = match command {
        Command::Login { .. } | Command::Signup { .. } => false,
        Command::Set { form, .. } | Command::Submit { form, .. } => !form.is_anonymous_form(),
        Command::Logout
        | Command::Post { .. }
        | Command::Comment { .. }
        | Command::EditPost { .. }
        | Command::DeletePost(_)
        | Command::EditComment { .. }
        | Command::DeleteComment(_) => true,
        Command::ShowPost(_)
        | Command::ShowComment(_)
        | Command::Refresh
        | Command::View
        | Command::Endpoints
        | Command::Help
        | Command::Quit => return None,
    };

    match (needs_session, authenticated) {
        (true, false) => Some(LOGIN_FIRST),
        (false, true) => Some(LOGOUT_FIRST),
        _ => None,
    }
}

/// Runs one command. Network failures are logged by the app and never
/// surface here.
pub async fn dispatch(app: &mut BlogApp, command: Command) -> Reply {
    if let Some(reason) = refusal(&command, app.is_authenticated()) {
        return Reply::Refused(reason);
    }

    match command {
        Command::Quit => Reply::Quit,
        Command::Help => Reply::Text(render::render_help()),
        Command::View => Reply::View,
        Command::Refresh => {
            app.load().await;
            Reply::View
        }
        Command::Endpoints => Reply::Text(render::render_endpoints(
            &app.describe_endpoints().await,
        )),
        Command::Login { email, password } => {
            let fields = [("email", email.as_str()), ("password", password.as_str())];
            if let Err(reply) = fill(app, FormKind::Login, &fields) {
                return reply;
            }
            app.login().await;
            Reply::View
        }
        Command::Signup { email, password } => {
            let fields = [("email", email.as_str()), ("password", password.as_str())];
            if let Err(reply) = fill(app, FormKind::Signup, &fields) {
                return reply;
            }
            app.signup().await;
            Reply::View
        }
        Command::Logout => {
            app.logout().await;
            Reply::View
        }
        Command::Post {
            title,
            content,
            author,
        } => {
            let fields = [
                ("title", title.as_str()),
                ("content", content.as_str()),
                ("author", author.as_str()),
            ];
            if let Err(reply) = fill(app, FormKind::NewPost, &fields) {
                return reply;
            }
            app.submit_new_post().await;
            Reply::View
        }
        Command::Comment {
            post_id,
            content,
            author,
        } => {
            let fields = [("content", content.as_str()), ("author", author.as_str())];
            if let Err(reply) = fill(app, FormKind::NewComment, &fields) {
                return reply;
            }
            app.submit_new_comment(post_id).await;
            Reply::View
        }
        Command::Set { form, field, value } => match app.update_form(form, &field, &value) {
            Ok(()) => Reply::Text(format!("{}.{} updated", form, field)),
            Err(e) => Reply::Text(e.to_string()),
        },
        Command::Submit { form, post_id } => {
            match form {
                FormKind::Login => app.login().await,
                FormKind::Signup => app.signup().await,
                FormKind::NewPost => app.submit_new_post().await,
                FormKind::NewComment => match post_id {
                    Some(post_id) => app.submit_new_comment(post_id).await,
                    None => {
                        return Reply::Text("A comment needs the id of its post.".to_string());
                    }
                },
            }
            Reply::View
        }
        Command::EditPost { id, title, content } => {
            app.edit_post(id, PostUpdate { title, content }).await;
            Reply::View
        }
        Command::DeletePost(id) => {
            app.remove_post(id).await;
            Reply::View
        }
        Command::EditComment { id, content } => {
            app.edit_comment(id, CommentUpdate { content }).await;
            Reply::View
        }
        Command::DeleteComment(id) => {
            app.remove_comment(id).await;
            Reply::View
        }
        Command::ShowPost(id) => match app.fetch_post(id).await {
            Some(post) => Reply::Text(render::render_post(&post)),
            None => Reply::Text(format!("Post #{} could not be loaded.", id)),
        },
        Command::ShowComment(id) => match app.fetch_comment(id).await {
            Some(comment) => Reply::Text(render::render_comment(&comment)),
            None => Reply::Text(format!("Comment #{} could not be loaded.", id)),
        },
    }
}

/// Writes several inputs into one form, as if typed field by field.
fn fill(app: &mut BlogApp, form: FormKind, fields: &[(&str, &str)]) -> Result<(), Reply> {
    for (field, value) in fields {
        app.update_form(form, field, value)
            .map_err(|e| Reply::Text(e.to_string()))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use scribe_core::comment::{Comment, CommentId, NewComment};
    use scribe_core::form::Credentials;
    use scribe_core::post::{NewPost, Post, PostId};
    use scribe_core::session::{AccessToken, EndpointInfo};
    use scribe_core::{BlogApi, Result, ScribeError};
    use std::sync::Arc;

    /// Accepts every write and serves empty lists.
    struct StubApi;

    #[async_trait]
    impl BlogApi for StubApi {
        async fn endpoints(&self) -> Result<Vec<EndpointInfo>> {
            Err(ScribeError::transport("offline"))
        }
        async fn list_posts(&self) -> Result<Vec<Post>> {
            Ok(Vec::new())
        }
        async fn get_post(&self, id: PostId) -> Result<Post> {
            Err(ScribeError::http(404, format!("Post {id} not found")))
        }
        async fn create_post(&self, _post: &NewPost) -> Result<()> {
            Ok(())
        }
        async fn update_post(&self, _id: PostId, _update: &PostUpdate) -> Result<()> {
            Ok(())
        }
        async fn delete_post(&self, _id: PostId) -> Result<()> {
            Ok(())
        }
        async fn list_comments(&self) -> Result<Vec<Comment>> {
            Ok(Vec::new())
        }
        async fn get_comment(&self, id: CommentId) -> Result<Comment> {
            Err(ScribeError::http(404, format!("Comment {id} not found")))
        }
        async fn create_comment(&self, _comment: &NewComment) -> Result<()> {
            Ok(())
        }
        async fn update_comment(&self, _id: CommentId, _update: &CommentUpdate) -> Result<()> {
            Ok(())
        }
        async fn delete_comment(&self, _id: CommentId) -> Result<()> {
            Ok(())
        }
        async fn login(&self, _credentials: &Credentials) -> Result<AccessToken> {
            Ok(AccessToken::bearer("stub"))
        }
        async fn register(&self, _credentials: &Credentials) -> Result<()> {
            Ok(())
        }
        async fn set_bearer_token(&self, _token: Option<&AccessToken>) {}
    }

    fn app() -> BlogApp {
        BlogApp::new(Arc::new(StubApi))
    }

    #[tokio::test]
    async fn test_login_then_post_flow() {
        let mut app = app();

        let reply = dispatch(&mut app, parse("/post T | C | A")).await;
        assert_eq!(reply, Reply::Refused(LOGIN_FIRST));

        assert_eq!(dispatch(&mut app, parse("/login ann@example.com pw")).await, Reply::View);
        assert_eq!(app.user(), Some("ann@example.com"));

        assert_eq!(dispatch(&mut app, parse("/post T | C | A")).await, Reply::View);
        assert_eq!(app.new_post(), &NewPost::default());

        assert_eq!(dispatch(&mut app, parse("/logout")).await, Reply::View);
        assert!(!app.is_authenticated());
    }

    #[tokio::test]
    async fn test_set_reports_unknown_field() {
        let mut app = app();

        let reply = dispatch(&mut app, parse("/set login username ann")).await;
        assert_eq!(
            reply,
            Reply::Text("Form 'credentials' has no field named 'username'".to_string())
        );

        let reply = dispatch(&mut app, parse("/set login email ann@example.com")).await;
        assert_eq!(reply, Reply::Text("login.email updated".to_string()));
        assert_eq!(app.login_form().email, "ann@example.com");
    }

    #[tokio::test]
    async fn test_failed_lookups_are_reported_as_text() {
        let mut app = app();

        assert_eq!(
            dispatch(&mut app, parse("/show-post 3")).await,
            Reply::Text("Post #3 could not be loaded.".to_string())
        );
        assert_eq!(dispatch(&mut app, parse("quit")).await, Reply::Quit);
    }

    fn parse(line: &str) -> Command {
        Command::parse(line).unwrap()
    }

    #[test]
    fn test_anonymous_view_offers_session_forms_only() {
        assert_eq!(refusal(&parse("/login a@b.c pw"), false), None);
        assert_eq!(refusal(&parse("/set signup email a@b.c"), false), None);
        assert_eq!(refusal(&parse("/post T | C | A"), false), Some(LOGIN_FIRST));
        assert_eq!(refusal(&parse("/submit comment 1"), false), Some(LOGIN_FIRST));
        assert_eq!(refusal(&parse("/logout"), false), Some(LOGIN_FIRST));
    }

    #[test]
    fn test_authenticated_view_hides_session_forms() {
        assert_eq!(refusal(&parse("/login a@b.c pw"), true), Some(LOGOUT_FIRST));
        assert_eq!(refusal(&parse("/submit login"), true), Some(LOGOUT_FIRST));
        assert_eq!(refusal(&parse("/comment 1 hi | bo"), true), None);
        assert_eq!(refusal(&parse("/delete-post 3"), true), None);
    }

    #[test]
    fn test_read_only_commands_always_allowed() {
        for line in ["/refresh", "/view", "/endpoints", "/help", "/show-post 1", "quit"] {
            assert_eq!(refusal(&parse(line), false), None, "{line}");
            assert_eq!(refusal(&parse(line), true), None, "{line}");
        }
    }
}
