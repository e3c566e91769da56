use std::fmt::Write;

use board_client::{DetailView, ListView, Session, User};

pub(crate) fn render_list(view: &ListView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Univ Community");
    if !view.search().is_empty() {
        let _ = writeln!(out, "search: {:?}", view.search());
    }

    let mut links = vec!["create".to_string()];
    if view.show_admin_link() {
        links.push("admin".to_string());
    }
    match view.viewer_label() {
        Some(user_id) => {
            links.push(format!("user {user_id}"));
            links.push("logout".to_string());
        }
        None => {
            links.push("login".to_string());
            links.push("signup".to_string());
        }
    }
    let _ = writeln!(out, "[{}]", links.join(" | "));

    if view.posts().is_empty() {
        let _ = writeln!(out, "(no posts)");
    }
    for post in view.posts() {
        let _ = writeln!(
            out,
            "- [{}] {} by {} ({})",
            post.id, post.title, post.author.nickname, post.author.email
        );
    }

    let pagination = view.pagination();
    let _ = writeln!(
        out,
        "{} prev | page {} | next {}",
        control(!pagination.prev_disabled()),
        view.page_indicator(),
        control(!pagination.next_disabled()),
    );
    out
}

pub(crate) fn render_detail(view: &DetailView) -> String {
    let mut out = String::new();
    let Some(post) = view.post() else {
        let _ = writeln!(out, "Loading...");
        return out;
    };

    let _ = writeln!(out, "{}", post.title);
    let _ = writeln!(out, "by {} ({})", post.author.nickname, post.author.email);
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", post.content);
    let _ = writeln!(out);
    let _ = writeln!(out, "likes: {}", view.like_count());
    if view.show_delete_post() {
        let _ = writeln!(out, "[delete-post available]");
    }

    let _ = writeln!(out, "comments ({}):", post.comments.len());
    for comment in &post.comments {
        let marker = if view.show_delete_comment(comment) {
            " [delete-comment available]"
        } else {
            ""
        };
        let _ = writeln!(
            out,
            "- [{}] {}: {}{marker}",
            comment.id,
            comment.author_name(),
            comment.text
        );
    }
    out
}

pub(crate) fn render_users(users: &[User]) -> String {
    let mut out = String::new();
    if users.is_empty() {
        let _ = writeln!(out, "(no users)");
    }
    for user in users {
        let blocked = if user.blocked { " (blocked)" } else { "" };
        let _ = writeln!(
            out,
            "- [{}] {} ({}) - {}{blocked}",
            user.id, user.email, user.nickname, user.role
        );
    }
    out
}

pub(crate) fn render_session(session: Option<&Session>) -> String {
    match session {
        Some(session) => format!(
            "user: {}\nrole: {}\nemail: {}\n",
            session.user_id,
            session.role,
            session.email.as_deref().unwrap_or("-")
        ),
        None => "anonymous\n".to_string(),
    }
}

fn control(enabled: bool) -> &'static str {
    if enabled { "[x]" } else { "[ ]" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use board_client::{Author, Comment, CommentAuthor, Post, PostsPage, Role};

    fn session(user_id: &str, role: Role) -> Session {
        Session {
            user_id: user_id.to_string(),
            role,
            email: None,
        }
    }

    fn post(id: &str, author: &str) -> Post {
        Post {
            id: id.to_string(),
            title: format!("title {id}"),
            content: "content".to_string(),
            author: Author {
                id: author.to_string(),
                nickname: author.to_string(),
                email: format!("{author}@univ.ac.kr"),
            },
            comments: vec![Comment {
                id: "c1".to_string(),
                text: "nice".to_string(),
                user: Some(CommentAuthor {
                    id: "bob".to_string(),
                    nickname: "bob".to_string(),
                }),
            }],
            likes: vec!["bob".to_string()],
        }
    }

    fn loaded_list(viewer: Option<Session>, total: u64) -> ListView {
        let mut view = ListView::new(10);
        view.set_session(viewer);
        let request = view.request();
        view.apply(
            request.ticket,
            Ok(PostsPage {
                posts: vec![post("p1", "alice")],
                total,
            }),
        );
        view
    }

    #[test]
    fn anonymous_list_shows_login_and_signup_without_admin() {
        let out = render_list(&loaded_list(None, 1));
        assert!(out.contains("login | signup"));
        assert!(!out.contains("admin"));
        assert!(out.contains("- [p1] title p1 by alice (alice@univ.ac.kr)"));
        assert!(out.contains("[ ] prev | page 1 / 1 | next [ ]"));
    }

    #[test]
    fn admin_list_shows_admin_and_logout() {
        let out = render_list(&loaded_list(Some(session("root", Role::Admin)), 30));
        assert!(out.contains("[create | admin | user root | logout]"));
        assert!(out.contains("next [x]"));
    }

    #[test]
    fn detail_hides_delete_post_from_non_author() {
        let mut view = DetailView::new("p1");
        view.set_session(Some(session("bob", Role::User)));
        let request = view.request();
        view.apply(request.ticket, Ok(post("p1", "alice")));

        let out = render_detail(&view);
        assert!(!out.contains("[delete-post available]"));
        assert!(out.contains("- [c1] bob: nice [delete-comment available]"));
        assert!(out.contains("likes: 1"));
    }

    #[test]
    fn users_mark_blocked_accounts() {
        let users = vec![User {
            id: "u1".to_string(),
            email: "kim@univ.ac.kr".to_string(),
            nickname: "kim".to_string(),
            role: Role::User,
            blocked: true,
        }];
        assert_eq!(
            render_users(&users),
            "- [u1] kim@univ.ac.kr (kim) - user (blocked)\n"
        );
    }
}
