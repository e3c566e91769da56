//! Какие элементы управления показывать пользователю.
//!
//! Это только подсказки для интерфейса: права проверяет сервер, и любой
//! запрос, который он отклонит, закончится ошибкой независимо от того,
//! что показал клиент.

use crate::models::{Comment, Post, Session};

/// Ссылка на админку и управление пользователями.
pub fn can_manage_users(session: Option<&Session>) -> bool {
    session.is_some_and(Session::is_admin)
}

/// Кнопка удаления поста: автор или администратор.
pub fn can_delete_post(session: Option<&Session>, post: &Post) -> bool {
    session.is_some_and(|s| s.is_admin() || s.user_id == post.author.id)
}

/// Кнопка удаления комментария: автор комментария или администратор.
pub fn can_delete_comment(session: Option<&Session>, comment: &Comment) -> bool {
    session.is_some_and(|s| {
        s.is_admin()
            || comment
                .user
                .as_ref()
                .is_some_and(|author| author.id == s.user_id)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Author, CommentAuthor, Role};

    fn session(user_id: &str, role: Role) -> Session {
        Session {
            user_id: user_id.to_string(),
            role,
            email: None,
        }
    }

    fn post_by(author: &str) -> Post {
        Post {
            id: "p1".to_string(),
            title: "t".to_string(),
            content: "c".to_string(),
            author: Author {
                id: author.to_string(),
                nickname: author.to_string(),
                email: format!("{author}@univ.ac.kr"),
            },
            comments: Vec::new(),
            likes: Vec::new(),
        }
    }

    fn comment_by(author: Option<&str>) -> Comment {
        Comment {
            id: "c1".to_string(),
            text: "hi".to_string(),
            user: author.map(|id| CommentAuthor {
                id: id.to_string(),
                nickname: id.to_string(),
            }),
        }
    }

    #[test]
    fn only_admins_manage_users() {
        assert!(!can_manage_users(None));
        assert!(!can_manage_users(Some(&session("u1", Role::User))));
        assert!(!can_manage_users(Some(&session("u1", Role::Other("guest".to_string())))));
        assert!(can_manage_users(Some(&session("u1", Role::Admin))));
    }

    #[test]
    fn post_delete_is_offered_to_author_and_admin_only() {
        let post = post_by("alice");
        assert!(can_delete_post(Some(&session("alice", Role::User)), &post));
        assert!(can_delete_post(Some(&session("root", Role::Admin)), &post));
        assert!(!can_delete_post(Some(&session("bob", Role::User)), &post));
        assert!(!can_delete_post(None, &post));
    }

    #[test]
    fn comment_delete_is_offered_to_author_and_admin_only() {
        let comment = comment_by(Some("bob"));
        assert!(can_delete_comment(Some(&session("bob", Role::User)), &comment));
        assert!(can_delete_comment(Some(&session("root", Role::Admin)), &comment));
        assert!(!can_delete_comment(Some(&session("eve", Role::User)), &comment));

        let orphan = comment_by(None);
        assert!(!can_delete_comment(Some(&session("bob", Role::User)), &orphan));
        assert!(can_delete_comment(Some(&session("root", Role::Admin)), &orphan));
    }
}
