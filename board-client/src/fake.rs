//! Бэкенд доски в памяти для тестов представлений.

use std::cell::{Cell, RefCell};

use async_trait::async_trait;

use crate::api::BoardApi;
use crate::error::{BoardClientError, BoardClientResult};
use crate::models::{
    Author, Comment, CommentAuthor, LoginResponse, Post, PostsPage, Role, Session, User,
};

pub(crate) const FAKE_PASSWORD: &str = "password123";

#[derive(Debug, Default)]
struct State {
    users: Vec<User>,
    posts: Vec<Post>,
    viewer: Option<String>,
    next_id: u64,
}

#[derive(Debug, Default)]
pub(crate) struct FakeBoard {
    state: RefCell<State>,
    offline: Cell<bool>,
    reads_failing: Cell<bool>,
    get_post_calls: Cell<usize>,
    list_users_calls: Cell<usize>,
}

impl FakeBoard {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    fn next_id(&self, prefix: &str) -> String {
        let mut state = self.state.borrow_mut();
        state.next_id += 1;
        format!("{prefix}{}", state.next_id)
    }

    pub(crate) fn add_user(&self, nickname: &str, role: Role) -> String {
        let id = self.next_id("u");
        self.state.borrow_mut().users.push(User {
            id: id.clone(),
            email: format!("{nickname}@univ.ac.kr"),
            nickname: nickname.to_string(),
            role,
            blocked: false,
        });
        id
    }

    pub(crate) fn add_post(&self, author_id: &str, title: &str) -> String {
        let id = self.next_id("p");
        let author = self.author(author_id);
        self.state.borrow_mut().posts.push(Post {
            id: id.clone(),
            title: title.to_string(),
            content: format!("{title} body"),
            author,
            comments: Vec::new(),
            likes: Vec::new(),
        });
        id
    }

    pub(crate) fn add_comment_as(&self, post_id: &str, user_id: &str, text: &str) -> String {
        let id = self.next_id("c");
        let nickname = self.author(user_id).nickname;
        let mut state = self.state.borrow_mut();
        if let Some(post) = state.posts.iter_mut().find(|p| p.id == post_id) {
            post.comments.push(Comment {
                id: id.clone(),
                text: text.to_string(),
                user: Some(CommentAuthor {
                    id: user_id.to_string(),
                    nickname,
                }),
            });
        }
        id
    }

    pub(crate) fn log_in(&self, user_id: &str) {
        self.state.borrow_mut().viewer = Some(user_id.to_string());
    }

    pub(crate) fn log_out(&self) {
        self.state.borrow_mut().viewer = None;
    }

    pub(crate) fn set_offline(&self, offline: bool) {
        self.offline.set(offline);
    }

    /// `get_post` и `list_users` отвечают 503, изменения проходят.
    pub(crate) fn set_reads_failing(&self, failing: bool) {
        self.reads_failing.set(failing);
    }

    pub(crate) fn get_post_calls(&self) -> usize {
        self.get_post_calls.get()
    }

    pub(crate) fn list_users_calls(&self) -> usize {
        self.list_users_calls.get()
    }

    pub(crate) fn post(&self, id: &str) -> Option<Post> {
        self.state
            .borrow()
            .posts
            .iter()
            .find(|p| p.id == id)
            .cloned()
    }

    fn author(&self, user_id: &str) -> Author {
        let state = self.state.borrow();
        let user = state.users.iter().find(|u| u.id == user_id);
        Author {
            id: user_id.to_string(),
            nickname: user.map(|u| u.nickname.clone()).unwrap_or_default(),
            email: user.map(|u| u.email.clone()).unwrap_or_default(),
        }
    }

    fn online(&self) -> BoardClientResult<()> {
        if self.offline.get() {
            return Err(BoardClientError::Status {
                status: 503,
                message: "backend unreachable".to_string(),
            });
        }
        Ok(())
    }

    fn readable(&self) -> BoardClientResult<()> {
        self.online()?;
        if self.reads_failing.get() {
            return Err(BoardClientError::Status {
                status: 503,
                message: "read replica unavailable".to_string(),
            });
        }
        Ok(())
    }

    fn viewer(&self) -> BoardClientResult<Session> {
        self.online()?;
        let state = self.state.borrow();
        let viewer = state
            .viewer
            .as_deref()
            .ok_or_else(|| BoardClientError::Unauthorized("login required".to_string()))?;
        let user = state
            .users
            .iter()
            .find(|u| u.id == viewer)
            .ok_or_else(|| BoardClientError::Unauthorized("unknown user".to_string()))?;
        Ok(Session {
            user_id: user.id.clone(),
            role: user.role.clone(),
            email: Some(user.email.clone()),
        })
    }

    fn admin(&self) -> BoardClientResult<Session> {
        let session = self.viewer()?;
        if !session.is_admin() {
            return Err(BoardClientError::Forbidden("admin only".to_string()));
        }
        Ok(session)
    }
}

fn not_found(what: &str) -> BoardClientError {
    BoardClientError::NotFound(format!("{what} not found"))
}

#[async_trait(?Send)]
impl BoardApi for FakeBoard {
    async fn list_posts(
        &self,
        page: u32,
        limit: u32,
        search: &str,
    ) -> BoardClientResult<PostsPage> {
        self.online()?;
        let needle = search.to_lowercase();
        let state = self.state.borrow();
        let matching: Vec<&Post> = state
            .posts
            .iter()
            .filter(|p| p.title.to_lowercase().contains(&needle))
            .collect();
        let skip = (page.saturating_sub(1) as usize) * limit as usize;
        Ok(PostsPage {
            total: matching.len() as u64,
            posts: matching
                .into_iter()
                .skip(skip)
                .take(limit as usize)
                .cloned()
                .collect(),
        })
    }

    async fn get_post(&self, id: &str) -> BoardClientResult<Post> {
        self.get_post_calls.set(self.get_post_calls.get() + 1);
        self.readable()?;
        self.post(id).ok_or_else(|| not_found("post"))
    }

    async fn create_post(&self, title: &str, content: &str) -> BoardClientResult<Post> {
        let viewer = self.viewer()?;
        let id = self.add_post(&viewer.user_id, title);
        let mut state = self.state.borrow_mut();
        let post = state
            .posts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| not_found("post"))?;
        post.content = content.to_string();
        Ok(post.clone())
    }

    async fn add_comment(&self, post_id: &str, text: &str) -> BoardClientResult<()> {
        let viewer = self.viewer()?;
        self.post(post_id).ok_or_else(|| not_found("post"))?;
        self.add_comment_as(post_id, &viewer.user_id, text);
        Ok(())
    }

    async fn delete_comment(&self, post_id: &str, comment_id: &str) -> BoardClientResult<()> {
        let viewer = self.viewer()?;
        let mut state = self.state.borrow_mut();
        let post = state
            .posts
            .iter_mut()
            .find(|p| p.id == post_id)
            .ok_or_else(|| not_found("post"))?;
        let index = post
            .comments
            .iter()
            .position(|c| c.id == comment_id)
            .ok_or_else(|| not_found("comment"))?;
        let is_author = post.comments[index]
            .user
            .as_ref()
            .is_some_and(|u| u.id == viewer.user_id);
        if !is_author && !viewer.is_admin() {
            return Err(BoardClientError::Forbidden("not your comment".to_string()));
        }
        post.comments.remove(index);
        Ok(())
    }

    async fn delete_post(&self, id: &str) -> BoardClientResult<()> {
        let viewer = self.viewer()?;
        let mut state = self.state.borrow_mut();
        let index = state
            .posts
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| not_found("post"))?;
        if state.posts[index].author.id != viewer.user_id && !viewer.is_admin() {
            return Err(BoardClientError::Forbidden("not your post".to_string()));
        }
        state.posts.remove(index);
        Ok(())
    }

    async fn toggle_like(&self, id: &str) -> BoardClientResult<()> {
        let viewer = self.viewer()?;
        let mut state = self.state.borrow_mut();
        let post = state
            .posts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| not_found("post"))?;
        match post.likes.iter().position(|u| *u == viewer.user_id) {
            Some(index) => {
                post.likes.remove(index);
            }
            None => post.likes.push(viewer.user_id),
        }
        Ok(())
    }

    async fn me(&self) -> BoardClientResult<Session> {
        self.viewer()
    }

    async fn list_users(&self) -> BoardClientResult<Vec<User>> {
        self.list_users_calls.set(self.list_users_calls.get() + 1);
        self.admin()?;
        self.readable()?;
        Ok(self.state.borrow().users.clone())
    }

    async fn set_user_role(&self, id: &str, role: &Role) -> BoardClientResult<()> {
        self.admin()?;
        let mut state = self.state.borrow_mut();
        let user = state
            .users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or_else(|| not_found("user"))?;
        user.role = role.clone();
        Ok(())
    }

    async fn toggle_user_block(&self, id: &str) -> BoardClientResult<()> {
        self.admin()?;
        let mut state = self.state.borrow_mut();
        let user = state
            .users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or_else(|| not_found("user"))?;
        user.blocked = !user.blocked;
        Ok(())
    }

    async fn login(&self, email: &str, password: &str) -> BoardClientResult<LoginResponse> {
        self.online()?;
        let state = self.state.borrow();
        let user = state
            .users
            .iter()
            .find(|u| u.email == email)
            .filter(|_| password == FAKE_PASSWORD)
            .ok_or_else(|| BoardClientError::Unauthorized("invalid credentials".to_string()))?;
        Ok(LoginResponse {
            token: format!("token-{}", user.id),
        })
    }

    async fn signup(&self, email: &str, _password: &str, nickname: &str) -> BoardClientResult<()> {
        self.online()?;
        if self.state.borrow().users.iter().any(|u| u.email == email) {
            return Err(BoardClientError::Status {
                status: 409,
                message: "email already registered".to_string(),
            });
        }
        let id = self.add_user(nickname, Role::User);
        let mut state = self.state.borrow_mut();
        if let Some(user) = state.users.iter_mut().find(|u| u.id == id) {
            user.email = email.to_string();
        }
        Ok(())
    }
}
