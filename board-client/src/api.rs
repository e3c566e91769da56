use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::credentials::Credentials;
use crate::error::{BoardClientError, BoardClientResult};
use crate::models::{LoginResponse, Post, PostsPage, Role, Session, User};

/// Префикс REST API на сервере.
pub const API_PREFIX: &str = "/api";

#[derive(Debug, Serialize)]
struct LoginRequestDto<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Serialize)]
struct SignupRequestDto<'a> {
    email: &'a str,
    password: &'a str,
    nickname: &'a str,
}

#[derive(Debug, Serialize)]
struct CreatePostRequestDto<'a> {
    title: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct CommentRequestDto<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
struct RoleRequestDto<'a> {
    role: &'a str,
}

#[derive(Debug, Serialize)]
struct ListPostsQuery<'a> {
    page: u32,
    limit: u32,
    search: &'a str,
}

#[derive(Debug, Deserialize)]
struct ErrorResponseDto {
    message: Option<String>,
    error: Option<String>,
}

/// Операции бэкенда доски, которые нужны представлениям.
///
/// [`ApiClient`] реализует их поверх HTTP; в тестах используется фейк в памяти.
#[async_trait(?Send)]
pub trait BoardApi {
    /// `GET /posts?page&limit&search`
    async fn list_posts(&self, page: u32, limit: u32, search: &str)
    -> BoardClientResult<PostsPage>;
    /// `GET /posts/:id`
    async fn get_post(&self, id: &str) -> BoardClientResult<Post>;
    /// `POST /posts`
    async fn create_post(&self, title: &str, content: &str) -> BoardClientResult<Post>;
    /// `POST /posts/:id/comments`
    async fn add_comment(&self, post_id: &str, text: &str) -> BoardClientResult<()>;
    /// `DELETE /posts/:id/comments/:commentId`
    async fn delete_comment(&self, post_id: &str, comment_id: &str) -> BoardClientResult<()>;
    /// `DELETE /posts/:id`
    async fn delete_post(&self, id: &str) -> BoardClientResult<()>;
    /// `POST /posts/:id/like`
    async fn toggle_like(&self, id: &str) -> BoardClientResult<()>;
    /// `GET /me`
    async fn me(&self) -> BoardClientResult<Session>;
    /// `GET /admin/users`
    async fn list_users(&self) -> BoardClientResult<Vec<User>>;
    /// `PATCH /admin/users/:id/role`
    async fn set_user_role(&self, id: &str, role: &Role) -> BoardClientResult<()>;
    /// `PATCH /admin/users/:id/toggle-block`
    async fn toggle_user_block(&self, id: &str) -> BoardClientResult<()>;
    /// `POST /auth/login`
    async fn login(&self, email: &str, password: &str) -> BoardClientResult<LoginResponse>;
    /// `POST /auth/signup`
    async fn signup(&self, email: &str, password: &str, nickname: &str)
    -> BoardClientResult<()>;
}

#[derive(Debug, Clone)]
/// HTTP-клиент для REST API доски.
///
/// К каждому запросу добавляется `Authorization: Bearer <token>`, если в
/// переданных [`Credentials`] есть токен.
pub struct ApiClient {
    base_url: String,
    client: Client,
    credentials: Credentials,
}

impl ApiClient {
    /// Создаёт клиент с базовым URL сервера (без `/api`) и учётными данными.
    pub fn new(base_url: impl Into<String>, credentials: Credentials) -> Self {
        Self {
            base_url: base_url.into(),
            client: Client::new(),
            credentials,
        }
    }

    /// Учётные данные, которыми пользуется клиент.
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}{}/{}",
            self.base_url.trim_end_matches('/'),
            API_PREFIX,
            path.trim_start_matches('/')
        )
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let request = self.client.request(method, self.endpoint(path));
        match self.credentials.token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn decode_error(response: Response) -> BoardClientError {
        let status = response.status();

        let message = match response.json::<ErrorResponseDto>().await {
            Ok(body) => body.message.or(body.error),
            Err(_) => None,
        };
        BoardClientError::from_http_status(status, message)
    }

    async fn execute(request: RequestBuilder) -> BoardClientResult<Response> {
        let response = request
            .send()
            .await
            .map_err(BoardClientError::from_reqwest)?;
        if !response.status().is_success() {
            return Err(Self::decode_error(response).await);
        }
        Ok(response)
    }

    async fn fetch<TRes>(request: RequestBuilder) -> BoardClientResult<TRes>
    where
        TRes: DeserializeOwned,
    {
        Self::execute(request)
            .await?
            .json::<TRes>()
            .await
            .map_err(BoardClientError::from_reqwest)
    }

    /// Для эндпоинтов, у которых важен только статус ответа.
    async fn send(request: RequestBuilder) -> BoardClientResult<()> {
        Self::execute(request).await?;
        Ok(())
    }
}

#[async_trait(?Send)]
impl BoardApi for ApiClient {
    async fn list_posts(
        &self,
        page: u32,
        limit: u32,
        search: &str,
    ) -> BoardClientResult<PostsPage> {
        let query = ListPostsQuery {
            page,
            limit,
            search,
        };
        Self::fetch(self.request(Method::GET, "/posts").query(&query)).await
    }

    async fn get_post(&self, id: &str) -> BoardClientResult<Post> {
        Self::fetch(self.request(Method::GET, &format!("/posts/{id}"))).await
    }

    async fn create_post(&self, title: &str, content: &str) -> BoardClientResult<Post> {
        let payload = CreatePostRequestDto { title, content };
        Self::fetch(self.request(Method::POST, "/posts").json(&payload)).await
    }

    async fn add_comment(&self, post_id: &str, text: &str) -> BoardClientResult<()> {
        let payload = CommentRequestDto { text };
        Self::send(
            self.request(Method::POST, &format!("/posts/{post_id}/comments"))
                .json(&payload),
        )
        .await
    }

    async fn delete_comment(&self, post_id: &str, comment_id: &str) -> BoardClientResult<()> {
        Self::send(self.request(
            Method::DELETE,
            &format!("/posts/{post_id}/comments/{comment_id}"),
        ))
        .await
    }

    async fn delete_post(&self, id: &str) -> BoardClientResult<()> {
        Self::send(self.request(Method::DELETE, &format!("/posts/{id}"))).await
    }

    async fn toggle_like(&self, id: &str) -> BoardClientResult<()> {
        Self::send(self.request(Method::POST, &format!("/posts/{id}/like"))).await
    }

    async fn me(&self) -> BoardClientResult<Session> {
        Self::fetch(self.request(Method::GET, "/me")).await
    }

    async fn list_users(&self) -> BoardClientResult<Vec<User>> {
        Self::fetch(self.request(Method::GET, "/admin/users")).await
    }

    async fn set_user_role(&self, id: &str, role: &Role) -> BoardClientResult<()> {
        let payload = RoleRequestDto {
            role: role.as_str(),
        };
        Self::send(
            self.request(Method::PATCH, &format!("/admin/users/{id}/role"))
                .json(&payload),
        )
        .await
    }

    async fn toggle_user_block(&self, id: &str) -> BoardClientResult<()> {
        Self::send(self.request(Method::PATCH, &format!("/admin/users/{id}/toggle-block"))).await
    }

    async fn login(&self, email: &str, password: &str) -> BoardClientResult<LoginResponse> {
        let payload = LoginRequestDto { email, password };
        Self::fetch(self.request(Method::POST, "/auth/login").json(&payload)).await
    }

    async fn signup(&self, email: &str, password: &str, nickname: &str) -> BoardClientResult<()> {
        let payload = SignupRequestDto {
            email,
            password,
            nickname,
        };
        Self::send(self.request(Method::POST, "/auth/signup").json(&payload)).await
    }
}
