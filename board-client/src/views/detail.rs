use crate::actions::{self, Alert};
use crate::api::BoardApi;
use crate::error::BoardClientResult;
use crate::generation::{RequestGeneration, Ticket};
use crate::models::{Comment, Post, Session};
use crate::permissions;
use crate::route::Route;
use crate::session::resolve_session;

/// Текст подтверждения перед удалением поста.
pub const DELETE_POST_PROMPT: &str = "Delete this post?";

/// Запрос поста, выданный [`DetailView`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRequest {
    /// Номер запроса.
    pub ticket: Ticket,
    /// Идентификатор поста.
    pub post_id: String,
}

impl DetailRequest {
    /// Выполняет запрос.
    pub async fn send<A>(&self, api: &A) -> BoardClientResult<Post>
    where
        A: BoardApi + ?Sized,
    {
        api.get_post(&self.post_id).await
    }
}

/// Страница поста с комментариями и лайками.
#[derive(Debug, Clone)]
pub struct DetailView {
    post_id: String,
    post: Option<Post>,
    session: Option<Session>,
    comment_input: String,
    status: super::LoadStatus,
    generation: RequestGeneration,
}

impl DetailView {
    /// Страница поста `post_id`, ещё не загруженная.
    pub fn new(post_id: impl Into<String>) -> Self {
        Self {
            post_id: post_id.into(),
            post: None,
            session: None,
            comment_input: String::new(),
            status: super::LoadStatus::Idle,
            generation: RequestGeneration::default(),
        }
    }

    /// Идентификатор открытого поста.
    pub fn post_id(&self) -> &str {
        &self.post_id
    }

    /// Пост по последнему применённому ответу; `None` пока идёт загрузка.
    pub fn post(&self) -> Option<&Post> {
        self.post.as_ref()
    }

    /// Текущий пользователь.
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Состояние загрузки.
    pub fn status(&self) -> &super::LoadStatus {
        &self.status
    }

    /// Текст в поле нового комментария.
    pub fn comment_input(&self) -> &str {
        &self.comment_input
    }

    /// Обновляет поле нового комментария.
    pub fn set_comment_input(&mut self, text: impl Into<String>) {
        self.comment_input = text.into();
    }

    /// Запоминает результат определения пользователя.
    pub fn set_session(&mut self, session: Option<Session>) {
        self.session = session;
    }

    /// Выдаёт запрос на загрузку текущего поста.
    pub fn request(&mut self) -> DetailRequest {
        self.status = super::LoadStatus::Loading;
        DetailRequest {
            ticket: self.generation.issue(),
            post_id: self.post_id.clone(),
        }
    }

    /// Смена параметра маршрута: старый пост сбрасывается.
    pub fn set_post_id(&mut self, post_id: impl Into<String>) -> DetailRequest {
        self.post_id = post_id.into();
        self.post = None;
        self.comment_input.clear();
        self.request()
    }

    /// Применяет ответ. Возвращает `false`, если ответ устарел.
    pub fn apply(&mut self, ticket: Ticket, result: BoardClientResult<Post>) -> bool {
        if !self.generation.is_current(ticket) {
            tracing::debug!(?ticket, "dropping stale post response");
            return false;
        }
        match result {
            Ok(post) => {
                self.post = Some(post);
                self.status = super::LoadStatus::Loaded;
            }
            Err(err) => {
                tracing::warn!(post_id = %self.post_id, error = %err, "failed to fetch post");
                self.status = super::LoadStatus::Failed(err.to_string());
            }
        }
        true
    }

    /// Номер для изменения с последующей перезагрузкой. Выдаётся до
    /// отправки изменения; ответ применяется через [`Self::apply`].
    ///
    /// Загрузки и изменения, начатые раньше, после этого считаются
    /// устаревшими. Текущий пост остаётся на экране.
    pub fn begin_refetch(&mut self) -> Ticket {
        self.generation.issue()
    }

    /// Выполняет запрос и применяет ответ.
    pub async fn fetch<A>(&mut self, api: &A, request: DetailRequest) -> bool
    where
        A: BoardApi + ?Sized,
    {
        let result = request.send(api).await;
        self.apply(request.ticket, result)
    }

    /// Открытие экрана: загружает пост и определяет пользователя.
    pub async fn load<A>(&mut self, api: &A) -> bool
    where
        A: BoardApi + ?Sized,
    {
        let request = self.request();
        let applied = self.fetch(api, request).await;
        self.session = resolve_session(api).await;
        applied
    }

    /// Количество лайков у загруженного поста.
    pub fn like_count(&self) -> usize {
        self.post.as_ref().map_or(0, Post::like_count)
    }

    /// Показывать ли кнопку удаления поста.
    pub fn show_delete_post(&self) -> bool {
        self.post
            .as_ref()
            .is_some_and(|post| permissions::can_delete_post(self.session.as_ref(), post))
    }

    /// Показывать ли кнопку удаления комментария.
    pub fn show_delete_comment(&self, comment: &Comment) -> bool {
        permissions::can_delete_comment(self.session.as_ref(), comment)
    }

    /// Отправляет комментарий из поля ввода. Поле очищается, как только
    /// сервер принял комментарий, даже если перезагрузка поста не удалась.
    pub async fn submit_comment<A>(&mut self, api: &A) -> Result<(), Alert>
    where
        A: BoardApi + ?Sized,
    {
        let ticket = self.begin_refetch();
        match actions::add_comment(api, &self.post_id, &self.comment_input).await {
            Ok(post) => {
                self.comment_input.clear();
                self.apply(ticket, Ok(post));
                Ok(())
            }
            Err(alert) => {
                if alert.is_committed() {
                    self.comment_input.clear();
                }
                Err(alert)
            }
        }
    }

    /// Удаляет комментарий и загружает пост заново. При отказе сервера
    /// комментарий остаётся на экране.
    pub async fn delete_comment<A>(&mut self, api: &A, comment_id: &str) -> Result<(), Alert>
    where
        A: BoardApi + ?Sized,
    {
        let ticket = self.begin_refetch();
        let post = actions::delete_comment(api, &self.post_id, comment_id).await?;
        self.apply(ticket, Ok(post));
        Ok(())
    }

    /// Удаляет пост после подтверждения.
    ///
    /// `Ok(None)`, если пользователь отказался; `Ok(Some(Route::List))`
    /// после успешного удаления.
    pub async fn delete_post<A, F>(&mut self, api: &A, confirm: F) -> Result<Option<Route>, Alert>
    where
        A: BoardApi + ?Sized,
        F: FnOnce(&str) -> bool,
    {
        if !confirm(DELETE_POST_PROMPT) {
            return Ok(None);
        }
        let route = actions::delete_post(api, &self.post_id).await?;
        Ok(Some(route))
    }

    /// Переключает лайк и загружает пост заново.
    pub async fn toggle_like<A>(&mut self, api: &A) -> Result<(), Alert>
    where
        A: BoardApi + ?Sized,
    {
        let ticket = self.begin_refetch();
        let post = actions::toggle_like(api, &self.post_id).await?;
        self.apply(ticket, Ok(post));
        Ok(())
    }
}
