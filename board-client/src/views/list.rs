use crate::api::BoardApi;
use crate::error::BoardClientResult;
use crate::generation::{RequestGeneration, Ticket};
use crate::models::{Post, PostsPage, Session};
use crate::pagination::{DEFAULT_PAGE_LIMIT, Pagination};
use crate::permissions;
use crate::session::resolve_session;

/// Запрос страницы постов, выданный [`ListView`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRequest {
    /// Номер запроса.
    pub ticket: Ticket,
    /// Страница (с 1).
    pub page: u32,
    /// Размер страницы.
    pub limit: u32,
    /// Строка поиска.
    pub search: String,
}

impl ListRequest {
    /// Выполняет запрос.
    pub async fn send<A>(&self, api: &A) -> BoardClientResult<PostsPage>
    where
        A: BoardApi + ?Sized,
    {
        api.list_posts(self.page, self.limit, &self.search).await
    }
}

/// Список постов с поиском и пагинацией.
#[derive(Debug, Clone, Default)]
pub struct ListView {
    search: String,
    pagination: Pagination,
    posts: Vec<Post>,
    session: Option<Session>,
    status: super::LoadStatus,
    generation: RequestGeneration,
}

impl ListView {
    /// Пустой список с заданным размером страницы.
    pub fn new(limit: u32) -> Self {
        Self {
            pagination: Pagination::new(limit),
            ..Self::default()
        }
    }

    /// Список, открытый сразу на странице `page` с поиском `search`.
    pub fn at(page: u32, search: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            pagination: Pagination::new(DEFAULT_PAGE_LIMIT).with_page(page),
            ..Self::default()
        }
    }

    /// Текущая строка поиска.
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Пагинация.
    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    /// Посты по последнему применённому ответу.
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// Текущий пользователь.
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Состояние загрузки.
    pub fn status(&self) -> &super::LoadStatus {
        &self.status
    }

    /// Выдаёт запрос для текущей пары `(page, search)`.
    pub fn request(&mut self) -> ListRequest {
        self.status = super::LoadStatus::Loading;
        ListRequest {
            ticket: self.generation.issue(),
            page: self.pagination.page(),
            limit: self.pagination.limit(),
            search: self.search.clone(),
        }
    }

    /// Меняет строку поиска: страница сбрасывается на первую и сразу
    /// выдаётся новый запрос (без задержки на ввод).
    pub fn set_search(&mut self, search: impl Into<String>) -> ListRequest {
        self.search = search.into();
        self.pagination.reset();
        self.request()
    }

    /// Следующая страница, если кнопка активна.
    pub fn next_page(&mut self) -> Option<ListRequest> {
        self.pagination.next().then(|| self.request())
    }

    /// Предыдущая страница, если кнопка активна.
    pub fn prev_page(&mut self) -> Option<ListRequest> {
        self.pagination.prev().then(|| self.request())
    }

    /// Применяет ответ. Возвращает `false`, если ответ устарел.
    ///
    /// Ошибка загрузки только логируется: на экране остаются прежние посты.
    pub fn apply(&mut self, ticket: Ticket, result: BoardClientResult<PostsPage>) -> bool {
        if !self.generation.is_current(ticket) {
            tracing::debug!(?ticket, "dropping stale posts response");
            return false;
        }
        match result {
            Ok(page) => {
                self.pagination.set_total(page.total);
                self.posts = page.posts;
                self.status = super::LoadStatus::Loaded;
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to fetch posts");
                self.status = super::LoadStatus::Failed(err.to_string());
            }
        }
        true
    }

    /// Запоминает результат определения пользователя.
    pub fn set_session(&mut self, session: Option<Session>) {
        self.session = session;
    }

    /// Выполняет запрос и применяет ответ.
    pub async fn fetch<A>(&mut self, api: &A, request: ListRequest) -> bool
    where
        A: BoardApi + ?Sized,
    {
        let result = request.send(api).await;
        self.apply(request.ticket, result)
    }

    /// Открытие экрана: определяет пользователя и загружает текущую страницу.
    pub async fn load<A>(&mut self, api: &A) -> bool
    where
        A: BoardApi + ?Sized,
    {
        let request = self.request();
        self.session = resolve_session(api).await;
        self.fetch(api, request).await
    }

    /// Показывать ли ссылку на админку.
    pub fn show_admin_link(&self) -> bool {
        permissions::can_manage_users(self.session.as_ref())
    }

    /// Показывать ли ссылки «Login» и «Signup» (вместо «Logout»).
    pub fn show_auth_links(&self) -> bool {
        self.session.is_none()
    }

    /// Подпись текущего пользователя рядом с «Logout».
    pub fn viewer_label(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.user_id.as_str())
    }

    /// Индикатор страницы вида `2 / 5`.
    pub fn page_indicator(&self) -> String {
        format!(
            "{} / {}",
            self.pagination.page(),
            self.pagination.page_count()
        )
    }
}
