//! Клиентская библиотека университетской доски объявлений.
//!
//! Предоставляет:
//! - HTTP-клиент REST API (`ApiClient`) и трейт `BoardApi` поверх него;
//! - учётные данные (`Credentials`), которые явно передаются клиенту,
//!   и хранилище токена (`TokenStore`);
//! - состояние экранов (`views`): список постов, пост, админка.
//!
//! Все изменения данных выполняются запросом и последующей перезагрузкой
//! ресурса с сервера. Права в интерфейсе (`permissions`) носят
//! справочный характер: решает всегда сервер.
#![warn(missing_docs)]

pub mod actions;
mod api;
pub mod auth;
mod credentials;
mod error;
mod generation;
mod models;
mod pagination;
pub mod permissions;
mod route;
mod session;
pub mod views;

#[cfg(test)]
mod fake;

pub use actions::Alert;
pub use api::{API_PREFIX, ApiClient, BoardApi};
pub use credentials::{Credentials, MemoryTokenStore, TokenStore, normalize_token};
pub use error::{BoardClientError, BoardClientResult};
pub use generation::{RequestGeneration, Ticket};
pub use models::{
    ANONYMOUS_NAME, Author, Comment, CommentAuthor, LoginResponse, Post, PostsPage, Role,
    Session, User,
};
pub use pagination::{DEFAULT_PAGE_LIMIT, Pagination};
pub use route::Route;
pub use session::resolve_session;
pub use views::{
    AdminView, DELETE_POST_PROMPT, DetailRequest, DetailView, ListRequest, ListView, LoadStatus,
};
