//! Состояние экранов клиента.
//!
//! Каждое представление само загружает свои данные при открытии и при
//! смене входных параметров; общего кэша между ними нет. Загрузки
//! разбиты на два шага: `request()` выдаёт номер запроса из
//! [`crate::RequestGeneration`], `apply()` принимает ответ только для
//! последнего выданного номера. Так ответ на устаревший запрос, пришедший
//! позже свежего, не перезапишет экран.

mod admin;
mod detail;
mod list;

pub use admin::AdminView;
pub use detail::{DELETE_POST_PROMPT, DetailRequest, DetailView};
pub use list::{ListRequest, ListView};

/// Состояние последней загрузки представления.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadStatus {
    /// Ничего не загружалось.
    #[default]
    Idle,
    /// Запрос отправлен, ответа ещё нет.
    Loading,
    /// Данные получены.
    Loaded,
    /// Последняя загрузка завершилась ошибкой.
    Failed(String),
}

impl LoadStatus {
    /// `true`, пока запрос в пути.
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}
