/// Размер страницы списка постов.
pub const DEFAULT_PAGE_LIMIT: u32 = 10;

/// Состояние пагинации списка постов. Страницы нумеруются с 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: u32,
    limit: u32,
    total: u64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_LIMIT)
    }
}

impl Pagination {
    /// Первая страница, `total` ещё неизвестен. `limit == 0` заменяется на 1.
    pub fn new(limit: u32) -> Self {
        Self {
            page: 1,
            limit: limit.max(1),
            total: 0,
        }
    }

    /// Та же пагинация, открытая на странице `page` (не меньше 1).
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page.max(1);
        self
    }

    /// Текущая страница.
    pub fn page(&self) -> u32 {
        self.page
    }

    /// Размер страницы.
    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// Общее количество постов по последнему успешному ответу.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Количество страниц: `ceil(total / limit)`.
    pub fn page_count(&self) -> u64 {
        self.total.div_ceil(u64::from(self.limit))
    }

    /// Кнопка «назад» неактивна на первой странице.
    pub fn prev_disabled(&self) -> bool {
        self.page == 1
    }

    /// Кнопка «вперёд» неактивна, когда `page * limit >= total`.
    pub fn next_disabled(&self) -> bool {
        u64::from(self.page) * u64::from(self.limit) >= self.total
    }

    /// Переходит на предыдущую страницу. `false`, если это невозможно.
    pub fn prev(&mut self) -> bool {
        if self.prev_disabled() {
            return false;
        }
        self.page -= 1;
        true
    }

    /// Переходит на следующую страницу. `false`, если это невозможно.
    pub fn next(&mut self) -> bool {
        if self.next_disabled() {
            return false;
        }
        self.page = self.page.saturating_add(1);
        true
    }

    /// Возвращает на первую страницу.
    pub fn reset(&mut self) {
        self.page = 1;
    }

    pub(crate) fn set_total(&mut self, total: u64) {
        self.total = total;
    }
}
