use crate::actions::{self, Alert, REQUEST_FAILED};
use crate::api::BoardApi;
use crate::error::BoardClientResult;
use crate::generation::{RequestGeneration, Ticket};
use crate::models::User;

/// Управление пользователями: полный список без пагинации и фильтров.
#[derive(Debug, Clone, Default)]
pub struct AdminView {
    users: Vec<User>,
    status: super::LoadStatus,
    generation: RequestGeneration,
}

impl AdminView {
    /// Пустой экран.
    pub fn new() -> Self {
        Self::default()
    }

    /// Пользователи по последнему применённому ответу.
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Состояние загрузки.
    pub fn status(&self) -> &super::LoadStatus {
        &self.status
    }

    /// Выдаёт номер для загрузки списка.
    pub fn request(&mut self) -> Ticket {
        self.status = super::LoadStatus::Loading;
        self.generation.issue()
    }

    /// Применяет ответ. Возвращает `false`, если ответ устарел.
    pub fn apply(&mut self, ticket: Ticket, result: BoardClientResult<Vec<User>>) -> bool {
        if !self.generation.is_current(ticket) {
            tracing::debug!(?ticket, "dropping stale users response");
            return false;
        }
        match result {
            Ok(users) => {
                self.users = users;
                self.status = super::LoadStatus::Loaded;
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to fetch users");
                self.status = super::LoadStatus::Failed(err.to_string());
            }
        }
        true
    }

    /// Номер для изменения с последующей перезагрузкой списка. Выдаётся
    /// до отправки изменения; ответ применяется через [`Self::apply`].
    pub fn begin_refetch(&mut self) -> Ticket {
        self.generation.issue()
    }

    /// Открытие экрана: загружает список пользователей.
    pub async fn load<A>(&mut self, api: &A) -> bool
    where
        A: BoardApi + ?Sized,
    {
        let ticket = self.request();
        let result = api.list_users().await;
        self.apply(ticket, result)
    }

    /// Переключает роль пользователя `user ⇄ admin` и загружает список заново.
    pub async fn toggle_role<A>(&mut self, api: &A, user_id: &str) -> Result<(), Alert>
    where
        A: BoardApi + ?Sized,
    {
        let role = self
            .users
            .iter()
            .find(|user| user.id == user_id)
            .map(|user| user.role.clone())
            .ok_or_else(|| {
                tracing::warn!(user_id, "user is not in the loaded list");
                Alert::new(REQUEST_FAILED)
            })?;
        let ticket = self.begin_refetch();
        let users = actions::toggle_role(api, user_id, &role).await?;
        self.apply(ticket, Ok(users));
        Ok(())
    }

    /// Блокирует или разблокирует пользователя и загружает список заново.
    pub async fn toggle_block<A>(&mut self, api: &A, user_id: &str) -> Result<(), Alert>
    where
        A: BoardApi + ?Sized,
    {
        let ticket = self.begin_refetch();
        let users = actions::toggle_block(api, user_id).await?;
        self.apply(ticket, Ok(users));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fake::FakeBoard;
    use crate::models::Role;
    use crate::views::LoadStatus;

    fn role_of<'a>(view: &'a AdminView, id: &str) -> &'a Role {
        &view
            .users()
            .iter()
            .find(|u| u.id == id)
            .expect("user listed")
            .role
    }

    #[tokio::test]
    async fn admin_promotes_user_and_list_is_refetched() {
        let board = FakeBoard::new();
        let root = board.add_user("root", Role::Admin);
        let kim = board.add_user("kim", Role::User);
        board.log_in(&root);
        let mut view = AdminView::new();
        assert!(view.load(&board).await);
        assert_eq!(role_of(&view, &kim), &Role::User);

        view.toggle_role(&board, &kim).await.expect("promote");
        assert_eq!(role_of(&view, &kim), &Role::Admin);
        assert_eq!(board.list_users_calls(), 2);

        view.toggle_role(&board, &kim).await.expect("demote");
        assert_eq!(role_of(&view, &kim), &Role::User);
    }

    #[tokio::test]
    async fn block_toggle_flips_flag() {
        let board = FakeBoard::new();
        let root = board.add_user("root", Role::Admin);
        let kim = board.add_user("kim", Role::User);
        board.log_in(&root);
        let mut view = AdminView::new();
        view.load(&board).await;

        view.toggle_block(&board, &kim).await.expect("block");
        assert!(view.users().iter().any(|u| u.id == kim && u.blocked));
        view.toggle_block(&board, &kim).await.expect("unblock");
        assert!(view.users().iter().all(|u| !u.blocked));
    }

    #[tokio::test]
    async fn toggles_resolving_out_of_order_keep_latest_list() {
        let board = FakeBoard::new();
        let root = board.add_user("root", Role::Admin);
        let kim = board.add_user("kim", Role::User);
        board.log_in(&root);
        let mut view = AdminView::new();
        view.load(&board).await;

        let first = view.begin_refetch();
        let after_first = actions::toggle_block(&board, &kim).await.expect("block");
        let second = view.begin_refetch();
        let after_second = actions::toggle_block(&board, &kim).await.expect("unblock");

        assert!(view.apply(second, Ok(after_second)));
        assert!(!view.apply(first, Ok(after_first)));
        assert!(view.users().iter().all(|u| !u.blocked));
    }

    #[tokio::test]
    async fn failed_toggle_leaves_confirmed_list_on_screen() {
        let board = FakeBoard::new();
        let root = board.add_user("root", Role::Admin);
        let kim = board.add_user("kim", Role::User);
        board.log_in(&root);
        let mut view = AdminView::new();
        view.load(&board).await;
        let before = view.users().to_vec();

        board.set_offline(true);
        let err = view.toggle_role(&board, &kim).await.expect_err("offline");
        assert!(!err.is_committed());
        assert_eq!(view.users(), before.as_slice());
        assert_eq!(role_of(&view, &kim), &Role::User);
    }

    #[tokio::test]
    async fn non_admin_cannot_load_or_mutate() {
        let board = FakeBoard::new();
        let kim = board.add_user("kim", Role::User);
        board.log_in(&kim);
        let mut view = AdminView::new();

        view.load(&board).await;
        assert!(matches!(view.status(), LoadStatus::Failed(_)));
        assert!(view.users().is_empty());

        let err = view.toggle_block(&board, &kim).await.expect_err("forbidden");
        assert_eq!(err.message(), REQUEST_FAILED);
    }
}
