pub(crate) mod admin_view;
pub(crate) mod auth_panel;
pub(crate) mod create_post;
pub(crate) mod detail_view;
pub(crate) mod list_view;
