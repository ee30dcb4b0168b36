pub mod app;
pub mod auth_view;
pub mod controls_panel;
pub mod game_view;
pub mod password_modal;
pub mod shop_view;
pub mod stats_panel;
