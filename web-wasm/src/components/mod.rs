pub mod action_bar;
pub mod header;
pub mod loading_overlay;
pub mod preview_grid;
pub mod result_view;
pub mod upload_area;
