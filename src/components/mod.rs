pub mod avatar_upload;
pub mod back_to_top;
pub mod contact_form;
pub mod navbar;
pub mod preferences_panel;
pub mod project_card;
pub mod share_button;
pub mod status_badge;
pub mod theme_toggle;
pub mod timeline;
