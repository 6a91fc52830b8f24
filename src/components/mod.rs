//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components are presentational: pages own data loading and mutation and
//! pass values and callbacks down. The two modal forms (`tag_modal`,
//! `labeler_picker_modal`) and the route guard keep their decision logic in
//! plain functions so it tests natively.

pub mod back_button;
pub mod button;
pub mod card;
pub mod empty_state;
pub mod form_input;
pub mod image_uploader;
pub mod labeler_picker_modal;
pub mod loading_spinner;
pub mod message;
pub mod modal;
pub mod navbar;
pub mod page_header;
pub mod protected_route;
pub mod table;
pub mod tabs;
pub mod tag_modal;
