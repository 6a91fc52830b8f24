//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (load on mount, re-fetch after
//! mutations, inline banners) and delegates rendering details to
//! `components`. Decision logic is extracted into plain functions with
//! side-file tests so it runs natively.

pub mod admin_dashboard;
pub mod admin_group_detail;
pub mod admin_groups;
pub mod admin_image_detail;
pub mod admin_labelers;
pub mod home;
pub mod labeler_group_detail;
pub mod labeler_groups;
pub mod labeler_image;
pub mod login;
