//! # Quill Shared
//!
//! Types crossing the HTTP boundary - form payloads and view models.

pub mod dto;
