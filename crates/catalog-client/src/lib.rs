//!
//! Catalog Client - form/list client for the Catalog service
//!
//! This crate holds the client-side state: the REST API client, the local
//! product cache, the form controller for create/edit drafts, the list
//! presenter, and the transient notification machinery.

/// REST API client
pub mod api;

/// Client state cache
pub mod cache;

/// Error types
pub mod error;

/// Form controller
pub mod form;

/// List presenter
pub mod list;

/// Transient notifications
pub mod notify;

// Re-export key types
pub use api::ApiClient;
pub use cache::ProductCache;
pub use error::ClientError;
pub use form::FormController;
pub use list::ListPresenter;
pub use notify::{Notice, NoticeKind, Notifier};
