//! Form Controller
//!
//! Holds the single editable draft and drives create/update submission
//! through the cache. Idle(empty draft) -> begin_edit -> Editing; a
//! successful submit returns to Idle, a failed one stays in Editing with
//! the draft intact so the user can correct and retry.

use catalog_core::{Product, ProductFields, ProductId};

use crate::cache::ProductCache;
use crate::notify::{Notice, NoticeKind, Notifier};

/// Controller for the create/edit form
pub struct FormController {
    draft: ProductFields,
    edit_target: Option<ProductId>,
    notifier: Notifier,
}

impl FormController {
    /// Create a controller with an empty draft
    pub fn new() -> Self {
        Self {
            draft: ProductFields::default(),
            edit_target: None,
            notifier: Notifier::new(),
        }
    }

    /// The current draft
    pub fn draft(&self) -> &ProductFields {
        &self.draft
    }

    /// Mutable access to the draft, for field-by-field input
    pub fn draft_mut(&mut self) -> &mut ProductFields {
        &mut self.draft
    }

    /// The id the draft is editing, if any
    pub fn edit_target(&self) -> Option<ProductId> {
        self.edit_target
    }

    /// True when the form is editing an existing record
    pub fn is_editing(&self) -> bool {
        self.edit_target.is_some()
    }

    /// Load an existing record into the draft for editing
    ///
    /// The id is kept only for addressing on submit.
    pub fn begin_edit(&mut self, product: &Product) {
        self.draft = ProductFields::from_product(product);
        self.edit_target = Some(product.id);
    }

    /// Submit the draft through the cache
    ///
    /// On success the draft resets to empty, edit mode ends, and a success
    /// notice appears; on failure the draft is kept and the error notice
    /// carries the failure message. Returns whether the submit succeeded.
    pub async fn submit(&mut self, cache: &mut ProductCache) -> bool {
        match cache.submit(&self.draft, self.edit_target).await {
            Ok(product) => {
                self.draft = ProductFields::default();
                self.edit_target = None;
                self.notifier.show(
                    NoticeKind::Success,
                    format!("Product \"{}\" saved successfully", product.name),
                );
                true
            }
            Err(err) => {
                self.notifier.show(NoticeKind::Error, err.to_string());
                false
            }
        }
    }

    /// The form's current transient notice, if any
    pub fn notice(&self) -> Option<Notice> {
        self.notifier.current()
    }
}

impl Default for FormController {
    fn default() -> Self {
        Self::new()
    }
}
