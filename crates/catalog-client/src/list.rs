//! List Presenter
//!
//! Pure rendering of the cached products as rows, plus the edit/delete
//! dispatch for a row. Deletion reports the actual outcome: the notice is
//! a success only once the server has confirmed the removal.

use catalog_core::{Product, ProductId};

use crate::cache::ProductCache;
use crate::notify::{Notice, NoticeKind, Notifier};

/// Presenter for the product list
pub struct ListPresenter {
    notifier: Notifier,
}

impl ListPresenter {
    /// Create a presenter with no pending notice
    pub fn new() -> Self {
        Self {
            notifier: Notifier::new(),
        }
    }

    /// Render the products as an aligned text table
    pub fn render(&self, products: &[Product]) -> String {
        if products.is_empty() {
            return "No products yet.".to_string();
        }

        let mut out = String::new();
        out.push_str(&format!(
            "{:>6}  {:<20}  {:<32}  {:>10}  {:>8}\n",
            "id", "name", "description", "price", "quantity"
        ));
        for product in products {
            out.push_str(&format!(
                "{:>6}  {:<20}  {:<32}  {:>10.2}  {:>8}\n",
                product.id, product.name, product.description, product.price, product.quantity
            ));
        }
        out
    }

    /// Resolve a row for editing
    pub fn edit_target<'a>(&self, products: &'a [Product], id: ProductId) -> Option<&'a Product> {
        products.iter().find(|product| product.id == id)
    }

    /// Delete a row through the cache and report the outcome
    ///
    /// Returns whether the delete was confirmed by the server.
    pub async fn delete(&mut self, cache: &mut ProductCache, id: ProductId) -> bool {
        match cache.remove(id).await {
            Ok(()) => {
                self.notifier
                    .show(NoticeKind::Success, "Product deleted successfully!");
                true
            }
            Err(err) => {
                self.notifier.show(NoticeKind::Error, err.to_string());
                false
            }
        }
    }

    /// The list's current transient notice, if any
    pub fn notice(&self) -> Option<Notice> {
        self.notifier.current()
    }
}

impl Default for ListPresenter {
    fn default() -> Self {
        Self::new()
    }
}
