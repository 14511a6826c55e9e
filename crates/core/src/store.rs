//! In-memory review store.
//!
//! Reviews live in an insertion-ordered `Vec` behind a `parking_lot::RwLock`,
//! shared through an inner `Arc` so handles are cheap to clone across request
//! handlers. Queries take one read-lock snapshot; submissions take the write
//! lock for a single append. There are no update or delete operations.

use crate::review::Review;
use parking_lot::RwLock;
use std::sync::Arc;

/// Thread-safe, append-only collection of reviews.
///
/// Insertion order is preserved; it provides the stable tie-break for
/// sentiment-ranked queries.
#[derive(Debug, Clone, Default)]
pub struct ReviewStore {
    reviews: Arc<RwLock<Vec<Arc<Review>>>>,
}

impl ReviewStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with `reviews`, in order.
    pub fn seeded(reviews: Vec<Review>) -> Self {
        Self {
            reviews: Arc::new(RwLock::new(reviews.into_iter().map(Arc::new).collect())),
        }
    }

    /// Appends a review at the end and returns a shared handle to it.
    pub fn append(&self, review: Review) -> Arc<Review> {
        let review = Arc::new(review);
        self.reviews.write().push(Arc::clone(&review));
        review
    }

    /// Returns a consistent point-in-time copy of the store contents.
    ///
    /// The Vec is cloned under the read lock so concurrent appends can never
    /// produce a torn view mid-query.
    pub fn snapshot(&self) -> Vec<Arc<Review>> {
        self.reviews.read().clone()
    }

    /// Returns the number of stored reviews.
    pub fn len(&self) -> usize {
        self.reviews.read().len()
    }

    /// Returns `true` if the store holds no reviews.
    pub fn is_empty(&self) -> bool {
        self.reviews.read().is_empty()
    }
}
