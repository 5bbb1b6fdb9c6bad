use std::num::NonZero;

use crate::{ContentUpdatePolicy, ViewReusePool};

/// Builder for creating an instance of [`ViewReusePool`].
///
/// This builder allows configuration of pool behavior before creation.
///
/// # Examples
///
/// ```
/// use std::num::NonZero;
///
/// use view_reuse::{ContentUpdatePolicy, ViewReusePool};
///
/// // Default pool.
/// let pool = ViewReusePool::builder().build();
///
/// // Keep at most four idle views per differentiator and always push content.
/// let pool = ViewReusePool::builder()
///     .max_idle_per_differentiator(NonZero::new(4).unwrap())
///     .content_update_policy(ContentUpdatePolicy::Always)
///     .build();
/// ```
#[derive(Debug)]
#[must_use]
pub struct ViewReusePoolBuilder {
    max_idle_per_differentiator: Option<NonZero<usize>>,
    content_update_policy: ContentUpdatePolicy,
}

impl ViewReusePoolBuilder {
    pub(crate) fn new() -> Self {
        Self {
            max_idle_per_differentiator: None,
            content_update_policy: ContentUpdatePolicy::default(),
        }
    }

    /// Limits how many idle views the pool keeps for each differentiator.
    ///
    /// Views recycled beyond this limit are dropped. By default, the number of idle views is
    /// not limited.
    pub fn max_idle_per_differentiator(mut self, max: NonZero<usize>) -> Self {
        self.max_idle_per_differentiator = Some(max);
        self
    }

    /// Sets the [content update policy][ContentUpdatePolicy] for the pool. This governs whether
    /// unchanged content is pushed into views.
    pub fn content_update_policy(mut self, policy: ContentUpdatePolicy) -> Self {
        self.content_update_policy = policy;
        self
    }

    /// Builds the pool with the specified configuration.
    #[must_use]
    pub fn build(self) -> ViewReusePool {
        ViewReusePool::new_inner(self.max_idle_per_differentiator, self.content_update_policy)
    }
}
