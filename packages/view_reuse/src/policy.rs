/// Determines whether content is pushed into a view when the content did not change.
///
/// # Examples
///
/// ```
/// use view_reuse::{ContentUpdatePolicy, ViewReusePool};
///
/// let pool = ViewReusePool::builder()
///     .content_update_policy(ContentUpdatePolicy::Always)
///     .build();
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[non_exhaustive]
pub enum ContentUpdatePolicy {
    /// Content is only pushed into a view if it differs from the content of the model the view
    /// is currently bound to. This is the default.
    #[default]
    SkipUnchanged,

    /// Content is pushed into the view on every update, even if it did not change.
    ///
    /// This may be valuable if views can be modified by other means between updates.
    Always,
}

/// The result of updating a bound view with a new model.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum UpdateOutcome {
    /// The content did not change, so the view was left as it was.
    Unchanged,

    /// The new content was pushed into the existing view.
    ContentUpdated,

    /// The existing view was not compatible with the new model. It was recycled and the item
    /// was bound to another view.
    Rebound,
}
