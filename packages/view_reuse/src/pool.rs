use std::mem;
use std::num::NonZero;

use foldhash::{HashMap, HashMapExt};
use item_model::{ErasedItemModel, ErasedView, ViewDifferentiator};
use tracing::{debug, trace, warn};

use crate::{BoundView, ContentUpdatePolicy, UpdateOutcome, ViewReusePoolBuilder};

/// A pool of recyclable views for type-erased item models.
///
/// Idle views are grouped by the differentiator of the model that built them. A view is only
/// ever reused for a model with an equal differentiator; for any other model a new view is
/// built. Content is never pushed across differentiators.
///
/// Views move through the pool in a fixed order: [`bind()`][Self::bind] builds or reuses a view
/// for a model, [`update()`][Self::update] is called zero or more times as the bound model is
/// replaced across render passes and [`recycle()`][Self::recycle] makes the view available for
/// reuse again.
///
/// # Thread safety
///
/// The pool is single-threaded and is neither [`Send`] nor [`Sync`].
///
/// # Example
///
/// ```rust
/// use item_model::{ErasedItemModel, ItemViewRepresentable, RepresentableModel};
/// use view_reuse::ViewReusePool;
///
/// struct Dot;
///
/// impl ItemViewRepresentable for Dot {
///     type View = bool;
///     type InvariantViewProperties = ();
///     type Content = bool;
///
///     fn make_view(_: &()) -> bool {
///         false
///     }
///
///     fn set_content(content: &bool, view: &mut bool) {
///         *view = *content;
///     }
/// }
///
/// let mut pool = ViewReusePool::new();
///
/// let bound = pool.bind(RepresentableModel::<Dot>::new((), true).into());
/// assert_eq!(bound.view().downcast_ref::<bool>(), Some(&true));
///
/// pool.recycle(bound);
/// assert_eq!(pool.idle_len(), 1);
/// ```
#[derive(Debug)]
pub struct ViewReusePool {
    /// Idle views, one non-empty stack for each differentiator that has idle views.
    idle: HashMap<ViewDifferentiator, Vec<ErasedView>>,

    max_idle_per_differentiator: Option<NonZero<usize>>,
    content_update_policy: ContentUpdatePolicy,
}

impl ViewReusePool {
    /// Creates a new instance of the pool with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Returns a builder for creating a pool with custom configuration.
    pub fn builder() -> ViewReusePoolBuilder {
        ViewReusePoolBuilder::new()
    }

    pub(crate) fn new_inner(
        max_idle_per_differentiator: Option<NonZero<usize>>,
        content_update_policy: ContentUpdatePolicy,
    ) -> Self {
        Self {
            idle: HashMap::new(),
            max_idle_per_differentiator,
            content_update_policy,
        }
    }

    /// The number of idle views waiting to be reused.
    #[must_use]
    pub fn idle_len(&self) -> usize {
        self.idle.values().map(Vec::len).sum()
    }

    /// The number of idle views that can be reused for models with the given differentiator.
    #[must_use]
    pub fn idle_len_for(&self, differentiator: &ViewDifferentiator) -> usize {
        self.idle.get(differentiator).map_or(0, Vec::len)
    }

    /// Whether the pool holds zero idle views.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.idle_len() == 0
    }

    /// Drops all idle views.
    pub fn clear(&mut self) {
        debug!(dropped = self.idle_len(), "dropping all idle views");

        self.idle.clear();
    }

    /// Binds a model to a view that displays its content.
    ///
    /// An idle view built for an equal differentiator is reused if one is available. Otherwise,
    /// a new view is built.
    pub fn bind(&mut self, model: ErasedItemModel) -> BoundView {
        let view = match self.take_idle(model.view_differentiator()) {
            Some(mut view) => match model.try_set_content(&mut view) {
                Ok(()) => {
                    trace!(model = model.model_type_name(), "reused idle view");
                    view
                }
                Err(error) => {
                    warn!(%error, "idle view rejected content, building a new view");
                    Self::build_view(&model)
                }
            },
            None => Self::build_view(&model),
        };

        BoundView { model, view }
    }

    /// Replaces the model a view is bound to, updating the view as needed.
    ///
    /// If the new model has the same differentiator as the view, the view is kept. Its content is
    /// updated unless the [content update policy][ContentUpdatePolicy] allows the update to be
    /// skipped because the content did not change.
    ///
    /// If the differentiators differ, the view cannot display the new model. It is recycled and
    /// the item is bound to a compatible view instead.
    pub fn update(&mut self, bound: &mut BoundView, model: ErasedItemModel) -> UpdateOutcome {
        if bound.view.differentiator() != model.view_differentiator() {
            trace!(
                from = bound.model.model_type_name(),
                to = model.model_type_name(),
                "differentiator changed, rebinding"
            );

            let previous = mem::replace(bound, self.bind(model));
            self.recycle(previous);

            return UpdateOutcome::Rebound;
        }

        if self.content_update_policy == ContentUpdatePolicy::SkipUnchanged
            && bound.model.is_content_equal(&model)
        {
            bound.model = model;
            return UpdateOutcome::Unchanged;
        }

        match model.try_set_content(&mut bound.view) {
            Ok(()) => {
                bound.model = model;
                UpdateOutcome::ContentUpdated
            }
            Err(error) => {
                // The view cannot be trusted to be reusable, so it is dropped instead of recycled.
                warn!(%error, "view rejected content, building a new view");

                let view = Self::build_view(&model);
                *bound = BoundView { model, view };

                UpdateOutcome::Rebound
            }
        }
    }

    /// Returns the view of a bound item to the pool, so it can be reused for another item.
    ///
    /// If the pool already holds the maximum number of idle views for the differentiator of the
    /// view, the view is dropped instead.
    pub fn recycle(&mut self, bound: BoundView) {
        let (_, view) = bound.into_parts();

        let idle_len = self.idle_len_for(view.differentiator());

        if self
            .max_idle_per_differentiator
            .is_some_and(|max| idle_len >= max.get())
        {
            debug!(
                view = view.view_type_name(),
                "idle view limit reached, dropping view"
            );
            return;
        }

        self.idle
            .entry(view.differentiator().clone())
            .or_default()
            .push(view);
    }

    fn take_idle(&mut self, differentiator: &ViewDifferentiator) -> Option<ErasedView> {
        let idle = self.idle.get_mut(differentiator)?;
        let view = idle.pop();

        // The map only holds non-empty stacks.
        if idle.is_empty() {
            self.idle.remove(differentiator);
        }

        view
    }

    fn build_view(model: &ErasedItemModel) -> ErasedView {
        trace!(model = model.model_type_name(), "building new view");

        let mut view = model.make_view();
        model.set_content(&mut view);
        view
    }
}

impl Default for ViewReusePool {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use item_model::{ItemViewRepresentable, RepresentableModel};
    use static_assertions::assert_not_impl_any;

    use super::*;

    assert_not_impl_any!(ViewReusePool: Send, Sync);
    assert_not_impl_any!(BoundView: Send, Sync);

    #[derive(Debug, Default, PartialEq)]
    struct LabelView {
        font_size: u32,
        text: String,
        content_updates: usize,
    }

    struct Label;

    impl ItemViewRepresentable for Label {
        type View = LabelView;
        type InvariantViewProperties = u32;
        type Content = String;

        fn make_view(font_size: &u32) -> LabelView {
            LabelView {
                font_size: *font_size,
                ..LabelView::default()
            }
        }

        fn set_content(content: &String, view: &mut LabelView) {
            view.text.clone_from(content);
            view.content_updates = view.content_updates.wrapping_add(1);
        }
    }

    struct Badge;

    impl ItemViewRepresentable for Badge {
        type View = u32;
        type InvariantViewProperties = ();
        type Content = u32;

        fn make_view(_: &()) -> u32 {
            0
        }

        fn set_content(content: &u32, view: &mut u32) {
            *view = *content;
        }
    }

    fn label(font_size: u32, text: &str) -> ErasedItemModel {
        RepresentableModel::<Label>::new(font_size, text.to_string()).into()
    }

    fn badge(count: u32) -> ErasedItemModel {
        RepresentableModel::<Badge>::new((), count).into()
    }

    fn label_view(bound: &BoundView) -> &LabelView {
        bound.view().downcast_ref::<LabelView>().unwrap()
    }

    #[test]
    fn new_pool_is_empty() {
        let pool = ViewReusePool::new();

        assert!(pool.is_empty());
        assert_eq!(pool.idle_len(), 0);
    }

    #[test]
    fn bind_builds_view_with_content() {
        let mut pool = ViewReusePool::new();

        let bound = pool.bind(label(12, "Mon"));

        assert_eq!(label_view(&bound).font_size, 12);
        assert_eq!(label_view(&bound).text, "Mon");
        assert_eq!(label_view(&bound).content_updates, 1);
    }

    #[test]
    fn bind_reuses_idle_view_with_equal_differentiator() {
        let mut pool = ViewReusePool::new();

        let bound = pool.bind(label(12, "Mon"));
        pool.recycle(bound);

        let bound = pool.bind(label(12, "Tue"));

        assert!(pool.is_empty());
        assert_eq!(label_view(&bound).text, "Tue");
        // One update when built, one when reused.
        assert_eq!(label_view(&bound).content_updates, 2);
    }

    #[test]
    fn bind_does_not_reuse_view_with_different_invariants() {
        let mut pool = ViewReusePool::new();

        let small = pool.bind(label(12, "Mon"));
        pool.recycle(small);

        let large = pool.bind(label(14, "Mon"));

        assert_eq!(pool.idle_len(), 1);
        assert_eq!(label_view(&large).font_size, 14);
        assert_eq!(label_view(&large).content_updates, 1);
    }

    #[test]
    fn bind_does_not_reuse_view_of_other_kind() {
        let mut pool = ViewReusePool::new();

        let bound = pool.bind(badge(3));
        pool.recycle(bound);

        let bound = pool.bind(label(12, "Mon"));

        assert_eq!(pool.idle_len(), 1);
        assert_eq!(pool.idle_len_for(badge(0).view_differentiator()), 1);
        assert_eq!(label_view(&bound).text, "Mon");
    }

    #[test]
    fn update_with_new_content() {
        let mut pool = ViewReusePool::new();
        let mut bound = pool.bind(label(12, "Mon"));

        let outcome = pool.update(&mut bound, label(12, "Tue"));

        assert_eq!(outcome, UpdateOutcome::ContentUpdated);
        assert_eq!(label_view(&bound).text, "Tue");
        assert_eq!(label_view(&bound).content_updates, 2);
        assert!(bound.model().is_content_equal(&label(12, "Tue")));
    }

    #[test]
    fn update_with_unchanged_content_is_skipped() {
        let mut pool = ViewReusePool::new();
        let mut bound = pool.bind(label(12, "Mon"));

        let outcome = pool.update(&mut bound, label(12, "Mon"));

        assert_eq!(outcome, UpdateOutcome::Unchanged);
        assert_eq!(label_view(&bound).content_updates, 1);
    }

    #[test]
    fn update_with_unchanged_content_under_always_policy() {
        let mut pool = ViewReusePool::builder()
            .content_update_policy(ContentUpdatePolicy::Always)
            .build();
        let mut bound = pool.bind(label(12, "Mon"));

        let outcome = pool.update(&mut bound, label(12, "Mon"));

        assert_eq!(outcome, UpdateOutcome::ContentUpdated);
        assert_eq!(label_view(&bound).text, "Mon");
        assert_eq!(label_view(&bound).content_updates, 2);
    }

    #[test]
    fn update_with_different_invariants_rebinds() {
        let mut pool = ViewReusePool::new();
        let mut bound = pool.bind(label(12, "Mon"));

        let outcome = pool.update(&mut bound, label(14, "Mon"));

        assert_eq!(outcome, UpdateOutcome::Rebound);
        assert_eq!(label_view(&bound).font_size, 14);
        assert_eq!(pool.idle_len_for(label(12, "").view_differentiator()), 1);
    }

    #[test]
    fn update_with_other_kind_rebinds_to_idle_view() {
        let mut pool = ViewReusePool::new();

        let idle_badge = pool.bind(badge(1));
        pool.recycle(idle_badge);

        let mut bound = pool.bind(label(12, "Mon"));
        let outcome = pool.update(&mut bound, badge(5));

        assert_eq!(outcome, UpdateOutcome::Rebound);
        assert_eq!(bound.view().downcast_ref::<u32>(), Some(&5));
        assert_eq!(pool.idle_len_for(badge(0).view_differentiator()), 0);
        assert_eq!(pool.idle_len_for(label(12, "").view_differentiator()), 1);
    }

    #[test]
    fn recycle_respects_idle_limit() {
        let mut pool = ViewReusePool::builder()
            .max_idle_per_differentiator(NonZero::new(2).unwrap())
            .build();

        let bound: Vec<_> = (0..3).map(|_| pool.bind(label(12, "Mon"))).collect();
        for bound in bound {
            pool.recycle(bound);
        }
        let other = pool.bind(badge(1));
        pool.recycle(other);

        assert_eq!(pool.idle_len_for(label(12, "").view_differentiator()), 2);
        assert_eq!(pool.idle_len(), 3);
    }

    #[test]
    fn clear_drops_idle_views() {
        let mut pool = ViewReusePool::default();

        let bound = pool.bind(label(12, "Mon"));
        pool.recycle(bound);
        pool.clear();

        assert!(pool.is_empty());
    }

    #[test]
    fn drained_differentiators_are_forgotten() {
        let mut pool = ViewReusePool::new();

        for font_size in 0..100 {
            let bound = pool.bind(label(font_size, "Mon"));
            pool.recycle(bound);
        }
        assert_eq!(pool.idle.len(), 100);

        for font_size in 0..100 {
            let bound = pool.bind(label(font_size, "Tue"));
            assert_eq!(label_view(&bound).text, "Tue");
        }

        assert!(pool.idle.is_empty());
        assert!(pool.is_empty());
    }

    #[test]
    fn recycle_over_idle_limit_adds_nothing() {
        let mut pool = ViewReusePool::builder()
            .max_idle_per_differentiator(NonZero::new(1).unwrap())
            .build();

        let first = pool.bind(label(12, "Mon"));
        let second = pool.bind(label(12, "Tue"));
        pool.recycle(first);
        pool.recycle(second);

        assert_eq!(pool.idle.len(), 1);
        assert_eq!(pool.idle_len(), 1);

        let rebound = pool.bind(label(12, "Wed"));
        assert_eq!(label_view(&rebound).text, "Wed");
        assert!(pool.idle.is_empty());
    }

    #[test]
    fn into_parts_releases_view() {
        let mut pool = ViewReusePool::new();
        let bound = pool.bind(label(12, "Mon"));

        let (model, view) = bound.into_parts();

        assert_eq!(view.differentiator(), model.view_differentiator());
        assert!(pool.is_empty());
    }
}
