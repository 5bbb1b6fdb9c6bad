use std::any::{Any, type_name};
use std::fmt::Debug;
use std::rc::Rc;

use crate::{Error, ErasedView, ItemModel, Result, ViewDifferentiator};

/// An item model of any concrete type, behind a uniform surface.
///
/// Wrapping a model captures everything needed to later build views for it, push its content
/// into existing views and compare its content against other erased models, all without the
/// caller knowing the concrete model or view types. This allows models of different types to
/// be stored in one collection and dispatched uniformly by a view recycler.
///
/// The differentiator is computed once, when the model is wrapped, and never changes. The
/// wrapped model is immutable; representing the next state of an item means wrapping a new
/// model.
///
/// Cloning is cheap and shares the wrapped model.
///
/// # Thread safety
///
/// This type is single-threaded and is neither [`Send`] nor [`Sync`].
///
/// # Examples
///
/// ```
/// use item_model::{ErasedItemModel, ItemViewRepresentable, RepresentableModel};
///
/// struct Heading;
///
/// impl ItemViewRepresentable for Heading {
///     type View = String;
///     type InvariantViewProperties = ();
///     type Content = String;
///
///     fn make_view(_: &()) -> String {
///         String::new()
///     }
///
///     fn set_content(content: &String, view: &mut String) {
///         view.clone_from(content);
///     }
/// }
///
/// struct Marker;
///
/// impl ItemViewRepresentable for Marker {
///     type View = Vec<bool>;
///     type InvariantViewProperties = usize;
///     type Content = bool;
///
///     fn make_view(count: &usize) -> Vec<bool> {
///         vec![false; *count]
///     }
///
///     fn set_content(content: &bool, view: &mut Vec<bool>) {
///         view.fill(*content);
///     }
/// }
///
/// // Models of different types in one collection.
/// let items = vec![
///     ErasedItemModel::new(RepresentableModel::<Heading>::new((), "June".to_string())),
///     ErasedItemModel::new(RepresentableModel::<Marker>::new(3, true)),
/// ];
///
/// assert_ne!(items[0].view_differentiator(), items[1].view_differentiator());
/// assert!(!items[0].is_content_equal(&items[1]));
///
/// for item in &items {
///     let mut view = item.make_view();
///     item.set_content(&mut view);
/// }
/// ```
#[derive(Clone, Debug)]
pub struct ErasedItemModel {
    differentiator: ViewDifferentiator,
    model: Rc<dyn DynItemModel>,
}

impl ErasedItemModel {
    /// Wraps a concrete model, taking ownership of it.
    #[must_use]
    pub fn new<M: ItemModel>(model: M) -> Self {
        Self {
            differentiator: ViewDifferentiator::of(&model),
            model: Rc::new(model),
        }
    }

    /// The differentiator of views compatible with this model.
    ///
    /// Views built for a model can be reused for another model if and only if both models
    /// have equal differentiators.
    #[must_use]
    pub fn view_differentiator(&self) -> &ViewDifferentiator {
        &self.differentiator
    }

    /// The name of the wrapped model type, for diagnostics.
    #[must_use]
    pub fn model_type_name(&self) -> &'static str {
        self.differentiator.view_kind().type_name()
    }

    /// Builds a brand new view from the invariant view properties of the wrapped model.
    ///
    /// The content of the model is not applied; call [`set_content()`][Self::set_content]
    /// before displaying the view.
    #[must_use]
    pub fn make_view(&self) -> ErasedView {
        self.model.make_erased_view(self.differentiator.clone())
    }

    /// Pushes the content of the wrapped model into a view.
    ///
    /// The view must have been built by a model with an equal differentiator.
    ///
    /// # Errors
    ///
    /// Returns an error and leaves the view untouched if the view was built by a model of a
    /// different type or with different invariant view properties.
    pub fn try_set_content(&self, view: &mut ErasedView) -> Result<()> {
        let view_kind = view.differentiator().view_kind();
        let model_kind = self.differentiator.view_kind();

        if view_kind != model_kind {
            return Err(Error::ViewKindMismatch {
                expected: model_kind.type_name(),
                actual: view_kind.type_name(),
            });
        }

        if *view.differentiator() != self.differentiator {
            return Err(Error::InvariantMismatch {
                kind: model_kind.type_name(),
            });
        }

        self.model.set_erased_content(view)
    }

    /// Pushes the content of the wrapped model into a view.
    ///
    /// The view must have been built by a model with an equal differentiator. Use
    /// [`try_set_content()`][Self::try_set_content] if this is not guaranteed.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if the view was built by an incompatible model. In release
    /// builds, the mismatch is logged and the view is left untouched.
    pub fn set_content(&self, view: &mut ErasedView) {
        if let Err(error) = self.try_set_content(view) {
            #[cfg(debug_assertions)]
            panic!("cannot set content on an incompatible view: {error}");

            #[cfg(not(debug_assertions))]
            tracing::warn!(%error, "ignored content update for an incompatible view");
        }
    }

    /// Whether the content of the wrapped model equals the content of the model wrapped by
    /// `other`.
    ///
    /// Only content is compared, not invariant view properties. Models of different concrete
    /// types are never equal. Two handles to the same wrapped model are always equal.
    #[must_use]
    pub fn is_content_equal(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.model, &other.model)
            || self.model.is_erased_content_equal(&*other.model)
    }

    /// Returns a reference to the wrapped model if it is of type `M`.
    #[must_use]
    pub fn downcast_ref<M: ItemModel>(&self) -> Option<&M> {
        let model: &dyn DynItemModel = &*self.model;
        model.as_any().downcast_ref::<M>()
    }
}

impl<M: ItemModel> From<M> for ErasedItemModel {
    fn from(model: M) -> Self {
        Self::new(model)
    }
}

/// Dispatch table for one concrete model type, translating erased views and peers back to the
/// concrete types of the model.
trait DynItemModel: Debug {
    fn as_any(&self) -> &dyn Any;

    fn make_erased_view(&self, differentiator: ViewDifferentiator) -> ErasedView;

    fn set_erased_content(&self, view: &mut ErasedView) -> Result<()>;

    fn is_erased_content_equal(&self, other: &dyn DynItemModel) -> bool;
}

impl<M: ItemModel> DynItemModel for M {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn make_erased_view(&self, differentiator: ViewDifferentiator) -> ErasedView {
        ErasedView::new(differentiator, ItemModel::make_view(self))
    }

    fn set_erased_content(&self, view: &mut ErasedView) -> Result<()> {
        let actual = view.differentiator().view_kind().type_name();

        let view = view
            .downcast_mut::<M::View>()
            .ok_or_else(|| Error::ViewKindMismatch {
                expected: type_name::<M>(),
                actual,
            })?;

        ItemModel::set_content(self, view);
        Ok(())
    }

    fn is_erased_content_equal(&self, other: &dyn DynItemModel) -> bool {
        other
            .as_any()
            .downcast_ref::<M>()
            .is_some_and(|other| ItemModel::is_content_equal(self, other))
    }
}
