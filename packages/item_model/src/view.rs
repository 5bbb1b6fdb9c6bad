use std::any::{Any, type_name};
use std::fmt;

use crate::ViewDifferentiator;

/// A view of any type, tagged with the differentiator of the model that built it.
///
/// Views are created by [`ErasedItemModel::make_view()`][crate::ErasedItemModel::make_view] and
/// owned by whoever recycles them. The recorded differentiator decides which models may later
/// push content into the view and serves as the grouping key for idle views.
///
/// # Examples
///
/// ```
/// use item_model::{ErasedItemModel, ItemViewRepresentable, RepresentableModel};
///
/// struct Title;
///
/// impl ItemViewRepresentable for Title {
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
/// let model = ErasedItemModel::new(RepresentableModel::<Title>::new((), "May".to_string()));
///
/// let mut view = model.make_view();
/// assert_eq!(view.differentiator(), model.view_differentiator());
/// assert!(view.is::<String>());
///
/// model.set_content(&mut view);
/// assert_eq!(view.into_inner::<String>().unwrap(), "May");
/// ```
pub struct ErasedView {
    differentiator: ViewDifferentiator,
    view_type_name: &'static str,
    view: Box<dyn Any>,
}

impl ErasedView {
    pub(crate) fn new<V: 'static>(differentiator: ViewDifferentiator, view: V) -> Self {
        Self {
            differentiator,
            view_type_name: type_name::<V>(),
            view: Box::new(view),
        }
    }

    /// The differentiator of the model that built this view.
    ///
    /// Only models with an equal differentiator may push content into this view.
    #[must_use]
    pub fn differentiator(&self) -> &ViewDifferentiator {
        &self.differentiator
    }

    /// The name of the concrete view type, for diagnostics.
    #[must_use]
    pub fn view_type_name(&self) -> &'static str {
        self.view_type_name
    }

    /// Whether the concrete view is of type `V`.
    #[must_use]
    pub fn is<V: 'static>(&self) -> bool {
        self.view.is::<V>()
    }

    /// Returns a reference to the concrete view if it is of type `V`.
    #[must_use]
    pub fn downcast_ref<V: 'static>(&self) -> Option<&V> {
        self.view.downcast_ref::<V>()
    }

    /// Returns an exclusive reference to the concrete view if it is of type `V`.
    #[must_use]
    pub fn downcast_mut<V: 'static>(&mut self) -> Option<&mut V> {
        self.view.downcast_mut::<V>()
    }

    /// Unwraps the concrete view if it is of type `V`, otherwise returns `self` unchanged.
    ///
    /// # Errors
    ///
    /// Returns the erased view itself if the concrete view is not of type `V`.
    pub fn into_inner<V: 'static>(self) -> Result<V, Self> {
        let Self {
            differentiator,
            view_type_name,
            view,
        } = self;

        match view.downcast::<V>() {
            Ok(view) => Ok(*view),
            Err(view) => Err(Self {
                differentiator,
                view_type_name,
                view,
            }),
        }
    }
}

impl fmt::Debug for ErasedView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct(type_name::<Self>())
            .field("differentiator", &self.differentiator)
            .field("view_type_name", &self.view_type_name)
            .finish_non_exhaustive()
    }
}
