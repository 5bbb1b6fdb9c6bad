use std::any::type_name;
use std::fmt::{self, Debug};
use std::hash::Hash;

use crate::{ItemModel, ViewDifferentiator};

/// Describes how a view type is built and updated, from which item models can be assembled.
///
/// This is the common way to define an item: declare the view, its invariant view properties
/// and its content, then wrap values of those in a [`RepresentableModel`].
///
/// The implementing type itself is only used as a marker and is never instantiated.
pub trait ItemViewRepresentable: 'static {
    /// The type of view being represented.
    type View: 'static;

    /// Construction-time parameters of the view that a content update cannot change.
    type InvariantViewProperties: Clone + Debug + Eq + Hash + 'static;

    /// The data displayed by the view, which may change between updates.
    type Content: Clone + Debug + PartialEq + 'static;

    /// Builds a new view from its invariant view properties.
    fn make_view(invariant_view_properties: &Self::InvariantViewProperties) -> Self::View;

    /// Displays `content` in `view`.
    fn set_content(content: &Self::Content, view: &mut Self::View);
}

/// An item model assembled from an [`ItemViewRepresentable`] and values of its invariant view
/// properties and content.
///
/// # Examples
///
/// ```
/// use item_model::{ItemViewRepresentable, RepresentableModel};
///
/// struct Counter;
///
/// impl ItemViewRepresentable for Counter {
///     type View = Vec<u32>;
///     type InvariantViewProperties = ();
///     type Content = u32;
///
///     fn make_view(_: &()) -> Vec<u32> {
///         Vec::new()
///     }
///
///     fn set_content(content: &u32, view: &mut Vec<u32>) {
///         view.clear();
///         view.push(*content);
///     }
/// }
///
/// let first = RepresentableModel::<Counter>::new((), 1);
/// let second = first.clone().with_content(2);
///
/// assert_eq!(*first.content(), 1);
/// assert_eq!(*second.content(), 2);
/// assert_eq!(first.view_differentiator(), second.view_differentiator());
/// ```
pub struct RepresentableModel<R: ItemViewRepresentable> {
    invariant_view_properties: R::InvariantViewProperties,
    content: R::Content,
}

impl<R: ItemViewRepresentable> RepresentableModel<R> {
    /// Creates a model from invariant view properties and content.
    #[must_use]
    pub fn new(invariant_view_properties: R::InvariantViewProperties, content: R::Content) -> Self {
        Self {
            invariant_view_properties,
            content,
        }
    }

    /// The content this model displays.
    #[must_use]
    pub fn content(&self) -> &R::Content {
        &self.content
    }

    /// Replaces the content, keeping the invariant view properties.
    #[must_use]
    pub fn with_content(self, content: R::Content) -> Self {
        Self { content, ..self }
    }

    /// The differentiator of views built for this model.
    #[must_use]
    pub fn view_differentiator(&self) -> ViewDifferentiator {
        ViewDifferentiator::of(self)
    }
}

impl<R: ItemViewRepresentable> ItemModel for RepresentableModel<R> {
    type View = R::View;
    type InvariantViewProperties = R::InvariantViewProperties;

    fn invariant_view_properties(&self) -> &R::InvariantViewProperties {
        &self.invariant_view_properties
    }

    fn make_view(&self) -> R::View {
        R::make_view(&self.invariant_view_properties)
    }

    fn set_content(&self, view: &mut R::View) {
        R::set_content(&self.content, view);
    }

    fn is_content_equal(&self, other: &Self) -> bool {
        self.content == other.content
    }
}

impl<R: ItemViewRepresentable> Clone for RepresentableModel<R> {
    fn clone(&self) -> Self {
        Self {
            invariant_view_properties: self.invariant_view_properties.clone(),
            content: self.content.clone(),
        }
    }
}

impl<R: ItemViewRepresentable> Debug for RepresentableModel<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct(type_name::<Self>())
            .field("invariant_view_properties", &self.invariant_view_properties)
            .field("content", &self.content)
            .finish()
    }
}
