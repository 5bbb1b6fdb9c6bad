use std::fmt::Debug;
use std::hash::Hash;

/// The capabilities every concrete item model type provides.
///
/// A model is the complete, strongly typed description of one renderable item: the invariant
/// view properties that a view is constructed from, plus the mutable content that can change
/// across updates without requiring a new view.
///
/// Models are value types. They are handed to [`ErasedItemModel::new()`][crate::ErasedItemModel]
/// by value and are never mutated afterwards; the next state of an item is a new model.
///
/// The [`ViewDifferentiator`][crate::ViewDifferentiator] of a model is always derived from the
/// model type and [`invariant_view_properties()`][Self::invariant_view_properties], so two
/// different model types can never claim each other's views.
///
/// Most models do not implement this trait by hand but use
/// [`RepresentableModel`][crate::RepresentableModel] instead.
///
/// # Examples
///
/// ```
/// use item_model::{ErasedItemModel, ItemModel};
///
/// #[derive(Debug, Default)]
/// struct DotView {
///     radius: u8,
///     highlighted: bool,
/// }
///
/// #[derive(Debug)]
/// struct Dot {
///     radius: u8,
///     highlighted: bool,
/// }
///
/// impl ItemModel for Dot {
///     type View = DotView;
///     type InvariantViewProperties = u8;
///
///     fn invariant_view_properties(&self) -> &u8 {
///         &self.radius
///     }
///
///     fn make_view(&self) -> DotView {
///         DotView {
///             radius: self.radius,
///             ..DotView::default()
///         }
///     }
///
///     fn set_content(&self, view: &mut DotView) {
///         view.highlighted = self.highlighted;
///     }
///
///     fn is_content_equal(&self, other: &Self) -> bool {
///         self.highlighted == other.highlighted
///     }
/// }
///
/// let model = ErasedItemModel::new(Dot {
///     radius: 4,
///     highlighted: true,
/// });
///
/// let mut view = model.make_view();
/// model.set_content(&mut view);
///
/// assert!(view.downcast_ref::<DotView>().unwrap().highlighted);
/// ```
pub trait ItemModel: Debug + 'static {
    /// The type of view this model is displayed in.
    type View: 'static;

    /// Construction-time parameters of [`Self::View`] that a content update cannot change.
    ///
    /// Views built from unequal invariant view properties are never interchangeable.
    type InvariantViewProperties: Clone + Debug + Eq + Hash + 'static;

    /// The invariant view properties of this model.
    ///
    /// Must return equal values for the lifetime of the model.
    fn invariant_view_properties(&self) -> &Self::InvariantViewProperties;

    /// Builds a brand new view from the invariant view properties alone.
    ///
    /// Content is applied separately via [`set_content()`][Self::set_content].
    fn make_view(&self) -> Self::View;

    /// Pushes the content of this model into a view.
    ///
    /// The view was built by a model of the same type with equal invariant view properties.
    /// Calling this twice in a row with the same model must leave the view in the same
    /// observable state as calling it once.
    fn set_content(&self, view: &mut Self::View);

    /// Whether the content of this model equals the content of `other`.
    ///
    /// Only the mutable content is compared. Invariant view properties are already covered by
    /// the differentiator. Must be reflexive and symmetric.
    fn is_content_equal(&self, other: &Self) -> bool;
}
