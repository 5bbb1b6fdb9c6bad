use item_model::{ErasedItemModel, ErasedView};

/// A view together with the model whose content it currently displays.
///
/// Obtained from [`ViewReusePool::bind()`][crate::ViewReusePool::bind] and kept up to date via
/// [`ViewReusePool::update()`][crate::ViewReusePool::update]. Hand it back to the pool via
/// [`ViewReusePool::recycle()`][crate::ViewReusePool::recycle] once the item is no longer
/// displayed, so the view can be reused for another item.
#[derive(Debug)]
pub struct BoundView {
    pub(crate) model: ErasedItemModel,
    pub(crate) view: ErasedView,
}

impl BoundView {
    /// The model whose content the view displays.
    #[must_use]
    pub fn model(&self) -> &ErasedItemModel {
        &self.model
    }

    /// The view.
    #[must_use]
    pub fn view(&self) -> &ErasedView {
        &self.view
    }

    /// Exclusive access to the view, for example to attach it to a view hierarchy.
    #[must_use]
    pub fn view_mut(&mut self) -> &mut ErasedView {
        &mut self.view
    }

    /// Releases the model and the view without returning the view to any pool.
    #[must_use]
    pub fn into_parts(self) -> (ErasedItemModel, ErasedView) {
        (self.model, self.view)
    }
}
