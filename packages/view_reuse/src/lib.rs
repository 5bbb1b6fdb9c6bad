#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! This package provides [`ViewReusePool`], a recycling pool that maps type-erased item models to
//! reused or newly built views.
//!
//! The pool never knows the concrete model or view types. It groups idle views by the
//! [`ViewDifferentiator`][item_model::ViewDifferentiator] of the model that built them and only
//! ever pushes content into a view when the differentiators of the view and the model are
//! equal. When they are not, the view is recycled and the item is rebound to a compatible view.
//!
//! # Example
//!
//! ```rust
//! use item_model::{ErasedItemModel, ItemViewRepresentable, RepresentableModel};
//! use view_reuse::{UpdateOutcome, ViewReusePool};
//!
//! struct Label;
//!
//! impl ItemViewRepresentable for Label {
//!     type View = String;
//!     type InvariantViewProperties = u32;
//!     type Content = String;
//!
//!     fn make_view(_: &u32) -> String {
//!         String::new()
//!     }
//!
//!     fn set_content(content: &String, view: &mut String) {
//!         view.clone_from(content);
//!     }
//! }
//!
//! fn label(font_size: u32, text: &str) -> ErasedItemModel {
//!     RepresentableModel::<Label>::new(font_size, text.to_string()).into()
//! }
//!
//! let mut pool = ViewReusePool::new();
//!
//! // First render pass.
//! let mut bound = pool.bind(label(12, "Mon"));
//!
//! // Next render pass: same item, new content.
//! assert_eq!(pool.update(&mut bound, label(12, "Tue")), UpdateOutcome::ContentUpdated);
//! assert_eq!(bound.view().downcast_ref::<String>().unwrap(), "Tue");
//!
//! // Nothing changed, so the view is not touched.
//! assert_eq!(pool.update(&mut bound, label(12, "Tue")), UpdateOutcome::Unchanged);
//!
//! // The item scrolled out of sight; keep its view for later.
//! pool.recycle(bound);
//! assert_eq!(pool.idle_len(), 1);
//!
//! // A compatible item reuses the idle view.
//! let bound = pool.bind(label(12, "Wed"));
//! assert_eq!(pool.idle_len(), 0);
//! assert_eq!(bound.view().downcast_ref::<String>().unwrap(), "Wed");
//! ```

mod bound;
mod builder;
mod policy;
mod pool;

pub use bound::*;
pub use builder::*;
pub use policy::*;
pub use pool::*;
