#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! This package provides [`ErasedItemModel`], a type-erased item model that lets strongly typed
//! models of many different types live in one homogeneous collection and later be matched
//! against recyclable views of a compatible kind.
//!
//! A view recycler receiving erased models never needs to know the concrete model or view types.
//! It asks each model for its [`ViewDifferentiator`] and either reuses an idle view built for an
//! equal differentiator (pushing new content into it) or asks the model to build a new view.
//!
//! # Features
//!
//! - **Typed at the producer**: Models are written against the [`ItemModel`] trait or, more
//!   commonly, assembled from an [`ItemViewRepresentable`] via [`RepresentableModel`].
//! - **Type-blind at the consumer**: [`ErasedItemModel`] and [`ErasedView`] expose a uniform
//!   surface, so models of different types can share one `Vec`.
//! - **Compatibility by construction**: The view kind is part of every differentiator, so models
//!   of different concrete types never compare as compatible.
//! - **Cheap no-op detection**: Content equality lets a recycler skip redundant view updates.
//! - **Fail-fast mismatches**: Applying content to a view built for an incompatible model is
//!   detected and reported rather than silently corrupting the view.
//!
//! # Example
//!
//! ```rust
//! use item_model::{ErasedItemModel, ItemViewRepresentable, RepresentableModel};
//!
//! #[derive(Debug)]
//! struct LabelView {
//!     font_size: u32,
//!     text: String,
//! }
//!
//! struct Label;
//!
//! impl ItemViewRepresentable for Label {
//!     type View = LabelView;
//!     type InvariantViewProperties = u32;
//!     type Content = String;
//!
//!     fn make_view(font_size: &u32) -> LabelView {
//!         LabelView {
//!             font_size: *font_size,
//!             text: String::new(),
//!         }
//!     }
//!
//!     fn set_content(content: &String, view: &mut LabelView) {
//!         view.text.clone_from(content);
//!     }
//! }
//!
//! let monday = ErasedItemModel::new(RepresentableModel::<Label>::new(12, "Mon".to_string()));
//! let tuesday = ErasedItemModel::new(RepresentableModel::<Label>::new(12, "Tue".to_string()));
//!
//! // Same view kind and invariant view properties, so the views are interchangeable.
//! assert_eq!(monday.view_differentiator(), tuesday.view_differentiator());
//!
//! let mut view = monday.make_view();
//! monday.set_content(&mut view);
//!
//! // Reuse the view for the next model instead of building a new one.
//! if !tuesday.is_content_equal(&monday) {
//!     tuesday.set_content(&mut view);
//! }
//!
//! let label = view.downcast_ref::<LabelView>().unwrap();
//! assert_eq!(label.text, "Tue");
//! assert_eq!(label.font_size, 12);
//! ```

mod differentiator;
mod erased;
mod error;
mod model;
mod representable;
mod view;
mod view_kind;

pub use differentiator::*;
pub use erased::*;
pub use error::*;
pub use model::*;
pub use representable::*;
pub use view::*;
pub use view_kind::*;
