//! Integration tests for `item_model`, exercising the erased surface the way a view recycler
//! would: differentiator first, then view construction and content updates.

use item_model::{ErasedItemModel, ErasedView, Error, ItemViewRepresentable, RepresentableModel};

#[derive(Debug, PartialEq)]
struct LabelView {
    font_size: u32,
    text: String,
}

struct Label;

impl ItemViewRepresentable for Label {
    type View = LabelView;
    type InvariantViewProperties = u32;
    type Content = String;

    fn make_view(font_size: &u32) -> LabelView {
        LabelView {
            font_size: *font_size,
            text: String::new(),
        }
    }

    fn set_content(content: &String, view: &mut LabelView) {
        view.text.clone_from(content);
    }
}

#[derive(Debug, PartialEq)]
struct DayView {
    text: String,
}

struct Day;

impl ItemViewRepresentable for Day {
    type View = DayView;
    type InvariantViewProperties = u32;
    type Content = String;

    fn make_view(_: &u32) -> DayView {
        DayView {
            text: String::new(),
        }
    }

    fn set_content(content: &String, view: &mut DayView) {
        view.text.clone_from(content);
    }
}

fn label(font_size: u32, text: &str) -> ErasedItemModel {
    RepresentableModel::<Label>::new(font_size, text.to_string()).into()
}

fn day(font_size: u32, text: &str) -> ErasedItemModel {
    RepresentableModel::<Day>::new(font_size, text.to_string()).into()
}

fn label_view(view: &ErasedView) -> &LabelView {
    view.downcast_ref::<LabelView>().unwrap()
}

#[test]
fn reuse_view_for_model_with_equal_differentiator() {
    let monday = label(12, "Mon");
    let mut view = monday.make_view();
    monday.set_content(&mut view);

    let tuesday = label(12, "Tue");
    assert_eq!(monday.view_differentiator(), tuesday.view_differentiator());

    tuesday.set_content(&mut view);

    assert_eq!(
        label_view(&view),
        &LabelView {
            font_size: 12,
            text: "Tue".to_string(),
        }
    );
}

#[test]
fn different_invariants_are_not_interchangeable() {
    let small = label(12, "Mon");
    let large = label(14, "Mon");

    assert_ne!(small.view_differentiator(), large.view_differentiator());

    let mut view = small.make_view();
    small.set_content(&mut view);

    assert!(matches!(
        large.try_set_content(&mut view),
        Err(Error::InvariantMismatch { .. })
    ));
    assert_eq!(label_view(&view).font_size, 12);
}

#[test]
fn skipping_update_for_equal_content_is_unobservable() {
    let first = label(12, "Mon");
    let second = label(12, "Mon");

    assert!(first.is_content_equal(&second));

    let mut skipped = first.make_view();
    first.set_content(&mut skipped);

    let mut updated = first.make_view();
    first.set_content(&mut updated);
    second.set_content(&mut updated);

    assert_eq!(label_view(&skipped), label_view(&updated));
}

#[test]
fn different_model_types_never_share_differentiators() {
    // Identical invariant view properties and content, different model types.
    let label = label(12, "Mon");
    let day = day(12, "Mon");

    assert_ne!(label.view_differentiator(), day.view_differentiator());
    assert_ne!(
        label.view_differentiator().view_kind(),
        day.view_differentiator().view_kind()
    );
    assert!(!label.is_content_equal(&day));
    assert!(!day.is_content_equal(&label));
}

#[test]
fn cross_type_set_content_fails_without_touching_view() {
    let day = day(12, "Mon");
    let mut view = day.make_view();
    day.set_content(&mut view);

    let error = label(12, "Tue").try_set_content(&mut view).unwrap_err();

    assert!(matches!(error, Error::ViewKindMismatch { .. }));
    assert_eq!(view.downcast_ref::<DayView>().unwrap().text, "Mon");
}

#[test]
fn render_passes_over_mixed_collection() {
    let first_pass = vec![label(12, "Mon"), day(12, "1"), label(14, "Title")];
    let second_pass = vec![label(12, "Tue"), day(12, "1"), label(14, "Title")];

    let mut views: Vec<ErasedView> = first_pass
        .iter()
        .map(|model| {
            let mut view = model.make_view();
            model.set_content(&mut view);
            view
        })
        .collect();

    let mut updates = 0;

    for ((previous, next), view) in first_pass.iter().zip(&second_pass).zip(&mut views) {
        assert_eq!(previous.view_differentiator(), next.view_differentiator());

        if !previous.is_content_equal(next) {
            next.set_content(view);
            updates += 1;
        }
    }

    assert_eq!(updates, 1);
    assert_eq!(label_view(&views[0]).text, "Tue");
    assert_eq!(views[1].downcast_ref::<DayView>().unwrap().text, "1");
    assert_eq!(label_view(&views[2]).text, "Title");
}
