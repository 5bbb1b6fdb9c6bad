//! Example demonstrating how models of different types are erased into one collection and
//! matched against views by their differentiators.

use item_model::{ErasedItemModel, ItemViewRepresentable, RepresentableModel};

#[derive(Debug)]
struct TextView {
    font_size: u32,
    text: String,
}

struct Text;

impl ItemViewRepresentable for Text {
    type View = TextView;
    type InvariantViewProperties = u32;
    type Content = String;

    fn make_view(font_size: &u32) -> TextView {
        TextView {
            font_size: *font_size,
            text: String::new(),
        }
    }

    fn set_content(content: &String, view: &mut TextView) {
        view.text.clone_from(content);
    }
}

#[derive(Debug)]
struct DotView {
    filled: bool,
}

struct Dot;

impl ItemViewRepresentable for Dot {
    type View = DotView;
    type InvariantViewProperties = ();
    type Content = bool;

    fn make_view(_: &()) -> DotView {
        DotView { filled: false }
    }

    fn set_content(content: &bool, view: &mut DotView) {
        view.filled = *content;
    }
}

fn main() {
    println!("=== ErasedItemModel: heterogeneous models, uniform dispatch ===");

    let items = [
        ErasedItemModel::new(RepresentableModel::<Text>::new(12, "Mon".to_string())),
        ErasedItemModel::new(RepresentableModel::<Dot>::new((), true)),
        ErasedItemModel::new(RepresentableModel::<Text>::new(12, "Tue".to_string())),
        ErasedItemModel::new(RepresentableModel::<Text>::new(18, "June".to_string())),
    ];

    for (index, item) in items.iter().enumerate() {
        println!("{index}: {:?}", item.view_differentiator());
    }

    // Build a view for the first item and see which other items could reuse it.
    let mut view = items[0].make_view();
    items[0].set_content(&mut view);

    for (index, item) in items.iter().enumerate().skip(1) {
        if item.view_differentiator() == view.differentiator() {
            item.set_content(&mut view);
            println!("{index}: reused view, now showing {:?}", view.downcast_ref::<TextView>());
        } else {
            println!("{index}: incompatible, a new view is needed");
        }
    }

    if let Some(text) = view.downcast_ref::<TextView>() {
        println!("Final view: {} at size {}", text.text, text.font_size);
    }
}
