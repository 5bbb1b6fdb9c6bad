//! Example demonstrating a recycling pool serving several render passes over a mixed list of
//! items, with tracing output showing every reuse decision.

use item_model::{ErasedItemModel, ItemViewRepresentable, RepresentableModel};
use view_reuse::ViewReusePool;

struct Day;

impl ItemViewRepresentable for Day {
    type View = String;
    type InvariantViewProperties = u32;
    type Content = String;

    fn make_view(font_size: &u32) -> String {
        println!("  building a day view with font size {font_size}");
        String::new()
    }

    fn set_content(content: &String, view: &mut String) {
        view.clone_from(content);
    }
}

struct Header;

impl ItemViewRepresentable for Header {
    type View = Vec<String>;
    type InvariantViewProperties = ();
    type Content = String;

    fn make_view(_: &()) -> Vec<String> {
        println!("  building a header view");
        Vec::new()
    }

    fn set_content(content: &String, view: &mut Vec<String>) {
        view.clear();
        view.push(content.clone());
    }
}

fn page(month: &str, days: &[&str]) -> Vec<ErasedItemModel> {
    let mut items: Vec<ErasedItemModel> =
        vec![RepresentableModel::<Header>::new((), month.to_string()).into()];

    items.extend(days.iter().map(|day| -> ErasedItemModel {
        RepresentableModel::<Day>::new(12, (*day).to_string()).into()
    }));

    items
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    let mut pool = ViewReusePool::new();

    println!("=== First pass ===");
    let mut bound: Vec<_> = page("May", &["1", "2", "3"])
        .into_iter()
        .map(|model| pool.bind(model))
        .collect();

    println!("=== Second pass: one day changed ===");
    for (bound, model) in bound.iter_mut().zip(page("May", &["1", "2", "31"])) {
        let outcome = pool.update(bound, model);
        println!("  {outcome:?}");
    }

    println!("=== Third pass: next month scrolls in ===");
    for bound in bound.drain(..) {
        pool.recycle(bound);
    }
    println!("  idle views: {}", pool.idle_len());

    let bound: Vec<_> = page("June", &["1", "2"])
        .into_iter()
        .map(|model| pool.bind(model))
        .collect();

    println!("  bound {} items, idle views left: {}", bound.len(), pool.idle_len());
}
