use newsdesk_shared::paging::{clamp_page, slice_bounds, total_pages};
use yew::prelude::*;

/// One rendered page of an in-memory list.
pub struct PageView<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub total_pages: usize,
    pub go_to: Callback<usize>,
}

/// Slice `items` into fixed-size pages held in component state. The current
/// page clamps itself back into range whenever the list shrinks.
#[hook]
pub fn use_pagination<T>(items: Vec<T>, per_page: usize) -> PageView<T>
where
    T: Clone + PartialEq + 'static,
{
    let page_state = use_state(|| 1_usize);
    let total = total_pages(items.len(), per_page);

    {
        let page_state = page_state.clone();
        use_effect_with(total, move |total| {
            let clamped = clamp_page(*page_state, *total);
            if clamped != *page_state {
                page_state.set(clamped);
            }
        });
    }

    let page = clamp_page(*page_state, total);
    let (start, end) = slice_bounds(items.len(), page, per_page);
    let go_to = {
        let page_state = page_state.clone();
        Callback::from(move |target: usize| page_state.set(clamp_page(target, total)))
    };

    PageView {
        items: items[start..end].to_vec(),
        page,
        total_pages: total,
        go_to,
    }
}
