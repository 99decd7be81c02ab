//! Leptos DragDrop Utilities
//!
//! Vertical list reordering for Leptos using mouse events.
//! Uses a movement threshold to distinguish click from drag. While dragging,
//! the dragged row is moved before the nearest row whose midpoint lies below
//! the pointer; the result is only a preview until the mouse is released.

use std::str::FromStr;

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Movement threshold in pixels to start dragging
const DRAG_THRESHOLD_PX: i32 = 5;

/// Measured vertical extent of one rendered row
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RowBox<Id> {
    pub id: Id,
    pub top: f64,
    pub height: f64,
}

impl<Id> RowBox<Id> {
    pub fn new(id: Id, top: f64, height: f64) -> Self {
        Self { id, top, height }
    }

    pub fn midpoint(&self) -> f64 {
        self.top + self.height / 2.0
    }
}

/// Find the row the dragged row should be inserted before.
///
/// Among rows other than `dragging`, picks the one whose midpoint has the
/// smallest non-negative distance below `pointer_y`. Rows are scanned in the
/// given order and ties keep the first row. `None` means "move to the end".
pub fn insertion_target<Id: Copy + PartialEq>(
    rows: &[RowBox<Id>],
    dragging: Id,
    pointer_y: f64,
) -> Option<Id> {
    let mut closest: Option<(f64, Id)> = None;
    for row in rows.iter().filter(|row| row.id != dragging) {
        let gap = row.midpoint() - pointer_y;
        if gap < 0.0 {
            continue;
        }
        if closest.map_or(true, |(best, _)| gap < best) {
            closest = Some((gap, row.id));
        }
    }
    closest.map(|(_, id)| id)
}

/// Move `dragged` immediately before `before` (or to the end when `None`).
/// Returns true if the order changed.
pub fn move_before<Id: Copy + PartialEq>(order: &mut Vec<Id>, dragged: Id, before: Option<Id>) -> bool {
    let Some(from) = order.iter().position(|id| *id == dragged) else {
        return false;
    };
    if before == Some(dragged) {
        return false;
    }
    let original = order.clone();
    order.remove(from);
    match before.and_then(|target| order.iter().position(|id| *id == target)) {
        Some(to) => order.insert(to, dragged),
        None => order.push(dragged),
    }
    *order != original
}

/// Order of rows after dropping `dragging` at `pointer_y`.
///
/// `rows` must be in current visual order (the dragged row included).
pub fn reordered_ids<Id: Copy + PartialEq>(rows: &[RowBox<Id>], dragging: Id, pointer_y: f64) -> Vec<Id> {
    let mut order: Vec<Id> = rows.iter().map(|row| row.id).collect();
    let target = insertion_target(rows, dragging, pointer_y);
    move_before(&mut order, dragging, target);
    order
}

/// Measure the element children of `container` that carry `attr`.
///
/// Children whose attribute is missing or does not parse are skipped.
pub fn measure_rows<Id: FromStr>(container: &web_sys::Element, attr: &str) -> Vec<RowBox<Id>> {
    let children = container.children();
    let mut rows = Vec::with_capacity(children.length() as usize);
    for i in 0..children.length() {
        let Some(child) = children.item(i) else { continue };
        let Some(id) = child.get_attribute(attr).and_then(|raw| raw.parse().ok()) else {
            continue;
        };
        let rect = child.get_bounding_client_rect();
        rows.push(RowBox::new(id, rect.top(), rect.height()));
    }
    rows
}

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals<Id: Send + Sync + 'static> {
    pub dragging_id_read: ReadSignal<Option<Id>>,
    pub dragging_id_write: WriteSignal<Option<Id>>,
    /// Visual order while dragging (None = show committed order)
    pub preview_read: ReadSignal<Option<Vec<Id>>>,
    pub preview_write: WriteSignal<Option<Vec<Id>>>,
    /// Pending row id (mousedown but not yet dragging)
    pub pending_id_read: ReadSignal<Option<Id>>,
    pub pending_id_write: WriteSignal<Option<Id>>,
    /// Start position for movement detection
    pub start_x_read: ReadSignal<i32>,
    pub start_x_write: WriteSignal<i32>,
    pub start_y_read: ReadSignal<i32>,
    pub start_y_write: WriteSignal<i32>,
}

pub fn create_dnd_signals<Id: Copy + Send + Sync + 'static>() -> DndSignals<Id> {
    let (dragging_id_read, dragging_id_write) = signal(None::<Id>);
    let (preview_read, preview_write) = signal(None::<Vec<Id>>);
    let (pending_id_read, pending_id_write) = signal(None::<Id>);
    let (start_x_read, start_x_write) = signal(0i32);
    let (start_y_read, start_y_write) = signal(0i32);
    DndSignals {
        dragging_id_read,
        dragging_id_write,
        preview_read,
        preview_write,
        pending_id_read,
        pending_id_write,
        start_x_read,
        start_x_write,
        start_y_read,
        start_y_write,
    }
}

/// End drag operation
pub fn end_drag<Id: Send + Sync + 'static>(dnd: &DndSignals<Id>) {
    dnd.dragging_id_write.set(None);
    dnd.preview_write.set(None);
    dnd.pending_id_write.set(None);
}

/// Create mousedown handler for draggable rows
/// Records pending drag with start position
pub fn make_on_mousedown<Id>(dnd: DndSignals<Id>, row_id: Id) -> impl Fn(web_sys::MouseEvent) + Copy + 'static
where
    Id: Copy + Send + Sync + 'static,
{
    move |ev: web_sys::MouseEvent| {
        if ev.button() == 0 {
            // Ignore if target is input or button
            if let Some(target) = ev.target() {
                if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
                if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
            }
            dnd.pending_id_write.set(Some(row_id));
            dnd.start_x_write.set(ev.client_x());
            dnd.start_y_write.set(ev.client_y());
        }
    }
}

/// Bind document-level mousemove and mouseup handlers.
///
/// `measure` returns the rows in their current visual order; it is called on
/// every pointer move while dragging. `on_drop` receives the final order when
/// a drag that changed something is released.
pub fn bind_global_handlers<Id, M, D>(dnd: DndSignals<Id>, measure: M, on_drop: D)
where
    Id: Copy + PartialEq + Send + Sync + 'static,
    M: Fn() -> Vec<RowBox<Id>> + 'static,
    D: Fn(Vec<Id>) + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let pending = dnd.pending_id_read.get_untracked();
        let dragging = dnd.dragging_id_read.get_untracked();

        // Start dragging once the pointer moved beyond the threshold
        if pending.is_some() && dragging.is_none() {
            let dx = (ev.client_x() - dnd.start_x_read.get_untracked()).abs();
            let dy = (ev.client_y() - dnd.start_y_read.get_untracked()).abs();
            if dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX {
                dnd.dragging_id_write.set(pending);
            }
            return;
        }

        if let Some(dragged) = dragging {
            let rows = measure();
            if rows.len() < 2 {
                return;
            }
            let order = reordered_ids(&rows, dragged, f64::from(ev.client_y()));
            let visual: Vec<Id> = rows.iter().map(|row| row.id).collect();
            if order != visual {
                dnd.preview_write.set(Some(order));
            }
        }
    });

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let dragging = dnd.dragging_id_read.get_untracked();
        let preview = dnd.preview_read.get_untracked();

        end_drag(&dnd);

        // Only a real drag that moved something commits; a click just falls through
        if let (Some(_), Some(order)) = (dragging, preview) {
            on_drop(order);
        }
    });

    if let Some(doc) = web_sys::window().and_then(|win| win.document()) {
        let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
        let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
    }
    on_mousemove.forget();
    on_mouseup.forget();
}
