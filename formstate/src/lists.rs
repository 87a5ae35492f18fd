//! Slice operations for selection lists.
//!
//! Every function takes the current list by reference and returns a new
//! `Vec`; the input is never modified. Equality is supplied by the caller so
//! the same operations serve id lists and record lists alike.
//!
//! Out-of-range indices never panic: removal and update return the list
//! unchanged, insertion and moves clamp to the end.

/// Returns true if `item` is in `list` under `eq`.
pub fn is_selected<T>(list: &[T], item: &T, eq: impl Fn(&T, &T) -> bool) -> bool {
    list.iter().any(|member| eq(member, item))
}

/// Appends `item`. Does not check for duplicates.
pub fn add<T: Clone>(list: &[T], item: T) -> Vec<T> {
    let mut next = Vec::with_capacity(list.len() + 1);
    next.extend_from_slice(list);
    next.push(item);
    next
}

/// Inserts `item` at `index`, or at the end if `index` is past it.
pub fn add_at_index<T: Clone>(list: &[T], item: T, index: usize) -> Vec<T> {
    let mut next = list.to_vec();
    next.insert(index.min(list.len()), item);
    next
}

/// Removes every entry equal to `item` under `eq`.
pub fn remove<T: Clone>(list: &[T], item: &T, eq: impl Fn(&T, &T) -> bool) -> Vec<T> {
    list.iter()
        .filter(|member| !eq(member, item))
        .cloned()
        .collect()
}

/// Removes the entry at `index`.
pub fn remove_at_index<T: Clone>(list: &[T], index: usize) -> Vec<T> {
    let mut next = list.to_vec();
    if index < next.len() {
        next.remove(index);
    }
    next
}

/// Replaces the entry at `index`.
pub fn update_at_index<T: Clone>(list: &[T], item: T, index: usize) -> Vec<T> {
    let mut next = list.to_vec();
    if let Some(slot) = next.get_mut(index) {
        *slot = item;
    }
    next
}

/// Moves the first entry equal to `item` to `index`.
///
/// The target index is interpreted after the entry has been taken out.
/// A list without the entry is returned unchanged.
pub fn move_item<T: Clone>(
    list: &[T],
    item: &T,
    index: usize,
    eq: impl Fn(&T, &T) -> bool,
) -> Vec<T> {
    let Some(from) = list.iter().position(|member| eq(member, item)) else {
        return list.to_vec();
    };
    let mut next = list.to_vec();
    let moved = next.remove(from);
    next.insert(index.min(next.len()), moved);
    next
}

/// Removes `item` if present under `eq`, appends it otherwise.
pub fn toggle<T: Clone>(list: &[T], item: T, eq: impl Fn(&T, &T) -> bool) -> Vec<T> {
    if is_selected(list, &item, &eq) {
        remove(list, &item, &eq)
    } else {
        add(list, item)
    }
}
