//! Insertion-ordered owning container with stable handles.
//!
//! Items live in an index arena and are threaded into a doubly-linked order,
//! so appending and removing by handle are both O(1) and iteration always
//! follows the current order. Handles carry a generation so a handle to a
//! removed item never resolves to whatever reuses its slot.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Stable reference to an item inside an [`ItemList`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemHandle {
    index: usize,
    generation: u64,
}

#[derive(Debug, Clone)]
struct Slot<T> {
    item: Option<T>,
    generation: u64,
    prev: Option<usize>,
    next: Option<usize>,
}

/// An ordered collection that owns its items.
///
/// Duplicates are allowed; nothing about an item's content affects where it
/// sits in the list.
#[derive(Clone)]
pub struct ItemList<T> {
    slots: Vec<Slot<T>>,
    free: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
}

impl<T> ItemList<T> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Add `item` at the end.
    pub fn append(&mut self, item: T) -> ItemHandle {
        let index = self.allocate(item);
        self.link_after(index, self.tail);
        self.handle_at(index)
    }

    /// Add `item` at the front.
    pub fn insert(&mut self, item: T) -> ItemHandle {
        let index = self.allocate(item);
        self.link_after(index, None);
        self.handle_at(index)
    }

    /// Add `item` right after `anchor`. A stale anchor drops the item and
    /// returns `None`.
    pub fn insert_after(&mut self, anchor: ItemHandle, item: T) -> Option<ItemHandle> {
        let at = self.resolve(anchor)?;
        let index = self.allocate(item);
        self.link_after(index, Some(at));
        Some(self.handle_at(index))
    }

    /// Add `item` right before `anchor`.
    pub fn insert_before(&mut self, anchor: ItemHandle, item: T) -> Option<ItemHandle> {
        let at = self.resolve(anchor)?;
        let prev = self.slots[at].prev;
        let index = self.allocate(item);
        self.link_after(index, prev);
        Some(self.handle_at(index))
    }

    /// Take the item out of the list, handing ownership back to the caller.
    pub fn remove(&mut self, handle: ItemHandle) -> Option<T> {
        let index = self.resolve(handle)?;
        self.unlink(index);
        let slot = &mut self.slots[index];
        slot.generation = slot.generation.wrapping_add(1);
        slot.prev = None;
        slot.next = None;
        self.free.push(index);
        slot.item.take()
    }

    /// Drop every item. Outstanding handles become stale.
    pub fn clear(&mut self) {
        for (index, slot) in self.slots.iter_mut().enumerate() {
            if slot.item.take().is_some() {
                slot.generation = slot.generation.wrapping_add(1);
                self.free.push(index);
            }
            slot.prev = None;
            slot.next = None;
        }
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    pub fn contains(&self, handle: ItemHandle) -> bool {
        self.resolve(handle).is_some()
    }

    pub fn get(&self, handle: ItemHandle) -> Option<&T> {
        let index = self.resolve(handle)?;
        self.slots[index].item.as_ref()
    }

    pub fn get_mut(&mut self, handle: ItemHandle) -> Option<&mut T> {
        let index = self.resolve(handle)?;
        self.slots[index].item.as_mut()
    }

    pub fn first(&self) -> Option<&T> {
        self.head.and_then(|i| self.slots[i].item.as_ref())
    }

    pub fn last(&self) -> Option<&T> {
        self.tail.and_then(|i| self.slots[i].item.as_ref())
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            cursor: self.head,
            remaining: self.len,
        }
    }

    /// Mutable iteration in list order.
    pub fn iter_mut(&mut self) -> std::vec::IntoIter<&mut T> {
        let order: Vec<usize> = self.order().collect();
        let mut by_slot: Vec<Option<&mut T>> =
            self.slots.iter_mut().map(|s| s.item.as_mut()).collect();
        order
            .into_iter()
            .filter_map(|i| by_slot[i].take())
            .collect::<Vec<_>>()
            .into_iter()
    }

    /// Handles in list order.
    pub fn handles(&self) -> impl Iterator<Item = ItemHandle> + '_ {
        self.order().map(move |i| self.handle_at(i))
    }

    /// `(handle, item)` pairs in list order.
    pub fn entries(&self) -> impl Iterator<Item = (ItemHandle, &T)> + '_ {
        self.order()
            .filter_map(move |i| self.slots[i].item.as_ref().map(|item| (self.handle_at(i), item)))
    }

    /// Handle of the first item matching `pred`.
    pub fn find_handle<P>(&self, mut pred: P) -> Option<ItemHandle>
    where
        P: FnMut(&T) -> bool,
    {
        self.entries().find(|(_, item)| pred(*item)).map(|(h, _)| h)
    }

    fn order(&self) -> impl Iterator<Item = usize> + '_ {
        std::iter::successors(self.head, move |&i| self.slots[i].next)
    }

    fn handle_at(&self, index: usize) -> ItemHandle {
        ItemHandle {
            index,
            generation: self.slots[index].generation,
        }
    }

    fn resolve(&self, handle: ItemHandle) -> Option<usize> {
        let slot = self.slots.get(handle.index)?;
        (slot.generation == handle.generation && slot.item.is_some()).then_some(handle.index)
    }

    fn allocate(&mut self, item: T) -> usize {
        match self.free.pop() {
            Some(index) => {
                self.slots[index].item = Some(item);
                index
            }
            None => {
                self.slots.push(Slot {
                    item: Some(item),
                    generation: 0,
                    prev: None,
                    next: None,
                });
                self.slots.len() - 1
            }
        }
    }

    /// Thread slot `index` in after `after`, or at the front when `None`.
    fn link_after(&mut self, index: usize, after: Option<usize>) {
        let next = match after {
            Some(a) => self.slots[a].next,
            None => self.head,
        };
        self.slots[index].prev = after;
        self.slots[index].next = next;
        match after {
            Some(a) => self.slots[a].next = Some(index),
            None => self.head = Some(index),
        }
        match next {
            Some(n) => self.slots[n].prev = Some(index),
            None => self.tail = Some(index),
        }
        self.len += 1;
    }

    fn unlink(&mut self, index: usize) {
        let prev = self.slots[index].prev;
        let next = self.slots[index].next;
        match prev {
            Some(p) => self.slots[p].next = next,
            None => self.head = next,
        }
        match next {
            Some(n) => self.slots[n].prev = prev,
            None => self.tail = prev,
        }
        self.len -= 1;
    }
}

impl<T> Default for ItemList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for ItemList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for ItemList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T> FromIterator<T> for ItemList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        for item in iter {
            list.append(item);
        }
        list
    }
}

impl<'a, T> IntoIterator for &'a ItemList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Serialize> Serialize for ItemList<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for ItemList<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<T>::deserialize(deserializer).map(|items| items.into_iter().collect())
    }
}

/// Forward iterator over an [`ItemList`] in list order.
pub struct Iter<'a, T> {
    list: &'a ItemList<T>,
    cursor: Option<usize>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let index = self.cursor?;
        let slot = &self.list.slots[index];
        self.cursor = slot.next;
        self.remaining = self.remaining.saturating_sub(1);
        slot.item.as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
