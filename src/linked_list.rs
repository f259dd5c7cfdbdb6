use std::fmt;
use std::ops::{Index, IndexMut};

use crate::error::{ListError, Result};

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    value: T,
    next: Link<T>,
}

impl<T> Node<T> {
    fn new(value: T, next: Link<T>) -> Node<T> {
        Node { value, next }
    }
}

/// A singly linked list. Every element lives in its own heap node, so an element never moves once
/// it has been inserted, no matter how the list grows or shrinks around it.
///
/// Positional operations walk from the first node and cost O(index). Appending walks to the tail.
///
/// There is no internal locking. Mutation needs `&mut self`, so sharing a list across threads
/// requires external synchronization (e.g. a `Mutex`).
pub struct LinkedSequence<T> {
    head: Link<T>,
    size: usize,
}

impl<T> LinkedSequence<T> {
    pub fn new() -> LinkedSequence<T> {
        LinkedSequence {
            head: None,
            size: 0,
        }
    }

    pub fn get_size(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.get_size() == 0
    }

    fn out_of_range(&self, index: usize) -> ListError {
        log::debug!("index {} rejected, list size is {}", index, self.size);
        ListError::OutOfRange {
            index,
            size: self.size,
        }
    }

    /// Walks to the node at `index`. Returns None if the chain ends first.
    fn node_at(&self, index: usize) -> Option<&Node<T>> {
        let mut current = self.head.as_deref();
        for _ in 0..index {
            current = current?.next.as_deref();
        }
        current
    }

    fn node_at_mut(&mut self, index: usize) -> Option<&mut Node<T>> {
        let mut current = self.head.as_deref_mut();
        for _ in 0..index {
            current = current?.next.as_deref_mut();
        }
        current
    }

    /// Returns the link that owns position `index`: the head link for 0, otherwise the `next` of
    /// the node before it. `index == size` yields the empty link past the tail.
    fn link_at_mut(&mut self, index: usize) -> Option<&mut Link<T>> {
        let mut link = &mut self.head;
        for _ in 0..index {
            link = &mut link.as_mut()?.next;
        }
        Some(link)
    }

    fn tail_link(&mut self) -> &mut Link<T> {
        let mut link = &mut self.head;
        while let Some(node) = link {
            link = &mut node.next;
        }
        link
    }

    /// Returns a reference to the element at `index`.
    pub fn element_at(&self, index: usize) -> Result<&T> {
        if index >= self.size {
            return Err(self.out_of_range(index));
        }
        self.node_at(index)
            .map(|node| &node.value)
            .ok_or(ListError::OutOfRange {
                index,
                size: self.size,
            })
    }

    /// Returns a mutable reference to the element at `index`.
    pub fn element_at_mut(&mut self, index: usize) -> Result<&mut T> {
        if index >= self.size {
            return Err(self.out_of_range(index));
        }
        let err = ListError::OutOfRange {
            index,
            size: self.size,
        };
        self.node_at_mut(index).map(|node| &mut node.value).ok_or(err)
    }

    /// Appends `value` after the current last element.
    pub fn push(&mut self, value: T) {
        *self.tail_link() = Some(Box::new(Node::new(value, None)));
        self.size += 1;
        log::trace!("push: size {}", self.size);
    }

    /// Inserts `value` so that it ends up at position `index`, shifting later elements back by
    /// one. Any index in `0..=size` is accepted; `index == size` appends like `push`.
    pub fn insert(&mut self, value: T, index: usize) -> Result<()> {
        if index > self.size {
            return Err(self.out_of_range(index));
        }
        let err = ListError::OutOfRange {
            index,
            size: self.size,
        };
        let link = self.link_at_mut(index).ok_or(err)?;
        let next = link.take();
        *link = Some(Box::new(Node::new(value, next)));
        self.size += 1;
        log::trace!("insert at {}: size {}", index, self.size);
        Ok(())
    }

    /// Removes the last element and returns it.
    pub fn pop(&mut self) -> Result<T> {
        if self.is_empty() {
            log::debug!("pop on an empty list");
            return Err(ListError::EmptyContainer);
        }
        self.remove(self.size - 1)
    }

    /// Removes the element at `index` and returns it. The node before it (or the head link) is
    /// relinked to the node after it.
    pub fn remove(&mut self, index: usize) -> Result<T> {
        if self.is_empty() {
            log::debug!("remove({}) on an empty list", index);
            return Err(ListError::EmptyContainer);
        }
        if index >= self.size {
            return Err(self.out_of_range(index));
        }
        let err = ListError::OutOfRange {
            index,
            size: self.size,
        };
        let link = self.link_at_mut(index).ok_or(err)?;
        let mut node = link.take().ok_or(err)?;
        *link = node.next.take();
        self.size -= 1;
        log::trace!("remove at {}: size {}", index, self.size);
        Ok(node.value)
    }

    /// Drops every element. Nodes are detached from the head one at a time, so the stack depth
    /// does not depend on the length of the list.
    pub fn clear(&mut self) {
        let released = self.size;
        let mut current = self.head.take();
        while let Some(mut node) = current {
            current = node.next.take();
        }
        self.size = 0;
        if released > 0 {
            log::trace!("clear: released {} nodes", released);
        }
    }
}

impl<T> Default for LinkedSequence<T> {
    fn default() -> Self {
        LinkedSequence::new()
    }
}

impl<T> Drop for LinkedSequence<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Index<usize> for LinkedSequence<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match self.element_at(index) {
            Ok(value) => value,
            Err(err) => panic!("{}", err),
        }
    }
}

impl<T> IndexMut<usize> for LinkedSequence<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.element_at_mut(index) {
            Ok(value) => value,
            Err(err) => panic!("{}", err),
        }
    }
}

impl<T: Clone> Clone for LinkedSequence<T> {
    fn clone(&self) -> Self {
        let mut cloned = LinkedSequence::new();
        let mut tail = &mut cloned.head;
        let mut current = self.head.as_deref();
        while let Some(node) = current {
            let new_node = tail.insert(Box::new(Node::new(node.value.clone(), None)));
            tail = &mut new_node.next;
            current = node.next.as_deref();
        }
        cloned.size = self.size;
        cloned
    }
}

impl<T: PartialEq> PartialEq for LinkedSequence<T> {
    fn eq(&self, other: &Self) -> bool {
        if self.size != other.size {
            return false;
        }
        let mut left = self.head.as_deref();
        let mut right = other.head.as_deref();
        while let (Some(a), Some(b)) = (left, right) {
            if a.value != b.value {
                return false;
            }
            left = a.next.as_deref();
            right = b.next.as_deref();
        }
        true
    }
}

impl<T: Eq> Eq for LinkedSequence<T> {}

impl<T: fmt::Display> fmt::Display for LinkedSequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        let mut current = self.head.as_deref();
        let mut first = true;
        while let Some(node) = current {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{}", node.value)?;
            first = false;
            current = node.next.as_deref();
        }
        write!(f, "]")
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedSequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_list();
        let mut current = self.head.as_deref();
        while let Some(node) = current {
            list.entry(&node.value);
            current = node.next.as_deref();
        }
        list.finish()
    }
}
