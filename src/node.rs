//! The building block of [`Tree`][crate::linked::Tree]. Each `Node` exclusively owns its
//! children through a [`Link`] so dropping a subtree frees all of its descendants and there are
//! no parent pointers to keep in sync.

/// An owned, possibly empty child slot. `None` is the empty slot at the bottom of a subtree.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

pub(crate) struct Node<T> {
    pub(crate) item: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> Node<T> {
    /// Construct a new leaf holding `item`.
    pub(crate) fn new_boxed(item: T) -> Box<Self> {
        Box::new(Self {
            item,
            left: None,
            right: None,
        })
    }

    /// Removes the largest node hanging off `top`'s right spine and returns its item. The
    /// removed node's left subtree takes its place in its parent.
    ///
    /// ## Panics
    ///
    /// When `top` has no right child. A node whose right slot is empty is itself the maximum of
    /// its subtree and must be spliced by its owner instead.
    pub(crate) fn detach_max(top: &mut Self) -> T {
        let mut parent = top;
        while parent.right.as_ref().map_or(false, |r| r.right.is_some()) {
            parent = parent
                .right
                .as_deref_mut()
                .expect("loop condition saw a right child");
        }

        let max = parent
            .right
            .take()
            .expect("`detach_max` requires a right child");
        let Node { item, left, .. } = *max;
        parent.right = left;
        item
    }

    /// Copies the subtree in `link` node by node, keeping its shape. Walks the source with an
    /// explicit stack of (source node, destination slot) pairs so a degenerate subtree can't
    /// overflow the call stack.
    pub(crate) fn clone_link(link: &Link<T>) -> Link<T>
    where
        T: Clone,
    {
        let mut root = None;
        {
            let mut stack: Vec<(&Self, &mut Link<T>)> =
                link.as_deref().map(|n| (n, &mut root)).into_iter().collect();
            while let Some((source, slot)) = stack.pop() {
                let copy = slot.insert(Self::new_boxed(source.item.clone()));
                let Node { left, right, .. } = &mut **copy;
                stack.extend(source.left.as_deref().map(|n| (n, left)));
                stack.extend(source.right.as_deref().map(|n| (n, right)));
            }
        }

        root
    }

    /// Consumes the subtree in `link`, returning its items in order (left, self, right). Uses an
    /// explicit stack so a degenerate subtree can't overflow the call stack.
    pub(crate) fn drain_in_order(link: Link<T>, capacity: usize) -> Vec<T> {
        let mut items = Vec::with_capacity(capacity);
        let mut stack = Vec::new();
        let mut current = link;
        loop {
            while let Some(mut node) = current {
                current = node.left.take();
                stack.push(node);
            }
            let Some(node) = stack.pop() else {
                break;
            };
            let Node { item, right, .. } = *node;
            items.push(item);
            current = right;
        }

        items
    }

    /// Builds a minimum height subtree out of the next `len` items of `items`, which must yield
    /// them in ascending order. The middle item (at index `len / 2`) becomes the subtree root so
    /// for an even `len` the left half is the larger one.
    pub(crate) fn build_balanced<I>(items: &mut I, len: usize) -> Link<T>
    where
        I: Iterator<Item = T>,
    {
        if len == 0 {
            return None;
        }
        let mid = len / 2;
        let left = Self::build_balanced(items, mid);
        let item = items.next()?;
        let right = Self::build_balanced(items, len - mid - 1);

        Some(Box::new(Self { item, left, right }))
    }

    /// Frees the subtree in `link` children-first without recursing.
    pub(crate) fn dismantle(link: Link<T>) {
        let mut stack: Vec<Box<Self>> = link.into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}
