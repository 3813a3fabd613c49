use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use crate::{Attributes, Text};

/// A shared handle to one element of a node tree.
///
/// Cloning a `Node` clones the handle, not the element; equality is handle
/// identity. Handles are single-threaded by design (`Rc`/`RefCell`), and a
/// child holds only a weak link back to its parent, so dropping the last
/// handle to a subtree root frees the subtree.
#[derive(Clone)]
pub struct Node {
    inner: Rc<RefCell<Inner>>,
}

struct Inner {
    name: String,
    attributes: Attributes,
    text: Option<Text>,
    children: Vec<Node>,
    parent: Weak<RefCell<Inner>>,
}

impl Node {
    /// Creates a node and, when `parent` is given, appends it to the
    /// parent's child list.
    pub fn new(parent: Option<&Node>, name: impl Into<String>) -> Node {
        Self::build(parent, name.into(), Attributes::new(), None)
    }

    pub fn with_attributes(
        parent: Option<&Node>,
        name: impl Into<String>,
        attributes: Attributes,
    ) -> Node {
        Self::build(parent, name.into(), attributes, None)
    }

    pub fn with_attributes_and_text(
        parent: Option<&Node>,
        name: impl Into<String>,
        attributes: Attributes,
        text: impl Into<Text>,
    ) -> Node {
        Self::build(parent, name.into(), attributes, Some(text.into()))
    }

    pub fn with_text(parent: Option<&Node>, name: impl Into<String>, text: impl Into<Text>) -> Node {
        Self::build(parent, name.into(), Attributes::new(), Some(text.into()))
    }

    fn build(
        parent: Option<&Node>,
        name: String,
        attributes: Attributes,
        text: Option<Text>,
    ) -> Node {
        let node = Node {
            inner: Rc::new(RefCell::new(Inner {
                name,
                attributes,
                text,
                children: Vec::new(),
                parent: parent.map_or_else(Weak::new, |p| Rc::downgrade(&p.inner)),
            })),
        };
        if let Some(parent) = parent {
            parent.inner.borrow_mut().children.push(node.clone());
        }
        node
    }

    pub fn name(&self) -> String {
        self.inner.borrow().name.clone()
    }

    pub fn text(&self) -> Option<Text> {
        self.inner.borrow().text.clone()
    }

    pub fn attributes(&self) -> Attributes {
        self.inner.borrow().attributes.clone()
    }

    pub fn attribute(&self, key: &str) -> Option<String> {
        self.inner.borrow().attributes.get(key).map(str::to_string)
    }

    /// Child handles in document order.
    pub fn children(&self) -> Vec<Node> {
        self.inner.borrow().children.clone()
    }

    pub fn parent(&self) -> Option<Node> {
        self.inner
            .borrow()
            .parent
            .upgrade()
            .map(|inner| Node { inner })
    }

    pub fn set_text(&self, text: impl Into<Text>) {
        self.inner.borrow_mut().text = Some(text.into());
    }

    pub fn set_attribute(&self, key: impl Into<String>, value: impl Into<String>) {
        self.inner.borrow_mut().attributes.insert(key, value);
    }

    /// Appends `child` to this node's child list, detaching it from its
    /// current parent first. Appending a node to itself or to one of its own
    /// descendants would create a cycle and is ignored.
    pub fn append(&self, child: &Node) {
        let mut cursor = Some(self.clone());
        while let Some(node) = cursor {
            if node == *child {
                return;
            }
            cursor = node.parent();
        }
        child.detach();
        child.inner.borrow_mut().parent = Rc::downgrade(&self.inner);
        self.inner.borrow_mut().children.push(child.clone());
    }

    /// Removes this node from its parent's child list. A node without a
    /// parent is left untouched.
    pub fn detach(&self) {
        if let Some(parent) = self.parent() {
            parent
                .inner
                .borrow_mut()
                .children
                .retain(|sibling| sibling != self);
            self.inner.borrow_mut().parent = Weak::new();
        }
    }

    /// Pre-order traversal starting at (and yielding) this node.
    pub fn depth_first(&self) -> DepthFirst {
        DepthFirst {
            stack: vec![self.clone()],
        }
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Eq for Node {}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("Node")
            .field("name", &inner.name)
            .field("attributes", &inner.attributes)
            .field("text", &inner.text)
            .field("children", &inner.children)
            .finish()
    }
}

pub struct DepthFirst {
    stack: Vec<Node>,
}

impl Iterator for DepthFirst {
    type Item = Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        let children = node.children();
        self.stack.extend(children.into_iter().rev());
        Some(node)
    }
}
