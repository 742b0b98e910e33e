use super::ItemView;
use crate::core::xml::Element;
use std::collections::HashSet;
use tracing::warn;

/// One category node. Its parent category, if any, is nested under `Ancestors`.
#[derive(Debug, Clone, Copy)]
pub struct BrowseNode<'a> {
    element: Element<'a>,
}

impl<'a> BrowseNode<'a> {
    pub const fn new(element: Element<'a>) -> Self {
        Self { element }
    }

    pub fn is_present(&self) -> bool {
        self.element.is_present()
    }

    pub fn browse_node_id(&self) -> Option<&'a str> {
        self.element.text("BrowseNodeId")
    }

    pub fn name(&self) -> Option<&'a str> {
        self.element.text("Name")
    }

    pub fn is_category_root(&self) -> Option<bool> {
        self.element.flag("IsCategoryRoot")
    }

    pub fn has_ancestor(&self) -> bool {
        self.next_ancestor().is_some()
    }

    pub fn next_ancestor(&self) -> Option<Self> {
        let ancestor = self.element.first("Ancestors/BrowseNode");
        ancestor.is_present().then(|| Self::new(ancestor))
    }

    /// Walk from this node up to the root category
    pub fn ancestry(self) -> BrowseNodeChain<'a> {
        BrowseNodeChain::new(self)
    }
}

/// Leaf-to-root walk over a browse node ancestry.
///
/// The walk ends at the first node without an ancestor, or at the first node
/// whose id was already visited.
#[derive(Debug, Clone)]
pub struct BrowseNodeChain<'a> {
    next: Option<BrowseNode<'a>>,
    seen: HashSet<&'a str>,
}

impl<'a> BrowseNodeChain<'a> {
    pub fn new(start: BrowseNode<'a>) -> Self {
        Self {
            next: start.is_present().then_some(start),
            seen: HashSet::new(),
        }
    }
}

impl<'a> Iterator for BrowseNodeChain<'a> {
    type Item = BrowseNode<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next.take()?;
        if let Some(id) = node.browse_node_id() {
            if !self.seen.insert(id) {
                warn!(browse_node_id = id, "browse node id repeated in ancestry, stopping walk");
                return None;
            }
        }
        self.next = node.next_ancestor();
        Some(node)
    }
}

impl std::iter::FusedIterator for BrowseNodeChain<'_> {}

/// `BrowseNodes` response group
pub trait BrowseNodes<'a>: ItemView<'a> {
    /// First browse node listed for the item
    fn first_browse_node(&self) -> BrowseNode<'a> {
        BrowseNode::new(self.element().first("BrowseNodes/BrowseNode"))
    }

    /// Ancestry of the first browse node, leaf first
    fn browse_nodes(&self) -> BrowseNodeChain<'a> {
        self.first_browse_node().ancestry()
    }

    /// Ancestry of every browse node listed for the item
    fn browse_node_chains(&self) -> Vec<BrowseNodeChain<'a>> {
        self.element()
            .query("BrowseNodes/BrowseNode")
            .into_iter()
            .map(|node| BrowseNode::new(node).ancestry())
            .collect()
    }
}
