use std::cmp::Ordering;

use smol_str::SmolStr;

use crate::config::Collation;

pub(crate) type NodeIndex = usize;

#[derive(Debug, Clone)]
pub(crate) struct TreeNode {
    pub word: SmolStr,
    pub left: Option<NodeIndex>,
    pub right: Option<NodeIndex>,
}

impl TreeNode {
    #[inline(always)]
    fn leaf(word: SmolStr) -> TreeNode {
        TreeNode {
            word,
            left: None,
            right: None,
        }
    }
}

/// Binary search tree of words stored in an arena.
///
/// Nodes are kept in collation order, so an in-order walk is a plain
/// iteration over `nodes`. Each subtree's root is the median of its range,
/// which keeps the depth at `ceil(log2(n + 1))` whatever order the words
/// arrived in.
#[derive(Debug, Clone)]
pub(crate) struct WordTree {
    nodes: Vec<TreeNode>,
    root: Option<NodeIndex>,
    collation: Collation,
}

impl WordTree {
    /// `words` must be sorted by `collation` and free of duplicates.
    pub fn from_sorted(words: Vec<SmolStr>, collation: Collation) -> WordTree {
        debug_assert!(words
            .windows(2)
            .all(|w| collation.compare(&w[0], &w[1]) == Ordering::Less));

        let mut nodes: Vec<TreeNode> = words.into_iter().map(TreeNode::leaf).collect();
        let len = nodes.len();
        let root = link(&mut nodes, 0, len);

        WordTree {
            nodes,
            root,
            collation,
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        let mut cursor = self.root;

        while let Some(index) = cursor {
            let node = &self.nodes[index];

            cursor = match self.collation.compare(word, &node.word) {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => return true,
            };
        }

        false
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn collation(&self) -> Collation {
        self.collation
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.nodes.iter().map(|node| node.word.as_str())
    }

    #[cfg(test)]
    pub fn depth(&self) -> usize {
        fn walk(nodes: &[TreeNode], index: Option<NodeIndex>) -> usize {
            match index {
                None => 0,
                Some(i) => {
                    let node = &nodes[i];
                    1 + walk(nodes, node.left).max(walk(nodes, node.right))
                }
            }
        }

        walk(&self.nodes, self.root)
    }
}

/// Links `nodes[lo..hi]` into a subtree and returns its root.
fn link(nodes: &mut [TreeNode], lo: usize, hi: usize) -> Option<NodeIndex> {
    if lo >= hi {
        return None;
    }

    let mid = lo + (hi - lo) / 2;
    nodes[mid].left = link(nodes, lo, mid);
    nodes[mid].right = link(nodes, mid + 1, hi);

    Some(mid)
}
