//! Arena of path nodes with parent back-references.
//!
//! A naive BFS that carries a full word sequence in every frontier entry
//! costs O(visited × path length) memory. Here each discovered word is
//! stored once, with the index of the node it was discovered from; frontier
//! entries are node ids, and a displayed path is reconstructed by walking
//! parent links root-ward only when a result must be materialized. Memory is
//! O(visited nodes); observable behavior is identical.

/// Index of a node in a [`PathArena`].
pub type NodeId = usize;

#[derive(Debug)]
struct PathNode {
    word: String,
    parent: Option<NodeId>,
    /// Number of words on the path ending at this node (root = 1).
    depth: u32,
}

/// Append-only arena of BFS path nodes.
#[derive(Debug)]
pub struct PathArena {
    nodes: Vec<PathNode>,
}

impl PathArena {
    /// Create an arena holding only the root node for `start`.
    pub fn with_root(start: &str) -> PathArena {
        PathArena {
            nodes: vec![PathNode {
                word: start.to_owned(),
                parent: None,
                depth: 1,
            }],
        }
    }

    /// Id of the root node.
    pub fn root(&self) -> NodeId {
        0
    }

    /// Append a child of `parent` and return its id.
    pub fn push_child(&mut self, parent: NodeId, word: String) -> NodeId {
        let depth = self.nodes[parent].depth + 1;
        self.nodes.push(PathNode {
            word,
            parent: Some(parent),
            depth,
        });
        self.nodes.len() - 1
    }

    /// Final word of the path ending at `id`.
    pub fn word(&self, id: NodeId) -> &str {
        &self.nodes[id].word
    }

    /// Path length in words of the path ending at `id`.
    pub fn depth(&self, id: NodeId) -> u32 {
        self.nodes[id].depth
    }

    /// Reconstruct the root-to-`id` word sequence by walking parent links.
    pub fn path_words(&self, id: NodeId) -> Vec<String> {
        let mut words = Vec::with_capacity(self.nodes[id].depth as usize);
        let mut cursor = Some(id);
        while let Some(node) = cursor {
            words.push(self.nodes[node].word.clone());
            cursor = self.nodes[node].parent;
        }
        words.reverse();
        words
    }

    /// Number of nodes ever discovered.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: an arena is created with its root.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_path_is_the_start_word() {
        let arena = PathArena::with_root("CAT");
        assert_eq!(arena.depth(arena.root()), 1);
        assert_eq!(arena.path_words(arena.root()), ["CAT"]);
    }

    #[test]
    fn path_reconstruction_walks_parents_in_order() {
        let mut arena = PathArena::with_root("CAT");
        let cot = arena.push_child(arena.root(), "COT".to_owned());
        let cog = arena.push_child(cot, "COG".to_owned());
        assert_eq!(arena.depth(cog), 3);
        assert_eq!(arena.path_words(cog), ["CAT", "COT", "COG"]);
    }

    #[test]
    fn siblings_share_a_parent_without_interference() {
        let mut arena = PathArena::with_root("CAT");
        let cot = arena.push_child(arena.root(), "COT".to_owned());
        let bat = arena.push_child(arena.root(), "BAT".to_owned());
        assert_eq!(arena.path_words(cot), ["CAT", "COT"]);
        assert_eq!(arena.path_words(bat), ["CAT", "BAT"]);
    }
}
