use crate::config::TreeConfig;
use crate::document::{Document, DocumentSet};
use crate::errors::TagTreeError;
use crate::node::TreeNode;
use crate::probability::{accumulated_uses, has_tag, identifiers, information_gain, possible_tag_values};
use crate::tag::Tag;
use crate::utils::{descending_then_key, fmt_gain};
use log::{debug, info, warn};
use std::cmp::max;
use std::fmt::{self, Display};

/// A hierarchical classification of a document set, split greedily on the
/// tag identifier with the highest information gain.
///
/// The tree borrows the documents it classifies, so their uses cannot change
/// between building it and rendering it.
pub struct StructuralTree<'a> {
    pub(crate) documents: &'a DocumentSet,
    pub(crate) config: TreeConfig,
    pub nodes: Vec<TreeNode>,
    pub depth: usize,
    pub n_leaves: usize,
    built: bool,
}

impl<'a> StructuralTree<'a> {
    /// Create an unbuilt tree, with a single root node holding every document.
    pub fn new(documents: &'a DocumentSet, config: TreeConfig) -> Result<Self, TagTreeError> {
        if documents.is_empty() {
            return Err(TagTreeError::EmptyCollection);
        }
        config.validate()?;
        if accumulated_uses(&documents.as_refs()) == 0 {
            return Err(TagTreeError::DegenerateDistribution);
        }
        Ok(StructuralTree {
            documents,
            config,
            nodes: vec![create_root_node(documents)],
            depth: 0,
            n_leaves: 1,
            built: false,
        })
    }

    /// Grow the tree from its root, returning the gain trace.
    ///
    /// Every split node contributes one line per identifier that passed the
    /// minimum gain, `<path>/<identifier>=<gain>`, best first. The lines of a
    /// node are followed by the traces of its children, in the order the
    /// children were created. Building again starts over from the root.
    pub fn build(&mut self) -> Result<String, TagTreeError> {
        let mut nodes = vec![create_root_node(self.documents)];
        let mut trace = String::new();
        let mut depth = 0;
        let mut n_leaves = 0;

        let mut growable: Vec<usize> = vec![0];
        while let Some(n_idx) = growable.pop() {
            let docs = self.documents.select(&nodes[n_idx].index);

            // Zero use documents split off from the rest carry no distribution.
            if accumulated_uses(&docs) == 0 {
                warn!(
                    "Node {} holds {} documents without uses, keeping it as a leaf.",
                    nodes[n_idx].tag_path,
                    docs.len()
                );
                n_leaves += 1;
                continue;
            }

            let ranked = self.ranked_identifiers(&docs)?;
            let Some((identifier, gain)) = ranked.first().cloned() else {
                debug!("Node {:?} has no identifier worth splitting on.", nodes[n_idx].tag_path);
                n_leaves += 1;
                continue;
            };

            let parent = &nodes[n_idx];
            for (id, g) in &ranked {
                trace += format!("{}/{}={}\n", parent.tag_path, id, fmt_gain(*g, self.config.gain_precision)).as_str();
            }
            debug!(
                "Splitting node {:?} on {} with gain {}.",
                parent.tag_path, identifier, gain
            );

            let mut new_nodes = Vec::new();
            for value in possible_tag_values(&docs, &identifier) {
                let tag = Tag::new(identifier.as_str(), value);
                let index = self.partition(&parent.index, &tag);
                if index.is_empty() {
                    continue;
                }
                new_nodes.push(TreeNode::child(nodes.len() + new_nodes.len(), parent, tag, index));
            }

            let children: Vec<usize> = new_nodes.iter().map(|n| n.num).collect();
            for n in new_nodes {
                depth = max(depth, n.depth);
                nodes.push(n);
            }
            // Reversed, so the first child is grown, and traced, first.
            growable.extend(children.iter().rev());
            nodes[n_idx].make_parent_node(identifier, gain, children);
        }

        info!(
            "Built a structural tree over {} documents with {} nodes, {} leaves and depth {}.",
            self.documents.len(),
            nodes.len(),
            n_leaves,
            depth
        );

        self.nodes = nodes;
        self.depth = depth;
        self.n_leaves = n_leaves;
        self.built = true;
        Ok(trace)
    }

    /// Identifiers of `docs` with their information gain, best first,
    /// ties broken by name. Identifiers below the minimum gain are left out.
    pub fn ranked_identifiers(&self, docs: &[&Document]) -> Result<Vec<(String, f64)>, TagTreeError> {
        let mut ranked = identifiers(docs)
            .into_iter()
            .map(|id| information_gain(docs, &id).map(|gain| (id, gain)))
            .collect::<Result<Vec<_>, _>>()?;
        ranked.sort_by(|(id_a, gain_a), (id_b, gain_b)| descending_then_key(*gain_a, id_a, *gain_b, id_b));
        ranked.retain(|(_, gain)| *gain >= self.config.min_information_gain);
        Ok(ranked)
    }

    /// Positions in `index` of the documents selected by `tag`.
    fn partition(&self, index: &[usize], tag: &Tag) -> Vec<usize> {
        let documents = self.documents.documents();
        index.iter().copied().filter(|i| has_tag(&documents[*i], tag)).collect()
    }

    pub fn documents(&self) -> &'a DocumentSet {
        self.documents
    }

    pub fn config(&self) -> &TreeConfig {
        &self.config
    }

    pub fn is_built(&self) -> bool {
        self.built
    }

    pub fn root(&self) -> &TreeNode {
        &self.nodes[0]
    }

    pub fn node(&self, num: usize) -> Option<&TreeNode> {
        self.nodes.get(num)
    }

    /// Children of node `num`, in creation order.
    pub fn children(&self, num: usize) -> Vec<&TreeNode> {
        match self.nodes.get(num) {
            Some(node) => node.children.iter().map(|c| &self.nodes[*c]).collect(),
            None => Vec::new(),
        }
    }

    pub fn leaves(&self) -> Vec<&TreeNode> {
        self.nodes.iter().filter(|n| n.is_leaf).collect()
    }
}

impl Display for StructuralTree<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut print_buffer: Vec<usize> = vec![0];
        let mut r = String::new();
        while let Some(idx) = print_buffer.pop() {
            let node = &self.nodes[idx];
            r += format!("{}{}\n", "      ".repeat(node.depth).as_str(), node).as_str();
            print_buffer.extend(node.children.iter().rev());
        }
        write!(f, "{}", r)
    }
}

pub fn create_root_node(documents: &DocumentSet) -> TreeNode {
    TreeNode::root((0..documents.len()).collect())
}
