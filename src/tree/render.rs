use super::tree::StructuralTree;
use crate::document::Document;
use crate::errors::TagTreeError;
use crate::node::TreeNode;
use crate::probability::{accumulated_uses, probability_of_document, probability_of_tag};
use crate::utils::descending_then_key;

impl StructuralTree<'_> {
    /// Render the classification, one `<path>/"<document>"` line per
    /// document of every leaf.
    ///
    /// Siblings are visited most probable first, as measured on their
    /// parent's documents, ties broken by tag path. Within a leaf documents
    /// are listed most used first, ties broken by document path. An unbuilt
    /// tree renders as a single leaf.
    pub fn classification(&self) -> Result<String, TagTreeError> {
        let mut listing = String::new();
        let mut render_buffer: Vec<usize> = vec![0];
        while let Some(idx) = render_buffer.pop() {
            let node = &self.nodes[idx];
            if node.is_leaf {
                for document in self.sorted_documents(node)? {
                    listing += format!("{}/\"{}\"\n", node.tag_path, document.path()).as_str();
                }
            } else {
                let children = self.sorted_children(node)?;
                render_buffer.extend(children.iter().rev());
            }
        }
        Ok(listing)
    }

    /// Children of `node`, most probable first.
    pub fn sorted_children(&self, node: &TreeNode) -> Result<Vec<usize>, TagTreeError> {
        let docs = self.documents.select(&node.index);
        let mut weighted = Vec::with_capacity(node.children.len());
        for c in &node.children {
            let child = &self.nodes[*c];
            let probability = match child.last_tag() {
                Some(tag) => probability_of_tag(tag, &docs)?,
                None => 0.0,
            };
            weighted.push((probability, child));
        }
        weighted.sort_by(|(p_a, a), (p_b, b)| descending_then_key(*p_a, &a.tag_path, *p_b, &b.tag_path));
        Ok(weighted.into_iter().map(|(_, child)| child.num).collect())
    }

    /// Documents of `node`, most probable first.
    pub fn sorted_documents(&self, node: &TreeNode) -> Result<Vec<&Document>, TagTreeError> {
        let docs = self.documents.select(&node.index);
        if accumulated_uses(&docs) == 0 {
            let mut docs = docs;
            docs.sort_by(|a, b| a.path().cmp(b.path()));
            return Ok(docs);
        }
        let mut weighted = docs
            .iter()
            .map(|d| probability_of_document(d, &docs).map(|p| (p, *d)))
            .collect::<Result<Vec<_>, _>>()?;
        weighted.sort_by(|(p_a, a), (p_b, b)| descending_then_key(*p_a, a.path(), *p_b, b.path()));
        Ok(weighted.into_iter().map(|(_, d)| d).collect())
    }
}
