pub mod render;
pub mod tree;

pub use tree::StructuralTree;

// Unit-testing
#[cfg(test)]
mod tests {
    use crate::config::TreeConfig;
    use crate::document::{Document, DocumentKind, DocumentSet};
    use crate::errors::TagTreeError;
    use crate::tag::Tag;
    use crate::tree::tree::StructuralTree;
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;
    use rand::Rng;
    use rand::SeedableRng;

    fn doc(path: &str, tags: &[(&str, &str)], uses: u32) -> Document {
        Document::new(
            path,
            DocumentKind::Audio,
            tags.iter().map(|(i, v)| Tag::new(*i, *v)),
            uses,
        )
    }

    fn media() -> DocumentSet {
        DocumentSet::new([
            doc("A", &[("type", "audio"), ("genre", "pop")], 4),
            doc("B", &[("type", "audio"), ("genre", "rock")], 2),
            doc("C", &[("type", "video")], 1),
            doc("D", &[("type", "video"), ("genre", "pop")], 1),
        ])
        .unwrap()
    }

    fn build(set: &DocumentSet) -> (String, String) {
        let mut tree = StructuralTree::new(set, TreeConfig::default()).unwrap();
        let trace = tree.build().unwrap();
        let listing = tree.classification().unwrap();
        (trace, listing)
    }

    #[test]
    fn test_tree_pop_rock() {
        let set = DocumentSet::new([doc("A", &[("genre", "pop")], 2), doc("B", &[("genre", "rock")], 1)]).unwrap();
        let (trace, listing) = build(&set);
        assert_eq!(trace, "/genre=0.92\n");
        assert_eq!(listing, "/genre=pop/\"A\"\n/genre=rock/\"B\"\n");
    }

    #[test]
    fn test_tree_ties() {
        let set = DocumentSet::new([
            doc("B", &[("b", "2"), ("a", "2")], 1),
            doc("A", &[("b", "1"), ("a", "1")], 1),
        ])
        .unwrap();
        let mut tree = StructuralTree::new(&set, TreeConfig::default()).unwrap();
        // Equal gains, ranked by identifier.
        assert_eq!(tree.build().unwrap(), "/a=1.00\n/b=1.00\n");

        // Children are created in first-seen order, listed by tag path on equal probability.
        let paths: Vec<&str> = tree.children(0).into_iter().map(|n| n.tag_path.as_str()).collect();
        assert_eq!(paths, vec!["/a=2", "/a=1"]);
        assert_eq!(tree.classification().unwrap(), "/a=1/\"A\"\n/a=2/\"B\"\n");
    }

    #[test]
    fn test_tree_build() {
        let set = media();
        let mut tree = StructuralTree::new(&set, TreeConfig::default()).unwrap();
        assert!(!tree.is_built());
        let trace = tree.build().unwrap();
        println!("{}", tree);
        assert!(tree.is_built());
        assert_eq!(trace, "/genre=1.30\n/type=0.81\n/genre=pop/type=0.72\n");

        assert_eq!(tree.nodes.len(), 6);
        assert_eq!(tree.depth, 2);
        assert_eq!(tree.n_leaves, 4);
        assert_eq!(tree.leaves().len(), 4);

        let root = tree.root();
        assert_eq!(root.split_identifier.as_deref(), Some("genre"));
        let paths: Vec<&str> = tree.children(0).into_iter().map(|n| n.tag_path.as_str()).collect();
        assert_eq!(paths, vec!["/genre=pop", "/genre=undefined", "/genre=rock"]);

        let pop = tree.children(0)[0];
        assert_eq!(pop.split_identifier.as_deref(), Some("type"));
        let paths: Vec<&str> = tree.children(pop.num).into_iter().map(|n| n.tag_path.as_str()).collect();
        assert_eq!(paths, vec!["/genre=pop/type=audio", "/genre=pop/type=video"]);
        assert_eq!(
            tree.children(pop.num)[1].tags,
            vec![Tag::new("genre", "pop"), Tag::new("type", "video")]
        );
    }

    #[test]
    fn test_tree_classification() {
        let set = media();
        let (_, listing) = build(&set);
        assert_eq!(
            listing,
            concat!(
                "/genre=pop/type=audio/\"A\"\n",
                "/genre=pop/type=video/\"D\"\n",
                "/genre=rock/\"B\"\n",
                "/genre=undefined/\"C\"\n",
            )
        );
    }

    #[test]
    fn test_child_subsets_follow_parent() {
        let set = media();
        let mut tree = StructuralTree::new(&set, TreeConfig::default()).unwrap();
        tree.build().unwrap();
        for node in tree.nodes.iter().skip(1) {
            assert!(!node.index.is_empty());
            let parent = &tree.nodes[node.parent_node];
            let tag = node.last_tag().unwrap();
            let expected: Vec<usize> = parent
                .index
                .iter()
                .copied()
                .filter(|i| crate::probability::has_tag(&set.documents()[*i], tag))
                .collect();
            assert_eq!(node.index, expected);
        }
    }

    #[test]
    fn test_tree_flat_leaf() {
        let set = DocumentSet::new([
            doc("C", &[("genre", "pop")], 3),
            doc("A", &[("genre", "pop")], 1),
            doc("B", &[("genre", "pop")], 3),
        ])
        .unwrap();
        let mut tree = StructuralTree::new(&set, TreeConfig::default()).unwrap();
        assert_eq!(tree.build().unwrap(), "");
        assert_eq!(tree.nodes.len(), 1);
        assert_eq!(tree.n_leaves, 1);
        assert_eq!(tree.classification().unwrap(), "/\"B\"\n/\"C\"\n/\"A\"\n");
    }

    #[test]
    fn test_tree_min_information_gain() {
        let set = media();
        let config = TreeConfig {
            min_information_gain: 1.0,
            ..TreeConfig::default()
        };
        let mut tree = StructuralTree::new(&set, config).unwrap();
        assert_eq!(tree.build().unwrap(), "/genre=1.30\n");
        assert_eq!(tree.nodes.len(), 4);
        assert_eq!(
            tree.classification().unwrap(),
            "/genre=pop/\"A\"\n/genre=pop/\"D\"\n/genre=rock/\"B\"\n/genre=undefined/\"C\"\n"
        );
    }

    #[test]
    fn test_tree_gain_precision() {
        let set = media();
        let config = TreeConfig {
            gain_precision: 4,
            ..TreeConfig::default()
        };
        let mut tree = StructuralTree::new(&set, config).unwrap();
        assert_eq!(tree.build().unwrap(), "/genre=1.2988\n/type=0.8113\n/genre=pop/type=0.7219\n");
    }

    #[test]
    fn test_tree_idempotent() {
        let set = media();
        let mut tree = StructuralTree::new(&set, TreeConfig::default()).unwrap();
        let trace = tree.build().unwrap();
        let listing = tree.classification().unwrap();
        assert_eq!(tree.classification().unwrap(), listing);
        let nodes = tree.nodes.clone();
        assert_eq!(tree.build().unwrap(), trace);
        assert_eq!(tree.nodes, nodes);
        assert_eq!(tree.classification().unwrap(), listing);
        assert_eq!(build(&set), (trace, listing));
    }

    #[test]
    fn test_unbuilt_tree_renders_flat() {
        let set = media();
        let tree = StructuralTree::new(&set, TreeConfig::default()).unwrap();
        assert_eq!(tree.classification().unwrap(), "/\"A\"\n/\"B\"\n/\"C\"\n/\"D\"\n");
    }

    #[test]
    fn test_tree_empty_collection() {
        let set = DocumentSet::default();
        let err = StructuralTree::new(&set, TreeConfig::default()).err();
        assert_eq!(err, Some(TagTreeError::EmptyCollection));
    }

    #[test]
    fn test_tree_invalid_config() {
        let set = media();
        let config = TreeConfig {
            min_information_gain: f64::NAN,
            ..TreeConfig::default()
        };
        let err = StructuralTree::new(&set, config).err();
        assert!(matches!(err, Some(TagTreeError::InvalidParameter(..))));
    }

    #[test]
    fn test_changed_uses_reorders_leaf() {
        let mut set = DocumentSet::new([
            doc("A", &[("genre", "pop")], 5),
            doc("B", &[("genre", "pop")], 3),
            doc("C", &[("genre", "pop")], 3),
        ])
        .unwrap();
        assert_eq!(build(&set).1, "/\"A\"\n/\"B\"\n/\"C\"\n");
        assert_eq!(set.change_uses("A", 0).unwrap(), 5);
        assert_eq!(build(&set).1, "/\"B\"\n/\"C\"\n/\"A\"\n");

        let mut single = DocumentSet::new([doc("A", &[("genre", "pop")], 5)]).unwrap();
        single.change_uses("A", 0).unwrap();
        let err = StructuralTree::new(&single, TreeConfig::default()).err();
        assert_eq!(err, Some(TagTreeError::DegenerateDistribution));
    }

    #[test]
    fn test_zero_use_documents_split_off() {
        let set = DocumentSet::new([
            doc("C", &[("genre", "jazz")], 0),
            doc("A", &[("genre", "pop")], 5),
            doc("B", &[("genre", "rock")], 5),
            doc("D", &[("genre", "jazz"), ("live", "defined")], 0),
        ])
        .unwrap();
        let mut tree = StructuralTree::new(&set, TreeConfig::default()).unwrap();
        assert_eq!(tree.build().unwrap(), "/genre=1.00\n");
        assert_eq!(
            tree.classification().unwrap(),
            concat!(
                "/genre=pop/\"A\"\n",
                "/genre=rock/\"B\"\n",
                "/genre=jazz/\"C\"\n",
                "/genre=jazz/\"D\"\n",
            )
        );
    }

    #[test]
    fn test_tree_permutation_invariant() {
        let mut rng = StdRng::seed_from_u64(11);
        let genres = ["pop", "rock", "jazz", "folk"];
        let sizes = ["small", "medium", "large"];
        for _ in 0..20 {
            let mut docs = Vec::new();
            for i in 0..25 {
                let mut tags = vec![Tag::new("genre", genres[rng.gen_range(0..genres.len())])];
                if rng.gen_bool(0.7) {
                    tags.push(Tag::new("size", sizes[rng.gen_range(0..sizes.len())]));
                }
                if rng.gen_bool(0.4) {
                    tags.push(Tag::defined("executable"));
                }
                docs.push(Document::new(format!("doc{:02}", i), DocumentKind::Program, tags, rng.gen_range(1..10)));
            }
            let set = DocumentSet::new(docs.clone()).unwrap();
            let (trace, listing) = build(&set);
            let mut lines: Vec<&str> = trace.lines().collect();
            lines.sort_unstable();

            docs.shuffle(&mut rng);
            let shuffled = DocumentSet::new(docs).unwrap();
            let (shuffled_trace, shuffled_listing) = build(&shuffled);
            let mut shuffled_lines: Vec<&str> = shuffled_trace.lines().collect();
            shuffled_lines.sort_unstable();

            assert_eq!(listing, shuffled_listing);
            assert_eq!(lines, shuffled_lines);
        }
    }
}
