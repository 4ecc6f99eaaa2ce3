//! Probability
//!
//! Use-weighted probabilities over document collections, and the entropy
//! measures derived from them. Every function here is a pure function of its
//! arguments; collections are passed as slices of document references so any
//! subset of a [`DocumentSet`](crate::document::DocumentSet) can be measured
//! without copying documents.
use crate::constants::UNDEFINED_VALUE;
use crate::document::Document;
use crate::errors::TagTreeError;
use crate::tag::Tag;
use hashbrown::HashSet;

/// Test whether a document is selected by `tag`.
///
/// An `undefined` tag selects the documents lacking the identifier entirely,
/// whatever else they hold. Any other tag selects the documents holding it.
#[inline]
pub fn has_tag(document: &Document, tag: &Tag) -> bool {
    if tag.is_undefined() {
        !document.has_identifier(tag.identifier())
    } else {
        document.contains(tag)
    }
}

/// The documents selected by `tag`, in their original order.
pub fn documents_with_tag<'a>(documents: &[&'a Document], tag: &Tag) -> Vec<&'a Document> {
    documents.iter().copied().filter(|d| has_tag(d, tag)).collect()
}

/// Total uses of the documents.
pub fn accumulated_uses(documents: &[&Document]) -> u64 {
    documents.iter().map(|d| d.uses() as u64).sum()
}

fn total_uses(documents: &[&Document]) -> Result<u64, TagTreeError> {
    match accumulated_uses(documents) {
        0 => Err(TagTreeError::DegenerateDistribution),
        total => Ok(total),
    }
}

/// Share of the uses of `documents` that fall on `document`.
pub fn probability_of_document(document: &Document, documents: &[&Document]) -> Result<f64, TagTreeError> {
    let total = total_uses(documents)?;
    Ok(document.uses() as f64 / total as f64)
}

/// Summed probability of the documents selected by `tag`.
pub fn probability_of_tag(tag: &Tag, documents: &[&Document]) -> Result<f64, TagTreeError> {
    let total = total_uses(documents)?;
    let selected: u64 = documents
        .iter()
        .filter(|d| has_tag(d, tag))
        .map(|d| d.uses() as u64)
        .sum();
    Ok(selected as f64 / total as f64)
}

/// Shannon entropy, in bits, of the use distribution over `documents`.
pub fn uncertainty(documents: &[&Document]) -> Result<f64, TagTreeError> {
    let total = total_uses(documents)? as f64;
    // Sum in ascending order of weight, the result must not depend on the
    // order the collection happens to be in.
    let mut uses: Vec<u32> = documents.iter().map(|d| d.uses()).filter(|u| *u > 0).collect();
    uses.sort_unstable();
    let sum: f64 = uses
        .iter()
        .map(|u| {
            let p = *u as f64 / total;
            p * p.log2()
        })
        .sum();
    Ok(-sum)
}

/// Values `identifier` can take over `documents`, in first-seen order.
///
/// Every tag with a different identifier contributes `undefined`, so the
/// sentinel is present as soon as any document holds any other tag.
pub fn possible_tag_values(documents: &[&Document], identifier: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut values: Vec<String> = Vec::new();
    for document in documents {
        for tag in document.tags() {
            let value = if tag.identifier() == identifier {
                tag.value()
            } else {
                UNDEFINED_VALUE
            };
            if seen.insert(value) {
                values.push(value.to_string());
            }
        }
    }
    values
}

/// Distinct tag identifiers held by `documents`, in first-seen order.
pub fn identifiers(documents: &[&Document]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut ids = Vec::new();
    for document in documents {
        for tag in document.tags() {
            if seen.insert(tag.identifier()) {
                ids.push(tag.identifier().to_string());
            }
        }
    }
    ids
}

/// Uncertainty left, on average, once the value of `identifier` is known.
pub fn expected_remaining_uncertainty(documents: &[&Document], identifier: &str) -> Result<f64, TagTreeError> {
    let mut terms = Vec::new();
    for value in possible_tag_values(documents, identifier) {
        let tag = Tag::new(identifier, value);
        let probability = probability_of_tag(&tag, documents)?;
        // A bucket without mass weighs nothing, and has no entropy of its own.
        if probability == 0.0 {
            continue;
        }
        terms.push(probability * uncertainty(&documents_with_tag(documents, &tag))?);
    }
    // Values are seen in collection order, the sum must not depend on it.
    terms.sort_by(|a, b| a.total_cmp(b));
    Ok(terms.iter().sum())
}

/// Reduction in uncertainty from splitting `documents` on `identifier`.
pub fn information_gain(documents: &[&Document], identifier: &str) -> Result<f64, TagTreeError> {
    Ok(uncertainty(documents)? - expected_remaining_uncertainty(documents, identifier)?)
}
