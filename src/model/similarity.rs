// Jaccard similarity between two n-gram sets.
//
//   J(A, B) = |A ∩ B| / |A ∪ B|
//
// Two empty sets have an empty union; that case is defined as 0.0 rather
// than a division by zero.

use crate::text::ngrams::NGramSet;

/// Compute the Jaccard similarity of two sets, in `[0.0, 1.0]`.
pub fn jaccard(a: &NGramSet, b: &NGramSet) -> f64 {
    // Walk the smaller set, probe the larger one
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let intersection = small.iter().filter(|gram| large.contains(*gram)).count();
    let union = a.len() + b.len() - intersection;

    if union == 0 {
        0.0
    } else {
        intersection as f64 / union as f64
    }
}
