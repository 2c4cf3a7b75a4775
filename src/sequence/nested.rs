//! Arbitrarily nested sequences and their flattening.

/// A value or a sequence of further nested values.
///
/// `Nested` gives a type to "a list whose elements may themselves be lists,
/// to any depth". With the `serde` feature it (de)serializes untagged, so the
/// JSON `[1, [2, [3]], 4]` reads as nested integers.
///
/// # Examples
///
/// ```rust
/// use fusion::sequence::Nested;
///
/// let nested = Nested::node([Nested::leaf(1), Nested::node([Nested::leaf(2)])]);
/// assert_eq!(nested.depth(), 2);
/// assert_eq!(nested.into_flat(), vec![1, 2]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Nested<T> {
    /// A single value.
    Leaf(T),
    /// A sequence of nested values.
    Node(Children<T>),
}

/// The children of a [`Nested::Node`].
///
/// Dereferences to a slice. Dropping it releases the whole subtree with a
/// heap stack, so trees of any depth drop without overflowing the call stack.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Children<T>(Vec<Nested<T>>);

impl<T> Children<T> {
    /// Returns the children as an owned vector, leaving `self` empty.
    pub fn into_vec(mut self) -> Vec<Nested<T>> {
        std::mem::take(&mut self.0)
    }
}

impl<T> Default for Children<T> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<T> std::ops::Deref for Children<T> {
    type Target = [Nested<T>];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> std::ops::DerefMut for Children<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<T> From<Vec<Nested<T>>> for Children<T> {
    fn from(children: Vec<Nested<T>>) -> Self {
        Self(children)
    }
}

impl<T> FromIterator<Nested<T>> for Children<T> {
    fn from_iter<I: IntoIterator<Item = Nested<T>>>(iterator: I) -> Self {
        Self(iterator.into_iter().collect())
    }
}

impl<'a, T> IntoIterator for &'a Children<T> {
    type Item = &'a Nested<T>;
    type IntoIter = std::slice::Iter<'a, Nested<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<T> Drop for Children<T> {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.0);
        while let Some(child) = pending.pop() {
            if let Nested::Node(mut children) = child {
                pending.append(&mut children.0);
            }
        }
    }
}

impl<T> Nested<T> {
    /// Creates a leaf.
    #[inline]
    pub const fn leaf(value: T) -> Self {
        Self::Leaf(value)
    }

    /// Creates a node from any sequence of nested values.
    #[inline]
    pub fn node<I>(children: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        Self::Node(children.into_iter().collect())
    }

    /// Returns the nesting depth: 0 for a leaf, 1 for a node of leaves, and so on.
    ///
    /// An empty node has depth 1.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut pending: Vec<(&Self, usize)> = vec![(self, 0)];
        while let Some((current, level)) = pending.pop() {
            deepest = deepest.max(level);
            if let Self::Node(children) = current {
                deepest = deepest.max(level + 1);
                pending.extend(children.iter().map(|child| (child, level + 1)));
            }
        }
        deepest
    }

    /// Consumes `self` and returns its leaves, left to right.
    pub fn into_flat(self) -> Vec<T> {
        let mut flattened = Vec::new();
        let mut pending: Vec<std::vec::IntoIter<Self>> = vec![vec![self].into_iter()];
        while let Some(top) = pending.last_mut() {
            match top.next() {
                Some(Self::Leaf(value)) => flattened.push(value),
                Some(Self::Node(children)) => pending.push(children.into_vec().into_iter()),
                None => {
                    pending.pop();
                }
            }
        }
        flattened
    }
}

impl<T> From<T> for Nested<T> {
    fn from(value: T) -> Self {
        Self::Leaf(value)
    }
}

impl<T> FromIterator<Nested<T>> for Nested<T> {
    fn from_iter<I: IntoIterator<Item = Nested<T>>>(iterator: I) -> Self {
        Self::node(iterator)
    }
}

/// Flattens arbitrarily nested sequences into a single vector of leaves.
///
/// Leaves appear in left-to-right (depth-first) order. Depth is unbounded:
/// the traversal keeps its own stack instead of recursing.
///
/// # Examples
///
/// ```rust
/// use fusion::sequence::{Nested, flatten};
///
/// let input = vec![
///     Nested::leaf(1),
///     Nested::node([Nested::leaf(2), Nested::node([Nested::leaf(3)])]),
///     Nested::node([]),
///     Nested::leaf(4),
/// ];
/// assert_eq!(flatten(&input), vec![1, 2, 3, 4]);
/// ```
pub fn flatten<T>(nested: &[Nested<T>]) -> Vec<T>
where
    T: Clone,
{
    let mut flattened = Vec::new();
    let mut pending: Vec<std::slice::Iter<'_, Nested<T>>> = vec![nested.iter()];
    while let Some(top) = pending.last_mut() {
        match top.next() {
            Some(Nested::Leaf(value)) => flattened.push(value.clone()),
            Some(Nested::Node(children)) => pending.push(children.iter()),
            None => {
                pending.pop();
            }
        }
    }
    flattened
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_flatten_empty() {
        assert!(flatten::<i32>(&[]).is_empty());
        assert!(flatten::<i32>(&[Nested::node([]), Nested::node([Nested::node([])])]).is_empty());
    }

    #[rstest]
    fn test_flatten_already_flat() {
        let input: Vec<Nested<i32>> = (1..=5).map(Nested::leaf).collect();
        assert_eq!(flatten(&input), vec![1, 2, 3, 4, 5]);
    }

    fn deep_chain(levels: usize) -> Nested<i32> {
        let mut nested = Nested::leaf(7);
        for _ in 0..levels {
            nested = Nested::node([nested]);
        }
        nested
    }

    #[rstest]
    fn test_flatten_very_deep_nesting() {
        let input = vec![deep_chain(100_000)];
        assert_eq!(flatten(&input), vec![7]);
        drop(input);
    }

    #[rstest]
    fn test_into_flat_very_deep_nesting() {
        assert_eq!(deep_chain(100_000).into_flat(), vec![7]);
    }

    #[rstest]
    fn test_drop_wide_and_deep_tree() {
        let branches: Vec<Nested<String>> = (0..1_000)
            .map(|index| {
                let mut branch = Nested::leaf(index.to_string());
                for _ in 0..100 {
                    branch = Nested::node([branch, Nested::leaf(String::new())]);
                }
                branch
            })
            .collect();
        let tree = Nested::node(branches);
        assert_eq!(tree.depth(), 101);
        drop(tree);
    }

    #[rstest]
    fn test_children_into_vec_and_deref() {
        let Nested::Node(children) = Nested::node([Nested::leaf(1), Nested::leaf(2)]) else {
            panic!("expected a node");
        };
        assert_eq!(children.len(), 2);
        assert_eq!(children.into_vec(), vec![Nested::leaf(1), Nested::leaf(2)]);
    }

    #[rstest]
    #[case(Nested::leaf(1), 0)]
    #[case(Nested::node([]), 1)]
    #[case(Nested::node([Nested::leaf(1), Nested::node([Nested::leaf(2)])]), 2)]
    fn test_depth(#[case] nested: Nested<i32>, #[case] expected: usize) {
        assert_eq!(nested.depth(), expected);
    }

    #[rstest]
    fn test_into_flat_matches_flatten() {
        let nested: Nested<&str> = [
            Nested::from("a"),
            [Nested::from("b"), Nested::from("c")].into_iter().collect(),
        ]
        .into_iter()
        .collect();
        let borrowed = flatten(std::slice::from_ref(&nested));
        assert_eq!(nested.into_flat(), borrowed);
        assert_eq!(borrowed, vec!["a", "b", "c"]);
    }
}
