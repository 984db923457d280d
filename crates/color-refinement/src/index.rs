macro_rules! make_index {
    ($(#[$attr:meta])* $vis:vis $name:ident) => {
        $(#[$attr])*
        #[derive(
            Copy,
            Clone,
            Debug,
            Hash,
            Eq,
            PartialEq,
            Ord,
            PartialOrd,
        )]
        $vis struct $name(u32);

        impl $name {
            /// Create new index from `usize`.
            #[inline(always)]
            pub fn new(x: usize) -> Self {
                debug_assert!(x < u32::MAX as usize);
                Self(x as u32)
            }

            /// Returns the index as `usize`.
            #[inline(always)]
            pub fn index(&self) -> usize { self.0 as usize }

            /// Iterate over the indices `0..n`.
            #[inline]
            pub(crate) fn range(n: usize) -> impl DoubleEndedIterator<Item = Self> + ExactSizeIterator {
                (0..n).map(Self::new)
            }
        }

        impl ::std::convert::From<usize> for $name {
            #[inline(always)]
            fn from(x: usize) -> Self {
                Self::new(x)
            }
        }

        impl ::std::convert::From<$name> for usize {
            #[inline(always)]
            fn from(x: $name) -> Self {
                x.index()
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

make_index!(
    /// Identifier of a vertex in a [VertexPool](crate::VertexPool).
    pub VertexIndex
);
make_index!(
    /// Identifier of a color class in a [ColorPartition](crate::ColorPartition).
    pub ColorIndex
);

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn make_index() {
        make_index!(TestIndex);

        let idx = TestIndex::new(42);

        assert_eq!(idx.index(), 42);
        assert_eq!(TestIndex::from(42_usize), idx);
        assert_eq!(usize::from(idx), 42_usize);
        assert_eq!(format!("{:?}", idx), "TestIndex(42)".to_string());
        assert_eq!(format!("{}", idx), "42".to_string());
        assert_eq!(TestIndex::range(3).collect::<Vec<_>>(), [TestIndex(0), TestIndex(1), TestIndex(2)]);
    }

    #[test]
    fn vertex_and_color_indices_are_ordered() {
        assert!(VertexIndex::new(1) < VertexIndex::new(2));
        assert!(ColorIndex::new(7) > ColorIndex::new(0));
        assert_eq!(ColorIndex::range(4).rev().next(), Some(ColorIndex::new(3)));
    }
}
