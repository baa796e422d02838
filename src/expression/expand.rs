use std::sync::Arc;

use crate::expression::shape::{FACTOR_PAIRS, Shape, TERM_PAIRS};

impl Shape {
    /// All shapes obtained from this one by adding exactly one leaf slot.
    ///
    /// Growth happens two ways, in this order:
    ///
    /// 1. append a fresh leaf at the end of this row, once per operator
    ///    sign (always two shapes);
    /// 2. grow one existing slot, visiting slots left to right: a nested
    ///    row recurses at the opposite level, a leaf is replaced by each
    ///    member of the size-2 template family for the opposite level.
    ///
    /// The order is a contract: the catalog breaks score ties by keeping
    /// the first candidate found, so reordering this enumeration changes
    /// which expression wins.
    pub fn expand(&self, sum_level: bool) -> Box<dyn Iterator<Item = Shape> + '_> {
        let appended = [true, false].into_iter().map(move |sign| {
            let mut flags = self.flags().to_vec();
            flags.push(sign);
            let mut children = self.children().to_vec();
            children.push(None);
            Shape::with_children(flags, children)
        });

        let grown = self
            .children()
            .iter()
            .enumerate()
            .flat_map(move |(i, slot)| {
                let replacements: Box<dyn Iterator<Item = Shape> + '_> = match slot {
                    Some(child) => child.expand(!sum_level),
                    None => {
                        let family: &'static [Shape] = if sum_level {
                            &FACTOR_PAIRS[..]
                        } else {
                            &TERM_PAIRS[..]
                        };
                        Box::new(family.iter().cloned())
                    }
                };
                replacements.map(move |grown_child| {
                    let mut children = self.children().to_vec();
                    children[i] = Some(Arc::new(grown_child));
                    Shape::with_children(self.flags().to_vec(), children)
                })
            });

        Box::new(appended.chain(grown))
    }
}
