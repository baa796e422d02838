use crate::expression::shape::Shape;

impl Shape {
    /// Render the shape with the given leaf values, mirroring `calc`'s
    /// traversal.
    ///
    /// Sum levels emit `+`/`-` with the leading `+` omitted; product levels
    /// emit `*`/`/` with the leading operator omitted. A sum-level row
    /// nested inside a product-level row is parenthesized; the converse
    /// needs no parentheses under ordinary precedence. A leaf slot past the
    /// end of `values` renders as `_`.
    pub fn render(&self, values: &[String], start: usize, sum_level: bool, paren: bool) -> String {
        let mut out = String::new();
        if paren {
            out.push('(');
        }

        let mut consumed = 0;
        for (i, (flag, slot)) in self.flags().iter().zip(self.children()).enumerate() {
            if sum_level {
                if !*flag {
                    out.push('-');
                } else if i != 0 {
                    out.push('+');
                }
            } else if i != 0 {
                out.push(if *flag { '*' } else { '/' });
            }
            match slot {
                Some(child) => {
                    out.push_str(&child.render(values, start + consumed, !sum_level, !sum_level));
                    consumed += child.size();
                }
                None => {
                    match values.get(start + consumed) {
                        Some(value) => out.push_str(value),
                        None => out.push('_'),
                    }
                    consumed += 1;
                }
            }
        }

        if paren {
            out.push(')');
        }
        out
    }
}
