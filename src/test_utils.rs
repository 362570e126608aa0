use std::fmt::{Display, Write};

use proptest::prelude::*;

use crate::node::Node;

const KEY_MAX: usize = 500;

/// Generate arbitrary keys from [0..[`KEY_MAX`]).
pub(crate) fn arbitrary_key() -> impl Strategy<Value = usize> {
    0..KEY_MAX
}

/// Render the subtree rooted at `n` as a Graphviz DOT digraph, labelling each
/// node with its key, height and balance factor.
pub(crate) fn print_dot<K>(n: &Node<K>) -> String
where
    K: Display,
{
    let mut buf = String::new();

    writeln!(buf, "digraph {{").unwrap();
    writeln!(buf, r#"bgcolor = "transparent";"#).unwrap();
    writeln!(
        buf,
        r#"node [shape = record; style = filled; fontcolor = orange4; fillcolor = white;];"#
    )
    .unwrap();
    recurse(n, &mut buf);
    writeln!(buf, "}}").unwrap();

    buf
}

fn recurse<K, W>(n: &Node<K>, buf: &mut W)
where
    W: std::fmt::Write,
    K: Display,
{
    writeln!(
        buf,
        r#""{}" [label="{} | {{ h={} | b={} }}"];"#,
        n.key(),
        n.key(),
        n.height(),
        n.balance_factor(),
    )
    .unwrap();

    for v in [n.left(), n.right()] {
        match v {
            Some(v) => {
                writeln!(
                    buf,
                    "\"{}\" -> \"{}\" [color = \"orange1\";];",
                    n.key(),
                    v.key()
                )
                .unwrap();
                recurse(v, buf);
            }
            None => {
                writeln!(buf, "\"null_{}\" [shape=point,style=invis];", n.key()).unwrap();
                writeln!(buf, "\"{}\" -> \"null_{}\" [style=invis];", n.key(), n.key()).unwrap();
            }
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::insert;

    #[test]
    fn test_print_dot() {
        let mut root = None;
        for v in [2, 1] {
            insert(&mut root, v);
        }

        let got = print_dot(root.as_deref().unwrap());

        assert!(got.starts_with("digraph {\n"));
        assert!(got.ends_with("}\n"));
        assert!(got.contains(r#""2" [label="2 | { h=2 | b=1 }"];"#));
        assert!(got.contains(r#""1" [label="1 | { h=1 | b=0 }"];"#));
        assert!(got.contains(r#""2" -> "1" [color = "orange1";];"#));
        assert!(got.contains(r#""2" -> "null_2" [style=invis];"#));
    }
}
