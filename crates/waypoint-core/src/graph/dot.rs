//! GraphViz DOT export

use std::fmt;

use super::model::Graph;

impl Graph {
    /// Render the graph in GraphViz digraph notation.
    ///
    /// One line per edge, weight formatted to one decimal place, edges in
    /// sorted (source, destination) order. Assumes the graph is well-formed
    /// by construction; there are no error conditions.
    pub fn to_dot(&self) -> String {
        let mut output = String::from("digraph G {\n");

        for (src, dest, weight) in self.edges() {
            output.push_str(&format!(
                "   {} -> {} [label=\"{:.1}\",weight=\"{:.1}\"];\n",
                src,
                dest,
                weight.value(),
                weight.value()
            ));
        }

        output.push('}');
        output
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_dot())
    }
}
