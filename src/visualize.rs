use crate::{AtomGraph, AtomId, AtomKind, Bond, NamingObserver};
use anyhow::{bail, Context, Result};
use std::fmt::Write as FmtWrite;
use std::io::Write;
use tracing::info;

/// Collects the human-readable pipeline trace: atom table, bond list and main chain.
#[derive(Debug, Default)]
pub struct TraceReport {
    out: String,
}

impl TraceReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.out
    }

    pub fn into_string(self) -> String {
        self.out
    }
}

impl NamingObserver for TraceReport {
    fn atoms(&mut self, graph: &AtomGraph) {
        writeln!(self.out, "Atoms Info").unwrap();
        for (_, atom) in graph.atoms() {
            writeln!(
                self.out,
                "{}: C-C={}, C-H={}, C-X={}; ",
                atom, atom.carbon_bonds, atom.hydrogen_bonds, atom.hetero_bonds
            )
            .unwrap();
        }
        writeln!(self.out).unwrap();
    }

    fn cyclic_edge(&mut self, graph: &AtomGraph, first: AtomId, second: AtomId) {
        writeln!(
            self.out,
            "Added cyclic edge between nodes {} and {}\n",
            graph.atom(first).id,
            graph.atom(second).id
        )
        .unwrap();
    }

    fn bonds(&mut self, graph: &AtomGraph) {
        writeln!(self.out, "Edges").unwrap();
        for (a, b, _) in graph.bonds() {
            writeln!(self.out, "{}-{}", graph.atom(a), graph.atom(b)).unwrap();
        }
        writeln!(self.out).unwrap();
    }

    fn main_chain(&mut self, graph: &AtomGraph, chain: &[AtomId]) {
        write!(self.out, "Longest carbon chain: ").unwrap();
        for &id in chain {
            write!(self.out, "{} ", graph.atom(id)).unwrap();
        }
        writeln!(self.out).unwrap();
    }

    fn no_carbon(&mut self) {
        writeln!(self.out, "No carbon atoms found in the input.").unwrap();
    }
}

/// Generates a DOT representation of the graph. Ring bonds added by the
/// cyclic heuristic are drawn dashed.
pub fn to_dot(graph: &AtomGraph) -> String {
    let mut dot_output = String::new();
    writeln!(dot_output, "graph Formula {{").unwrap();
    writeln!(dot_output, "    layout=neato;").unwrap();

    for (id, atom) in graph.atoms() {
        let color = match atom.kind {
            AtomKind::Carbon => "black",
            AtomKind::Carboxyl => "red",
            AtomKind::Halogen(_) => "green",
            AtomKind::Other => "gray",
        };
        writeln!(
            dot_output,
            "    {} [label=\"{}\", color={}, fontcolor={}];",
            id.index(),
            atom,
            color,
            color
        )
        .unwrap();
    }

    for (a, b, bond) in graph.bonds() {
        let style = match bond {
            Bond::Chain => "solid",
            Bond::Ring => "dashed",
        };
        writeln!(dot_output, "    {} -- {} [style={}];", a.index(), b.index(), style).unwrap();
    }

    writeln!(dot_output, "}}").unwrap();
    dot_output
}

/// Writes the graph as DOT to `output_dot` and, if `output_image` is given,
/// renders it with the Graphviz `dot` command.
pub fn visualize_graph(graph: &AtomGraph, output_dot: &str, output_image: Option<&str>) -> Result<()> {
    let mut file = std::fs::File::create(output_dot)
        .with_context(|| format!("Failed to create DOT file {output_dot}"))?;
    file.write_all(to_dot(graph).as_bytes())
        .with_context(|| format!("Failed to write DOT file {output_dot}"))?;
    info!("DOT file saved to {}", output_dot);

    if let Some(image_path) = output_image {
        let status = std::process::Command::new("dot")
            .args(["-Tpng", output_dot, "-o", image_path])
            .status()
            .context("Failed to execute Graphviz 'dot' command")?;
        if !status.success() {
            bail!("Graphviz 'dot' command failed with status: {}", status);
        }
        info!("Image rendered to {}", image_path);
    }

    Ok(())
}
