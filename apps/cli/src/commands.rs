// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Subcommand implementations. Each returns the text to print.

use std::path::Path;

use anyhow::{Context, Result};
use fom_topology::{
    serialization::to_json, CustomTopology, FiniteTopology, PointSet, RandomConfig,
    RandomTopology, SetFamily, TopologyProperties,
};

/// Spaces handled by the CLI: points are labels read from JSON.
pub type Space = CustomTopology<String>;

/// Which derived set of a subset to compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Closure,
    Interior,
    Boundary,
}

/// Reads a JSON snapshot and checks the axioms.
pub fn load(path: &Path) -> Result<Space> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let space = Space::from_json(&json)
        .with_context(|| format!("{} is not a valid topology", path.display()))?;
    tracing::debug!(path = %path.display(), elements = space.elements().len(), "loaded topology");
    Ok(space)
}

/// Splits `a, b,c` into `{a, b, c}`. Blank entries are skipped.
pub fn parse_points(list: &str) -> PointSet<String> {
    list.split(',')
        .map(str::trim)
        .filter(|point| !point.is_empty())
        .map(str::to_string)
        .collect()
}

/// Renders `{a, b}` using `Display`.
pub fn render_set<T: std::fmt::Display>(set: &PointSet<T>) -> String {
    let points: Vec<String> = set.iter().map(ToString::to_string).collect();
    format!("{{{}}}", points.join(", "))
}

fn render_family(family: &SetFamily<String>) -> String {
    let sets: Vec<String> = family.iter().map(render_set).collect();
    sets.join(" ")
}

/// Sets, properties and components of `space`, one per line.
pub fn inspect(space: &Space) -> String {
    [
        format!("elements:    {}", render_set(space.elements())),
        format!("open sets:   {}", render_family(space.open_sets())),
        format!("closed sets: {}", render_family(&space.closed_sets())),
        format!("basis:       {}", render_family(&space.minimal_basis())),
        format!("T0:          {}", space.is_t0()),
        format!("T1:          {}", space.is_t1()),
        format!("Hausdorff:   {}", space.is_hausdorff()),
        format!("discrete:    {}", space.is_discrete()),
        format!("indiscrete:  {}", space.is_indiscrete()),
        format!("connected:   {}", space.is_connected()),
        format!("components:  {}", render_family(&space.connected_components())),
    ]
    .join("\n")
}

/// Closure, interior or boundary of the comma-separated `subset`.
pub fn apply(space: &Space, operation: Operation, subset: &str) -> Result<String> {
    let subset = parse_points(subset);
    let result = match operation {
        Operation::Closure => space.closure(&subset),
        Operation::Interior => space.interior(&subset),
        Operation::Boundary => space.boundary(&subset),
    }
    .with_context(|| format!("cannot compute {operation:?} of {}", render_set(&subset)))?;
    Ok(render_set(&result))
}

/// A random topology on the comma-separated `elements`, as JSON.
pub fn random(elements: &str, config: &RandomConfig) -> Result<String> {
    let elements = parse_points(elements);
    let topology = RandomTopology::with_config(elements, config);
    tracing::info!(
        rounds = topology.rounds(),
        open_sets = topology.open_sets().len(),
        "generated random topology"
    );
    Ok(to_json(&topology)?)
}

/// Element and rectangle counts of `left × right`, then the rectangles.
/// Counting open sets closes the rectangles under unions, so it is opt-in.
pub fn product(left: &Space, right: &Space, count_open_sets: bool) -> String {
    let product = left.product(right);
    let mut lines = vec![
        format!("elements:        {}", product.elements().len()),
        format!("open rectangles: {}", product.open_rectangles().len()),
    ];
    lines.extend(product.open_rectangles().iter().map(|rectangle| {
        let pairs: Vec<String> = rectangle.iter().map(|(x, y)| format!("({x}, {y})")).collect();
        format!("  {{{}}}", pairs.join(", "))
    }));
    if count_open_sets {
        lines.push(format!("open sets:       {}", product.open_sets().len()));
    }
    lines.join("\n")
}
