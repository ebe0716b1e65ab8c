// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! JSON serialization for finite topologies.
//!
//! A snapshot stores the elements and the open sets as plain arrays so that
//! topologies can be written by hand or exchanged with other tools:
//!
//! ```json
//! {
//!   "elements": ["a", "b"],
//!   "open_sets": [[], ["a"], ["a", "b"]]
//! }
//! ```
//!
//! Decoding always re-checks the axioms.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::custom::CustomTopology;
use crate::error::{Error, Result};
use crate::finite::FiniteTopology;
use crate::set::{Point, PointSet, SetFamily};

/// Serializable representation of a finite topology.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopologySnapshot<T> {
    pub elements: Vec<T>,
    pub open_sets: Vec<Vec<T>>,
}

impl<T: Point> TopologySnapshot<T> {
    /// Captures the elements and open sets of any finite topology.
    pub fn of<F: FiniteTopology<T>>(topology: &F) -> Self {
        Self {
            elements: topology.elements().iter().cloned().collect(),
            open_sets: topology
                .open_sets()
                .iter()
                .map(|open| open.iter().cloned().collect())
                .collect(),
        }
    }

    /// Validates the snapshot and builds the topology it describes.
    pub fn into_topology(self) -> Result<CustomTopology<T>> {
        let elements: PointSet<T> = self.elements.into_iter().collect();
        let open_sets: SetFamily<T> = self
            .open_sets
            .into_iter()
            .map(|open| open.into_iter().collect())
            .collect();
        CustomTopology::new(elements, open_sets)
    }
}

/// Serializes a finite topology to a pretty-printed JSON string.
pub fn to_json<T, F>(topology: &F) -> Result<String>
where
    T: Point + Serialize,
    F: FiniteTopology<T>,
{
    serde_json::to_string_pretty(&TopologySnapshot::of(topology))
        .map_err(|e| Error::Serialization(e.to_string()))
}

impl<T: Point + DeserializeOwned> CustomTopology<T> {
    /// Parses a JSON snapshot and checks the axioms.
    pub fn from_json(json: &str) -> Result<Self> {
        let snapshot: TopologySnapshot<T> =
            serde_json::from_str(json).map_err(|e| Error::Serialization(e.to_string()))?;
        snapshot.into_topology()
    }
}
