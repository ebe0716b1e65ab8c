// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # FOM Topology
//!
//! Point-set topology as defined in chapter 1 of Abraham & Marsden's
//! *Foundations of Mechanics*.
//!
//! A topological space is a set `S` together with a collection of subsets of
//! `S`, called open sets, such that
//!
//! * the empty set and `S` are open,
//! * the intersection of any two open sets is open,
//! * the union of any collection of open sets is open.
//!
//! Finite spaces are fully materialized: their elements and open sets are
//! ordered sets, and closure, interior and boundary are computed by filtering
//! and folding over the open (or closed) sets. The general [`Topology`] trait
//! only answers membership questions, which is all that can be asked of a
//! space such as the real line.
//!
//! ```
//! use fom_topology::{CustomTopology, FiniteTopology, PointSet};
//!
//! let space = CustomTopology::new(
//!     ['a', 'b'].into(),
//!     [PointSet::new(), ['a'].into(), ['a', 'b'].into()].into(),
//! )
//! .unwrap();
//!
//! assert_eq!(space.closure(&['a'].into()).unwrap(), PointSet::from(['a', 'b']));
//! assert_eq!(space.interior(&['b'].into()).unwrap(), PointSet::new());
//! ```

pub mod basis;
pub mod config;
pub mod container;
pub mod continuity;
pub mod custom;
pub mod empty;
pub mod error;
pub mod finite;
pub mod generate;
pub mod intervals;
pub mod neighborhood;
pub mod product;
pub mod properties;
pub mod random;
pub mod real_line;
pub mod relative;
pub mod serialization;
pub mod set;
pub mod topology;

pub use basis::{Basis, CustomBasis};
pub use config::RandomConfig;
pub use container::Container;
pub use custom::CustomTopology;
pub use empty::EmptyTopology;
pub use error::{Error, Result};
pub use finite::FiniteTopology;
pub use intervals::{BoundedInterval, ClosedInterval, Interval, OpenInterval};
pub use product::FiniteProductTopology;
pub use properties::TopologyProperties;
pub use random::RandomTopology;
pub use real_line::{RealLine, RealSubset};
pub use relative::RelativeTopology;
pub use serialization::TopologySnapshot;
pub use set::{Point, PointSet, SetFamily};
pub use topology::Topology;
