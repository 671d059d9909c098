// Domain layer: the record type the query engine operates on.
// No dependencies beyond std/serde.

pub mod model;
