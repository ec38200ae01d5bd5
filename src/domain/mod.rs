// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain Rust types and traits that define what the pipeline
// works with: batches, partitions, split ratios, and the three
// collaborator roles the loader is generic over.
//
// Rules for this layer:
//   - NO file I/O
//   - NO logging setup or CLI types
//   - Only plain structs, enums, and traits
//
// Anything that reads files or owns a random generator lives
// in the data layer and implements the traits declared here.

/// A bounded slice of a partition handed to a consumer
pub mod batch;

/// Partition names and the per-partition cursor
pub mod partition;

/// Validated train/validation/test ratio triple
pub mod ratios;

/// RecordSource, LineCleaner and PartitionSplitter contracts
pub mod traits;
