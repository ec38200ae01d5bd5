// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Wires the data layer together from a LoaderConfig and runs
// it end to end.
//
// Rules for this layer:
//   - No cleaning or splitting logic here (that's Layer 4)
//   - No printing here (that's Layer 1)
//   - Only workflow coordination
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

/// Load a corpus, report partition sizes, walk batches
pub mod split_use_case;
