// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Cross-cutting concerns that don't belong to the pipeline
// itself:
//
//   config_store.rs — Loader configuration persistence
//                     Saves a LoaderConfig as pretty JSON so a
//                     split can be reproduced later with the
//                     same source, ratios, seed and cleaning
//                     options.
//
// Reference: Rust Book §9 (Error Handling with anyhow)

/// LoaderConfig saving and loading
pub mod config_store;
