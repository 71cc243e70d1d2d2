// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Orchestrates the other layers to produce the index files.
//
// Rules for this layer:
//   - No shuffling or splitting math here (that's Layer 4)
//   - No file formats here (that's Layer 5)
//   - Only workflow coordination and ordering

// The index generation workflow
pub mod generate_use_case;
