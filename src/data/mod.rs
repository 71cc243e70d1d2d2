// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Everything between "a dataset with labels" and "three lists
// of indices":
//
//   MedMNIST .npz archive
//       │
//       ▼
//   MedMnistSource     → per-sample class labels (LabelSource)
//       │
//       ▼
//   stratified         → optional class-balanced subset
//       │
//       ▼
//   splitter           → shuffle + 70/15/15 cut
//
// Each module is responsible for exactly one step.

/// Reads class labels from MedMNIST .npz archives
pub mod medmnist;

/// Groups samples by class and draws a balanced subset
pub mod stratified;

/// Shuffles and splits indices into train/val/test
pub mod splitter;
