//! Graph ⇄ step-list conversion for the pipeline editor.
//!
//! `compile` turns the editor's nodes and edges into the ordered step list the
//! pipeline service runs; `decompile` rebuilds an editable graph from such a
//! list. `validate` reports per-node field problems and `pipeline::topo`
//! orders steps by their dependencies.

pub mod compile;
pub mod decompile;
pub mod error;
pub mod parse;
pub mod pipeline;
pub mod validate;
pub mod wasm;

pub use compile::{compile, export};
pub use decompile::{DecompileOptions, LabelStrategy, decompile};
pub use error::{CompilerError, Phase};
pub use parse::types::{Edge, Graph, Node, NodeData, NodeKind};
pub use pipeline::topo::sort;
pub use pipeline::types::{PipelineDocument, Step, StepType};
pub use validate::{ValidationResult, validate};
