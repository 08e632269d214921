//! `gestao-registry` — the model registry and generic CRUD dispatch.
//!
//! The registry maps route model names (Portuguese plurals such as
//! `"produtos"`) to registered record types and their CRUD handlers. All
//! entries are built once at startup from an explicit registration list;
//! request handling only ever probes precomputed maps.

pub mod handler;
pub mod inflect;
pub mod metadata;
mod registry;

pub use handler::{EntityHandler, GenericHandler, ListQuery, Page, UserHandler};
pub use metadata::{FieldMetadata, ModelMetadata, SelectOption, model_metadata};
pub use registry::{Registry, RegistryBuilder, RegistryEntry};
