/// Open Packaging Conventions (OPC) container access.
///
/// This module exposes the ZIP container underlying Office Open XML documents
/// as an ordered set of named members that can be read as text, replaced in
/// memory and serialized into a new file.

pub mod constants;
pub mod phys_pkg;

// Re-export commonly used types
pub use phys_pkg::Package;
