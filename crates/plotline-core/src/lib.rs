//! Plotline Core Types and Definitions
//!
//! This crate provides the building blocks for rendering robot trajectory
//! scenes as renderer-agnostic vector commands. It includes:
//!
//! - **Geometry**: Vectors, poses, bounds and affine transforms ([`geometry`] module)
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Paths**: Sampleable path segments produced by planning ([`path`] module)
//! - **Draw**: The renderer capability and every drawable primitive ([`draw`] module)

pub mod color;
pub mod draw;
pub mod geometry;
pub mod path;
