//! Atlasviz Core Drawing Primitives
//!
//! This crate provides the building blocks used to draw the ATLAS
//! architecture poster:
//!
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Draw**: Renderable poster elements ([`draw`] module)

pub mod color;
pub mod draw;
pub mod geometry;
