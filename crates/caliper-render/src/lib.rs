//! Caliper Render Library
//!
//! Renderer abstraction and implementations for Caliper.
//! The default implementation paints through the egui painter.

mod renderer;

#[cfg(feature = "egui-renderer")]
mod egui_impl;

pub use renderer::{
    PaintSurface, PictureContext, RenderContext, RenderResult, RendererError, paint_board,
    paint_picture,
};

#[cfg(feature = "egui-renderer")]
pub use egui_impl::PainterSurface;
