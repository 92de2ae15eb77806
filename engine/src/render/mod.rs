//! Render Module
//!
//! GPU plumbing for the 2D demo: device/surface management, an ordered set
//! of render passes and the frame clock that paces scene updates.

pub mod background_pass;
pub mod frame_clock;
pub mod gpu_context;
pub mod render_pass;
pub mod shape_pass;

pub use background_pass::BackgroundPass;
pub use frame_clock::{FrameClock, FRAME_UNITS_PER_SECOND, MAX_FRAME_DELTA};
pub use gpu_context::{GpuContext, GpuContextConfig, RenderError};
pub use render_pass::{FrameContext, RenderContext, RenderPass, RenderPassManager, RenderPassPriority};
pub use shape_pass::{ShapeMesh, ShapeRenderPass, ShapeVertex, SHAPE_SHADER_SOURCE};
