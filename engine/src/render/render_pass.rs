//! Render Pass Abstraction
//!
//! Trait-based render passes executed in priority order each frame.

use wgpu::{CommandEncoder, Device, Queue, TextureView};

use super::shape_pass::ShapeMesh;

/// Render pass execution priority (lower = earlier)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RenderPassPriority {
    /// Clears the frame to the background color
    Background = 0,
    /// Scene and overlay shapes
    Shapes = 100,
}

/// GPU context shared between render passes
pub struct RenderContext<'a> {
    pub device: &'a Device,
    pub queue: &'a Queue,
    pub surface_format: wgpu::TextureFormat,
    pub width: u32,
    pub height: u32,
}

/// Frame context for a single render frame
pub struct FrameContext<'a> {
    pub encoder: &'a mut CommandEncoder,
    pub color_view: &'a TextureView,
}

/// Trait for implementing render passes
pub trait RenderPass {
    /// Unique name for this pass (for debugging)
    fn name(&self) -> &'static str;

    /// Execution priority (determines render order)
    fn priority(&self) -> RenderPassPriority;

    /// Whether this pass is currently enabled
    fn is_enabled(&self) -> bool {
        true
    }

    /// Initialize GPU resources (called once on creation)
    fn initialize(&mut self, ctx: &RenderContext);

    /// Take this frame's geometry (called each frame before render)
    fn prepare(&mut self, _ctx: &RenderContext, _mesh: &ShapeMesh) {}

    /// Execute the render pass
    fn render(&self, ctx: &RenderContext, frame: &mut FrameContext);
}

/// Manages a collection of render passes with automatic ordering
pub struct RenderPassManager {
    passes: Vec<Box<dyn RenderPass>>,
    sorted: bool,
}

impl RenderPassManager {
    pub fn new() -> Self {
        Self {
            passes: Vec::new(),
            sorted: false,
        }
    }

    /// Add a render pass to the manager
    pub fn add_pass(&mut self, pass: Box<dyn RenderPass>) {
        self.passes.push(pass);
        self.sorted = false;
    }

    /// Initialize all passes
    pub fn initialize(&mut self, ctx: &RenderContext) {
        for pass in &mut self.passes {
            pass.initialize(ctx);
        }
        self.sort_passes();
    }

    fn sort_passes(&mut self) {
        if !self.sorted {
            self.passes.sort_by_key(|p| p.priority());
            self.sorted = true;
        }
    }

    /// Hand this frame's geometry to every pass
    pub fn prepare(&mut self, ctx: &RenderContext, mesh: &ShapeMesh) {
        for pass in &mut self.passes {
            pass.prepare(ctx, mesh);
        }
    }

    /// Render all enabled passes in priority order
    pub fn render(&self, ctx: &RenderContext, frame: &mut FrameContext) {
        for pass in &self.passes {
            if pass.is_enabled() {
                pass.render(ctx, frame);
            }
        }
    }

    /// List all pass names with their enabled status, in execution order
    pub fn list_passes(&self) -> Vec<(&'static str, bool)> {
        self.passes
            .iter()
            .map(|p| (p.name(), p.is_enabled()))
            .collect()
    }
}

impl Default for RenderPassManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NamedPass {
        name: &'static str,
        priority: RenderPassPriority,
        enabled: bool,
    }

    impl RenderPass for NamedPass {
        fn name(&self) -> &'static str {
            self.name
        }

        fn priority(&self) -> RenderPassPriority {
            self.priority
        }

        fn is_enabled(&self) -> bool {
            self.enabled
        }

        fn initialize(&mut self, _ctx: &RenderContext) {}

        fn render(&self, _ctx: &RenderContext, _frame: &mut FrameContext) {}
    }

    #[test]
    fn test_priority_order() {
        assert!(RenderPassPriority::Background < RenderPassPriority::Shapes);
    }

    #[test]
    fn test_list_passes_reports_enabled_state() {
        let mut manager = RenderPassManager::new();
        manager.add_pass(Box::new(NamedPass {
            name: "Shapes",
            priority: RenderPassPriority::Shapes,
            enabled: false,
        }));
        manager.add_pass(Box::new(NamedPass {
            name: "Background",
            priority: RenderPassPriority::Background,
            enabled: true,
        }));

        // Insertion order until initialize() sorts
        assert_eq!(
            manager.list_passes(),
            vec![("Shapes", false), ("Background", true)]
        );
    }
}
