//! Background Pass
//!
//! Clears the frame to a flat color before any shapes are drawn.

use super::render_pass::{FrameContext, RenderContext, RenderPass, RenderPassPriority};

/// Clears the color target to a fixed sRGB color
pub struct BackgroundPass {
    /// Clear color, linear space (what the sRGB surface expects)
    clear_color: wgpu::Color,
}

impl BackgroundPass {
    /// Create a background pass from a `0xRRGGBB` sRGB color
    pub fn from_hex(rgb: u32) -> Self {
        Self {
            clear_color: hex_to_linear_color(rgb),
        }
    }

    pub fn clear_color(&self) -> wgpu::Color {
        self.clear_color
    }
}

fn srgb_channel_to_linear(c: f64) -> f64 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

fn hex_to_linear_color(rgb: u32) -> wgpu::Color {
    let channel = |shift: u32| srgb_channel_to_linear(((rgb >> shift) & 0xff) as f64 / 255.0);
    wgpu::Color {
        r: channel(16),
        g: channel(8),
        b: channel(0),
        a: 1.0,
    }
}

impl RenderPass for BackgroundPass {
    fn name(&self) -> &'static str {
        "Background"
    }

    fn priority(&self) -> RenderPassPriority {
        RenderPassPriority::Background
    }

    fn initialize(&mut self, _ctx: &RenderContext) {}

    fn render(&self, _ctx: &RenderContext, frame: &mut FrameContext) {
        // Begin and drop a pass purely for its clear load op
        let _render_pass = frame.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Background Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: frame.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(self.clear_color),
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });
    }
}
