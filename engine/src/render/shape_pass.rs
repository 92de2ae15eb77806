//! Shape Render Pass
//!
//! Draws the frame's 2D geometry (scene shapes, pixel-font text, overlay)
//! as one indexed triangle list. Vertices arrive already in NDC, so the
//! pipeline has no bind groups. No depth testing, alpha blending.

use super::render_pass::{FrameContext, RenderContext, RenderPass, RenderPassPriority};

/// WGSL source for the shape pipeline
pub const SHAPE_SHADER_SOURCE: &str = include_str!("../../../shaders/shape.wgsl");

/// Initial vertex buffer capacity in vertices (grows on demand)
const INITIAL_VERTEX_CAPACITY: u64 = 16 * 1024;
/// Initial index buffer capacity in indices (grows on demand)
const INITIAL_INDEX_CAPACITY: u64 = 24 * 1024;

/// Vertex for 2D shapes (NDC position, sRGB color)
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ShapeVertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

// Must match the vertex buffer layout below
static_assertions::assert_eq_size!(ShapeVertex, [u8; 24]);

/// Triangle-list geometry for one frame
#[derive(Clone, Debug, Default)]
pub struct ShapeMesh {
    pub vertices: Vec<ShapeVertex>,
    pub indices: Vec<u32>,
}

impl ShapeMesh {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a quad given its four NDC corners (clockwise from top-left)
    pub fn add_quad(&mut self, tl: [f32; 2], tr: [f32; 2], br: [f32; 2], bl: [f32; 2], color: [f32; 4]) {
        let base = self.vertices.len() as u32;

        self.vertices.push(ShapeVertex { position: tl, color });
        self.vertices.push(ShapeVertex { position: tr, color });
        self.vertices.push(ShapeVertex { position: br, color });
        self.vertices.push(ShapeVertex { position: bl, color });

        self.indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    /// Add a triangle fan around `center` through `rim` (closed loop)
    pub fn add_fan(&mut self, center: [f32; 2], rim: &[[f32; 2]], color: [f32; 4]) {
        if rim.len() < 2 {
            return;
        }
        let base = self.vertices.len() as u32;
        self.vertices.push(ShapeVertex { position: center, color });
        for &position in rim {
            self.vertices.push(ShapeVertex { position, color });
        }

        let rim_len = rim.len() as u32;
        for i in 0..rim_len {
            let a = base + 1 + i;
            let b = base + 1 + (i + 1) % rim_len;
            self.indices.extend_from_slice(&[base, a, b]);
        }
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
        self.indices.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Convert screen coordinates (pixels, y down) to NDC
    pub fn screen_to_ndc(x: f32, y: f32, width: f32, height: f32) -> [f32; 2] {
        [(x / width) * 2.0 - 1.0, 1.0 - (y / height) * 2.0]
    }
}

/// Render pass that draws the frame's shape mesh on top of the background
pub struct ShapeRenderPass {
    initialized: bool,
    pipeline: Option<wgpu::RenderPipeline>,
    vertex_buffer: Option<wgpu::Buffer>,
    index_buffer: Option<wgpu::Buffer>,
    vertex_capacity: u64,
    index_capacity: u64,
    /// Indices uploaded for the current frame
    index_count: u32,
}

impl ShapeRenderPass {
    pub fn new() -> Self {
        Self {
            initialized: false,
            pipeline: None,
            vertex_buffer: None,
            index_buffer: None,
            vertex_capacity: 0,
            index_capacity: 0,
            index_count: 0,
        }
    }

    fn create_vertex_buffer(device: &wgpu::Device, capacity: u64) -> wgpu::Buffer {
        device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Shape Vertex Buffer"),
            size: capacity * std::mem::size_of::<ShapeVertex>() as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        })
    }

    fn create_index_buffer(device: &wgpu::Device, capacity: u64) -> wgpu::Buffer {
        device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Shape Index Buffer"),
            size: capacity * std::mem::size_of::<u32>() as u64,
            usage: wgpu::BufferUsages::INDEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        })
    }
}

impl Default for ShapeRenderPass {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderPass for ShapeRenderPass {
    fn name(&self) -> &'static str {
        "Shapes"
    }

    fn priority(&self) -> RenderPassPriority {
        RenderPassPriority::Shapes
    }

    fn initialize(&mut self, ctx: &RenderContext) {
        if self.initialized {
            return;
        }

        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Shape Shader"),
            source: wgpu::ShaderSource::Wgsl(SHAPE_SHADER_SOURCE.into()),
        });

        let pipeline_layout = ctx.device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Shape Pipeline Layout"),
            bind_group_layouts: &[],
            push_constant_ranges: &[],
        });

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Shape Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[wgpu::VertexBufferLayout {
                    array_stride: std::mem::size_of::<ShapeVertex>() as u64,
                    step_mode: wgpu::VertexStepMode::Vertex,
                    attributes: &[
                        wgpu::VertexAttribute {
                            format: wgpu::VertexFormat::Float32x2,
                            offset: 0,
                            shader_location: 0,
                        },
                        wgpu::VertexAttribute {
                            format: wgpu::VertexFormat::Float32x4,
                            offset: 8,
                            shader_location: 1,
                        },
                    ],
                }],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.surface_format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None, // Fans and quads use mixed winding
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        self.vertex_buffer = Some(Self::create_vertex_buffer(ctx.device, INITIAL_VERTEX_CAPACITY));
        self.index_buffer = Some(Self::create_index_buffer(ctx.device, INITIAL_INDEX_CAPACITY));
        self.vertex_capacity = INITIAL_VERTEX_CAPACITY;
        self.index_capacity = INITIAL_INDEX_CAPACITY;
        self.pipeline = Some(pipeline);
        self.initialized = true;
    }

    fn prepare(&mut self, ctx: &RenderContext, mesh: &ShapeMesh) {
        self.index_count = 0;
        if !self.initialized || mesh.is_empty() {
            return;
        }

        let vertex_count = mesh.vertices.len() as u64;
        if vertex_count > self.vertex_capacity {
            let capacity = vertex_count.next_power_of_two();
            log::debug!("Growing shape vertex buffer to {capacity} vertices");
            self.vertex_buffer = Some(Self::create_vertex_buffer(ctx.device, capacity));
            self.vertex_capacity = capacity;
        }

        let index_count = mesh.indices.len() as u64;
        if index_count > self.index_capacity {
            let capacity = index_count.next_power_of_two();
            log::debug!("Growing shape index buffer to {capacity} indices");
            self.index_buffer = Some(Self::create_index_buffer(ctx.device, capacity));
            self.index_capacity = capacity;
        }

        let (Some(vertex_buffer), Some(index_buffer)) = (&self.vertex_buffer, &self.index_buffer)
        else {
            return;
        };
        ctx.queue.write_buffer(vertex_buffer, 0, bytemuck::cast_slice(&mesh.vertices));
        ctx.queue.write_buffer(index_buffer, 0, bytemuck::cast_slice(&mesh.indices));
        self.index_count = mesh.indices.len() as u32;
    }

    fn render(&self, _ctx: &RenderContext, frame: &mut FrameContext) {
        if self.index_count == 0 {
            return;
        }
        let (Some(pipeline), Some(vertex_buffer), Some(index_buffer)) =
            (&self.pipeline, &self.vertex_buffer, &self.index_buffer)
        else {
            return;
        };

        let mut render_pass = frame.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Shape Render Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: frame.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load, // Keep the background
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        render_pass.set_pipeline(pipeline);
        render_pass.set_vertex_buffer(0, vertex_buffer.slice(..));
        render_pass.set_index_buffer(index_buffer.slice(..), wgpu::IndexFormat::Uint32);
        render_pass.draw_indexed(0..self.index_count, 0, 0..1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_vertex_size() {
        assert_eq!(std::mem::size_of::<ShapeVertex>(), 24);
    }

    #[test]
    fn test_add_quad() {
        let mut mesh = ShapeMesh::new();
        mesh.add_quad([0.0, 0.0], [1.0, 0.0], [1.0, -1.0], [0.0, -1.0], [1.0; 4]);
        mesh.add_quad([0.0, 0.0], [1.0, 0.0], [1.0, -1.0], [0.0, -1.0], [1.0; 4]);

        assert_eq!(mesh.vertices.len(), 8);
        assert_eq!(&mesh.indices[6..], &[4, 5, 6, 4, 6, 7]);
    }

    #[test]
    fn test_add_fan_closes_loop() {
        let mut mesh = ShapeMesh::new();
        let rim = [[1.0, 0.0], [0.0, 1.0], [-1.0, 0.0], [0.0, -1.0]];
        mesh.add_fan([0.0, 0.0], &rim, [1.0; 4]);

        assert_eq!(mesh.vertices.len(), 5);
        assert_eq!(mesh.indices.len(), 12);
        // Last triangle wraps back to the first rim vertex
        assert_eq!(&mesh.indices[9..], &[0, 4, 1]);
    }

    #[test]
    fn test_add_fan_ignores_degenerate_rim() {
        let mut mesh = ShapeMesh::new();
        mesh.add_fan([0.0, 0.0], &[[1.0, 0.0]], [1.0; 4]);
        assert!(mesh.is_empty());
        assert!(mesh.vertices.is_empty());
    }

    #[test]
    fn test_screen_to_ndc_corners() {
        assert_eq!(ShapeMesh::screen_to_ndc(0.0, 0.0, 800.0, 600.0), [-1.0, 1.0]);
        assert_eq!(ShapeMesh::screen_to_ndc(800.0, 600.0, 800.0, 600.0), [1.0, -1.0]);
        assert_eq!(ShapeMesh::screen_to_ndc(400.0, 300.0, 800.0, 600.0), [0.0, 0.0]);
    }
}
