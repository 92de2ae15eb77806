//! Shader Tests - WGSL parsing and validation

use scene_switcher_engine::render::SHAPE_SHADER_SOURCE;

#[test]
fn test_shape_shader_validates() {
    let module = naga::front::wgsl::parse_str(SHAPE_SHADER_SOURCE)
        .unwrap_or_else(|e| panic!("{}", e.emit_to_string(SHAPE_SHADER_SOURCE)));

    naga::valid::Validator::new(
        naga::valid::ValidationFlags::all(),
        naga::valid::Capabilities::all(),
    )
    .validate(&module)
    .expect("shape shader failed validation");
}

#[test]
fn test_shape_shader_entry_points() {
    let module = naga::front::wgsl::parse_str(SHAPE_SHADER_SOURCE).expect("parse");
    let names: Vec<&str> = module.entry_points.iter().map(|e| e.name.as_str()).collect();
    assert!(names.contains(&"vs_main"));
    assert!(names.contains(&"fs_main"));
}
