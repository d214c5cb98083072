//! Shader compilation and input/uniform resolution.
//!
//! The WGSL source is parsed and validated with naga before wgpu ever sees
//! it, then reflected to find where the named inputs live. Any failure here
//! is reported as a [`ShaderError`] instead of producing a broken pipeline.

use naga::{AddressSpace, Binding, Function, Module, ShaderStage, TypeInner, VectorSize};
use thiserror::Error;

/// Source of the triangle program.
pub const TRIANGLE_SHADER: &str = include_str!("shaders/triangle.wgsl");

pub const VERTEX_ENTRY: &str = "vs_main";
pub const FRAGMENT_ENTRY: &str = "fs_main";

/// Name of the 2-component position input.
pub const POSITION_INPUT: &str = "vPos";
/// Name of the 3-component color input.
pub const COLOR_INPUT: &str = "vCol";
/// Name of the 4x4 transform uniform.
pub const TRANSFORM_UNIFORM: &str = "MVP";

#[derive(Error, Debug)]
pub enum ShaderError {
    #[error("failed to parse shader:\n{0}")]
    Parse(String),

    #[error("shader failed validation: {0}")]
    Validation(String),

    #[error("shader has no {stage:?} entry point `{name}`")]
    MissingEntryPoint { stage: ShaderStage, name: &'static str },

    #[error("vertex input `{0}` is not bound to a location")]
    MissingAttribute(&'static str),

    #[error("uniform `{0}` is not declared with a group and binding")]
    MissingUniform(&'static str),

    #[error("uniform `{0}` is not a 4x4 matrix")]
    UniformType(&'static str),
}

/// Group/binding pair of a uniform.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct UniformSlot {
    pub group: u32,
    pub binding: u32,
}

/// Resolved locations of the program's named inputs.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ShaderBindings {
    pub position: u32,
    pub color: u32,
    pub transform: UniformSlot,
}

/// A parsed and validated shader program.
#[derive(Debug)]
pub struct CompiledShader<'s> {
    source: &'s str,
    module: Module,
}

impl<'s> CompiledShader<'s> {
    /// Parses and validates WGSL source.
    pub fn compile(source: &'s str) -> Result<Self, ShaderError> {
        let module = naga::front::wgsl::parse_str(source)
            .map_err(|e| ShaderError::Parse(e.emit_to_string(source)))?;

        let mut validator = naga::valid::Validator::new(
            naga::valid::ValidationFlags::all(),
            naga::valid::Capabilities::all(),
        );
        validator
            .validate(&module)
            .map_err(|e| ShaderError::Validation(e.to_string()))?;

        for (stage, name) in [
            (ShaderStage::Vertex, VERTEX_ENTRY),
            (ShaderStage::Fragment, FRAGMENT_ENTRY),
        ] {
            if !module
                .entry_points
                .iter()
                .any(|ep| ep.stage == stage && ep.name == name)
            {
                return Err(ShaderError::MissingEntryPoint { stage, name });
            }
        }

        Ok(Self { source, module })
    }

    pub fn source(&self) -> &'s str {
        self.source
    }

    /// Resolves the attribute locations and the transform uniform slot.
    pub fn resolve(&self) -> Result<ShaderBindings, ShaderError> {
        let vertex = self
            .module
            .entry_points
            .iter()
            .find(|ep| ep.stage == ShaderStage::Vertex && ep.name == VERTEX_ENTRY)
            .ok_or(ShaderError::MissingEntryPoint {
                stage: ShaderStage::Vertex,
                name: VERTEX_ENTRY,
            })?;

        let position = input_location(&self.module, &vertex.function, POSITION_INPUT)
            .ok_or(ShaderError::MissingAttribute(POSITION_INPUT))?;
        let color = input_location(&self.module, &vertex.function, COLOR_INPUT)
            .ok_or(ShaderError::MissingAttribute(COLOR_INPUT))?;
        let transform = self.transform_slot()?;

        Ok(ShaderBindings {
            position,
            color,
            transform,
        })
    }

    fn transform_slot(&self) -> Result<UniformSlot, ShaderError> {
        let var = self
            .module
            .global_variables
            .iter()
            .map(|(_, var)| var)
            .find(|var| {
                var.name.as_deref() == Some(TRANSFORM_UNIFORM)
                    && matches!(var.space, AddressSpace::Uniform)
            })
            .ok_or(ShaderError::MissingUniform(TRANSFORM_UNIFORM))?;

        let is_mat4 = matches!(
            self.module.types[var.ty].inner,
            TypeInner::Matrix {
                columns: VectorSize::Quad,
                rows: VectorSize::Quad,
                ..
            }
        );
        if !is_mat4 {
            return Err(ShaderError::UniformType(TRANSFORM_UNIFORM));
        }

        let rb = var
            .binding
            .as_ref()
            .ok_or(ShaderError::MissingUniform(TRANSFORM_UNIFORM))?;

        Ok(UniformSlot {
            group: rb.group,
            binding: rb.binding,
        })
    }
}

/// Finds the `@location` of a named entry-point input.
///
/// Inputs are either direct arguments or members of an argument struct.
fn input_location(module: &Module, function: &Function, name: &str) -> Option<u32> {
    function.arguments.iter().find_map(|arg| {
        if arg.name.as_deref() == Some(name) {
            return location_of(arg.binding.as_ref());
        }
        match &module.types[arg.ty].inner {
            TypeInner::Struct { members, .. } => members
                .iter()
                .find(|m| m.name.as_deref() == Some(name))
                .and_then(|m| location_of(m.binding.as_ref())),
            _ => None,
        }
    })
}

fn location_of(binding: Option<&Binding>) -> Option<u32> {
    match binding {
        Some(Binding::Location { location, .. }) => Some(*location),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FLAT_ARGS: &str = r#"
@group(1) @binding(2) var<uniform> MVP: mat4x4<f32>;

@vertex
fn vs_main(@location(4) vCol: vec3<f32>, @location(5) vPos: vec2<f32>) -> @builtin(position) vec4<f32> {
    return MVP * vec4<f32>(vPos + vCol.xy, 0.0, 1.0);
}

@fragment
fn fs_main() -> @location(0) vec4<f32> {
    return vec4<f32>(1.0);
}
"#;

    const NO_COLOR: &str = r#"
@group(0) @binding(0) var<uniform> MVP: mat4x4<f32>;

@vertex
fn vs_main(@location(0) vPos: vec2<f32>) -> @builtin(position) vec4<f32> {
    return MVP * vec4<f32>(vPos, 0.0, 1.0);
}

@fragment
fn fs_main() -> @location(0) vec4<f32> {
    return vec4<f32>(1.0);
}
"#;

    const NO_UNIFORM: &str = r#"
@vertex
fn vs_main(@location(0) vPos: vec2<f32>, @location(1) vCol: vec3<f32>) -> @builtin(position) vec4<f32> {
    return vec4<f32>(vPos + vCol.xy, 0.0, 1.0);
}

@fragment
fn fs_main() -> @location(0) vec4<f32> {
    return vec4<f32>(1.0);
}
"#;

    const VEC_UNIFORM: &str = r#"
@group(0) @binding(0) var<uniform> MVP: vec4<f32>;

@vertex
fn vs_main(@location(0) vPos: vec2<f32>, @location(1) vCol: vec3<f32>) -> @builtin(position) vec4<f32> {
    return MVP + vec4<f32>(vPos + vCol.xy, 0.0, 1.0);
}

@fragment
fn fs_main() -> @location(0) vec4<f32> {
    return vec4<f32>(1.0);
}
"#;

    const NO_FRAGMENT: &str = r#"
@group(0) @binding(0) var<uniform> MVP: mat4x4<f32>;

@vertex
fn vs_main(@location(0) vPos: vec2<f32>, @location(1) vCol: vec3<f32>) -> @builtin(position) vec4<f32> {
    return MVP * vec4<f32>(vPos + vCol.xy, 0.0, 1.0);
}
"#;

    // ── triangle program ──────────────────────────────────────────────────

    #[test]
    fn triangle_shader_resolves() {
        let shader = CompiledShader::compile(TRIANGLE_SHADER).expect("triangle shader compiles");
        let bindings = shader.resolve().expect("triangle shader resolves");
        assert_eq!(
            bindings,
            ShaderBindings {
                position: 0,
                color: 1,
                transform: UniformSlot { group: 0, binding: 0 },
            }
        );
    }

    #[test]
    fn resolves_direct_arguments() {
        let bindings = CompiledShader::compile(FLAT_ARGS).unwrap().resolve().unwrap();
        assert_eq!(bindings.position, 5);
        assert_eq!(bindings.color, 4);
        assert_eq!(bindings.transform, UniformSlot { group: 1, binding: 2 });
    }

    // ── failures ──────────────────────────────────────────────────────────

    #[test]
    fn syntax_error_is_reported() {
        let err = CompiledShader::compile("fn vs_main( {").unwrap_err();
        assert!(matches!(err, ShaderError::Parse(_)));
    }

    #[test]
    fn missing_color_input_is_reported() {
        let err = CompiledShader::compile(NO_COLOR).unwrap().resolve().unwrap_err();
        assert!(matches!(err, ShaderError::MissingAttribute(COLOR_INPUT)));
    }

    #[test]
    fn missing_uniform_is_reported() {
        let err = CompiledShader::compile(NO_UNIFORM).unwrap().resolve().unwrap_err();
        assert!(matches!(err, ShaderError::MissingUniform(TRANSFORM_UNIFORM)));
    }

    #[test]
    fn non_matrix_uniform_is_reported() {
        let err = CompiledShader::compile(VEC_UNIFORM).unwrap().resolve().unwrap_err();
        assert!(matches!(err, ShaderError::UniformType(TRANSFORM_UNIFORM)));
    }

    #[test]
    fn missing_fragment_entry_is_reported() {
        let err = CompiledShader::compile(NO_FRAGMENT).unwrap_err();
        assert!(matches!(
            err,
            ShaderError::MissingEntryPoint { stage: ShaderStage::Fragment, .. }
        ));
    }
}
