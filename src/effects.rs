//! The three effects shown on the page and their slider tables.

use crate::input::{Controls, Pointer};
use crate::remap::{ControlBinding, Range};
use crate::shaders;
use crate::uniforms::{UniformSet, U_MOUSE, U_RESOLUTION, U_TIME};

/// Static description of one sketch: where it lives, what it compiles, and
/// which sliders feed it.
#[derive(Debug, Clone, Copy)]
pub struct Effect {
    pub name: &'static str,
    /// DOM id of the element the canvas is sized to and appended into.
    pub container_id: &'static str,
    pub vertex: &'static str,
    pub fragment: &'static str,
    pub bindings: &'static [ControlBinding],
    /// Whether the fragment program reads `uMouse`.
    pub uses_pointer: bool,
}

const fn binding(
    element_id: &'static str,
    uniform: &'static str,
    source: (f32, f32),
    target: (f32, f32),
    default: f32,
) -> ControlBinding {
    ControlBinding {
        element_id,
        uniform,
        source: Range::new(source.0, source.1),
        target: Range::new(target.0, target.1),
        default,
    }
}

pub const PORTAL: Effect = Effect {
    name: "portal",
    container_id: "synapse-demo",
    vertex: shaders::QUAD_VERTEX,
    fragment: shaders::PORTAL_FRAGMENT,
    bindings: &[
        binding("particle-slider", "uIntensity", (50.0, 300.0), (0.5, 2.0), 1.0),
        binding("distance-slider", "uSpeed", (50.0, 120.0), (0.1, 2.0), 1.0),
        binding("mouse-slider", "uZoom", (0.0, 200.0), (0.0, 1.0), 0.5),
    ],
    uses_pointer: true,
};

pub const WATER: Effect = Effect {
    name: "water",
    container_id: "fluids-demo",
    vertex: shaders::QUAD_VERTEX,
    fragment: shaders::WATER_FRAGMENT,
    bindings: &[
        binding("flow-slider", "uSpeed", (1.0, 10.0), (0.2, 3.0), 1.0),
        binding("viscosity-slider", "uComplexity", (10.0, 100.0), (1.0, 5.0), 1.0),
        binding("color-slider", "uBlue", (0.0, 100.0), (0.5, 1.5), 1.0),
    ],
    uses_pointer: true,
};

pub const TUNNEL: Effect = Effect {
    name: "tunnel",
    container_id: "tunnel-demo",
    vertex: shaders::QUAD_VERTEX,
    fragment: shaders::TUNNEL_FRAGMENT,
    bindings: &[
        binding("speed-slider", "uSpeed", (1.0, 10.0), (0.5, 3.0), 1.0),
        binding("intensity-slider", "uLightIntensity", (0.0, 100.0), (0.1, 1.5), 1.0),
        binding("depth-slider", "uDepth", (1.0, 10.0), (0.5, 2.0), 1.0),
    ],
    uses_pointer: false,
};

pub const ALL: [Effect; 3] = [PORTAL, WATER, TUNNEL];

impl Effect {
    /// Build this frame's uniforms. Pure: the same inputs give the same set.
    pub fn uniforms(
        &self,
        controls: &dyn Controls,
        elapsed_secs: f32,
        resolution: (u32, u32),
        pointer: Pointer,
    ) -> UniformSet {
        let (w, h) = (resolution.0 as f32, resolution.1 as f32);
        let mut set = UniformSet::new();
        set.set_float(U_TIME, elapsed_secs);
        set.set_vec2(U_RESOLUTION, w, h);
        if self.uses_pointer {
            let [x, y] = pointer.flipped(h);
            set.set_vec2(U_MOUSE, x, y);
        }
        for b in self.bindings {
            set.set_float(b.uniform, b.resolve(controls.value(b.element_id)));
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn particle_slider_examples() {
        let mut controls: HashMap<&str, f32> = HashMap::new();
        controls.insert("particle-slider", 50.0);
        let set = PORTAL.uniforms(&controls, 0.0, (100, 100), Pointer::default());
        assert_eq!(set.float("uIntensity"), Some(0.5));

        controls.insert("particle-slider", 300.0);
        let set = PORTAL.uniforms(&controls, 0.0, (100, 100), Pointer::default());
        assert_eq!(set.float("uIntensity"), Some(2.0));
    }

    #[test]
    fn absent_controls_use_defaults() {
        let set = PORTAL.uniforms(&(), 1.5, (640, 480), Pointer::default());
        assert_eq!(set.float("uIntensity"), Some(1.0));
        assert_eq!(set.float("uSpeed"), Some(1.0));
        assert_eq!(set.float("uZoom"), Some(0.5));
    }

    #[test]
    fn universal_uniforms_come_first() {
        let set = WATER.uniforms(&(), 2.25, (800, 600), Pointer::new(100.0, 50.0));
        let names: Vec<_> = set.iter().map(|(n, _)| n).collect();
        assert_eq!(
            names,
            ["uTime", "uResolution", "uMouse", "uSpeed", "uComplexity", "uBlue"]
        );
        assert_eq!(set.float("uTime"), Some(2.25));
        assert_eq!(set.vec2("uResolution"), Some([800.0, 600.0]));
        assert_eq!(set.vec2("uMouse"), Some([100.0, 550.0]));
    }

    #[test]
    fn tunnel_has_no_pointer_uniform() {
        let set = TUNNEL.uniforms(&(), 0.0, (320, 200), Pointer::new(5.0, 5.0));
        assert_eq!(set.get("uMouse"), None);
        assert_eq!(set.len(), 2 + TUNNEL.bindings.len());
    }

    #[test]
    fn defaults_lie_inside_targets() {
        for effect in ALL {
            for b in effect.bindings {
                assert!(b.target.contains(b.default), "{}: {}", effect.name, b.element_id);
            }
        }
    }

    #[test]
    fn element_ids_are_unique_across_the_page() {
        let mut ids: Vec<_> = ALL
            .iter()
            .flat_map(|e| e.bindings.iter().map(|b| b.element_id))
            .collect();
        let total = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), total);
    }

    #[test]
    fn fragment_declares_every_bound_uniform() {
        for effect in ALL {
            for b in effect.bindings {
                let decl = format!("uniform float {};", b.uniform);
                assert!(effect.fragment.contains(&decl), "{} lacks {}", effect.name, decl);
            }
            assert_eq!(
                effect.fragment.contains("uniform vec2 uMouse;"),
                effect.uses_pointer,
                "{}",
                effect.name
            );
        }
    }
}
