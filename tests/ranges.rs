use std::collections::HashMap;

use shader_sketches::{effects, Pointer};

fn sweep(lo: f32, hi: f32, steps: usize) -> impl Iterator<Item = f32> {
    (0..=steps).map(move |i| lo + (hi - lo) * i as f32 / steps as f32)
}

#[test]
fn every_slider_position_stays_inside_its_target() {
    for effect in effects::ALL {
        for b in effect.bindings {
            for v in sweep(b.source.lo, b.source.hi, 64) {
                let mut controls = HashMap::new();
                controls.insert(b.element_id, v);
                let set = effect.uniforms(&controls, 0.0, (64, 64), Pointer::default());
                let out = set.float(b.uniform).expect("bound uniform present");
                assert!(
                    b.target.contains(out),
                    "{}/{}: {} -> {} outside {:?}",
                    effect.name,
                    b.element_id,
                    v,
                    out,
                    b.target
                );
            }
        }
    }
}

#[test]
fn slider_endpoints_hit_target_endpoints() {
    for effect in effects::ALL {
        for b in effect.bindings {
            assert_eq!(b.resolve(Some(b.source.lo)), b.target.lo, "{}", b.element_id);
            assert_eq!(b.resolve(Some(b.source.hi)), b.target.hi, "{}", b.element_id);
        }
    }
}

#[test]
fn remap_is_monotonic_over_each_slider() {
    for effect in effects::ALL {
        for b in effect.bindings {
            let outs: Vec<f32> = sweep(b.source.lo, b.source.hi, 32)
                .map(|v| b.resolve(Some(v)))
                .collect();
            assert!(outs.windows(2).all(|w| w[0] <= w[1]), "{}", b.element_id);
        }
    }
}
