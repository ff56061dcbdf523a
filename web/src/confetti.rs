use heartswap_core::BurstRequest;
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// `canvas-confetti`'s global entry point, loaded by the page.
    #[wasm_bindgen(catch, js_name = confetti)]
    fn confetti_js(options: &JsValue) -> Result<JsValue, JsValue>;
}

#[derive(Clone, Debug, PartialEq, Serialize)]
struct Origin {
    x: f32,
    y: f32,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
struct ConfettiOptions {
    particle_count: u32,
    spread: f32,
    start_velocity: f32,
    ticks: u32,
    z_index: i32,
    origin: Origin,
}

impl From<&BurstRequest> for ConfettiOptions {
    fn from(request: &BurstRequest) -> Self {
        Self {
            particle_count: request.particle_count,
            spread: request.spread_degrees,
            start_velocity: request.velocity,
            ticks: request.ticks,
            z_index: 0,
            origin: Origin {
                x: request.origin_x,
                y: request.origin_y,
            },
        }
    }
}

fn encode(request: &BurstRequest) -> serde_json::Result<String> {
    serde_json::to_string(&ConfettiOptions::from(request))
}

/// Hands one emission to the animation service. Failures only cost the effect.
pub(crate) fn fire(request: &BurstRequest) {
    let options = match encode(request) {
        Ok(json) => js_sys::JSON::parse(&json),
        Err(err) => {
            log::warn!("failed to encode burst: {}", err);
            return;
        }
    };

    if let Err(err) = options.and_then(|options| confetti_js(&options)) {
        log::warn!("confetti unavailable: {:?}", err);
    }
}
