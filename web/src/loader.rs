use anyhow::{Context, anyhow};
use heartswap_core::ImageInfo;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlImageElement;

/// A decoded puzzle picture.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Picture {
    pub element: HtmlImageElement,
    pub info: ImageInfo,
}

fn js_error(value: JsValue) -> anyhow::Error {
    anyhow!("{:?}", value)
}

pub(crate) async fn load_picture(src: &str) -> anyhow::Result<Picture> {
    let img = HtmlImageElement::new()
        .map_err(js_error)
        .context("failed to create image element")?;

    let promise = js_sys::Promise::new(&mut |resolve, reject| {
        let onload = Closure::once(move || {
            let _ = resolve.call0(&JsValue::NULL);
        });
        let onerror = Closure::once(move || {
            let _ = reject.call1(&JsValue::NULL, &JsValue::from_str("image_load_failed"));
        });
        img.set_onload(Some(onload.as_ref().unchecked_ref()));
        img.set_onerror(Some(onerror.as_ref().unchecked_ref()));
        onload.forget();
        onerror.forget();
    });
    img.set_src(src);

    JsFuture::from(promise)
        .await
        .map_err(js_error)
        .with_context(|| format!("failed to load {}", src))?;

    let info = ImageInfo::new(img.natural_width(), img.natural_height());
    log::debug!("loaded {} ({}x{})", src, info.width, info.height);
    Ok(Picture { element: img, info })
}
