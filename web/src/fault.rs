use yew::prelude::*;

/// Element the app renders into.
pub(crate) const ROOT_ID: &str = "app";

const HEADLINE: &str = "Something went wrong";

#[derive(Properties, PartialEq)]
pub(crate) struct FailureProps {
    pub detail: AttrValue,
}

#[function_component]
pub(crate) fn FailureView(props: &FailureProps) -> Html {
    html! {
        <div class="failure">
            <h1>{HEADLINE}</h1>
            <pre>{props.detail.clone()}</pre>
        </div>
    }
}

/// Routes panics to the console and replaces the page with the failure message,
/// after which the app no longer responds.
pub(crate) fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        #[cfg(feature = "console_error_panic_hook")]
        console_error_panic_hook::hook(info);

        show(&info.to_string());
    }));
}

/// Replaces the root element's content without going through yew.
pub(crate) fn show(detail: &str) {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };
    let Some(root) = document.get_element_by_id(ROOT_ID) else {
        return;
    };
    let (Ok(headline), Ok(pre)) = (document.create_element("h1"), document.create_element("pre"))
    else {
        return;
    };

    headline.set_text_content(Some(HEADLINE));
    pre.set_text_content(Some(detail));
    root.set_inner_html("");
    root.set_class_name("failure");
    if root.append_child(&headline).is_err() || root.append_child(&pre).is_err() {
        log::error!("failed to show failure: {}", detail);
    }
}
