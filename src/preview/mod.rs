use {
    gloo::{
        events::{
            EventListener,
            EventListenerOptions,
        },
        utils::{
            document,
            window,
        },
    },
    wasm_bindgen::JsCast,
    wasm_bindgen_futures::spawn_local,
    web_sys::{
        Element,
        HtmlTextAreaElement,
    },
};

pub mod highlight;
pub mod render;

/// Id of the button that triggers a render round trip.
pub const ID_PREVIEW_BUTTON: &str = "button_preview";
/// Id of the panel that receives the rendered fragment.
pub const ID_PREVIEW_PANEL: &str = "preview";
/// The markdown source lives in the page's one textarea.
pub const SOURCE_SELECTOR: &str = "textarea";

/// Current markdown source, or the empty string if the page has no textarea.
pub fn source_text() -> String {
    let Ok(Some(found)) = document().query_selector(SOURCE_SELECTOR) else {
        return String::new();
    };
    let Ok(area) = found.dyn_into::<HtmlTextAreaElement>() else {
        return String::new();
    };
    return area.value();
}

/// Replace the panel's entire content with a rendered fragment, then hand
/// each code block under it to `highlight`, one at a time, in document order.
pub fn apply_rendered(panel: &Element, html: &str, highlight: impl Fn(&Element)) {
    panel.set_inner_html(html);
    for block in highlight::code_blocks(panel) {
        highlight(&block);
    }
}

/// Wire the preview round trip to clicks on `button`. The handler stops
/// firing once the returned listener is dropped.
pub fn attach_to(button: &Element) -> EventListener {
    return EventListener::new_with_options(
        button,
        "click",
        EventListenerOptions::enable_prevent_default(),
        |event| {
            event.prevent_default();
            let source = source_text();

            // Overlapping requests aren't serialized - whichever response
            // lands last owns the panel.
            spawn_local(async move {
                match render::post_markdown(source).await {
                    Ok(html) => {
                        let Some(panel) = document().get_element_by_id(ID_PREVIEW_PANEL) else {
                            return;
                        };
                        apply_rendered(&panel, &html, highlight::highlight_block);
                    },
                    Err(e) => {
                        window().alert_with_message(&e.to_string()).unwrap();
                    },
                }
            });
        },
    );
}

/// Look the preview button up in the page and wire it.
pub fn attach() -> EventListener {
    return attach_to(&document().get_element_by_id(ID_PREVIEW_BUTTON).unwrap());
}
