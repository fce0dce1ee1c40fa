use {
    wasm_bindgen::{
        prelude::wasm_bindgen,
        JsCast,
    },
    web_sys::Element,
};

#[wasm_bindgen]
extern "C" {
    /// Entry point of the page's highlighting library; rewrites the code
    /// block's markup in place to add syntax coloring.
    #[wasm_bindgen(js_namespace = hljs, js_name = highlightBlock)]
    pub fn highlight_block(block: &Element);
}

/// Every code block nested in a pre under `root`, in document order.
pub fn code_blocks(root: &Element) -> Vec<Element> {
    let found = root.query_selector_all("pre code").unwrap();
    let mut out = vec![];
    for i in 0 .. found.length() {
        out.push(found.item(i).unwrap().dyn_into::<Element>().unwrap());
    }
    return out;
}
