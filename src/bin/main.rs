use {
    blogedit::{
        cprintln,
        preview,
    },
    rooting::{
        el,
        set_root,
    },
};

fn main() {
    console_error_panic_hook::set_once();
    let button = el("button").attr("id", preview::ID_PREVIEW_BUTTON).text("Preview");
    set_root(vec![
        //. .
        el("h1").text("New post"),
        el("form").attr("method", "post").attr("action", "/admin/new").extend(vec![
            //. .
            el("input").attr("type", "text").attr("name", "post-title").attr("placeholder", "Title"),
            el("textarea").attr("name", "post-body").attr("rows", "20").attr("placeholder", "Write markdown here"),
            button.clone(),
            el("button").attr("type", "submit").text("Save")
        ]),
        el("div").attr("id", preview::ID_PREVIEW_PANEL).classes(&["preview"])
    ]);
    button.ref_own(|e| preview::attach_to(&e.raw()));
    cprintln!("preview wired to #{}", preview::ID_PREVIEW_BUTTON);
}
