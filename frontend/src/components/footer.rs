use yew::prelude::*;

pub fn render_footer() -> Html {
    let year = js_sys::Date::new_0().get_full_year();
    html! {
        <footer class="app-footer">
            <p>{"Retinal image analysis for glaucoma screening | Rust WASM"}</p>
            <p class="copyright">{ format!("© {} GlaucomaVision", year) }</p>
        </footer>
    }
}
