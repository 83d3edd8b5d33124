use super::reset::NewAnalysisButton;
use yew::prelude::*;

/// Renders the application header
pub fn render_header() -> Html {
    html! {
        <header class="app-header">
            <a href="#" class="brand">
                <i class="fa-solid fa-eye"></i>{" GlaucomaVision"}
            </a>
            <nav class="app-nav">
                <a href="#analysis">{"Analysis"}</a>
                <a href="#how-it-works">{"How it works"}</a>
                <NewAnalysisButton
                    label="New analysis"
                    class="analyze-btn nav-btn"
                    icon="fa-solid fa-rotate-left"
                />
            </nav>
        </header>
    }
}
