use super::super::Model;
use super::super::Msg;
use super::detection_view::DetectionView;
use super::diagnosis_view::DiagnosisView;
use yew::prelude::*;

/// Both stage cards, side by side, once an image has been selected.
pub fn render_results(model: &Model, ctx: &Context<Model>) -> Html {
    let Some(image) = model.analysis.image() else {
        return html! {};
    };
    let link = ctx.link();
    let detection = model.analysis.detection();
    let diagnosis = model.analysis.diagnosis();

    html! {
        <div class="results-container">
            <section class="stage" data-status={detection.status().to_string()}>
                <DetectionView
                    stage={detection.clone()}
                    original_url={image.preview_url.clone()}
                    backend_url={model.config.backend_url.clone()}
                    retry_delay_ms={model.config.asset_retry_delay_ms}
                    retry_limit={model.config.asset_retry_limit}
                    on_retry={link.callback(|_| Msg::RetryDetection)}
                />
            </section>
            <section class="stage" data-status={diagnosis.status().to_string()}>
                <DiagnosisView
                    stage={diagnosis.clone()}
                    on_retry={link.callback(|_| Msg::RetryDiagnosis)}
                />
            </section>
        </div>
    }
}
