use super::utils::today_label;
use shared::view::{clamp_percentage, format_diagnosis_confidence};
use shared::{DiagnosisOutcome, StageState, Verdict};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DiagnosisViewProps {
    pub stage: StageState<DiagnosisOutcome>,
    pub on_retry: Callback<()>,
}

#[function_component(DiagnosisView)]
pub fn diagnosis_view(props: &DiagnosisViewProps) -> Html {
    match &props.stage {
        StageState::Idle => html! {},
        StageState::Loading => html! {
            <div class="result-card loading-card">
                <i class="fa-solid fa-spinner fa-spin fa-2x"></i>
                <h3>{"Processing diagnosis..."}</h3>
                <p>{"Analyzing patterns and features of the image. This can take a few seconds."}</p>
            </div>
        },
        StageState::Failed(message) => {
            let on_retry = props.on_retry.reform(|_: MouseEvent| ());
            html! {
                <div class="result-card error-card">
                    <div class="card-header">
                        <i class="fa-solid fa-circle-exclamation"></i>
                        <span>{"Diagnosis error"}</span>
                    </div>
                    <p>{ message }</p>
                    <button class="analyze-btn" onclick={on_retry}>{"Try again"}</button>
                </div>
            }
        }
        StageState::Resolved(outcome) => render_outcome(outcome),
    }
}

fn render_outcome(outcome: &DiagnosisOutcome) -> Html {
    let verdict = outcome.verdict();
    let tone = match verdict {
        Verdict::GlaucomaSigns => "positive",
        Verdict::NoGlaucomaSigns => "negative",
    };
    let confidence = format_diagnosis_confidence(outcome.confidence);
    let bar_width = clamp_percentage(outcome.confidence);

    html! {
        <div class={classes!("result-card", "diagnosis-card", tone)}>
            <div class="card-header">
                <h3>{"Analysis result"}</h3>
                <span class={classes!("badge", tone)}>{ verdict.to_string() }</span>
            </div>
            <div class="card-body">
                <h4>{ verdict.to_string() }</h4>
                <p>{ verdict.explanation() }</p>

                <div class="confidence-meter">
                    <div class="meter-label">{"Diagnosis confidence"}</div>
                    <div class="meter">
                        <div class="meter-fill" style={format!("width: {}%", bar_width)}></div>
                    </div>
                    <div class="meter-value">{ &confidence }</div>
                </div>

                <dl class="diagnosis-details">
                    <dt>{"Diagnosis:"}</dt>
                    <dd>{ verdict.summary() }</dd>
                    <dt>{"Confidence:"}</dt>
                    <dd>{ &confidence }</dd>
                    <dt>{"Method:"}</dt>
                    <dd>{"Deep Learning CNN"}</dd>
                    <dt>{"Date:"}</dt>
                    <dd>{ today_label() }</dd>
                </dl>
            </div>
            <div class="card-footer">
                <p>
                    {"This result is an aid and must be confirmed by an ophthalmologist."}
                </p>
            </div>
        </div>
    }
}
