use gloo_timers::callback::Timeout;
use shared::view::{
    AssetRetry, ImageView, format_box, format_detection_confidence, resolve_asset_url,
};
use shared::{DetectionOutcome, StageState};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DetectionViewProps {
    pub stage: StageState<DetectionOutcome>,
    /// Local preview of the uploaded file.
    pub original_url: AttrValue,
    pub backend_url: AttrValue,
    pub retry_delay_ms: u32,
    pub retry_limit: u32,
    pub on_retry: Callback<()>,
}

enum AssetAction {
    Reload { source: String, limit: u32 },
}

#[derive(Default, PartialEq)]
struct AssetState {
    retry: AssetRetry,
}

impl Reducible for AssetState {
    type Action = AssetAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            AssetAction::Reload { source, limit } => match self.retry.reload(&source, limit) {
                Some(retry) => Rc::new(Self { retry }),
                None => self,
            },
        }
    }
}

#[function_component(DetectionView)]
pub fn detection_view(props: &DetectionViewProps) -> Html {
    let view = use_state(|| ImageView::Annotated);
    let asset = use_reducer(AssetState::default);

    // New results always open on the annotated image.
    let result_url = props.stage.outcome().map(|outcome| outcome.result_image_url.clone());
    {
        let view = view.clone();
        use_effect_with(result_url, move |url| {
            if url.is_some() {
                view.set(ImageView::Annotated);
            }
            || ()
        });
    }

    match &props.stage {
        StageState::Idle => html! {},
        StageState::Loading => html! {
            <div class="result-card loading-card">
                <i class="fa-solid fa-spinner fa-spin fa-2x"></i>
                <h3>{"Analyzing image..."}</h3>
                <p>{"Detecting the optic disc in your image. This can take a few seconds."}</p>
            </div>
        },
        StageState::Failed(message) => {
            let on_retry = props.on_retry.reform(|_: MouseEvent| ());
            html! {
                <div class="result-card error-card">
                    <div class="card-header">
                        <i class="fa-solid fa-circle-exclamation"></i>
                        <span>{"Detection error"}</span>
                    </div>
                    <p>{ message }</p>
                    <button class="analyze-btn" onclick={on_retry}>{"Try again"}</button>
                </div>
            }
        }
        StageState::Resolved(outcome) => {
            let reference = match *view {
                ImageView::Original => props.original_url.as_str(),
                ImageView::Annotated => outcome.result_image_url.as_str(),
            };
            let source = resolve_asset_url(reference, &props.backend_url);
            let src = asset.retry.src_for(&source);

            let onerror = {
                let dispatcher = asset.dispatcher();
                let can_reload = asset.retry.can_reload(&source, props.retry_limit);
                let delay = props.retry_delay_ms;
                let limit = props.retry_limit;
                let source = source.clone();
                Callback::from(move |_: Event| {
                    if !can_reload {
                        log::warn!("Giving up loading {}", source);
                        return;
                    }
                    let dispatcher = dispatcher.clone();
                    let source = source.clone();
                    Timeout::new(delay, move || {
                        dispatcher.dispatch(AssetAction::Reload { source, limit });
                    })
                    .forget();
                })
            };

            let tab = |target: ImageView| {
                let view = view.clone();
                let active = *view == target;
                html! {
                    <button
                        class={classes!("tab", active.then_some("active"))}
                        onclick={Callback::from(move |_: MouseEvent| view.set(target))}
                    >
                        { target.to_string() }
                    </button>
                }
            };

            html! {
                <div class="result-card">
                    <div class="card-header">
                        <h3>{"Optic disc detection"}</h3>
                        <div class="tab-group">
                            { tab(ImageView::Original) }
                            { tab(ImageView::Annotated) }
                        </div>
                    </div>
                    <div class="result-image">
                        <img
                            src={src}
                            alt={match *view {
                                ImageView::Original => "Original image",
                                ImageView::Annotated => "Optic disc detection",
                            }}
                            onerror={onerror}
                        />
                    </div>
                    <div class="card-footer">
                        <p>
                            {"Locating the optic disc is the basis of glaucoma screening: changes in the \
                              cup-to-disc ratio are an important indicator of glaucomatous damage."}
                        </p>
                        { render_detections(outcome) }
                    </div>
                </div>
            }
        }
    }
}

fn render_detections(outcome: &DetectionOutcome) -> Html {
    let detections = outcome.detections();
    if detections.is_empty() {
        return html! {};
    }

    html! {
        <div class="detection-stats">
            <h4>{"Detection statistics"}</h4>
            <ul>
                { for detections.iter().map(|detection| html! {
                    <li>
                        <span><b>{"Class: "}</b>{ &detection.label }</span>
                        <span><b>{"Confidence: "}</b>{ format_detection_confidence(detection.confidence) }</span>
                        <span><b>{"Box: "}</b>{ format_box(&detection.bounds) }</span>
                    </li>
                })}
            </ul>
        </div>
    }
}
