mod api;
mod components;
mod config;

use api::HttpAnalysisClient;
use components::handlers;
use components::reset::ResetHandle;
use gloo_events::EventListener;
use gloo_file::{File as GlooFile, ObjectUrl};
use shared::{AnalysisEvent, ClientConfig, Intake, Orchestrator};
use wasm_bindgen::JsCast;
use web_sys::{ClipboardEvent, DragEvent};
use yew::prelude::*;

// Yew msg components
enum Msg {
    // Intake
    FileChosen(web_sys::File),
    SetDragging(bool),
    HandleDrop(DragEvent),
    HandlePaste(ClipboardEvent),

    // Analysis
    Analysis(AnalysisEvent),
    RetryDetection,
    RetryDiagnosis,
    NewAnalysis,
}

// Main component
struct Model {
    config: ClientConfig,
    client: HttpAnalysisClient,
    intake: Intake<ObjectUrl>,
    analysis: Orchestrator<GlooFile>,
    validation_error: Option<String>,
    is_dragging: bool,
    paste_listener: Option<EventListener>,
    reset: ResetHandle,
}

impl Component for Model {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let config = config::load();
        let mut model = Self {
            client: HttpAnalysisClient::new(config.clone()),
            config,
            intake: Intake::new(),
            analysis: Orchestrator::new(),
            validation_error: None,
            is_dragging: false,
            paste_listener: None,
            reset: ResetHandle::new(ctx.link().callback(|_| Msg::NewAnalysis)),
        };

        let link = ctx.link().clone();
        let window = web_sys::window().expect("no global `window` exists");
        let listener = EventListener::new(&window, "paste", move |event| {
            if let Some(clipboard_event) = event.dyn_ref::<ClipboardEvent>() {
                link.send_message(Msg::HandlePaste(clipboard_event.clone()));
            }
        });
        model.paste_listener = Some(listener);

        model
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::FileChosen(file) => handlers::handle_file_chosen(self, ctx, file),
            Msg::SetDragging(is_dragging) => {
                self.is_dragging = is_dragging;
                true
            }
            Msg::HandleDrop(event) => handlers::handle_drop(self, ctx, event),
            Msg::HandlePaste(event) => handlers::handle_paste(ctx, event),

            Msg::Analysis(event) => handlers::handle_analysis_event(self, ctx, event),
            Msg::RetryDetection => handlers::handle_retry_detection(self, ctx),
            Msg::RetryDiagnosis => handlers::handle_retry_diagnosis(self, ctx),
            Msg::NewAnalysis => handlers::handle_new_analysis(self),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <ContextProvider<ResetHandle> context={self.reset.clone()}>
                <div class="container">
                    { components::header::render_header() }

                    <main class="main-content">
                        <section id="analysis" class="analysis-section">
                            <h2>{"Retinal Image Analysis"}</h2>
                            <p class="subtitle">
                                {"Upload a fundus image to detect the optic disc and screen for signs of glaucoma."}
                            </p>
                            { components::upload_section::render_upload_section(self, ctx) }
                            { components::utils::render_error_message(self) }
                            { components::results::render_results(self, ctx) }
                        </section>
                        { components::sections::render_how_it_works() }
                        { components::sections::render_notice() }
                    </main>

                    { components::footer::render_footer() }
                </div>
            </ContextProvider<ResetHandle>>
        }
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("App starting...");
    yew::Renderer::<Model>::new().render();
}
