use super::super::Model;
use super::super::Msg;
use super::reset::NewAnalysisButton;
use super::utils::{debounce, first_file};
use shared::format_file_size;
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, HtmlInputElement};
use yew::prelude::*;

pub fn render_upload_section(model: &Model, ctx: &Context<Model>) -> Html {
    html! {
        <div class="upload-section">
            <div class="card-header">
                <h3>{"Retina image upload"}</h3>
                if model.intake.has_selection() {
                    <span class="badge">{"Image loaded"}</span>
                }
            </div>
            {
                if model.intake.has_selection() {
                    render_selected_preview(model)
                } else {
                    render_file_input_area(model, ctx)
                }
            }
        </div>
    }
}

fn render_selected_preview(model: &Model) -> Html {
    let preview_url = model.intake.preview_url().unwrap_or_default().to_string();
    let details = model.intake.details();

    html! {
        <div class="upload-area has-preview">
            <img id="actual-image-preview" src={preview_url} alt="Selected retina image" />
            if let Some(details) = details {
                <div class="file-details">
                    <div>
                        <p class="file-name" title={details.name.clone()}>{ &details.name }</p>
                        <p class="file-size">{ format_file_size(details.size) }</p>
                    </div>
                    <NewAnalysisButton label="Remove" class="analyze-btn remove-btn" icon="fa-solid fa-trash" />
                </div>
            }
            <div class="alert-info">
                <i class="fa-solid fa-circle-check"></i>
                <p>
                    <strong>{"Image loaded."}</strong>
                    {" The optic disc is detected first, then the image is screened for glaucoma."}
                </p>
            </div>
        </div>
    }
}

fn render_file_input_area(model: &Model, ctx: &Context<Model>) -> Html {
    let link = ctx.link();
    let handle_change = link.batch_callback(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let file = input.files().as_ref().and_then(first_file);

        input.set_value("");

        file.map(Msg::FileChosen)
    });

    let handle_drag_over = link.callback(|e: DragEvent| {
        e.prevent_default();
        Msg::SetDragging(true)
    });

    let handle_drag_leave = link.callback(|e: DragEvent| {
        e.prevent_default();
        Msg::SetDragging(false)
    });

    let handle_drop = link.callback(Msg::HandleDrop);
    let trigger_file_input = Callback::from(|_| {
        let input = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id("file-input"));
        if let Some(input) = input {
            if let Ok(html_input) = input.dyn_into::<web_sys::HtmlElement>() {
                html_input.click();
            }
        }
    });

    html! {
        <>
            <input
                type="file"
                id="file-input"
                accept="image/*"
                style="display: none;"
                onchange={handle_change}
            />

            <div
                id="drop-zone"
                class={classes!("upload-area", model.is_dragging.then_some("drag-over"))}
                ondragenter={handle_drag_over.clone()}
                ondragover={handle_drag_over}
                ondragleave={handle_drag_leave}
                ondrop={handle_drop}
                onclick={debounce(300, {
                    let trigger_file_input = trigger_file_input.clone();
                    move || trigger_file_input.emit(())
                })}
            >
                <div class="upload-placeholder">
                    <i class="fa-solid fa-cloud-arrow-up"></i>
                    <h4>{"Upload your retina image"}</h4>
                    <p>{"Drag & drop an image here, paste, or click to choose a file"}</p>
                    <p class="file-types">{"Supported formats: JPG, PNG, TIFF"}</p>
                </div>
            </div>

            <button
                id="upload-button"
                class="analyze-btn"
                onclick={debounce(300, {
                    let trigger_file_input = trigger_file_input.clone();
                    move || trigger_file_input.emit(())
                })}
            >
                <i class="fa-solid fa-upload"></i> {" Select Image"}
            </button>
        </>
    }
}
