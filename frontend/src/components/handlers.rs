use super::super::Model;
use super::super::Msg;
use super::utils::first_file;
use gloo_file::{File as GlooFile, ObjectUrl};
use shared::{AnalysisEvent, Command, FileMeta, execute};
use wasm_bindgen_futures::spawn_local;
use web_sys::{ClipboardEvent, DragEvent};
use yew::prelude::*;

pub fn handle_file_chosen(model: &mut Model, ctx: &Context<Model>, file: web_sys::File) -> bool {
    let meta = FileMeta {
        name: file.name(),
        media_type: file.type_(),
        size: file.size() as u64,
    };

    match model
        .intake
        .accept(GlooFile::from(file), meta, |file| ObjectUrl::from(file.clone()))
    {
        Ok(image) => {
            model.validation_error = None;
            let command = model.analysis.select(image);
            send_command(model, ctx, command);
        }
        Err(e) => {
            model.validation_error = Some(e.to_string());
        }
    }

    true
}

pub fn handle_analysis_event(model: &mut Model, ctx: &Context<Model>, event: AnalysisEvent) -> bool {
    if let Some(command) = model.analysis.apply(event) {
        send_command(model, ctx, command);
    }
    true
}

pub fn handle_retry_detection(model: &mut Model, ctx: &Context<Model>) -> bool {
    match model.analysis.retry_detection() {
        Some(command) => {
            send_command(model, ctx, command);
            true
        }
        None => false,
    }
}

pub fn handle_retry_diagnosis(model: &mut Model, ctx: &Context<Model>) -> bool {
    match model.analysis.retry_diagnosis() {
        Some(command) => {
            send_command(model, ctx, command);
            true
        }
        None => false,
    }
}

pub fn handle_new_analysis(model: &mut Model) -> bool {
    if let Some(run) = model.analysis.current_run() {
        log::info!("Starting over, discarding run {}", run);
    }
    model.analysis.reset();
    model.intake.reset();
    model.validation_error = None;
    model.is_dragging = false;
    true
}

pub fn handle_drop(model: &mut Model, ctx: &Context<Model>, event: DragEvent) -> bool {
    event.prevent_default();
    model.is_dragging = false;

    if let Some(file) = event
        .data_transfer()
        .and_then(|data_transfer| data_transfer.files())
        .as_ref()
        .and_then(first_file)
    {
        ctx.link().send_message(Msg::FileChosen(file));
    }

    true
}

pub fn handle_paste(ctx: &Context<Model>, event: ClipboardEvent) -> bool {
    if let Some(file_list) = event.clipboard_data().and_then(|data| data.files()) {
        if let Some(file) = first_file(&file_list) {
            event.prevent_default();
            ctx.link().send_message(Msg::FileChosen(file));
            return true;
        }
    }
    false
}

/// Runs `command` off the update loop and feeds its completion back as a message.
fn send_command(model: &Model, ctx: &Context<Model>, command: Command<GlooFile>) {
    log::debug!("Dispatching command for run {}", command.run());
    let client = model.client.clone();
    let link = ctx.link().clone();

    spawn_local(async move {
        let event = execute(&client, command).await;
        link.send_message(Msg::Analysis(event));
    });
}
