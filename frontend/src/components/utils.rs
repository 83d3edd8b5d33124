use super::super::Model;
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsValue;
use web_sys::FileList;
use yew::prelude::*;

// Debounce function to limit button events
pub fn debounce<F>(duration: i32, callback: F) -> Callback<MouseEvent>
where
    F: Fn() + Clone + 'static,
{
    let timeout = Rc::new(RefCell::new(None::<Timeout>));
    let timeout_clone = Rc::clone(&timeout);

    Callback::from(move |_| {
        let mut timeout_ref = timeout_clone.borrow_mut();

        if let Some(old_timeout) = timeout_ref.take() {
            old_timeout.cancel();
        }

        let inner_callback = callback.clone();
        let new_timeout = Timeout::new(duration as u32, move || {
            inner_callback();
        });

        *timeout_ref = Some(new_timeout);
    })
}

/// Only one image is analysed at a time; extra files in a selection are ignored.
pub fn first_file(file_list: &FileList) -> Option<web_sys::File> {
    if file_list.length() > 1 {
        log::info!("{} files provided, analysing the first one", file_list.length());
    }
    file_list.item(0)
}

pub fn today_label() -> String {
    String::from(js_sys::Date::new_0().to_locale_date_string("default", &JsValue::UNDEFINED))
}

pub fn render_error_message(model: &Model) -> Html {
    if let Some(error_msg) = &model.validation_error {
        html! {
            <div class="error-message">
                <i class="fa-solid fa-circle-exclamation"></i>
                <p>{ error_msg }</p>
            </div>
        }
    } else {
        html! {}
    }
}
