use yew::prelude::*;

/// "Start over" capability handed down through a `ContextProvider`.
#[derive(Clone, PartialEq)]
pub struct ResetHandle(Callback<()>);

impl ResetHandle {
    pub fn new(callback: Callback<()>) -> Self {
        Self(callback)
    }

    pub fn trigger(&self) {
        self.0.emit(());
    }
}

#[derive(Properties, PartialEq)]
pub struct NewAnalysisButtonProps {
    pub label: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub icon: Option<AttrValue>,
}

#[function_component(NewAnalysisButton)]
pub fn new_analysis_button(props: &NewAnalysisButtonProps) -> Html {
    let Some(reset) = use_context::<ResetHandle>() else {
        log::warn!("NewAnalysisButton rendered outside of a ResetHandle provider");
        return html! {};
    };

    let onclick = Callback::from(move |e: MouseEvent| {
        e.stop_propagation();
        reset.trigger();
    });

    html! {
        <button class={props.class.clone()} {onclick}>
            if let Some(icon) = &props.icon {
                <i class={icon.to_string()}></i>{" "}
            }
            { props.label.clone() }
        </button>
    }
}
