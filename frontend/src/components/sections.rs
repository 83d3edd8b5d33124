use yew::prelude::*;

pub fn render_how_it_works() -> Html {
    let steps = [
        (
            "fa-solid fa-upload",
            "1. Upload",
            "Upload a high quality fundus image in JPG, PNG or TIFF format.",
        ),
        (
            "fa-solid fa-crosshairs",
            "2. Optic disc detection",
            "The optic disc is located first; the cup-to-disc ratio is a key glaucoma indicator.",
        ),
        (
            "fa-solid fa-stethoscope",
            "3. Diagnosis",
            "A classifier evaluates the image and reports a result with its confidence.",
        ),
    ];

    html! {
        <section id="how-it-works" class="how-it-works">
            <h2>{"How it works"}</h2>
            <div class="steps">
                { for steps.iter().map(|(icon, title, text)| html! {
                    <div class="step-card">
                        <i class={*icon}></i>
                        <h3>{ *title }</h3>
                        <p>{ *text }</p>
                    </div>
                })}
            </div>
        </section>
    }
}

pub fn render_notice() -> Html {
    html! {
        <section class="notice">
            <i class="fa-solid fa-circle-info"></i>
            <div>
                <h3>{"Important"}</h3>
                <p>
                    {"This tool assists diagnosis and does not replace an evaluation by an ophthalmologist. \
                      Results must be interpreted by qualified professionals."}
                </p>
            </div>
        </section>
    }
}
