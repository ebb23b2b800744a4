use gloo_net::http::Request;
use log::{error, info};
use serde::Deserialize;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::toast::{Toast, ToastHandle, ToastKind};
use crate::config;
use crate::enquiry::{
    submit_enquiry, EnquiryField, EnquiryForm, EnquiryRecord, Extras, SubmissionState,
    SubmitOutcome, SENT_MESSAGE, UNDELIVERED_MESSAGE, VALIDATION_MESSAGE,
};
use crate::pages::common::{event_value, ENQUIRY_SECTION_ID};
use crate::pricing::WorkType;

#[derive(Deserialize)]
struct ErrorResponse {
    error: String,
}

/// Posts the record to the relay. Any non-2xx answer counts as undelivered.
async fn send_to_relay(record: EnquiryRecord) -> Result<(), String> {
    let request = Request::post(&format!("{}/api/enquiry", config::get_backend_url()))
        .json(&record)
        .map_err(|e| format!("Failed to encode enquiry: {}", e))?;

    let response = request
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if response.ok() {
        return Ok(());
    }

    let status = response.status();
    match response.json::<ErrorResponse>().await {
        Ok(body) => Err(format!("status {}: {}", status, body.error)),
        Err(_) => Err(format!("status {}", status)),
    }
}

#[derive(Properties, PartialEq)]
pub struct EnquiryFormSectionProps {
    pub toast: ToastHandle,
}

#[function_component(EnquiryFormSection)]
pub fn enquiry_form_section(props: &EnquiryFormSectionProps) -> Html {
    let form = use_state(EnquiryForm::default);
    let submission = use_state(SubmissionState::default);
    let is_submitting = submission.is_submitting();

    let on_field = |field: EnquiryField| {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let mut next = (*form).clone();
            next.set(field, event_value(&e));
            form.set(next);
        })
    };

    let onsubmit = {
        let form = form.clone();
        let submission = submission.clone();
        let toast = props.toast.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let mut state = *submission;
            if !state.begin() {
                return;
            }
            submission.set(state);

            let mut snapshot = (*form).clone();
            let form = form.clone();
            let submission = submission.clone();
            let toast = toast.clone();

            spawn_local(async move {
                match submit_enquiry(&mut snapshot, send_to_relay).await {
                    Ok(SubmitOutcome::Sent) => {
                        info!("Enquiry sent");
                        toast.show(Toast::new(SENT_MESSAGE, ToastKind::Success));
                    }
                    Ok(SubmitOutcome::Undelivered(reason)) => {
                        error!("Enquiry could not be delivered: {}", reason);
                        toast.show(Toast::new(UNDELIVERED_MESSAGE, ToastKind::Warning));
                    }
                    Err(e) => {
                        info!("Enquiry rejected before sending: {}", e);
                        toast.show(Toast::new(VALIDATION_MESSAGE, ToastKind::Error));
                    }
                }
                form.set(snapshot);
                state.finish();
                submission.set(state);
            });
        })
    };

    html! {
        <section id={ENQUIRY_SECTION_ID} class="section enquiry-section">
            <h2 class="section-title purple">{"Submit Your Enquiry"}</h2>
            <div class="card purple-border">
                <form onsubmit={onsubmit}>
                    <label>{"📝 Name *"}</label>
                    <input
                        type="text"
                        placeholder="Your full name"
                        value={form.name.clone()}
                        onchange={on_field(EnquiryField::Name)}
                        required=true
                        disabled={is_submitting}
                    />

                    <label>{"📧 Email *"}</label>
                    <input
                        type="email"
                        placeholder="your.email@example.com"
                        value={form.email.clone()}
                        onchange={on_field(EnquiryField::Email)}
                        required=true
                        disabled={is_submitting}
                    />

                    <label>{"📘 Class (e.g., 10th CBSE) *"}</label>
                    <input
                        type="text"
                        placeholder="10th CBSE"
                        value={form.class_name.clone()}
                        onchange={on_field(EnquiryField::ClassName)}
                        required=true
                        disabled={is_submitting}
                    />

                    <label>{"✍️ Type of Work *"}</label>
                    <select
                        onchange={on_field(EnquiryField::WorkType)}
                        required=true
                        disabled={is_submitting}
                    >
                        <option value="" selected={form.work_type.is_empty()}>{"Select type"}</option>
                        {
                            WorkType::ALL.iter().map(|work_type| html! {
                                <option
                                    value={work_type.as_str()}
                                    selected={form.work_type == work_type.as_str()}
                                >
                                    {work_type.as_str()}
                                </option>
                            }).collect::<Html>()
                        }
                    </select>

                    <label>{"📚 Subject (e.g., History) *"}</label>
                    <input
                        type="text"
                        placeholder="History"
                        value={form.subject.clone()}
                        onchange={on_field(EnquiryField::Subject)}
                        required=true
                        disabled={is_submitting}
                    />

                    <label>{"🗓️ Deadline *"}</label>
                    <input
                        type="date"
                        value={form.deadline.clone()}
                        onchange={on_field(EnquiryField::Deadline)}
                        required=true
                        disabled={is_submitting}
                    />

                    <label>{"📄 Number of Pages *"}</label>
                    <input
                        type="number"
                        min="1"
                        placeholder="8"
                        value={form.pages.clone()}
                        onchange={on_field(EnquiryField::Pages)}
                        required=true
                        disabled={is_submitting}
                    />

                    <label>{"🖼️ Extras"}</label>
                    <select onchange={on_field(EnquiryField::Extras)} disabled={is_submitting}>
                        {
                            Extras::ALL.iter().map(|extras| html! {
                                <option value={extras.as_str()} selected={form.extras == *extras}>
                                    {extras.as_str()}
                                </option>
                            }).collect::<Html>()
                        }
                    </select>

                    <label>{"💬 Special Instructions"}</label>
                    <textarea
                        rows="4"
                        placeholder="Any special requirements or instructions..."
                        value={form.instructions.clone()}
                        onchange={on_field(EnquiryField::Instructions)}
                        disabled={is_submitting}
                    />

                    <button type="submit" class="submit-button" disabled={is_submitting}>
                        {
                            if is_submitting {
                                html! { <><span class="loading-spinner"></span>{" Submitting..."}</> }
                            } else {
                                html! { {"Submit Enquiry ✅"} }
                            }
                        }
                    </button>
                </form>

                <div class="enquiry-terms">
                    <p>{"✅ We'll reply with the cost and UPI details"}</p>
                    <p>{"💰 Full payment before delivery"}</p>
                    <p>{"⚡ Delivery within 1-3 days depending upon the page"}</p>
                    <p>{"🚀 Extra payment for work to be done within 24 hours"}</p>
                </div>
            </div>
        </section>
    }
}
