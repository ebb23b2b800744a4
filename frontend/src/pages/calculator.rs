use log::info;
use yew::prelude::*;

use crate::components::toast::{Toast, ToastHandle, ToastKind};
use crate::pages::common::{event_value, CALCULATOR_SECTION_ID};
use crate::pricing::{
    subject_multiplier, CalculatorField, CalculatorForm, PriceQuote, Urgency, WorkType,
    SUBJECT_GROUPS, UNGROUPED_SUBJECTS,
};

#[derive(Properties, PartialEq)]
pub struct PriceCalculatorProps {
    pub toast: ToastHandle,
}

fn subject_option(subject: &str) -> Html {
    html! {
        <option value={subject.to_string()}>
            {format!("{} (×{:.1})", subject, subject_multiplier(subject))}
        </option>
    }
}

fn render_breakdown(quote: &PriceQuote) -> Html {
    html! {
        <div class="price-breakdown">
            <h3>{"Price Breakdown 📊"}</h3>
            <div class="breakdown-grid">
                <div class="breakdown-label">{"Work Type:"}</div>
                <div>{quote.work_type.as_str()}</div>
                <div class="breakdown-label">{"Subject:"}</div>
                <div>{&quote.subject}</div>
                <div class="breakdown-label">{"Total Pages:"}</div>
                <div>{format!("{} pages", quote.pages)}</div>
                <div class="breakdown-label">{"Base Price:"}</div>
                <div>{format!("₹{}/page", quote.base_price_per_page)}</div>
                <div class="breakdown-label">{"Subject Multiplier:"}</div>
                <div>{format!("×{}", quote.subject_multiplier)}</div>
                <div class="breakdown-label">{"Subtotal:"}</div>
                <div>{format!("₹{}", quote.subtotal)}</div>
                <div class="breakdown-label">{"Delivery:"}</div>
                <div>{quote.urgency.delivery_label()}</div>
            </div>
            <div class="breakdown-total">
                <span>{"Total Estimated Price:"}</span>
                <span class="total-amount">{format!("₹{}", quote.total)}</span>
            </div>
            <p class="breakdown-note">
                {"💡 This is an estimate. Final price may vary based on complexity and special requirements."}
            </p>
        </div>
    }
}

#[function_component(PriceCalculator)]
pub fn price_calculator(props: &PriceCalculatorProps) -> Html {
    let form = use_state(CalculatorForm::default);
    let quote = use_state(|| None::<PriceQuote>);

    let on_field = |field: CalculatorField| {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let mut next = (*form).clone();
            next.set(field, event_value(&e));
            form.set(next);
        })
    };

    let on_calculate = {
        let form = form.clone();
        let quote = quote.clone();
        let toast = props.toast.clone();
        Callback::from(move |_: MouseEvent| match form.quote() {
            Ok(result) => {
                info!("Calculated quote: {} for {} pages", result.total, result.pages);
                quote.set(Some(result));
                toast.show(Toast::new("💰 Price calculated successfully!", ToastKind::Success));
            }
            Err(e) => {
                info!("Calculator rejected input: {}", e);
                toast.show(Toast::new("⚠️ Please fill in all calculator fields!", ToastKind::Error));
            }
        })
    };

    html! {
        <section id={CALCULATOR_SECTION_ID} class="section calculator-section">
            <h2 class="section-title green">{"Price Calculator 💰"}</h2>
            <div class="card green-border">
                <p class="card-intro">{"Get an instant estimate for your assignment or notebook work!"}</p>

                <label>{"✍️ Type of Work *"}</label>
                <select onchange={on_field(CalculatorField::WorkType)}>
                    <option value="" selected={form.work_type.is_empty()}>{"Select type"}</option>
                    {
                        WorkType::ALL.iter().map(|work_type| html! {
                            <option
                                value={work_type.as_str()}
                                selected={form.work_type == work_type.as_str()}
                            >
                                {format!("{} (₹{}/page base)", work_type.as_str(), work_type.base_price_per_page())}
                            </option>
                        }).collect::<Html>()
                    }
                </select>

                <label>{"📚 Subject *"}</label>
                <select onchange={on_field(CalculatorField::Subject)}>
                    <option value="" selected={form.subject.is_empty()}>{"Select subject"}</option>
                    {
                        SUBJECT_GROUPS.iter().map(|(group, subjects)| html! {
                            <optgroup label={*group}>
                                { subjects.iter().map(|s| subject_option(s)).collect::<Html>() }
                            </optgroup>
                        }).collect::<Html>()
                    }
                    { UNGROUPED_SUBJECTS.iter().map(|s| subject_option(s)).collect::<Html>() }
                </select>

                <label>{"📄 Number of Pages *"}</label>
                <input
                    type="number"
                    min="1"
                    placeholder="Enter number of pages"
                    value={form.pages.clone()}
                    onchange={on_field(CalculatorField::Pages)}
                />

                <label>{"⚡ Delivery Urgency *"}</label>
                <select onchange={on_field(CalculatorField::Urgency)}>
                    <option value={Urgency::Normal.as_str()} selected={form.urgency == Urgency::Normal}>
                        {"Normal (1-3 days) - Standard Price"}
                    </option>
                    <option value={Urgency::Express.as_str()} selected={form.urgency == Urgency::Express}>
                        {"Express (24 hours) - +50% Extra"}
                    </option>
                </select>

                <button class="calculate-button" onclick={on_calculate}>{"Calculate Price 🧮"}</button>

                {
                    if let Some(result) = (*quote).as_ref() {
                        render_breakdown(result)
                    } else {
                        html! {}
                    }
                }
            </div>
        </section>
    }
}
