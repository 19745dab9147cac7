use std::rc::Rc;

use gloo_console::log;
use gloo_timers::callback::Timeout;
use shared_data::{ProductType, Quantity, QuoteField, QuoteForm, SubmitStatus};
use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::lead_store::LeadStore;

// How long the success/failure banner stays up before clearing itself
const STATUS_DISMISS_MS: u32 = 5_000;

#[derive(Debug)]
enum FormMsg {
	Edit(QuoteField, String),
	// a submit attempt validates a snapshot of the form and hands the whole
	// checked thing back - errors populated, maybe now Submitting
	Checked(QuoteForm),
	Resolved(bool),
	DismissStatus
}

#[derive(Default, PartialEq)]
struct FormState(QuoteForm);

impl Reducible for FormState {
	type Action = FormMsg;

	fn reduce(self: Rc<Self>, action: FormMsg) -> Rc<Self> {
		let mut form = self.0.clone();

		match action {
			FormMsg::Edit(field, value) => form.edit(field, value),
			FormMsg::Checked(checked) => form = checked,
			FormMsg::Resolved(succeeded) => form.finish_submit(succeeded),
			FormMsg::DismissStatus => form.dismiss_status()
		}

		Rc::new(Self(form))
	}
}

#[derive(Properties, PartialEq)]
pub struct QuoteFormProps {
	// where captured leads actually go; the page hands this in so tests (or
	// a page with no backend at all) can swap it out
	#[prop_or_default]
	pub store: LeadStore
}

#[function_component(QuoteFormSection)]
pub fn quote_form_section(props: &QuoteFormProps) -> Html {
	let form = use_reducer_eq(FormState::default);

	// The pending banner-dismiss timer. Success and failure each arm a fresh
	// one; replacing the old timer drops it, which cancels it, so only the
	// newest banner ever gets dismissed.
	let dismiss_timer = use_mut_ref(|| Option::<Timeout>::None);

	// And if the whole form gets torn down, cancel whatever timer is left so
	// a late callback can't poke a dead component
	{
		let timer = dismiss_timer.clone();
		use_effect_with((), move |_| move || { timer.borrow_mut().take(); });
	}

	let submitting = form.0.status == SubmitStatus::Submitting;

	macro_rules! edit_callback {
		($field:ident, $el:ty) => {{
			let form = form.clone();
			Callback::from(move |e: InputEvent| if let Some(input) = e.target()
				.and_then(|t| t.dyn_into::<$el>().ok()) {
					form.dispatch(FormMsg::Edit(QuoteField::$field, input.value()));
				}
			)
		}};
	}

	macro_rules! select_callback {
		($field:ident) => {{
			let form = form.clone();
			Callback::from(move |e: Event| if let Some(select) = e.target()
				.and_then(|t| t.dyn_into::<HtmlSelectElement>().ok()) {
					form.dispatch(FormMsg::Edit(QuoteField::$field, select.value()));
				}
			)
		}};
	}

	let name_callback = edit_callback!(Name, HtmlInputElement);
	let company_callback = edit_callback!(Company, HtmlInputElement);
	let email_callback = edit_callback!(Email, HtmlInputElement);
	let phone_callback = edit_callback!(Phone, HtmlInputElement);
	let message_callback = edit_callback!(Message, HtmlTextAreaElement);
	let product_callback = select_callback!(ProductType);
	let quantity_callback = select_callback!(Quantity);

	let onsubmit = {
		let form = form.clone();
		let store = props.store.clone();
		let timer = dismiss_timer.clone();

		Callback::from(move |e: SubmitEvent| {
			e.prevent_default();

			// The controller refuses to hand out a record while an earlier
			// insert is still in flight, so clicking submit twice can never
			// produce two requests (the button is disabled too, but belts and
			// suspenders are free here)
			let mut checked = form.0.clone();
			let record = checked.try_begin_submit();
			form.dispatch(FormMsg::Checked(checked));

			let Some(record) = record else { return };

			let form = form.clone();
			let store = store.clone();
			let timer = timer.clone();

			wasm_bindgen_futures::spawn_local(async move {
				let succeeded = match store.insert(&record).await {
					Ok(()) => true,
					Err(err) => {
						log!(format!("Couldn't submit quote request: {err:?}"));
						false
					}
				};

				form.dispatch(FormMsg::Resolved(succeeded));

				let dismiss = form.clone();
				*timer.borrow_mut() = Some(Timeout::new(STATUS_DISMISS_MS, move || {
					dismiss.dispatch(FormMsg::DismissStatus);
				}));
			});
		})
	};

	fn field_error(err: Option<&'static str>) -> Html {
		match err {
			Some(msg) => html! { <span class="form-error">{ msg }</span> },
			None => html! {}
		}
	}

	let banner = match form.0.status {
		SubmitStatus::Succeeded => html! {
			<div class="form-message success">
				{ "Thanks! We'll contact you within 24 hours with your direct manufacturer quote." }
			</div>
		},
		SubmitStatus::Failed => html! {
			<div class="form-message failure">
				{ "Something went wrong. Please try again or call us directly at (267) 212-1034." }
			</div>
		},
		SubmitStatus::Idle | SubmitStatus::Submitting => html! {}
	};

	html! {
		<>
			<style>
			{
				"
				#quote-form {
					max-width: 640px;
					margin: 0 auto;
					display: flex;
					flex-direction: column;
				}
				#quote-form label {
					margin: 12px 0 4px 0;
					color: var(--secondary-text);
				}
				.form-error {
					color: var(--error-text);
					margin-top: 4px;
					font-size: 14px;
				}
				.form-message {
					border-radius: 4px;
					padding: 12px 16px;
					margin-bottom: 16px;
				}
				.form-message.success {
					border: 1px solid var(--success-text);
					color: var(--success-text);
				}
				.form-message.failure {
					border: 1px solid var(--error-text);
					color: var(--error-text);
				}
				#quote-form button {
					margin-top: 20px;
				}
				"
			}
			</style>
			<form id="quote-form" onsubmit={ onsubmit }>
				{ banner }

				<label for="name">{ "Full Name *" }</label>
				<input
					id="name"
					placeholder="John Smith"
					value={ form.0.name.clone() }
					oninput={ name_callback }
					disabled={ submitting }
				/>
				{ field_error(form.0.errors.name) }

				<label for="company">{ "Company *" }</label>
				<input
					id="company"
					placeholder="ABC Construction"
					value={ form.0.company.clone() }
					oninput={ company_callback }
					disabled={ submitting }
				/>
				{ field_error(form.0.errors.company) }

				<label for="email">{ "Email *" }</label>
				<input
					id="email"
					type="email"
					placeholder="john@company.com"
					value={ form.0.email.clone() }
					oninput={ email_callback }
					disabled={ submitting }
				/>
				{ field_error(form.0.errors.email) }

				<label for="phone">{ "Phone *" }</label>
				<input
					id="phone"
					type="tel"
					placeholder="(267) 212-1034"
					value={ form.0.phone.clone() }
					oninput={ phone_callback }
					disabled={ submitting }
				/>
				{ field_error(form.0.errors.phone) }

				<label for="product-type">{ "Product Type *" }</label>
				<select id="product-type" onchange={ product_callback } disabled={ submitting }>
					<option value="" selected={ form.0.product_type.is_empty() }>{ "Select Product" }</option>
					{
						ProductType::ALL.into_iter().map(|product| html! {
							<option
								value={ product.as_str() }
								selected={ form.0.product_type == product.as_str() }
							>{ product.label() }</option>
						}).collect::<Html>()
					}
				</select>
				{ field_error(form.0.errors.product_type) }

				<label for="quantity">{ "Estimated Quantity" }</label>
				<select id="quantity" onchange={ quantity_callback } disabled={ submitting }>
					<option value="" selected={ form.0.quantity.is_empty() }>{ "Select Quantity" }</option>
					{
						Quantity::ALL.into_iter().map(|quantity| html! {
							<option
								value={ quantity.as_str() }
								selected={ form.0.quantity == quantity.as_str() }
							>{ quantity.label() }</option>
						}).collect::<Html>()
					}
				</select>

				<label for="message">{ "Current Supplier Quote (Optional)" }</label>
				<textarea
					id="message"
					placeholder="Share your current pricing or supplier quote for us to beat..."
					value={ form.0.message.clone() }
					oninput={ message_callback }
					disabled={ submitting }
				/>

				<button type="submit" disabled={ submitting }>
					{
						if submitting {
							"Submitting Quote Request..."
						} else {
							"Get Direct Manufacturer Quote"
						}
					}
				</button>
			</form>
		</>
	}
}
